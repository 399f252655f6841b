//! String test sets.
//!
//! Every function builds a fresh `Vec` on each call. Sets containing random
//! strings have a `_with` variant taking an explicit generator; the plain
//! variant uses the thread-local one and is not reproducible.

use crate::modify::modify;
use crate::random::generate_random_with;
use rand::Rng;

/// Lengths of the strings returned by [`long`], in order.
pub const LONG_STRING_LENGTHS: [usize; 5] = [25, 50, 100, 1_000, 100_000];

/// [`full`] ends with one random string for each of these lengths.
const FULL_RANDOM_TAIL: std::ops::Range<usize> = 0..10;

/// The largest entry is `i64::MAX`.
const POSITIVE_NUMBERS: [&str; 10] = [
    "0",
    "1",
    "2",
    "3",
    "100",
    "1.1",
    "1337",
    "13.37",
    "0.000000000001",
    "9223372036854775807",
];

const USERNAMES: [&str; 10] = [
    "MarvinJWendt",
    "Zipper1337",
    "n00b",
    "l33t",
    "j0rgan",
    "test",
    "test123",
    "TEST",
    "test_",
    "TEST_",
];

// Fixture data: keep byte-for-byte. Several entries only stay valid because of
// an exact quote, backslash or trailing space.
const EMAIL_ADDRESSES: [&str; 38] = [
    "hello@world.com",
    "hello+world@example.com",
    "hello.world@example.com",
    "a@a.xyz",
    "test@127.0.0.1",
    "test@[127.0.0.1]",
    "1@example.com",
    "_____@example.com",
    "test@subdomain.domain.xyz",
    r#"valid.”email\ address@example.com"#,
    r#"first.last@iana.org"#,
    r#"1234567890123456789012345678901234567890123456789012345678901234@iana.org"#,
    r#""first\"last"@iana.org"#,
    r#""first@last"@iana.org"#,
    r#""first\\last"@iana.org"#,
    r#"x@x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x23456789.x2"#,
    r#"1234567890123456789012345678901234567890123456789012345678@12345678901234567890123456789012345678901234567890123456789.12345678901234567890123456789012345678901234567890123456789.123456789012345678901234567890123456789012345678901234567890123.iana.org"#,
    r#"first.last@[12.34.56.78]"#,
    r#"first.last@[IPv6:::12.34.56.78]"#,
    r#"first.last@[IPv6:::b3:b4]"#,
    r#"first.last@[IPv6:::]"#,
    r#"first.last@[IPv6:1111:2222:3333::4444:12.34.56.78]"#,
    r#""first\last"@iana.org"#,
    r#"user+mailbox@iana.org"#,
    r#"customer/department@iana.org "#,
    r#"customer/department=shipping@iana.org"#,
    r#""Doug \"Ace\" L."@iana.org"#,
    r#"+1~1+@iana.org"#,
    r#"{_test_}@iana.org"#,
    r#""[[ test ]]"@iana.org"#,
    r#""test&#13;&#10; blah"@iana.org"#,
    r#"(foo)cal(bar)@(baz)iamcal.com(quux)"#,
    r#"cal(woo(yay)hoopla)@iamcal.com"#,
    r#"cal(foo\@bar)@iamcal.com"#,
    r#"cal(foo\)bar)@iamcal.com"#,
    r#"first(Welcome to&#13;&#10; the ("wonderful" (!)) world&#13;&#10; of email)@iana.org"#,
    r#"pete(his account)@silly.test(his host)"#,
    r#"c@(Chris's host.)public.example"#,
];

const HTML_TAGS: [&str; 5] = [
    "<script>alert('XSS')</script>",
    "<script>",
    r#"<a href="https://github.com/MarvinJWendt/testza">link</a>"#,
    "</body>",
    "</html>",
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// A single empty string.
pub fn empty() -> Vec<String> {
    vec![String::new()]
}

/// Numeric-looking strings: ten positive values followed by the same ten
/// prefixed with `-`.
pub fn numeric() -> Vec<String> {
    let mut numbers = owned(&POSITIVE_NUMBERS);
    let negative = modify(&numbers, |_, value| format!("-{value}"));
    numbers.extend(negative);
    numbers
}

/// Plausible usernames mixing case, digits and underscores.
pub fn usernames() -> Vec<String> {
    owned(&USERNAMES)
}

/// Email addresses that are valid per RFC 2822, many of them unusual.
///
/// Quoted local parts, comments, IP literals and very long labels are all in
/// here. A validator that rejects any of them is stricter than the RFC.
pub fn email_addresses() -> Vec<String> {
    owned(&EMAIL_ADDRESSES)
}

/// HTML and script fragments, including an XSS payload and bare closing tags.
pub fn html_tags() -> Vec<String> {
    owned(&HTML_TAGS)
}

/// Long random strings, one per entry of [`LONG_STRING_LENGTHS`].
pub fn long() -> Vec<String> {
    long_with(&mut rand::rng())
}

/// Same as [`long`], drawing from the supplied generator.
pub fn long_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    LONG_STRING_LENGTHS
        .iter()
        .flat_map(|&length| generate_random_with(rng, 1, length))
        .collect()
}

/// Every string set plus ten short random strings.
///
/// The order is fixed: usernames, HTML tags, email addresses, empty, numeric,
/// long, then random strings of length 0 through 9. This set is large; use it
/// when nothing at all should be able to crash the code under test.
pub fn full() -> Vec<String> {
    full_with(&mut rand::rng())
}

/// Same as [`full`], drawing from the supplied generator.
pub fn full_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let mut set = usernames();
    set.extend(html_tags());
    set.extend(email_addresses());
    set.extend(empty());
    set.extend(numeric());
    set.extend(long_with(rng));

    for length in FULL_RANDOM_TAIL {
        set.extend(generate_random_with(rng, 1, length));
    }

    set
}

/// Truncates a test set to at most `max` elements.
///
/// Sets already within the limit come back unchanged and `max == 0` yields an
/// empty set.
pub fn limit(mut test_set: Vec<String>, max: usize) -> Vec<String> {
    if test_set.len() <= max {
        return test_set;
    }

    test_set.truncate(max);
    test_set
}
