use rand::Rng;
use rand::distr::Alphanumeric;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use tracing::trace;

/// Returns `count` random strings of exactly `length` characters.
///
/// Characters are drawn uniformly from `[a-zA-Z0-9]` using the thread-local
/// generator, so results differ between calls and between runs. Use
/// [`generate_random_with`] when the output has to be reproducible.
pub fn generate_random(count: usize, length: usize) -> Vec<String> {
    generate_random_with(&mut rand::rng(), count, length)
}

/// Same as [`generate_random`], drawing from the supplied generator.
pub fn generate_random_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    length: usize,
) -> Vec<String> {
    trace!(count, length, "generating random strings");

    (0..count)
        .map(|_| {
            (0..length)
                .map(|_| char::from(rng.sample(Alphanumeric)))
                .collect()
        })
        .collect()
}

/// A deterministic generator for reproducible test sets.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_alphanumeric(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_alphanumeric())
    }

    #[test]
    fn generates_requested_count_and_length() {
        let set = generate_random(7, 13);
        assert_eq!(set.len(), 7);
        for s in &set {
            assert_eq!(s.len(), 13, "unexpected length for {s:?}");
            assert!(is_alphanumeric(s), "non-alphanumeric char in {s:?}");
        }
    }

    #[test]
    fn zero_count_yields_empty_set() {
        assert!(generate_random(0, 0).is_empty());
        assert!(generate_random(0, 50).is_empty());
    }

    #[test]
    fn zero_length_yields_empty_strings() {
        assert_eq!(generate_random(3, 0), vec![String::new(); 3]);
    }

    #[test]
    fn same_seed_reproduces_output() {
        let first = generate_random_with(&mut seeded(42), 5, 32);
        let second = generate_random_with(&mut seeded(42), 5, 32);
        assert_eq!(first, second);

        let other = generate_random_with(&mut seeded(43), 5, 32);
        assert_ne!(first, other);
    }

    #[test]
    fn covers_the_whole_alphabet_over_many_draws() {
        let mut rng = seeded(7);
        let joined: String = generate_random_with(&mut rng, 1, 20_000).concat();

        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));

        let mut distinct: Vec<char> = joined.chars().collect();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), 62);
    }

    #[test]
    fn accepts_dyn_rng_core() {
        let mut boxed: Box<dyn rand_core::RngCore> = Box::new(seeded(1));
        let set = generate_random_with(&mut *boxed, 2, 4);
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|s| s.len() == 4 && is_alphanumeric(s)));
    }
}
