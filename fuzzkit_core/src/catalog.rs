//! Catalog sets addressable by name, for configuration files and the CLI.

use crate::error::HarnessError;
use crate::{bools, strings};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringSet {
    Empty,
    Numeric,
    Usernames,
    EmailAddresses,
    HtmlTags,
    Long,
    Full,
}

impl StringSet {
    pub const ALL: [StringSet; 7] = [
        StringSet::Empty,
        StringSet::Numeric,
        StringSet::Usernames,
        StringSet::EmailAddresses,
        StringSet::HtmlTags,
        StringSet::Long,
        StringSet::Full,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StringSet::Empty => "empty",
            StringSet::Numeric => "numeric",
            StringSet::Usernames => "usernames",
            StringSet::EmailAddresses => "email-addresses",
            StringSet::HtmlTags => "html-tags",
            StringSet::Long => "long",
            StringSet::Full => "full",
        }
    }

    /// Whether the set contains random strings.
    pub fn is_random(&self) -> bool {
        matches!(self, StringSet::Long | StringSet::Full)
    }

    pub fn generate(&self) -> Vec<String> {
        self.generate_with(&mut rand::rng())
    }

    /// Builds the set, drawing any random strings from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        match self {
            StringSet::Empty => strings::empty(),
            StringSet::Numeric => strings::numeric(),
            StringSet::Usernames => strings::usernames(),
            StringSet::EmailAddresses => strings::email_addresses(),
            StringSet::HtmlTags => strings::html_tags(),
            StringSet::Long => strings::long_with(rng),
            StringSet::Full => strings::full_with(rng),
        }
    }
}

impl fmt::Display for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StringSet {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StringSet::ALL
            .into_iter()
            .find(|set| set.name() == s)
            .ok_or_else(|| HarnessError::UnknownSet(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolSet {
    Full,
}

impl BoolSet {
    pub const ALL: [BoolSet; 1] = [BoolSet::Full];

    pub fn name(&self) -> &'static str {
        match self {
            BoolSet::Full => "full",
        }
    }

    pub fn generate(&self) -> Vec<bool> {
        match self {
            BoolSet::Full => bools::full(),
        }
    }
}

impl fmt::Display for BoolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoolSet {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolSet::ALL
            .into_iter()
            .find(|set| set.name() == s)
            .ok_or_else(|| HarnessError::UnknownSet(s.to_string()))
    }
}
