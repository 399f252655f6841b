pub mod bools;
pub mod catalog;
pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod modify;
pub mod random;
pub mod runner;
pub mod strings;

pub use catalog::{BoolSet, StringSet};
pub use config::{FuzzkitConfig, OutputFormat};
pub use error::HarnessError;
pub use host::{DetachedContext, Outcome, RunSummary, SubTestReport, SubTestRunner};
pub use input::Input;
pub use modify::modify;
pub use random::{generate_random, generate_random_with};
pub use runner::{SubTests, TestContext, run_bool_tests, run_string_tests, run_tests};
