//! An in-process host for [`run_tests`](crate::runner::run_tests).
//!
//! Rust's built-in test harness has no sub-tests, so [`SubTestRunner`] plays
//! that role: create one at the top of a `#[test]`, hand it to the dispatcher,
//! then call [`SubTestRunner::assert_passed`]. Each sub-test runs inline under
//! `catch_unwind`, so a panicking assertion fails only its own sub-test.
//!
//! [`DetachedContext`] is the opposite case: a context with no sub-test support.

use crate::error::HarnessError;
use crate::runner::{SubTests, TestContext};
use serde::Serialize;
use std::any::Any;
use std::borrow::Cow;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::debug;

/// Names longer than this are shortened in logs and failure messages.
const MAX_DISPLAY_NAME_CHARS: usize = 64;
/// How much of a shortened name is kept before the digest.
const DISPLAY_NAME_PREFIX_CHARS: usize = 32;

/// Shortens very long sub-test names to `<prefix>…[md5:<digest>]`.
///
/// Random inputs can be 100,000 characters long; the digest keeps distinct
/// names distinguishable without printing them.
pub fn display_name(name: &str) -> Cow<'_, str> {
    if name.chars().count() <= MAX_DISPLAY_NAME_CHARS {
        return Cow::Borrowed(name);
    }

    let prefix: String = name.chars().take(DISPLAY_NAME_PREFIX_CHARS).collect();
    Cow::Owned(format!("{prefix}…[md5:{}]", name_hash(name)))
}

fn name_hash(name: &str) -> String {
    format!("{:x}", md5::compute(name.as_bytes()))
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic type".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "messages", rename_all = "kebab-case")]
pub enum Outcome {
    Passed,
    /// Every error reported by the sub-test, plus the panic message if it panicked.
    Failed(Vec<String>),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// The result of one sub-test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubTestReport {
    /// Position among its siblings, in registration order.
    pub index: usize,
    /// Full name, including parent names joined with `/`.
    pub name: String,
    /// MD5 hex digest of `name`.
    pub input_hash: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub reports: Vec<SubTestReport>,
}

impl RunSummary {
    pub fn failed_reports(&self) -> impl Iterator<Item = &SubTestReport> {
        self.reports.iter().filter(|r| !r.outcome.is_passed())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs sub-tests inline and records their outcomes.
///
/// Sub-tests run synchronously in registration order. A sub-test fails if it
/// calls [`TestContext::error`], panics, or has a failing sub-test of its own.
/// Failures are recorded and never propagate out of [`SubTests::run`].
#[derive(Debug, Default)]
pub struct SubTestRunner {
    name: String,
    errors: Vec<String>,
    next_index: usize,
    reports: Vec<SubTestReport>,
}

impl SubTestRunner {
    pub fn new() -> Self {
        Self::default()
    }

    fn child(&self, name: &str) -> Self {
        let name = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.name, name)
        };

        Self {
            name,
            ..Self::default()
        }
    }

    /// Errors reported directly on this context, outside any sub-test.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn reports(&self) -> &[SubTestReport] {
        &self.reports
    }

    pub fn summary(&self) -> RunSummary {
        let passed = self
            .reports
            .iter()
            .filter(|r| r.outcome.is_passed())
            .count();

        RunSummary {
            total: self.reports.len(),
            passed,
            failed: self.reports.len() - passed,
            reports: self.reports.clone(),
        }
    }

    /// The summary if everything passed, otherwise the reason it did not.
    ///
    /// Errors reported on this context itself take precedence over sub-test
    /// failures.
    pub fn check(&self) -> Result<RunSummary, HarnessError> {
        if !self.errors.is_empty() {
            return Err(HarnessError::Reported(self.errors.clone()));
        }

        let summary = self.summary();
        if summary.failed > 0 {
            return Err(HarnessError::SubTestsFailed {
                failed: summary.failed,
                total: summary.total,
                names: summary
                    .failed_reports()
                    .map(|r| display_name(&r.name).into_owned())
                    .collect(),
            });
        }

        Ok(summary)
    }

    pub fn finish(self) -> Result<RunSummary, HarnessError> {
        self.check()
    }

    /// Panics with the failing sub-tests and their messages if anything failed.
    #[track_caller]
    pub fn assert_passed(&self) {
        if let Err(e) = self.check() {
            let details: Vec<String> = self
                .reports
                .iter()
                .filter_map(|r| match &r.outcome {
                    Outcome::Passed => None,
                    Outcome::Failed(messages) => Some(format!(
                        "  {}: {}",
                        display_name(&r.name),
                        messages.join("; ")
                    )),
                })
                .collect();
            panic!("{e}\n{}", details.join("\n"));
        }
    }
}

impl TestContext for SubTestRunner {
    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn sub_tests(&mut self) -> Option<&mut dyn SubTests> {
        Some(self)
    }
}

impl SubTests for SubTestRunner {
    fn run(&mut self, name: &str, body: &mut dyn FnMut(&mut dyn TestContext)) -> bool {
        let mut sub = self.child(name);

        let result = catch_unwind(AssertUnwindSafe(|| body(&mut sub)));

        let mut messages = std::mem::take(&mut sub.errors);
        if let Err(payload) = result {
            messages.push(panic_message(payload));
        }
        let nested_passed = sub.reports.iter().all(|r| r.outcome.is_passed());

        let outcome = if messages.is_empty() && nested_passed {
            Outcome::Passed
        } else {
            if messages.is_empty() {
                messages.push("a nested sub-test failed".to_string());
            }
            Outcome::Failed(messages)
        };
        let passed = outcome.is_passed();

        debug!(name = %display_name(&sub.name), passed, "sub-test finished");

        let index = self.next_index;
        self.next_index += 1;
        self.reports.push(SubTestReport {
            index,
            input_hash: name_hash(&sub.name),
            name: sub.name,
            outcome,
        });
        self.reports.extend(sub.reports);

        passed
    }
}

/// A context constructed outside any sub-test capable runtime.
///
/// It only collects errors. Handing it to the dispatcher reports
/// [`HarnessError::HostUnavailable`] and runs nothing.
#[derive(Debug, Default)]
pub struct DetachedContext {
    errors: Vec<String>,
}

impl DetachedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl TestContext for DetachedContext {
    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn sub_tests(&mut self) -> Option<&mut dyn SubTests> {
        None
    }
}
