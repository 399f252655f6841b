use crate::error::HarnessError;
use crate::host::display_name;
use crate::input::Input;
use tracing::{debug, warn};

/// The test currently running, as seen by the dispatcher.
///
/// This is the boundary to whatever test runtime hosts the run. The runtime owns
/// pass/fail reporting, naming policy and scheduling; the dispatcher only asks it
/// for the capabilities below.
pub trait TestContext {
    /// Marks the calling frame as a helper so failures point at the caller.
    ///
    /// Optional. The default does nothing.
    fn helper(&self) {}

    /// Records an error against this test without stopping it.
    fn error(&mut self, message: &str);

    /// The native sub-test handle, or `None` when this context was built
    /// outside a runtime that can register sub-tests.
    fn sub_tests(&mut self) -> Option<&mut dyn SubTests>;
}

/// Native sub-test registration.
pub trait SubTests {
    /// Registers a sub-test called `name` and runs `body` with its own context.
    ///
    /// The host decides when and where `body` runs. Returns whether the
    /// sub-test passed, as far as the host knows when `run` returns.
    fn run(&mut self, name: &str, body: &mut dyn FnMut(&mut dyn TestContext)) -> bool;
}

/// Runs `test_fn` once per element of `test_set`, each as its own sub-test.
///
/// Sub-tests are named after the element's [`Input::label`] and receive the
/// element's index and an owned copy of its value. A failing sub-test never
/// stops the ones after it.
///
/// If `ctx` cannot register sub-tests, the error is reported once through
/// `ctx.error`, nothing runs, and [`HarnessError::HostUnavailable`] is returned.
///
/// ```
/// use fuzzkit_core::host::SubTestRunner;
/// use fuzzkit_core::{runner, strings};
///
/// let mut t = SubTestRunner::new();
/// runner::run_tests(&mut t, &strings::usernames(), |t, _index, name| {
///     if name.is_empty() {
///         t.error("username must not be empty");
///     }
/// })
/// .unwrap();
/// t.assert_passed();
/// ```
pub fn run_tests<I, F>(
    ctx: &mut dyn TestContext,
    test_set: &[I],
    mut test_fn: F,
) -> Result<(), HarnessError>
where
    I: Input,
    F: FnMut(&mut dyn TestContext, usize, I),
{
    ctx.helper();

    let Some(host) = ctx.sub_tests() else {
        warn!("test context has no sub-test support, skipping {} inputs", test_set.len());
        ctx.error(&HarnessError::HostUnavailable.to_string());
        return Err(HarnessError::HostUnavailable);
    };

    for (index, value) in test_set.iter().enumerate() {
        let name = value.label();
        debug!(index, name = %display_name(&name), "running sub-test");

        let passed = host.run(&name, &mut |sub: &mut dyn TestContext| {
            sub.helper();
            test_fn(sub, index, value.clone());
        });

        if !passed {
            warn!(index, name = %display_name(&name), "sub-test failed");
        }
    }

    Ok(())
}

/// [`run_tests`] for boolean sets.
pub fn run_bool_tests<F>(
    ctx: &mut dyn TestContext,
    test_set: &[bool],
    test_fn: F,
) -> Result<(), HarnessError>
where
    F: FnMut(&mut dyn TestContext, usize, bool),
{
    run_tests(ctx, test_set, test_fn)
}

/// [`run_tests`] for string sets.
pub fn run_string_tests<F>(
    ctx: &mut dyn TestContext,
    test_set: &[String],
    test_fn: F,
) -> Result<(), HarnessError>
where
    F: FnMut(&mut dyn TestContext, usize, String),
{
    run_tests(ctx, test_set, test_fn)
}
