use crate::input::Input;

/// Returns a modified copy of a test set.
///
/// `modifier` is called once per element, in order, with the element's index
/// and value. The result always has the same length as `input_set`: nothing is
/// skipped, reordered or deduplicated, even when the modifier maps several
/// elements to the same value.
///
/// ```
/// use fuzzkit_core::{bools, modify};
///
/// let negated = modify::modify(&bools::full(), |_, value| !value);
/// assert_eq!(negated, vec![false, true]);
/// ```
pub fn modify<I, F>(input_set: &[I], modifier: F) -> Vec<I>
where
    I: Input,
    F: Fn(usize, &I) -> I,
{
    input_set
        .iter()
        .enumerate()
        .map(|(index, value)| modifier(index, value))
        .collect()
}
