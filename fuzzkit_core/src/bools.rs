/// Both boolean values, `true` first.
pub fn full() -> Vec<bool> {
    vec![true, false]
}
