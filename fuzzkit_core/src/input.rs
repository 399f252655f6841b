/// An element of a test set.
///
/// Every value handed to a sub-test implements `Input`. The label is the name
/// the sub-test is registered under, so two equal values produce the same
/// label; whether that collides is up to the host.
pub trait Input: Clone + Send + Sync + std::fmt::Debug + 'static {
    fn label(&self) -> String;
}

impl Input for bool {
    fn label(&self) -> String {
        self.to_string()
    }
}

impl Input for String {
    fn label(&self) -> String {
        self.clone()
    }
}
