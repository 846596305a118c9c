/// FailurePolicy decides whether a validation run keeps going after a rejected dependency
///
/// `FailFast` is the default: the run stops at the first coordinate that does not
/// pass. `FailAtEnd` checks every coordinate and reports all rejections, while the
/// build still fails naming the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    FailFast,
    FailAtEnd,
}

impl FailurePolicy {
    pub fn from_fail_at_end(fail_at_end: bool) -> Self {
        if fail_at_end {
            FailurePolicy::FailAtEnd
        } else {
            FailurePolicy::FailFast
        }
    }

    /// Whether the run must stop once `failures` coordinates have been rejected
    pub fn should_stop(&self, failures: usize) -> bool {
        match self {
            FailurePolicy::FailFast => failures > 0,
            FailurePolicy::FailAtEnd => false,
        }
    }
}
