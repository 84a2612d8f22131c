/// Verdict shown on a finished screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub emoji: &'static str,
    pub message: &'static str,
}

impl Rating {
    pub const fn new(emoji: &'static str, message: &'static str) -> Self {
        Self { emoji, message }
    }
}
