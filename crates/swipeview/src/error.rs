#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeError {
    /// Options cannot be replaced while a drag session is live.
    DragInProgress,
}

impl std::fmt::Display for SwipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeError::DragInProgress => {
                write!(f, "swipe options cannot change while a drag is in progress")
            }
        }
    }
}

impl std::error::Error for SwipeError {}
