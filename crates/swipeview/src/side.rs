//! Row sides and per-side swipe states.

/// Which edge of the row a set of actions belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeSide {
    Leading,
    Trailing,
}

/// Horizontal anchoring of a side's action stack inside its visible frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Start,
    End,
}

impl SwipeSide {
    pub const ALL: [SwipeSide; 2] = [SwipeSide::Leading, SwipeSide::Trailing];

    /// Sign of offsets that reveal this side: dragging right reveals leading.
    pub fn sign(self) -> f32 {
        match self {
            SwipeSide::Leading => 1.0,
            SwipeSide::Trailing => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            SwipeSide::Leading => SwipeSide::Trailing,
            SwipeSide::Trailing => SwipeSide::Leading,
        }
    }

    /// The side an offset reveals, or `None` for a zero offset.
    pub fn from_offset(offset: f32) -> Option<Self> {
        if offset > 0.0 {
            Some(SwipeSide::Leading)
        } else if offset < 0.0 {
            Some(SwipeSide::Trailing)
        } else {
            None
        }
    }

    pub fn alignment(self) -> HorizontalAlignment {
        match self {
            SwipeSide::Leading => HorizontalAlignment::Start,
            SwipeSide::Trailing => HorizontalAlignment::End,
        }
    }

    /// Anchor of the single full-width action while triggering.
    pub fn edge_trigger_alignment(self) -> HorizontalAlignment {
        match self {
            SwipeSide::Leading => HorizontalAlignment::End,
            SwipeSide::Trailing => HorizontalAlignment::Start,
        }
    }

    /// Index of the outermost action: first for leading, last for trailing.
    pub fn edge_action_index(self, action_count: usize) -> Option<usize> {
        if action_count == 0 {
            return None;
        }
        match self {
            SwipeSide::Leading => Some(0),
            SwipeSide::Trailing => Some(action_count - 1),
        }
    }
}

/// Per-side state. `Option<SwipeState>::None` means no directive yet and is
/// distinct from `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeState {
    Closed,
    Expanded,
    /// Armed during a live drag; release commits to `Triggered`.
    Triggering,
    Triggered,
}

impl SwipeState {
    pub fn is_open(self) -> bool {
        !matches!(self, SwipeState::Closed)
    }

    pub fn shows_edge_action_only(self) -> bool {
        matches!(self, SwipeState::Triggering | SwipeState::Triggered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_offset_follows_sign() {
        assert_eq!(SwipeSide::from_offset(3.0), Some(SwipeSide::Leading));
        assert_eq!(SwipeSide::from_offset(-0.5), Some(SwipeSide::Trailing));
        assert_eq!(SwipeSide::from_offset(0.0), None);
    }

    #[test]
    fn edge_action_is_outermost() {
        assert_eq!(SwipeSide::Leading.edge_action_index(3), Some(0));
        assert_eq!(SwipeSide::Trailing.edge_action_index(3), Some(2));
        assert_eq!(SwipeSide::Trailing.edge_action_index(0), None);
    }

    #[test]
    fn alignments_mirror() {
        for side in SwipeSide::ALL {
            assert_ne!(side.alignment(), side.edge_trigger_alignment());
            assert_eq!(side.opposite().sign(), -side.sign());
        }
    }
}
