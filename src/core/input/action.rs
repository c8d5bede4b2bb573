//=========================================================================
// Actions
//=========================================================================
//
// Closed set of gameplay commands raw input is mapped onto, and whether
// each one is level- or edge-triggered.
//
//=========================================================================

//=== Trigger =============================================================

/// How an action reads its bound input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Active every frame the input is held.
    Level,

    /// Fires once, on the frame the input goes down.
    Edge,
}

//=== Action ==============================================================

/// Gameplay command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Ascend,
    Descend,
    Jump,
    ToggleFly,
    ViewTop,
    ViewSide,
    ViewOriginal,
}

impl Action {
    pub const ALL: [Action; 11] = [
        Self::MoveForward,
        Self::MoveBack,
        Self::MoveLeft,
        Self::MoveRight,
        Self::Ascend,
        Self::Descend,
        Self::Jump,
        Self::ToggleFly,
        Self::ViewTop,
        Self::ViewSide,
        Self::ViewOriginal,
    ];

    pub fn trigger(self) -> Trigger {
        match self {
            Self::MoveForward
            | Self::MoveBack
            | Self::MoveLeft
            | Self::MoveRight
            | Self::Ascend
            | Self::Descend => Trigger::Level,

            Self::Jump | Self::ToggleFly | Self::ViewTop | Self::ViewSide | Self::ViewOriginal => {
                Trigger::Edge
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn movement_is_level_triggered() {
        for action in [Action::MoveForward, Action::MoveBack, Action::MoveLeft, Action::MoveRight, Action::Ascend, Action::Descend] {
            assert_eq!(action.trigger(), Trigger::Level, "{:?}", action);
        }
    }

    #[test]
    fn toggles_and_views_are_edge_triggered() {
        for action in [Action::Jump, Action::ToggleFly, Action::ViewTop, Action::ViewSide, Action::ViewOriginal] {
            assert_eq!(action.trigger(), Trigger::Edge, "{:?}", action);
        }
    }

    #[test]
    fn all_lists_each_action_once() {
        let unique: HashSet<_> = Action::ALL.iter().collect();
        assert_eq!(unique.len(), Action::ALL.len());
    }
}
