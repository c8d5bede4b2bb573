//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps physical keys to gameplay actions.
//
// Architecture:
//   KeyCode → HashMap → Action
//
// One action per key; several keys may share an action.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{action::Action, event::KeyCode};

//=== ActionMapper ========================================================

/// Key → action lookup table.
#[derive(Debug, Clone)]
pub struct ActionMapper {
    key_bindings: HashMap<KeyCode, Action>,
}

impl ActionMapper {
    /// Creates a mapper with no bindings.
    pub fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    /// Creates a mapper with the arena's standard layout.
    ///
    /// ```text
    /// W / S        forward (-x) / back (+x)
    /// A / D        left (+z) / right (-z)
    /// ↑ / ↓        ascend / descend (flying only)
    /// Space        jump
    /// F            toggle flying
    /// 1 / 2 / 3    top / side / original view
    /// ```
    pub fn with_default_bindings() -> Self {
        let mut mapper = Self::new();
        mapper.bind_key(KeyCode::KeyW, Action::MoveForward);
        mapper.bind_key(KeyCode::KeyS, Action::MoveBack);
        mapper.bind_key(KeyCode::KeyA, Action::MoveLeft);
        mapper.bind_key(KeyCode::KeyD, Action::MoveRight);
        mapper.bind_key(KeyCode::ArrowUp, Action::Ascend);
        mapper.bind_key(KeyCode::ArrowDown, Action::Descend);
        mapper.bind_key(KeyCode::Space, Action::Jump);
        mapper.bind_key(KeyCode::KeyF, Action::ToggleFly);
        mapper.bind_key(KeyCode::Digit1, Action::ViewTop);
        mapper.bind_key(KeyCode::Digit2, Action::ViewSide);
        mapper.bind_key(KeyCode::Digit3, Action::ViewOriginal);
        mapper
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `action`, replacing any previous binding of `key`.
    pub fn bind_key(&mut self, key: KeyCode, action: Action) -> Option<Action> {
        self.key_bindings.insert(key, action)
    }

    /// Removes the binding of `key`.
    pub fn unbind_key(&mut self, key: KeyCode) -> Option<Action> {
        self.key_bindings.remove(&key)
    }

    /// Removes every key bound to `action`.
    pub fn unbind_action(&mut self, action: Action) {
        self.key_bindings.retain(|_, bound| *bound != action);
    }

    pub fn clear(&mut self) {
        self.key_bindings.clear();
    }

    //--- Lookup -----------------------------------------------------------

    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.key_bindings.get(&key).copied()
    }

    /// Keys bound to `action`.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.key_bindings
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }

    pub fn bindings(&self) -> impl Iterator<Item = (KeyCode, Action)> + '_ {
        self.key_bindings.iter().map(|(key, action)| (*key, *action))
    }
}

impl Default for ActionMapper {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let mapper = ActionMapper::with_default_bindings();

        assert_eq!(mapper.action_for(KeyCode::KeyW), Some(Action::MoveForward));
        assert_eq!(mapper.action_for(KeyCode::KeyS), Some(Action::MoveBack));
        assert_eq!(mapper.action_for(KeyCode::KeyA), Some(Action::MoveLeft));
        assert_eq!(mapper.action_for(KeyCode::KeyD), Some(Action::MoveRight));
        assert_eq!(mapper.action_for(KeyCode::ArrowUp), Some(Action::Ascend));
        assert_eq!(mapper.action_for(KeyCode::ArrowDown), Some(Action::Descend));
        assert_eq!(mapper.action_for(KeyCode::Space), Some(Action::Jump));
        assert_eq!(mapper.action_for(KeyCode::KeyF), Some(Action::ToggleFly));
        assert_eq!(mapper.action_for(KeyCode::Digit1), Some(Action::ViewTop));
        assert_eq!(mapper.action_for(KeyCode::Digit2), Some(Action::ViewSide));
        assert_eq!(mapper.action_for(KeyCode::Digit3), Some(Action::ViewOriginal));
    }

    #[test]
    fn every_action_has_a_default_key() {
        let mapper = ActionMapper::with_default_bindings();
        for action in Action::ALL {
            assert!(mapper.keys_for(action).next().is_some(), "{:?} unbound", action);
        }
    }

    #[test]
    fn unbound_key_maps_to_nothing() {
        let mapper = ActionMapper::new();
        assert_eq!(mapper.action_for(KeyCode::Space), None);
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, Action::Jump);

        let previous = mapper.bind_key(KeyCode::Space, Action::ToggleFly);

        assert_eq!(previous, Some(Action::Jump));
        assert_eq!(mapper.action_for(KeyCode::Space), Some(Action::ToggleFly));
    }

    #[test]
    fn several_keys_can_share_an_action() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyW, Action::MoveForward);
        mapper.bind_key(KeyCode::ArrowLeft, Action::MoveForward);

        let mut keys: Vec<_> = mapper.keys_for(Action::MoveForward).collect();
        keys.sort_by_key(|k| format!("{:?}", k));
        assert_eq!(keys, vec![KeyCode::ArrowLeft, KeyCode::KeyW]);
    }

    #[test]
    fn unbind_key_and_action() {
        let mut mapper = ActionMapper::with_default_bindings();

        assert_eq!(mapper.unbind_key(KeyCode::Space), Some(Action::Jump));
        assert_eq!(mapper.action_for(KeyCode::Space), None);

        mapper.unbind_action(Action::MoveForward);
        assert!(mapper.keys_for(Action::MoveForward).next().is_none());
        assert_eq!(mapper.action_for(KeyCode::KeyS), Some(Action::MoveBack));
    }

    #[test]
    fn clear_removes_everything() {
        let mut mapper = ActionMapper::with_default_bindings();
        mapper.clear();
        assert_eq!(mapper.bindings().count(), 0);
    }
}
