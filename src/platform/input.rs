//! Input normalization
//!
//! Key and pointer presses both map to one primary action. A physical press
//! yields one action: auto-repeat from a held key is swallowed until the key
//! is released.

/// `KeyboardEvent.code` of the designated key
pub const PRIMARY_KEY: &str = "Space";

/// How the host should treat a key event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// Forward a primary action to the game
    pub action: bool,
    /// Suppress the browser default (page scroll on Space)
    pub prevent_default: bool,
}

/// Tracks held state of the designated key
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    key_held: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. `repeat` is the host's auto-repeat flag.
    pub fn key_down(&mut self, code: &str, repeat: bool) -> KeyResponse {
        if code != PRIMARY_KEY {
            return KeyResponse::default();
        }
        let fresh = !self.key_held && !repeat;
        self.key_held = true;
        KeyResponse {
            action: fresh,
            prevent_default: true,
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if code == PRIMARY_KEY {
            self.key_held = false;
        }
    }

    /// Pointer (mouse, touch, pen) pressed. Only the primary button counts.
    pub fn pointer_down(&self, button: i16) -> bool {
        button == 0
    }

    /// Focus lost: the key-up may never arrive
    pub fn reset(&mut self) {
        self.key_held = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_action_per_physical_press() {
        let mut input = InputAdapter::new();
        assert!(input.key_down(PRIMARY_KEY, false).action);
        // Auto-repeat while held
        assert!(!input.key_down(PRIMARY_KEY, true).action);
        // Hosts that do not flag repeats
        assert!(!input.key_down(PRIMARY_KEY, false).action);
        input.key_up(PRIMARY_KEY);
        assert!(input.key_down(PRIMARY_KEY, false).action);
    }

    #[test]
    fn test_primary_key_always_suppresses_scroll() {
        let mut input = InputAdapter::new();
        assert!(input.key_down(PRIMARY_KEY, false).prevent_default);
        assert!(input.key_down(PRIMARY_KEY, true).prevent_default);
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut input = InputAdapter::new();
        assert_eq!(input.key_down("KeyA", false), KeyResponse::default());
        assert_eq!(input.key_down("Enter", false), KeyResponse::default());
        // Unrelated key-up does not release the primary key
        input.key_down(PRIMARY_KEY, false);
        input.key_up("KeyA");
        assert!(!input.key_down(PRIMARY_KEY, false).action);
    }

    #[test]
    fn test_pointer_primary_button_only() {
        let input = InputAdapter::new();
        assert!(input.pointer_down(0));
        assert!(!input.pointer_down(2));
    }

    #[test]
    fn test_reset_releases_key() {
        let mut input = InputAdapter::new();
        input.key_down(PRIMARY_KEY, false);
        input.reset();
        assert!(input.key_down(PRIMARY_KEY, false).action);
    }
}
