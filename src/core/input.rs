use std::fmt::Display;

pub const KEY_ESCAPE: u8 = 27;

/// Keys without a character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    F(u8),
    Left,
    Up,
    Right,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
}

impl Display for SpecialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialKey::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Recognized, deliberately does nothing.
    Ignore,
    Unhandled,
}

pub fn dispatch_key(code: u8) -> KeyAction {
    match code {
        KEY_ESCAPE => KeyAction::Quit,
        _ => KeyAction::Unhandled,
    }
}

pub fn dispatch_special_key(key: SpecialKey) -> KeyAction {
    match key {
        // Arrow keys
        SpecialKey::Left | SpecialKey::Right => KeyAction::Ignore,
        _ => KeyAction::Unhandled,
    }
}
