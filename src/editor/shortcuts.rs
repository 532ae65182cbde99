#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Cmd on macOS, the Windows/Super key elsewhere.
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: Key, meta: bool) -> Self {
        Self { key, meta }
    }

    pub fn meta(key: Key) -> Self {
        Self::new(key, true)
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Meta+E, always available.
    ToggleEditing,
    /// Meta+Enter, only while the editing panel is open.
    AddSkill,
}

impl Shortcut {
    pub fn match_press(press: KeyPress, editing: bool) -> Option<Shortcut> {
        if !press.meta {
            return None;
        }
        match press.key {
            Key::Char('e') => Some(Shortcut::ToggleEditing),
            Key::Enter if editing => Some(Shortcut::AddSkill),
            _ => None,
        }
    }
}
