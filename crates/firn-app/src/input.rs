//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples navigation logic from terminal libraries (crossterm, termion,
/// etc.) so the state machine can be driven deterministically in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (select).
    Enter,
    /// Backspace key (back).
    Backspace,
    /// Escape key (back).
    Esc,
    /// Left arrow key (previous page).
    Left,
    /// Right arrow key (next page).
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key (first item).
    Home,
    /// End key (last item).
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Ctrl-C interrupt. Quits from any focus level.
    CtrlC,
}

impl KeyInput {
    /// Whether this key navigates back one focus level.
    pub fn is_back(self) -> bool {
        matches!(self, Self::Esc | Self::Backspace)
    }
}
