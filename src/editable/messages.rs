//! Commands accepted by `TextEditEngine::apply`.

/// Where a cursor move lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Previous char, or the selection start when one is active
    Left,
    /// Next char, or the selection end when one is active
    Right,
    /// Same column on the line above, clamped to its length
    Up,
    Down,
    LineStart,
    LineEnd,
    /// Skips separators, then the word before the cursor
    WordLeft,
    WordRight,
    DocumentStart,
    DocumentEnd,
}

impl MoveTarget {
    /// Vertical moves keep the desired column alive between presses
    pub fn is_vertical(self) -> bool {
        matches!(self, MoveTarget::Up | MoveTarget::Down)
    }
}

/// Every command the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // --- cursor ---
    /// Collapses any selection
    Move(MoveTarget),
    /// Anchors at the pre-move cursor when nothing is selected
    MoveWithSelection(MoveTarget),

    // --- editing ---
    /// Replaces the selection if there is one
    InsertChar(char),
    InsertText(String),
    InsertNewline,

    DeleteBackward,
    DeleteForward,
    /// Ctrl+Backspace
    DeleteWordBackward,
    /// Ctrl+Delete
    DeleteWordForward,

    // --- selection ---
    SelectAll,
    /// Select the word under a byte offset (double click)
    SelectWordAt(usize),
    /// Select the line under a byte offset (triple click)
    SelectLineAt(usize),

    Indent,
    Outdent,

    // --- clipboard and history ---
    Copy,
    Cut,
    Paste,

    Undo,
    Redo,

    // --- viewport ---
    PageUp,
    PageDown,
    /// Scroll by a number of lines (negative scrolls up)
    ScrollBy(isize),
    /// New widget size in pointer units
    Resize { width: f64, height: f64 },
}

impl TextEditMsg {
    /// True for commands that may change the text
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertChar(_)
                | TextEditMsg::InsertText(_)
                | TextEditMsg::InsertNewline
                | TextEditMsg::DeleteBackward
                | TextEditMsg::DeleteForward
                | TextEditMsg::DeleteWordBackward
                | TextEditMsg::DeleteWordForward
                | TextEditMsg::Indent
                | TextEditMsg::Outdent
                | TextEditMsg::Cut
                | TextEditMsg::Paste
                | TextEditMsg::Undo
                | TextEditMsg::Redo
        )
    }

    /// Plain or extending cursor moves
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            TextEditMsg::Move(_) | TextEditMsg::MoveWithSelection(_)
        )
    }

    /// Scrolling and resizing; the text and cursor are untouched
    pub fn is_viewport(&self) -> bool {
        matches!(
            self,
            TextEditMsg::PageUp
                | TextEditMsg::PageDown
                | TextEditMsg::ScrollBy(_)
                | TextEditMsg::Resize { .. }
        )
    }

    /// Whether the remembered up/down column survives this command.
    /// Only consecutive vertical moves keep it.
    pub fn keeps_desired_column(&self) -> bool {
        match self {
            TextEditMsg::Move(target) | TextEditMsg::MoveWithSelection(target) => {
                target.is_vertical()
            }
            _ => false,
        }
    }
}
