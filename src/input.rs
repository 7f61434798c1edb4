//! Per-frame input: keys, modifiers, the input source trait, and the
//! key-to-command mapping.

use std::fmt;
use std::str::FromStr;

use crate::editable::{MoveTarget, TextEditMsg};

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Typed characters are dropped while ctrl or meta is held
    pub const fn suppresses_typing(self) -> bool {
        self.ctrl() || self.meta()
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Keys the engine polls every frame for auto-repeat
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Enter,
    Tab,
    A,
    C,
    V,
    X,
    Y,
    Z,
}

impl Key {
    pub const ALL: [Key; 18] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Home,
        Key::End,
        Key::PageUp,
        Key::PageDown,
        Key::Backspace,
        Key::Delete,
        Key::Enter,
        Key::Tab,
        Key::A,
        Key::C,
        Key::V,
        Key::X,
        Key::Y,
        Key::Z,
    ];
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "left" => Key::Left,
            "right" => Key::Right,
            "up" => Key::Up,
            "down" => Key::Down,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" | "pgup" => Key::PageUp,
            "pagedown" | "pgdn" => Key::PageDown,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "enter" | "return" => Key::Enter,
            "tab" => Key::Tab,
            "a" => Key::A,
            "c" => Key::C,
            "v" => Key::V,
            "x" => Key::X,
            "y" => Key::Y,
            "z" => Key::Z,
            other => return Err(format!("unknown key '{}'", other)),
        };
        Ok(key)
    }
}

/// Parse a chord such as `ctrl+shift+left`
pub fn parse_chord(chord: &str) -> Result<(Modifiers, Key), String> {
    let mut parts: Vec<&str> = chord.split('+').map(str::trim).collect();
    let key = parts
        .pop()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| format!("empty key chord '{}'", chord))?
        .parse::<Key>()?;

    let mut mods = Modifiers::NONE;
    for part in parts {
        mods = mods
            | match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => Modifiers::CTRL,
                "shift" => Modifiers::SHIFT,
                "alt" | "option" => Modifiers::ALT,
                "meta" | "cmd" | "super" => Modifiers::META,
                other => return Err(format!("unknown modifier '{}'", other)),
            };
    }
    Ok((mods, key))
}

/// Map a (repeating) key press to an engine command
pub fn key_to_msg(key: Key, mods: Modifiers) -> Option<TextEditMsg> {
    let ctrl = mods.ctrl();
    let shift = mods.shift();

    let movement = |target: MoveTarget| {
        Some(if shift {
            TextEditMsg::MoveWithSelection(target)
        } else {
            TextEditMsg::Move(target)
        })
    };

    match key {
        Key::Left if ctrl => movement(MoveTarget::WordLeft),
        Key::Right if ctrl => movement(MoveTarget::WordRight),
        Key::Left => movement(MoveTarget::Left),
        Key::Right => movement(MoveTarget::Right),
        Key::Up => movement(MoveTarget::Up),
        Key::Down => movement(MoveTarget::Down),
        Key::Home if ctrl => movement(MoveTarget::DocumentStart),
        Key::End if ctrl => movement(MoveTarget::DocumentEnd),
        Key::Home => movement(MoveTarget::LineStart),
        Key::End => movement(MoveTarget::LineEnd),
        Key::PageUp => Some(TextEditMsg::PageUp),
        Key::PageDown => Some(TextEditMsg::PageDown),

        Key::Backspace if ctrl => Some(TextEditMsg::DeleteWordBackward),
        Key::Backspace => Some(TextEditMsg::DeleteBackward),
        Key::Delete if ctrl => Some(TextEditMsg::DeleteWordForward),
        Key::Delete => Some(TextEditMsg::DeleteForward),
        Key::Enter => Some(TextEditMsg::InsertNewline),
        Key::Tab if shift => Some(TextEditMsg::Outdent),
        Key::Tab => Some(TextEditMsg::Indent),

        Key::A if ctrl => Some(TextEditMsg::SelectAll),
        Key::C if ctrl => Some(TextEditMsg::Copy),
        Key::X if ctrl => Some(TextEditMsg::Cut),
        Key::V if ctrl => Some(TextEditMsg::Paste),
        Key::Z if ctrl && shift => Some(TextEditMsg::Redo),
        Key::Z if ctrl => Some(TextEditMsg::Undo),
        Key::Y if ctrl => Some(TextEditMsg::Redo),

        // Letters without ctrl arrive as typed chars
        Key::A | Key::C | Key::V | Key::X | Key::Y | Key::Z => None,
    }
}

/// The host's view of input for one frame.
pub trait InputSource {
    /// Pointer position in widget coordinates
    fn pointer(&self) -> (f64, f64);
    /// Primary button went down this frame
    fn button_pressed(&self) -> bool;
    /// Primary button went up this frame
    fn button_released(&self) -> bool;
    /// Primary button is down
    fn button_held(&self) -> bool;
    fn key_held(&self, key: Key) -> bool;
    fn modifiers(&self) -> Modifiers;
    /// Characters typed this frame, in order
    fn typed_chars(&self) -> &[char];
    /// Wheel movement in lines, positive scrolls toward the top
    fn wheel_delta(&self) -> f64;
}

/// Plain-data input for one frame, built by hosts and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: (f64, f64),
    pub pressed: bool,
    pub released: bool,
    pub held: bool,
    pub keys: Vec<Key>,
    pub modifiers: Modifiers,
    pub typed: Vec<char>,
    pub wheel: f64,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.pointer = (x, y);
        self
    }

    /// Button goes down this frame (and is held)
    pub fn press(mut self) -> Self {
        self.pressed = true;
        self.held = true;
        self
    }

    pub fn hold(mut self) -> Self {
        self.held = true;
        self
    }

    pub fn release(mut self) -> Self {
        self.released = true;
        self.held = false;
        self
    }

    pub fn key(mut self, key: Key) -> Self {
        self.keys.push(key);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn typed(mut self, text: &str) -> Self {
        self.typed.extend(text.chars());
        self
    }

    pub fn wheel(mut self, lines: f64) -> Self {
        self.wheel = lines;
        self
    }
}

impl InputSource for FrameInput {
    fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    fn button_pressed(&self) -> bool {
        self.pressed
    }

    fn button_released(&self) -> bool {
        self.released
    }

    fn button_held(&self) -> bool {
        self.held
    }

    fn key_held(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn typed_chars(&self) -> &[char] {
        &self.typed
    }

    fn wheel_delta(&self) -> f64 {
        self.wheel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_new() {
        let mods = Modifiers::new(true, true, false, false);
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());
        assert!(!mods.meta());
        assert_eq!(mods, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(mods.to_string(), "Ctrl+Shift");
    }

    #[test]
    fn test_parse_chord() {
        assert_eq!(
            parse_chord("ctrl+shift+left"),
            Ok((Modifiers::CTRL | Modifiers::SHIFT, Key::Left))
        );
        assert_eq!(parse_chord("Enter"), Ok((Modifiers::NONE, Key::Enter)));
        assert!(parse_chord("hyper+a").is_err());
        assert!(parse_chord("ctrl+").is_err());
    }

    #[test]
    fn test_key_to_msg_movement() {
        assert_eq!(
            key_to_msg(Key::Left, Modifiers::NONE),
            Some(TextEditMsg::Move(MoveTarget::Left))
        );
        assert_eq!(
            key_to_msg(Key::Right, Modifiers::CTRL | Modifiers::SHIFT),
            Some(TextEditMsg::MoveWithSelection(MoveTarget::WordRight))
        );
        assert_eq!(
            key_to_msg(Key::End, Modifiers::CTRL),
            Some(TextEditMsg::Move(MoveTarget::DocumentEnd))
        );
    }

    #[test]
    fn test_key_to_msg_shortcuts() {
        assert_eq!(key_to_msg(Key::Z, Modifiers::CTRL), Some(TextEditMsg::Undo));
        assert_eq!(
            key_to_msg(Key::Z, Modifiers::CTRL | Modifiers::SHIFT),
            Some(TextEditMsg::Redo)
        );
        assert_eq!(key_to_msg(Key::Tab, Modifiers::SHIFT), Some(TextEditMsg::Outdent));
        assert_eq!(key_to_msg(Key::A, Modifiers::NONE), None);
    }

    #[test]
    fn test_frame_input_builder() {
        let input = FrameInput::new().at(3.0, 4.0).press().typed("ab");
        assert_eq!(input.pointer(), (3.0, 4.0));
        assert!(input.button_pressed());
        assert!(input.button_held());
        assert_eq!(input.typed_chars(), &['a', 'b']);
    }
}
