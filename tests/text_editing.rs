//! Text editing tests - insert, delete, indentation, clipboard

mod common;

use common::{clipboard, test_engine};
use editcore::editable::TextEditMsg;
use editcore::platform::{Clipboard, MemoryClipboard};

// ========================================================================
// Insertion
// ========================================================================

#[test]
fn test_typing_into_empty_buffer() {
    let mut engine = test_engine("", 0);
    engine.insert_char('h');
    engine.insert_char('i');
    assert_eq!(engine.text(), "hi");
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn test_insert_in_middle() {
    let mut engine = test_engine("held", 3);
    engine.insert_char('l');
    engine.insert_char('o');
    assert_eq!(engine.text(), "hello");
    assert_eq!(engine.cursor(), 5);
}

#[test]
fn test_insert_newline_splits_line() {
    let mut engine = test_engine("ab", 1);
    engine.insert_newline();
    assert_eq!(engine.text(), "a\nb");
    assert_eq!(engine.cursor(), 2);
    assert_eq!(engine.line_count(), 2);
}

#[test]
fn test_insert_text_multiline() {
    let mut engine = test_engine("[]", 1);
    engine.insert_text("a\nb");
    assert_eq!(engine.text(), "[a\nb]");
    assert_eq!(engine.cursor(), 4);
    assert_eq!(engine.cursor_position().line, 1);
}

#[test]
fn test_insert_multibyte_keeps_boundaries() {
    let mut engine = test_engine("", 0);
    engine.insert_text("日本");
    assert_eq!(engine.cursor(), 6);
    engine.backspace();
    assert_eq!(engine.text(), "日");
    assert_eq!(engine.cursor(), 3);
}

#[test]
fn test_insert_empty_text_is_noop() {
    let mut engine = test_engine("abc", 1);
    assert!(!engine.insert_text(""));
    assert!(!engine.can_undo());
}

// ========================================================================
// Deletion
// ========================================================================

#[test]
fn test_select_word_then_backspace() {
    let mut engine = test_engine("hello world", 0);
    engine.select_word_at(2);
    assert_eq!(engine.selected_text(), "hello");
    engine.backspace();
    assert_eq!(engine.text(), " world");
    assert_eq!(engine.cursor(), 0);
}

#[test]
fn test_backspace_joins_lines() {
    let mut engine = test_engine("ab\ncd", 3);
    engine.backspace();
    assert_eq!(engine.text(), "abcd");
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn test_delete_forward_removes_next_char() {
    let mut engine = test_engine("abc", 1);
    assert!(engine.delete_forward());
    assert_eq!(engine.text(), "ac");
    assert_eq!(engine.cursor(), 1);
}

#[test]
fn test_delete_forward_with_selection_deletes_selection() {
    let mut engine = test_engine("abcdef", 1);
    engine.extend_right();
    engine.extend_right();
    engine.delete_forward();
    assert_eq!(engine.text(), "adef");
    assert_eq!(engine.cursor(), 1);
    assert!(!engine.has_selection());
}

#[test]
fn test_ctrl_backspace_deletes_previous_word() {
    let mut engine = test_engine("foo bar baz", 11);
    engine.ctrl_backspace();
    assert_eq!(engine.text(), "foo bar ");
    engine.ctrl_backspace();
    assert_eq!(engine.text(), "foo ");
}

#[test]
fn test_ctrl_delete_deletes_next_word() {
    let mut engine = test_engine("foo bar baz", 3);
    engine.ctrl_delete();
    assert_eq!(engine.text(), "foo baz");
    assert_eq!(engine.cursor(), 3);
}

#[test]
fn test_ctrl_backspace_at_start_is_noop() {
    let mut engine = test_engine("foo", 0);
    assert!(!engine.ctrl_backspace());
    assert_eq!(engine.text(), "foo");
}

// ========================================================================
// Indentation
// ========================================================================

#[test]
fn test_indent_without_selection_inserts_unit() {
    let mut engine = test_engine("x", 0);
    engine.indent();
    assert_eq!(engine.text(), "    x");
    assert_eq!(engine.cursor(), 4);
}

#[test]
fn test_indent_skips_line_touched_at_column_zero() {
    let mut engine = test_engine("a\nb\nc", 0);
    engine.extend_down();
    engine.extend_down();
    engine.indent();
    assert_eq!(engine.text(), "    a\n    b\nc");
}

#[test]
fn test_indent_is_one_undo_step() {
    let mut engine = test_engine("a\nb\nc", 0);
    engine.select_all();
    engine.indent();
    assert_eq!(engine.text(), "    a\n    b\n    c");
    engine.undo();
    assert_eq!(engine.text(), "a\nb\nc");
}

#[test]
fn test_outdent_cursor_line() {
    let mut engine = test_engine("a\n      b", 8);
    engine.outdent();
    assert_eq!(engine.text(), "a\n  b");
    assert_eq!(engine.cursor(), 4);
}

#[test]
fn test_outdent_removes_tab() {
    let mut engine = test_engine("\tx", 2);
    engine.outdent();
    assert_eq!(engine.text(), "x");
    assert_eq!(engine.cursor(), 1);
}

#[test]
fn test_outdent_without_indent_is_noop() {
    let mut engine = test_engine("x", 0);
    assert!(!engine.outdent());
    assert!(!engine.can_undo());
}

// ========================================================================
// Clipboard
// ========================================================================

#[test]
fn test_copy_keeps_text() {
    let mut engine = test_engine("hello world", 0);
    let mut clipboard = clipboard();
    engine.select_word_at(0);
    assert!(engine.copy(&mut clipboard).unwrap());
    assert_eq!(clipboard.contents(), "hello");
    assert_eq!(engine.text(), "hello world");
}

#[test]
fn test_copy_without_selection_is_noop() {
    let mut engine = test_engine("hello", 0);
    let mut clipboard = MemoryClipboard::with_contents("old");
    assert!(!engine.copy(&mut clipboard).unwrap());
    assert_eq!(clipboard.contents(), "old");
}

#[test]
fn test_cut_then_paste_moves_text() {
    let mut engine = test_engine("hello world", 0);
    let mut clipboard = clipboard();
    engine.select_word_at(0);
    engine.cut(&mut clipboard).unwrap();
    assert_eq!(engine.text(), " world");

    engine.ctrl_end();
    engine.paste(&mut clipboard).unwrap();
    assert_eq!(engine.text(), " worldhello");
}

#[test]
fn test_paste_replaces_selection() {
    let mut engine = test_engine("hello world", 0);
    let mut clipboard = MemoryClipboard::with_contents("bye");
    engine.select_word_at(0);
    engine.paste(&mut clipboard).unwrap();
    assert_eq!(engine.text(), "bye world");
    assert_eq!(engine.cursor(), 3);
}

#[test]
fn test_paste_normalizes_line_endings() {
    let mut engine = test_engine("", 0);
    let mut clipboard = MemoryClipboard::with_contents("a\r\nb");
    engine.paste(&mut clipboard).unwrap();
    assert_eq!(engine.text(), "a\nb");
}

#[test]
fn test_failed_paste_leaves_buffer() {
    let mut engine = test_engine("abc", 1);
    let mut clipboard = MemoryClipboard::with_contents("zzz");
    clipboard.fail_reads = true;
    assert!(engine.paste(&mut clipboard).is_err());
    assert_eq!(engine.text(), "abc");
    assert_eq!(engine.cursor(), 1);
}

#[test]
fn test_apply_cut_through_messages() {
    let mut engine = test_engine("one two", 0);
    let mut clipboard = clipboard();
    engine.apply(TextEditMsg::SelectWordAt(5), &mut clipboard).unwrap();
    assert!(engine.apply(TextEditMsg::Cut, &mut clipboard).unwrap());
    assert_eq!(engine.text(), "one ");
    assert_eq!(clipboard.read().unwrap(), "two");
}
