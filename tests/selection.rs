//! Selection tests - extend, select word/line/all, normalization

mod common;

use common::{clipboard, test_engine};
use editcore::editable::{MoveTarget, SelectionBounds, TextEditMsg};

// ========================================================================
// Extending
// ========================================================================

#[test]
fn test_extend_right_starts_at_cursor() {
    let mut engine = test_engine("hello", 1);
    engine.extend_right();
    engine.extend_right();
    assert_eq!(engine.selection(), SelectionBounds::new(1, 3));
    assert_eq!(engine.selected_text(), "el");
    assert_eq!(engine.cursor(), 3);
}

#[test]
fn test_extend_left_produces_reversed_selection() {
    let mut engine = test_engine("hello", 4);
    engine.extend_left();
    engine.extend_left();
    let selection = engine.selection();
    assert!(selection.is_reversed());
    assert_eq!(selection.bounds(), (2, 4));
    assert_eq!(engine.selected_text(), "ll");
}

#[test]
fn test_extend_back_over_anchor_empties_selection() {
    let mut engine = test_engine("hello", 2);
    engine.extend_right();
    engine.extend_left();
    assert!(!engine.has_selection());
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn test_extend_word_right_and_left() {
    let mut engine = test_engine("one two three", 4);
    engine.extend_word_right();
    assert_eq!(engine.selected_text(), "two");
    engine.extend_word_right();
    assert_eq!(engine.selected_text(), "two three");
    engine.extend_word_left();
    assert_eq!(engine.selected_text(), "two ");
}

#[test]
fn test_extend_up_down_across_lines() {
    let mut engine = test_engine("abc\ndef\nghi", 5);
    engine.extend_down();
    assert_eq!(engine.selected_text(), "ef\ng");
    engine.extend_up();
    engine.extend_up();
    assert_eq!(engine.selected_text(), "bc\nd");
}

#[test]
fn test_extend_home_end() {
    let mut engine = test_engine("abc def", 4);
    engine.extend_end();
    assert_eq!(engine.selected_text(), "def");
    engine.extend_home();
    assert_eq!(engine.selected_text(), "abc ");
}

#[test]
fn test_extend_to_document_bounds() {
    let mut engine = test_engine("ab\ncd\nef", 4);
    engine.extend_ctrl_end();
    assert_eq!(engine.selected_text(), "d\nef");
    engine.extend_ctrl_home();
    assert_eq!(engine.selected_text(), "ab\nc");
}

#[test]
fn test_plain_move_collapses_selection() {
    let mut engine = test_engine("abc\ndef", 0);
    engine.extend_right();
    engine.move_down();
    assert!(!engine.has_selection());
    assert_eq!(engine.cursor(), 5);
}

#[test]
fn test_move_with_selection_message() {
    let mut engine = test_engine("abc", 0);
    let mut clipboard = clipboard();
    engine
        .apply(TextEditMsg::MoveWithSelection(MoveTarget::LineEnd), &mut clipboard)
        .unwrap();
    assert_eq!(engine.selected_text(), "abc");
}

// ========================================================================
// Select all / word / line
// ========================================================================

#[test]
fn test_select_all() {
    let mut engine = test_engine("ab\ncd", 1);
    engine.select_all();
    assert_eq!(engine.selected_text(), "ab\ncd");
    assert_eq!(engine.cursor(), 5);
}

#[test]
fn test_select_all_empty_buffer_has_no_selection() {
    let mut engine = test_engine("", 0);
    engine.select_all();
    assert!(!engine.has_selection());
}

#[test]
fn test_select_word_at_separator_run() {
    let mut engine = test_engine("foo   bar", 0);
    engine.select_word_at(4);
    assert_eq!(engine.selected_text(), "   ");
}

#[test]
fn test_select_word_at_line_end_takes_word_before() {
    let mut engine = test_engine("foo bar\nbaz", 0);
    engine.select_word_at(7);
    assert_eq!(engine.selected_text(), "bar");
}

#[test]
fn test_select_word_never_crosses_lines() {
    let mut engine = test_engine("foo\nbar", 0);
    engine.select_word_at(5);
    assert_eq!(engine.selected_text(), "bar");
}

#[test]
fn test_select_line_excludes_newline() {
    let mut engine = test_engine("one\ntwo\nthree", 0);
    engine.select_line_at(5);
    assert_eq!(engine.selected_text(), "two");
    assert_eq!(engine.cursor(), 7);
}

#[test]
fn test_select_line_clamps_offset() {
    let mut engine = test_engine("one\ntwo", 0);
    engine.select_line_at(500);
    assert_eq!(engine.selected_text(), "two");
}

// ========================================================================
// Replacement
// ========================================================================

#[test]
fn test_typing_replaces_reversed_selection() {
    let mut engine = test_engine("hello world", 11);
    engine.extend_word_left();
    engine.insert_char('X');
    assert_eq!(engine.text(), "hello X");
    assert_eq!(engine.cursor(), 7);
}

#[test]
fn test_focus_change_clears_selection() {
    let mut engine = test_engine("hello", 0);
    engine.select_all();
    engine.set_focused(false);
    engine.set_focused(true);
    assert!(!engine.has_selection());
    assert_eq!(engine.cursor(), 5);
}
