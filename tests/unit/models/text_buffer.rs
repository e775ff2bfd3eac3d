use super::*;

#[test]
fn test_text_buffer_basic() {
    let mut buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.cursor(), (0, 0));

    buffer.set_cursor(1, 2);
    assert_eq!(buffer.cursor(), (1, 2));
}

#[test]
fn test_set_cursor_clamps() {
    let mut buffer = TextBuffer::from_text("ab\ncdef");
    buffer.set_cursor(9, 9);
    assert_eq!(buffer.cursor(), (1, 4));
}

#[test]
fn test_pos_to_char() {
    let buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.pos_to_char((0, 0)), 0);
    assert_eq!(buffer.pos_to_char((1, 0)), 6);
    assert_eq!(buffer.char_to_pos(8), (1, 2));
}

#[test]
fn test_set_text_replaces_content_and_resets_cursor() {
    let mut buffer = TextBuffer::from_text("old");
    buffer.set_cursor(0, 3);

    buffer.set_text("new\ncontent");

    assert_eq!(buffer.text(), "new\ncontent");
    assert_eq!(buffer.cursor(), (0, 0));
}

#[test]
fn test_insert_char_and_newline() {
    let mut buffer = TextBuffer::new();
    buffer.insert_char('a');
    buffer.insert_char('\n');
    buffer.insert_char('b');

    assert_eq!(buffer.text(), "a\nb");
    assert_eq!(buffer.cursor(), (1, 1));
}

#[test]
fn test_insert_combining_mark_keeps_cursor_grapheme_index() {
    let mut buffer = TextBuffer::new();

    buffer.insert_char('e');
    buffer.insert_char('\u{301}');

    assert_eq!(buffer.text(), "e\u{301}");
    assert_eq!(buffer.cursor(), (0, 1));

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "");
    assert_eq!(buffer.cursor(), (0, 0));
}

#[test]
fn test_insert_str_multiline_moves_cursor_to_tail() {
    let mut buffer = TextBuffer::from_text("xy");
    buffer.set_cursor(0, 1);

    buffer.insert_str("12\n345\n6");

    assert_eq!(buffer.text(), "x12\n345\n6y");
    assert_eq!(buffer.cursor(), (2, 1));
}

#[test]
fn test_delete_backward_joins_lines() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(1, 0);

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));
}

#[test]
fn test_delete_backward_joins_crlf_lines() {
    let mut buffer = TextBuffer::from_text("ab\r\ncd");
    buffer.set_cursor(1, 0);

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "abcd");
}

#[test]
fn test_delete_backward_joins_lone_cr_lines() {
    let mut buffer = TextBuffer::from_text("a\rb");
    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.line_grapheme_len(0), 1);
    buffer.set_cursor(1, 0);

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "ab");
    assert_eq!(buffer.cursor(), (0, 1));
}

#[test]
fn test_insert_at_end_of_lone_cr_line_stays_on_that_line() {
    let mut buffer = TextBuffer::from_text("a\rb");
    buffer.move_line_end();
    assert_eq!(buffer.cursor(), (0, 1));

    buffer.insert_char('X');
    assert_eq!(buffer.text(), "aX\rb");
    assert_eq!(buffer.cursor(), (0, 2));
    assert_eq!(buffer.line(0).as_deref(), Some("aX"));
}

#[test]
fn test_unicode_line_separators_are_line_endings() {
    let mut buffer = TextBuffer::from_text("one\u{2028}two\u{2029}three");

    assert_eq!(buffer.len_lines(), 3);
    assert_eq!(buffer.line(0).as_deref(), Some("one"));
    assert_eq!(buffer.line_grapheme_len(1), 3);

    buffer.set_cursor(0, 3);
    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "onetwo\u{2029}three");
}

#[test]
fn test_delete_backward_at_start_is_noop() {
    let mut buffer = TextBuffer::from_text("ab");
    assert!(!buffer.delete_backward());
    assert_eq!(buffer.text(), "ab");
}

#[test]
fn test_delete_forward_removes_single_combining_grapheme() {
    let mut buffer = TextBuffer::from_text("e\u{301}x");

    assert!(buffer.delete_forward());

    assert_eq!(buffer.text(), "x");
    assert_eq!(buffer.cursor(), (0, 0));
}

#[test]
fn test_delete_forward_at_line_end_joins_next_line() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(0, 2);

    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));

    buffer.move_file_end();
    assert!(!buffer.delete_forward());
}

#[test]
fn test_line_grapheme_len_ignores_line_endings() {
    let buffer = TextBuffer::from_text("hello\r\nworld\n");

    assert_eq!(buffer.line_grapheme_len(0), 5);
    assert_eq!(buffer.line_grapheme_len(1), 5);
    assert_eq!(buffer.line_grapheme_len(2), 0);
    assert_eq!(buffer.line(0).as_deref(), Some("hello"));
    assert_eq!(buffer.line(3), None);
}

#[test]
fn test_horizontal_moves_wrap_across_lines() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(0, 2);

    assert!(buffer.move_right());
    assert_eq!(buffer.cursor(), (1, 0));

    assert!(buffer.move_left());
    assert_eq!(buffer.cursor(), (0, 2));

    buffer.move_file_start();
    assert!(!buffer.move_left());
}

#[test]
fn test_vertical_moves_clamp_column() {
    let mut buffer = TextBuffer::from_text("long line\nab\nlonger line");
    buffer.set_cursor(0, 8);

    assert!(buffer.move_lines(1));
    assert_eq!(buffer.cursor(), (1, 2));

    assert!(buffer.move_lines(10));
    assert_eq!(buffer.cursor(), (2, 2));

    assert!(buffer.move_lines(-10));
    assert_eq!(buffer.cursor(), (0, 2));
    assert!(!buffer.move_lines(-1));
}

#[test]
fn test_line_start_end_and_file_end() {
    let mut buffer = TextBuffer::from_text("abc\ndefg");

    assert!(buffer.move_line_end());
    assert_eq!(buffer.cursor(), (0, 3));
    assert!(buffer.move_line_start());
    assert_eq!(buffer.cursor(), (0, 0));

    assert!(buffer.move_file_end());
    assert_eq!(buffer.cursor(), (1, 4));
    assert!(!buffer.move_file_end());
}
