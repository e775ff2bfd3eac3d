use super::*;
use crate::kernel::services::ports::{Notification, PathPurpose};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::path::{Path, PathBuf};

fn draw(view: &mut EditorView, prompt: Option<&PathPrompt>) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
    terminal
        .draw(|frame| render(frame, view, prompt))
        .unwrap();
    terminal
}

fn row(buffer: &Buffer, y: u16) -> String {
    let width = buffer.area.width as usize;
    let start = y as usize * width;
    buffer.content[start..start + width]
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height).map(|y| row(buffer, y)).collect()
}

#[test]
fn frame_shows_title_toolbar_text_and_position() {
    let mut view = EditorView::default();
    view.set_title("Quill - /tmp/a.txt");
    view.load_text("first line\nsecond");

    let terminal = draw(&mut view, None);
    let rows = screen(&terminal);

    assert!(rows[0].contains("Quill - /tmp/a.txt"));
    assert!(rows[1].contains("^N New"));
    assert!(rows[1].contains("F12 Save As"));
    assert!(rows[1].contains("Arial 12pt"));
    assert!(rows[2].starts_with("first line"));
    assert!(rows[3].starts_with("second"));
    assert!(rows[11].contains("Ln 1, Col 1"));
}

#[test]
fn notification_replaces_cursor_position() {
    let mut view = EditorView::default();
    view.set_notification(Notification::error("Could not open file x: No such file"));

    let terminal = draw(&mut view, None);
    let rows = screen(&terminal);

    assert!(rows[11].starts_with("Error: Could not open file x"));
    assert!(!rows[11].contains("Ln 1"));
}

#[test]
fn recents_popup_lists_labels() {
    let mut view = EditorView::default();
    view.recents_mut().toggle();
    let terminal = draw(&mut view, None);
    assert!(screen(&terminal).iter().any(|r| r.contains("(no recent files)")));

    let mut view = EditorView::default();
    view.recents_mut().set_entries(&[
        PathBuf::from("/docs/notes.txt"),
        PathBuf::from("/docs/todo.md"),
    ]);
    view.recents_mut().toggle();
    let terminal = draw(&mut view, None);
    let rows = screen(&terminal);

    assert!(rows.iter().any(|r| r.contains("Recents")));
    assert!(rows.iter().any(|r| r.contains(" notes ")));
    assert!(rows.iter().any(|r| r.contains(" todo ")));
    assert!(rows.iter().any(|r| r.contains("/docs/notes.txt")));
}

#[test]
fn prompt_overlay_shows_purpose() {
    let mut view = EditorView::default();
    let prompt = PathPrompt::new(PathPurpose::SaveAs, Path::new("/work"));

    let terminal = draw(&mut view, Some(&prompt));
    let rows = screen(&terminal);

    assert!(rows.iter().any(|r| r.contains("Save File As")));
    assert!(rows.iter().any(|r| r.contains("Esc Cancel")));
}

#[test]
fn text_style_follows_font_toggles() {
    let mut font = FontStyle::default();
    assert_eq!(text_style(&font), Style::default());

    font.bold = true;
    font.underline = true;
    let style = text_style(&font);
    assert!(style.add_modifier.contains(Modifier::BOLD));
    assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    assert!(!style.add_modifier.contains(Modifier::ITALIC));
}
