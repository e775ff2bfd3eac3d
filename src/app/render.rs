use crate::kernel::services::ports::NotificationLevel;
use crate::models::{FontAttribute, FontStyle};
use crate::views::{EditorView, PathPrompt};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;

pub fn text_style(font: &FontStyle) -> Style {
    [
        (FontAttribute::Bold, Modifier::BOLD),
        (FontAttribute::Italic, Modifier::ITALIC),
        (FontAttribute::Underline, Modifier::UNDERLINED),
    ]
    .into_iter()
    .filter(|(attr, _)| font.is_set(*attr))
    .fold(Style::default(), |style, (_, modifier)| style.add_modifier(modifier))
}

pub fn render(frame: &mut Frame, view: &mut EditorView, prompt: Option<&PathPrompt>) {
    let area = frame.area();
    let [title_area, toolbar_area, text_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title(frame, view, title_area);
    render_toolbar(frame, view, toolbar_area);
    render_text(frame, view, text_area, prompt.is_none());
    render_status(frame, view, status_area);

    if view.recents().is_visible() {
        render_recents(frame, view, text_area);
    }
    if let Some(prompt) = prompt {
        render_prompt(frame, prompt, area);
    }
}

fn render_title(frame: &mut Frame, view: &EditorView, area: Rect) {
    let title = Paragraph::new(view.title())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(title, area);
}

fn toggle_span(label: &'static str, active: bool, modifier: Modifier) -> Span<'static> {
    if active {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(modifier),
        )
    } else {
        Span::styled(label, Style::default().fg(MUTED))
    }
}

fn render_toolbar(frame: &mut Frame, view: &EditorView, area: Rect) {
    let key = Style::default().fg(ACCENT);
    let font = view.font();
    let spans = vec![
        Span::styled("File", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled("^N", key),
        Span::raw(" New "),
        Span::styled("^O", key),
        Span::raw(" Open "),
        Span::styled("^S", key),
        Span::raw(" Save "),
        Span::styled("F12", key),
        Span::raw(" Save As "),
        Span::styled("^Q", key),
        Span::raw(" Exit │ "),
        Span::styled("^R", key),
        Span::raw(" Recents │ "),
        Span::raw(format!("{} {}pt ", font.family(), font.size())),
        toggle_span(" B ", font.is_set(FontAttribute::Bold), Modifier::BOLD),
        toggle_span(" I ", font.is_set(FontAttribute::Italic), Modifier::ITALIC),
        toggle_span(" U ", font.is_set(FontAttribute::Underline), Modifier::UNDERLINED),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_text(frame: &mut Frame, view: &mut EditorView, area: Rect, show_cursor: bool) {
    let width = area.width as usize;
    let height = area.height as usize;
    view.ensure_cursor_visible(width, height);

    let lines: Vec<Line> = view
        .visible_lines(width, height)
        .into_iter()
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines).style(text_style(view.font())), area);

    if show_cursor && !view.recents().is_visible() {
        let (scroll_row, scroll_x) = view.scroll();
        let row = view.buffer().cursor().0;
        let x = view.cursor_x().saturating_sub(scroll_x);
        let y = row.saturating_sub(scroll_row);
        frame.set_cursor_position((area.x + x as u16, area.y + y as u16));
    }
}

fn render_status(frame: &mut Frame, view: &EditorView, area: Rect) {
    let line = match view.notification() {
        Some(notification) => {
            let color = match notification.level {
                NotificationLevel::Info => Color::Green,
                NotificationLevel::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(
                    format!("{}: ", notification.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(notification.message.clone(), Style::default().fg(color)),
            ])
        }
        None => {
            let (row, col) = view.buffer().cursor();
            Line::from(Span::styled(
                format!("Ln {}, Col {}", row + 1, col + 1),
                Style::default().fg(MUTED),
            ))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_recents(frame: &mut Frame, view: &EditorView, area: Rect) {
    let menu = view.recents();
    let labels = menu.labels();

    let max_label_w = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let inner_w = max_label_w.max(24).saturating_add(2);
    let inner_h = labels.len().max(1);
    let width = (inner_w as u16).saturating_add(2).min(area.width);
    let height = (inner_h as u16).saturating_add(2).min(area.height);
    if width < 3 || height < 3 {
        return;
    }
    let popup = Rect::new(area.x + (area.width - width).min(1), area.y, width, height);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Recents ");
    if let Some(path) = menu.selected_path() {
        block = block.title_bottom(Line::from(format!(" {} ", path.display())));
    }

    let lines: Vec<Line> = if labels.is_empty() {
        vec![Line::from(Span::styled(
            " (no recent files)",
            Style::default().fg(MUTED),
        ))]
    } else {
        labels
            .into_iter()
            .enumerate()
            .map(|(idx, label)| {
                let style = if menu.selected_index() == Some(idx) {
                    Style::default().fg(Color::Black).bg(ACCENT)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!(" {} ", label), style))
            })
            .collect()
    };

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_prompt(frame: &mut Frame, prompt: &PathPrompt, area: Rect) {
    let width = area.width.saturating_sub(4).min(60);
    let height = area.height.min(3);
    if width < 10 || height < 3 {
        return;
    }
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let dialog = Rect::new(x, y, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!(" {} ", prompt.purpose().title()))
        .title_bottom(Line::from(vec![
            Span::styled(" Enter", Style::default().fg(ACCENT)),
            Span::raw(" OK "),
            Span::styled("Esc", Style::default().fg(MUTED)),
            Span::raw(" Cancel "),
        ]));
    let inner = block.inner(dialog);

    frame.render_widget(Clear, dialog);
    frame.render_widget(Paragraph::new(prompt.value()).block(block), dialog);

    let cursor_x = prompt.value()[..prompt.cursor()].width() as u16;
    frame.set_cursor_position((inner.x + cursor_x.min(inner.width.saturating_sub(1)), inner.y));
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;
