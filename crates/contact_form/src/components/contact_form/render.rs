use color_eyre::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    components::centered_rect_fixed,
    form::{summary_lines, FormFieldKind, SUMMARY_HEADING},
    tui::Frame,
};

use super::ContactForm;

const SUBMIT_LABEL: &str = "[ Submit ]";
const VALUE_INDENT: u16 = 2;

/// Lines of the form body plus the cursor position (column, row) relative to
/// the inner area, when a field has focus.
struct FormBody {
    lines: Vec<Line<'static>>,
    cursor: Option<(u16, u16)>,
}

/// Render the contact form centered in `area`.
///
/// Layout, top to bottom: each field (label, value rows, inline error), the
/// Submit button, the "You Submitted:" summary once a submission was
/// accepted, and a key hint footer.
pub fn render_contact_form(form: &ContactForm, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    if area.width < 5 || area.height < 5 {
        return Ok(());
    }
    let schema = form.engine().schema();
    let dialog = centered_rect_fixed(area, schema.min_width, schema.min_height);
    f.render_widget(Clear, dialog);

    let block = Block::default()
        .title(format!(" {} ", schema.title))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .style(Style::default().fg(Color::White));
    let inner = block.inner(dialog);
    f.render_widget(block, dialog);

    let body = form_body(form, inner.width);
    f.render_widget(Paragraph::new(Text::from(body.lines)), inner);

    if let Some((col, row)) = body.cursor {
        if col < inner.width && row < inner.height {
            f.set_cursor_position((inner.x + col, inner.y + row));
        }
    }
    Ok(())
}

fn form_body(form: &ContactForm, width: u16) -> FormBody {
    let engine = form.engine();
    let value_width = width.saturating_sub(VALUE_INDENT).max(1) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor = None;

    for field in &engine.schema().fields {
        let focused = form.focused_field() == Some(field.key);

        lines.push(Line::from(Span::styled(
            field.label(),
            Style::default().fg(Color::White).add_modifier(if focused {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
        )));

        let value = engine.fields().get(field.key);
        let rows = match field.kind {
            FormFieldKind::Text => vec![value.to_string()],
            FormFieldKind::TextArea { rows } => wrap_chars(value, value_width, rows as usize),
        };
        let value_style = if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::Cyan)
        };

        if focused {
            let pos = form.input().cursor();
            let (row_offset, col) = match field.kind {
                FormFieldKind::Text => (0, form.input().visual_cursor()),
                FormFieldKind::TextArea { rows } => (
                    (pos / value_width).min((rows as usize).saturating_sub(1)),
                    pos % value_width,
                ),
            };
            cursor = Some((
                saturating_cell(col).saturating_add(VALUE_INDENT),
                saturating_cell(lines.len() + row_offset),
            ));
        }

        for row in rows {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(VALUE_INDENT as usize)),
                Span::styled(row, value_style),
            ]));
        }

        if let Some(help) = &field.help {
            if focused {
                lines.push(Line::from(Span::styled(
                    help.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        if let Some(err) = engine.visible_error(field.key) {
            lines.push(Line::from(Span::styled(
                format!("Error: {err}"),
                Style::default().fg(Color::Red),
            )));
        }

        lines.push(Line::raw(""));
    }

    let submit_style = if form.is_submit_focused() {
        Style::default().fg(Color::Black).bg(Color::White).bold()
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::from(Span::styled(SUBMIT_LABEL, submit_style)));

    if let Some(snapshot) = engine.submitted() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            SUMMARY_HEADING,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        for line in summary_lines(snapshot) {
            lines.push(Line::from(Span::styled(line, Style::default().fg(Color::Green))));
        }
    }

    lines.push(Line::raw(""));
    lines.push(
        Line::from(vec![
            Span::styled("Tab/Up/Down", Style::default().fg(Color::White)),
            Span::raw(": Navigate   "),
            Span::styled("Enter", Style::default().fg(Color::White)),
            Span::raw(": Submit   "),
            Span::styled("Esc", Style::default().fg(Color::White)),
            Span::raw(": Quit"),
        ])
        .fg(Color::DarkGray),
    );

    FormBody { lines, cursor }
}

/// Terminal coordinates are u16; anything past that is clamped, never wrapped.
fn saturating_cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Split `value` into at most `rows` chunks of `width` characters, padding
/// with empty rows.
fn wrap_chars(value: &str, width: usize, rows: usize) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut out: Vec<String> = chars
        .chunks(width.max(1))
        .take(rows)
        .map(|chunk| chunk.iter().collect())
        .collect();
    out.resize(rows.max(1), String::new());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_chars_pads_and_truncates() {
        assert_eq!(wrap_chars("", 4, 3), vec!["", "", ""]);
        assert_eq!(wrap_chars("abcdefghij", 4, 2), vec!["abcd", "efgh"]);
        assert_eq!(wrap_chars("äöü", 2, 3), vec!["äö", "ü", ""]);
    }

    #[test]
    fn cursor_follows_focused_field() {
        let form = ContactForm::default();
        let body = form_body(&form, 40);
        // first field: label on row 0, value on row 1, empty value -> column at indent
        assert_eq!(body.cursor, Some((VALUE_INDENT, 1)));
    }

    #[test]
    fn cursor_clamps_on_very_long_values() {
        let mut form = ContactForm::default();
        form.input = tui_input::Input::new("x".repeat(70_000));
        let body = form_body(&form, 40);
        assert_eq!(body.cursor, Some((u16::MAX, 1)));

        form.input = tui_input::Input::new("x".repeat(usize::from(u16::MAX) - 1));
        let body = form_body(&form, 40);
        assert_eq!(body.cursor, Some((u16::MAX, 1)));
    }
}
