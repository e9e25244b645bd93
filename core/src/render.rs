//! Plain-text presentation of the view: form, record table and modal.
//!
//! Column widths follow the display width of the cell text, so Cyrillic and
//! wide characters line up in a terminal.

use unicode_width::UnicodeWidthStr;

use crate::draft::Field;
use crate::locale::{Locale, Message};
use crate::view::{LoadState, TodoView};

const HEADERS: [&str; 4] = ["NAME", "EMAIL", "USERNAME", "ACTIONS"];
const CREATE_BUTTON: &str = "[ CREATE ]";

/// Render the whole view as a text frame.
pub fn render(view: &TodoView) -> String {
    let mut out = render_form(view);
    out.push('\n');
    out.push_str(&render_table(view));
    if let Some(title) = view.modal().title() {
        out.push('\n');
        out.push_str(&render_modal(title, view.locale()));
    }
    out
}

pub fn render_form(view: &TodoView) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        out.push_str(field.label());
        out.push(':');
        let value = view.draft().get(field);
        if !value.is_empty() {
            out.push(' ');
            out.push_str(value);
        }
        out.push('\n');
        if field == Field::Email {
            if let Some(error) = view.email_error() {
                // Under the first character of the value.
                out.push_str(&" ".repeat(field.label().width() + 2));
                out.push_str("! ");
                out.push_str(error);
                out.push('\n');
            }
        }
    }
    out.push_str(CREATE_BUTTON);
    out.push('\n');
    out
}

pub fn render_table(view: &TodoView) -> String {
    let locale = view.locale();
    let rows: Vec<[String; 4]> = view
        .records()
        .iter()
        .map(|record| {
            [
                record.name.clone(),
                record.email.clone(),
                record.username.clone(),
                format!("delete {}", record.id),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = table_line(&HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    match view.load_state() {
        LoadState::Loading => push_line(&mut out, locale.text(Message::Loading)),
        LoadState::Failed(reason) => {
            push_line(
                &mut out,
                &format!("{}: {reason}", locale.text(Message::LoadFailed)),
            );
        }
        LoadState::Loaded(_) if rows.is_empty() => {
            push_line(&mut out, locale.text(Message::EmptyList));
        }
        LoadState::Loaded(_) => {
            for row in &rows {
                out.push_str(&table_line(row, &widths));
            }
        }
    }
    out
}

pub fn render_modal(title: &str, locale: Locale) -> String {
    let button = format!("[ {} ]", locale.text(Message::Close));
    let inner = title.width().max(button.width());
    let border = format!("+{}+\n", "-".repeat(inner + 2));
    let mut out = border.clone();
    out.push_str(&format!("| {} |\n", pad(title, inner)));
    out.push_str(&format!("| {} |\n", pad(&button, inner)));
    out.push_str(&border);
    out
}

fn table_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    let mut line = padded.join(" | ").trim_end().to_string();
    line.push('\n');
    line
}

fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
