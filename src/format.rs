//! Presentation rules for narrative backend text. Applied identically
//! wherever such text renders: query answers, feedback summaries, per-skill
//! evidence, strengths and improvement lists.

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormattedLine {
    /// A `**Title**:` line; rendered bold.
    Heading(String),
    /// A `•` / `*` / `- ` led line.
    Bullet(String),
    Paragraph(String),
}

/// Drops `**` and `*` emphasis markers; the client renders structure, not
/// inline markup.
fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").replace('*', "").trim().to_string()
}

fn bullet_text(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix('•') {
        return Some(rest.trim_start());
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return Some(rest.trim_start());
    }
    if let Some(rest) = line.strip_prefix('*') {
        return Some(rest.trim_start());
    }
    None
}

fn is_heading(line: &str) -> bool {
    line.starts_with("**") && line.contains("**:")
}

/// Splits narrative text on line breaks and classifies each non-blank line.
pub fn format_lines(text: &str) -> Vec<FormattedLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if is_heading(line) {
                FormattedLine::Heading(strip_emphasis(line))
            } else if let Some(rest) = bullet_text(line) {
                FormattedLine::Bullet(strip_emphasis(rest))
            } else {
                FormattedLine::Paragraph(strip_emphasis(line))
            }
        })
        .collect()
}

/// Headings and paragraphs in document order, bullets gathered into one
/// trailing list.
pub fn render_narrative(text: &str) -> Html {
    let lines = format_lines(text);
    let bullets: Vec<&String> = lines
        .iter()
        .filter_map(|line| match line {
            FormattedLine::Bullet(item) => Some(item),
            _ => None,
        })
        .collect();

    html! {
        <div>
            { for lines.iter().filter_map(|line| match line {
                FormattedLine::Heading(title) => Some(html! {
                    <h4 style="margin-bottom:8px; font-weight:bold;">{ title }</h4>
                }),
                FormattedLine::Paragraph(body) => Some(html! {
                    <p style="margin-bottom:12px;">{ body }</p>
                }),
                FormattedLine::Bullet(_) => None,
            })}
            { if bullets.is_empty() {
                html! {}
            } else {
                html! {
                    <ul>
                        { for bullets.iter().map(|item| html! {
                            <li style="margin-bottom:8px;">{ *item }</li>
                        })}
                    </ul>
                }
            }}
        </div>
    }
}
