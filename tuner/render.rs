//! Page template for the tuner.
//!
//! The single HTML template (`tuner/assets/tuner.html`) is embedded at
//! compile time and filled by replacing `{{TOKEN}}` placeholders. Tokens the
//! caller leaves untouched are blanked.

const TEMPLATE: &str = include_str!("assets/tuner.html");

/// Renders the tuner page; `fill` substitutes the page-specific tokens.
pub fn render_page<F>(fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    blank_remaining(fill(TEMPLATE.to_owned()))
}

/// Removes any `{{TOKEN}}` still present.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        match html[start..].find("}}") {
            Some(end) => html.replace_range(start..start + end + 2, ""),
            None => break,
        }
    }
    html
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
     .replace('<', "&lt;")
     .replace('>', "&gt;")
     .replace('"', "&quot;")
}
