use chroma_merge::tuner::SLIDER_MAX;
use chroma_merge::{HsvRange, MaskPolarity, Slider};

use crate::render::{html_escape, render_page};
use crate::routes::{html_response, Reply};
use crate::state::{FlashKind, FlashMessage, TunerState};

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(state: &mut TunerState) -> Reply {
    let flash = state.take_flash();
    let range = state.session.range();
    let method = state.session.method();
    let count = state.session.image_count();
    let polarity = state.session.polarity();
    let config_path = state.session.config_path().display().to_string();

    let page = render_page(|tmpl| {
        tmpl
            .replace("{{FLASH}}", &render_flash_html(flash.as_ref()))
            .replace("{{SLIDERS}}", &build_slider_rows(&range))
            .replace("{{IMAGE_COUNT}}", &count.to_string())
            .replace("{{METHOD}}", method.as_str())
            .replace("{{POLARITY}}", polarity_hint(polarity))
            .replace("{{CONFIG_PATH}}", &html_escape(&config_path))
    });
    html_response(page)
}

/// Polarity shown next to the sliders so the user knows what the range means.
fn polarity_hint(polarity: MaskPolarity) -> &'static str {
    match polarity {
        MaskPolarity::Keep    => "pixels inside the range are kept",
        MaskPolarity::Discard => "pixels inside the range are removed",
    }
}

fn build_slider_rows(range: &HsvRange) -> String {
    Slider::ALL.iter().map(|&s| {
        format!(
            r#"<div class="slider-row"><label for="{key}">{label}</label><input type="range" id="{key}" name="{key}" min="0" max="{max}" value="{value}"><span class="slider-value" id="v-{key}">{value}</span></div>"#,
            key = s.key(), label = s.label(), value = s.get(range), max = SLIDER_MAX
        )
    }).collect::<Vec<_>>().join("\n")
}

pub fn render_flash_html(flash: Option<&FlashMessage>) -> String {
    match flash {
        None    => String::new(),
        Some(f) => {
            let cls = match f.kind {
                FlashKind::Success => "flash-success",
                FlashKind::Error   => "flash-error",
            };
            format!(r#"<div class="flash {}">{}</div>"#, cls, html_escape(&f.text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_rows_carry_current_values() {
        let rows = build_slider_rows(&HsvRange::new([1, 2, 3], [4, 5, 6]));
        assert_eq!(rows.lines().count(), 6);
        assert!(rows.contains(r#"id="upper_s""#));
        assert!(rows.contains(r#"id="v-upper_s">5</span>"#));
    }

    #[test]
    fn test_flash_is_escaped() {
        let html = render_flash_html(Some(&FlashMessage::error("<bad>")));
        assert!(html.contains("flash-error"));
        assert!(html.contains("&lt;bad&gt;"));
    }
}
