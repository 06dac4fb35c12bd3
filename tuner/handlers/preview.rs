use tracing::{debug, warn};

use chroma_merge::{Slider, TunerCommand};

use crate::routes::{png_response, text_response, Reply};
use crate::state::TunerState;
use crate::util::form::parse_query;
use crate::util::image::encode_png;

// ---------------------------------------------------------------------------
// GET /preview.png?lower_h=..&...&upper_v=..
// ---------------------------------------------------------------------------

/// One tick of the tuner: pull slider positions from the query, recompute
/// the composite and return it as PNG. Unknown keys and unparsable values
/// are ignored so a partial query only moves the sliders it names.
pub fn handle_get(query: &str, state: &mut TunerState) -> Reply {
    for (slider, value) in slider_values(query) {
        // Setting a slider cannot fail.
        let _ = state.session.apply(TunerCommand::Set(slider, value));
    }

    let composite = match state.session.render() {
        Ok(img) => img,
        Err(e) => {
            warn!("preview failed: {e}");
            return text_response(500, e.to_string());
        }
    };

    state.renders += 1;
    debug!(render = state.renders, "preview rendered");

    match encode_png(&composite) {
        Ok(bytes) => png_response(bytes),
        Err(e) => text_response(500, format!("PNG encoding failed: {}", e)),
    }
}

fn slider_values(query: &str) -> Vec<(Slider, u8)> {
    parse_query(query)
        .into_iter()
        .filter_map(|(k, v)| Some((Slider::from_key(&k)?, v.trim().parse::<u8>().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_values_skip_bad_entries() {
        let values = slider_values("lower_h=10&upper_v=300&lower_s=x&zoom=2&upper_h=179");
        assert_eq!(values, vec![(Slider::LowerH, 10), (Slider::UpperH, 179)]);
    }
}
