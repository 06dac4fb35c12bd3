use std::time::Instant;

use tracing::{error, info};

use chroma_merge::{Control, TunerCommand};

use crate::routes::{text_response, Reply};
use crate::state::{FlashMessage, TunerState};

// ---------------------------------------------------------------------------
// POST /save   (key: s)
// ---------------------------------------------------------------------------

pub fn handle_save(state: &mut TunerState) -> (Reply, Control) {
    match state.session.apply(TunerCommand::Save) {
        Ok(control) => {
            let msg = "Settings saved.";
            println!("{}", msg);
            state.flash = Some(FlashMessage::success(msg));
            (text_response(200, msg), control)
        }
        Err(e) => {
            error!("saving bounds failed: {e}");
            let msg = format!("Could not save settings: {}", e);
            state.flash = Some(FlashMessage::error(msg.clone()));
            (text_response(500, msg), Control::Continue)
        }
    }
}

// ---------------------------------------------------------------------------
// POST /quit   (key: Esc)
// ---------------------------------------------------------------------------

pub fn handle_quit(state: &mut TunerState) -> (Reply, Control) {
    exit_with(state, TunerCommand::Quit, "Tuner closed.")
}

// ---------------------------------------------------------------------------
// POST /closed (page hidden / tab closed)
// ---------------------------------------------------------------------------

/// Only arms the close timer: a reload also fires this beacon, and the
/// reloaded page's first request disarms it again.
pub fn handle_closed(state: &mut TunerState) -> (Reply, Control) {
    state.mark_closing(Instant::now());
    info!("page hidden; waiting for it to come back");
    (text_response(200, ""), Control::Continue)
}

fn exit_with(state: &mut TunerState, command: TunerCommand, body: &str) -> (Reply, Control) {
    let control = state.session.apply(command).unwrap_or(Control::Continue);
    info!(?command, renders = state.renders, "tuner exit requested");
    (text_response(200, body), control)
}
