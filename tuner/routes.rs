use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use chroma_merge::Control;

use crate::handlers;
use crate::state::TunerState;
use crate::util::form::split_url;

pub type Reply = Response<Cursor<Vec<u8>>>;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn header(field: &str, value: &str) -> Header {
    Header::from_bytes(field.as_bytes(), value.as_bytes()).expect("static header is valid")
}

fn reply(status: u16, content_type: &str, body: Vec<u8>) -> Reply {
    let len = body.len();
    Response::new(
        StatusCode(status),
        vec![
            header("Content-Type", content_type),
            header("Cache-Control", "no-store"),
        ],
        Cursor::new(body),
        Some(len),
        None,
    )
}

pub fn html_response(body: String) -> Reply {
    reply(200, "text/html; charset=utf-8", body.into_bytes())
}

pub fn png_response(bytes: Vec<u8>) -> Reply {
    reply(200, "image/png", bytes)
}

pub fn text_response(status: u16, body: impl Into<String>) -> Reply {
    reply(status, "text/plain; charset=utf-8", body.into().into_bytes())
}

pub fn not_found() -> Reply {
    text_response(404, "404 Not Found")
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Handles one request against the loop state and tells the loop whether to
/// keep polling.
///
/// - `GET  /`            — tuner page
/// - `GET  /preview.png` — apply slider values from the query, recompute, PNG
/// - `POST /save`        — write the current bounds to the config
/// - `POST /quit`        — explicit quit
/// - `POST /closed`      — beacon sent when the page is hidden; arms the close timer
pub fn dispatch(request: Request, state: &mut TunerState) -> Control {
    let method = request.method().clone();
    let url = request.url().to_owned();
    let (path, query) = split_url(&url);

    if method == Method::Get {
        state.page_alive();
    }

    let (response, control) = match (method, path) {
        (Method::Get,  "/")            => (handlers::page::handle_get(state), Control::Continue),
        (Method::Get,  "/preview.png") => (handlers::preview::handle_get(query, state), Control::Continue),
        (Method::Post, "/save")        => handlers::control::handle_save(state),
        (Method::Post, "/quit")        => handlers::control::handle_quit(state),
        (Method::Post, "/closed")      => handlers::control::handle_closed(state),
        _ => (not_found(), Control::Continue),
    };

    let _ = request.respond(response);
    control
}
