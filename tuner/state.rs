use std::time::{Duration, Instant};

use chroma_merge::{Control, TunerCommand, TunerSession};

/// How long a hidden page has to come back (reload) before the session ends.
pub const CLOSE_GRACE: Duration = Duration::from_millis(1500);

// ---------------------------------------------------------------------------
// Flash messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum FlashKind { Success, Error }

/// One-shot status line shown on the next full page render.
#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Success, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Error, text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Loop state
// ---------------------------------------------------------------------------

/// Everything the polling loop owns. Handlers borrow it mutably for the
/// duration of one request; nothing is shared across threads.
pub struct TunerState {
    /// Decoded images, live bounds, merge settings.
    pub session:       TunerSession,
    pub flash:         Option<FlashMessage>,
    /// Number of previews rendered so far.
    pub renders:       u64,
    /// Set when the page reported itself hidden.
    pub closing_since: Option<Instant>,
}

impl TunerState {
    pub fn new(session: TunerSession) -> Self {
        TunerState { session, flash: None, renders: 0, closing_since: None }
    }

    pub fn mark_closing(&mut self, now: Instant) {
        self.closing_since = Some(now);
    }

    /// Any page request means the window is still (or again) open.
    pub fn page_alive(&mut self) {
        self.closing_since = None;
    }

    /// Ends the session once the page has stayed away for `CLOSE_GRACE`.
    pub fn poll_closed(&mut self, now: Instant) -> Control {
        match self.closing_since {
            Some(since) if now.duration_since(since) >= CLOSE_GRACE => self
                .session
                .apply(TunerCommand::WindowClosed)
                .unwrap_or(Control::Continue),
            _ => Control::Continue,
        }
    }

    /// Takes and returns the current flash message, clearing it.
    pub fn take_flash(&mut self) -> Option<FlashMessage> {
        self.flash.take()
    }
}
