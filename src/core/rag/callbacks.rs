//! Side channel notified as answer fragments arrive

use std::io::Write;

/// Observer of a streamed answer
pub trait StreamCallback: Send + Sync {
    /// Called once per fragment, in stream order
    fn on_fragment(&self, fragment: &str);

    /// Called after the last fragment of a successful answer
    fn on_complete(&self) {}
}

/// Writes fragments to standard output as they arrive
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutCallback;

impl StreamCallback for StdoutCallback {
    fn on_fragment(&self, fragment: &str) {
        let mut stdout = std::io::stdout().lock();
        // Best effort; a closed stdout must not fail the request
        let _ = stdout.write_all(fragment.as_bytes());
        let _ = stdout.flush();
    }

    fn on_complete(&self) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(b"\n");
        let _ = stdout.flush();
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallback;

impl StreamCallback for NoopCallback {
    fn on_fragment(&self, _fragment: &str) {}
}
