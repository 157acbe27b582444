// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::progress::Progress;

/// Status text plus the submission that wrote it. Older submissions
/// cannot overwrite a newer one's text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub seq: u64,
    pub text: String,
}

impl StatusLine {
    pub fn idle() -> Self {
        Self { seq: 0, text: s!("Idle") }
    }

    /// Returns false (and leaves the text alone) when `seq` is stale.
    pub fn set(&mut self, seq: u64, text: impl Into<String>) -> bool {
        if seq < self.seq {
            return false;
        }
        self.seq = seq;
        self.text = text.into();
        true
    }
}

/// Writes into the shared status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<StatusLine>>,
    seq: u64,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<StatusLine>>, seq: u64, ctx: egui::Context) -> Self {
        Self { status, seq, ctx }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            if !s.set(self.seq, msg) {
                logd!("UI: Stale status from seq={} (latest={})", self.seq, s.seq);
            }
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self) {
        self.set_status("Loading…");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn finish(&mut self) {
        self.set_status("Idle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_finish_leaves_newer_status() {
        let status = Arc::new(Mutex::new(StatusLine::idle()));
        let ctx = egui::Context::default();
        let mut old = GuiProgress::new(status.clone(), 1, ctx.clone());
        let mut new = GuiProgress::new(status.clone(), 2, ctx);

        old.begin();
        new.begin();
        old.finish();
        assert_eq!(status.lock().unwrap().text, "Loading…");

        new.finish();
        assert_eq!(*status.lock().unwrap(), StatusLine { seq: 2, text: s!("Idle") });
    }
}
