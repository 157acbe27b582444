// src/progress.rs
/// Status reporting for a submission in flight.
/// Frontends (GUI/CLI) implement this to show and hide their loading indicator.
pub trait Progress {
    /// Request is about to go out.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
