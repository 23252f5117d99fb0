// src/progress.rs
/// Lightweight progress reporting for a conversion run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of files that will be processed.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One file produced a game.
    fn item_done(&mut self, _slot: usize, _name: &str) {}

    /// One file failed to read or parse.
    fn item_failed(&mut self, _slot: usize, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
