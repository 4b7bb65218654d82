// src/progress.rs
/// Lightweight progress reporting for a submission.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages that will run.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Extract,
    Open,
    LocateRow,
    Write,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Fetch,
        Stage::Extract,
        Stage::Open,
        Stage::LocateRow,
        Stage::Write,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Fetch => "Fetching page",
            Stage::Extract => "Reading fields",
            Stage::Open => "Opening sheet",
            Stage::LocateRow => "Finding next row",
            Stage::Write => "Writing row",
        }
    }
}
