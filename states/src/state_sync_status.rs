/// Evaluation status of a recorded compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Recorded but never evaluated.
    #[default]
    Init,
    /// A dependency changed since the last evaluation.
    Dirty,
    Clean,
}

impl StateSyncStatus {
    pub fn needs_run(self) -> bool {
        matches!(self, Self::Init | Self::Dirty)
    }
}
