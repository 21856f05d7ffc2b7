#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What should nwalign produce?
pub enum AlignTask {
    #[default]
    /// Find the edit score only.
    Score,
    /// Find the edit score and reconstruct the two gapped alignment
    /// strings from the backtrace matrix.
    Path,
}
