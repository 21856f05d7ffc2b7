#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which region of the score matrix to explore?
pub enum AlignMode {
    #[default]
    /// Unrestricted method.
    /// * Explores the whole `(m+1) x (n+1)` matrix, `O(m*n)` time.
    /// * Always produces a score.
    Full,
    /// Banded method.
    /// * Explores only the cells within the band radius of the main
    ///   diagonal, `O(m*k)` time and memory.
    /// * Valid only when the sequence lengths differ by at most the
    ///   radius; otherwise no alignment exists within the band and the
    ///   score is reported as empty.
    ///
    /// ### Example
    /// Lengths 10 and 15 with radius 3:
    /// * `|10 - 15| = 5 > 3`, so the pair has no banded alignment.
    Banded,
}
