use log::debug;

use crate::{
    band,
    config::AlignConfig,
    error::AlignError,
    full,
    mode::AlignMode,
    scoring::UNREACHABLE,
    task::AlignTask,
    trace::walk_back,
};

/// Symbols accepted at the alignment boundary.
pub const NUCLEOTIDES: &str = "ACGT";

/// Pairwise sequence alignment.
///
/// Both fields are empty rather than erroneous when no alignment
/// satisfies the band constraint; callers render that case with their
/// own "no alignment possible" text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Minimum edit cost between the two (truncated) sequences.
    /// * `None` when the pair has no alignment within the band.
    pub score: Option<i32>,
    /// The two gapped alignment strings. Equal in length; stripping the
    /// gap markers recovers the (truncated) inputs.
    /// * Present only when [`AlignTask::Path`] was requested and the
    ///   score is finite.
    pub aligned: Option<(String, String)>,
}

impl Alignment {
    /// Aligns two nucleotide sequences, returning an [`Alignment`].
    ///
    /// Inputs are validated (non-empty, alphabet-only) and truncated to
    /// the configured alignment length before any matrix is allocated.
    ///
    /// * @param `config`: [`AlignConfig`] configuration.
    /// * @param `seq1`: First sequence.
    /// * @param `seq2`: Second sequence.
    ///
    /// ### Example
    /// ```
    /// use nwalign::{align::Alignment, config::AlignConfig, task::AlignTask};
    ///
    /// let config = AlignConfig {
    ///     task: AlignTask::Path,
    ///     ..AlignConfig::default()
    /// };
    /// let result = Alignment::run(config, "AA", "AT").unwrap();
    /// assert_eq!(result.score, Some(-2));
    /// assert_eq!(result.aligned, Some(("AA".into(), "AT".into())));
    /// ```
    pub fn run(
        config: AlignConfig,
        seq1: impl AsRef<str>,
        seq2: impl AsRef<str>,
    ) -> Result<Self, AlignError> {
        let (seq1, seq2) = (seq1.as_ref(), seq2.as_ref());
        check_sequence(seq1)?;
        check_sequence(seq2)?;

        let seq1 = prefix(seq1, config.align_length);
        let seq2 = prefix(seq2, config.align_length);
        debug!(
            "aligning {} x {} symbols ({:?}, {:?})",
            seq1.len(),
            seq2.len(),
            config.mode,
            config.task
        );

        let (score, aligned) = match config.mode {
            AlignMode::Full => {
                let pass = full::fill(seq1, seq2, &config.scoring);
                let score = pass.scores[(seq1.len(), seq2.len())];
                let aligned = (config.task == AlignTask::Path)
                    .then(|| walk_back(&pass.steps, seq1, seq2));
                (Some(score), aligned)
            }
            AlignMode::Banded => {
                match band::fill(seq1, seq2, config.band_radius, &config.scoring) {
                    Some(pass) => {
                        let score = pass.scores[(seq1.len(), seq2.len())];
                        if score == UNREACHABLE {
                            (None, None)
                        } else {
                            let aligned = (config.task == AlignTask::Path)
                                .then(|| walk_back(&pass.steps, seq1, seq2));
                            (Some(score), aligned)
                        }
                    }
                    None => (None, None),
                }
            }
        };

        Ok(Self { score, aligned })
    }
}

/// Align every pair from `sequences`, computing the upper triangle of
/// the pair grid (including the diagonal) and leaving the lower
/// triangle empty: `result[i][j]` is `None` for `j < i`, since that
/// pair already appears at `result[j][i]`.
pub fn align_pairs<S: AsRef<str>>(
    config: &AlignConfig,
    sequences: &[S],
) -> Result<Vec<Vec<Option<Alignment>>>, AlignError> {
    let mut results = Vec::with_capacity(sequences.len());
    for (i, seq1) in sequences.iter().enumerate() {
        let mut row = Vec::with_capacity(sequences.len());
        for (j, seq2) in sequences.iter().enumerate() {
            if j < i {
                row.push(None);
            } else {
                row.push(Some(Alignment::run(config.clone(), seq1, seq2)?));
            }
        }
        results.push(row);
    }
    Ok(results)
}

fn check_sequence(seq: &str) -> Result<(), AlignError> {
    if seq.is_empty() {
        return Err(AlignError::EmptySequence);
    }
    match seq.chars().find(|symbol| !NUCLEOTIDES.contains(*symbol)) {
        Some(symbol) => Err(AlignError::UnknownSymbol(symbol)),
        None => Ok(()),
    }
}

/// Leading `limit` bytes of the sequence. Safe to slice bytewise: the
/// alphabet check has already confined the input to ASCII.
fn prefix(seq: &str, limit: Option<usize>) -> &[u8] {
    let bytes = seq.as_bytes();
    match limit {
        Some(limit) if limit < bytes.len() => &bytes[..limit],
        _ => bytes,
    }
}
