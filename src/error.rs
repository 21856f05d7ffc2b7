use thiserror::Error;

/// Input rejections raised at the alignment boundary, before any matrix
/// is allocated.
///
/// An out-of-band pair is *not* an error: it is reported through an
/// empty score on [`Alignment`](crate::align::Alignment).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// One of the input sequences is empty.
    #[error("cannot align an empty sequence")]
    EmptySequence,
    /// A symbol outside the nucleotide alphabet was found.
    #[error("symbol '{0}' is not a nucleotide")]
    UnknownSymbol(char),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AlignError::EmptySequence.to_string(),
            "cannot align an empty sequence"
        );
        assert_eq!(
            AlignError::UnknownSymbol('x').to_string(),
            "symbol 'x' is not a nucleotide"
        );
    }
}
