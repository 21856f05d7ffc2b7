use nwalign::{
    align_pairs, score_banded, score_full, AlignConfig, AlignError, AlignMode, AlignTask,
    Alignment, Scoring,
};

fn path_config(mode: AlignMode) -> AlignConfig {
    AlignConfig {
        mode,
        task: AlignTask::Path,
        ..AlignConfig::default()
    }
}

#[test]
fn self_alignment_scores_all_matches() {
    let scoring = Scoring::default();
    for seq in [b"A".as_slice(), b"ACGT", b"ACGTACGTACGTACGT"] {
        assert_eq!(score_full(seq, seq, &scoring), seq.len() as i32 * -3);
    }
}

#[test]
fn full_score_is_symmetric() {
    let scoring = Scoring::default();
    let pairs: [(&[u8], &[u8]); 4] = [
        (b"AA", b"AT"),
        (b"ACGT", b"TACG"),
        (b"AATTCCGG", b"ACGTACGTACGT"),
        (b"G", b"CCCCC"),
    ];
    for (a, b) in pairs {
        assert_eq!(score_full(a, b, &scoring), score_full(b, a, &scoring));
    }
}

#[test]
fn banded_agrees_with_full_inside_band() {
    let scoring = Scoring::default();
    let pairs: [(&[u8], &[u8]); 3] = [
        (b"ACGTACGTACGT", b"ACGTACGTACGT"),
        (b"ACGTACGTACGT", b"ACGTTCGTACGT"),
        (b"ACGTACGTACGT", b"ACGACGTACGT"),
    ];
    for (a, b) in pairs {
        assert_eq!(score_banded(a, b, 3, &scoring), Some(score_full(a, b, &scoring)));
    }
}

#[test]
fn banded_rejects_wide_length_difference() {
    let scoring = Scoring::default();
    // Lengths 10 and 15: |10 - 15| = 5 > 3.
    assert_eq!(
        score_banded(b"ACGTACGTAC", b"ACGTACGTACGTACG", 3, &scoring),
        None
    );
}

#[test]
fn concrete_scores_and_strings() {
    let result = Alignment::run(path_config(AlignMode::Full), "AA", "AA").unwrap();
    assert_eq!(result.score, Some(-6));
    assert_eq!(result.aligned, Some(("AA".into(), "AA".into())));

    let result = Alignment::run(path_config(AlignMode::Full), "AA", "AT").unwrap();
    assert_eq!(result.score, Some(-2));
    assert_eq!(result.aligned, Some(("AA".into(), "AT".into())));

    // Engine-level contract: aligning against nothing is pure indels.
    assert_eq!(score_full(b"A", b"", &Scoring::default()), 5);
}

#[test]
fn reconstruction_round_trips_through_gaps() {
    let pairs = [
        ("ACGT", "ACGT"),
        ("ACGTACGTACGT", "ACGACGTACGT"),
        ("AATT", "ACGTACGT"),
        ("G", "C"),
    ];
    for (seq1, seq2) in pairs {
        let result = Alignment::run(path_config(AlignMode::Full), seq1, seq2).unwrap();
        let (aligned1, aligned2) = result.aligned.expect("full mode always aligns");
        assert_eq!(aligned1.len(), aligned2.len(), "{seq1} vs {seq2}");
        assert_eq!(aligned1.replace('-', ""), seq1);
        assert_eq!(aligned2.replace('-', ""), seq2);
    }
}

#[test]
fn banded_reconstruction_round_trips() {
    let result =
        Alignment::run(path_config(AlignMode::Banded), "ACGTACGTACGT", "ACGACGTACGT").unwrap();
    assert_eq!(result.score, Some(11 * -3 + 5));
    let (aligned1, aligned2) = result.aligned.expect("pair fits in the band");
    assert_eq!(aligned1.len(), aligned2.len());
    assert_eq!(aligned1.replace('-', ""), "ACGTACGTACGT");
    assert_eq!(aligned2.replace('-', ""), "ACGACGTACGT");
}

#[test]
fn out_of_band_pair_reports_no_alignment() {
    let result =
        Alignment::run(path_config(AlignMode::Banded), "ACGTACGTAC", "ACGTACGTACGTACG").unwrap();
    assert_eq!(result.score, None);
    assert_eq!(result.aligned, None);
}

#[test]
fn boundary_rejects_bad_input() {
    assert_eq!(
        Alignment::run(AlignConfig::default(), "ACGT", ""),
        Err(AlignError::EmptySequence)
    );
    assert_eq!(
        Alignment::run(AlignConfig::default(), "ACNT", "ACGT"),
        Err(AlignError::UnknownSymbol('N'))
    );
}

#[test]
fn pair_grid_computes_upper_triangle() {
    let sequences = ["ACGTACGT", "ACGTTCGT", "ACGTACG", "TTTTTTTT"];
    let results = align_pairs(&AlignConfig::default(), &sequences).unwrap();
    for (i, row) in results.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if j < i {
                assert!(cell.is_none());
            } else {
                let alignment = cell.as_ref().expect("upper triangle is computed");
                // Scores mirror across the diagonal.
                let transposed =
                    Alignment::run(AlignConfig::default(), sequences[j], sequences[i]).unwrap();
                assert_eq!(alignment.score, transposed.score);
            }
        }
    }
}
