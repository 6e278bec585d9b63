use super::*;

fn run(input: &str) -> Result<(usize, String), BatchError> {
    let scorer = SimilarityScorer::stub();
    let mut output = Vec::new();
    let rows = score_csv(&scorer, input.as_bytes(), &mut output)?;
    Ok((rows, String::from_utf8(output).expect("utf-8 output")))
}

#[test]
fn test_appends_score_column() {
    let input = "id,text1,text2\n\
                 1,The quick brown fox,The quick brown fox\n\
                 2,the and of,hello world\n";

    let (rows, output) = run(input).unwrap();
    assert_eq!(rows, 2);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "id,text1,text2,similarity_score");
    assert_eq!(lines[1], "1,The quick brown fox,The quick brown fox,1.0");
    assert_eq!(lines[2], "2,the and of,hello world,0.0");
}

#[test]
fn test_scores_match_combiner() {
    let text1 = "The quick brown fox jumps over the lazy dog";
    let text2 = "A fast brown fox leaps over a sleeping dog";
    let input = format!("text1,text2\n{text1},{text2}\n");

    let (_, output) = run(&input).unwrap();
    let expected = SimilarityScorer::stub().compute_similarity(text1, text2);

    let score: f64 = output
        .lines()
        .nth(1)
        .and_then(|line| line.rsplit(',').next())
        .and_then(|field| field.parse().ok())
        .expect("score field");
    assert_eq!(score, expected);
}

#[test]
fn test_quoted_fields_round_trip() {
    let input = "text1,text2\n\"Hello, world\",\"Hello, world\"\n";

    let (_, output) = run(input).unwrap();
    assert_eq!(output.lines().nth(1), Some("\"Hello, world\",\"Hello, world\",1.0"));
}

#[test]
fn test_empty_cells_score_zero() {
    let input = "text1,text2,note\n,something,x\nonly,,y\n";

    let (rows, output) = run(input).unwrap();
    assert_eq!(rows, 2);
    assert!(output.lines().skip(1).all(|line| line.ends_with(",0.0")));
}

#[test]
fn test_short_rows_are_padded() {
    let input = "text1,text2,note\nfox,fox\n";

    let (_, output) = run(input).unwrap();
    assert_eq!(output.lines().nth(1), Some("fox,fox,,1.0"));
}

#[test]
fn test_wide_row_is_rejected_before_writing() {
    let scorer = SimilarityScorer::stub();
    let mut output = Vec::new();
    let input = "text1,text2\nbrown fox,brown fox\nbrown fox,brown fox,EXTRA,MORE\n";

    let err = score_csv(&scorer, input.as_bytes(), &mut output).unwrap_err();
    assert!(matches!(
        err,
        BatchError::RaggedRow {
            line: 3,
            expected: 2,
            found: 4
        }
    ));
    assert!(err.to_string().contains("line 3"));
    assert!(output.is_empty());
}

#[test]
fn test_missing_column_is_error() {
    let err = run("text1,other\na,b\n").unwrap_err();
    assert!(matches!(err, BatchError::MissingColumn { column: "text2" }));
    assert!(err.to_string().contains("'text1' and 'text2'"));

    let err = run("foo,text2\na,b\n").unwrap_err();
    assert!(matches!(err, BatchError::MissingColumn { column: "text1" }));
}

#[test]
fn test_header_only_input() {
    let (rows, output) = run("text1,text2\n").unwrap();
    assert_eq!(rows, 0);
    assert_eq!(output, "text1,text2,similarity_score\n");
}

#[test]
fn test_format_score() {
    assert_eq!(format_score(0.0), "0.0");
    assert_eq!(format_score(1.0), "1.0");
    assert_eq!(format_score(0.57), "0.57");
    assert_eq!(format_score(0.1), "0.1");
}

#[test]
fn test_file_variant_does_not_create_output_on_bad_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, "a,b\n1,2\n").expect("write input");

    let err = score_csv_file(&SimilarityScorer::stub(), &input, &output).unwrap_err();
    assert!(matches!(err, BatchError::MissingColumn { .. }));
    assert!(!output.exists());
}

#[test]
fn test_file_variant_does_not_create_output_on_wide_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, "text1,text2\nfox,fox\nbrown fox,brown fox,EXTRA,MORE\n")
        .expect("write input");

    let err = score_csv_file(&SimilarityScorer::stub(), &input, &output).unwrap_err();
    assert!(matches!(err, BatchError::RaggedRow { found: 4, .. }));
    assert!(!output.exists());
}

#[test]
fn test_file_variant_writes_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, "text1,text2\nbrown fox,brown fox\n").expect("write input");

    let rows = score_csv_file(&SimilarityScorer::stub(), &input, &output).unwrap();
    assert_eq!(rows, 1);

    let written = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(
        written,
        "text1,text2,similarity_score\nbrown fox,brown fox,1.0\n"
    );
}

#[test]
fn test_missing_input_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = score_csv_file(
        &SimilarityScorer::stub(),
        &dir.path().join("missing.csv"),
        &dir.path().join("out.csv"),
    )
    .unwrap_err();
    assert!(matches!(err, BatchError::Csv(_)));
}
