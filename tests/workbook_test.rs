mod common;

use common::{read_sheet, sheet_names, write_input_workbook};
use keyword_suggest::{AppError, DayKey, KeywordRecord, KeywordSource, RankedResult, ResultSink};
use tempfile::tempdir;

#[test]
fn test_reads_day_sheet_skipping_header_and_empty_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Excel.xlsx");
    write_input_workbook(
        &path,
        &[
            ("Monday", &["Keyword", "pizza"][..]),
            ("Tuesday", &["Keyword", "sushi", "", "ramen"][..]),
        ],
    );

    let mut source = KeywordSource::open(path.to_string_lossy()).unwrap();
    let keywords = source.keywords_for(DayKey::Tuesday).unwrap();

    assert_eq!(
        keywords,
        Some(vec![
            KeywordRecord::new(2, "sushi"),
            KeywordRecord::new(4, "ramen"),
        ])
    );
}

#[test]
fn test_missing_day_sheet_is_distinct_from_empty_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Excel.xlsx");
    write_input_workbook(&path, &[("Monday", &["Keyword"][..]), ("Friday", &["pizza"][..])]);

    let mut source = KeywordSource::open(path.to_string_lossy()).unwrap();

    assert_eq!(source.keywords_for(DayKey::Monday).unwrap(), Some(Vec::new()));
    assert_eq!(source.keywords_for(DayKey::Sunday).unwrap(), None);
}

#[test]
fn test_sheet_name_match_ignores_case() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Excel.xlsx");
    write_input_workbook(&path, &[("wednesday", &["Keyword", "pho"][..])]);

    let mut source = KeywordSource::open(path.to_string_lossy()).unwrap();
    let keywords = source.keywords_for(DayKey::Wednesday).unwrap().unwrap();

    assert_eq!(keywords, vec![KeywordRecord::new(2, "pho")]);
}

#[test]
fn test_missing_input_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.xlsx");

    let err = KeywordSource::open(path.to_string_lossy()).err().unwrap();
    assert!(matches!(err, AppError::Workbook(_)));
}

#[test]
fn test_result_sink_writes_header_and_rows_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Updated_Excel.xlsx");
    let batch = vec![
        RankedResult {
            keyword: "pizza".to_string(),
            longest: "pizza dough recipe".to_string(),
            shortest: "pizza hut".to_string(),
        },
        RankedResult::degraded("sushi"),
    ];

    ResultSink::new(path.to_string_lossy()).write(DayKey::Friday, &batch).unwrap();

    assert_eq!(sheet_names(&path), vec!["Friday"]);
    let rows = read_sheet(&path, "Friday");
    assert_eq!(rows[0], vec!["Keyword", "Longest", "Shortest"]);
    assert_eq!(rows[1], vec!["pizza", "pizza dough recipe", "pizza hut"]);
    assert_eq!(rows[2], vec!["sushi", "", ""]);
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_result_sink_overwrites_previous_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Updated_Excel.xlsx");
    let sink = ResultSink::new(path.to_string_lossy());

    sink.write(
        DayKey::Monday,
        &vec![RankedResult::degraded("a"), RankedResult::degraded("b")],
    )
    .unwrap();
    sink.write(DayKey::Tuesday, &vec![RankedResult::degraded("c")])
        .unwrap();

    assert_eq!(sheet_names(&path), vec!["Tuesday"]);
    let rows = read_sheet(&path, "Tuesday");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "c");
}
