use splash_rs::core::parse_csv;
use splash_rs::error::SplashError;

#[test]
fn column_extraction_preserves_row_order() {
    let table = parse_csv("x,y,z,Country\n1,2,3,Albania\n4,5,6,Brazil\n").expect("valid csv");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.numeric_column("x").expect("x column"), vec![1.0, 4.0]);
    assert_eq!(table.numeric_column("y").expect("y column"), vec![2.0, 5.0]);
    assert_eq!(
        table.column("Country").expect("country column"),
        vec!["Albania", "Brazil"]
    );
}

#[test]
fn header_matching_is_case_sensitive() {
    let table = parse_csv("x,Country\n1,Albania\n").expect("valid csv");
    assert!(table.has_column("Country"));
    assert!(!table.has_column("country"));
    let err = table.column("country").expect_err("lowercase must miss");
    assert!(matches!(err, SplashError::InvalidData(_)));
}

#[test]
fn quoted_fields_keep_commas_and_newlines() {
    let table =
        parse_csv("name,note\n\"Bosnia, Herzegovina\",\"first\nsecond\"\n").expect("valid csv");
    assert_eq!(
        table.column("name").expect("name column"),
        vec!["Bosnia, Herzegovina"]
    );
    assert_eq!(
        table.column("note").expect("note column"),
        vec!["first\nsecond"]
    );
}

#[test]
fn doubled_quotes_escape_a_quote() {
    let table = parse_csv("phrase\n\"say \"\"hi\"\"\"\n").expect("valid csv");
    assert_eq!(
        table.column("phrase").expect("phrase column"),
        vec!["say \"hi\""]
    );
}

#[test]
fn crlf_and_trailing_newlines_are_tolerated() {
    let table = parse_csv("x,y\r\n1,2\r\n3,4\r\n\r\n").expect("valid csv");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.numeric_column("y").expect("y column"), vec![2.0, 4.0]);
}

#[test]
fn leading_bom_is_stripped() {
    let table = parse_csv("\u{feff}x\n7\n").expect("valid csv");
    assert!(table.has_column("x"));
    assert_eq!(table.numeric_column("x").expect("x column"), vec![7.0]);
}

#[test]
fn arity_mismatch_reports_the_record_number() {
    let err = parse_csv("x,y,z\n1,2,3\n4,5\n").expect_err("short row must fail");
    assert!(matches!(err, SplashError::CsvParse { record: 3, .. }));
}

#[test]
fn unterminated_quote_is_a_parse_error() {
    let err = parse_csv("x\n\"unclosed\n").expect_err("must fail");
    assert!(matches!(err, SplashError::CsvParse { .. }));
}

#[test]
fn duplicate_headers_are_rejected() {
    let err = parse_csv("x,x\n1,2\n").expect_err("must fail");
    assert!(matches!(err, SplashError::CsvParse { record: 1, .. }));
}

#[test]
fn empty_input_has_no_header() {
    let err = parse_csv("").expect_err("must fail");
    assert!(matches!(err, SplashError::CsvParse { record: 1, .. }));
}

#[test]
fn missing_column_is_reported_by_name() {
    let table = parse_csv("x\n1\n").expect("valid csv");
    let err = table.numeric_column("w").expect_err("missing column");
    match err {
        SplashError::InvalidData(message) => assert!(message.contains("`w`")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_cells_name_the_row() {
    let table = parse_csv("x\n1\nabc\n").expect("valid csv");
    let err = table.numeric_column("x").expect_err("bad number");
    match err {
        SplashError::InvalidData(message) => assert!(message.contains("row 2")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_finite_numbers_are_rejected() {
    let table = parse_csv("x\nNaN\n").expect("valid csv");
    let err = table.numeric_column("x").expect_err("non-finite");
    assert!(matches!(err, SplashError::InvalidData(_)));

    let table = parse_csv("x\ninf\n").expect("valid csv");
    let err = table.numeric_column("x").expect_err("non-finite");
    assert!(matches!(err, SplashError::InvalidData(_)));
}

#[test]
fn numeric_cells_may_carry_whitespace() {
    let table = parse_csv("x\n 1.5 \n").expect("valid csv");
    assert_eq!(
        table.numeric_column("x").expect("x column"),
        vec![1.5]
    );
}
