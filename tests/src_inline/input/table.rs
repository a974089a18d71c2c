use std::io::Cursor;

use super::*;

#[test]
fn test_split_plain_fields() {
    assert_eq!(split_csv_fields("a,b,,c").unwrap(), vec!["a", "b", "", "c"]);
    assert_eq!(split_csv_fields("").unwrap(), vec![""]);
}

#[test]
fn test_split_quoted_fields() {
    assert_eq!(
        split_csv_fields("\"a,b\",\"say \"\"hi\"\"\",c").unwrap(),
        vec!["a,b", "say \"hi\"", "c"]
    );
    // a quote in the middle of a bare field is literal
    assert_eq!(split_csv_fields("it\"s,x").unwrap(), vec!["it\"s", "x"]);
}

#[test]
fn test_split_rejects_bad_quoting() {
    assert!(split_csv_fields("\"open,b").is_err());
    assert!(split_csv_fields("\"a\"b,c").is_err());
}

#[test]
fn test_open_quote_detection() {
    assert!(has_open_quote("\"line one"));
    assert!(has_open_quote("x,\"a \"\"b\"\" c"));
    assert!(!has_open_quote("\"a\",b"));
    assert!(!has_open_quote("it\"s,x"));
}

#[test]
fn test_parse_delimited_tracks_line_numbers() {
    let input = "category\tquestion\n\nAggro\tq1\nLogic\tq2\n";
    let rows = parse_delimited(Cursor::new(input), Dialect::Tsv).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 3);
    assert_eq!(rows[0].question, "q1");
    assert_eq!(rows[1].category, "Logic");
}

#[test]
fn test_tsv_quotes_are_literal() {
    let input = "question\tcategory\n\"勝ちたい\"と強く思う\tAggro\n\"全部\"\tLogic\n";
    let rows = parse_delimited(Cursor::new(input), Dialect::Tsv).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].question, "\"勝ちたい\"と強く思う");
    assert_eq!(rows[0].category, "Aggro");
    assert_eq!(rows[1].question, "\"全部\"");
}

#[test]
fn test_csv_quoted_field_spans_lines() {
    let input = "question,category\r\n\"line one\r\nline two\",Aggro\r\nnext,Stoic\r\n";
    let rows = parse_delimited(Cursor::new(input), Dialect::Csv).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[0].question, "line one\nline two");
    assert_eq!(rows[0].category, "Aggro");
    assert_eq!(rows[1].line, 4);
    assert_eq!(rows[1].question, "next");
}

#[test]
fn test_csv_quoted_field_keeps_blank_line() {
    let input = "question,category\n\"a\n\nb\",Logic\n";
    let rows = parse_delimited(Cursor::new(input), Dialect::Csv).unwrap();
    assert_eq!(rows[0].question, "a\n\nb");
}

#[test]
fn test_csv_unterminated_at_eof_reports_record_start() {
    let input = "question,category\nok,Aggro\n\"never closed,Logic\nmore\n";
    let err = parse_delimited(Cursor::new(input), Dialect::Csv).unwrap_err();
    assert!(matches!(err, QuestionError::Parse { line: 3, .. }));
}

#[test]
fn test_short_row_yields_empty_category() {
    let rows = parse_delimited(Cursor::new("question,category\nlonely\n"), Dialect::Csv).unwrap();
    assert_eq!(rows[0].question, "lonely");
    assert_eq!(rows[0].category, "");
}
