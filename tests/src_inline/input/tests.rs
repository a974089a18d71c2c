use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;
use rust_xlsxwriter::Workbook;

use super::answers::{AnswerError, parse_answers};
use super::source::{QuestionFormat, detect_format};
use super::table::RawQuestion;
use super::{QuestionError, build_question_set, load_questions};
use crate::model::category::Category;
use crate::model::likert::LikertScore;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("valo_type40_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_load_tsv_in_file_order() {
    let dir = make_temp_dir();
    let path = dir.join("questions.tsv");
    write_file(
        &path,
        "question\tcategory\n敵に詰める\tAggro\n情報を整理する\tLogic\n\n味方を待つ\tTeamwork\n",
    );

    let set = load_questions(&path).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.questions[0].text, "敵に詰める");
    assert_eq!(set.questions[0].category, Some(Category::Aggro));
    assert_eq!(set.questions[2].category, Some(Category::Teamwork));
    assert_eq!(set.skipped_rows, 0);
    assert_eq!(set.count_by_category(), [1, 1, 0, 1]);
}

#[test]
fn test_load_csv_with_bom_quotes_and_extra_columns() {
    let dir = make_temp_dir();
    let path = dir.join("questions.csv");
    write_file(
        &path,
        "\u{feff}id,category,question\r\n1,Stoic,\"負けても, 切り替えられる\"\r\n2,Logic,\"\"\"定石\"\"を守る\"\r\n",
    );

    let set = load_questions(&path).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.questions[0].text, "負けても, 切り替えられる");
    assert_eq!(set.questions[0].category, Some(Category::Stoic));
    assert_eq!(set.questions[1].text, "\"定石\"を守る");
    assert_eq!(set.questions[1].category, Some(Category::Logic));
}

#[test]
fn test_load_gz_tsv() {
    let dir = make_temp_dir();
    let path = dir.join("questions.tsv.gz");
    write_gz(&path, "question\tcategory\nq1\tAggro\nq2\tStoic\n");

    let set = load_questions(&path).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.questions[1].category, Some(Category::Stoic));
}

#[test]
fn test_load_tsv_with_leading_quote_in_text() {
    let dir = make_temp_dir();
    let path = dir.join("questions.tsv");
    write_file(
        &path,
        "question\tcategory\n\"勝ちたい\"と強く思う\tAggro\n",
    );

    let set = load_questions(&path).unwrap();
    assert_eq!(set.questions[0].text, "\"勝ちたい\"と強く思う");
}

#[test]
fn test_load_csv_multiline_cell() {
    let dir = make_temp_dir();
    let path = dir.join("questions.csv");
    write_file(&path, "question,category\n\"line one\nline two\",Aggro\n");

    let set = load_questions(&path).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.questions[0].text, "line one\nline two");
}

#[test]
fn test_load_xlsx_keeps_unknown_category_rows() {
    let dir = make_temp_dir();
    let path = dir.join("valorant_questions.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let rows = [
        ["question", "category"],
        ["敵に詰める", "Aggro"],
        ["運が良い", "Luck"],
        ["味方を待つ", "aggro"],
        ["情報を整理する", "Logic"],
    ];
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet.write_string(r as u32, c as u16, *value).unwrap();
        }
    }
    workbook.save(&path).unwrap();

    let set = load_questions(&path).unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(set.unscored(), 2);
    assert_eq!(set.questions[1].category, None);
    assert_eq!(set.questions[2].category, None);
    assert_eq!(set.questions[3].category, Some(Category::Logic));
}

#[test]
fn test_load_gz_xlsx() {
    let dir = make_temp_dir();
    let path = dir.join("questions.xlsx.gz");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "question").unwrap();
    sheet.write_string(0, 1, "category").unwrap();
    sheet.write_string(1, 0, "q1").unwrap();
    sheet.write_string(1, 1, "Stoic").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();
    let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    enc.write_all(&bytes).unwrap();
    enc.finish().unwrap();

    let set = load_questions(&path).unwrap();
    assert_eq!(set.questions[0].category, Some(Category::Stoic));
}

#[test]
fn test_load_json() {
    let dir = make_temp_dir();
    let path = dir.join("questions.json");
    write_file(
        &path,
        r#"[{"question":"q1","category":"Teamwork"},{"question":"q2","category":"Aggro"}]"#,
    );

    let set = load_questions(&path).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.questions[0].category, Some(Category::Teamwork));
}

#[test]
fn test_unknown_category_kept_unscored_and_blank_text_skipped() {
    let raw = vec![
        RawQuestion {
            line: 2,
            question: "ok".to_string(),
            category: "Aggro".to_string(),
        },
        RawQuestion {
            line: 3,
            question: "lucky".to_string(),
            category: "Luck".to_string(),
        },
        RawQuestion {
            line: 4,
            question: "   ".to_string(),
            category: "Logic".to_string(),
        },
    ];
    let set = build_question_set(raw, Path::new("q.tsv"));
    assert_eq!(set.len(), 2);
    assert_eq!(set.questions[1].text, "lucky");
    assert_eq!(set.questions[1].category, None);
    assert_eq!(set.unscored(), 1);
    assert_eq!(set.skipped_rows, 1);
    assert_eq!(set.count_by_category(), [1, 0, 0, 0]);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = make_temp_dir();
    let err = load_questions(&dir.join("nope.tsv")).unwrap_err();
    assert!(matches!(err, QuestionError::MissingInput(_)));
}

#[test]
fn test_unsupported_extension_is_fatal() {
    let dir = make_temp_dir();
    let path = dir.join("questions.ods");
    write_file(&path, "binary");
    let err = load_questions(&path).unwrap_err();
    assert!(matches!(err, QuestionError::InvalidInput(_)));
}

#[test]
fn test_missing_category_column_is_fatal() {
    let dir = make_temp_dir();
    let path = dir.join("questions.tsv");
    write_file(&path, "question\ttrait\nq1\tAggro\n");
    let err = load_questions(&path).unwrap_err();
    assert!(matches!(err, QuestionError::Parse { line: 1, .. }));
}

#[test]
fn test_empty_file_is_fatal() {
    let dir = make_temp_dir();
    let path = dir.join("questions.csv");
    write_file(&path, "\n\n");
    let err = load_questions(&path).unwrap_err();
    assert!(matches!(err, QuestionError::InvalidInput(_)));
}

#[test]
fn test_malformed_json_is_fatal() {
    let dir = make_temp_dir();
    let path = dir.join("questions.json");
    write_file(&path, "[{\"question\": \"q1\"}]");
    let err = load_questions(&path).unwrap_err();
    assert!(matches!(err, QuestionError::Json(_)));
}

#[test]
fn test_detect_format() {
    assert_eq!(detect_format(Path::new("a.tsv")), Some(QuestionFormat::Tsv));
    assert_eq!(detect_format(Path::new("a.CSV")), Some(QuestionFormat::Csv));
    assert_eq!(
        detect_format(Path::new("dir/a.json.gz")),
        Some(QuestionFormat::Json)
    );
    assert_eq!(detect_format(Path::new("a.XLSX")), Some(QuestionFormat::Xlsx));
    assert_eq!(detect_format(Path::new("a.ods")), None);
    assert_eq!(detect_format(Path::new("a.gz")), None);
}

#[test]
fn test_parse_answers_mixed_separators_and_comments() {
    let input = "# first block\n1, 2 3\n4\t5 # trailing\n\n3\n";
    let scores = parse_answers(Cursor::new(input), 6).unwrap();
    let values: Vec<u8> = scores.iter().map(|s| s.value()).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 3]);
}

#[test]
fn test_parse_answers_rejects_out_of_range() {
    let err = parse_answers(Cursor::new("1\n6\n"), 2).unwrap_err();
    match err {
        AnswerError::InvalidScore { line, value } => {
            assert_eq!(line, 2);
            assert_eq!(value, "6");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_answers_count_must_match() {
    let err = parse_answers(Cursor::new("1 2 3"), 4).unwrap_err();
    assert!(matches!(
        err,
        AnswerError::CountMismatch {
            expected: 4,
            found: 3
        }
    ));
    assert!(parse_answers(Cursor::new(""), 0).unwrap().is_empty());
    assert_eq!(LikertScore::parse("0"), None);
}
