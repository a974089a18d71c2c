use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

pub mod answers;
pub mod json;
pub mod source;
pub mod table;
pub mod xlsx;

use crate::model::category::Category;
use source::{QuestionFormat, detect_format, open_maybe_gz};
use table::{Dialect, RawQuestion, parse_delimited};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    // `None` for rows whose category is not one of the four; they are still
    // asked but never scored.
    pub category: Option<Category>,
}

#[derive(Debug, Clone)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    pub source: PathBuf,
    pub skipped_rows: usize,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn count_by_category(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for category in self.questions.iter().filter_map(|q| q.category) {
            counts[category.index()] += 1;
        }
        counts
    }

    pub fn unscored(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.category.is_none())
            .count()
    }
}

#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] calamine::XlsxError),
}

pub fn load_questions(path: &Path) -> Result<QuestionSet, QuestionError> {
    if !path.exists() {
        return Err(QuestionError::MissingInput(format!(
            "question file not found: {}",
            path.display()
        )));
    }
    let format = detect_format(path).ok_or_else(|| {
        QuestionError::InvalidInput(format!(
            "unsupported question file extension (use .tsv, .csv, .json, .xlsx, optionally .gz): {}",
            path.display()
        ))
    })?;
    debug!(path = %path.display(), ?format, "loading question file");

    let reader = open_maybe_gz(path)?;
    let raw = match format {
        QuestionFormat::Tsv => parse_delimited(reader, Dialect::Tsv)?,
        QuestionFormat::Csv => parse_delimited(reader, Dialect::Csv)?,
        QuestionFormat::Json => json::parse_json(reader)?,
        QuestionFormat::Xlsx => xlsx::parse_xlsx(reader)?,
    };

    let set = build_question_set(raw, path);
    info!(
        path = %path.display(),
        questions = set.len(),
        unscored = set.unscored(),
        skipped = set.skipped_rows,
        "question set loaded"
    );
    Ok(set)
}

pub fn build_question_set(raw: Vec<RawQuestion>, source: &Path) -> QuestionSet {
    let mut questions = Vec::with_capacity(raw.len());
    let mut skipped_rows = 0usize;

    for row in raw {
        let text = row.question.trim();
        if text.is_empty() {
            warn!(line = row.line, "question text is empty; skipping row");
            skipped_rows += 1;
            continue;
        }
        let category = Category::parse(&row.category);
        if category.is_none() {
            warn!(
                line = row.line,
                category = %row.category,
                "unknown question category; question is asked but not scored"
            );
        }
        questions.push(Question {
            text: text.to_string(),
            category,
        });
    }

    QuestionSet {
        questions,
        source: source.to_path_buf(),
        skipped_rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
