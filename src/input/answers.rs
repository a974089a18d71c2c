use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::model::likert::LikertScore;

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid score {value:?} at line {line}: expected an integer from 1 to 5")]
    InvalidScore { line: usize, value: String },
    #[error("answer count mismatch: {expected} questions but {found} answers")]
    CountMismatch { expected: usize, found: usize },
}

pub fn load_answers(path: &Path, expected: usize) -> Result<Vec<LikertScore>, AnswerError> {
    let file = File::open(path)?;
    parse_answers(BufReader::new(file), expected)
}

// Scores may be separated by whitespace, commas or newlines; `#` starts a
// comment that runs to the end of the line.
pub fn parse_answers<R: BufRead>(
    mut reader: R,
    expected: usize,
) -> Result<Vec<LikertScore>, AnswerError> {
    let mut buf = String::new();
    let mut line_no = 0usize;
    let mut scores = Vec::with_capacity(expected);

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let content = match buf.find('#') {
            Some(idx) => &buf[..idx],
            None => buf.as_str(),
        };
        for token in content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let score = LikertScore::parse(token).ok_or_else(|| AnswerError::InvalidScore {
                line: line_no,
                value: token.to_string(),
            })?;
            scores.push(score);
        }
    }

    if scores.len() != expected {
        return Err(AnswerError::CountMismatch {
            expected,
            found: scores.len(),
        });
    }
    Ok(scores)
}
