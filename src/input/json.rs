use std::io::BufRead;

use serde::Deserialize;

use crate::input::QuestionError;
use crate::input::table::RawQuestion;

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    category: String,
}

pub fn parse_json<R: BufRead>(reader: R) -> Result<Vec<RawQuestion>, QuestionError> {
    let records: Vec<QuestionRecord> = serde_json::from_reader(reader)?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(idx, r)| RawQuestion {
            line: idx + 1,
            question: r.question,
            category: r.category,
        })
        .collect())
}
