use thiserror::Error;

use crate::input::QuestionError;
use crate::input::answers::AnswerError;
use crate::pipeline::stage4_report::ReportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load questions: {0}")]
    Questions(#[from] QuestionError),
    #[error("failed to read answers: {0}")]
    Answers(#[from] AnswerError),
    #[error("failed to write reports: {0}")]
    Report(#[from] ReportError),
    #[error("not a type code: {0} (expected one of A/P, L/I, S/E, T/C per position)")]
    InvalidCode(String),
    #[error("terminal IO error: {0}")]
    Io(#[from] std::io::Error),
}
