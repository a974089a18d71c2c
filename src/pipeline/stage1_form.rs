use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::input::QuestionSet;
use crate::model::answer::Answer;
use crate::model::likert::{LikertScore, scale_legend};

pub const FORM_INTRO: &str = "以下の質問に、直感で答えてください。";
const RETRY_NOTICE: &str = "1〜5 の数字を入力してください (空欄でデフォルト)。";

// An empty line keeps the default score; input ending early fills the rest
// with the default. Questions without a category are asked but yield no
// answer.
pub fn run_stage1_interactive<R: BufRead, W: Write>(
    questions: &QuestionSet,
    mut input: R,
    mut output: W,
) -> io::Result<Vec<Answer>> {
    let legend = scale_legend();
    let mut answers = Vec::with_capacity(questions.len());
    let mut buf = String::new();
    let mut exhausted = false;
    let mut answered = 0usize;
    let mut asked = 0usize;

    writeln!(output, "{FORM_INTRO}")?;
    for (idx, question) in questions.iter().enumerate() {
        let score = if exhausted {
            LikertScore::DEFAULT
        } else {
            writeln!(output)?;
            writeln!(output, "Q{}. {}", idx + 1, question.text)?;
            writeln!(
                output,
                "  {legend} (Enter = {})",
                LikertScore::DEFAULT.value()
            )?;
            loop {
                write!(output, "> ")?;
                output.flush()?;
                buf.clear();
                if input.read_line(&mut buf)? == 0 {
                    exhausted = true;
                    break LikertScore::DEFAULT;
                }
                let raw = buf.trim();
                if raw.is_empty() {
                    break LikertScore::DEFAULT;
                }
                match LikertScore::parse(raw) {
                    Some(score) => break score,
                    None => writeln!(output, "{RETRY_NOTICE}")?,
                }
            }
        };
        asked += 1;
        if !exhausted {
            answered += 1;
        }
        debug!(question = idx + 1, score = score.value(), "answer recorded");
        if let Some(category) = question.category {
            answers.push(Answer::new(category, score));
        }
    }

    if exhausted {
        warn!(
            answered,
            total = asked,
            "input ended before the form was complete; remaining questions use the default score"
        );
    }
    Ok(answers)
}

// `scores` holds one entry per question, unscored ones included.
pub fn answers_from_scores(questions: &QuestionSet, scores: &[LikertScore]) -> Vec<Answer> {
    questions
        .iter()
        .zip(scores.iter())
        .filter_map(|(q, s)| q.category.map(|c| Answer::new(c, *s)))
        .collect()
}

pub fn default_answers(questions: &QuestionSet) -> Vec<Answer> {
    questions
        .iter()
        .filter_map(|q| q.category)
        .map(|c| Answer::new(c, LikertScore::DEFAULT))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_form.rs"]
mod tests;
