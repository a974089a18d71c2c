use std::io::{self, BufRead};

use crate::input::QuestionError;

pub const QUESTION_COLUMN: &str = "question";
pub const CATEGORY_COLUMN: &str = "category";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuestion {
    pub line: usize,
    pub question: String,
    pub category: String,
}

// TSV splits on tabs literally; CSV honours double quotes, which may span
// lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Tsv,
    Csv,
}

pub fn parse_delimited<R: BufRead>(
    mut reader: R,
    dialect: Dialect,
) -> Result<Vec<RawQuestion>, QuestionError> {
    let mut buf = String::new();
    let mut line_no = 0usize;
    let mut columns: Option<(usize, usize)> = None;
    let mut rows = Vec::new();

    while read_line_trimmed(&mut reader, &mut buf, &mut line_no)? {
        if buf.trim().is_empty() {
            continue;
        }
        let start = line_no;
        let fields = match dialect {
            Dialect::Tsv => buf.split('\t').map(str::to_string).collect(),
            Dialect::Csv => {
                let mut record = buf.clone();
                while has_open_quote(&record) {
                    if !read_line_trimmed(&mut reader, &mut buf, &mut line_no)? {
                        return Err(QuestionError::Parse {
                            line: start,
                            message: "unterminated quoted field".to_string(),
                        });
                    }
                    record.push('\n');
                    record.push_str(&buf);
                }
                split_csv_fields(&record).map_err(|message| QuestionError::Parse {
                    line: start,
                    message,
                })?
            }
        };

        let Some((q_idx, c_idx)) = columns else {
            columns = Some(locate_columns(&fields, start)?);
            continue;
        };

        rows.push(RawQuestion {
            line: start,
            question: fields.get(q_idx).cloned().unwrap_or_default(),
            category: fields.get(c_idx).cloned().unwrap_or_default(),
        });
    }

    if columns.is_none() {
        return Err(QuestionError::InvalidInput(
            "question file is empty".to_string(),
        ));
    }

    Ok(rows)
}

fn read_line_trimmed<R: BufRead>(
    reader: &mut R,
    buf: &mut String,
    line_no: &mut usize,
) -> io::Result<bool> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Ok(false);
    }
    *line_no += 1;
    let len = buf.trim_end_matches(['\r', '\n']).len();
    buf.truncate(len);
    if *line_no == 1 && buf.starts_with('\u{feff}') {
        buf.drain(..'\u{feff}'.len_utf8());
    }
    Ok(true)
}

pub(crate) fn locate_columns(
    header: &[String],
    line_no: usize,
) -> Result<(usize, usize), QuestionError> {
    let find = |name: &str| {
        header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let question = find(QUESTION_COLUMN).ok_or_else(|| QuestionError::Parse {
        line: line_no,
        message: format!("header has no `{QUESTION_COLUMN}` column"),
    })?;
    let category = find(CATEGORY_COLUMN).ok_or_else(|| QuestionError::Parse {
        line: line_no,
        message: format!("header has no `{CATEGORY_COLUMN}` column"),
    })?;
    Ok((question, category))
}

fn has_open_quote(record: &str) -> bool {
    let mut chars = record.chars().peekable();
    let mut quoted = false;
    let mut at_field_start = true;

    while let Some(c) = chars.next() {
        if quoted {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    quoted = false;
                }
            }
            continue;
        }
        match c {
            ',' => at_field_start = true,
            '"' if at_field_start => {
                quoted = true;
                at_field_start = false;
            }
            _ => at_field_start = false,
        }
    }
    quoted
}

// `""` inside a quoted field stands for one quote; a quote in the middle of
// a bare field is literal.
pub fn split_csv_fields(record: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = record.chars().peekable();
    let mut quoted = false;
    let mut at_field_start = true;

    while let Some(c) = chars.next() {
        if quoted {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    quoted = false;
                    match chars.peek() {
                        None | Some(&',') => {}
                        Some(&next) => {
                            return Err(format!(
                                "unexpected character {next:?} after closing quote"
                            ));
                        }
                    }
                }
            } else {
                field.push(c);
            }
            continue;
        }

        if c == ',' {
            fields.push(std::mem::take(&mut field));
            at_field_start = true;
            continue;
        }
        if c == '"' && at_field_start {
            quoted = true;
            at_field_start = false;
            continue;
        }
        field.push(c);
        at_field_start = false;
    }

    if quoted {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
