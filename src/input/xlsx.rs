use std::io::{Cursor, Read};

use calamine::{Data, Reader, Xlsx};

use crate::input::QuestionError;
use crate::input::table::{RawQuestion, locate_columns};

// Reads the first worksheet. `line` is the 1-based sheet row, matching what a
// spreadsheet shows in its row gutter.
pub fn parse_xlsx<R: Read>(mut reader: R) -> Result<Vec<RawQuestion>, QuestionError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| QuestionError::InvalidInput("workbook has no worksheets".to_string()))??;

    let first_row = range.start().map_or(0, |(row, _)| row as usize);
    let mut columns: Option<(usize, usize)> = None;
    let mut rows = Vec::new();

    for (offset, cells) in range.rows().enumerate() {
        let line = first_row + offset + 1;
        let fields: Vec<String> = cells.iter().map(cell_text).collect();
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let Some((q_idx, c_idx)) = columns else {
            columns = Some(locate_columns(&fields, line)?);
            continue;
        };

        rows.push(RawQuestion {
            line,
            question: fields.get(q_idx).cloned().unwrap_or_default(),
            category: fields.get(c_idx).cloned().unwrap_or_default(),
        });
    }

    if columns.is_none() {
        return Err(QuestionError::InvalidInput(
            "question sheet is empty".to_string(),
        ));
    }

    Ok(rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/xlsx.rs"]
mod tests;
