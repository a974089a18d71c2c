use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::QuestionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionFormat {
    Tsv,
    Csv,
    Json,
    Xlsx,
}

fn is_gz(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

pub fn detect_format(path: &Path) -> Option<QuestionFormat> {
    let inner = if is_gz(path) {
        Path::new(path.file_stem()?)
    } else {
        path
    };
    let ext = inner.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "tsv" | "txt" => Some(QuestionFormat::Tsv),
        "csv" => Some(QuestionFormat::Csv),
        "json" => Some(QuestionFormat::Json),
        "xlsx" => Some(QuestionFormat::Xlsx),
        _ => None,
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, QuestionError> {
    let file = File::open(path)?;
    if is_gz(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
