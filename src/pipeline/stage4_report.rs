use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::input::QuestionSet;
use crate::model::answer::Answer;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage2_aggregate::CategoryAverages;
use crate::pipeline::stage3_classify::ResultProfile;
use crate::report::json::{
    ChartMeta, InputMeta, ResultMeta, ScoringMeta, SummaryData, ToolMeta, category_stats,
    render_summary_json,
};
use crate::report::radar::{RadarChart, render_radar_svg};
use crate::report::share::render_share_text;
use crate::report::text::render_report_text;

pub const REPORT_FILE: &str = "report.txt";
pub const SHARE_FILE: &str = "share.txt";
pub const RADAR_FILE: &str = "radar.svg";
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Interactive,
    File,
    Defaults,
}

impl AnswerSource {
    pub fn name(self) -> &'static str {
        match self {
            AnswerSource::Interactive => "interactive",
            AnswerSource::File => "file",
            AnswerSource::Defaults => "defaults",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub questions: &'a QuestionSet,
    pub answers: &'a [Answer],
    pub answer_source: AnswerSource,
    pub averages: &'a CategoryAverages,
    pub result: &'a ResultProfile,
    pub profile: &'a ScoringProfile,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone)]
pub struct RenderedReports {
    pub report: String,
    pub share: String,
    pub radar_svg: String,
    pub summary_json: String,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn render_reports(input: &Stage4Input<'_>) -> Result<RenderedReports, ReportError> {
    let chart = RadarChart::from_averages(input.averages, input.profile);
    let summary = build_summary(input, &chart);
    Ok(RenderedReports {
        report: render_report_text(input.result, input.averages),
        share: render_share_text(input.result, input.averages),
        radar_svg: render_radar_svg(&chart),
        summary_json: render_summary_json(&summary)?,
    })
}

pub fn build_summary(input: &Stage4Input<'_>, chart: &RadarChart) -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputMeta {
            questions_path: input.questions.source.display().to_string(),
            n_questions: input.questions.len(),
            skipped_rows: input.questions.skipped_rows,
            n_unscored: input.questions.unscored(),
            n_answers: input.answers.len(),
            answer_source: input.answer_source.name().to_string(),
        },
        scoring: ScoringMeta::from_profile(input.profile),
        result: ResultMeta::from_result(input.result),
        averages: category_stats(input.averages),
        chart: ChartMeta::from_chart(chart),
    }
}

pub fn write_reports(reports: &RenderedReports, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let files = [
        (REPORT_FILE, &reports.report),
        (SHARE_FILE, &reports.share),
        (RADAR_FILE, &reports.radar_svg),
        (SUMMARY_FILE, &reports.summary_json),
    ];
    for (name, contents) in files {
        let path = out_dir.join(name);
        write_text(&path, contents).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
