use serde::Serialize;

use crate::model::category::Category;
use crate::model::role::Role;
use crate::model::thresholds::ScoringProfile;
use crate::model::type_code::TypeCode;
use crate::pipeline::stage2_aggregate::CategoryAverages;
use crate::pipeline::stage3_classify::ResultProfile;
use crate::report::radar::{CHART_TITLE, RadarChart};

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub scoring: ScoringMeta,
    pub result: ResultMeta,
    pub averages: Vec<CategoryStat>,
    pub chart: ChartMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub questions_path: String,
    pub n_questions: usize,
    pub skipped_rows: usize,
    pub n_unscored: usize,
    pub n_answers: usize,
    pub answer_source: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringMeta {
    pub threshold: f64,
    pub axis_min: f64,
    pub axis_max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultMeta {
    pub code: TypeCode,
    pub title: String,
    pub best_role: Role,
    pub dominant: Category,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryStat {
    pub category: Category,
    pub average: f64,
    pub answers: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartMeta {
    pub title: String,
    pub range: [f64; 2],
    pub theta: Vec<String>,
    pub r: Vec<f64>,
}

impl ChartMeta {
    pub fn from_chart(chart: &RadarChart) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            range: [chart.range.0, chart.range.1],
            theta: chart
                .closed_labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            r: chart.closed_values(),
        }
    }
}

impl ScoringMeta {
    pub fn from_profile(profile: &ScoringProfile) -> Self {
        Self {
            threshold: profile.threshold,
            axis_min: profile.axis_min,
            axis_max: profile.axis_max,
        }
    }
}

impl ResultMeta {
    pub fn from_result(result: &ResultProfile) -> Self {
        Self {
            code: result.code,
            title: result.title.to_string(),
            best_role: result.best_role,
            dominant: result.dominant,
        }
    }
}

pub fn category_stats(averages: &CategoryAverages) -> Vec<CategoryStat> {
    averages
        .iter()
        .map(|(category, average)| CategoryStat {
            category,
            average,
            answers: averages.count(category),
        })
        .collect()
}

pub fn render_summary_json(data: &SummaryData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
