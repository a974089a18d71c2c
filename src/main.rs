mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::input::answers::load_answers;
use crate::input::load_questions;
use crate::model::category::Category;
use crate::model::thresholds::ScoringProfile;
use crate::model::titles::title_for;
use crate::model::type_code::TypeCode;
use crate::pipeline::stage1_form::{answers_from_scores, default_answers, run_stage1_interactive};
use crate::pipeline::stage2_aggregate::run_stage2;
use crate::pipeline::stage3_classify::run_stage3;
use crate::pipeline::stage4_report::{
    AnswerSource, RADAR_FILE, Stage4Input, render_reports, write_reports,
};
use crate::report::text::render_type_table;

const TOOL_NAME: &str = "valo-type40";

/// VALO-TYPE 40: play-style diagnosis from 40 Likert questions.
#[derive(Debug, Parser)]
#[command(name = "valo-type40", version, propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer the questionnaire and print the diagnosis
    Run(RunArgs),
    /// List the 16 type codes and their titles, or look up one code
    Types {
        /// Four-letter code such as ALST
        code: Option<String>,
    },
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Question table (.tsv, .csv, .json or .xlsx, optionally .gz) with `question` and `category` columns
    #[arg(long, value_name = "FILE")]
    questions: PathBuf,

    /// Read scores (1-5, one per question) from a file instead of prompting
    #[arg(long, value_name = "FILE", conflicts_with = "defaults")]
    answers: Option<PathBuf>,

    /// Answer every question with the default score
    #[arg(long)]
    defaults: bool,

    /// Write report.txt, share.txt, radar.svg and summary.json here
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Averages at or above this take the high letter
    #[arg(long, default_value_t = ScoringProfile::default_v1().threshold, value_parser = parse_threshold)]
    threshold: f64,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Command::Run(args) => run(&args),
        Command::Types { code } => types(code.as_deref()),
    };

    if let Err(err) = result {
        error!("{err}");
        eprintln!("エラー: {err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), AppError> {
    let profile = ScoringProfile::with_threshold(args.threshold);

    let questions = load_questions(&args.questions)?;
    if questions.len() != profile.expected_questions {
        warn!(
            expected = profile.expected_questions,
            found = questions.len(),
            "question count differs from the standard form"
        );
    }
    if questions.is_empty() {
        warn!("question set is empty; every average will be 0");
    }
    for (category, count) in Category::ALL.iter().zip(questions.count_by_category()) {
        if count == 0 {
            warn!(%category, "no questions for category; its average will be 0");
        }
    }

    let (answers, answer_source) = if let Some(path) = &args.answers {
        let scores = load_answers(path, questions.len())?;
        (answers_from_scores(&questions, &scores), AnswerSource::File)
    } else if args.defaults {
        (default_answers(&questions), AnswerSource::Defaults)
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let answers = run_stage1_interactive(&questions, stdin.lock(), stdout.lock())?;
        (answers, AnswerSource::Interactive)
    };

    let averages = run_stage2(&answers);
    let result = run_stage3(&averages, &profile);
    info!(
        code = %result.code,
        role = %result.best_role,
        dominant = %result.dominant,
        "diagnosis complete"
    );

    let input = Stage4Input {
        questions: &questions,
        answers: &answers,
        answer_source,
        averages: &averages,
        result: &result,
        profile: &profile,
        tool_name: TOOL_NAME.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let reports = render_reports(&input)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout)?;
    writeln!(stdout, "{}", reports.report)?;
    writeln!(stdout, "### 💬 Discord共有用テキスト")?;
    writeln!(stdout, "{}", reports.share)?;

    if let Some(out_dir) = &args.out {
        write_reports(&reports, out_dir)?;
        writeln!(stdout)?;
        writeln!(stdout, "レーダーチャート: {}", out_dir.join(RADAR_FILE).display())?;
    }

    Ok(())
}

fn types(code: Option<&str>) -> Result<(), AppError> {
    let Some(raw) = code else {
        print!("{}", render_type_table());
        return Ok(());
    };
    let code = TypeCode::parse(raw).ok_or_else(|| AppError::InvalidCode(raw.to_string()))?;
    println!("{code}\t{}", title_for(&code));
    Ok(())
}

fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid threshold: {raw}"))?;
    if !value.is_finite() {
        return Err(format!("threshold must be finite: {raw}"));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
