use crate::model::titles::type_table;
use crate::pipeline::stage2_aggregate::CategoryAverages;
use crate::pipeline::stage3_classify::ResultProfile;
use crate::report::format_avg;

pub fn render_report_text(result: &ResultProfile, averages: &CategoryAverages) -> String {
    let mut out = String::new();

    out.push_str("VALO-TYPE 40 診断結果\n");
    out.push_str("=====================\n\n");

    out.push_str(&format!("あなたのタイプ: {}型\n", result.code));
    out.push_str(&format!("「{}」\n", result.title));
    out.push_str(&format!("適性ロール: {}\n\n", result.best_role));

    out.push_str("プレイスタイル分析\n");
    for (category, avg) in averages.iter() {
        out.push_str(&format!(
            "  {}: {} ({} answers)\n",
            category.chart_label(),
            format_avg(avg),
            averages.count(category)
        ));
    }
    out.push_str(&format!(
        "Dominant trait: {} -> {}\n",
        result.dominant, result.best_role
    ));

    out
}

pub fn render_type_table() -> String {
    let mut out = String::new();
    for def in type_table() {
        out.push_str(&format!("{}\t{}\n", def.code, def.title));
    }
    out
}
