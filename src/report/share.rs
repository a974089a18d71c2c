use crate::model::category::Category;
use crate::pipeline::stage2_aggregate::CategoryAverages;
use crate::pipeline::stage3_classify::ResultProfile;
use crate::report::format_avg;

pub const SHARE_HEADER: &str = "**【VALO-TYPE 40 診断結果】**";
pub const SHARE_HASHTAG: &str = "#VALOTYPE40";

pub fn render_share_text(result: &ResultProfile, averages: &CategoryAverages) -> String {
    let scores = Category::ALL
        .iter()
        .map(|&c| format!("{}:{}", c.share_key(), format_avg(averages.get(c))))
        .collect::<Vec<_>>()
        .join(" / ");

    let mut out = String::new();
    out.push_str(SHARE_HEADER);
    out.push('\n');
    out.push_str(&format!("🛡️ タイプ: {} ({}型)\n", result.title, result.code));
    out.push_str(&format!("🔫 適性ロール: {}\n", result.best_role));
    out.push_str(&format!("📊 {}\n", scores));
    out.push_str(SHARE_HASHTAG);
    out
}
