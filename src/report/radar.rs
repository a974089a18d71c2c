use std::f64::consts::PI;

use crate::model::category::Category;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage2_aggregate::CategoryAverages;
use crate::report::format_avg;

pub const CHART_TITLE: &str = "プレイスタイル分析グラフ";
pub const LINE_COLOR: &str = "#ff4b4b";

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 500.0;
const CENTER_X: f64 = 240.0;
const CENTER_Y: f64 = 270.0;
const RADIUS: f64 = 170.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxis {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub axes: Vec<RadarAxis>,
    pub range: (f64, f64),
}

impl RadarChart {
    pub fn from_averages(averages: &CategoryAverages, profile: &ScoringProfile) -> Self {
        let axes = Category::ALL
            .iter()
            .map(|&c| RadarAxis {
                label: c.chart_label(),
                value: averages.get(c),
            })
            .collect();
        Self {
            axes,
            range: (profile.axis_min, profile.axis_max),
        }
    }

    pub fn closed_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.axes.iter().map(|a| a.value).collect();
        if let Some(first) = values.first().copied() {
            values.push(first);
        }
        values
    }

    pub fn closed_labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self.axes.iter().map(|a| a.label).collect();
        if let Some(first) = labels.first().copied() {
            labels.push(first);
        }
        labels
    }

    pub fn plotted_labels(&self) -> Vec<String> {
        self.axes.iter().map(|a| format_avg(a.value)).collect()
    }

    // Share of the radius a value occupies; out-of-range values pin to the
    // nearest end of the axis.
    pub fn radial_fraction(&self, value: f64) -> f64 {
        let (lo, hi) = self.range;
        if hi <= lo {
            return 0.0;
        }
        (value.clamp(lo, hi) - lo) / (hi - lo)
    }

    fn angle(&self, idx: usize) -> f64 {
        let n = self.axes.len().max(1) as f64;
        -PI / 2.0 + 2.0 * PI * idx as f64 / n
    }

    pub fn point_at(&self, idx: usize, fraction: f64) -> (f64, f64) {
        let theta = self.angle(idx);
        (
            CENTER_X + RADIUS * fraction * theta.cos(),
            CENTER_Y + RADIUS * fraction * theta.sin(),
        )
    }

    pub fn vertices(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = self
            .axes
            .iter()
            .enumerate()
            .map(|(i, a)| self.point_at(i, self.radial_fraction(a.value)))
            .collect();
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        points
    }
}

pub fn render_radar_svg(chart: &RadarChart) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = WIDTH,
        h = HEIGHT
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");
    out.push_str(&format!(
        "<text x=\"{}\" y=\"36\" font-size=\"20\" text-anchor=\"middle\">{}</text>\n",
        CENTER_X,
        escape_xml(CHART_TITLE)
    ));

    let (lo, hi) = chart.range;
    let n_axes = chart.axes.len();
    let steps = (hi - lo).round().max(1.0) as usize;
    for step in 1..=steps {
        let tick = lo + (hi - lo) * step as f64 / steps as f64;
        let fraction = chart.radial_fraction(tick);
        let ring = (0..n_axes)
            .map(|i| fmt_point(chart.point_at(i, fraction)))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "<polygon points=\"{ring}\" fill=\"none\" stroke=\"#dddddd\" stroke-width=\"1\"/>\n"
        ));
        let (tx, ty) = chart.point_at(0, fraction);
        out.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"11\" fill=\"#888888\">{}</text>\n",
            tx + 4.0,
            ty + 4.0,
            format_avg(tick)
        ));
    }

    for (i, axis) in chart.axes.iter().enumerate() {
        let (x, y) = chart.point_at(i, 1.0);
        out.push_str(&format!(
            "<line x1=\"{CENTER_X}\" y1=\"{CENTER_Y}\" x2=\"{x:.2}\" y2=\"{y:.2}\" stroke=\"#cccccc\" stroke-width=\"1\"/>\n"
        ));
        let (lx, ly) = chart.point_at(i, 1.12);
        out.push_str(&format!(
            "<text x=\"{lx:.2}\" y=\"{ly:.2}\" font-size=\"14\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
            escape_xml(axis.label)
        ));
    }

    let path = chart
        .vertices()
        .iter()
        .map(|&p| fmt_point(p))
        .collect::<Vec<_>>();
    out.push_str(&format!(
        "<path d=\"M {} Z\" fill=\"{LINE_COLOR}\" fill-opacity=\"0.35\" stroke=\"{LINE_COLOR}\" stroke-width=\"2\"/>\n",
        path.join(" L ")
    ));

    for (i, (axis, label)) in chart.axes.iter().zip(chart.plotted_labels()).enumerate() {
        let (x, y) = chart.point_at(i, chart.radial_fraction(axis.value));
        out.push_str(&format!(
            "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"3\" fill=\"{LINE_COLOR}\"><title>{}: {label}</title></circle>\n",
            escape_xml(axis.label)
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn fmt_point((x, y): (f64, f64)) -> String {
    format!("{x:.2},{y:.2}")
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/radar.rs"]
mod tests;
