pub mod json;
pub mod radar;
pub mod share;
pub mod text;

pub fn format_avg(v: f64) -> String {
    format!("{:.1}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
