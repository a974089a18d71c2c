pub mod answer;
pub mod category;
pub mod likert;
pub mod role;
pub mod thresholds;
pub mod titles;
pub mod type_code;
