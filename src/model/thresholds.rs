#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringProfile {
    // Averages at or above this value take the high letter.
    pub threshold: f64,
    pub axis_min: f64,
    pub axis_max: f64,
    pub expected_questions: usize,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            threshold: 3.2,
            axis_min: 1.0,
            axis_max: 5.0,
            expected_questions: 40,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        let mut base = Self::default_v1();
        base.threshold = threshold;
        base
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
