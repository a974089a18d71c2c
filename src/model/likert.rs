use serde::Serialize;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

const LABELS: [&str; 5] = [
    "全く違う",
    "あまりない",
    "どちらでもない",
    "まあまあある",
    "強くそう思う",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LikertScore(u8);

impl LikertScore {
    pub const DEFAULT: LikertScore = LikertScore(3);

    pub fn new(value: u8) -> Option<LikertScore> {
        if (LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            Some(LikertScore(value))
        } else {
            None
        }
    }

    pub fn parse(raw: &str) -> Option<LikertScore> {
        raw.trim().parse::<u8>().ok().and_then(LikertScore::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        LABELS[(self.0 - LIKERT_MIN) as usize]
    }

    pub fn all() -> impl Iterator<Item = LikertScore> {
        (LIKERT_MIN..=LIKERT_MAX).map(LikertScore)
    }
}

impl Default for LikertScore {
    fn default() -> Self {
        LikertScore::DEFAULT
    }
}

// One-line legend shown under every prompt, e.g. `1:全く違う / 2:あまりない / ...`.
pub fn scale_legend() -> String {
    LikertScore::all()
        .map(|s| format!("{}:{}", s.value(), s.label()))
        .collect::<Vec<_>>()
        .join(" / ")
}
