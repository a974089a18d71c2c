use crate::model::category::Category;
use crate::model::likert::LikertScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub category: Category,
    pub score: LikertScore,
}

impl Answer {
    pub fn new(category: Category, score: LikertScore) -> Self {
        Self { category, score }
    }
}
