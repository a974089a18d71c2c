use crate::model::category::Category;
use crate::model::role::Role;
use crate::model::thresholds::ScoringProfile;
use crate::model::titles::title_for;
use crate::model::type_code::TypeCode;
use crate::pipeline::stage2_aggregate::CategoryAverages;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultProfile {
    pub code: TypeCode,
    pub title: &'static str,
    pub best_role: Role,
    pub dominant: Category,
}

pub fn run_stage3(averages: &CategoryAverages, profile: &ScoringProfile) -> ResultProfile {
    let code = derive_type_code(averages, profile.threshold);
    let dominant = dominant_category(averages);
    ResultProfile {
        code,
        title: title_for(&code),
        best_role: Role::for_dominant(dominant),
        dominant,
    }
}

pub fn derive_type_code(averages: &CategoryAverages, threshold: f64) -> TypeCode {
    let mut high = [false; 4];
    for (category, avg) in averages.iter() {
        high[category.index()] = avg >= threshold;
    }
    TypeCode::from_flags(high)
}

// Highest average wins; on a tie the earlier category in `Category::ALL`
// keeps the slot.
pub fn dominant_category(averages: &CategoryAverages) -> Category {
    let mut best = Category::ALL[0];
    let mut best_value = averages.get(best);
    for (category, avg) in averages.iter().skip(1) {
        if avg > best_value {
            best = category;
            best_value = avg;
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
