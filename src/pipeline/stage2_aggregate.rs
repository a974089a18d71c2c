use crate::model::answer::Answer;
use crate::model::category::Category;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryAverages {
    values: [f64; 4],
    counts: [usize; 4],
}

impl CategoryAverages {
    #[cfg(test)]
    pub fn from_values(values: [f64; 4]) -> Self {
        Self {
            values,
            counts: [0; 4],
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.values[category.index()]
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

pub fn run_stage2(answers: &[Answer]) -> CategoryAverages {
    let mut sums = [0u32; 4];
    let mut counts = [0usize; 4];

    for answer in answers {
        let idx = answer.category.index();
        sums[idx] += u32::from(answer.score.value());
        counts[idx] += 1;
    }

    let mut values = [0.0f64; 4];
    for idx in 0..values.len() {
        // a category nobody answered stays at 0
        if counts[idx] > 0 {
            values[idx] = f64::from(sums[idx]) / counts[idx] as f64;
        }
    }

    CategoryAverages { values, counts }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
