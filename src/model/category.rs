use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Aggro,
    Logic,
    Stoic,
    Teamwork,
}

impl Category {
    // Type-code letters, chart axes and tie-breaking all follow this order.
    pub const ALL: [Category; 4] = [
        Category::Aggro,
        Category::Logic,
        Category::Stoic,
        Category::Teamwork,
    ];

    pub fn index(self) -> usize {
        match self {
            Category::Aggro => 0,
            Category::Logic => 1,
            Category::Stoic => 2,
            Category::Teamwork => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Aggro => "Aggro",
            Category::Logic => "Logic",
            Category::Stoic => "Stoic",
            Category::Teamwork => "Teamwork",
        }
    }

    // (high, low)
    pub fn letter_pair(self) -> (char, char) {
        match self {
            Category::Aggro => ('A', 'P'),
            Category::Logic => ('L', 'I'),
            Category::Stoic => ('S', 'E'),
            Category::Teamwork => ('T', 'C'),
        }
    }

    pub fn letter(self, high: bool) -> char {
        let (hi, lo) = self.letter_pair();
        if high { hi } else { lo }
    }

    pub fn share_key(self) -> char {
        self.letter_pair().0
    }

    pub fn chart_label(self) -> &'static str {
        match self {
            Category::Aggro => "積極性(A)",
            Category::Logic => "論理性(L)",
            Category::Stoic => "精神安定(S)",
            Category::Teamwork => "協力意識(T)",
        }
    }

    // Case-sensitive; only surrounding whitespace is forgiven.
    pub fn parse(raw: &str) -> Option<Category> {
        let needle = raw.trim();
        Category::ALL.into_iter().find(|c| c.name() == needle)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
