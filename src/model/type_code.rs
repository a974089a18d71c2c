use serde::{Serialize, Serializer};

use crate::model::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode {
    high: [bool; 4],
}

impl TypeCode {
    pub fn from_flags(high: [bool; 4]) -> Self {
        Self { high }
    }

    pub fn is_high(&self, category: Category) -> bool {
        self.high[category.index()]
    }

    pub fn all() -> Vec<TypeCode> {
        let mut out = Vec::with_capacity(16);
        for bits in 0u8..16 {
            let mut high = [false; 4];
            for (i, slot) in high.iter_mut().enumerate() {
                *slot = bits & (0b1000 >> i) == 0;
            }
            out.push(TypeCode { high });
        }
        out
    }

    pub fn parse(raw: &str) -> Option<TypeCode> {
        let chars: Vec<char> = raw.trim().chars().collect();
        if chars.len() != Category::ALL.len() {
            return None;
        }
        let mut high = [false; 4];
        for (category, ch) in Category::ALL.into_iter().zip(chars) {
            let (hi, lo) = category.letter_pair();
            let ch = ch.to_ascii_uppercase();
            if ch == hi {
                high[category.index()] = true;
            } else if ch != lo {
                return None;
            }
        }
        Some(TypeCode { high })
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for category in Category::ALL {
            write!(f, "{}", category.letter(self.is_high(category)))?;
        }
        Ok(())
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/type_code.rs"]
mod tests;
