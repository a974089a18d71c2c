use serde::Serialize;

use crate::model::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Duelist,
    Initiator,
    Sentinel,
    Controller,
}

impl Role {
    pub fn for_dominant(category: Category) -> Role {
        match category {
            Category::Aggro => Role::Duelist,
            Category::Teamwork => Role::Initiator,
            Category::Logic => Role::Sentinel,
            Category::Stoic => Role::Controller,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Duelist => "Duelist",
            Role::Initiator => "Initiator",
            Role::Sentinel => "Sentinel",
            Role::Controller => "Controller",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
