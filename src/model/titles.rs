use crate::model::type_code::TypeCode;

#[derive(Debug, Clone, Copy)]
pub struct TypeDef {
    pub code: &'static str,
    pub title: &'static str,
}

pub const FALLBACK_TITLE: &str = "変幻自在なエージェント";

const TYPE_TABLE: &[TypeDef] = &[
    TypeDef {
        code: "ALST",
        title: "冷静な戦術指揮官",
    },
    TypeDef {
        code: "ALSC",
        title: "孤高の天才軍師",
    },
    TypeDef {
        code: "ALET",
        title: "理論武装した情熱家",
    },
    TypeDef {
        code: "ALEC",
        title: "計算された破壊屋",
    },
    TypeDef {
        code: "AIST",
        title: "本能で動くエース",
    },
    TypeDef {
        code: "AISC",
        title: "野生の狩人",
    },
    TypeDef {
        code: "AIET",
        title: "熱き突撃隊長",
    },
    TypeDef {
        code: "AIEC",
        title: "暴走する破壊神",
    },
    TypeDef {
        code: "PLST",
        title: "完璧主義の守護神",
    },
    TypeDef {
        code: "PLSC",
        title: "冷徹な影の支配者",
    },
    TypeDef {
        code: "PLET",
        title: "盤面の教育者",
    },
    TypeDef {
        code: "PLEC",
        title: "職人気質の仕事人",
    },
    TypeDef {
        code: "PIST",
        title: "静かなる暗殺者",
    },
    TypeDef {
        code: "PISC",
        title: "マイペースな仕事師",
    },
    TypeDef {
        code: "PIET",
        title: "心優しいサポーター",
    },
    TypeDef {
        code: "PIEC",
        title: "感性豊かなムードメーカー",
    },
];

pub fn type_table() -> &'static [TypeDef] {
    TYPE_TABLE
}

pub fn find_title(code: &TypeCode) -> Option<&'static str> {
    let key = code.to_string();
    TYPE_TABLE
        .iter()
        .find(|def| def.code == key)
        .map(|def| def.title)
}

pub fn title_for(code: &TypeCode) -> &'static str {
    find_title(code).unwrap_or(FALLBACK_TITLE)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/titles.rs"]
mod tests;
