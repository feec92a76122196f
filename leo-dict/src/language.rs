//! 支持的语言对
//!
//! 所有语言对都是德语和另一种语言，`keyword`是用户输入的触发词

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub keyword: &'static str,
    /// LEO使用的语言对代码，如`ende`
    pub language_code: &'static str,
    pub description: &'static str,
    /// 图标资源的key，由上层UI加载
    pub icon: &'static str,
}

impl LanguageEntry {
    /// 把语言对代码拆成两个语言代码，如`ende` -> `("en", "de")`
    ///
    /// 代码不是4个ascii字母时返回`None`
    pub fn languages(&self) -> Option<(&'static str, &'static str)> {
        split_language_code(self.language_code)
    }
}

pub fn split_language_code(code: &str) -> Option<(&str, &str)> {
    if code.len() != 4 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(code.split_at(2))
}

static LANGUAGES: [LanguageEntry; 7] = [
    LanguageEntry {
        keyword: "de",
        language_code: "ende",
        description: "Translate to German or English",
        icon: "en",
    },
    LanguageEntry {
        keyword: "df",
        language_code: "frde",
        description: "Translate to German or French",
        icon: "fr",
    },
    LanguageEntry {
        keyword: "ds",
        language_code: "esde",
        description: "Translate to German or Spanish",
        icon: "es",
    },
    LanguageEntry {
        keyword: "di",
        language_code: "itde",
        description: "Translate to German or Italian",
        icon: "it",
    },
    LanguageEntry {
        keyword: "dr",
        language_code: "rude",
        description: "Translate to German or Russian",
        icon: "ru",
    },
    LanguageEntry {
        keyword: "db",
        language_code: "ptde",
        description: "Translate to German or Portuguese",
        icon: "pt",
    },
    LanguageEntry {
        keyword: "dp",
        language_code: "plde",
        description: "Translate to German or Polish",
        icon: "pl",
    },
];

pub fn languages() -> &'static [LanguageEntry] {
    &LANGUAGES
}

pub fn find_by_keyword(keyword: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|l| l.keyword == keyword)
}

pub fn find_by_code(language_code: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|l| l.language_code == language_code)
}
