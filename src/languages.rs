//! The fixed language table: one "water" article per language, titles percent-encoded.

use percent_encoding::percent_decode_str;

/// Language code and URL-encoded article title, in request order.
pub const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("ar", "%D9%85%D8%A7%D8%A1"),
    ("bg", "%D0%92%D0%BE%D0%B4%D0%B0"),
    ("cs", "Voda"),
    ("de", "Wasser"),
    ("el", "%CE%9D%CE%B5%CF%81%CF%8C"),
    ("fa", "%D8%A2%D8%A8"),
    ("fi", "Vesi"),
    ("fr", "Eau"),
    ("he", "%D7%9E%D7%99%D7%9D"),
    ("hi", "%E0%A4%9C%E0%A4%B2"),
    ("is", "Vatn"),
    ("ja", "%E6%B0%B4"),
    ("ka", "%E1%83%AC%E1%83%A7%E1%83%90%E1%83%9A%E1%83%98"),
    ("ki", "Mai"),
    ("ko", "%EB%AC%BC"),
    ("ku", "Av"),
    ("lt", "Vanduo"),
    ("lv", "%C5%AAdens"),
    ("nah", "Atl"),
    ("nqo", "%DF%96%DF%8C"),
    ("pl", "Woda"),
    ("pt", "%C3%81gua"),
    ("ru", "%D0%92%D0%BE%D0%B4%D0%B0"),
    ("shi", "Aman"),
    ("sl", "Voda"),
    ("szl", "Woda"),
    ("ta", "%E0%AE%A8%E0%AF%80%E0%AE%B0%E0%AF%8D"),
    ("tr", "Su"),
    ("uk", "%D0%92%D0%BE%D0%B4%D0%B0"),
    ("vep", "Vezi"),
    ("vi", "N%C6%B0%E1%BB%9Bc"),
    ("zh", "%E6%B0%B4"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub lang: &'static str,
    pub article: &'static str,
}

impl Entry {
    /// Article title with percent-escapes decoded, for log output.
    pub fn display_title(&self) -> String {
        percent_decode_str(self.article)
            .decode_utf8_lossy()
            .into_owned()
    }
}

/// Returns the whole table, or only the entries whose code is in `filter`.
/// Table order is kept either way. Unknown codes are returned as `Err`.
pub fn select(filter: &[String]) -> Result<Vec<Entry>, String> {
    if let Some(unknown) = filter
        .iter()
        .find(|code| !LANGUAGE_TABLE.iter().any(|&(lang, _)| lang == code.as_str()))
    {
        return Err(unknown.clone());
    }

    Ok(LANGUAGE_TABLE
        .iter()
        .filter(|&&(lang, _)| filter.is_empty() || filter.iter().any(|code| code == lang))
        .map(|&(lang, article)| Entry { lang, article })
        .collect())
}
