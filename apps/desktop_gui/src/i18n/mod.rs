//! Localization: one flat dictionary per language plus locale-aware dates.
//!
//! Lookup is a direct key match. There is no pluralization, interpolation or
//! cross-language fallback; an unknown key renders as the key itself.

mod dictionaries;

use std::{fmt, str::FromStr};

use chrono::{DateTime, Locale, TimeZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    It,
    En,
    Fr,
    De,
    Es,
    Pt,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::It,
        Language::En,
        Language::Fr,
        Language::De,
        Language::Es,
        Language::Pt,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::Pt => "pt",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::It => "🇮🇹",
            Language::En => "🇬🇧",
            Language::Fr => "🇫🇷",
            Language::De => "🇩🇪",
            Language::Es => "🇪🇸",
            Language::Pt => "🇵🇹",
        }
    }

    /// Native name shown in the language picker.
    pub fn label(self) -> &'static str {
        match self {
            Language::It => "Italiano",
            Language::En => "English",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Es => "Español",
            Language::Pt => "Português",
        }
    }

    pub fn locale(self) -> Locale {
        match self {
            Language::It => Locale::it_IT,
            Language::En => Locale::en_GB,
            Language::Fr => Locale::fr_FR,
            Language::De => Locale::de_DE,
            Language::Es => Locale::es_ES,
            Language::Pt => Locale::pt_PT,
        }
    }

    fn long_date_pattern(self) -> &'static str {
        match self {
            Language::It | Language::En | Language::Fr => "%A %-d %B %Y",
            Language::De => "%A, %-d. %B %Y",
            Language::Es | Language::Pt => "%A, %-d de %B de %Y",
        }
    }

    fn dictionary(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::It => dictionaries::IT,
            Language::En => dictionaries::EN,
            Language::Fr => dictionaries::FR,
            Language::De => dictionaries::DE,
            Language::Es => dictionaries::ES,
            Language::Pt => dictionaries::PT,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let code = value.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| format!("unsupported language '{code}'"))
    }
}

pub fn tr<'a>(lang: Language, key: &'a str) -> &'a str {
    lang.dictionary()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
        .unwrap_or(key)
}

/// Weekday, day, month and year spelled out in the language's locale.
pub fn format_long_date<Tz>(date: &DateTime<Tz>, lang: Language) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    date.format_localized(lang.long_date_pattern(), lang.locale())
        .to_string()
}
