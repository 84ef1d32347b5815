//! # Internationalization
//!
//! Supported languages, layout direction helpers and the static string
//! tables.
//!
//! The mutable "current language" lives in `bizmate-client`'s
//! `LocalizationService`; everything here is a pure function of a
//! [`Language`].
//!
//! ## Layout Helpers
//! ```text
//! ┌──────────┬───────────┬────────────────┬────────────┐
//! │ Language │ Direction │ Flex direction │ Text align │
//! ├──────────┼───────────┼────────────────┼────────────┤
//! │ en       │ ltr       │ row            │ left       │
//! │ ar       │ rtl       │ row-reverse    │ right      │
//! └──────────┴───────────┴────────────────┴────────────┘
//! ```

mod ar;
mod en;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Language
// =============================================================================

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (initial language).
    #[default]
    En,
    /// Arabic.
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// Two-letter code, as persisted.
    pub const fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Parses a persisted code. Unlike [`FromStr`], returns `None` instead
    /// of an error.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub const fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    pub const fn text_direction(&self) -> TextDirection {
        if self.is_rtl() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub const fn flex_direction(&self) -> FlexDirection {
        if self.is_rtl() {
            FlexDirection::RowReverse
        } else {
            FlexDirection::Row
        }
    }

    pub const fn text_align(&self) -> TextAlign {
        if self.is_rtl() {
            TextAlign::Right
        } else {
            TextAlign::Left
        }
    }

    /// Looks up `key` in this language's table.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        table(*self).get(key).copied()
    }

    /// Looks up `key`, returning `fallback` when it is absent.
    pub fn translate_or<'a>(&self, key: &str, fallback: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(fallback)
    }

    /// Looks up `key`, returning the key itself when it is absent.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| CoreError::UnsupportedLanguage {
            code: s.to_string(),
        })
    }
}

// =============================================================================
// Layout Values
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    RowReverse,
}

impl FlexDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
}

impl TextAlign {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
        }
    }
}

// =============================================================================
// String Tables
// =============================================================================

type StringTable = HashMap<&'static str, &'static str>;

fn table(language: Language) -> &'static StringTable {
    static EN: OnceLock<StringTable> = OnceLock::new();
    static AR: OnceLock<StringTable> = OnceLock::new();

    match language {
        Language::En => EN.get_or_init(|| en::STRINGS.iter().copied().collect()),
        Language::Ar => AR.get_or_init(|| ar::STRINGS.iter().copied().collect()),
    }
}

/// Every key defined for `language`.
pub fn keys(language: Language) -> impl Iterator<Item = &'static str> {
    table(language).keys().copied()
}
