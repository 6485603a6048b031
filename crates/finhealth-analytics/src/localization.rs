//! Localization of the fixed report vocabulary.
//!
//! Each locale is a plain `term -> localized term` table. Lookups never chain
//! between locales: an unknown locale code, or a term missing from the
//! locale's table, returns the input text unchanged.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The English terms that built-in locales translate.
pub const VOCABULARY: [&str; 5] = ["Risk Score", "Credit Score", "Strong", "Moderate", "High Risk"];

/// A single locale's `term -> localized term` table.
pub type TermTable = BTreeMap<String, String>;

static BUILTIN: Lazy<Translations> = Lazy::new(|| {
    Translations::new()
        .with_locale("en", std::iter::empty::<(String, String)>())
        .with_locale(
            "hi",
            [
                ("Risk Score", "जोखिम स्कोर"),
                ("Credit Score", "क्रेडिट स्कोर"),
                ("Strong", "मजबूत"),
                ("Moderate", "मध्यम"),
                ("High Risk", "उच्च जोखिम"),
            ],
        )
});

/// Locale tables keyed by locale code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    locales: BTreeMap<String, TermTable>,
}

impl Translations {
    /// Creates an empty set of tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide built-in tables (`en`, `hi`).
    pub fn builtin() -> &'static Translations {
        &BUILTIN
    }

    /// Adds a locale, replacing any existing table with the same code.
    #[must_use]
    pub fn with_locale<K, V>(
        mut self,
        code: impl Into<String>,
        terms: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = terms
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.locales.insert(code.into(), table);
        self
    }

    /// Adds every locale of `other`, replacing tables that share a code.
    #[must_use]
    pub fn merged(mut self, other: &Translations) -> Self {
        for (code, table) in &other.locales {
            self.locales.insert(code.clone(), table.clone());
        }
        self
    }

    /// Localizes `text` for `language`, falling back to `text` itself.
    pub fn localize<'a>(&'a self, text: &'a str, language: &str) -> &'a str {
        self.locales
            .get(language)
            .and_then(|table| table.get(text))
            .map_or(text, String::as_str)
    }

    /// Returns true if a table exists for `language`.
    pub fn has_locale(&self, language: &str) -> bool {
        self.locales.contains_key(language)
    }

    /// The table for `language`, if any.
    pub fn table(&self, language: &str) -> Option<&TermTable> {
        self.locales.get(language)
    }

    /// Known locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }
}

/// Localizes `text` with the built-in tables.
///
/// # Example
///
/// ```rust
/// use finhealth_analytics::localize;
///
/// assert_eq!(localize("Strong", "hi"), "मजबूत");
/// assert_eq!(localize("Strong", "fr"), "Strong");
/// ```
pub fn localize<'a>(text: &'a str, language: &str) -> &'a str {
    Translations::builtin().localize(text, language)
}
