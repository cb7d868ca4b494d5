//! Localization
//!
//! User-facing strings go through a `Translator`. The English catalog is
//! the identity; `MapCatalog` carries overrides for another locale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};

/// Translation collaborator
pub trait Translator {
    fn gettext(&self, msgid: &str) -> String;

    /// Pick the singular or plural form for `n`
    fn ngettext(&self, singular: &str, plural: &str, n: i64) -> String;
}

/// Identity catalog (source strings are English)
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl Translator for EnglishCatalog {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }

    fn ngettext(&self, singular: &str, plural: &str, n: i64) -> String {
        let form = if n == 1 { singular } else { plural };
        form.to_string()
    }
}

/// Catalog loaded from JSON: `{"msgid": "translation", ...}`.
///
/// Plural entries are keyed by the plural msgid and hold `[singular, plural]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapCatalog {
    #[serde(default)]
    pub messages: HashMap<String, String>,
    #[serde(default)]
    pub plurals: HashMap<String, (String, String)>,
}

impl MapCatalog {
    pub fn from_json(json: &str) -> FormResult<Self> {
        serde_json::from_str(json).map_err(|e| FormError::Config(e.to_string()))
    }
}

impl Translator for MapCatalog {
    fn gettext(&self, msgid: &str) -> String {
        self.messages
            .get(msgid)
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }

    fn ngettext(&self, singular: &str, plural: &str, n: i64) -> String {
        match self.plurals.get(plural) {
            Some((one, many)) => (if n == 1 { one } else { many }).clone(),
            None => EnglishCatalog.ngettext(singular, plural, n),
        }
    }
}

/// Replace `{key}` placeholders
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{}}}", key), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_plural() {
        assert_eq!(EnglishCatalog.ngettext("point", "points", 1), "point");
        assert_eq!(EnglishCatalog.ngettext("point", "points", 0), "points");
    }

    #[test]
    fn test_map_catalog_falls_back() {
        let catalog = MapCatalog::from_json(
            r#"{"messages": {"Not Selected": "Non sélectionné"},
                "plurals": {"points": ["point", "points!"]}}"#,
        )
        .expect("valid catalog");
        assert_eq!(catalog.gettext("Not Selected"), "Non sélectionné");
        assert_eq!(catalog.gettext("Unnamed Option"), "Unnamed Option");
        assert_eq!(catalog.ngettext("point", "points", 3), "points!");
    }

    #[test]
    fn test_interpolate() {
        let text = interpolate("{label} - {points}", &[("label", "Good"), ("points", "3")]);
        assert_eq!(text, "Good - 3");
    }
}
