use serde::{Deserialize, Serialize};

use super::lenient;

/// One catalog entry (a programming language)
///
/// Field names follow the English camelCase schema on output. The
/// Portuguese keys used by older catalog files are accepted as aliases.
/// Every field is optional on input: a missing key, or a value of the
/// wrong type, falls back to its default so that an incomplete record
/// still renders as a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    /// Display label, search target and chart label
    #[serde(alias = "nome", deserialize_with = "lenient::text")]
    pub name: String,

    /// Search target, shown on the card and in the detail modal
    #[serde(
        alias = "descrição",
        alias = "descricao",
        deserialize_with = "lenient::text"
    )]
    pub description: String,

    /// Year the language first appeared (display only)
    #[serde(
        alias = "ano",
        deserialize_with = "lenient::year",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_year: Option<i32>,

    /// Logo location (display only)
    #[serde(alias = "imagem", deserialize_with = "lenient::text")]
    pub image_url: String,

    /// Documentation link (display only)
    #[serde(deserialize_with = "lenient::text")]
    pub link: String,

    /// Popularity score, drives chart order and bar length
    #[serde(alias = "popularidade", deserialize_with = "lenient::number")]
    pub popularity: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, popularity: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            popularity,
            ..Self::default()
        }
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Release year as display text, `"unknown"` when absent
    pub fn release_year_label(&self) -> String {
        self.release_year
            .map(|year| year.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
