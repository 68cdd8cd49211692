//! Translation status classification and banner configuration.
//!
//! Every page carries exactly one [`TranslationStatus`]. The status is
//! resolved once, while the tree is built, from (highest precedence first)
//! the status map file, the page's inline `translationStatus` field, and the
//! configured default. A page none of them covers fails the build with
//! [`TreeError::UnclassifiedTranslationStatus`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::tree::normalize_route;

/// Translation completeness of a page.
///
/// `Community` marks content that does not exist upstream at all; it is not
/// a degree of translation and is never treated as `Untranslated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStatus {
    Translated,
    PartiallyTranslated,
    Untranslated,
    Community,
}

impl TranslationStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [
        Self::Translated,
        Self::PartiallyTranslated,
        Self::Untranslated,
        Self::Community,
    ];

    /// Identifier used in status files and CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Translated => "translated",
            Self::PartiallyTranslated => "partially_translated",
            Self::Untranslated => "untranslated",
            Self::Community => "community",
        }
    }

    /// Color treatment of the banner for this status.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Translated => Tone::Success,
            Self::PartiallyTranslated => Tone::Warning,
            Self::Untranslated => Tone::Danger,
            Self::Community => Tone::Info,
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not one of the four known values.
#[derive(Debug, thiserror::Error)]
#[error("unknown translation status '{0}' (expected translated, partially_translated, untranslated or community)")]
pub struct ParseStatusError(String);

impl FromStr for TranslationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_owned()))
    }
}

/// Banner color treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    /// CSS modifier class for the banner.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "banner-success",
            Self::Warning => "banner-warning",
            Self::Danger => "banner-danger",
            Self::Info => "banner-info",
        }
    }
}

/// Label and message shown in a translation banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerText {
    pub label: String,
    pub message: String,
}

impl BannerText {
    fn new(label: &str, message: &str) -> Self {
        Self {
            label: label.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// Display configuration for a page's translation status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub status: TranslationStatus,
    pub label: String,
    pub message: String,
    pub tone: Tone,
}

/// Maps pages to translation banners.
///
/// Holds the per-status texts; the status itself always comes from the page.
#[derive(Clone, Debug)]
pub struct TranslationClassifier {
    translated: BannerText,
    partially_translated: BannerText,
    untranslated: BannerText,
    community: BannerText,
    show_translated: bool,
}

impl Default for TranslationClassifier {
    fn default() -> Self {
        Self {
            translated: BannerText::new("Translated", "This page has been fully translated."),
            partially_translated: BannerText::new(
                "Partially translated",
                "Parts of this page are still shown in the original language.",
            ),
            untranslated: BannerText::new(
                "Untranslated",
                "This page has not been translated yet. The original text is shown.",
            ),
            community: BannerText::new(
                "Community content",
                "This page does not exist in the upstream documentation. \
                 It was written by the translation community.",
            ),
            show_translated: false,
        }
    }
}

impl TranslationClassifier {
    /// Override the banner text of one status.
    #[must_use]
    pub fn with_text(mut self, status: TranslationStatus, text: BannerText) -> Self {
        *self.text_mut(status) = text;
        self
    }

    /// Also show a banner on fully translated pages.
    #[must_use]
    pub fn with_translated_banner(mut self, show: bool) -> Self {
        self.show_translated = show;
        self
    }

    /// Banner text configured for a status.
    #[must_use]
    pub fn text(&self, status: TranslationStatus) -> &BannerText {
        match status {
            TranslationStatus::Translated => &self.translated,
            TranslationStatus::PartiallyTranslated => &self.partially_translated,
            TranslationStatus::Untranslated => &self.untranslated,
            TranslationStatus::Community => &self.community,
        }
    }

    fn text_mut(&mut self, status: TranslationStatus) -> &mut BannerText {
        match status {
            TranslationStatus::Translated => &mut self.translated,
            TranslationStatus::PartiallyTranslated => &mut self.partially_translated,
            TranslationStatus::Untranslated => &mut self.untranslated,
            TranslationStatus::Community => &mut self.community,
        }
    }

    /// Full display configuration for a status.
    #[must_use]
    pub fn classify(&self, status: TranslationStatus) -> Banner {
        let text = self.text(status);
        Banner {
            status,
            label: text.label.clone(),
            message: text.message.clone(),
            tone: status.tone(),
        }
    }

    /// Banner to render for a status, `None` when it is suppressed.
    ///
    /// Only the `Translated` banner can be suppressed.
    #[must_use]
    pub fn banner(&self, status: TranslationStatus) -> Option<Banner> {
        if status == TranslationStatus::Translated && !self.show_translated {
            return None;
        }
        Some(self.classify(status))
    }
}

/// Route → status overrides loaded from a status file.
///
/// Keys are normalized routes, so `/a` and `/a/` address the same page.
#[derive(Clone, Debug, Default)]
pub struct StatusMap {
    entries: HashMap<String, TranslationStatus>,
}

impl StatusMap {
    /// Load a status map from a JSON or YAML file (chosen by extension).
    ///
    /// # Errors
    ///
    /// Returns `TreeError::StatusMap` if the file does not parse, or if two
    /// keys name the same route once normalized (`/a` and `/a/`).
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let raw: HashMap<String, TranslationStatus> = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| TreeError::StatusMap {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| TreeError::StatusMap {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        let mut entries = HashMap::with_capacity(raw.len());
        for (key, status) in raw {
            match entries.entry(normalize_route(&key).to_owned()) {
                Entry::Occupied(entry) => {
                    return Err(TreeError::StatusMap {
                        path: path.to_path_buf(),
                        message: format!("duplicate entry for route {}", entry.key()),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(status);
                }
            }
        }
        Ok(Self { entries })
    }

    /// Status recorded for a route.
    #[must_use]
    pub fn get(&self, route: &str) -> Option<TranslationStatus> {
        self.entries.get(normalize_route(route)).copied()
    }

    /// Iterate over `(route, status)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TranslationStatus)> {
        self.entries
            .iter()
            .map(|(route, status)| (route.as_str(), *status))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Later pairs win when two routes normalize to the same key.
impl FromIterator<(String, TranslationStatus)> for StatusMap {
    fn from_iter<I: IntoIterator<Item = (String, TranslationStatus)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(route, status)| (normalize_route(&route).to_owned(), status))
                .collect(),
        }
    }
}

/// Resolve the status of one page from its sources.
pub(crate) fn resolve_status(
    route: &str,
    inline: Option<TranslationStatus>,
    map: Option<&StatusMap>,
    default: Option<TranslationStatus>,
) -> Result<TranslationStatus, TreeError> {
    map.and_then(|m| m.get(route))
        .or(inline)
        .or(default)
        .ok_or_else(|| TreeError::UnclassifiedTranslationStatus {
            route: route.to_owned(),
        })
}
