//! "Build your dish" record and its JSON download.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};

/// Suffix appended to every exported file name.
pub const EXPORT_FILE_SUFFIX: &str = "_carb_combo.json";

/// Raw form input from the final page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishForm {
    pub dish_name: String,
    pub sugar1: String,
    pub sugar2: String,
    pub description: String,
}

impl DishForm {
    /// Check that every field was filled in.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("sugar1", &self.sugar1),
            ("sugar2", &self.sugar2),
            ("dish_name", &self.dish_name),
            ("description", &self.description),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(PuzzleError::MissingField(name));
            }
        }
        Ok(())
    }

    /// Validate and stamp the form into an exportable record.
    pub fn into_record(self, now: DateTime<Utc>) -> Result<DishRecord> {
        self.validate()?;
        Ok(DishRecord {
            dish_name: self.dish_name,
            sugar_combo: [self.sugar1, self.sugar2],
            description: self.description,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

/// The downloadable dish file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRecord {
    pub dish_name: String,
    pub sugar_combo: [String; 2],
    pub description: String,
    /// ISO-8601, UTC.
    pub timestamp: String,
}

impl DishRecord {
    /// Download name: whitespace runs in the dish name become underscores.
    pub fn file_name(&self) -> String {
        let mut name = String::with_capacity(self.dish_name.len() + EXPORT_FILE_SUFFIX.len());
        let mut in_gap = false;
        for c in self.dish_name.chars() {
            if c.is_whitespace() {
                if !in_gap {
                    name.push('_');
                }
                in_gap = true;
            } else {
                name.push(c);
                in_gap = false;
            }
        }
        name.push_str(EXPORT_FILE_SUFFIX);
        name
    }

    /// Pretty-printed JSON body with two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
