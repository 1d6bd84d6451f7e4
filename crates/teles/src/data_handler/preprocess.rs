// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use crate::data_handler::column::Column;
use crate::data_handler::common::DatasetMetadata;
use crate::data_handler::dataframe::DataFrame;
use once_cell::sync::Lazy;
use regex::Regex;
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit pattern"));
static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid non-digit pattern"));
const AGE_COLUMN_NAMES: &[&str] = &["âge", "age"];
const CONTACT_COLUMN_NAMES: &[&str] = &["contact", "téléphone", "telephone", "tel"];
const CONTACT_SEPARATORS: &[char] = &['/', ',', ' '];
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    pub max_text_length: usize,
}
impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            max_text_length: 200,
        }
    }
}
#[derive(Debug, Default)]
pub struct Preprocessor {
    config: PreprocessConfig,
}
impl Preprocessor {
    pub fn new() -> Self {
        Self {
            config: PreprocessConfig::default(),
        }
    }
    pub fn with_config(config: PreprocessConfig) -> Self {
        Self { config }
    }
    // Best-effort cleaning: every branch yields a value, never an error.
    // The input frame is left untouched.
    pub fn clean(&self, frame: &DataFrame) -> DataFrame {
        let mut cleaned = DataFrame::new(DatasetMetadata::named(format!(
            "{}_cleaned",
            frame.metadata.name
        )));
        for name in frame.column_names() {
            let column = frame
                .get_column(name)
                .expect("column listed in frame order");
            let new_column = if is_age_column(name) {
                self.clean_age(column)
            } else {
                match column {
                    Column::Text(values) => self.clean_text(name, values),
                    Column::Numeric(values) => {
                        Column::Numeric(values.iter().map(|v| Some(v.unwrap_or(0.0))).collect())
                    }
                }
            };
            cleaned
                .add_column(name.clone(), new_column)
                .expect("cleaned column keeps source length");
        }
        cleaned
            .drop_duplicates()
            .expect("dedup indices come from the frame itself")
    }
    fn clean_age(&self, column: &Column) -> Column {
        let values = (0..column.len())
            .map(|i| {
                let extracted = column
                    .get_string(i)
                    .and_then(|s| DIGIT_RUN.find(&s).map(|m| m.as_str().to_string()))
                    .and_then(|digits| digits.parse::<f64>().ok())
                    .unwrap_or(0.0);
                Some(extracted)
            })
            .collect();
        Column::Numeric(values)
    }
    fn clean_text(&self, name: &str, values: &[Option<String>]) -> Column {
        let is_contact = is_contact_column(name);
        let cleaned = values
            .iter()
            .map(|value| {
                let mut text = value.clone().unwrap_or_default();
                if is_contact {
                    let first = text.split(CONTACT_SEPARATORS).next().unwrap_or("");
                    text = NON_DIGIT.replace_all(first, "").into_owned();
                }
                let mut text = text.to_lowercase();
                if text.chars().count() > self.config.max_text_length {
                    text = text.chars().take(self.config.max_text_length).collect();
                }
                Some(text)
            })
            .collect();
        Column::Text(cleaned)
    }
}
fn is_age_column(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    AGE_COLUMN_NAMES.contains(&name.as_str())
}
fn is_contact_column(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    CONTACT_COLUMN_NAMES.contains(&name.as_str())
}
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    fn text_column(values: &[Option<&str>]) -> Column {
        Column::Text(values.iter().map(|v| v.map(str::to_string)).collect())
    }
    #[test]
    fn age_extraction_takes_first_digit_run() {
        let mut frame = DataFrame::named("people");
        frame
            .add_column(
                "Âge",
                text_column(&[Some("25 ans"), Some("environ 40"), Some("inconnu"), None]),
            )
            .unwrap();
        let cleaned = Preprocessor::new().clean(&frame);
        let age = cleaned.get_column("Âge").unwrap();
        assert_eq!(age.get_numeric(0), Some(25.0));
        assert_eq!(age.get_numeric(1), Some(40.0));
        assert_eq!(age.get_numeric(2), Some(0.0));
        assert_eq!(age.get_numeric(3), Some(0.0));
    }
    #[test]
    fn contact_keeps_first_segment_digits_only() {
        let mut frame = DataFrame::named("people");
        frame
            .add_column(
                "Contact",
                text_column(&[
                    Some("06 12 34 56 78 / 01 22 33 44 55"),
                    Some("+33-6-99-88-77-66"),
                    None,
                ]),
            )
            .unwrap();
        let cleaned = Preprocessor::new().clean(&frame);
        let contact = cleaned.get_column("Contact").unwrap();
        assert_eq!(contact.get_string(0), Some("06".to_string()));
        assert_eq!(contact.get_string(1), Some("33699887766".to_string()));
        assert_eq!(contact.get_string(2), Some(String::new()));
    }
    #[test]
    fn text_is_lowercased_truncated_and_filled() {
        let long = "A".repeat(300);
        let mut frame = DataFrame::named("notes");
        frame
            .add_column(
                "Commentaire",
                text_column(&[Some(long.as_str()), Some("Bonjour"), None]),
            )
            .unwrap();
        let cleaned = Preprocessor::new().clean(&frame);
        let notes = cleaned.get_column("Commentaire").unwrap();
        assert_eq!(notes.get_string(0).unwrap().chars().count(), 200);
        assert_eq!(notes.get_string(1), Some("bonjour".to_string()));
        assert_eq!(notes.get_string(2), Some(String::new()));
    }
    #[test]
    fn duplicate_rows_are_dropped_after_normalization() {
        let mut frame = DataFrame::named("dup");
        frame
            .add_column("Ville", text_column(&[Some("Paris"), Some("paris"), Some("Lyon")]))
            .unwrap();
        let cleaned = Preprocessor::new().clean(&frame);
        // "Paris" and "paris" normalize to the same row.
        assert_eq!(cleaned.row_count(), 2);
    }
    #[test]
    fn numeric_missing_becomes_zero() {
        let mut frame = DataFrame::named("sales");
        frame
            .add_column("Ventes", Column::Numeric(vec![Some(10.0), None]))
            .unwrap();
        let cleaned = Preprocessor::new().clean(&frame);
        assert_eq!(cleaned.get_column("Ventes").unwrap().null_count(), 0);
        assert_eq!(cleaned.get_column("Ventes").unwrap().get_numeric(1), Some(0.0));
    }
    fn arbitrary_frame() -> impl Strategy<Value = DataFrame> {
        let cell = proptest::option::of("[a-zA-Z0-9 àéèî]{0,12}");
        let column = proptest::collection::vec(cell, 1..8);
        proptest::collection::vec(column, 1..4).prop_map(|columns| {
            let rows = columns.iter().map(Vec::len).min().unwrap_or(0);
            let mut frame = DataFrame::named("generated");
            let names = ["Âge", "Contact", "Ville", "Commentaire"];
            for (i, values) in columns.into_iter().enumerate() {
                let truncated: Vec<Option<String>> = values.into_iter().take(rows).collect();
                frame
                    .add_column(names[i % names.len()], Column::Text(truncated))
                    .unwrap();
            }
            frame
        })
    }
    proptest! {
        #[test]
        fn clean_is_idempotent(frame in arbitrary_frame()) {
            let preprocessor = Preprocessor::new();
            let once = preprocessor.clean(&frame);
            let twice = preprocessor.clean(&once);
            for name in once.column_names() {
                prop_assert_eq!(once.get_column(name), twice.get_column(name));
            }
        }
        #[test]
        fn clean_leaves_no_missing_values_or_duplicates(frame in arbitrary_frame()) {
            let cleaned = Preprocessor::new().clean(&frame);
            for name in cleaned.column_names() {
                prop_assert_eq!(cleaned.get_column(name).unwrap().null_count(), 0);
            }
            let deduped = cleaned.drop_duplicates().unwrap();
            prop_assert_eq!(deduped.row_count(), cleaned.row_count());
        }
    }
}
