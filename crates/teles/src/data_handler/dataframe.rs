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
use crate::data_handler::common::{DataType, DatasetMetadata};
use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFrame {
    columns: HashMap<String, Column>,
    column_order: Vec<String>,
    pub metadata: DatasetMetadata,
}
impl DataFrame {
    pub fn new(metadata: DatasetMetadata) -> Self {
        Self {
            columns: HashMap::new(),
            column_order: Vec::new(),
            metadata,
        }
    }
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(DatasetMetadata::named(name))
    }
    pub fn add_column(&mut self, name: impl Into<String>, column: Column) -> DataResult<()> {
        let name = name.into();
        if let Some(existing) = self.columns.values().next() {
            if column.len() != existing.len() {
                return Err(DataError::LengthMismatch {
                    expected: existing.len(),
                    got: column.len(),
                });
            }
        }
        if !self.columns.contains_key(&name) {
            self.column_order.push(name.clone());
        }
        self.metadata.row_count = column.len();
        self.columns.insert(name, column);
        self.metadata.column_count = self.columns.len();
        Ok(())
    }
    pub fn row_count(&self) -> usize {
        self.metadata.row_count
    }
    pub fn column_count(&self) -> usize {
        self.metadata.column_count
    }
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }
    pub fn column_names(&self) -> &[String] {
        &self.column_order
    }
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }
    pub fn schema(&self) -> Vec<(String, DataType)> {
        self.column_order
            .iter()
            .map(|name| (name.clone(), self.columns[name].data_type()))
            .collect()
    }
    pub fn columns_of_type(&self, data_type: DataType) -> Vec<&str> {
        self.column_order
            .iter()
            .filter(|name| self.columns[*name].data_type() == data_type)
            .map(String::as_str)
            .collect()
    }
    pub fn select(&self, column_names: &[String]) -> DataResult<DataFrame> {
        let mut selected = DataFrame::new(DatasetMetadata::named(format!(
            "{}_selected",
            self.metadata.name
        )));
        for name in column_names {
            let column = self
                .get_column(name)
                .ok_or_else(|| DataError::ColumnNotFound(name.clone()))?;
            selected.add_column(name.clone(), column.clone())?;
        }
        Ok(selected)
    }
    pub fn select_rows(&self, indices: &[usize]) -> DataResult<DataFrame> {
        let mut picked = DataFrame::new(DatasetMetadata::named(format!(
            "{}_filtered",
            self.metadata.name
        )));
        for name in &self.column_order {
            let column = self.columns[name].select_rows(indices)?;
            picked.add_column(name.clone(), column)?;
        }
        picked.metadata.row_count = indices.len();
        Ok(picked)
    }
    // Missing cells get their own marker so they never compare equal to text.
    pub fn row_signature(&self, index: usize) -> Vec<String> {
        self.column_order
            .iter()
            .map(|name| match self.columns[name].get_string(index) {
                Some(value) => format!("\u{1}{value}"),
                None => "\u{0}".to_string(),
            })
            .collect()
    }
    pub fn drop_duplicates(&self) -> DataResult<DataFrame> {
        let mut seen = HashSet::new();
        let mut unique_indices = Vec::new();
        for i in 0..self.row_count() {
            if seen.insert(self.row_signature(i)) {
                unique_indices.push(i);
            }
        }
        self.select_rows(&unique_indices)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn frame(rows: &[(&str, &str)]) -> DataFrame {
        let mut df = DataFrame::named("test");
        df.add_column(
            "a",
            Column::Text(rows.iter().map(|(a, _)| Some(a.to_string())).collect()),
        )
        .unwrap();
        df.add_column(
            "b",
            Column::Text(rows.iter().map(|(_, b)| Some(b.to_string())).collect()),
        )
        .unwrap();
        df
    }
    #[test]
    fn column_order_is_insertion_order() {
        let df = frame(&[("x", "y")]);
        assert_eq!(df.column_names(), ["a", "b"]);
        assert_eq!(df.row_count(), 1);
        assert_eq!(df.column_count(), 2);
    }
    #[test]
    fn add_column_enforces_equal_lengths() {
        let mut df = frame(&[("x", "y"), ("z", "w")]);
        let err = df.add_column("c", Column::Numeric(vec![Some(1.0)]));
        assert!(matches!(
            err,
            Err(DataError::LengthMismatch {
                expected: 2,
                got: 1
            })
        ));
    }
    #[test]
    fn drop_duplicates_keeps_first_occurrence() {
        let df = frame(&[("x", "y"), ("x", "y"), ("z", "w"), ("x", "y")]);
        let deduped = df.drop_duplicates().unwrap();
        assert_eq!(deduped.row_count(), 2);
        assert_eq!(
            deduped.get_column("a").unwrap().get_string(0),
            Some("x".to_string())
        );
        assert_eq!(
            deduped.get_column("a").unwrap().get_string(1),
            Some("z".to_string())
        );
    }
    #[test]
    fn missing_values_do_not_collide_with_literal_text() {
        let mut df = DataFrame::named("test");
        df.add_column("a", Column::Text(vec![None, Some("\u{0}".to_string())]))
            .unwrap();
        let deduped = df.drop_duplicates().unwrap();
        // A None cell and a cell spelling out the marker stay distinct rows.
        assert_eq!(deduped.row_count(), 2);
    }
    #[test]
    fn select_unknown_column_fails() {
        let df = frame(&[("x", "y")]);
        assert!(matches!(
            df.select(&["nope".to_string()]),
            Err(DataError::ColumnNotFound(_))
        ));
    }
}
