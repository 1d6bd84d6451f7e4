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

use crate::data_handler::common::DataType;
use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}
impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(data) => data.len(),
            Column::Text(data) => data.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn data_type(&self) -> DataType {
        match self {
            Column::Numeric(_) => DataType::Numeric,
            Column::Text(_) => DataType::Text,
        }
    }
    pub fn null_count(&self) -> usize {
        match self {
            Column::Numeric(data) => data.iter().filter(|v| v.is_none()).count(),
            Column::Text(data) => data.iter().filter(|v| v.is_none()).count(),
        }
    }
    pub fn get_string(&self, index: usize) -> Option<String> {
        match self {
            Column::Numeric(data) => data.get(index)?.map(|v| v.to_string()),
            Column::Text(data) => data.get(index)?.clone(),
        }
    }
    pub fn get_numeric(&self, index: usize) -> Option<f64> {
        match self {
            Column::Numeric(data) => *data.get(index)?,
            Column::Text(data) => data.get(index)?.as_ref().and_then(|s| s.parse().ok()),
        }
    }
    pub fn select_rows(&self, indices: &[usize]) -> DataResult<Column> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.len()) {
            return Err(DataError::RowOutOfBounds(bad));
        }
        Ok(match self {
            Column::Numeric(data) => {
                Column::Numeric(indices.iter().map(|&i| data[i]).collect())
            }
            Column::Text(data) => {
                Column::Text(indices.iter().map(|&i| data[i].clone()).collect())
            }
        })
    }
}
#[derive(Debug, Default)]
pub struct ColumnBuilder {
    values: Vec<Option<String>>,
}
impl ColumnBuilder {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }
    pub fn push(&mut self, value: Option<String>) {
        let value = value.filter(|s| !s.trim().is_empty());
        self.values.push(value);
    }
    // The type tag is decided over the whole column, not the first sample:
    // a column is Numeric only if every present value parses as a number.
    pub fn build(self) -> Column {
        let has_values = self.values.iter().any(|v| v.is_some());
        let all_numeric = has_values
            && self
                .values
                .iter()
                .flatten()
                .all(|s| s.trim().parse::<f64>().is_ok());
        if all_numeric {
            Column::Numeric(
                self.values
                    .iter()
                    .map(|v| v.as_ref().and_then(|s| s.trim().parse().ok()))
                    .collect(),
            )
        } else {
            Column::Text(self.values)
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn builder_infers_numeric_when_all_values_parse() {
        let mut builder = ColumnBuilder::new();
        for v in ["1", "2.5", "", "3"] {
            builder.push(Some(v.to_string()));
        }
        let column = builder.build();
        assert_eq!(column.data_type(), DataType::Numeric);
        assert_eq!(column.null_count(), 1);
        assert_eq!(column.get_numeric(1), Some(2.5));
    }
    #[test]
    fn builder_falls_back_to_text_on_mixed_values() {
        let mut builder = ColumnBuilder::new();
        for v in ["1", "abc", "3"] {
            builder.push(Some(v.to_string()));
        }
        let column = builder.build();
        assert_eq!(column.data_type(), DataType::Text);
        assert_eq!(column.get_string(1), Some("abc".to_string()));
    }
    #[test]
    fn all_missing_column_defaults_to_text() {
        let mut builder = ColumnBuilder::new();
        builder.push(None);
        builder.push(Some("  ".to_string()));
        let column = builder.build();
        assert_eq!(column.data_type(), DataType::Text);
        assert_eq!(column.null_count(), 2);
    }
    #[test]
    fn select_rows_rejects_out_of_bounds() {
        let column = Column::Numeric(vec![Some(1.0), Some(2.0)]);
        assert!(matches!(
            column.select_rows(&[0, 5]),
            Err(DataError::RowOutOfBounds(5))
        ));
        let picked = column.select_rows(&[1, 0]).unwrap();
        assert_eq!(picked.get_numeric(0), Some(2.0));
    }
}
