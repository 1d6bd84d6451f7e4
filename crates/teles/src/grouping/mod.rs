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

pub mod kmeans;
pub mod vectorize;
use crate::data_handler::column::Column;
use crate::data_handler::common::DatasetMetadata;
use crate::data_handler::dataframe::DataFrame;
use crate::error::{DataError, DataResult};
use std::collections::HashMap;
use tracing::{debug, warn};
pub use vectorize::TfidfVectorizer;
#[derive(Debug, Clone)]
pub struct GroupingConfig {
    pub max_clusters: usize,
    pub max_distinct_values: usize,
    pub max_iterations: usize,
    pub seed: u64,
}
impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            max_clusters: 5,
            max_distinct_values: 1000,
            max_iterations: 100,
            seed: 42,
        }
    }
}
impl GroupingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_clusters == 0 {
            return Err("max_clusters must be greater than 0".to_string());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than 0".to_string());
        }
        Ok(())
    }
}
#[derive(Debug, Default)]
pub struct Grouper {
    config: GroupingConfig,
}
impl Grouper {
    pub fn new() -> Self {
        Self {
            config: GroupingConfig::default(),
        }
    }
    pub fn with_config(config: GroupingConfig) -> Self {
        Self { config }
    }
    pub fn group(&self, frame: &DataFrame, targets: &[String]) -> DataResult<DataFrame> {
        for target in targets {
            if frame.get_column(target).is_none() {
                return Err(DataError::ColumnNotFound(target.clone()));
            }
        }
        let mut grouped = DataFrame::new(DatasetMetadata::named(format!(
            "{}_grouped",
            frame.metadata.name
        )));
        for name in frame.column_names() {
            let column = frame.get_column(name).expect("column listed in frame order");
            let new_column = if targets.contains(name) {
                match column {
                    Column::Text(values) => self
                        .group_text_column(name, values)
                        .unwrap_or_else(|| column.clone()),
                    Column::Numeric(_) => column.clone(),
                }
            } else {
                column.clone()
            };
            grouped.add_column(name.clone(), new_column)?;
        }
        Ok(grouped)
    }
    // None means the column is left as-is: nothing to cluster, or the
    // cardinality ceiling was hit.
    fn group_text_column(&self, name: &str, values: &[Option<String>]) -> Option<Column> {
        let mut distinct: Vec<&str> = Vec::new();
        for value in values.iter().flatten() {
            if !distinct.contains(&value.as_str()) {
                distinct.push(value);
            }
        }
        let non_empty = distinct.iter().filter(|v| !v.is_empty()).count();
        if non_empty < 2 {
            debug!(column = %name, "skipping grouping: fewer than 2 distinct values");
            return None;
        }
        if distinct.len() > self.config.max_distinct_values {
            warn!(
                column = %name,
                distinct = distinct.len(),
                ceiling = self.config.max_distinct_values,
                "skipping grouping: distinct value ceiling exceeded"
            );
            return None;
        }
        let k = self.config.max_clusters.min(distinct.len());
        let mut vectorizer = TfidfVectorizer::new();
        let vectors = vectorizer.fit_transform(&distinct);
        let assignments = kmeans::cluster(
            &vectors,
            k,
            self.config.seed,
            self.config.max_iterations,
        );
        debug!(column = %name, distinct = distinct.len(), k, "grouped column");
        let cluster_of: HashMap<&str, usize> = distinct
            .iter()
            .zip(assignments.iter())
            .map(|(value, &cluster)| (*value, cluster))
            .collect();
        let grouped = values
            .iter()
            .map(|value| {
                value
                    .as_ref()
                    .and_then(|v| cluster_of.get(v.as_str()))
                    .map(|&cluster| cluster as f64)
            })
            .collect();
        Some(Column::Numeric(grouped))
    }
}
