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

use crate::chart_matcher::ChartKind;
use crate::data_handler::common::DataType;
use crate::data_handler::dataframe::DataFrame;
use crate::query::Intent;
use itertools::Itertools;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use tracing::debug;
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    pub cache_capacity: usize,
}
impl Default for SuggestionConfig {
    fn default() -> Self {
        Self { cache_capacity: 32 }
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub target_columns: Vec<String>,
    pub intent: Intent,
    pub chart_kind: ChartKind,
}
type SchemaSignature = Vec<(String, DataType)>;
// Memoizes per schema signature, not per dataset: two tables with the same
// columns and types yield the same proposals. Not thread-safe; the engine
// expects external single-threaded use.
pub struct SuggestionEngine {
    cache: LruCache<SchemaSignature, Vec<Suggestion>>,
}
impl std::fmt::Debug for SuggestionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionEngine")
            .field("cached_schemas", &self.cache.len())
            .field("cache_capacity", &self.cache.cap())
            .finish()
    }
}
impl SuggestionEngine {
    pub fn new() -> Self {
        Self::with_config(SuggestionConfig::default())
    }
    pub fn with_config(config: SuggestionConfig) -> Self {
        let capacity = NonZeroUsize::new(config.cache_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }
    pub fn cached_schemas(&self) -> usize {
        self.cache.len()
    }
    pub fn suggest(&mut self, frame: &DataFrame) -> Vec<Suggestion> {
        let signature = frame.schema();
        if let Some(cached) = self.cache.get(&signature) {
            let cached = cached.clone();
            debug!(schemas = self.cache.len(), "suggestion cache hit");
            return cached;
        }
        let suggestions = scan_schema(frame);
        self.cache.put(signature, suggestions.clone());
        suggestions
    }
}
impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}
fn scan_schema(frame: &DataFrame) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    for (name, data_type) in frame.schema() {
        match data_type {
            DataType::Text => {
                suggestions.push(Suggestion {
                    title: format!("Répartition de {name}"),
                    target_columns: vec![name.clone()],
                    intent: Intent::Distribution,
                    chart_kind: ChartKind::Pie,
                });
                suggestions.push(Suggestion {
                    title: format!("Top 10 de {name}"),
                    target_columns: vec![name.clone()],
                    intent: Intent::Visualization,
                    chart_kind: ChartKind::Bar,
                });
            }
            DataType::Numeric => {
                suggestions.push(Suggestion {
                    title: format!("Distribution de {name}"),
                    target_columns: vec![name.clone()],
                    intent: Intent::Distribution,
                    chart_kind: ChartKind::Box,
                });
                suggestions.push(Suggestion {
                    title: format!("Évolution de {name}"),
                    target_columns: vec![name.clone()],
                    intent: Intent::Trend,
                    chart_kind: ChartKind::Line,
                });
            }
        }
    }
    let numeric: Vec<String> = frame
        .columns_of_type(DataType::Numeric)
        .into_iter()
        .map(str::to_string)
        .collect();
    for pair in numeric.iter().combinations(2) {
        suggestions.push(Suggestion {
            title: format!("Comparaison entre {} et {}", pair[0], pair[1]),
            target_columns: vec![pair[0].clone(), pair[1].clone()],
            intent: Intent::Comparison,
            chart_kind: ChartKind::Scatter,
        });
    }
    if numeric.len() >= 2 {
        suggestions.push(Suggestion {
            title: "Corrélations entre colonnes numériques".to_string(),
            target_columns: numeric,
            intent: Intent::Comparison,
            chart_kind: ChartKind::Correlation,
        });
    }
    suggestions
}
