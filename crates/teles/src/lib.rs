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

pub mod chart_matcher;
pub mod data_handler;
pub mod error;
pub mod grouping;
pub mod query;
pub mod suggestions;
pub use chart_matcher::{detect_chart_kind, ChartKind, CHART_KEYWORDS};
pub use data_handler::{
    load_csv, Column, ColumnBuilder, CsvReader, DataFrame, DataType, DatasetMetadata,
    PreprocessConfig, Preprocessor,
};
pub use error::{AnalysisError, DataError, QueryError, Result};
pub use grouping::{Grouper, GroupingConfig};
pub use query::{Intent, Language, Normalizer};
pub use suggestions::{Suggestion, SuggestionConfig, SuggestionEngine};
use serde::{Deserialize, Serialize};
use tracing::debug;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub grouped: DataFrame,
    pub target_columns: Vec<String>,
    pub intent: Intent,
    pub chart_kind: ChartKind,
}
impl AnalysisResult {
    pub fn needs_chart_prompt(&self) -> bool {
        self.chart_kind.is_unspecified()
    }
    pub fn resolved_chart_kind(&self) -> ChartKind {
        if self.chart_kind.is_unspecified() {
            ChartKind::fallback_for(self.intent)
        } else {
            self.chart_kind
        }
    }
}
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub language: Language,
    pub preprocess: PreprocessConfig,
    pub grouping: GroupingConfig,
    pub suggestions: SuggestionConfig,
}
// One analysis request per call, processed to completion before returning.
// The suggestion cache is the only state carried across calls; the system
// is not thread-safe and expects single-threaded use.
#[derive(Debug)]
pub struct AnalysisSystem {
    normalizer: Normalizer,
    preprocessor: Preprocessor,
    grouper: Grouper,
    suggestion_engine: SuggestionEngine,
}
impl AnalysisSystem {
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config.language),
            preprocessor: Preprocessor::with_config(config.preprocess),
            grouper: Grouper::with_config(config.grouping),
            suggestion_engine: SuggestionEngine::with_config(config.suggestions),
        }
    }
    pub fn analyze(&self, frame: &DataFrame, query: &str) -> Result<AnalysisResult> {
        if query.trim().is_empty() {
            return Err(QueryError::EmptyQuery.into());
        }
        if frame.is_empty() {
            return Err(DataError::EmptyDataset.into());
        }
        let cleaned = self.preprocessor.clean(frame);
        debug!(
            rows = cleaned.row_count(),
            columns = cleaned.column_count(),
            "preprocessed input table"
        );
        let target = query::match_column(query, cleaned.column_names())?;
        let tokens = self.normalizer.normalize(query);
        let intent = query::classify(&tokens);
        let chart_kind = detect_chart_kind(query);
        debug!(%target, %intent, %chart_kind, "resolved query");
        let target_columns = vec![target];
        let grouped = self.grouper.group(&cleaned, &target_columns)?;
        Ok(AnalysisResult {
            grouped,
            target_columns,
            intent,
            chart_kind,
        })
    }
    pub fn suggest(&mut self, frame: &DataFrame) -> Vec<Suggestion> {
        self.suggestion_engine.suggest(frame)
    }
}
impl Default for AnalysisSystem {
    fn default() -> Self {
        Self::new()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn sales_frame() -> DataFrame {
        let cities = ["paris", "lyon", "marseille", "toulouse"];
        let mut frame = DataFrame::named("ventes");
        frame
            .add_column(
                "Ville",
                Column::Text((0..20).map(|i| Some(cities[i % 4].to_string())).collect()),
            )
            .unwrap();
        frame
            .add_column(
                "Ventes",
                Column::Numeric((0..20).map(|i| Some(i as f64 * 10.0)).collect()),
            )
            .unwrap();
        frame
    }
    #[test]
    fn empty_query_fails_before_any_stage() {
        let system = AnalysisSystem::new();
        let err = system.analyze(&sales_frame(), "   ").unwrap_err();
        assert!(matches!(err, AnalysisError::Query(QueryError::EmptyQuery)));
    }
    #[test]
    fn empty_table_fails_before_any_stage() {
        let system = AnalysisSystem::new();
        let err = system
            .analyze(&DataFrame::named("vide"), "montre les ventes")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Data(DataError::EmptyDataset)));
    }
    #[test]
    fn unresolved_column_is_fail_fast() {
        let system = AnalysisSystem::new();
        let err = system.analyze(&sales_frame(), "bonjour").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Query(QueryError::NoColumnMatch { .. })
        ));
    }
    #[test]
    fn unspecified_chart_kind_resolves_through_intent() {
        let system = AnalysisSystem::new();
        let result = system
            .analyze(&sales_frame(), "montre la répartition des ventes par ville")
            .unwrap();
        assert!(result.needs_chart_prompt());
        assert_eq!(result.intent, Intent::Distribution);
        assert_eq!(result.resolved_chart_kind(), ChartKind::Box);
    }
    #[test]
    fn analysis_result_serializes() {
        let system = AnalysisSystem::new();
        let result = system
            .analyze(&sales_frame(), "camembert des ventes par ville")
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"chart_kind\":\"Pie\""));
    }
}
