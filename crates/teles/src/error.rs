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

use thiserror::Error;
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),
    #[error("Data error: {0}")]
    Data(#[from] DataError),
}
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Query string is blank")]
    EmptyQuery,
    #[error("No column matched the query '{query}'")]
    NoColumnMatch { query: String },
}
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Empty dataset provided for analysis")]
    EmptyDataset,
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),
    #[error("Column length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("Row index out of bounds: {0}")]
    RowOutOfBounds(usize),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
pub type Result<T> = std::result::Result<T, AnalysisError>;
pub type QueryResult<T> = std::result::Result<T, QueryError>;
pub type DataResult<T> = std::result::Result<T, DataError>;
impl AnalysisError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::Query(QueryError::NoColumnMatch { .. }))
    }
    pub fn category(&self) -> &'static str {
        match self {
            AnalysisError::Query(_) => "Query",
            AnalysisError::Data(_) => "Data",
        }
    }
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Query(QueryError::EmptyQuery) => {
                "Veuillez entrer une requête d'analyse.".to_string()
            }
            AnalysisError::Query(QueryError::NoColumnMatch { .. }) => {
                "Aucune colonne correspondante trouvée dans la requête. \
                 Merci de préciser la colonne à analyser ou de reformuler."
                    .to_string()
            }
            AnalysisError::Data(DataError::EmptyDataset) => {
                "Le jeu de données est vide. Veuillez d'abord importer des données.".to_string()
            }
            AnalysisError::Data(DataError::Csv(_)) | AnalysisError::Data(DataError::Io(_)) => {
                "Erreur lors de l'import du fichier.".to_string()
            }
            _ => self.to_string(),
        }
    }
}
