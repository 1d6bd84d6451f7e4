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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Numeric,
    Text,
}
impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataType::Numeric => write!(f, "numeric"),
            DataType::Text => write!(f, "text"),
        }
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetId(String);
impl DatasetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn from_string(id: String) -> Self {
        Self(id)
    }
}
impl Default for DatasetId {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl AsRef<str> for DatasetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub id: DatasetId,
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub created_at: DateTime<Utc>,
    pub source_path: Option<std::path::PathBuf>,
}
impl DatasetMetadata {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: DatasetId::new(),
            name: name.into(),
            row_count: 0,
            column_count: 0,
            created_at: Utc::now(),
            source_path: None,
        }
    }
}
