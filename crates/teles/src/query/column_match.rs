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

use crate::error::{QueryError, QueryResult};
pub fn score_column(query: &str, column_name: &str) -> usize {
    column_name
        .to_lowercase()
        .split_whitespace()
        .filter(|word| query.contains(word))
        .count()
}
// Substring containment, not token matching: "age" scores against
// "quel est l'age moyen". Ties keep the first column in frame order.
pub fn match_column(query: &str, column_names: &[String]) -> QueryResult<String> {
    let query = query.to_lowercase();
    let mut best: Option<&String> = None;
    let mut best_score = 0;
    for name in column_names {
        let score = score_column(&query, name);
        if score > best_score {
            best_score = score;
            best = Some(name);
        }
    }
    match best {
        Some(name) if best_score >= 1 => Ok(name.clone()),
        _ => Err(QueryError::NoColumnMatch {
            query: query.to_string(),
        }),
    }
}
