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

use crate::query::Intent;
use serde::{Deserialize, Serialize};
use std::fmt;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
    Scatter,
    Box,
    Correlation,
    Unspecified,
}
impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Line => write!(f, "line"),
            ChartKind::Scatter => write!(f, "scatter"),
            ChartKind::Box => write!(f, "box"),
            ChartKind::Correlation => write!(f, "correlation"),
            ChartKind::Unspecified => write!(f, "unspecified"),
        }
    }
}
// Order is contractual: a query naming several kinds resolves to the first
// declared pair, with box and correlation checked last.
pub const CHART_KEYWORDS: &[(ChartKind, &[&str])] = &[
    (
        ChartKind::Pie,
        &["camembert", "cercle", "circulaire", "pie"],
    ),
    (
        ChartKind::Bar,
        &["barres", "histogramme", "bar", "colonnes"],
    ),
    (ChartKind::Line, &["ligne", "courbe", "line"]),
    (
        ChartKind::Scatter,
        &["nuage", "dispersion", "scatter"],
    ),
    (
        ChartKind::Box,
        &["boîte", "boite", "moustaches", "boxplot", "box"],
    ),
    (
        ChartKind::Correlation,
        &["corrélation", "correlation"],
    ),
];
pub fn detect_chart_kind(query: &str) -> ChartKind {
    let query = query.to_lowercase();
    for (kind, keywords) in CHART_KEYWORDS {
        if keywords.iter().any(|keyword| query.contains(keyword)) {
            return *kind;
        }
    }
    ChartKind::Unspecified
}
impl ChartKind {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, ChartKind::Unspecified)
    }
    // Renderer-side default when the query named no kind and the user was
    // not prompted.
    pub fn fallback_for(intent: Intent) -> ChartKind {
        match intent {
            Intent::Visualization => ChartKind::Bar,
            Intent::Comparison => ChartKind::Bar,
            Intent::Distribution => ChartKind::Box,
            Intent::Trend => ChartKind::Line,
        }
    }
}
