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

use serde::{Deserialize, Serialize};
use std::fmt;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    #[default]
    Visualization,
    Comparison,
    Distribution,
    Trend,
}
impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Intent::Visualization => write!(f, "visualisation"),
            Intent::Comparison => write!(f, "comparaison"),
            Intent::Distribution => write!(f, "distribution"),
            Intent::Trend => write!(f, "tendance"),
        }
    }
}
pub const INTENT_TRIGGERS: &[(Intent, &[&str])] = &[
    (
        Intent::Visualization,
        &[
            "montrer",
            "montre",
            "afficher",
            "affiche",
            "voir",
            "visualiser",
            "show",
            "display",
        ],
    ),
    (
        Intent::Comparison,
        &[
            "comparer",
            "compare",
            "différence",
            "difference",
            "contre",
            "versus",
        ],
    ),
    (
        Intent::Distribution,
        &[
            "répartition",
            "repartition",
            "distribution",
            "répartir",
            "spread",
        ],
    ),
    (
        Intent::Trend,
        &[
            "évolution",
            "evolution",
            "tendance",
            "progression",
            "trend",
        ],
    ),
];
// Last matching token wins. Deliberately asymmetric with the chart-kind
// detector, which is first-declared-order; both policies are contractual.
pub fn classify(tokens: &[String]) -> Intent {
    let mut intent = Intent::default();
    for token in tokens {
        for (candidate, triggers) in INTENT_TRIGGERS {
            if triggers.contains(&token.as_str()) {
                intent = *candidate;
            }
        }
    }
    intent
}
