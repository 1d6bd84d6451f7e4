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
const FRENCH_STOP_WORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "cette", "dans", "de", "des", "du", "elle", "en", "et",
    "est", "eu", "il", "ils", "je", "la", "le", "les", "leur", "leurs", "lui", "ma", "mais", "me",
    "mes", "moi", "mon", "ne", "nos", "notre", "nous", "on", "ou", "où", "par", "pas", "pour",
    "qu", "que", "quel", "quelle", "quelles", "quels", "qui", "sa", "se", "ses", "son", "sont",
    "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos", "votre", "vous", "y", "à",
    "d", "l", "s", "j", "m", "n", "c", "t",
];
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "he",
    "her", "his", "i", "in", "is", "it", "its", "me", "my", "no", "not", "of", "on", "or", "our",
    "she", "that", "the", "their", "them", "they", "this", "to", "us", "was", "we", "were",
    "what", "which", "who", "will", "with", "you", "your",
];
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    French,
    English,
}
impl Language {
    pub fn stop_words(&self) -> &'static [&'static str] {
        match self {
            Language::French => FRENCH_STOP_WORDS,
            Language::English => ENGLISH_STOP_WORDS,
        }
    }
}
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    language: Language,
}
impl Normalizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
    // Splits on word boundaries: anything that is not alphanumeric separates
    // tokens, so punctuation never survives into a token.
    pub fn normalize(&self, query: &str) -> Vec<String> {
        let stop_words = self.language.stop_words();
        query
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .filter(|token| !stop_words.contains(&token.as_str()))
            .collect()
    }
}
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
