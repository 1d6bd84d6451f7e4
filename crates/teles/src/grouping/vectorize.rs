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

use std::collections::{HashMap, HashSet};
#[derive(Debug, Default)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}
impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
    pub fn fit(&mut self, documents: &[&str]) {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique_tokens: HashSet<String> = tokenize(doc).into_iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }
        // Vocabulary indices follow sorted term order so repeated fits over
        // the same documents produce identical vectors.
        let mut terms: Vec<&String> = document_frequency.keys().collect();
        terms.sort();
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(index, term)| ((*term).clone(), index))
            .collect();
        // Smoothed IDF so terms present in every document keep a small
        // non-zero weight: ln((N + 1) / (df + 1)) + 1.
        let n_documents = documents.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (token, &index) in &vocabulary {
            let df = document_frequency[token] as f64;
            idf[index] = ((n_documents + 1.0) / (df + 1.0)).ln() + 1.0;
        }
        self.vocabulary = vocabulary;
        self.idf = idf;
    }
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let tokens = tokenize(document);
        let mut tf = vec![0.0; self.vocabulary.len()];
        for token in &tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                tf[index] += 1.0;
            }
        }
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for weight in &mut tf {
                *weight /= doc_length;
            }
        }
        for (index, weight) in tf.iter_mut().enumerate() {
            *weight *= self.idf[index];
        }
        tf
    }
    pub fn fit_transform(&mut self, documents: &[&str]) -> Vec<Vec<f64>> {
        self.fit(documents);
        documents.iter().map(|doc| self.transform(doc)).collect()
    }
}
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
