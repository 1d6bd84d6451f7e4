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

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
// Seeded and iteration-capped: identical vectors + identical seed must
// always yield identical assignments.
pub fn cluster(vectors: &[Vec<f64>], k: usize, seed: u64, max_iterations: usize) -> Vec<usize> {
    if vectors.is_empty() || k == 0 {
        return Vec::new();
    }
    let k = k.min(vectors.len());
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..vectors.len()).collect();
    indices.shuffle(&mut rng);
    // Centroids start on k distinct data points, so k == n degenerates to
    // one point per cluster.
    let mut centroids: Vec<Vec<f64>> = indices[..k].iter().map(|&i| vectors[i].clone()).collect();
    let mut assignments = assign(vectors, &centroids);
    for _ in 0..max_iterations {
        let new_centroids = recompute(vectors, &assignments, &centroids);
        let new_assignments = assign(vectors, &new_centroids);
        let converged = new_assignments == assignments;
        centroids = new_centroids;
        assignments = new_assignments;
        if converged {
            break;
        }
    }
    assignments
}
fn assign(vectors: &[Vec<f64>], centroids: &[Vec<f64>]) -> Vec<usize> {
    vectors
        .iter()
        .map(|vector| nearest_centroid(vector, centroids))
        .collect()
}
// Ties resolve to the lowest centroid index.
fn nearest_centroid(vector: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(vector, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}
fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}
fn recompute(
    vectors: &[Vec<f64>],
    assignments: &[usize],
    previous: &[Vec<f64>],
) -> Vec<Vec<f64>> {
    let dimensions = vectors[0].len();
    let mut sums = vec![vec![0.0; dimensions]; previous.len()];
    let mut counts = vec![0usize; previous.len()];
    for (vector, &cluster) in vectors.iter().zip(assignments) {
        counts[cluster] += 1;
        for (dimension, value) in vector.iter().enumerate() {
            sums[cluster][dimension] += value;
        }
    }
    sums.into_iter()
        .zip(counts)
        .enumerate()
        .map(|(index, (sum, count))| {
            if count == 0 {
                // An emptied cluster keeps its previous centroid.
                previous[index].clone()
            } else {
                sum.into_iter().map(|v| v / count as f64).collect()
            }
        })
        .collect()
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn separable_points_get_distinct_clusters() {
        let vectors = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ];
        let assignments = cluster(&vectors, 3, 7, 100);
        let mut sorted = assignments.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);
    }
    #[test]
    fn same_seed_reproduces_assignments() {
        let vectors = vec![
            vec![1.0, 0.1],
            vec![0.9, 0.0],
            vec![0.0, 1.0],
            vec![0.1, 0.9],
            vec![0.5, 0.5],
        ];
        let first = cluster(&vectors, 2, 42, 100);
        let second = cluster(&vectors, 2, 42, 100);
        assert_eq!(first, second);
    }
    #[test]
    fn close_points_share_a_cluster() {
        let vectors = vec![
            vec![1.0, 0.0],
            vec![0.99, 0.01],
            vec![0.0, 1.0],
            vec![0.01, 0.99],
        ];
        let assignments = cluster(&vectors, 2, 3, 100);
        assert_eq!(assignments[0], assignments[1]);
        assert_eq!(assignments[2], assignments[3]);
        assert_ne!(assignments[0], assignments[2]);
    }
    #[test]
    fn degenerate_inputs_are_safe() {
        assert!(cluster(&[], 3, 1, 10).is_empty());
        assert!(cluster(&[vec![1.0]], 0, 1, 10).is_empty());
        assert_eq!(cluster(&[vec![1.0]], 5, 1, 10), vec![0]);
    }
}
