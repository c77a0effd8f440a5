//! Visiting order for holes.

use crate::model::Hole;

/// Order holes with a nearest-neighbor heuristic to shorten rapid travel.
///
/// Algorithm:
/// 1. Start at the origin `(0, 0)`
/// 2. Repeatedly move to the nearest unvisited hole (XY Euclidean distance)
/// 3. Ties go to the hole that appears first in the input
///
/// This is a greedy approximation, not an optimal tour. The result is a
/// permutation of the input and is deterministic for a given input order.
/// The input is left untouched.
pub fn optimize_order(holes: &[Hole]) -> Vec<Hole> {
    if holes.len() < 2 {
        return holes.to_vec();
    }

    let mut used = vec![false; holes.len()];
    let mut order = Vec::with_capacity(holes.len());
    let mut current_x = 0.0;
    let mut current_y = 0.0;

    for _ in 0..holes.len() {
        let mut best_distance = f64::INFINITY;
        let mut best_idx = None;

        for (idx, hole) in holes.iter().enumerate() {
            if used[idx] {
                continue;
            }
            let distance = hole.distance_to(current_x, current_y);
            // NaN distances never win, so fall back to the first unvisited hole
            if distance < best_distance || best_idx.is_none() {
                best_distance = distance;
                best_idx = Some(idx);
            }
        }

        let Some(idx) = best_idx else {
            break;
        };
        used[idx] = true;
        current_x = holes[idx].x;
        current_y = holes[idx].y;
        order.push(holes[idx]);
    }

    tracing::debug!(
        "Ordered {} holes, rapid travel {:.3} -> {:.3}",
        holes.len(),
        travel_distance(holes),
        travel_distance(&order)
    );

    order
}

/// XY path length from the origin through every hole in sequence.
pub fn travel_distance(holes: &[Hole]) -> f64 {
    let mut total = 0.0;
    let mut current_x = 0.0;
    let mut current_y = 0.0;

    for hole in holes {
        total += hole.distance_to(current_x, current_y);
        current_x = hole.x;
        current_y = hole.y;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{circular_pattern, rectangular_array};

    fn positions(holes: &[Hole]) -> Vec<(f64, f64)> {
        holes.iter().map(|h| (h.x, h.y)).collect()
    }

    fn sorted_positions(holes: &[Hole]) -> Vec<(f64, f64)> {
        let mut p = positions(holes);
        p.sort_by(|a, b| a.partial_cmp(b).unwrap());
        p
    }

    // ==================== optimize_order tests ====================

    #[test]
    fn test_optimize_order_empty_and_single() {
        assert!(optimize_order(&[]).is_empty());
        let single = vec![Hole::new(3.0, 4.0, 0.25, 0.5)];
        assert_eq!(optimize_order(&single), single);
    }

    #[test]
    fn test_optimize_order_starts_nearest_origin() {
        let holes = vec![Hole::at(5.0, 5.0), Hole::at(10.0, 0.0), Hole::at(1.0, 1.0)];
        let ordered = optimize_order(&holes);
        assert_eq!(positions(&ordered)[0], (1.0, 1.0));
    }

    #[test]
    fn test_optimize_order_nearest_neighbor_chain() {
        let holes = vec![
            Hole::at(10.0, 0.0),
            Hole::at(1.0, 0.0),
            Hole::at(9.0, 0.0),
            Hole::at(2.0, 0.0),
        ];
        let ordered = optimize_order(&holes);
        assert_eq!(
            positions(&ordered),
            vec![(1.0, 0.0), (2.0, 0.0), (9.0, 0.0), (10.0, 0.0)]
        );
    }

    #[test]
    fn test_optimize_order_tie_first_occurrence_wins() {
        let holes = vec![Hole::at(0.0, 1.0), Hole::at(1.0, 0.0)];
        let ordered = optimize_order(&holes);
        assert_eq!(positions(&ordered), vec![(0.0, 1.0), (1.0, 0.0)]);

        let swapped = vec![Hole::at(1.0, 0.0), Hole::at(0.0, 1.0)];
        let ordered = optimize_order(&swapped);
        assert_eq!(positions(&ordered), vec![(1.0, 0.0), (0.0, 1.0)]);
    }

    #[test]
    fn test_optimize_order_is_permutation() {
        let mut holes = rectangular_array(4, 5, 0.75, 1.25, -2.0, 3.0);
        holes.extend(circular_pattern(9, 3.0, 4.0, 4.0, 17.0));
        holes.push(Hole::at(0.0, 0.0));
        holes.push(Hole::at(0.0, 0.0));

        let ordered = optimize_order(&holes);
        assert_eq!(ordered.len(), holes.len());
        assert_eq!(sorted_positions(&ordered), sorted_positions(&holes));
    }

    #[test]
    fn test_optimize_order_deterministic() {
        let holes = circular_pattern(12, 5.0, 2.0, -3.0, 45.0);
        assert_eq!(optimize_order(&holes), optimize_order(&holes));
    }

    #[test]
    fn test_optimize_order_does_not_renumber() {
        let holes = rectangular_array(1, 3, 1.0, 1.0, 0.0, 0.0);
        let reversed: Vec<Hole> = holes.iter().rev().copied().collect();
        let ordered = optimize_order(&reversed);
        let numbers: Vec<usize> = ordered.iter().map(|h| h.sequence_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        // Input untouched
        assert_eq!(reversed[0].sequence_number, 3);
    }

    #[test]
    fn test_optimize_order_never_longer_on_shuffled_grid() {
        let grid = rectangular_array(3, 3, 1.0, 1.0, 0.0, 0.0);
        let shuffled: Vec<Hole> = [8, 0, 4, 2, 6, 1, 7, 3, 5].iter().map(|&i| grid[i]).collect();
        let ordered = optimize_order(&shuffled);
        assert!(travel_distance(&ordered) <= travel_distance(&shuffled));
    }

    // ==================== travel_distance tests ====================

    #[test]
    fn test_travel_distance() {
        assert_eq!(travel_distance(&[]), 0.0);
        let holes = vec![Hole::at(3.0, 4.0), Hole::at(3.0, 10.0)];
        assert_eq!(travel_distance(&holes), 11.0);
    }
}
