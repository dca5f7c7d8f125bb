use rayon::prelude::*;

use super::{Boundary, EvalStrategy, Lattice, LifeRule};

/// Run one rule pass: compute `next` for every cell from the committed
/// `current` states.
///
/// All next states are gathered into a separate buffer from an immutable
/// view of the lattice before any cell is written, so every count for a
/// generation sees that generation only. `current` is never touched.
/// Returns the number of cells whose next state differs from their current one.
pub fn evaluate(lattice: &mut Lattice, rule: &LifeRule, boundary: Boundary, strategy: EvalStrategy) -> usize {
    let next = match strategy {
        EvalStrategy::Serial => next_states(lattice, rule, boundary),
        EvalStrategy::Parallel => next_states_parallel(lattice, rule, boundary),
    };

    lattice
        .cells_mut()
        .iter_mut()
        .zip(next)
        .map(|(cell, next)| {
            cell.next = next;
            cell.current != next
        })
        .filter(|&changed| changed)
        .count()
}

/// Serial evaluation in index order
pub fn next_states(lattice: &Lattice, rule: &LifeRule, boundary: Boundary) -> Vec<bool> {
    (0..lattice.len())
        .map(|i| next_state(lattice, i, rule, boundary))
        .collect()
}

/// Parallel evaluation using rayon. Order of the output matches the
/// lattice index order.
pub fn next_states_parallel(lattice: &Lattice, rule: &LifeRule, boundary: Boundary) -> Vec<bool> {
    (0..lattice.len())
        .into_par_iter()
        .map(|i| next_state(lattice, i, rule, boundary))
        .collect()
}

fn next_state(lattice: &Lattice, index: usize, rule: &LifeRule, boundary: Boundary) -> bool {
    let neighbors = lattice.count_alive_neighbors(lattice.coord(index), boundary);
    rule.evolve(lattice.cells()[index].current, neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatticeConfig;

    fn currents(lattice: &Lattice) -> Vec<bool> {
        lattice.cells().iter().map(|c| c.current).collect()
    }

    #[test]
    fn test_full_2x2x2_wrapped_survives() {
        let mut lattice = Lattice::from_fn(2, 2, 1.0, |_| true);
        for i in 0..lattice.len() {
            let coord = lattice.coord(i);
            assert_eq!(lattice.count_alive_neighbors(coord, Boundary::Wrap), 7);
        }
        let changed = evaluate(&mut lattice, &LifeRule::default(), Boundary::Wrap, EvalStrategy::Serial);
        assert_eq!(changed, 0);
        assert!(lattice.cells().iter().all(|c| c.next));
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut lattice = Lattice::empty(5, 5, 1.0);
        lattice.set_alive(2, 2, 2, true);
        evaluate(&mut lattice, &LifeRule::default(), Boundary::Clamp, EvalStrategy::Serial);
        let cell = lattice.get(2, 2, 2).unwrap();
        assert!(cell.current);
        assert!(!cell.next);
    }

    /// Dead center of a 3x3x3 clamped block with `k` alive neighbors
    fn center_with_neighbors(k: usize) -> bool {
        let mut lattice = Lattice::empty(3, 3, 1.0);
        let mut placed = 0;
        for i in 0..lattice.len() {
            let (x, y, z) = lattice.coord(i);
            if placed == k || (x, y, z) == (1, 1, 1) {
                continue;
            }
            lattice.set_alive(x, y, z, true);
            placed += 1;
        }
        assert_eq!(lattice.count_alive_neighbors((1, 1, 1), Boundary::Clamp), k as u8);
        evaluate(&mut lattice, &LifeRule::default(), Boundary::Clamp, EvalStrategy::Serial);
        lattice.get(1, 1, 1).unwrap().next
    }

    #[test]
    fn test_birth_window() {
        assert!(!center_with_neighbors(4));
        assert!(center_with_neighbors(5));
        assert!(center_with_neighbors(6));
        assert!(center_with_neighbors(7));
        assert!(!center_with_neighbors(8));
    }

    #[test]
    fn test_pass_never_mutates_current() {
        let mut lattice = Lattice::build(&LatticeConfig::new(6, 9, 1.0, 11)).unwrap();
        let before = currents(&lattice);
        let changed = evaluate(&mut lattice, &LifeRule::default(), Boundary::Wrap, EvalStrategy::Serial);
        assert_eq!(currents(&lattice), before);
        assert!(changed > 0);
    }

    #[test]
    fn test_counts_use_previous_generation() {
        // Five mutually isolated corners all die this generation, yet the
        // center still sees them alive and is born.
        let mut lattice = Lattice::empty(3, 3, 1.0);
        for (x, y, z) in [(0, 0, 0), (0, 0, 2), (0, 2, 0), (2, 0, 0), (2, 2, 2)] {
            lattice.set_alive(x, y, z, true);
        }
        evaluate(&mut lattice, &LifeRule::default(), Boundary::Clamp, EvalStrategy::Serial);
        let born: Vec<usize> = (0..lattice.len()).filter(|&i| lattice.cells()[i].next).collect();
        assert_eq!(born, vec![lattice.index(1, 1, 1)]);
    }

    #[test]
    fn test_dead_cell_outside_birth_window_stays_dead() {
        let mut lattice = Lattice::empty(3, 3, 1.0);
        let idx = lattice.index(0, 0, 0);
        lattice.cells_mut()[idx].next = true;
        evaluate(&mut lattice, &LifeRule::default(), Boundary::Clamp, EvalStrategy::Serial);
        assert!(!lattice.cells()[idx].next);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let rule = LifeRule::default();
        for boundary in [Boundary::Wrap, Boundary::Clamp] {
            let lattice = Lattice::build(&LatticeConfig::new(8, 12, 1.0, 99)).unwrap();
            assert_eq!(
                next_states(&lattice, &rule, boundary),
                next_states_parallel(&lattice, &rule, boundary)
            );
        }
    }
}
