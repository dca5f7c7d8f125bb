//! Face-connected components of the committed-alive cells.
//!
//! Groups are found with a breadth-first search over cell indices. Seeds are
//! taken in ascending index order and neighbors are visited -x, +x, -y, +y,
//! -z, +z, so the partition and the numbering are reproducible for a given
//! alive set. Every group gets one pastel color shared by all its members.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use glam::Vec3;
use rand::Rng;

use super::Lattice;

/// Channel range for group colors
pub const PASTEL_RANGE: RangeInclusive<f32> = 0.6..=0.9;

/// Result of one connectivity pass
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Groups {
    /// Member indices per group, indexed by group id
    pub members: Vec<Vec<usize>>,
    /// Color per group, indexed by group id
    pub colors: Vec<Vec3>,
}

impl Groups {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Size of the largest group, 0 when nothing is alive
    pub fn largest(&self) -> usize {
        self.members.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Partition the alive cells into components without touching the lattice
pub fn components(lattice: &Lattice) -> Vec<Vec<usize>> {
    let cells = lattice.cells();
    let mut visited = vec![false; cells.len()];
    let mut queue = VecDeque::new();
    let mut groups = Vec::new();

    for seed in 0..cells.len() {
        if visited[seed] || !cells[seed].current {
            continue;
        }

        let mut members = Vec::new();
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(idx) = queue.pop_front() {
            members.push(idx);
            for neighbor in lattice.axis_neighbors(lattice.coord(idx)) {
                if !visited[neighbor] && cells[neighbor].current {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        groups.push(members);
    }
    groups
}

/// Draw one pastel color
pub fn pastel<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.random_range(PASTEL_RANGE),
        rng.random_range(PASTEL_RANGE),
        rng.random_range(PASTEL_RANGE),
    )
}

/// Recompute groups and colors for the whole lattice.
///
/// Alive cells receive their group id and that group's color. Dead cells lose
/// any group id left over from an earlier pass; their color is left as is
/// and carries no meaning.
pub fn analyze<R: Rng>(lattice: &mut Lattice, rng: &mut R) -> Groups {
    let members = components(lattice);
    let colors: Vec<Vec3> = members.iter().map(|_| pastel(&mut *rng)).collect();

    let cells = lattice.cells_mut();
    cells.iter_mut().for_each(|cell| cell.group = None);
    for (id, (group, color)) in members.iter().zip(&colors).enumerate() {
        for &idx in group {
            cells[idx].group = Some(id as u32);
            cells[idx].color = *color;
        }
    }

    Groups { members, colors }
}
