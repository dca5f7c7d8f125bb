use std::fmt;

/// Inclusive neighbor-count window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub min: u8,
    pub max: u8,
}

impl Thresholds {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, count: u8) -> bool {
        self.min <= count && count <= self.max
    }
}

/// Totalistic 3D life rule over the 26-cell Moore neighborhood.
///
/// The only tunables are the two windows; the default is the 3D analogue
/// of Conway's rule: survive on 4-9 neighbors, birth on 5-7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeRule {
    pub survive: Thresholds,
    pub birth: Thresholds,
}

impl LifeRule {
    pub const fn new(survive: Thresholds, birth: Thresholds) -> Self {
        Self { survive, birth }
    }

    /// Next logical state for a cell with `neighbors` alive neighbors.
    /// Live cells outside the survival window die, dead cells outside the
    /// birth window stay dead.
    pub const fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survive.contains(neighbors)
        } else {
            self.birth.contains(neighbors)
        }
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::new(Thresholds::new(4, 9), Thresholds::new(5, 7))
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B{}-{}/S{}-{}",
            self.birth.min, self.birth.max, self.survive.min, self.survive.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        let rule = LifeRule::default();
        assert!(!rule.evolve(true, 0));
        assert!(!rule.evolve(true, 3));
    }

    #[test]
    fn test_survival() {
        let rule = LifeRule::default();
        for n in 4..=9 {
            assert!(rule.evolve(true, n), "alive cell with {n} neighbors should survive");
        }
    }

    #[test]
    fn test_overpopulation() {
        let rule = LifeRule::default();
        assert!(!rule.evolve(true, 10));
        assert!(!rule.evolve(true, 26));
    }

    #[test]
    fn test_birth() {
        let rule = LifeRule::default();
        assert!(rule.evolve(false, 5));
        assert!(rule.evolve(false, 6));
        assert!(rule.evolve(false, 7));
        assert!(!rule.evolve(false, 4));
        assert!(!rule.evolve(false, 8));
    }

    #[test]
    fn test_display() {
        assert_eq!(LifeRule::default().to_string(), "B5-7/S4-9");
    }
}
