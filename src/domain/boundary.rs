/// How the rule engine treats neighbors that fall off the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Opposite faces are glued together, every cell has 26 neighbors
    #[default]
    Wrap,
    /// Off-lattice neighbors are absent, edge cells have fewer neighbors
    Clamp,
}

impl Boundary {
    /// Resolve `coord + offset` along an axis of length `dim`.
    /// Returns `None` when the neighbor does not exist.
    #[inline]
    pub fn resolve(self, coord: usize, offset: isize, dim: usize) -> Option<usize> {
        let dim_i = dim as isize;
        let raw = coord as isize + offset;
        match self {
            Boundary::Wrap => Some(raw.rem_euclid(dim_i) as usize),
            Boundary::Clamp => (0..dim_i).contains(&raw).then_some(raw as usize),
        }
    }

    /// Distinct coordinates reachable from `coord` with offsets -1, 0, +1.
    /// The first entry is always `coord` itself. On axes shorter than three
    /// cells wrapping would visit the same site twice, so duplicates are
    /// dropped and each neighbor is counted once.
    pub fn span(self, coord: usize, dim: usize) -> ([usize; 3], usize) {
        let mut out = [coord; 3];
        let mut len = 1;
        for offset in [-1, 1] {
            if let Some(c) = self.resolve(coord, offset, dim) {
                if !out[..len].contains(&c) {
                    out[len] = c;
                    len += 1;
                }
            }
        }
        (out, len)
    }

    pub fn toggled(self) -> Self {
        match self {
            Boundary::Wrap => Boundary::Clamp,
            Boundary::Clamp => Boundary::Wrap,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Wrap => "Wrap",
            Boundary::Clamp => "Clamp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_crosses_both_faces() {
        assert_eq!(Boundary::Wrap.resolve(0, -1, 5), Some(4));
        assert_eq!(Boundary::Wrap.resolve(4, 1, 5), Some(0));
        assert_eq!(Boundary::Wrap.resolve(2, 1, 5), Some(3));
    }

    #[test]
    fn test_clamp_drops_outside() {
        assert_eq!(Boundary::Clamp.resolve(0, -1, 5), None);
        assert_eq!(Boundary::Clamp.resolve(4, 1, 5), None);
        assert_eq!(Boundary::Clamp.resolve(3, 1, 5), Some(4));
    }

    #[test]
    fn test_wrap_on_unit_axis_returns_self() {
        assert_eq!(Boundary::Wrap.resolve(0, 1, 1), Some(0));
        assert_eq!(Boundary::Wrap.resolve(0, -1, 1), Some(0));
    }

    #[test]
    fn test_span_deduplicates_short_axes() {
        let (coords, len) = Boundary::Wrap.span(0, 2);
        assert_eq!(&coords[..len], &[0, 1]);

        let (coords, len) = Boundary::Wrap.span(0, 1);
        assert_eq!(&coords[..len], &[0]);

        let (coords, len) = Boundary::Wrap.span(0, 4);
        assert_eq!(&coords[..len], &[0, 3, 1]);

        let (coords, len) = Boundary::Clamp.span(0, 4);
        assert_eq!(&coords[..len], &[0, 1]);
    }

    #[test]
    fn test_default_is_wrap() {
        assert_eq!(Boundary::default(), Boundary::Wrap);
        assert_eq!(Boundary::Wrap.toggled(), Boundary::Clamp);
    }
}
