use glam::Vec3;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Boundary, Cell};
use crate::config::LatticeConfig;
use crate::error::ConfigError;

/// Logical lattice coordinate `(x, y, z)` with `x, z < N` and `y < M`.
pub type Coord = (usize, usize, usize);

/// Face neighbors in visit order: -x, +x, -y, +y, -z, +z
const AXIS_OFFSETS: [(isize, isize, isize); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// Dense N x M x N block of cells, the sole owner of all cell state.
///
/// Cells are stored flat with `index(x, y, z) = x*M*N + y*N + z`. The rule
/// engine and the connectivity pass both rely on this ordering, and the
/// renderer receives every derived array in it.
#[derive(Clone, Debug)]
pub struct Lattice {
    n: usize,
    m: usize,
    spacing: f32,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Build and seed a lattice. Each cell is alive with probability
    /// `alive_probability`, drawn from a generator seeded with `seed`, so the
    /// same configuration always yields the same pattern.
    pub fn build(config: &LatticeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let p = config.alive_probability;
        let lattice = Self::from_fn(config.n, config.m, config.spacing, |_| {
            rng.random::<f64>() < p
        });
        log::info!(
            "built {}x{}x{} lattice (seed {}, {} alive)",
            config.n,
            config.m,
            config.n,
            config.seed,
            lattice.alive_count()
        );
        Ok(lattice)
    }

    /// Lattice with every cell settled dead
    #[cfg(test)]
    pub(crate) fn empty(n: usize, m: usize, spacing: f32) -> Self {
        Self::from_fn(n, m, spacing, |_| false)
    }

    /// Lattice whose initial states come from `alive`, called in index order.
    /// Dimensions are not validated; outside the crate use `build`.
    pub(crate) fn from_fn(n: usize, m: usize, spacing: f32, mut alive: impl FnMut(Coord) -> bool) -> Self {
        let mut cells = Vec::with_capacity(n * m * n);
        for x in 0..n {
            for y in 0..m {
                for z in 0..n {
                    let position = Vec3::new(x as f32, y as f32, z as f32) * spacing;
                    cells.push(Cell::new(position, alive((x, y, z))));
                }
            }
        }
        Self { n, m, spacing, cells }
    }

    /// `(N, M)`; the lattice spans N along x and z, M along y
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.n, self.m)
    }

    pub const fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub const fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x * self.m * self.n + y * self.n + z
    }

    #[inline]
    pub const fn coord(&self, index: usize) -> Coord {
        let plane = self.m * self.n;
        (index / plane, (index % plane) / self.n, index % self.n)
    }

    pub fn contains(&self, (x, y, z): Coord) -> bool {
        x < self.n && y < self.m && z < self.n
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&Cell> {
        self.contains((x, y, z)).then(|| &self.cells[self.index(x, y, z)])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Force a cell into a settled state (no animation pending)
    pub fn set_alive(&mut self, x: usize, y: usize, z: usize, alive: bool) {
        if self.contains((x, y, z)) {
            let idx = self.index(x, y, z);
            let position = self.cells[idx].position();
            self.cells[idx] = Cell::new(position, alive);
        }
    }

    /// Indices of the distinct 26-neighborhood of `coord`, excluding itself
    pub fn moore_neighbors(&self, coord: Coord, boundary: Boundary) -> impl Iterator<Item = usize> + '_ {
        let (x, y, z) = coord;
        let (xs, xl) = boundary.span(x, self.n);
        let (ys, yl) = boundary.span(y, self.m);
        let (zs, zl) = boundary.span(z, self.n);

        xs.into_iter()
            .take(xl)
            .flat_map(move |nx| {
                ys.into_iter().take(yl).flat_map(move |ny| {
                    zs.into_iter().take(zl).map(move |nz| (nx, ny, nz))
                })
            })
            .filter(move |&c| c != coord)
            .map(move |(nx, ny, nz)| self.index(nx, ny, nz))
    }

    /// Indices of the face neighbors of `coord` that exist on the lattice.
    /// Face adjacency never wraps.
    pub fn axis_neighbors(&self, coord: Coord) -> impl Iterator<Item = usize> + '_ {
        let (x, y, z) = coord;
        AXIS_OFFSETS.into_iter().filter_map(move |(dx, dy, dz)| {
            let nx = Boundary::Clamp.resolve(x, dx, self.n)?;
            let ny = Boundary::Clamp.resolve(y, dy, self.m)?;
            let nz = Boundary::Clamp.resolve(z, dz, self.n)?;
            Some(self.index(nx, ny, nz))
        })
    }

    /// Committed-alive cells among the Moore neighbors of `coord`
    pub fn count_alive_neighbors(&self, coord: Coord, boundary: Boundary) -> u8 {
        self.moore_neighbors(coord, boundary)
            .filter(|&i| self.cells[i].current)
            .count() as u8
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.cells.iter().map(Cell::position).collect()
    }

    pub fn radii(&self) -> Vec<f32> {
        self.cells.iter().map(|c| c.radius).collect()
    }

    pub fn colors(&self) -> Vec<[f32; 3]> {
        self.cells.iter().map(|c| c.color.to_array()).collect()
    }

    /// Cells committed alive with a non-zero radius
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visibly_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_ordering() {
        let lattice = Lattice::empty(3, 4, 1.0);
        assert_eq!(lattice.len(), 36);
        assert_eq!(lattice.index(0, 0, 0), 0);
        assert_eq!(lattice.index(0, 0, 1), 1);
        assert_eq!(lattice.index(0, 1, 0), 3);
        assert_eq!(lattice.index(1, 0, 0), 12);
        assert_eq!(lattice.index(2, 3, 2), 35);
    }

    #[test]
    fn test_coord_inverts_index() {
        let lattice = Lattice::empty(3, 5, 1.0);
        for i in 0..lattice.len() {
            let (x, y, z) = lattice.coord(i);
            assert_eq!(lattice.index(x, y, z), i);
        }
    }

    #[test]
    fn test_positions_scaled_by_spacing() {
        let lattice = Lattice::empty(2, 3, 1.5);
        let cell = lattice.get(1, 2, 1).unwrap();
        assert_eq!(cell.position(), Vec3::new(1.5, 3.0, 1.5));
        assert!(lattice.get(2, 0, 0).is_none());
    }

    #[test]
    fn test_same_seed_same_pattern() {
        let config = LatticeConfig::new(6, 8, 1.0, 42);
        let a = Lattice::build(&config).unwrap();
        let b = Lattice::build(&config).unwrap();
        let states = |l: &Lattice| l.cells().iter().map(|c| c.current).collect::<Vec<_>>();
        assert_eq!(states(&a), states(&b));
        assert!(a.alive_count() > 0);
    }

    #[test]
    fn test_build_settles_every_cell() {
        let lattice = Lattice::build(&LatticeConfig::new(5, 5, 1.0, 7)).unwrap();
        for cell in lattice.cells() {
            assert_eq!(cell.current, cell.next);
            assert!(!cell.animating);
            assert_eq!(cell.radius, if cell.current { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn test_build_rejects_zero_size() {
        let result = Lattice::build(&LatticeConfig::new(0, 3, 1.0, 1));
        assert!(matches!(result, Err(ConfigError::ZeroDimension { .. })));
    }

    #[test]
    fn test_build_rejects_overflowing_size() {
        let result = Lattice::build(&LatticeConfig::new(usize::MAX / 2, 3, 1.0, 1));
        assert!(matches!(result, Err(ConfigError::LatticeTooLarge { .. })));
    }

    #[test]
    fn test_moore_neighbor_counts() {
        let lattice = Lattice::empty(5, 5, 1.0);
        assert_eq!(lattice.moore_neighbors((2, 2, 2), Boundary::Clamp).count(), 26);
        assert_eq!(lattice.moore_neighbors((0, 0, 0), Boundary::Clamp).count(), 7);
        assert_eq!(lattice.moore_neighbors((0, 0, 0), Boundary::Wrap).count(), 26);
    }

    #[test]
    fn test_moore_neighbors_on_tiny_lattice_are_distinct() {
        let lattice = Lattice::empty(2, 2, 1.0);
        let mut neighbors: Vec<_> = lattice.moore_neighbors((0, 0, 0), Boundary::Wrap).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_axis_neighbors_order_and_edges() {
        let lattice = Lattice::empty(3, 3, 1.0);
        let center: Vec<_> = lattice.axis_neighbors((1, 1, 1)).collect();
        assert_eq!(
            center,
            vec![
                lattice.index(0, 1, 1),
                lattice.index(2, 1, 1),
                lattice.index(1, 0, 1),
                lattice.index(1, 2, 1),
                lattice.index(1, 1, 0),
                lattice.index(1, 1, 2),
            ]
        );
        assert_eq!(lattice.axis_neighbors((0, 0, 0)).count(), 3);
    }

    #[test]
    fn test_count_alive_neighbors() {
        let mut lattice = Lattice::empty(4, 4, 1.0);
        lattice.set_alive(1, 1, 1, true);
        lattice.set_alive(2, 2, 2, true);
        lattice.set_alive(3, 3, 3, true);
        assert_eq!(lattice.count_alive_neighbors((2, 2, 2), Boundary::Clamp), 2);
        // (0,0,0) touches (3,3,3) only through wraparound
        assert_eq!(lattice.count_alive_neighbors((0, 0, 0), Boundary::Clamp), 1);
        assert_eq!(lattice.count_alive_neighbors((0, 0, 0), Boundary::Wrap), 2);
    }

    #[test]
    fn test_read_accessors_are_idempotent() {
        let lattice = Lattice::build(&LatticeConfig::new(4, 4, 1.0, 3)).unwrap();
        assert_eq!(lattice.radii(), lattice.radii());
        assert_eq!(lattice.colors(), lattice.colors());
        assert_eq!(lattice.positions().len(), lattice.len());
    }
}
