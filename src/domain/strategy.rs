//! Selects how the rule engine walks the lattice.

/// Evaluation strategies for a rule pass. Both produce identical results;
/// they differ only in how the neighbor counts are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EvalStrategy {
    /// One thread, cells in index order
    #[default]
    Serial,
    /// Neighbor counts spread over the rayon pool
    Parallel,
}

impl EvalStrategy {
    /// Every strategy, serial first. The benchmark runs them in this order.
    pub fn all() -> Vec<EvalStrategy> {
        vec![EvalStrategy::Serial, EvalStrategy::Parallel]
    }

    /// Display name for the overlay
    pub fn name(&self) -> &'static str {
        match self {
            EvalStrategy::Serial => "Serial",
            EvalStrategy::Parallel => "Parallel",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            EvalStrategy::Serial => EvalStrategy::Parallel,
            EvalStrategy::Parallel => EvalStrategy::Serial,
        }
    }
}
