//! Per-generation metrics for the pump.

/// Timing and protocol counters collected while pumping one generation.
///
/// Populated by
/// [`run_generation_metered`](crate::run_generation_metered); for a
/// `rows x cols` domain a completed generation always shows
/// `rows * cols * 9` queries, `rows * cols` writes, and `rows * cols`
/// cells. The counters exist so that partial failures and custom
/// drivers have something to report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationMetrics {
    /// Wall-clock time for the generation, in microseconds.
    pub total_us: u64,
    /// Queries resolved against the source grid.
    pub queries_resolved: u64,
    /// Transitions applied to the target grid.
    pub writes_applied: u64,
    /// Cells fully resolved (ticks observed).
    pub cells_completed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = GenerationMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.queries_resolved, 0);
        assert_eq!(m.writes_applied, 0);
        assert_eq!(m.cells_completed, 0);
    }
}
