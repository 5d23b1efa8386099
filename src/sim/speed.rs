//! Tick interval pacing

use super::phase::PhaseTable;

/// Per-food speed step while `phase_index` is active
pub fn speed_step(base_step: u32, phases: &PhaseTable, phase_index: usize) -> u32 {
    base_step + phases.step_bonus_through(phase_index)
}

/// Interval after subtracting `reduction` ms, floored at `min_ms`
pub fn reduce_interval(interval_ms: u32, reduction: u32, min_ms: u32) -> u32 {
    interval_ms.saturating_sub(reduction).max(min_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_grows_with_phase_bonuses() {
        let table = PhaseTable::default();
        assert_eq!(speed_step(2, &table, 0), 2);
        assert_eq!(speed_step(2, &table, 6), 3);
        assert_eq!(speed_step(2, &table, 14), 9);
    }

    #[test]
    fn test_reduce_interval_floor() {
        assert_eq!(reduce_interval(180, 2, 80), 178);
        assert_eq!(reduce_interval(81, 4, 80), 80);
        assert_eq!(reduce_interval(3, 10, 80), 80);
    }
}
