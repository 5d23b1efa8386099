//! Difficulty phases
//!
//! A phase activates once the score reaches its threshold and may add
//! obstacle blocks, a one-time speed boost, and a permanent bonus to the
//! per-food speed step.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Request for `count` square blocks of edge `size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub size: u16,
    #[serde(default = "default_count")]
    pub count: u16,
}

fn default_count() -> u16 {
    1
}

impl ObstacleSpec {
    pub const fn new(size: u16, count: u16) -> Self {
        Self { size, count }
    }

    pub const fn single(size: u16) -> Self {
        Self { size, count: 1 }
    }
}

/// One difficulty tier
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseSpec {
    /// Score at which this phase activates
    pub threshold: u32,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
    /// Milliseconds removed from the tick interval on entry
    #[serde(default)]
    pub speed_boost: Option<u32>,
    /// Added to the per-food speed step while this phase or a later one is active
    #[serde(default)]
    pub speed_step_bonus: Option<u32>,
}

impl PhaseSpec {
    pub fn at(threshold: u32) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    pub fn with_obstacles(mut self, obstacles: &[ObstacleSpec]) -> Self {
        self.obstacles = obstacles.to_vec();
        self
    }

    pub fn with_boost(mut self, ms: u32) -> Self {
        self.speed_boost = Some(ms);
        self
    }

    pub fn with_step_bonus(mut self, ms: u32) -> Self {
        self.speed_step_bonus = Some(ms);
        self
    }
}

/// Phase table, ascending by threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseTable {
    phases: Vec<PhaseSpec>,
}

impl PhaseTable {
    pub fn new(phases: Vec<PhaseSpec>) -> Self {
        Self { phases }
    }

    pub fn phases(&self) -> &[PhaseSpec] {
        &self.phases
    }

    pub fn get(&self, index: usize) -> Option<&PhaseSpec> {
        self.phases.get(index)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Highest index whose threshold is at most `score` (0 if none)
    pub fn index_for_score(&self, score: u32) -> usize {
        self.phases
            .iter()
            .take_while(|p| p.threshold <= score)
            .count()
            .saturating_sub(1)
    }

    /// Phases entered when moving from `previous` to `current`
    pub fn entered(&self, previous: usize, current: usize) -> RangeInclusive<usize> {
        (previous + 1)..=current
    }

    /// Sum of step bonuses for phases `0..=index`
    pub fn step_bonus_through(&self, index: usize) -> u32 {
        self.phases
            .iter()
            .take(index.saturating_add(1))
            .filter_map(|p| p.speed_step_bonus)
            .sum()
    }
}

impl Default for PhaseTable {
    fn default() -> Self {
        use ObstacleSpec as O;
        Self::new(vec![
            PhaseSpec::at(0),
            PhaseSpec::at(100).with_obstacles(&[O::single(2)]),
            PhaseSpec::at(150).with_obstacles(&[O::single(2)]),
            PhaseSpec::at(200).with_obstacles(&[O::single(3)]),
            PhaseSpec::at(250).with_obstacles(&[O::single(3)]),
            PhaseSpec::at(300).with_obstacles(&[O::new(2, 2)]).with_boost(4),
            PhaseSpec::at(350).with_obstacles(&[O::single(4)]).with_step_bonus(1),
            PhaseSpec::at(400)
                .with_obstacles(&[O::single(3), O::new(2, 2)])
                .with_boost(4)
                .with_step_bonus(1),
            PhaseSpec::at(450).with_obstacles(&[O::single(4)]).with_boost(4),
            PhaseSpec::at(500).with_obstacles(&[O::new(3, 2)]).with_step_bonus(1),
            PhaseSpec::at(550)
                .with_obstacles(&[O::new(2, 3), O::single(4)])
                .with_boost(6),
            PhaseSpec::at(600)
                .with_obstacles(&[O::single(5)])
                .with_boost(4)
                .with_step_bonus(1),
            PhaseSpec::at(650)
                .with_obstacles(&[O::new(3, 3)])
                .with_boost(6)
                .with_step_bonus(1),
            PhaseSpec::at(700).with_obstacles(&[O::new(4, 2)]).with_step_bonus(1),
            PhaseSpec::at(750)
                .with_obstacles(&[O::single(5), O::new(2, 4)])
                .with_boost(8)
                .with_step_bonus(1),
        ])
    }
}
