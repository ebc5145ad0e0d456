// Simulator tuning knobs, in a builder-with-defaults shape.

use crate::instruction::FunctionalUnitKind;

const DEFAULT_MAX_CYCLES: usize = 1000;
const UNBOUNDED_ROB: usize = usize::MAX / 2;

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    rob_capacity: usize,
    max_cycles: usize,
    durations: [usize; 4],
}

impl SimulatorConfig {
    pub fn new() -> Self {
        Self {
            rob_capacity: UNBOUNDED_ROB,
            max_cycles: DEFAULT_MAX_CYCLES,
            durations: FunctionalUnitKind::ALL.map(FunctionalUnitKind::default_duration),
        }
    }

    pub fn with_rob_capacity(mut self, capacity: usize) -> Self {
        self.rob_capacity = capacity;
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    pub fn with_unit_duration(mut self, kind: FunctionalUnitKind, duration: usize) -> Self {
        let position = FunctionalUnitKind::ALL.iter().position(|k| *k == kind).unwrap();
        self.durations[position] = duration;
        self
    }

    pub fn rob_capacity(&self) -> usize {
        self.rob_capacity
    }

    pub fn max_cycles(&self) -> usize {
        self.max_cycles
    }

    pub fn durations(&self) -> [usize; 4] {
        self.durations
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_specified_unit_durations() {
        let config = SimulatorConfig::new();
        assert_eq!(config.durations(), [1, 2, 10, 40]);
        assert_eq!(config.max_cycles(), 1000);
    }

    #[test]
    fn with_unit_duration_overrides_a_single_slot() {
        let config = SimulatorConfig::new().with_unit_duration(FunctionalUnitKind::FpMul, 4);
        assert_eq!(config.durations(), [1, 2, 4, 40]);
    }
}
