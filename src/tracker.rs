// Owns the canonical instruction records and the two events that touch all
// of them at once: flushing pending state and deciding to issue next.

use log::{debug, info};

use crate::errors::SimulatorError;
use crate::instruction::Instruction;
use crate::record::{InstructionRecord, State};
use crate::reorder_buffer::ReorderBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Running,
    CommittedAt(usize),
    CapHit,
}

#[derive(Debug, Clone)]
pub struct InstructionTracker {
    records: Vec<InstructionRecord>,
}

impl InstructionTracker {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        let records = instructions
            .into_iter()
            .enumerate()
            .map(|(index, instruction)| InstructionRecord::new(index, instruction))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> &InstructionRecord {
        &self.records[index]
    }

    pub fn record_mut(&mut self, index: usize) -> &mut InstructionRecord {
        &mut self.records[index]
    }

    pub fn records(&self) -> &[InstructionRecord] {
        &self.records
    }

    /// Issues the lowest-index unissued instruction, provided the reorder
    /// buffer has room.
    pub fn issue_next(&mut self, rob: &mut ReorderBuffer) -> Result<(), SimulatorError> {
        if rob.is_full() {
            return Ok(());
        }
        if let Some(record) = self.records.iter_mut().find(|r| r.state == State::Unissued) {
            debug!("issuing index {}", record.index);
            record.issue();
            rob.add(record.index)?;
        }
        Ok(())
    }

    /// Flushes every record's pending state into its actual state for
    /// `new_cycle`, then reports whether the simulation should stop: either
    /// because the last program-order instruction has committed, or because
    /// `new_cycle` reached the configured cap.
    pub fn update(&mut self, new_cycle: usize, max_cycles: usize) -> Termination {
        for record in &mut self.records {
            record.flush(new_cycle);
        }
        if let Some(last) = self.records.last() {
            if last.state == State::Commit {
                info!("all instructions committed by cycle {}", new_cycle);
                return Termination::CommittedAt(new_cycle);
            }
        }
        if new_cycle >= max_cycles {
            info!("cycle cap {} reached before completion", max_cycles);
            return Termination::CapHit;
        }
        Termination::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_of(n: usize) -> InstructionTracker {
        let instructions = (0..n)
            .map(|i| Instruction::new("DADDI", Some(format!("R{}", i)), vec![]))
            .collect();
        InstructionTracker::new(instructions)
    }

    #[test]
    fn issue_next_picks_lowest_unissued_index_and_respects_rob_capacity() {
        let mut tracker = tracker_of(2);
        let mut rob = ReorderBuffer::new(1);
        tracker.issue_next(&mut rob).unwrap();
        assert_eq!(tracker.record(0).state, State::Unissued);
        tracker.update(1, 10);
        assert_eq!(tracker.record(0).state, State::Is);

        tracker.issue_next(&mut rob).unwrap();
        assert_eq!(tracker.record(1).state, State::Unissued);
    }

    #[test]
    fn update_reports_cap_hit_before_commit() {
        let mut tracker = tracker_of(1);
        assert_eq!(tracker.update(5, 5), Termination::CapHit);
    }

    #[test]
    fn update_reports_committed_once_last_instruction_commits() {
        let mut tracker = tracker_of(1);
        tracker.record_mut(0).commit();
        assert_eq!(tracker.update(3, 100), Termination::CommittedAt(3));
    }
}
