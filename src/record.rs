// The tracked entity behind each input Instruction: its state machine,
// dependence count, reportable history, and hazard messages.

use std::collections::BTreeSet;

use crate::instruction::Instruction;

/// Full state set of an in-flight instruction. Transitions are driven
/// exclusively through the named methods below, which can only ever
/// construct one of these nine variants -- there is no string state and so
/// no `IllegalStateTransition` to raise for a typo'd target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unissued,
    Is,
    ReservationStation,
    QueuedForExecute,
    Execute,
    QueuedForWriteback,
    Writeback,
    WaitingForCommit,
    Commit,
}

/// The subset of states a history entry is recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportableState {
    Is,
    Execute,
    ExecuteEnd,
    Writeback,
    Commit,
}

/// Hazard annotations recorded in `messages`. Ordered so that report
/// rendering and test assertions get a deterministic iteration order
/// regardless of insertion order within a cycle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum HazardMessage {
    Raw {
        register: String,
        producer_index: usize,
    },
    StructuralFu {
        unit_name: &'static str,
        occupant_index: usize,
    },
    StructuralCdb {
        winner_index: usize,
    },
}

impl std::fmt::Display for HazardMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HazardMessage::Raw {
                register,
                producer_index,
            } => write!(f, "RAW on {} (from {})", register, producer_index),
            HazardMessage::StructuralFu {
                unit_name,
                occupant_index,
            } => write!(f, "SD on {} (from {})", unit_name, occupant_index),
            HazardMessage::StructuralCdb { winner_index } => {
                write!(f, "SD on CDB (from {})", winner_index)
            },
        }
    }
}

/// One tracked instruction: immutable input plus the mutable state machine
/// the engine advances each cycle.
#[derive(Debug, Clone)]
pub struct InstructionRecord {
    pub index: usize,
    pub instruction: Instruction,
    pub state: State,
    pending_state: Option<State>,
    pub dependence_count: u32,
    pub history: Vec<(ReportableState, usize)>,
    pub messages: BTreeSet<HazardMessage>,
}

impl InstructionRecord {
    pub fn new(index: usize, instruction: Instruction) -> Self {
        Self {
            index,
            instruction,
            state: State::Unissued,
            pending_state: None,
            dependence_count: 0,
            history: Vec::new(),
            messages: BTreeSet::new(),
        }
    }

    pub fn issue(&mut self) {
        self.pending_state = Some(State::Is);
    }

    pub fn wait_in_reservation_station(&mut self) {
        self.pending_state = Some(State::ReservationStation);
    }

    pub fn enqueue_for_execute(&mut self) {
        self.pending_state = Some(State::QueuedForExecute);
    }

    pub fn execute(&mut self) {
        self.pending_state = Some(State::Execute);
    }

    pub fn enqueue_for_writeback(&mut self) {
        self.pending_state = Some(State::QueuedForWriteback);
    }

    pub fn writeback(&mut self) {
        self.pending_state = Some(State::Writeback);
    }

    pub fn wait_for_commit(&mut self) {
        self.pending_state = Some(State::WaitingForCommit);
    }

    pub fn commit(&mut self) {
        self.pending_state = Some(State::Commit);
    }

    pub fn ready_to_commit(&self) -> bool {
        matches!(self.state, State::Writeback | State::WaitingForCommit)
    }

    /// Applies the pending state atomically, appending history entries as
    /// needed. This is the only place `state` is ever mutated during a cycle.
    pub fn flush(&mut self, new_cycle: usize) {
        let Some(new_state) = self.pending_state.take() else {
            return;
        };
        if let Some(reportable) = reportable_for(new_state) {
            self.history.push((reportable, new_cycle));
        }
        if self.state == State::Execute {
            self.history.push((ReportableState::ExecuteEnd, new_cycle - 1));
        }
        self.state = new_state;
    }

    pub fn cycle_of(&self, target: ReportableState) -> Option<usize> {
        self.history
            .iter()
            .find(|(state, _)| *state == target)
            .map(|(_, cycle)| *cycle)
    }

    /// `"<opcode> <write>, <read0>, <read1>, ..."`.
    pub fn display_text(&self) -> String {
        let write = self.instruction.write_register.as_deref().unwrap_or("");
        let mut regs = vec![write.to_string()];
        regs.extend(self.instruction.read_registers.iter().cloned());
        format!("{} {}", self.instruction.opcode, regs.join(", "))
    }
}

fn reportable_for(state: State) -> Option<ReportableState> {
    match state {
        State::Is => Some(ReportableState::Is),
        State::Execute => Some(ReportableState::Execute),
        State::Writeback => Some(ReportableState::Writeback),
        State::Commit => Some(ReportableState::Commit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InstructionRecord {
        InstructionRecord::new(
            0,
            Instruction::new("ADD.D", Some("F2".into()), vec!["F0".into(), "F4".into()]),
        )
    }

    #[test]
    fn flush_applies_pending_state_and_records_history() {
        let mut rec = sample();
        rec.issue();
        rec.flush(1);
        assert_eq!(rec.state, State::Is);
        assert_eq!(rec.cycle_of(ReportableState::Is), Some(1));
    }

    #[test]
    fn flush_is_a_no_op_without_a_pending_state() {
        let mut rec = sample();
        rec.issue();
        rec.flush(1);
        rec.flush(2);
        assert_eq!(rec.cycle_of(ReportableState::Is), Some(1));
        assert_eq!(rec.state, State::Is);
    }

    #[test]
    fn execute_end_is_stamped_on_the_flush_leaving_execute() {
        let mut rec = sample();
        rec.issue();
        rec.flush(1);
        rec.execute();
        rec.flush(2);
        rec.enqueue_for_writeback();
        rec.flush(5);
        assert_eq!(rec.cycle_of(ReportableState::Execute), Some(2));
        assert_eq!(rec.cycle_of(ReportableState::ExecuteEnd), Some(4));
    }

    #[test]
    fn ready_to_commit_holds_in_writeback_and_waiting_for_commit() {
        let mut rec = sample();
        assert!(!rec.ready_to_commit());
        rec.writeback();
        rec.flush(1);
        assert!(rec.ready_to_commit());
        rec.wait_for_commit();
        rec.flush(2);
        assert!(rec.ready_to_commit());
    }
}
