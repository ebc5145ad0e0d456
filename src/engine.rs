// The driver loop: flush-and-check, issue, dispatch, execute, CDB
// arbitration, commit, repeat.

use log::debug;

use crate::config::SimulatorConfig;
use crate::functional_unit::FunctionalUnitPool;
use crate::instruction::Instruction;
use crate::record::{HazardMessage, State};
use crate::rename::{RegisterRenamingMap, ReservationStationMap};
use crate::reorder_buffer::ReorderBuffer;
use crate::tracker::{InstructionTracker, Termination};

/// Result of a completed (or capped) simulation run.
pub struct RunResult {
    pub tracker: InstructionTracker,
    /// The cycle every instruction committed by, or `None` if the cycle cap
    /// was hit first.
    pub terminal_cycle: Option<usize>,
}

pub fn run(instructions: Vec<Instruction>, config: &SimulatorConfig) -> RunResult {
    let program_len = instructions.len();
    let mut tracker = InstructionTracker::new(instructions);
    if program_len == 0 {
        return RunResult { tracker, terminal_cycle: Some(0) };
    }

    let mut rob = ReorderBuffer::new(config.rob_capacity());
    let mut fu_pool = FunctionalUnitPool::new(config.durations());
    let mut rename_map = RegisterRenamingMap::new();
    let mut rs_map = ReservationStationMap::new();
    let mut cdb: Vec<usize> = Vec::new();
    let mut cycle = 0usize;

    let terminal_cycle = loop {
        match tracker.update(cycle, config.max_cycles()) {
            Termination::CommittedAt(c) => break Some(c),
            Termination::CapHit => break None,
            Termination::Running => {},
        }

        tracker
            .issue_next(&mut rob)
            .expect("issue_next only adds after checking is_full");

        dispatch(&mut tracker, &mut rename_map, &mut rs_map, &mut fu_pool, &rob);
        fu_pool.update(&mut tracker, &mut cdb, cycle);
        resolve_cdb(&mut tracker, &mut rename_map, &mut rs_map, &mut fu_pool, &mut cdb);
        commit(&mut tracker, &mut rob);

        cycle += 1;
    };

    RunResult { tracker, terminal_cycle }
}

/// Returns the cycle every instruction committed by, capped at `max_cycles`,
/// or `None` if the cap was reached first.
pub fn get_max(instructions: Vec<Instruction>, max_cycles: usize) -> Option<usize> {
    let config = SimulatorConfig::new().with_max_cycles(max_cycles);
    run(instructions, &config).terminal_cycle
}

/// IS-stage processing: every record currently in `Is` state either starts
/// waiting on its producers or is handed straight to a functional unit.
fn dispatch(
    tracker: &mut InstructionTracker,
    rename_map: &mut RegisterRenamingMap,
    rs_map: &mut ReservationStationMap,
    fu_pool: &mut FunctionalUnitPool,
    rob: &ReorderBuffer,
) {
    let issued: Vec<usize> = rob.iter().filter(|&idx| tracker.record(idx).state == State::Is).collect();

    for idx in issued {
        let read_registers = tracker.record(idx).instruction.read_registers.clone();
        let mut has_dependence = false;

        for register in &read_registers {
            if let Some(producer) = rename_map.producer_of(register) {
                has_dependence = true;
                let record = tracker.record_mut(idx);
                record.wait_in_reservation_station();
                record.dependence_count += 1;
                record.messages.insert(HazardMessage::Raw {
                    register: register.clone(),
                    producer_index: producer,
                });
                rs_map.add_waiter(producer, idx);
                debug!("index {} stalls on {} (producer {})", idx, register, producer);
            }
        }

        if !has_dependence {
            fu_pool.enqueue(tracker, idx);
        }

        if let Some(write_register) = tracker.record(idx).instruction.write_register.clone() {
            rename_map.set_producer(&write_register, idx);
        }
    }
}

/// WB-stage CDB arbitration: the lowest-index finisher wins the bus this
/// cycle, everyone else queued on it waits and is tagged with the loss.
fn resolve_cdb(
    tracker: &mut InstructionTracker,
    rename_map: &mut RegisterRenamingMap,
    rs_map: &mut ReservationStationMap,
    fu_pool: &mut FunctionalUnitPool,
    cdb: &mut Vec<usize>,
) {
    if cdb.is_empty() {
        return;
    }
    cdb.sort_unstable();
    let winner = cdb.remove(0);
    for &loser in cdb.iter() {
        tracker.record_mut(loser).messages.insert(HazardMessage::StructuralCdb { winner_index: winner });
    }

    debug!("index {} wins the CDB this cycle", winner);
    tracker.record_mut(winner).writeback();

    for waiter in rs_map.drain_waiters(winner) {
        let ready = {
            let record = tracker.record_mut(waiter);
            record.dependence_count -= 1;
            record.dependence_count == 0
        };
        if ready {
            fu_pool.enqueue(tracker, waiter);
        }
    }

    if let Some(write_register) = tracker.record(winner).instruction.write_register.clone() {
        rename_map.clear_if_current(&write_register, winner);
    }
}

/// CM-stage: the ROB head commits once it is ready, in program order.
fn commit(tracker: &mut InstructionTracker, rob: &mut ReorderBuffer) {
    if let Some(head) = rob.head() {
        if tracker.record(head).ready_to_commit() {
            tracker.record_mut(head).commit();
            rob.commit();
            debug!("index {} commits", head);
        }
    }
}
