// Functional-unit pool: one single-in-flight-slot unit per class, each
// with a FIFO queue re-sorted by program index on every dispatch.

use log::trace;

use crate::instruction::FunctionalUnitKind;
use crate::record::HazardMessage;
use crate::tracker::InstructionTracker;

#[derive(Debug, Clone)]
pub struct FunctionalUnit {
    name: &'static str,
    duration: usize,
    queue: Vec<usize>,
    current_instruction: Option<usize>,
    end_cycle: Option<usize>,
}

impl FunctionalUnit {
    fn new(kind: FunctionalUnitKind, duration: usize) -> Self {
        Self {
            name: kind.unit_name(),
            duration,
            queue: Vec::new(),
            current_instruction: None,
            end_cycle: None,
        }
    }

    fn busy(&self, cycle: usize) -> bool {
        self.end_cycle.is_some_and(|end| cycle < end)
    }

    fn dispatch_next(&mut self, current_cycle: usize, tracker: &mut InstructionTracker) {
        if self.queue.is_empty() {
            return;
        }
        self.queue.sort_unstable();
        let next = self.queue.remove(0);
        tracker.record_mut(next).execute();
        self.current_instruction = Some(next);
        self.end_cycle = Some(current_cycle + self.duration);
    }

    pub fn update(&mut self, tracker: &mut InstructionTracker, cdb: &mut Vec<usize>, current_cycle: usize) {
        if self.end_cycle == Some(current_cycle) {
            let finished = self.current_instruction.expect("end_cycle implies an occupant");
            tracker.record_mut(finished).enqueue_for_writeback();
            cdb.push(finished);
        }
        if !self.busy(current_cycle) {
            self.dispatch_next(current_cycle, tracker);
        }
        if !self.queue.is_empty() {
            let occupant = self.current_instruction.expect("a queued waiter implies an occupant");
            for &waiter in &self.queue {
                trace!("{}: structural stall, index {} behind {}", self.name, waiter, occupant);
                tracker.record_mut(waiter).messages.insert(HazardMessage::StructuralFu {
                    unit_name: self.name,
                    occupant_index: occupant,
                });
            }
        }
    }

    fn enqueue(&mut self, index: usize, tracker: &mut InstructionTracker) {
        self.queue.push(index);
        tracker.record_mut(index).enqueue_for_execute();
    }
}

#[derive(Debug, Clone)]
pub struct FunctionalUnitPool {
    units: [FunctionalUnit; 4],
}

impl FunctionalUnitPool {
    /// `durations` gives one duration per `FunctionalUnitKind::ALL`, in that order.
    pub fn new(durations: [usize; 4]) -> Self {
        let mut kinds = FunctionalUnitKind::ALL.into_iter();
        let units = durations.map(|duration| FunctionalUnit::new(kinds.next().unwrap(), duration));
        Self { units }
    }

    fn unit_for_mut(&mut self, kind: FunctionalUnitKind) -> &mut FunctionalUnit {
        let position = FunctionalUnitKind::ALL.iter().position(|k| *k == kind).unwrap();
        &mut self.units[position]
    }

    pub fn enqueue(&mut self, tracker: &mut InstructionTracker, index: usize) {
        let kind = tracker.record(index).instruction.functional_unit_kind();
        self.unit_for_mut(kind).enqueue(index, tracker);
    }

    pub fn update(&mut self, tracker: &mut InstructionTracker, cdb: &mut Vec<usize>, cycle: usize) {
        for unit in &mut self.units {
            unit.update(tracker, cdb, cycle);
        }
    }
}
