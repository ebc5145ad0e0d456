// Register renaming and the reservation-station waiter lists.
//
// The reservation station is modeled not as a bank of individual station
// slots, but as a map from producer index to the ordered list of instruction
// indices waiting on that producer's result.

use std::collections::HashMap;

/// Partial map from register name to the index of the instruction that will
/// produce its next value. A register absent from the map has no in-flight
/// producer.
#[derive(Debug, Clone, Default)]
pub struct RegisterRenamingMap {
    producers: HashMap<String, usize>,
}

impl RegisterRenamingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn producer_of(&self, register: &str) -> Option<usize> {
        self.producers.get(register).copied()
    }

    pub fn set_producer(&mut self, register: &str, index: usize) {
        self.producers.insert(register.to_string(), index);
    }

    /// Clears the mapping only if `index` is still the registered producer.
    /// A later instruction may have already overwritten the same register's
    /// entry, in which case the earlier producer's retirement must not clear
    /// the newer mapping.
    pub fn clear_if_current(&mut self, register: &str, index: usize) {
        if self.producers.get(register) == Some(&index) {
            self.producers.remove(register);
        }
    }
}

/// producer index -> ordered list of waiter indices, queued in program order
/// as each waiter discovers the dependence. Fully drained on the producer's
/// writeback.
#[derive(Debug, Clone, Default)]
pub struct ReservationStationMap {
    waiters: HashMap<usize, Vec<usize>>,
}

impl ReservationStationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_waiter(&mut self, producer_index: usize, waiter_index: usize) {
        self.waiters.entry(producer_index).or_default().push(waiter_index);
    }

    /// Removes and returns every waiter on `producer_index`, in the order
    /// they were registered.
    pub fn drain_waiters(&mut self, producer_index: usize) -> Vec<usize> {
        self.waiters.remove(&producer_index).unwrap_or_default()
    }
}
