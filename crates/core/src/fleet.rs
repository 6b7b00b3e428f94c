//! In-memory collection of boats.

use std::cmp::Ordering;

use crate::{error::FleetError, models::Boat};

/// Default maximum number of boats held by a fleet.
pub const DEFAULT_CAPACITY: usize = 120;

/// Ordered, capacity-bounded store of boats.
///
/// Boats are kept in insertion order until [`Fleet::sort_by_name`] reorders them.
#[derive(Debug, Clone)]
pub struct Fleet {
    boats: Vec<Boat>,
    capacity: usize,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::with_capacity_limit(DEFAULT_CAPACITY)
    }
}

impl Fleet {
    /// Create an empty fleet that holds at most `capacity` boats.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            boats: Vec::new(),
            capacity,
        }
    }

    /// Build a fleet from existing boats, dropping any beyond `capacity`.
    pub fn from_boats(mut boats: Vec<Boat>, capacity: usize) -> Self {
        if boats.len() > capacity {
            tracing::warn!(
                "discarding {} boats beyond capacity {capacity}",
                boats.len() - capacity
            );
            boats.truncate(capacity);
        }
        Self { boats, capacity }
    }

    /// Maximum number of boats this fleet accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of boats currently held.
    pub fn len(&self) -> usize {
        self.boats.len()
    }

    /// Whether the fleet holds no boats.
    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    /// Whether another boat would exceed the capacity.
    pub fn is_full(&self) -> bool {
        self.boats.len() >= self.capacity
    }

    /// Boats in their current order.
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    /// Iterate over boats in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &Boat> {
        self.boats.iter()
    }

    /// Mutably iterate over boats in their current order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Boat> {
        self.boats.iter_mut()
    }

    /// Append a boat, failing when the fleet is full.
    pub fn add(&mut self, boat: Boat) -> Result<(), FleetError> {
        if self.is_full() {
            return Err(FleetError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.boats.push(boat);
        Ok(())
    }

    /// Remove and return the first boat whose name matches, ignoring case.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Boat, FleetError> {
        let index = self
            .boats
            .iter()
            .position(|boat| boat.is_named(name))
            .ok_or_else(|| FleetError::NotFound {
                name: name.to_string(),
            })?;
        Ok(self.boats.remove(index))
    }

    /// First boat whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Boat> {
        self.boats.iter().find(|boat| boat.is_named(name))
    }

    /// Mutable access to the first boat whose name matches, ignoring case.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Boat> {
        self.boats.iter_mut().find(|boat| boat.is_named(name))
    }

    /// Sort boats in place by name, ignoring ASCII case.
    ///
    /// The sort is stable, so boats whose names compare equal keep their
    /// relative order.
    pub fn sort_by_name(&mut self) {
        self.boats.sort_by(|a, b| compare_ignore_case(&a.name, &b.name));
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Boat;
    type IntoIter = std::slice::Iter<'a, Boat>;

    fn into_iter(self) -> Self::IntoIter {
        self.boats.iter()
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}
