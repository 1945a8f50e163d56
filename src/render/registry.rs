//! Chart registry - at most one live chart per slot

use super::spec::ChartSpec;
use std::collections::BTreeMap;
use std::fmt;

/// Where a chart is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartSlot {
    Comparison,
    Dimension,
    Courses,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 3] = [Self::Comparison, Self::Dimension, Self::Courses];
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison => write!(f, "comparison"),
            Self::Dimension => write!(f, "dimension"),
            Self::Courses => write!(f, "courses"),
        }
    }
}

/// A drawn chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub id: u64,
    pub spec: ChartSpec,
}

/// Live chart instances keyed by slot
#[derive(Debug, Default)]
pub struct ChartRegistry {
    live: BTreeMap<ChartSlot, ChartInstance>,
    next_id: u64,
    disposed: u64,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a chart, disposing whatever occupied the slot before
    pub fn draw(&mut self, slot: ChartSlot, spec: ChartSpec) -> u64 {
        self.dispose(slot);

        self.next_id += 1;
        let id = self.next_id;
        log::debug!("Drawing {} chart #{}", slot, id);
        self.live.insert(slot, ChartInstance { id, spec });
        id
    }

    /// Remove the chart in `slot`; returns whether one was live
    pub fn dispose(&mut self, slot: ChartSlot) -> bool {
        match self.live.remove(&slot) {
            Some(old) => {
                log::debug!("Disposed {} chart #{}", slot, old.id);
                self.disposed += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&ChartInstance> {
        self.live.get(&slot)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Instances disposed over the registry's lifetime
    pub fn disposed_count(&self) -> u64 {
        self.disposed
    }
}
