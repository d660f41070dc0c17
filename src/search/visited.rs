use std::collections::BTreeMap;

use super::ExcessTemperature;

/// Ordered association from visited domain index to its excess
/// temperature.
///
/// Grows monotonically by insertion, never removes, and iterates in index
/// order, which makes the selection tie-break deterministic.
#[derive(Debug, Default, Clone)]
pub struct VisitedExcess {
    entries: BTreeMap<usize, ExcessTemperature>,
}

impl VisitedExcess {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, excess: ExcessTemperature) {
        self.entries.insert(index, excess);
    }

    /// The feasible visited index closest to the feasibility boundary.
    ///
    /// Among all visited indices with excess temperature `<= 0`, returns
    /// the one with the maximum (closest-to-zero) value. Ties go to the
    /// lowest index.
    #[must_use]
    pub fn best_feasible(&self) -> Option<(usize, ExcessTemperature)> {
        let mut best: Option<(usize, ExcessTemperature)> = None;
        for (&index, &excess) in &self.entries {
            if !excess.is_feasible() {
                continue;
            }
            match best {
                Some((_, current)) if excess <= current => {}
                _ => best = Some((index, excess)),
            }
        }
        best
    }
}
