use std::collections::BTreeMap;

use tracing::debug;
use uom::si::f64::Length;

use crate::{field::NestedDomain, model::SimulationParameters};

use super::{CostModel, DomainSelection, LinearDomainSearch, SearchError, SelectedDesign};

/// One successfully traversed domain in the successive walk.
#[derive(Debug, Clone, Copy)]
struct Traversal {
    drilling: Length,
    height: Length,
    selection: DomainSelection,
}

/// Default bound on how many inner domains the successive walk traverses
/// past the outer selection.
pub const DEFAULT_SUCCESSIVE_WINDOW: usize = 7;

/// Composed search over a family of inner domains.
///
/// An outer index bisection over one representative boundary layout per
/// inner domain picks where to descend; a full linear search inside the
/// chosen domain (or a successive walk across a window of domains) then
/// picks the field. The nesting trades optimality for tractability: one
/// bisection across the full combinatorial domain would cost a thermal
/// simulation per candidate.
#[derive(Debug, Clone, Copy)]
pub struct NestedDomainSearch {
    linear: LinearDomainSearch,
    successive_window: usize,
}

impl Default for NestedDomainSearch {
    fn default() -> Self {
        Self {
            linear: LinearDomainSearch::default(),
            successive_window: DEFAULT_SUCCESSIVE_WINDOW,
        }
    }
}

impl NestedDomainSearch {
    #[must_use]
    pub fn new(linear: LinearDomainSearch, successive_window: usize) -> Self {
        Self {
            linear,
            successive_window: successive_window.max(1),
        }
    }

    /// Outer selection mapped onto an inner-domain index.
    ///
    /// The outer domain has an extra prepended layout, so the outer index
    /// is shifted down by one (saturating at the first inner domain).
    fn descend(
        &self,
        nested: &NestedDomain,
        params: &SimulationParameters,
        model: &mut impl CostModel,
    ) -> Result<usize, SearchError> {
        let outer = nested.outer();
        let selection = self.linear.search(&outer, params, model)?;
        let inner_index = selection.index.saturating_sub(1).min(nested.len() - 1);
        debug!(
            outer_index = selection.index,
            inner_index, "outer search selected inner domain"
        );
        Ok(inner_index)
    }

    /// Two-level search: outer domain selection, then a full linear search
    /// inside the chosen inner domain.
    ///
    /// # Errors
    ///
    /// As [`LinearDomainSearch::search`], from either level.
    pub fn find(
        &self,
        nested: &NestedDomain,
        params: &SimulationParameters,
        model: &mut impl CostModel,
    ) -> Result<SelectedDesign, SearchError> {
        let inner_index = self.descend(nested, params, model)?;
        self.linear.find(nested.domain(inner_index), params, model)
    }

    /// Successive search: walk forward through inner domains from the
    /// outer selection, tracking total drilling per domain.
    ///
    /// The walk stops early the first time total drilling increases versus
    /// the previous traversed domain, and the domain with minimum recorded
    /// drilling wins (ties to the first occurrence). A domain whose linear
    /// search fails to bracket is skipped rather than aborting the walk.
    ///
    /// # Errors
    ///
    /// Delegated model failures propagate; if every domain in the window
    /// fails to bracket, the first bracket failure is returned.
    pub fn find_successive(
        &self,
        nested: &NestedDomain,
        params: &SimulationParameters,
        model: &mut impl CostModel,
    ) -> Result<SelectedDesign, SearchError> {
        let start = self.descend(nested, params, model)?;

        let mut recorded: BTreeMap<usize, Traversal> = BTreeMap::new();
        let mut previous_drilling: Option<Length> = None;
        let mut first_failure: Option<SearchError> = None;

        let mut index = start;
        while index < nested.len() && index < start + self.successive_window {
            let domain = nested.domain(index);
            let selection = match self.linear.search(domain, params, model) {
                Ok(selection) => selection,
                Err(err) if err.is_bracket_failure() => {
                    debug!(index, %err, "domain does not bracket, skipping");
                    first_failure.get_or_insert(err);
                    index += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let layout = domain.layout(selection.index);
            let height = model.sized_height(layout, domain.specifier(selection.index))?;
            let drilling = height * layout.len() as f64;
            debug!(index, drilling = drilling.value, "domain traversed");
            recorded.insert(
                index,
                Traversal {
                    drilling,
                    height,
                    selection,
                },
            );

            if previous_drilling.is_some_and(|previous| previous < drilling) {
                break;
            }
            previous_drilling = Some(drilling);
            index += 1;
        }

        if recorded.is_empty() {
            // The walk runs at least one domain, so an empty record means
            // every attempt failed to bracket.
            return Err(first_failure.expect("empty walk records a bracket failure"));
        }

        let (&winner, traversal) = recorded
            .iter()
            .min_by(|a, b| {
                a.1.drilling
                    .partial_cmp(&b.1.drilling)
                    .expect("total drilling is finite")
            })
            .expect("recorded traversals are non-empty");

        let domain = nested.domain(winner);
        let selection = traversal.selection;
        let layout = domain.layout(selection.index).clone();
        let specifier = domain.specifier(selection.index).clone();
        let height = traversal.height;

        Ok(SelectedDesign {
            layout,
            specifier,
            height,
            excess: selection.excess,
            trace: model.trace().to_vec(),
        })
    }
}
