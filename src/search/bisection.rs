use tracing::debug;

use crate::{field::SearchDomain, model::SimulationParameters};

use super::{CostModel, ExcessTemperature, SearchError, SelectedDesign, Sign, visited::VisitedExcess};

/// Default midpoint-evaluation cap for the index bisection.
pub const DEFAULT_MAX_ITER: usize = 15;

/// The layout chosen by a linear search, identified by its domain index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainSelection {
    pub index: usize,
    pub excess: ExcessTemperature,
}

/// Index bisection over an ordered sequence of candidate layouts at fixed
/// maximum height.
///
/// The domain runs from the smallest-capacity layout (index 0) to the
/// largest; excess temperature is assumed non-increasing along it. The
/// search selects the feasible layout whose excess temperature is closest
/// to zero, which under that assumption is the minimal-capacity field that
/// still works.
#[derive(Debug, Clone, Copy)]
pub struct LinearDomainSearch {
    max_iter: usize,
}

impl Default for LinearDomainSearch {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

impl LinearDomainSearch {
    #[must_use]
    pub fn new(max_iter: usize) -> Self {
        Self { max_iter }
    }

    /// Runs the search and returns the selected domain index.
    ///
    /// # Errors
    ///
    /// - [`SearchError::UnderconstrainedDomain`] if excess temperature is
    ///   negative at both ends of the domain.
    /// - [`SearchError::OverconstrainedDomain`] if it is positive at both
    ///   ends.
    /// - [`SearchError::InconsistentExcessTemperature`] if an endpoint is
    ///   exactly zero, which no branch accepts.
    /// - [`SearchError::Model`] for delegated evaluation failures.
    pub fn search(
        &self,
        domain: &SearchDomain,
        params: &SimulationParameters,
        model: &mut impl CostModel,
    ) -> Result<DomainSelection, SearchError> {
        let mut visited = VisitedExcess::new();
        let last = domain.last_index();

        // Endpoint probes: the smallest field at both allowable heights,
        // the largest field at maximum height.
        let low_at_min_height =
            model.excess(domain.layout(0), params.min_height(), domain.specifier(0))?;
        let low = model.excess(domain.layout(0), params.max_height(), domain.specifier(0))?;
        let high = model.excess(domain.layout(last), params.max_height(), domain.specifier(last))?;

        visited.insert(0, low);
        visited.insert(last, high);

        if low_at_min_height.brackets(&low) {
            // The smallest field sizes between the height bounds; nothing
            // smaller exists in the domain, so it is the selection.
            debug!("smallest layout in the domain sizes between the height bounds");
            return Ok(DomainSelection {
                index: 0,
                excess: low,
            });
        }

        if !low.brackets(&high) {
            return Err(match (low.sign(), high.sign()) {
                (Sign::Negative, Sign::Negative) => {
                    SearchError::UnderconstrainedDomain { low, high }
                }
                (Sign::Positive, Sign::Positive) => {
                    SearchError::OverconstrainedDomain { low, high }
                }
                _ => SearchError::InconsistentExcessTemperature { low, high },
            });
        }

        debug!(domain_len = domain.len(), "beginning index bisection");

        let low_sign = low.sign();
        let mut lo = 0;
        let mut hi = last;
        let mut iterations = 0;

        while iterations < self.max_iter {
            let mid = (lo + hi).div_ceil(2);
            if mid == lo || mid == hi {
                break;
            }

            let excess =
                model.excess(domain.layout(mid), params.max_height(), domain.specifier(mid))?;
            visited.insert(mid, excess);
            debug!(mid, excess = excess.get().value, "bisection step");

            if excess.sign() == low_sign {
                lo = mid;
            } else {
                hi = mid;
            }
            iterations += 1;
        }

        let (index, excess) = visited
            .best_feasible()
            .ok_or(SearchError::InconsistentExcessTemperature { low, high })?;

        // One more evaluation at the selection so the trace ends on the
        // field being returned.
        model.excess(domain.layout(index), params.max_height(), domain.specifier(index))?;

        Ok(DomainSelection { index, excess })
    }

    /// Runs the search and sizes the selected field.
    ///
    /// # Errors
    ///
    /// As [`LinearDomainSearch::search`].
    pub fn find(
        &self,
        domain: &SearchDomain,
        params: &SimulationParameters,
        model: &mut impl CostModel,
    ) -> Result<SelectedDesign, SearchError> {
        let selection = self.search(domain, params, model)?;
        let layout = domain.layout(selection.index).clone();
        let specifier = domain.specifier(selection.index).clone();
        let height = model.sized_height(&layout, &specifier)?;

        Ok(SelectedDesign {
            layout,
            specifier,
            height,
            excess: selection.excess,
            trace: model.trace().to_vec(),
        })
    }
}
