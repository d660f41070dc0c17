use std::str::FromStr;

use tracing::debug;
use uom::si::{
    f64::{Length, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::{
    field::{FieldSpecifier, Layout, Point, SpacingBounds},
    model::{ModelError, SimulationParameters},
};

use super::{CostModel, ExcessTemperature, SearchError, SelectedDesign, Sign};

/// Default iteration cap for the spacing and prune-count bisections.
pub const DEFAULT_MAX_ITER: usize = 10;

/// Default number of looser spacings swept by the refinement band.
pub const DEFAULT_EXHAUSTIVE_FIELDS: usize = 10;

/// On-demand field generation from a continuous spacing parameter.
///
/// Implementations lay out a row-wise field inside the property boundary
/// at the given target spacing, including any rotation sweep or perimeter
/// pass they are configured with.
pub trait GenerateField {
    /// Generates the field for a target spacing.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if generation fails.
    fn generate(&self, spacing: Length) -> Result<(Layout, FieldSpecifier), ModelError>;
}

/// Heuristic ordering used when pruning boreholes from an over-performing
/// field.
///
/// The orderings place the boreholes to *keep* at the tail of the
/// sequence; pruning removes from the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalMethod {
    /// Keep the cluster nearest the field's first borehole.
    #[default]
    CloseToCorner,
    /// Keep the cluster nearest the configured reference point.
    CloseToPoint,
    /// Keep the boreholes farthest from the configured reference point.
    FarFromPoint,
    /// Prune in raw sequence order.
    RowRemoval,
}

impl FromStr for RemovalMethod {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CloseToCorner" => Ok(Self::CloseToCorner),
            "CloseToPoint" => Ok(Self::CloseToPoint),
            "FarFromPoint" => Ok(Self::FarFromPoint),
            "RowRemoval" => Ok(Self::RowRemoval),
            other => Err(SearchError::InvalidRemovalMethod(other.to_string())),
        }
    }
}

/// Tuning knobs for the row-wise search.
#[derive(Debug, Clone, Copy)]
pub struct RowWiseConfig {
    /// Iteration cap for both the spacing and the prune-count bisection.
    pub max_iter: usize,

    /// Convergence tolerance on the excess-temperature gap between the
    /// spacing bracket ends.
    pub tolerance: TemperatureInterval,

    /// Ordering heuristic for the borehole-pruning fallback.
    pub removal_method: RemovalMethod,

    /// Reference point for the point-based removal orderings.
    pub reference_point: Point,

    /// Number of looser spacings re-checked after the spacing bisection
    /// converges.
    pub exhaustive_fields_to_check: usize,
}

impl Default for RowWiseConfig {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            tolerance: TemperatureInterval::new::<delta_kelvin>(1e-10),
            removal_method: RemovalMethod::default(),
            reference_point: Point::origin(),
            exhaustive_fields_to_check: DEFAULT_EXHAUSTIVE_FIELDS,
        }
    }
}

/// One candidate examined by the row-wise search, for the detailed trace.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    /// Target spacing the field was generated for; `None` for the pruning
    /// probes, which reuse the loosest generated field.
    pub spacing: Option<Length>,
    pub specifier: FieldSpecifier,
    pub boreholes: usize,
    pub excess: ExcessTemperature,
}

/// Result of a row-wise search: the design plus the detailed candidate
/// trace.
#[derive(Debug, Clone)]
pub struct RowWiseOutcome {
    pub design: SelectedDesign,
    pub candidates: Vec<CandidateRecord>,
}

/// Bisection over a continuous spacing parameter for row-wise fields.
///
/// Layouts are not enumerated up front; they are generated on demand from
/// a target spacing. The search brackets on the spacing extremes and then
/// either bisects on spacing (tight end feasible, loose end not), or, when
/// even the loosest field over-performs, prunes boreholes from it down to
/// a minimal feasible subset.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowWiseFieldSearch {
    config: RowWiseConfig,
}

impl RowWiseFieldSearch {
    #[must_use]
    pub fn new(config: RowWiseConfig) -> Self {
        Self { config }
    }

    /// Runs the search.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Constraint`] if the spacing bounds violate their
    ///   invariants (the refinement band needs a positive `step`).
    /// - [`SearchError::OverconstrainedDomain`] if even the tightest
    ///   spacing cannot satisfy the loads.
    /// - [`SearchError::InconsistentExcessTemperature`] for an endpoint
    ///   sign combination no branch accepts.
    /// - [`SearchError::Model`] for delegated generation or evaluation
    ///   failures.
    pub fn find(
        &self,
        spacing: &SpacingBounds,
        generator: &impl GenerateField,
        params: &SimulationParameters,
        model: &mut impl CostModel,
    ) -> Result<RowWiseOutcome, SearchError> {
        spacing.validate()?;

        let mut candidates = Vec::new();

        let (tight_field, tight_spec) = generator.generate(spacing.start)?;
        let (loose_field, loose_spec) = generator.generate(spacing.stop)?;

        let tight_excess = model.excess(&tight_field, params.max_height(), &tight_spec)?;
        let loose_excess = model.excess(&loose_field, params.max_height(), &loose_spec)?;

        record(&mut candidates, Some(spacing.start), &tight_spec, &tight_field, tight_excess);
        record(&mut candidates, Some(spacing.stop), &loose_spec, &loose_field, loose_excess);

        let selection = match (tight_excess.sign(), loose_excess.sign()) {
            (Sign::Positive, Sign::Positive) => {
                return Err(SearchError::OverconstrainedDomain {
                    low: loose_excess,
                    high: tight_excess,
                });
            }
            (Sign::Negative, Sign::Positive) => self.bisect_spacing(
                spacing,
                (tight_excess, loose_excess),
                generator,
                params,
                model,
                &mut candidates,
            )?,
            (Sign::Negative, Sign::Negative) => self.prune_boreholes(
                spacing,
                (&loose_field, &loose_spec, loose_excess),
                params,
                model,
                &mut candidates,
            )?,
            _ => {
                return Err(SearchError::InconsistentExcessTemperature {
                    low: loose_excess,
                    high: tight_excess,
                });
            }
        };

        record(
            &mut candidates,
            selection.spacing,
            &selection.specifier,
            &selection.layout,
            selection.excess,
        );

        Ok(RowWiseOutcome {
            design: SelectedDesign {
                layout: selection.layout,
                specifier: selection.specifier,
                height: selection.height,
                excess: selection.excess,
                trace: model.trace().to_vec(),
            },
            candidates,
        })
    }

    /// Spacing bisection plus the exhaustive refinement band.
    fn bisect_spacing(
        &self,
        spacing: &SpacingBounds,
        (tight_excess, loose_excess): (ExcessTemperature, ExcessTemperature),
        generator: &impl GenerateField,
        params: &SimulationParameters,
        model: &mut impl CostModel,
        candidates: &mut Vec<CandidateRecord>,
    ) -> Result<Selection, SearchError> {
        let mut spacing_feasible = spacing.start;
        let mut spacing_infeasible = spacing.stop;
        let mut excess_feasible = tight_excess;
        let mut excess_infeasible = loose_excess;

        let mut midpoint = (spacing.start + spacing.stop) * 0.5;
        let mut iterations = 0;

        while iterations < self.config.max_iter {
            debug!(
                iteration = iterations,
                spacing = midpoint.value,
                "spacing bisection step"
            );
            let (field, specifier) = generator.generate(midpoint)?;
            let excess = model.excess(&field, params.max_height(), &specifier)?;
            record(candidates, Some(midpoint), &specifier, &field, excess);

            if excess.is_feasible() {
                spacing_feasible = midpoint;
                excess_feasible = excess;
            } else {
                spacing_infeasible = midpoint;
                excess_infeasible = excess;
            }

            midpoint = (spacing_feasible + spacing_infeasible) * 0.5;
            if (excess_infeasible.get() - excess_feasible.get()).abs() < self.config.tolerance {
                break;
            }
            iterations += 1;
        }

        // Re-check a band of slightly looser spacings with full sizing:
        // the spacing bisection alone can land on a locally minimal
        // drilling total.
        let band_end = spacing.step + spacing_feasible;
        let band_step = (band_end - spacing_feasible) / self.config.exhaustive_fields_to_check as f64;

        let mut best: Option<Selection> = None;
        let mut target = spacing_feasible;
        while target <= band_end {
            let (field, specifier) = generator.generate(target)?;
            let excess = model.excess(&field, params.max_height(), &specifier)?;
            record(candidates, Some(target), &specifier, &field, excess);

            let height = model.sized_height(&field, &specifier)?;
            let drilling = height * field.len() as f64;
            debug!(
                spacing = target.value,
                drilling = drilling.value,
                "refinement band candidate"
            );

            let replace = match &best {
                // The first candidate seeds the band unconditionally.
                None => true,
                Some(current) => excess.is_feasible() && drilling < current.drilling,
            };
            if replace {
                best = Some(Selection {
                    layout: field,
                    specifier,
                    excess,
                    height,
                    drilling,
                    spacing: Some(target),
                });
            }

            target += band_step;
        }

        Ok(best.expect("refinement band checks at least the converged spacing"))
    }

    /// Prunes boreholes from an over-performing loosest field down to a
    /// minimal feasible subset.
    fn prune_boreholes(
        &self,
        spacing: &SpacingBounds,
        (loose_field, loose_spec, loose_excess): (&Layout, &FieldSpecifier, ExcessTemperature),
        params: &SimulationParameters,
        model: &mut impl CostModel,
        candidates: &mut Vec<CandidateRecord>,
    ) -> Result<Selection, SearchError> {
        let sorted = match self.config.removal_method {
            RemovalMethod::CloseToCorner => {
                loose_field.sorted_by_distance(&loose_field.boreholes()[0], true)
            }
            RemovalMethod::CloseToPoint => {
                loose_field.sorted_by_distance(&self.config.reference_point, true)
            }
            RemovalMethod::FarFromPoint => {
                loose_field.sorted_by_distance(&self.config.reference_point, false)
            }
            RemovalMethod::RowRemoval => loose_field.clone(),
        };
        let total = sorted.len();

        // Fast path: a single borehole may already satisfy the loads.
        let single_spec = FieldSpecifier::single();
        let single = Layout::single();
        let single_excess = model.excess(&single, params.max_height(), &single_spec)?;
        record(candidates, None, &single_spec, &single, single_excess);

        if single_excess.is_feasible() {
            let layout = sorted.tail(1);
            let height = model.sized_height(&layout, &single_spec)?;
            return Ok(Selection {
                layout,
                specifier: single_spec,
                excess: single_excess,
                height,
                drilling: height,
                spacing: Some(spacing.stop),
            });
        }

        // Bisect the retained count from the tail of the sorted order. The
        // full field is feasible by branch precondition, so it seeds the
        // selection.
        let mut selected_layout = loose_field.clone();
        let mut selected_spec = loose_spec.clone();
        let mut selected_excess = loose_excess;

        let mut retained_max = total;
        let mut retained_min = 1;
        let mut iterations = 0;

        while iterations < self.config.max_iter {
            let retained = (retained_max + retained_min) / 2;
            let field = sorted.tail(retained);
            let specifier = loose_spec.with_removed(total - retained);
            let excess = model.excess(&field, params.max_height(), &specifier)?;
            record(candidates, Some(spacing.stop), &specifier, &field, excess);
            debug!(retained, excess = excess.get().value, "prune bisection step");

            if excess.is_feasible() {
                retained_max = retained;
                selected_layout = field;
                selected_spec = specifier;
                selected_excess = excess;
            } else {
                retained_min = retained;
            }
            if retained_max - retained_min <= 1 {
                break;
            }
            iterations += 1;
        }

        let height = model.sized_height(&selected_layout, &selected_spec)?;
        Ok(Selection {
            drilling: height * selected_layout.len() as f64,
            layout: selected_layout,
            specifier: selected_spec,
            excess: selected_excess,
            height,
            spacing: Some(spacing.stop),
        })
    }
}

/// Internal carrier for a chosen row-wise candidate.
#[derive(Debug, Clone)]
struct Selection {
    layout: Layout,
    specifier: FieldSpecifier,
    excess: ExcessTemperature,
    height: Length,
    drilling: Length,
    spacing: Option<Length>,
}

fn record(
    candidates: &mut Vec<CandidateRecord>,
    spacing: Option<Length>,
    specifier: &FieldSpecifier,
    layout: &Layout,
    excess: ExcessTemperature,
) {
    candidates.push(CandidateRecord {
        spacing,
        specifier: specifier.clone(),
        boreholes: layout.len(),
        excess,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::meter;

    use crate::field::ConstraintError;
    use crate::search::test_support::{MockCostModel, MockGenerator, test_params};

    fn bounds(start: f64, stop: f64, step: f64) -> SpacingBounds {
        SpacingBounds {
            start: Length::new::<meter>(start),
            stop: Length::new::<meter>(stop),
            step: Length::new::<meter>(step),
        }
    }

    #[test]
    fn removal_method_parses_known_names() {
        assert_eq!(
            "CloseToCorner".parse::<RemovalMethod>().unwrap(),
            RemovalMethod::CloseToCorner
        );
        assert_eq!(
            "RowRemoval".parse::<RemovalMethod>().unwrap(),
            RemovalMethod::RowRemoval
        );
    }

    #[test]
    fn removal_method_rejects_unknown_names() {
        let err = "Closest".parse::<RemovalMethod>().unwrap_err();
        assert!(matches!(err, SearchError::InvalidRemovalMethod(name) if name == "Closest"));
    }

    #[test]
    fn nonpositive_band_step_is_rejected_before_any_generation() {
        let generator = MockGenerator::new(|s| (550.0 / s).round() as usize);
        let mut model = MockCostModel::new(|count, _| (55.0 - count as f64) * 0.1);

        // A negative step would empty the refinement band; a zero step
        // would never advance it.
        for step in [-1.0, 0.0] {
            let err = RowWiseFieldSearch::default()
                .find(&bounds(5.0, 20.0, step), &generator, &test_params(), &mut model)
                .unwrap_err();
            assert!(matches!(
                err,
                SearchError::Constraint(ConstraintError::SpacingStep { .. })
            ));
        }
        assert!(generator.generated.borrow().is_empty());
    }

    #[test]
    fn overconstrained_when_both_extremes_infeasible() {
        let generator = MockGenerator::new(|s| (550.0 / s).round() as usize);
        let mut model = MockCostModel::new(|_, _| 2.0);

        let err = RowWiseFieldSearch::default()
            .find(&bounds(5.0, 20.0, 2.0), &generator, &test_params(), &mut model)
            .unwrap_err();

        assert!(matches!(err, SearchError::OverconstrainedDomain { .. }));
        // Only the two extreme fields were generated.
        assert_eq!(generator.generated.borrow().len(), 2);
    }

    #[test]
    fn inconsistent_sign_combination_is_fatal() {
        // Excess rising with borehole count inverts the expected bracket
        // (tight end infeasible, loose end feasible).
        let generator = MockGenerator::new(|s| (550.0 / s).round() as usize);
        let mut model = MockCostModel::new(|count, _| (count as f64 - 55.0) * 0.1);

        let err = RowWiseFieldSearch::default()
            .find(&bounds(5.0, 20.0, 2.0), &generator, &test_params(), &mut model)
            .unwrap_err();

        assert!(matches!(err, SearchError::InconsistentExcessTemperature { .. }));
    }

    #[test]
    fn spacing_bisection_finds_minimal_feasible_field() {
        // count = round(550 / spacing): 110 boreholes at 5 m, 28 at 20 m.
        // Fields of 55 or more boreholes are feasible.
        let generator = MockGenerator::new(|s| (550.0 / s).round() as usize);
        let mut model = MockCostModel::new(|count, _| (55.0 - count as f64) * 0.1);

        let outcome = RowWiseFieldSearch::default()
            .find(&bounds(5.0, 20.0, 2.0), &generator, &test_params(), &mut model)
            .unwrap();

        let design = &outcome.design;
        assert!(design.excess.is_feasible());
        // The refinement band minimizes drilling among feasible fields, so
        // the selection sits just above the 55-borehole threshold and well
        // under the tight-spacing extreme.
        assert!(design.layout.len() >= 55);
        assert!(design.layout.len() <= 60);

        // Both bisection and band candidates were traced.
        assert!(outcome.candidates.len() > 10);
        assert!(outcome.candidates.iter().all(|c| c.spacing.is_some()));
    }

    #[test]
    fn prune_fast_path_returns_single_borehole() {
        let generator = MockGenerator::new(|s| (20.0 / s).round() as usize);
        let mut model = MockCostModel::new(|_, _| -1.0);

        let outcome = RowWiseFieldSearch::default()
            .find(&bounds(2.5, 5.0, 1.0), &generator, &test_params(), &mut model)
            .unwrap();

        assert_eq!(outcome.design.layout.len(), 1);
        assert_eq!(outcome.design.specifier.as_str(), "1X1");
        // Two extremes plus the single-borehole probe; no prune bisection.
        assert_eq!(model.evaluation_count(), 3);
    }

    #[test]
    fn prune_bisection_keeps_minimal_feasible_count() {
        // 8 boreholes at the tight end, 4 at the loose end; fields of 3 or
        // more boreholes are feasible, so pruning should keep exactly 3.
        let generator = MockGenerator::new(|s| (20.0 / s).round() as usize);
        let mut model = MockCostModel::new(|count, _| 2.5 - count as f64);

        let outcome = RowWiseFieldSearch::default()
            .find(&bounds(2.5, 5.0, 1.0), &generator, &test_params(), &mut model)
            .unwrap();

        let design = &outcome.design;
        assert_eq!(design.layout.len(), 3);
        assert_relative_eq!(design.excess.get().value, -0.5, epsilon = 1e-12);
        assert_eq!(design.specifier.as_str(), "rw_5.000_BR1");
    }
}
