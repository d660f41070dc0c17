use std::cmp::Ordering;

use uom::si::f64::TemperatureInterval;

use crate::{
    model::{EftRange, SimulationParameters},
    support::units::TemperatureDifference,
};

/// The signed feasibility cost of one candidate field.
///
/// Non-positive means the field satisfies both entering fluid temperature
/// bounds (with margin, or exactly at the boundary); positive means a
/// bound is violated. This sign convention is the decision variable for
/// every bisection step in the engine.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ExcessTemperature(TemperatureInterval);

impl ExcessTemperature {
    #[must_use]
    pub fn new(value: TemperatureInterval) -> Self {
        Self(value)
    }

    /// Converts simulated EFT extremes into the feasibility cost:
    /// `max(max_eft - max_allowable, min_allowable - min_eft)`.
    ///
    /// Either bound violation drives the cost positive; satisfying both
    /// drives it non-positive. Note this is a max over both bound
    /// distances, not a difference against a single bound.
    #[must_use]
    pub fn from_eft_range(range: EftRange, params: &SimulationParameters) -> Self {
        let over_max = range.max.minus(params.max_eft());
        let under_min = params.min_eft().minus(range.min);
        Self(if over_max > under_min { over_max } else { under_min })
    }

    #[must_use]
    pub fn get(&self) -> TemperatureInterval {
        self.0
    }

    /// Whether a field with this excess temperature satisfies the EFT
    /// bounds.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.0 <= TemperatureInterval::default()
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        let zero = TemperatureInterval::default();
        match self.0.partial_cmp(&zero) {
            Some(Ordering::Less) => Sign::Negative,
            Some(Ordering::Greater) => Sign::Positive,
            // NaN never brackets, same as an exact zero.
            Some(Ordering::Equal) | None => Sign::Zero,
        }
    }

    /// Whether two excess temperatures bracket the feasibility boundary.
    ///
    /// True only for strictly opposite signs; an exact zero at either end
    /// does not bracket.
    #[must_use]
    pub fn brackets(&self, other: &Self) -> bool {
        matches!(
            (self.sign(), other.sign()),
            (Sign::Negative, Sign::Positive) | (Sign::Positive, Sign::Negative)
        )
    }
}

/// Sign of an excess temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, ThermodynamicTemperature},
        length::meter,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    fn params() -> SimulationParameters {
        SimulationParameters::new(
            1,
            240,
            ThermodynamicTemperature::new::<degree_celsius>(5.0),
            ThermodynamicTemperature::new::<degree_celsius>(35.0),
            Length::new::<meter>(60.0),
            Length::new::<meter>(135.0),
        )
        .unwrap()
    }

    fn range(min: f64, max: f64) -> EftRange {
        EftRange {
            min: ThermodynamicTemperature::new::<degree_celsius>(min),
            max: ThermodynamicTemperature::new::<degree_celsius>(max),
        }
    }

    #[test]
    fn upper_bound_violation_is_positive() {
        let excess = ExcessTemperature::from_eft_range(range(10.0, 36.5), &params());
        assert_relative_eq!(excess.get().get::<delta_kelvin>(), 1.5, epsilon = 1e-12);
        assert!(!excess.is_feasible());
    }

    #[test]
    fn lower_bound_violation_is_positive() {
        let excess = ExcessTemperature::from_eft_range(range(3.0, 20.0), &params());
        assert_relative_eq!(excess.get().get::<delta_kelvin>(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn worst_bound_wins() {
        // Both bounds violated: the larger violation is reported.
        let excess = ExcessTemperature::from_eft_range(range(2.0, 36.0), &params());
        assert_relative_eq!(excess.get().get::<delta_kelvin>(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn both_bounds_satisfied_is_feasible() {
        let excess = ExcessTemperature::from_eft_range(range(10.0, 30.0), &params());
        assert_relative_eq!(excess.get().get::<delta_kelvin>(), -5.0, epsilon = 1e-12);
        assert!(excess.is_feasible());
    }

    #[test]
    fn zero_never_brackets() {
        let zero = ExcessTemperature::new(TemperatureInterval::default());
        let neg = ExcessTemperature::new(TemperatureInterval::new::<delta_kelvin>(-1.0));
        let pos = ExcessTemperature::new(TemperatureInterval::new::<delta_kelvin>(1.0));

        assert!(neg.brackets(&pos));
        assert!(pos.brackets(&neg));
        assert!(!zero.brackets(&neg));
        assert!(!zero.brackets(&pos));
        assert!(!neg.brackets(&neg));
    }
}
