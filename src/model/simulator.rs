use uom::si::f64::{Length, ThermodynamicTemperature};

use super::{ModelError, SystemFlow};

/// Extreme heat-pump entering fluid temperatures over a simulation horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EftRange {
    pub max: ThermodynamicTemperature,
    pub min: ThermodynamicTemperature,
}

/// The fixed-field simulation black box.
///
/// Given a response curve for one candidate field, an implementation runs
/// the multi-year thermal simulation against the ground loads it was
/// configured with.
pub trait Simulator<Curve> {
    /// Simulates the field at a fixed borehole height and reports the
    /// extreme entering fluid temperatures.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the simulation fails.
    fn simulate(&self, curve: &Curve, height: Length, flow: SystemFlow)
    -> Result<EftRange, ModelError>;

    /// Sizes the field: finds the borehole height, within the allowable
    /// range, at which the field exactly meets the EFT bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the sizing iteration fails.
    fn size(&self, curve: &Curve, flow: SystemFlow) -> Result<Length, ModelError>;
}
