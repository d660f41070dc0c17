//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] types. One operation
//! the sizing engine needs is missing from [`uom`] itself: subtracting one
//! absolute temperature from another to get a temperature interval. The
//! excess-temperature cost rule is built on exactly that subtraction
//! (entering fluid temperature minus an allowable bound), so the extension
//! lives here.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// [`uom`] deliberately distinguishes absolute temperatures
/// ([`ThermodynamicTemperature`]) from temperature differences
/// ([`TemperatureInterval`]) and provides no subtraction between two
/// absolute temperatures. See
/// [uom#380](https://github.com/iliekturtles/uom/issues/380) for background.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
