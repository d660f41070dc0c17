use thiserror::Error;
use uom::si::f64::{Length, ThermodynamicTemperature};

/// An error validating [`SimulationParameters`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("start month {start} is after end month {end}")]
    MonthOrder { start: u32, end: u32 },

    #[error("minimum allowable EFT {min:?} is not below maximum {max:?}")]
    EftBounds {
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
    },

    #[error("minimum borehole height {min:?} exceeds maximum {max:?}")]
    HeightBounds { min: Length, max: Length },
}

/// Parameters bounding a sizing simulation: its horizon, the allowable
/// entering fluid temperature (EFT) window, and the drillable borehole
/// height range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    start_month: u32,
    end_month: u32,
    min_eft: ThermodynamicTemperature,
    max_eft: ThermodynamicTemperature,
    min_height: Length,
    max_height: Length,
}

impl SimulationParameters {
    /// Constructs validated simulation parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if `start_month > end_month`,
    /// `min_eft >= max_eft`, or `min_height > max_height`.
    pub fn new(
        start_month: u32,
        end_month: u32,
        min_eft: ThermodynamicTemperature,
        max_eft: ThermodynamicTemperature,
        min_height: Length,
        max_height: Length,
    ) -> Result<Self, ParameterError> {
        if start_month > end_month {
            return Err(ParameterError::MonthOrder {
                start: start_month,
                end: end_month,
            });
        }
        if min_eft >= max_eft {
            return Err(ParameterError::EftBounds {
                min: min_eft,
                max: max_eft,
            });
        }
        if min_height > max_height {
            return Err(ParameterError::HeightBounds {
                min: min_height,
                max: max_height,
            });
        }
        Ok(Self {
            start_month,
            end_month,
            min_eft,
            max_eft,
            min_height,
            max_height,
        })
    }

    #[must_use]
    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    #[must_use]
    pub fn end_month(&self) -> u32 {
        self.end_month
    }

    #[must_use]
    pub fn min_eft(&self) -> ThermodynamicTemperature {
        self.min_eft
    }

    #[must_use]
    pub fn max_eft(&self) -> ThermodynamicTemperature {
        self.max_eft
    }

    #[must_use]
    pub fn min_height(&self) -> Length {
        self.min_height
    }

    #[must_use]
    pub fn max_height(&self) -> Length {
        self.max_height
    }
}
