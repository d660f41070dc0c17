use uom::si::f64::{Length, MassRate};

use crate::field::Layout;

use super::ModelError;

/// The thermal response (g-function) black box.
///
/// An implementation computes or interpolates the long-term thermal step
/// response of a borehole field. The curve representation is the
/// implementation's own; this crate only threads it through to the
/// matching [`Simulator`](super::Simulator).
pub trait ResponseModel {
    /// The response curve handed to the simulator.
    type Curve;

    /// Computes the thermal response for `layout` at the given borehole
    /// height and per-borehole mass flow rate.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the response computation fails.
    fn g_function(
        &self,
        layout: &Layout,
        height: Length,
        m_flow_borehole: MassRate,
    ) -> Result<Self::Curve, ModelError>;
}
