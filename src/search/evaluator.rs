use uom::si::f64::{Length, MassDensity, VolumeRate};

use crate::{
    field::{FieldSpecifier, Layout},
    model::{FlowBasis, ModelError, ResponseModel, SimulationParameters, Simulator},
};

use super::{EvaluationRecord, ExcessTemperature};

/// The searches' only view of the physics: cost a candidate, size a
/// selection, and expose the evaluation trace.
pub trait CostModel {
    /// Evaluates one `(layout, height)` candidate and returns its excess
    /// temperature.
    ///
    /// Every call appends an [`EvaluationRecord`] to the trace.
    ///
    /// # Errors
    ///
    /// Delegated model failures propagate unmodified.
    fn excess(
        &mut self,
        layout: &Layout,
        height: Length,
        specifier: &FieldSpecifier,
    ) -> Result<ExcessTemperature, ModelError>;

    /// Computes the final sizing height for a selected layout.
    ///
    /// # Errors
    ///
    /// Delegated model failures propagate unmodified.
    fn sized_height(
        &mut self,
        layout: &Layout,
        specifier: &FieldSpecifier,
    ) -> Result<Length, ModelError>;

    /// The append-only evaluation trace so far.
    fn trace(&self) -> &[EvaluationRecord];
}

/// Wraps the response-function and simulator seams into a cost model.
///
/// Each evaluation is a pure function of the `(layout, height)` pair: the
/// flow rates are resolved for the candidate's borehole count, the
/// response curve is built, the fixed-field simulation runs, and the EFT
/// extremes collapse into a single signed excess temperature. The only
/// retained state is the append-only trace.
#[derive(Debug)]
pub struct CostEvaluator<R, S> {
    response: R,
    simulator: S,
    params: SimulationParameters,
    v_flow: VolumeRate,
    flow_basis: FlowBasis,
    fluid_density: MassDensity,
    trace: Vec<EvaluationRecord>,
}

impl<R, S> CostEvaluator<R, S>
where
    R: ResponseModel,
    S: Simulator<R::Curve>,
{
    #[must_use]
    pub fn new(
        response: R,
        simulator: S,
        params: SimulationParameters,
        v_flow: VolumeRate,
        flow_basis: FlowBasis,
        fluid_density: MassDensity,
    ) -> Self {
        Self {
            response,
            simulator,
            params,
            v_flow,
            flow_basis,
            fluid_density,
            trace: Vec::new(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Consumes the evaluator and returns the accumulated trace.
    #[must_use]
    pub fn into_trace(self) -> Vec<EvaluationRecord> {
        self.trace
    }
}

impl<R, S> CostModel for CostEvaluator<R, S>
where
    R: ResponseModel,
    S: Simulator<R::Curve>,
{
    fn excess(
        &mut self,
        layout: &Layout,
        height: Length,
        specifier: &FieldSpecifier,
    ) -> Result<ExcessTemperature, ModelError> {
        let flow = self
            .flow_basis
            .resolve(self.v_flow, layout.len(), self.fluid_density);
        let curve = self
            .response
            .g_function(layout, height, flow.m_flow_borehole)?;
        let range = self.simulator.simulate(&curve, height, flow)?;
        let excess = ExcessTemperature::from_eft_range(range, &self.params);

        tracing::debug!(
            specifier = %specifier,
            boreholes = layout.len(),
            excess = excess.get().value,
            "evaluated candidate field"
        );

        self.trace.push(EvaluationRecord {
            specifier: specifier.clone(),
            excess,
            max_eft: range.max,
            min_eft: range.min,
        });

        Ok(excess)
    }

    fn sized_height(
        &mut self,
        layout: &Layout,
        _specifier: &FieldSpecifier,
    ) -> Result<Length, ModelError> {
        let flow = self
            .flow_basis
            .resolve(self.v_flow, layout.len(), self.fluid_density);
        let curve = self
            .response
            .g_function(layout, self.params.max_height(), flow.m_flow_borehole)?;
        self.simulator.size(&curve, flow)
    }

    fn trace(&self) -> &[EvaluationRecord] {
        &self.trace
    }
}
