use uom::si::f64::ThermodynamicTemperature;

use crate::field::FieldSpecifier;

use super::ExcessTemperature;

/// One candidate evaluation, appended to the search trace.
///
/// The trace is append-only and purely diagnostic; no control decision
/// reads it back.
#[derive(Debug, Clone)]
pub struct EvaluationRecord {
    pub specifier: FieldSpecifier,
    pub excess: ExcessTemperature,
    pub max_eft: ThermodynamicTemperature,
    pub min_eft: ThermodynamicTemperature,
}
