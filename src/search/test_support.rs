//! Shared mocks for the search test suites.

use uom::si::{
    f64::{Length, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    field::{FieldSpecifier, Layout, Point, SearchDomain},
    model::{ModelError, SimulationParameters},
    search::row_wise::GenerateField,
};

use super::{CostModel, EvaluationRecord, ExcessTemperature};

/// Standard test parameters: EFT window 5..35 C, heights 60..135 m.
pub fn test_params() -> SimulationParameters {
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

/// A straight-line field of `count` boreholes at 5 m spacing.
pub fn grid(count: usize) -> Layout {
    (0..count)
        .map(|i| Point {
            x: Length::new::<meter>(5.0 * i as f64),
            y: Length::default(),
        })
        .collect()
}

/// A domain of line fields with the given borehole counts.
pub fn count_domain(counts: &[usize]) -> SearchDomain {
    SearchDomain::new(
        counts.iter().map(|&n| grid(n)).collect(),
        counts
            .iter()
            .map(|&n| FieldSpecifier::new(format!("{n}bh")))
            .collect(),
    )
    .unwrap()
}

pub fn excess_of(kelvin: f64) -> ExcessTemperature {
    ExcessTemperature::new(TemperatureInterval::new::<delta_kelvin>(kelvin))
}

/// Scripted cost model: excess temperature and sized height are functions
/// of the candidate's borehole count and height.
pub struct MockCostModel {
    excess_fn: Box<dyn Fn(usize, Length) -> f64>,
    sized_fn: Box<dyn Fn(usize) -> f64>,
    /// Every `(boreholes, height in meters)` pair evaluated, in order.
    pub evaluations: Vec<(usize, f64)>,
    trace: Vec<EvaluationRecord>,
}

impl MockCostModel {
    /// Excess in kelvin as a function of `(boreholes, height)`; sized
    /// height fixed at 100 m.
    pub fn new(excess_fn: impl Fn(usize, Length) -> f64 + 'static) -> Self {
        Self {
            excess_fn: Box::new(excess_fn),
            sized_fn: Box::new(|_| 100.0),
            evaluations: Vec::new(),
            trace: Vec::new(),
        }
    }

    pub fn with_sized_height(mut self, sized_fn: impl Fn(usize) -> f64 + 'static) -> Self {
        self.sized_fn = Box::new(sized_fn);
        self
    }

    /// Number of evaluations performed at a height other than the two
    /// endpoint probes, i.e. the midpoint evaluations of a bisection.
    pub fn evaluation_count(&self) -> usize {
        self.evaluations.len()
    }
}

impl CostModel for MockCostModel {
    fn excess(
        &mut self,
        layout: &Layout,
        height: Length,
        specifier: &FieldSpecifier,
    ) -> Result<ExcessTemperature, ModelError> {
        let value = (self.excess_fn)(layout.len(), height);
        let excess = excess_of(value);
        self.evaluations.push((layout.len(), height.get::<meter>()));
        self.trace.push(EvaluationRecord {
            specifier: specifier.clone(),
            excess,
            max_eft: ThermodynamicTemperature::new::<degree_celsius>(35.0 + value),
            min_eft: ThermodynamicTemperature::new::<degree_celsius>(10.0),
        });
        Ok(excess)
    }

    fn sized_height(
        &mut self,
        layout: &Layout,
        _specifier: &FieldSpecifier,
    ) -> Result<Length, ModelError> {
        Ok(Length::new::<meter>((self.sized_fn)(layout.len())))
    }

    fn trace(&self) -> &[EvaluationRecord] {
        &self.trace
    }
}

/// Scripted row-wise field generator: borehole count is a function of the
/// target spacing.
pub struct MockGenerator {
    count_fn: Box<dyn Fn(f64) -> usize>,
    /// Every spacing (in meters) a field was generated for, in order.
    pub generated: std::cell::RefCell<Vec<f64>>,
}

impl MockGenerator {
    pub fn new(count_fn: impl Fn(f64) -> usize + 'static) -> Self {
        Self {
            count_fn: Box::new(count_fn),
            generated: std::cell::RefCell::new(Vec::new()),
        }
    }
}

impl GenerateField for MockGenerator {
    fn generate(&self, spacing: Length) -> Result<(Layout, FieldSpecifier), ModelError> {
        let spacing_m = spacing.get::<meter>();
        self.generated.borrow_mut().push(spacing_m);
        let count = (self.count_fn)(spacing_m);
        Ok((grid(count), FieldSpecifier::new(format!("rw_{spacing_m:.3}"))))
    }
}
