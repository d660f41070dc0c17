use std::str::FromStr;

use uom::si::f64::{MassDensity, MassRate, VolumeRate};

use crate::search::SearchError;

/// Whether the configured volumetric flow rate applies per borehole or to
/// the whole system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowBasis {
    #[default]
    Borehole,
    System,
}

impl FlowBasis {
    /// Resolves the configured flow rate against a field of `boreholes`
    /// boreholes.
    ///
    /// Returns the system volumetric flow rate and the fluid mass flow
    /// rate through a single borehole.
    #[must_use]
    pub fn resolve(self, v_flow: VolumeRate, boreholes: usize, density: MassDensity) -> SystemFlow {
        let count = boreholes as f64;
        match self {
            Self::Borehole => SystemFlow {
                v_flow_system: v_flow * count,
                m_flow_borehole: v_flow * density,
            },
            Self::System => SystemFlow {
                v_flow_system: v_flow,
                m_flow_borehole: v_flow / count * density,
            },
        }
    }
}

impl FromStr for FlowBasis {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "borehole" => Ok(Self::Borehole),
            "system" => Ok(Self::System),
            other => Err(SearchError::InvalidFlowBasis(other.to_string())),
        }
    }
}

/// Flow rates resolved for one candidate field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemFlow {
    /// Total volumetric flow rate through the system.
    pub v_flow_system: VolumeRate,

    /// Fluid mass flow rate through a single borehole.
    pub m_flow_borehole: MassRate,
}
