//! Seams for the physical models consumed by the sizing engine.
//!
//! The engine treats all heat-transfer physics as external collaborators:
//! a [`ResponseModel`] produces a thermal response (g-function) for a
//! candidate field, and a [`Simulator`] turns that response into extreme
//! entering fluid temperatures or a final sizing height. Implementations
//! live outside this crate; the searches only see these traits.

mod error;
mod flow;
mod parameters;
mod response;
mod simulator;

pub use error::ModelError;
pub use flow::{FlowBasis, SystemFlow};
pub use parameters::{ParameterError, SimulationParameters};
pub use response::ResponseModel;
pub use simulator::{EftRange, Simulator};
