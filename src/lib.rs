//! # GHE Sizer
//!
//! Search routines for sizing ground heat exchanger (GHE) borehole fields:
//! given thermal loads and soil/grout/pipe/fluid properties, find the
//! smallest feasible borehole field (count, layout, and length) that keeps
//! simulated heat-pump entering fluid temperatures within allowable bounds
//! over a multi-year horizon.
//!
//! ## Crate layout
//!
//! - [`field`]: Borehole layouts, search domains, and geometric constraints.
//! - [`model`]: Seams for the thermal response function, the fixed-field
//!   simulator, and flow/simulation parameters. The physics lives behind
//!   these traits; this crate never computes a g-function itself.
//! - [`search`]: The sizing engine: cost evaluation and the linear,
//!   nested, and row-wise field searches.
//! - [`support`]: Supporting utilities used across modules.
//!
//! ## Feasibility convention
//!
//! Every search decision is driven by a signed *excess temperature*:
//! non-positive means the candidate field satisfies both entering fluid
//! temperature bounds, positive means a bound is violated. Searches narrow
//! toward the feasible candidate whose excess temperature is closest to
//! zero, which is the least amount of drilling that still works.

pub mod field;
pub mod model;
pub mod search;
pub mod support;
