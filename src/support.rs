//! Supporting utilities used across the crate.

pub mod units;
