//! Common types used across the Fadada client library.

pub mod common;
pub mod params;

pub use common::*;
pub use params::Params;
