//! Network layer: prompt endpoint wire types and transport.

pub mod api;
pub mod types;
