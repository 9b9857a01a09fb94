//! Framework-independent helpers for the widget.

pub mod in_flight;
pub mod keys;
