//! Client-side widget state.
//!
//! DESIGN
//! ======
//! State types are plain structs with no Leptos dependency so the submit
//! and clear semantics can be tested natively. Components wrap them in
//! `RwSignal`s.

pub mod chat;
