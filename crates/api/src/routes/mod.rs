//! Route Handlers

pub mod examples;
pub mod predict;
pub mod states;
