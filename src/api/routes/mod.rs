//! API route handlers

pub mod aggregates;
pub mod health;
pub mod observations;
pub mod precipitation;
pub mod stations;
pub mod welcome;
