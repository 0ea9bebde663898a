//! Income Planner - Zero-budget income strategy recommendations
//!
//! This crate matches a user's weekly hours, skill level, and available
//! leverage against a fixed catalog of income strategies and ranks the ones
//! that fit.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
