//! Daily Awareness - Daily well-being check-in service
//!
//! Users pick three comfort items once, answer one small interaction per day
//! and receive three-layer reflective advice (physical, sensory, awareness)
//! from a language model, with canned fallback advice when generation fails.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
