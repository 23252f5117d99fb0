// src/core/mod.rs

pub mod coerce;
pub mod escape;
pub mod sanitize;

pub use coerce::Stat;
