//! Domain layer
//!
//! Contains pure types with no I/O.
//! - `entities`: normalized mention records, reaction kinds, counters
//! - `ports`: Trait definitions for the aggregation API and the HTML sanitizer

pub mod entities;
pub mod ports;
