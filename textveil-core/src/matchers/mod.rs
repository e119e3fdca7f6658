//! Independent entity matchers.
//!
//! Each matcher returns its own span list from a fresh scan over the given
//! text; the engine concatenates the lists in priority order and hands them
//! to the aggregator. No matcher carries state between invocations.

pub mod pattern;
pub mod person;
pub mod location;
