//! News feed module
//!
//! Builds the hour-stable payload served to the city front end:
//! a sampled slice of the news pool, synthetic weather and the incident list.

pub mod envelope;
pub mod news;
pub mod pool;
pub mod seed;
pub mod time;
pub mod weather;

pub use envelope::build_envelope;
