//! Procedural scenery for SKYRAID.
//!
//! Generates the backdrop city as plain data; the host renderer turns each
//! building into a box mesh.

pub mod city;

pub use city::{generate_city, Building, CityConfig};
