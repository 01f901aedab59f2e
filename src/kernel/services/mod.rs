//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types the kernel depends on.
//! - `adapters`: concrete storage, sinks, loaders and paths.

pub mod adapters;
pub mod ports;
