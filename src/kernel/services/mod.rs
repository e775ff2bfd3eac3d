//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the session (kernel-facing).
//! - `adapters`: OS specific implementations (filesystem, settings, keys).

pub mod adapters;
pub mod ports;
