//! Library exports for the SDN figure renderer.
//!
//! Exposes the drawing primitives, the two fixed diagram builders and the PNG
//! export pipeline so that the binaries and integration tests share one
//! implementation.

pub mod config;
pub mod diagrams;
pub mod draw;
pub mod export;
pub mod util;

pub use config::Config;
pub use diagrams::Figure;
