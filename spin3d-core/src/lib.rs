//! spin3d Core Library - Shared rotation, projection and simulation logic
//!
//! This library provides the renderer-independent part of the demos: axis
//! rotations, perspective projection, the cube model, painter's-algorithm
//! face ordering and the per-tick input controller. Renderer adapters
//! implement [`Surface`] and drive a [`Demo`] from their frame loop.

pub mod color;
pub mod config;
pub mod demo;
pub mod depth;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod rand;
pub mod scene;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use color::{BackgroundFade, Rgb};
pub use config::Config;
pub use demo::{Demo, Direction, Keys, Tick, Variant};
pub use error::{Error, Result};
pub use geometry::{Face, Model};
pub use projection::{Camera, DepthMode};
pub use rand::Xorshift64;
pub use surface::Surface;
pub use transform::RotationState;
