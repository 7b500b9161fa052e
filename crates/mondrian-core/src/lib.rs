// ABOUTME: Shared types and configuration for mondrian.
// ABOUTME: Defines geometry, colors, and config file handling.

pub mod color;
pub mod config;
pub mod geometry;

pub use color::{Color, Palette};
pub use config::{BehaviorSettings, CanvasSettings, Config};
pub use geometry::Rect;
