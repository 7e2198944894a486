//! Library exports for embedding the inkboard sketch surface.
//!
//! Exposes the drawing data model, the gesture state machine, and the
//! supporting configuration and export modules so that embedding hosts
//! (and the bundled replay CLI) share the same pipeline.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;

pub use config::Config;
pub use input::SketchState;
