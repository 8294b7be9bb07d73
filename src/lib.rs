//! Interactive construction and inspection of simple polygons.
//!
//! The crate is the model behind a drawing canvas: it keeps a registry of
//! polygons, turns raw mouse and touch samples into vertex hover, drag and
//! creation, and produces per-frame draw commands plus an interior-angle and
//! convexity report for the active polygon. Rendering and UI widgets stay
//! with the caller, which feeds pointer events in and paints the [`Frame`]s
//! that come out.

pub mod config;
pub mod editor;
pub mod error;
pub mod interaction;
pub mod math;
pub mod model;
pub mod names;
pub mod observer;
pub mod render;
pub mod schedule;
pub mod snapshot;

pub use config::{CanvasSize, EditorConfig};
pub use editor::Editor;
pub use error::{PolyeditError, Result};
pub use math::Vector;
pub use render::{DiagnosticsReport, Frame};
