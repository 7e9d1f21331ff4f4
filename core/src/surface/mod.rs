//! 2D drawing targets for the chart renderer.
//!
//! A `Surface` follows canvas path semantics: `stroke` and `fill_gradient`
//! paint the current path without consuming it, and only `begin_path`
//! starts a new one.

pub mod recording;
pub mod svg;

use serde::{Deserialize, Serialize};

use crate::model::config::Rgba;

pub use recording::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f64,
}

/// Linear gradient from `from` at `(x0, y0)` to `to` at `(x1, y1)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub from: Rgba,
    pub to: Rgba,
}

pub trait Surface {
    /// Width the host currently offers, before any minimum is applied.
    fn container_width(&self) -> f64;
    fn resize(&mut self, width: f64, height: f64);
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self, style: &StrokeStyle);
    fn fill_gradient(&mut self, gradient: &LinearGradient);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, color: Rgba);
    fn measure_text(&self, text: &str) -> f64;
}
