use crate::model::config::Rgba;
use crate::surface::{LinearGradient, StrokeStyle, Surface, TextAlign};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadraticCurveTo { cx: f64, cy: f64, x: f64, y: f64 },
    ClosePath,
    Stroke(StrokeStyle),
    FillGradient(LinearGradient),
    FillText { text: String, x: f64, y: f64, align: TextAlign, color: Rgba },
}

/// Keeps every draw call since the last `clear`.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    container_width: f64,
    char_width: f64,
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(container_width: f64) -> Self {
        Self {
            container_width,
            char_width: 7.0,
            width: 0.0,
            height: 0.0,
            commands: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn strokes(&self) -> Vec<&StrokeStyle> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke(style) => Some(style),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillGradient(_)))
            .count()
    }

    /// Every coordinate passed to a path or text command.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        let mut out = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => out.push((*x, *y)),
                DrawCommand::QuadraticCurveTo { cx, cy, x, y } => {
                    out.push((*cx, *cy));
                    out.push((*x, *y));
                }
                DrawCommand::FillText { x, y, .. } => out.push((*x, *y)),
                _ => {}
            }
        }
        out
    }
}

impl Surface for RecordingSurface {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.commands.push(DrawCommand::QuadraticCurveTo { cx, cy, x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke(*style));
    }

    fn fill_gradient(&mut self, gradient: &LinearGradient) {
        self.commands.push(DrawCommand::FillGradient(*gradient));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, color: Rgba) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            align,
            color,
        });
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}
