use ratatui::style::Color;
use rewards_core::surface::{LinearGradient, StrokeStyle, Surface, TextAlign};
use rewards_core::Rgba;
use unicode_width::UnicodeWidthStr;

// Chart units per terminal column.
pub const CELL_WIDTH: f64 = 8.0;
const CURVE_STEPS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Color,
}

/// Flattens chart paths into line segments a ratatui canvas can plot.
/// Coordinates stay top-down; the widget flips them.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    container_width: f64,
    width: f64,
    height: f64,
    subpaths: Vec<Vec<(f64, f64)>>,
    pub fills: Vec<Segment>,
    pub strokes: Vec<Segment>,
    pub labels: Vec<Label>,
}

impl TerminalSurface {
    pub fn new(columns: u16) -> Self {
        Self {
            container_width: f64::from(columns) * CELL_WIDTH,
            ..Self::default()
        }
    }

    pub fn columns(&self) -> u16 {
        (self.container_width / CELL_WIDTH) as u16
    }

    pub fn set_columns(&mut self, columns: u16) {
        self.container_width = f64::from(columns) * CELL_WIDTH;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    fn current(&mut self) -> &mut Vec<(f64, f64)> {
        if self.subpaths.is_empty() {
            self.subpaths.push(Vec::new());
        }
        let last = self.subpaths.len() - 1;
        &mut self.subpaths[last]
    }

    fn last_point(&self) -> Option<(f64, f64)> {
        self.subpaths.last().and_then(|p| p.last().copied())
    }
}

/// Blends onto a black terminal background.
pub fn to_color(c: Rgba) -> Color {
    let a = c.a.clamp(0.0, 1.0);
    Color::Rgb(
        (f64::from(c.r) * a).round() as u8,
        (f64::from(c.g) * a).round() as u8,
        (f64::from(c.b) * a).round() as u8,
    )
}

impl Surface for TerminalSurface {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.subpaths.clear();
        self.fills.clear();
        self.strokes.clear();
        self.labels.clear();
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.subpaths.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.current().push((x, y));
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        let Some((x0, y0)) = self.last_point() else {
            self.move_to(x, y);
            return;
        };
        let path = self.current();
        for step in 1..=CURVE_STEPS {
            let t = step as f64 / CURVE_STEPS as f64;
            let u = 1.0 - t;
            path.push((
                u * u * x0 + 2.0 * u * t * cx + t * t * x,
                u * u * y0 + 2.0 * u * t * cy + t * t * y,
            ));
        }
    }

    fn close_path(&mut self) {
        let first = self.subpaths.last().and_then(|p| p.first().copied());
        if let Some(first) = first {
            self.current().push(first);
        }
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        let color = to_color(style.color);
        for path in &self.subpaths {
            for pair in path.windows(2) {
                self.strokes.push(Segment {
                    x1: pair[0].0,
                    y1: pair[0].1,
                    x2: pair[1].0,
                    y2: pair[1].1,
                    color,
                });
            }
        }
    }

    // Terminals cannot shade, so the area is hatched with vertical lines in
    // the gradient's top colour, half a column apart.
    fn fill_gradient(&mut self, gradient: &LinearGradient) {
        let color = to_color(gradient.from);
        let baseline = gradient.y1;
        for path in &self.subpaths {
            for pair in path.windows(2) {
                let ((xa, ya), (xb, yb)) = (pair[0], pair[1]);
                if ya >= baseline && yb >= baseline {
                    continue;
                }
                let span = (xb - xa).abs();
                let steps = ((span / (CELL_WIDTH / 2.0)).ceil() as usize).max(1);
                for s in 0..=steps {
                    let t = s as f64 / steps as f64;
                    let x = xa + (xb - xa) * t;
                    let y = ya + (yb - ya) * t;
                    if y < baseline {
                        self.fills.push(Segment { x1: x, y1: y, x2: x, y2: baseline, color });
                    }
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, color: Rgba) {
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Right => x - self.measure_text(text),
        };
        self.labels.push(Label {
            x: left.max(0.0),
            y,
            text: text.to_string(),
            color: to_color(color),
        });
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.width() as f64 * CELL_WIDTH
    }
}
