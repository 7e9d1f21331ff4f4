use tracing::{debug, warn};

use crate::model::config::ChartConfig;
use crate::surface::{LinearGradient, StrokeStyle, Surface, TextAlign};
use crate::time::round_half_up;

/// Geometry of the last drawn chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    /// Value mapped to the top of the plot; never below 1.
    pub max_value: f64,
    pub step: f64,
    pub points: Vec<(f64, f64)>,
    pub grid: Vec<(f64, String)>,
}

/// Smoothed, filled line chart with labelled horizontal reference lines.
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Clears `surface` and draws `values` from scratch. Returns `None` when
    /// there is nothing to draw on.
    pub fn render<S: Surface + ?Sized>(&self, surface: Option<&mut S>, values: &[f64]) -> Option<ChartLayout> {
        let Some(surface) = surface else {
            warn!("chart render skipped: no drawing surface");
            return None;
        };

        let cfg = &self.config;
        let height = cfg.content_height;
        let width = surface.container_width().max(cfg.min_width);
        let values: Vec<f64> = values.iter().map(|v| sanitize(*v)).collect();
        let max_value = values.iter().copied().fold(1.0, f64::max);

        surface.resize(width, height + cfg.bottom_margin);
        surface.clear();

        let grid = self.draw_grid(surface, width, max_value);

        if values.is_empty() {
            debug!(width, "rendered empty chart");
            return Some(ChartLayout {
                width,
                height,
                max_value,
                step: width,
                points: Vec::new(),
                grid,
            });
        }

        let step = if values.len() > 1 {
            width / (values.len() - 1) as f64
        } else {
            width
        };
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64 * step, height - (v / max_value) * height))
            .collect();

        self.draw_curve(surface, &points, step, width);
        debug!(points = points.len(), width, max_value, "rendered chart");

        Some(ChartLayout {
            width,
            height,
            max_value,
            step,
            points,
            grid,
        })
    }

    fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S, width: f64, max_value: f64) -> Vec<(f64, String)> {
        let cfg = &self.config;
        let height = cfg.content_height;
        let intervals = cfg.grid_intervals.max(1);
        let grid_style = StrokeStyle {
            color: cfg.grid_color,
            width: 1.0,
        };

        let lines: Vec<(f64, String)> = (0..=intervals)
            .map(|i| {
                let y = height - (height / f64::from(intervals)) * f64::from(i);
                let value = round_half_up(max_value / f64::from(intervals) * f64::from(i));
                (y, format!("{}", value as u64))
            })
            .collect();

        for (y, _) in &lines {
            surface.begin_path();
            surface.move_to(0.0, *y);
            surface.line_to(width, *y);
            surface.stroke(&grid_style);
        }

        // Right edges line up just past the widest label.
        let label_x = lines
            .iter()
            .map(|(_, label)| surface.measure_text(label))
            .fold(0.0, f64::max)
            + cfg.label_padding;
        for (y, label) in &lines {
            surface.fill_text(label, label_x, *y, TextAlign::Right, cfg.label_color);
        }

        lines
    }

    fn draw_curve<S: Surface + ?Sized>(&self, surface: &mut S, points: &[(f64, f64)], step: f64, width: f64) {
        let cfg = &self.config;
        let height = cfg.content_height;
        let (x0, y0) = points[0];

        surface.begin_path();
        surface.move_to(x0, y0);
        if points.len() == 1 {
            surface.line_to(width, y0);
        }
        for pair in points.windows(2) {
            let (_, prev_y) = pair[0];
            let (x, y) = pair[1];
            surface.quadratic_curve_to(x - step / 2.0, prev_y, x, y);
        }
        surface.stroke(&StrokeStyle {
            color: cfg.line_color,
            width: cfg.line_width,
        });

        surface.line_to(width, height);
        surface.line_to(0.0, height);
        surface.close_path();
        surface.fill_gradient(&LinearGradient {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: height,
            from: cfg.fill_top,
            to: cfg.fill_bottom,
        });
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn renderer() -> ChartRenderer {
        ChartRenderer::new(ChartConfig::default())
    }

    fn assert_finite(surface: &RecordingSurface) {
        for (x, y) in surface.coordinates() {
            assert!(x.is_finite() && y.is_finite(), "non-finite coordinate ({}, {})", x, y);
        }
    }

    #[test]
    fn test_missing_surface_is_noop() {
        let layout = renderer().render::<RecordingSurface>(None, &[1.0, 2.0]);
        assert!(layout.is_none());
    }

    #[test]
    fn test_five_labelled_reference_lines() {
        let mut surface = RecordingSurface::new(600.0);
        let layout = renderer().render(Some(&mut surface), &[10.0, 40.0, 20.0, 80.0]).unwrap();

        assert_eq!(layout.grid.len(), 5);
        assert_eq!(surface.texts(), vec!["0", "20", "40", "60", "80"]);
        let grid_strokes = surface
            .strokes()
            .iter()
            .filter(|s| s.color == ChartConfig::default().grid_color)
            .count();
        assert_eq!(grid_strokes, 5);
        assert_eq!(layout.grid[0].0, 300.0);
        assert_eq!(layout.grid[4].0, 0.0);
    }

    #[test]
    fn test_surface_size_and_min_width() {
        let mut surface = RecordingSurface::new(120.0);
        let layout = renderer().render(Some(&mut surface), &[1.0, 2.0]).unwrap();
        assert_eq!(layout.width, 300.0);
        assert_eq!(surface.width(), 300.0);
        assert_eq!(surface.height(), 340.0);
    }

    #[test]
    fn test_curve_uses_quadratic_segments() {
        let mut surface = RecordingSurface::new(400.0);
        let layout = renderer().render(Some(&mut surface), &[0.0, 50.0, 100.0]).unwrap();

        assert_eq!(layout.step, 200.0);
        let curves: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::QuadraticCurveTo { cx, cy, x, y } => Some((*cx, *cy, *x, *y)),
                _ => None,
            })
            .collect();
        // Control point sits half a step back at the previous point's height.
        assert_eq!(curves, vec![(100.0, 300.0, 200.0, 150.0), (300.0, 150.0, 400.0, 0.0)]);
        assert_eq!(surface.fills(), 1);
    }

    #[test]
    fn test_single_point_draws_flat_line() {
        let mut surface = RecordingSurface::new(400.0);
        let layout = renderer().render(Some(&mut surface), &[5.0]).unwrap();

        assert_eq!(layout.step, 400.0);
        assert_eq!(layout.points, vec![(0.0, 0.0)]);
        assert!(surface.commands().contains(&DrawCommand::LineTo { x: 400.0, y: 0.0 }));
        assert_eq!(surface.fills(), 1);
        assert_finite(&surface);
    }

    #[test]
    fn test_all_zero_values_stay_on_baseline() {
        let mut surface = RecordingSurface::new(400.0);
        let layout = renderer().render(Some(&mut surface), &[0.0; 7]).unwrap();

        assert_eq!(layout.max_value, 1.0);
        assert!(layout.points.iter().all(|(_, y)| *y == 300.0));
        assert_finite(&surface);
    }

    #[test]
    fn test_empty_values_draw_grid_only() {
        let mut surface = RecordingSurface::new(400.0);
        let layout = renderer().render(Some(&mut surface), &[]).unwrap();
        assert!(layout.points.is_empty());
        assert_eq!(surface.fills(), 0);
        assert_eq!(surface.texts().len(), 5);
    }

    #[test]
    fn test_render_is_idempotent() {
        let values = [3.0, 9.0, 4.0, 12.0, 7.0];
        let mut surface = RecordingSurface::new(500.0);
        renderer().render(Some(&mut surface), &values);
        let first = surface.commands().to_vec();
        renderer().render(Some(&mut surface), &values);
        assert_eq!(surface.commands(), first.as_slice());
    }

    #[test]
    fn test_non_finite_values_are_flattened() {
        let mut surface = RecordingSurface::new(400.0);
        let layout = renderer().render(Some(&mut surface), &[f64::NAN, 4.0, f64::INFINITY, -2.0]).unwrap();
        assert_eq!(layout.max_value, 4.0);
        assert_finite(&surface);
    }
}
