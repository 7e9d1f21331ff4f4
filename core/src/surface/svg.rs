use std::mem;

use svg::node::element::path::Data;
use svg::node::element::{Definitions, Group, LinearGradient as SvgGradient, Path, Rectangle, Stop, Text};
use svg::{Document, Node};

use crate::model::config::Rgba;
use crate::surface::{LinearGradient, StrokeStyle, Surface, TextAlign};

const FONT_SIZE: f32 = 12.0;
// Average advance of a sans-serif glyph relative to the font size.
const GLYPH_WIDTH: f64 = 0.6;

/// Collects draw calls into an SVG document.
pub struct SvgSurface {
    container_width: f64,
    width: f64,
    height: f64,
    background: Option<Rgba>,
    path: Data,
    defs: Definitions,
    body: Group,
    gradient_count: usize,
}

impl SvgSurface {
    pub fn new(container_width: f64) -> Self {
        Self {
            container_width,
            width: container_width,
            height: 0.0,
            background: None,
            path: Data::new(),
            defs: Definitions::new(),
            body: Group::new(),
            gradient_count: 0,
        }
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    fn document(&self) -> Document {
        let (w, h) = (self.width as f32, self.height as f32);
        let mut document = Document::new()
            .set("width", w)
            .set("height", h)
            .set("viewBox", (0.0_f32, 0.0_f32, w, h))
            .add(self.defs.clone());
        if let Some(bg) = self.background {
            document = document.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", bg.to_css()),
            );
        }
        document.add(self.body.clone())
    }

    pub fn to_svg(&self) -> String {
        self.document().to_string()
    }

    fn push(&mut self, node: impl Into<Box<dyn Node>>) {
        let body = mem::replace(&mut self.body, Group::new());
        self.body = body.add(node);
    }

    fn extend_path(&mut self, f: impl FnOnce(Data) -> Data) {
        let data = mem::replace(&mut self.path, Data::new());
        self.path = f(data);
    }
}

impl Surface for SvgSurface {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.path = Data::new();
        self.defs = Definitions::new();
        self.body = Group::new();
        self.gradient_count = 0;
    }

    fn begin_path(&mut self) {
        self.path = Data::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.extend_path(|d| d.move_to((x as f32, y as f32)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.extend_path(|d| d.line_to((x as f32, y as f32)));
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.extend_path(|d| d.quadratic_curve_to((cx as f32, cy as f32, x as f32, y as f32)));
    }

    fn close_path(&mut self) {
        self.extend_path(|d| d.close());
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        let path = Path::new()
            .set("d", self.path.clone())
            .set("fill", "none")
            .set("stroke", style.color.to_css())
            .set("stroke-width", style.width as f32);
        self.push(path);
    }

    fn fill_gradient(&mut self, gradient: &LinearGradient) {
        let id = format!("fill{}", self.gradient_count);
        self.gradient_count += 1;

        let def = SvgGradient::new()
            .set("id", id.clone())
            .set("gradientUnits", "userSpaceOnUse")
            .set("x1", gradient.x0 as f32)
            .set("y1", gradient.y0 as f32)
            .set("x2", gradient.x1 as f32)
            .set("y2", gradient.y1 as f32)
            .add(Stop::new().set("offset", 0).set("stop-color", gradient.from.to_css()))
            .add(Stop::new().set("offset", 1).set("stop-color", gradient.to.to_css()));
        let defs = mem::replace(&mut self.defs, Definitions::new());
        self.defs = defs.add(def);

        let path = Path::new()
            .set("d", self.path.clone())
            .set("fill", format!("url(#{})", id))
            .set("stroke", "none");
        self.push(path);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, color: Rgba) {
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Right => "end",
        };
        let label = Text::new(text)
            .set("x", x as f32)
            .set("y", y as f32)
            .set("font-family", "sans-serif")
            .set("font-size", FONT_SIZE)
            .set("fill", color.to_css())
            .set("text-anchor", anchor)
            .set("dominant-baseline", "middle");
        self.push(label);
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * f64::from(FONT_SIZE) * GLYPH_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::ChartConfig;
    use crate::service::chart_renderer::ChartRenderer;

    #[test]
    fn test_rendered_chart_is_a_document() {
        let renderer = ChartRenderer::new(ChartConfig::default());
        let mut svg = SvgSurface::new(640.0).with_background(Rgba::new(17, 17, 17, 1.0));
        renderer.render(Some(&mut svg), &[3.0, 9.0, 4.0, 12.0]);

        let doc = svg.to_svg();
        assert!(doc.starts_with("<svg"));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert!(doc.contains("<linearGradient"));
        assert!(doc.contains("url(#fill0)"));
        // 5 grid lines, the curve and the filled area
        assert_eq!(doc.matches("<path").count(), 7);
        assert_eq!(doc.matches("<text").count(), 5);
        assert!(doc.contains("rgba(17,17,17,1)"));
    }

    #[test]
    fn test_clear_drops_previous_drawing() {
        let renderer = ChartRenderer::new(ChartConfig::default());
        let mut svg = SvgSurface::new(400.0);
        renderer.render(Some(&mut svg), &[1.0, 2.0]);
        renderer.render(Some(&mut svg), &[]);

        let doc = svg.to_svg();
        assert_eq!(doc.matches("<path").count(), 5);
        assert!(!doc.contains("<linearGradient"));
        assert!(!doc.contains("<rect"));
    }

    #[test]
    fn test_label_width_scales_with_length() {
        let svg = SvgSurface::new(400.0);
        assert_eq!(svg.measure_text("120"), 3.0 * 12.0 * 0.6);
    }
}
