//! Draw surfaces that consume planned commands.

use crate::command::DrawCommand;
use kurbo::Stroke;
use shapekit_core::selection::HandleKind;
use std::fmt::Write;

/// A surface that executes draw commands in the order given.
pub trait DrawSink {
    fn draw(&mut self, command: DrawCommand);
}

/// Recording sink.
impl DrawSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Serializes a frame as a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgSink {
    width: f64,
    height: f64,
    background: String,
    body: String,
}

impl SvgSink {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: "#ffffff".to_string(),
            body: String::new(),
        }
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Finish the document.
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    fn element(&mut self, element: std::fmt::Arguments<'_>) {
        // Writing to a String cannot fail.
        let _ = self.body.write_fmt(element);
        self.body.push('\n');
    }
}

impl DrawSink for SvgSink {
    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Clear => {
                self.body.clear();
                let (w, h, bg) = (self.width, self.height, escape(&self.background));
                self.element(format_args!("<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{bg}\"/>"));
            }
            DrawCommand::Line { line, color, stroke } => {
                let attrs = stroke_attrs(&color, &stroke);
                self.element(format_args!(
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{attrs}/>",
                    line.p0.x, line.p0.y, line.p1.x, line.p1.y
                ));
            }
            DrawCommand::Rect { rect, color, fill, stroke } => {
                let attrs = stroke_attrs(&color, &stroke);
                let fill = fill_attr(fill.as_deref());
                self.element(format_args!(
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{fill}{attrs}/>",
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height()
                ));
            }
            DrawCommand::Circle { circle, color, fill, stroke } => {
                let attrs = stroke_attrs(&color, &stroke);
                let fill = fill_attr(fill.as_deref());
                self.element(format_args!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{fill}{attrs}/>",
                    circle.center.x, circle.center.y, circle.radius
                ));
            }
            DrawCommand::Text { text, position, color } => {
                let (color, text) = (escape(&color), escape(&text));
                self.element(format_args!(
                    "<text x=\"{}\" y=\"{}\" fill=\"{color}\" font-family=\"sans-serif\" font-size=\"12\" text-anchor=\"middle\" dominant-baseline=\"middle\">{text}</text>",
                    position.x, position.y
                ));
            }
            DrawCommand::Handle { position, kind, size, color } => {
                let color = escape(&color);
                let half = size / 2.0;
                match kind {
                    // Round markers for line endpoints, squares for corners.
                    HandleKind::Start | HandleKind::End => self.element(format_args!(
                        "<circle cx=\"{}\" cy=\"{}\" r=\"{half}\" fill=\"#ffffff\" stroke=\"{color}\" stroke-width=\"1.5\"/>",
                        position.x, position.y
                    )),
                    _ => self.element(format_args!(
                        "<rect x=\"{}\" y=\"{}\" width=\"{size}\" height=\"{size}\" fill=\"#ffffff\" stroke=\"{color}\" stroke-width=\"1.5\"/>",
                        position.x - half,
                        position.y - half
                    )),
                }
            }
        }
    }
}

fn stroke_attrs(color: &str, stroke: &Stroke) -> String {
    let mut attrs = format!(" stroke=\"{}\" stroke-width=\"{}\"", escape(color), stroke.width);
    if !stroke.dash_pattern.is_empty() {
        let dashes: Vec<String> = stroke.dash_pattern.iter().map(f64::to_string).collect();
        let _ = write!(attrs, " stroke-dasharray=\"{}\"", dashes.join(" "));
    }
    attrs
}

fn fill_attr(fill: Option<&str>) -> String {
    format!(" fill=\"{}\"", escape(fill.unwrap_or("none")))
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{RenderContext, RenderPlanner};
    use kurbo::Point;
    use shapekit_core::shapes::{Circle, Line, Rectangle, Shape, ShapeStyle};

    #[test]
    fn test_svg_document_structure() {
        let shapes = vec![
            Shape::Rectangle(Rectangle::new("r", Point::new(10.0, 10.0), 50.0, 30.0)),
            Shape::Line(Line::new("l", Point::new(0.0, 0.0), Point::new(3.0, 4.0))),
        ];
        let mut sink = SvgSink::new(200.0, 100.0);
        RenderPlanner::new().render(&RenderContext::new(&shapes).with_annotations(true), &mut sink);
        let svg = sink.finish();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"100\""));
        assert!(svg.contains("<rect x=\"10\" y=\"10\" width=\"50\" height=\"30\" fill=\"none\" stroke=\"#000000\""));
        assert!(svg.contains("<line x1=\"0\" y1=\"0\" x2=\"3\" y2=\"4\""));
        assert!(svg.contains(">50px</text>"));
        assert!(svg.contains(">5px, 53°</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut sink = SvgSink::new(10.0, 10.0);
        sink.draw(DrawCommand::Text {
            text: "stale".to_string(),
            position: Point::ZERO,
            color: "#000".to_string(),
        });
        sink.draw(DrawCommand::Clear);
        assert!(!sink.finish().contains("stale"));
    }

    #[test]
    fn test_dashed_preview_and_handles() {
        let shapes = vec![Shape::Circle(
            Circle::new("c", Point::new(0.0, 0.0), 40.0, 40.0).with_style(ShapeStyle::from_host("red", "blue")),
        )];
        let preview = Shape::Line(Line::new("preview", Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
        let ctx = RenderContext::new(&shapes)
            .with_selection(Some("c"))
            .with_preview(Some(preview));
        let mut sink = SvgSink::new(100.0, 100.0);
        RenderPlanner::new().render(&ctx, &mut sink);
        let svg = sink.finish();

        assert!(svg.contains("<circle cx=\"20\" cy=\"20\" r=\"20\" fill=\"blue\""));
        assert!(svg.contains("stroke-dasharray=\"5 5\""));
        assert_eq!(svg.matches("fill=\"#ffffff\" stroke=\"#3b82f6\"").count(), 4);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut sink = SvgSink::new(10.0, 10.0);
        sink.draw(DrawCommand::Text {
            text: "<a & \"b\">".to_string(),
            position: Point::ZERO,
            color: "#000".to_string(),
        });
        assert!(sink.finish().contains("&lt;a &amp; &quot;b&quot;&gt;"));
    }
}
