//! Dimension labels for shapes.

use crate::shapes::Shape;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Distance between a label anchor and the edge it describes.
pub const ANNOTATION_OFFSET: f64 = 10.0;

/// What a label measures. Values are whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationKind {
    Width(i64),
    Height(i64),
    Radius(i64),
    /// Segment length and direction in degrees, in `(-180, 180]`.
    Length { length: i64, angle: i64 },
}

/// A dimension label and where to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub anchor: Point,
}

impl Annotation {
    /// Label text as shown on the canvas.
    pub fn text(&self) -> String {
        match self.kind {
            AnnotationKind::Width(px) | AnnotationKind::Height(px) => format!("{px}px"),
            AnnotationKind::Radius(px) => format!("r: {px}px"),
            AnnotationKind::Length { length, angle } => format!("{length}px, {angle}°"),
        }
    }
}

/// Compute the labels for a shape.
///
/// Rectangles get a width label centered above the top edge and a height
/// label left of the left edge. Circles get a radius label above the circle.
/// Lines get one label next to the midpoint.
pub fn annotate(shape: &Shape) -> Vec<Annotation> {
    match shape {
        Shape::Rectangle(rect) => vec![
            Annotation {
                kind: AnnotationKind::Width(round_px(rect.width)),
                anchor: Point::new(rect.position.x + rect.width / 2.0, rect.position.y - ANNOTATION_OFFSET),
            },
            Annotation {
                kind: AnnotationKind::Height(round_px(rect.height)),
                anchor: Point::new(rect.position.x - ANNOTATION_OFFSET, rect.position.y + rect.height / 2.0),
            },
        ],
        Shape::Circle(circle) => {
            let center = circle.center();
            let radius = circle.radius();
            vec![Annotation {
                kind: AnnotationKind::Radius(round_px(radius)),
                anchor: Point::new(center.x, center.y - radius - ANNOTATION_OFFSET),
            }]
        }
        Shape::Line(line) => {
            let mid = line.midpoint();
            vec![Annotation {
                kind: AnnotationKind::Length {
                    length: round_px(line.length()),
                    angle: angle_degrees(line.start, line.end),
                },
                anchor: Point::new(mid.x + ANNOTATION_OFFSET, mid.y - ANNOTATION_OFFSET),
            }]
        }
    }
}

/// Direction of `start -> end` in whole degrees, in `(-180, 180]`.
pub fn angle_degrees(start: Point, end: Point) -> i64 {
    let angle = (end.y - start.y).atan2(end.x - start.x).to_degrees().round() as i64;
    if angle == -180 { 180 } else { angle }
}

fn round_px(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Line, Rectangle};

    #[test]
    fn test_line_length_and_angle() {
        let line = Shape::Line(Line::new("l", Point::new(0.0, 0.0), Point::new(3.0, 4.0)));
        let labels = annotate(&line);

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].kind, AnnotationKind::Length { length: 5, angle: 53 });
        assert_eq!(labels[0].text(), "5px, 53°");
        assert_eq!(labels[0].anchor, Point::new(11.5, -8.0));
    }

    #[test]
    fn test_angle_range() {
        let origin = Point::ZERO;
        assert_eq!(angle_degrees(origin, Point::new(-10.0, 0.0)), 180);
        assert_eq!(angle_degrees(origin, Point::new(-10.0, -0.0)), 180);
        assert_eq!(angle_degrees(origin, Point::new(-100.0, -0.5)), 180);
        assert_eq!(angle_degrees(origin, Point::new(0.0, -10.0)), -90);
        assert_eq!(angle_degrees(origin, Point::new(10.0, 0.0)), 0);
        // Zero-length lines point along +x.
        assert_eq!(angle_degrees(origin, origin), 0);
    }

    #[test]
    fn test_rectangle_labels() {
        let rect = Shape::Rectangle(Rectangle::new("r", Point::new(10.0, 20.0), 50.0, 30.0));
        let labels = annotate(&rect);

        assert_eq!(labels[0].kind, AnnotationKind::Width(50));
        assert_eq!(labels[0].anchor, Point::new(35.0, 10.0));
        assert_eq!(labels[1].kind, AnnotationKind::Height(30));
        assert_eq!(labels[1].anchor, Point::new(0.0, 35.0));
    }

    #[test]
    fn test_labels_round_to_whole_pixels() {
        let rect = Shape::Rectangle(Rectangle::new("r", Point::ZERO, 50.4, 30.6));
        let texts: Vec<String> = annotate(&rect).iter().map(Annotation::text).collect();
        assert_eq!(texts, vec!["50px", "31px"]);
    }

    #[test]
    fn test_circle_label_above_circle() {
        // Radius follows the larger dimension.
        let circle = Shape::Circle(Circle::new("c", Point::new(0.0, 0.0), 50.0, 20.0));
        let labels = annotate(&circle);

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text(), "r: 25px");
        assert_eq!(labels[0].anchor, Point::new(25.0, 10.0 - 25.0 - ANNOTATION_OFFSET));
    }
}
