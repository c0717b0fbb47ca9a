//! Geometric predicates used for hit-testing.

use crate::shapes::{Circle, Line, Rectangle, Shape};
use kurbo::Point;

/// Maximum distance (exclusive) from a line at which a point still hits it.
pub const LINE_HIT_TOLERANCE: f64 = 5.0;

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

/// Distance from a point to the segment `seg_start -> seg_end`.
///
/// The projection parameter starts at `-1`, so a zero-length segment measures
/// against its start point.
pub fn point_to_segment_distance(point: Point, seg_start: Point, seg_end: Point) -> f64 {
    let a = point.x - seg_start.x;
    let b = point.y - seg_start.y;
    let c = seg_end.x - seg_start.x;
    let d = seg_end.y - seg_start.y;

    let dot = a * c + b * d;
    let len_sq = c * c + d * d;
    let mut param = -1.0;
    if len_sq != 0.0 {
        param = dot / len_sq;
    }

    let nearest = if param < 0.0 {
        seg_start
    } else if param > 1.0 {
        seg_end
    } else {
        Point::new(seg_start.x + param * c, seg_start.y + param * d)
    };

    distance(point, nearest)
}

/// Check whether a point hits a shape.
pub fn point_in_shape(point: Point, shape: &Shape) -> bool {
    point_in_shape_with_tolerance(point, shape, LINE_HIT_TOLERANCE)
}

/// Like [`point_in_shape`], with an explicit line tolerance.
pub fn point_in_shape_with_tolerance(point: Point, shape: &Shape, line_tolerance: f64) -> bool {
    match shape {
        Shape::Rectangle(rect) => point_in_rectangle(point, rect),
        Shape::Circle(circle) => point_in_circle(point, circle),
        Shape::Line(line) => point_on_line(point, line, line_tolerance),
    }
}

/// Edges count as inside.
fn point_in_rectangle(point: Point, rect: &Rectangle) -> bool {
    point.x >= rect.position.x
        && point.x <= rect.position.x + rect.width
        && point.y >= rect.position.y
        && point.y <= rect.position.y + rect.height
}

fn point_in_circle(point: Point, circle: &Circle) -> bool {
    distance(point, circle.center()) <= circle.radius()
}

fn point_on_line(point: Point, line: &Line, tolerance: f64) -> bool {
    point_to_segment_distance(point, line.start, line.end) < tolerance
}
