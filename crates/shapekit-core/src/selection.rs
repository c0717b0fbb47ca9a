//! Hit-testing and resize handle system.

use crate::geometry::point_in_shape_with_tolerance;
use crate::shapes::{Shape, clamp_dimensions};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Half-width of the square around a handle that counts as a hit.
pub const HANDLE_TOLERANCE: f64 = 10.0;

/// Type of resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleKind {
    /// Line start point.
    Start,
    /// Line end point.
    End,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HandleKind {
    /// Whether this handle belongs to a line.
    pub fn is_endpoint(self) -> bool {
        matches!(self, HandleKind::Start | HandleKind::End)
    }
}

/// A resize handle with its position and type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in canvas coordinates.
    pub position: Point,
    /// Handle type.
    pub kind: HandleKind,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check if a point falls strictly inside the square of half-width
    /// `tolerance` centered on this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        (point.x - self.position.x).abs() < tolerance
            && (point.y - self.position.y).abs() < tolerance
    }
}

/// Get the resize handles for a shape, in hit-test order.
pub fn get_handles(shape: &Shape) -> Vec<Handle> {
    match shape {
        Shape::Line(line) => vec![
            Handle::new(line.start, HandleKind::Start),
            Handle::new(line.end, HandleKind::End),
        ],
        Shape::Rectangle(_) | Shape::Circle(_) => corner_handles(shape.bounds()),
    }
}

/// Generate corner handles for a bounding rectangle.
fn corner_handles(bounds: Rect) -> Vec<Handle> {
    vec![
        Handle::new(Point::new(bounds.x0, bounds.y0), HandleKind::TopLeft),
        Handle::new(Point::new(bounds.x1, bounds.y0), HandleKind::TopRight),
        Handle::new(Point::new(bounds.x0, bounds.y1), HandleKind::BottomLeft),
        Handle::new(Point::new(bounds.x1, bounds.y1), HandleKind::BottomRight),
    ]
}

/// Find the first shape, in collection order, that contains `point`.
///
/// Collection order wins over drawing order: an earlier shape shadows any
/// later shape that overlaps it.
pub fn find_shape_at<'a>(point: Point, shapes: &'a [Shape], line_tolerance: f64) -> Option<&'a Shape> {
    shapes
        .iter()
        .find(|shape| point_in_shape_with_tolerance(point, shape, line_tolerance))
}

/// Find which handle (if any) of `shape` is hit at `point`.
pub fn find_handle_at(point: Point, shape: &Shape, tolerance: f64) -> Option<HandleKind> {
    get_handles(shape)
        .into_iter()
        .find(|handle| handle.hit_test(point, tolerance))
        .map(|handle| handle.kind)
}

/// Apply a handle drag to a shape, returning the new value for the same id.
///
/// `pointer` is the absolute pointer position. Corner handles rewrite the
/// bounding box and clamp each dimension to `min_dim`; endpoint handles
/// overwrite the endpoint and re-derive the line's box. A handle that does
/// not belong to the shape leaves it unchanged.
pub fn apply_resize(shape: &Shape, handle: HandleKind, pointer: Point, min_dim: f64) -> Shape {
    match shape {
        Shape::Line(line) => {
            let mut line = line.clone();
            match handle {
                HandleKind::Start => line.set_start(pointer),
                HandleKind::End => line.set_end(pointer),
                _ => {}
            }
            Shape::Line(line)
        }
        Shape::Rectangle(rect) => {
            if handle.is_endpoint() {
                return shape.clone();
            }
            let mut rect = rect.clone();
            let (position, width, height) =
                resize_box(rect.position, rect.width, rect.height, handle, pointer);
            rect.position = position;
            rect.width = width;
            rect.height = height;
            clamp_dimensions(&Shape::Rectangle(rect), min_dim)
        }
        Shape::Circle(circle) => {
            if handle.is_endpoint() {
                return shape.clone();
            }
            let mut circle = circle.clone();
            let (position, width, height) =
                resize_box(circle.position, circle.width, circle.height, handle, pointer);
            circle.position = position;
            circle.width = width;
            circle.height = height;
            clamp_dimensions(&Shape::Circle(circle), min_dim)
        }
    }
}

/// Per-corner box deltas. The opposite corner stays fixed.
fn resize_box(position: Point, width: f64, height: f64, handle: HandleKind, pointer: Point) -> (Point, f64, f64) {
    let (x, y) = (position.x, position.y);
    let (px, py) = (pointer.x, pointer.y);
    match handle {
        HandleKind::TopLeft => (Point::new(px, py), width + (x - px), height + (y - py)),
        HandleKind::TopRight => (Point::new(x, py), px - x, height + (y - py)),
        HandleKind::BottomLeft => (Point::new(px, y), width + (x - px), py - y),
        HandleKind::BottomRight => (Point::new(x, y), px - x, py - y),
        HandleKind::Start | HandleKind::End => (position, width, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LINE_HIT_TOLERANCE;
    use crate::shapes::{Circle, Line, MIN_DIM, Rectangle};

    fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> Shape {
        Shape::Rectangle(Rectangle::new(id, Point::new(x, y), w, h))
    }

    #[test]
    fn test_line_handles() {
        let line = Line::new("l", Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let handles = get_handles(&Shape::Line(line));

        assert_eq!(handles.len(), 2);
        assert_eq!(handles[0].kind, HandleKind::Start);
        assert_eq!(handles[1].kind, HandleKind::End);
    }

    #[test]
    fn test_rectangle_handles() {
        let handles = get_handles(&rect("r", 0.0, 0.0, 100.0, 50.0));

        assert_eq!(handles.len(), 4);
        assert_eq!(handles[0], Handle::new(Point::new(0.0, 0.0), HandleKind::TopLeft));
        assert_eq!(handles[1], Handle::new(Point::new(100.0, 0.0), HandleKind::TopRight));
        assert_eq!(handles[2], Handle::new(Point::new(0.0, 50.0), HandleKind::BottomLeft));
        assert_eq!(handles[3], Handle::new(Point::new(100.0, 50.0), HandleKind::BottomRight));
    }

    #[test]
    fn test_handle_hit_test_is_square() {
        let handle = Handle::new(Point::new(50.0, 50.0), HandleKind::TopLeft);

        assert!(handle.hit_test(Point::new(50.0, 50.0), 10.0));
        // Corner of the square is outside a circle of the same radius.
        assert!(handle.hit_test(Point::new(59.0, 59.0), 10.0));
        assert!(!handle.hit_test(Point::new(60.0, 50.0), 10.0));
    }

    #[test]
    fn test_find_handle_at_line_endpoints() {
        let line = Shape::Line(Line::new("l", Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        assert_eq!(find_handle_at(Point::new(0.0, 0.0), &line, HANDLE_TOLERANCE), Some(HandleKind::Start));
        assert_eq!(find_handle_at(Point::new(10.0, 0.0), &line, HANDLE_TOLERANCE), Some(HandleKind::End));
        // Both squares overlap here; enumeration order decides.
        assert_eq!(find_handle_at(Point::new(5.0, 0.0), &line, HANDLE_TOLERANCE), Some(HandleKind::Start));
        assert_eq!(find_handle_at(Point::new(50.0, 0.0), &line, HANDLE_TOLERANCE), None);
    }

    #[test]
    fn test_find_shape_at_is_first_match() {
        let shapes = vec![
            rect("a", 0.0, 0.0, 100.0, 100.0),
            rect("b", 50.0, 50.0, 100.0, 100.0),
            Shape::Circle(Circle::new("c", Point::new(60.0, 60.0), 20.0, 20.0)),
        ];

        let hit = find_shape_at(Point::new(75.0, 75.0), &shapes, LINE_HIT_TOLERANCE);
        assert_eq!(hit.map(Shape::id), Some("a"));

        let hit = find_shape_at(Point::new(120.0, 120.0), &shapes, LINE_HIT_TOLERANCE);
        assert_eq!(hit.map(Shape::id), Some("b"));

        assert!(find_shape_at(Point::new(500.0, 500.0), &shapes, LINE_HIT_TOLERANCE).is_none());
        assert!(find_shape_at(Point::new(0.0, 0.0), &[], LINE_HIT_TOLERANCE).is_none());
    }

    #[test]
    fn test_find_shape_at_returns_earliest_of_all_hits() {
        let shapes: Vec<Shape> = (0..6)
            .map(|i| rect(&i.to_string(), i as f64 * 10.0, 0.0, 100.0, 100.0))
            .collect();
        for x in [5.0, 25.0, 55.0, 95.0, 145.0] {
            let point = Point::new(x, 50.0);
            let expected = shapes
                .iter()
                .position(|s| crate::geometry::point_in_shape(point, s))
                .map(|i| shapes[i].id());
            let hit = find_shape_at(point, &shapes, LINE_HIT_TOLERANCE).map(Shape::id);
            assert_eq!(hit, expected);
        }
    }

    #[test]
    fn test_bottom_right_resize_and_clamp() {
        let shape = rect("r", 0.0, 0.0, 100.0, 100.0);

        let resized = apply_resize(&shape, HandleKind::BottomRight, Point::new(40.0, 40.0), MIN_DIM);
        assert_eq!(resized, rect("r", 0.0, 0.0, 40.0, 40.0));

        let clamped = apply_resize(&shape, HandleKind::BottomRight, Point::new(-5.0, -5.0), MIN_DIM);
        assert_eq!(clamped, rect("r", 0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_corner_resize_table() {
        let shape = rect("r", 10.0, 20.0, 100.0, 50.0);
        let p = Point::new(0.0, 0.0);

        assert_eq!(
            apply_resize(&shape, HandleKind::TopLeft, p, MIN_DIM),
            rect("r", 0.0, 0.0, 110.0, 70.0)
        );
        assert_eq!(
            apply_resize(&shape, HandleKind::TopRight, Point::new(60.0, 10.0), MIN_DIM),
            rect("r", 10.0, 10.0, 50.0, 60.0)
        );
        assert_eq!(
            apply_resize(&shape, HandleKind::BottomLeft, Point::new(5.0, 100.0), MIN_DIM),
            rect("r", 5.0, 20.0, 105.0, 80.0)
        );
    }

    #[test]
    fn test_resize_never_goes_below_min_dim() {
        let shapes = [
            rect("r", 0.0, 0.0, 50.0, 50.0),
            rect("thin", 20.0, 20.0, 12.0, 80.0),
            Shape::Circle(Circle::new("c", Point::new(0.0, 0.0), 50.0, 50.0)),
        ];
        let handles = [
            HandleKind::TopLeft,
            HandleKind::TopRight,
            HandleKind::BottomLeft,
            HandleKind::BottomRight,
        ];
        let pointers = [
            Point::new(-80.0, 200.0),
            Point::new(49.0, 49.0),
            Point::new(300.0, -300.0),
            Point::new(0.0, 0.0),
            Point::new(25.0, 100.0),
        ];
        for shape in &shapes {
            for handle in handles {
                for pointer in pointers {
                    let bounds = apply_resize(shape, handle, pointer, MIN_DIM).bounds();
                    assert!(bounds.width() >= MIN_DIM, "{} {:?} {:?}", shape.id(), handle, pointer);
                    assert!(bounds.height() >= MIN_DIM, "{} {:?} {:?}", shape.id(), handle, pointer);
                }
            }
        }
    }

    #[test]
    fn test_line_endpoint_resize() {
        let shape = Shape::Line(Line::new("l", Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
        let Shape::Line(line) = apply_resize(&shape, HandleKind::End, Point::new(-20.0, 40.0), MIN_DIM) else {
            panic!("Expected Line shape");
        };
        assert_eq!(line.end, Point::new(-20.0, 40.0));
        assert_eq!(line.start, Point::new(0.0, 0.0));
        assert_eq!(line.position, Point::new(-20.0, 0.0));
        assert!((line.width - 20.0).abs() < f64::EPSILON);
        assert!((line.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mismatched_handle_is_inert() {
        let shape = rect("r", 0.0, 0.0, 30.0, 30.0);
        assert_eq!(apply_resize(&shape, HandleKind::Start, Point::new(90.0, 90.0), MIN_DIM), shape);
    }
}
