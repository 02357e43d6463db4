use usvg::tiny_skia_path::{self, PathSegment};

use crate::types::{Point2D, Viewport, XForm};

/// Straight pieces each curve is split into before measuring
const CURVE_STEPS: usize = 32;

/// Move a point into the viewport-centered frame with Y pointing up
pub fn transform_point(point: Point2D, viewport: Viewport) -> Point2D {
    Point2D::new(
        point.x - viewport.width / 2.0,
        viewport.height / 2.0 - point.y,
    )
}

/// Evaluate a quadratic Bezier curve at parameter t
fn quad_point(t: f64, p0: Point2D, c: Point2D, p1: Point2D) -> Point2D {
    let mt = 1.0 - t;
    Point2D::new(
        mt * mt * p0.x + 2.0 * mt * t * c.x + t * t * p1.x,
        mt * mt * p0.y + 2.0 * mt * t * c.y + t * t * p1.y,
    )
}

/// Evaluate a cubic Bezier curve at parameter t
fn cubic_point(t: f64, p0: Point2D, c0: Point2D, c1: Point2D, p1: Point2D) -> Point2D {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;
    let t2 = t * t;
    let t3 = t2 * t;

    Point2D::new(
        mt3 * p0.x + 3.0 * mt2 * t * c0.x + 3.0 * mt * t2 * c1.x + t3 * p1.x,
        mt3 * p0.y + 3.0 * mt2 * t * c0.y + 3.0 * mt * t2 * c1.y + t3 * p1.y,
    )
}

fn pt(p: tiny_skia_path::Point) -> Point2D {
    Point2D::new(p.x as f64, p.y as f64)
}

/// Flatten path data into polylines, one per subpath, mapped through `xform`.
pub fn flatten(data: &tiny_skia_path::Path, xform: &XForm) -> Vec<Vec<Point2D>> {
    let mut subpaths: Vec<Vec<Point2D>> = Vec::new();
    let mut current: Vec<Point2D> = Vec::new();
    let mut start = Point2D::default();
    let mut last = Point2D::default();

    for seg in data.segments() {
        match seg {
            PathSegment::MoveTo(p) => {
                if !current.is_empty() {
                    subpaths.push(std::mem::take(&mut current));
                }
                start = pt(p);
                last = start;
                current.push(start);
            }
            PathSegment::LineTo(p) => {
                last = pt(p);
                current.push(last);
            }
            PathSegment::QuadTo(c, p) => {
                let (c, end) = (pt(c), pt(p));
                for i in 1..=CURVE_STEPS {
                    let t = i as f64 / CURVE_STEPS as f64;
                    current.push(quad_point(t, last, c, end));
                }
                last = end;
            }
            PathSegment::CubicTo(c0, c1, p) => {
                let (c0, c1, end) = (pt(c0), pt(c1), pt(p));
                for i in 1..=CURVE_STEPS {
                    let t = i as f64 / CURVE_STEPS as f64;
                    current.push(cubic_point(t, last, c0, c1, end));
                }
                last = end;
            }
            PathSegment::Close => {
                current.push(start);
                last = start;
            }
        }
    }
    if !current.is_empty() {
        subpaths.push(current);
    }

    subpaths
        .into_iter()
        .map(|line| line.into_iter().map(|p| xform.transform_point(p)).collect())
        .collect()
}

struct Piece {
    a: Point2D,
    b: Point2D,
    len: f64,
}

/// Pick `count` points evenly spaced by arc length, starting at the first
/// vertex. Jumps between subpaths do not count towards the length and the
/// end point is not repeated.
pub fn sample_polylines(polylines: &[Vec<Point2D>], count: usize) -> Vec<Point2D> {
    let Some(first) = polylines.iter().flat_map(|l| l.first()).next().copied() else {
        return Vec::new();
    };

    let pieces: Vec<Piece> = polylines
        .iter()
        .flat_map(|line| line.windows(2))
        .map(|w| Piece {
            a: w[0],
            b: w[1],
            len: w[0].distance(&w[1]),
        })
        .collect();

    let total: f64 = pieces.iter().map(|p| p.len).sum();
    if pieces.is_empty() || total <= 0.0 {
        return vec![first; count];
    }

    let step = total / count as f64;
    let mut points = Vec::with_capacity(count);
    let mut idx = 0;
    let mut walked = 0.0;

    for i in 0..count {
        let target = step * i as f64;
        while idx + 1 < pieces.len() && walked + pieces[idx].len < target {
            walked += pieces[idx].len;
            idx += 1;
        }
        let piece = &pieces[idx];
        let t = if piece.len > 0.0 {
            ((target - walked) / piece.len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        points.push(piece.a.lerp(&piece.b, t));
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use usvg::tiny_skia_path::PathBuilder;

    fn close(a: Point2D, b: Point2D) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn test_transform_point() {
        let p = transform_point(Point2D::new(10.0, 10.0), Viewport::new(100.0, 100.0));
        assert_eq!(p, Point2D::new(-40.0, 40.0));
    }

    #[test]
    fn test_transform_center_is_origin() {
        let p = transform_point(Point2D::new(50.0, 20.0), Viewport::new(100.0, 40.0));
        assert_eq!(p, Point2D::new(0.0, 0.0));
    }

    #[test]
    fn test_even_spacing_on_line() {
        let line = vec![vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)]];
        let points = sample_polylines(&line, 4);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.5, 5.0, 7.5]);
    }

    #[test]
    fn test_spacing_crosses_corners() {
        // Square of side 10, perimeter 40
        let square = vec![vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
            Point2D::new(0.0, 0.0),
        ]];
        let points = sample_polylines(&square, 8);
        assert_eq!(points.len(), 8);
        assert!(close(points[1], Point2D::new(5.0, 0.0)));
        assert!(close(points[3], Point2D::new(10.0, 5.0)));
        assert!(close(points[6], Point2D::new(0.0, 10.0)));
    }

    #[test]
    fn test_subpath_jump_has_no_length() {
        let lines = vec![
            vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)],
            vec![Point2D::new(100.0, 0.0), Point2D::new(101.0, 0.0)],
        ];
        let points = sample_polylines(&lines, 4);
        assert!(close(points[1], Point2D::new(0.5, 0.0)));
        assert!(close(points[3], Point2D::new(100.5, 0.0)));
    }

    #[test]
    fn test_degenerate_paths() {
        assert!(sample_polylines(&[], 40).is_empty());
        let dot = vec![vec![Point2D::new(3.0, 4.0)]];
        assert_eq!(sample_polylines(&dot, 3), vec![Point2D::new(3.0, 4.0); 3]);
    }

    #[test]
    fn test_flatten_applies_transform_and_close() {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.line_to(2.0, 0.0);
        pb.line_to(2.0, 2.0);
        pb.close();
        let path = pb.finish().unwrap();

        let shift = XForm {
            e: 5.0,
            ..XForm::identity()
        };
        let lines = flatten(&path, &shift);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].first(), Some(&Point2D::new(5.0, 0.0)));
        assert_eq!(lines[0].last(), Some(&Point2D::new(5.0, 0.0)));
        assert_eq!(lines[0].len(), 4);
    }

    #[test]
    fn test_flatten_curve_ends_on_endpoint() {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.cubic_to(0.0, 10.0, 10.0, 10.0, 10.0, 0.0);
        let path = pb.finish().unwrap();

        let lines = flatten(&path, &XForm::identity());
        assert_eq!(lines[0].len(), CURVE_STEPS + 1);
        assert!(close(*lines[0].last().unwrap(), Point2D::new(10.0, 0.0)));
    }
}
