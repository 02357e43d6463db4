/// 2D point in the drawing-centered, Y-up frame produced by the sampler
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Linear interpolation towards `other`
    pub fn lerp(&self, other: &Point2D, t: f64) -> Point2D {
        Point2D::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// 3D point used for node translations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::default()
    }
}

impl From<Point2D> for Point3D {
    fn from(p: Point2D) -> Self {
        Point3D::new(p.x, p.y, 0.0)
    }
}

/// RGB color, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// 2D affine transformation matrix [a, b, c, d, e, f]
/// Represents: | a  c  e |
///             | b  d  f |
///             | 0  0  1 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XForm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl XForm {
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Compose two transforms: self * other
    pub fn compose(&self, other: &XForm) -> XForm {
        XForm {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Inverse transform, or `None` if the matrix is singular
    pub fn invert(&self) -> Option<XForm> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < 1e-12 || !det.is_finite() {
            return None;
        }
        Some(XForm {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    /// Transform a point
    pub fn transform_point(&self, p: Point2D) -> Point2D {
        Point2D::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

impl From<usvg::Transform> for XForm {
    fn from(ts: usvg::Transform) -> Self {
        Self {
            a: ts.sx as f64,
            b: ts.ky as f64,
            c: ts.kx as f64,
            d: ts.sy as f64,
            e: ts.tx as f64,
            f: ts.ty as f64,
        }
    }
}

/// Size of the drawing canvas the sampled points are centered on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Sampled points and fill color of one source path
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathSample {
    /// Fill color as a hex string; `None` means white
    pub color: Option<String>,
    pub points: Vec<Point2D>,
}

impl PathSample {
    pub fn new(color: Option<String>, points: Vec<Point2D>) -> Self {
        Self { color, points }
    }
}

/// One drawing ready for export
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawingItem {
    pub name: String,
    pub paths: Vec<PathSample>,
}

impl DrawingItem {
    pub fn new(name: impl Into<String>, paths: Vec<PathSample>) -> Self {
        Self {
            name: name.into(),
            paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_round_trips_point() {
        let xf = XForm {
            a: 2.0,
            b: 0.5,
            c: -1.0,
            d: 3.0,
            e: 10.0,
            f: -4.0,
        };
        let inv = xf.invert().unwrap();
        let p = Point2D::new(7.0, -2.5);
        let back = inv.transform_point(xf.transform_point(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
        let id = inv.compose(&xf);
        assert!((id.a - 1.0).abs() < 1e-12 && id.b.abs() < 1e-12 && id.e.abs() < 1e-9);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let flat = XForm {
            d: 0.0,
            ..XForm::identity()
        };
        assert_eq!(flat.invert(), None);
    }
}
