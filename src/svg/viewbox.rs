//! Root `viewBox` of an SVG document
//!
//! usvg folds the root viewBox into the transform of every node, so absolute
//! transforms land in the output size. Points are measured in viewBox user
//! units instead, which needs the root attributes read straight from the XML.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::types::XForm;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Min,
    Mid,
    Max,
}

/// Parsed `preserveAspectRatio`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    /// `None` stretches each axis independently
    pub align: Option<(Align, Align)>,
    pub slice: bool,
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            align: Some((Align::Mid, Align::Mid)),
            slice: false,
        }
    }
}

impl AspectRatio {
    /// Parse the attribute value; unknown values fall back to `xMidYMid meet`
    pub fn parse(value: &str) -> Self {
        let mut words = value.split_whitespace().peekable();
        if words.peek() == Some(&"defer") {
            words.next();
        }

        let align = match words.next() {
            Some("none") => None,
            Some(word) => match parse_align(word) {
                Some(pair) => Some(pair),
                None => return Self::default(),
            },
            None => return Self::default(),
        };
        let slice = words.next() == Some("slice");
        Self { align, slice }
    }
}

fn parse_align(word: &str) -> Option<(Align, Align)> {
    let axis = |s: &str| match s {
        "Min" => Some(Align::Min),
        "Mid" => Some(Align::Mid),
        "Max" => Some(Align::Max),
        _ => None,
    };
    let rest = word.strip_prefix('x')?;
    let (x, y) = rest.split_once('Y')?;
    Some((axis(x)?, axis(y)?))
}

/// Root `viewBox` rectangle in user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub aspect: AspectRatio,
}

impl ViewBox {
    /// Parse `min-x min-y width height`; non-positive sizes are rejected
    pub fn parse(value: &str) -> Option<Self> {
        let numbers: Vec<f64> = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        let &[x, y, width, height] = numbers.as_slice() else {
            return None;
        };
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        Some(Self {
            x,
            y,
            width,
            height,
            aspect: AspectRatio::default(),
        })
    }

    /// Transform from user units to a `width` x `height` viewport
    pub fn size_transform(&self, width: f64, height: f64) -> XForm {
        let sx = width / self.width;
        let sy = height / self.height;

        let Some((align_x, align_y)) = self.aspect.align else {
            return XForm {
                a: sx,
                d: sy,
                e: -self.x * sx,
                f: -self.y * sy,
                ..XForm::identity()
            };
        };

        let s = if self.aspect.slice { sx.max(sy) } else { sx.min(sy) };
        let offset = |align: Align, free: f64| match align {
            Align::Min => 0.0,
            Align::Mid => free / 2.0,
            Align::Max => free,
        };
        XForm {
            a: s,
            d: s,
            e: -self.x * s + offset(align_x, width - self.width * s),
            f: -self.y * s + offset(align_y, height - self.height * s),
            ..XForm::identity()
        }
    }
}

/// Read the `viewBox` of the root `<svg>` element, if it has a usable one.
/// XML errors yield `None`; usvg reports those when it parses the document.
pub fn root_view_box(svg_data: &str) -> Option<ViewBox> {
    let mut reader = Reader::from_str(svg_data);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name_bytes = e.local_name();
                let name = std::str::from_utf8(name_bytes.as_ref()).unwrap_or("");
                if name != "svg" {
                    return None;
                }

                let mut view_box = None;
                let mut aspect = AspectRatio::default();
                for attr in e.attributes().flatten() {
                    let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
                    let value = std::str::from_utf8(&attr.value).unwrap_or("");
                    match key {
                        "viewBox" => view_box = ViewBox::parse(value),
                        "preserveAspectRatio" => aspect = AspectRatio::parse(value),
                        _ => {}
                    }
                }
                return view_box.map(|vb| ViewBox { aspect, ..vb });
            }
            Ok(Event::Eof) | Err(_) => return None,
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point2D;

    fn close(a: Point2D, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9
    }

    #[test]
    fn test_parse_view_box() {
        let vb = ViewBox::parse("0 0 100 50").unwrap();
        assert_eq!((vb.x, vb.y, vb.width, vb.height), (0.0, 0.0, 100.0, 50.0));
        let vb = ViewBox::parse("-5,10, 20 30").unwrap();
        assert_eq!((vb.x, vb.y, vb.width, vb.height), (-5.0, 10.0, 20.0, 30.0));
        assert_eq!(ViewBox::parse("0 0 0 10"), None);
        assert_eq!(ViewBox::parse("0 0 10"), None);
        assert_eq!(ViewBox::parse("0 0 ten 10"), None);
    }

    #[test]
    fn test_parse_aspect_ratio() {
        assert_eq!(AspectRatio::parse(""), AspectRatio::default());
        assert_eq!(AspectRatio::parse("none").align, None);
        let a = AspectRatio::parse("defer xMinYMax slice");
        assert_eq!(a.align, Some((Align::Min, Align::Max)));
        assert!(a.slice);
        assert_eq!(AspectRatio::parse("bogus"), AspectRatio::default());
    }

    #[test]
    fn test_uniform_scale() {
        let vb = ViewBox::parse("0 0 100 100").unwrap();
        let xf = vb.size_transform(200.0, 200.0);
        assert!(close(xf.transform_point(Point2D::new(10.0, 10.0)), 20.0, 20.0));
    }

    #[test]
    fn test_meet_centers_the_short_axis() {
        let vb = ViewBox::parse("0 0 100 100").unwrap();
        let xf = vb.size_transform(300.0, 100.0);
        assert!(close(xf.transform_point(Point2D::new(0.0, 0.0)), 100.0, 0.0));
        assert!(close(xf.transform_point(Point2D::new(100.0, 100.0)), 200.0, 100.0));
    }

    #[test]
    fn test_none_stretches_each_axis() {
        let mut vb = ViewBox::parse("10 0 100 100").unwrap();
        vb.aspect = AspectRatio::parse("none");
        let xf = vb.size_transform(300.0, 100.0);
        assert!(close(xf.transform_point(Point2D::new(10.0, 50.0)), 0.0, 50.0));
        assert!(close(xf.transform_point(Point2D::new(110.0, 100.0)), 300.0, 100.0));
    }

    #[test]
    fn test_root_view_box() {
        let svg = r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="200" viewBox="0 0 100 80" preserveAspectRatio="xMinYMin">
  <rect width="10" height="10"/>
</svg>"#;
        let vb = root_view_box(svg).unwrap();
        assert_eq!((vb.width, vb.height), (100.0, 80.0));
        assert_eq!(vb.aspect.align, Some((Align::Min, Align::Min)));

        assert_eq!(root_view_box(r#"<svg width="10" height="10"/>"#), None);
        assert_eq!(root_view_box("not svg"), None);
    }
}
