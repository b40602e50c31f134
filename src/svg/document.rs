use quick_xml::events::Event;
use quick_xml::reader::Reader;
use slotmap::SlotMap;

use crate::error::{DocumentError, Result};
use crate::geometry::{EdgeSource, Point, Shape};
use crate::math::Vector2;

use super::attributes::{DocumentAttributes, Scalar, ViewBox};
use super::path::{write_path_data, PathReader};

slotmap::new_key_type! {
    /// Handle to a shape stored in a document.
    pub struct ShapeId;
}

/// How a shape enters a document.
///
/// `Owned` moves the shape into the document's store. `Shared` draws an
/// already-stored shape at another position in the draw order; mutation
/// through [`SvgDocument::shape_mut`] is visible at every occurrence.
/// This makes aliasing explicit in the signature instead of hiding it
/// behind a copy flag.
#[derive(Debug)]
pub enum Insert {
    Owned(Shape),
    Shared(ShapeId),
}

/// Margin applied when an auto-sized document computes its canvas on
/// export.
const AUTO_MARGIN: f64 = 5.0;

/// An SVG document: canvas attributes plus an ordered list of shapes.
///
/// Shapes live in a keyed store; the draw order references them by
/// handle, so the same stored shape may be drawn more than once.
#[derive(Debug)]
pub struct SvgDocument {
    attributes: DocumentAttributes,
    shapes: SlotMap<ShapeId, Shape>,
    order: Vec<ShapeId>,
    auto_resize: bool,
}

impl SvgDocument {
    /// Creates a document with a fixed canvas size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            attributes: DocumentAttributes::new(width, height),
            shapes: SlotMap::with_key(),
            order: Vec::new(),
            auto_resize: false,
        }
    }

    /// Creates a document that sizes its canvas to fit the content on
    /// export, with a default margin.
    #[must_use]
    pub fn auto_sized() -> Self {
        Self {
            auto_resize: true,
            ..Self::new(0.0, 0.0)
        }
    }

    /// Returns the canvas attributes.
    #[must_use]
    pub fn attributes(&self) -> &DocumentAttributes {
        &self.attributes
    }

    /// Returns the canvas attributes for modification.
    pub fn attributes_mut(&mut self) -> &mut DocumentAttributes {
        &mut self.attributes
    }

    /// Adds a shape built from any edge source and returns its handle.
    pub fn add(&mut self, source: &dyn EdgeSource) -> ShapeId {
        let id = self.shapes.insert(Shape::from_source(source));
        self.order.push(id);
        id
    }

    /// Inserts a shape by the given mode and returns the drawn handle.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownShape`] for a `Shared` handle that
    /// does not belong to this document.
    pub fn insert(&mut self, insert: Insert) -> Result<ShapeId> {
        let id = match insert {
            Insert::Owned(shape) => self.shapes.insert(shape),
            Insert::Shared(id) => {
                if !self.shapes.contains_key(id) {
                    return Err(DocumentError::UnknownShape.into());
                }
                id
            }
        };
        self.order.push(id);
        Ok(id)
    }

    /// Returns the stored shape for a handle.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownShape`] for a foreign handle.
    pub fn shape(&self, id: ShapeId) -> Result<&Shape> {
        self.shapes.get(id).ok_or_else(|| DocumentError::UnknownShape.into())
    }

    /// Returns the stored shape for a handle, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownShape`] for a foreign handle.
    pub fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape> {
        self.shapes.get_mut(id).ok_or_else(|| DocumentError::UnknownShape.into())
    }

    /// Iterates the shapes in draw order. A shape drawn through several
    /// `Shared` handles appears once per occurrence.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|id| self.shapes.get(*id))
    }

    /// Number of entries in the draw order.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.order.len()
    }

    /// Resizes the canvas to fit the content, padding each side by the
    /// margin plus half the stroke width so strokes are not clipped.
    ///
    /// With `offset_content`, every stored shape is translated so the
    /// content starts at the padding offset. That is an explicit in-place
    /// mutation: every `Shared` occurrence and every handle observes it.
    pub fn resize_to_fit(&mut self, margin: f64, offset_content: bool) {
        let bounds = self.content_bounds();
        self.attributes = self.fitted_attributes(margin);

        if offset_content {
            if let Some((min, _)) = bounds {
                let pad = margin + self.attributes.stroke_width / 2.0;
                let offset = Vector2::new(pad - min.x, pad - min.y);
                for shape in self.shapes.values_mut() {
                    shape.translate(offset);
                }
            }
        }
    }

    /// Builds the complete SVG markup.
    ///
    /// Each shape is exported as one path element per closed loop. An
    /// auto-sized document computes its fitted canvas here without
    /// modifying the document.
    #[must_use]
    pub fn export(&self) -> String {
        let attributes = if self.auto_resize {
            self.fitted_attributes(AUTO_MARGIN)
        } else {
            self.attributes.clone()
        };

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" {}>\n",
            attributes.svg_attributes()
        ));
        svg.push_str(&format!("<g fill=\"none\" {}>\n", attributes.stroke_attributes()));

        for shape in self.shapes() {
            for path in shape.closed_paths() {
                if path.is_empty() {
                    continue;
                }
                svg.push_str(&format!("<path d=\"{}\" />\n", write_path_data(&path)));
            }
        }

        svg.push_str("</g>\n</svg>\n");
        svg
    }

    /// Reads a document back from SVG markup.
    ///
    /// Walks the element tree for the `svg` canvas attributes, the first
    /// group's stroke attributes, and every path's data. Unknown elements
    /// and attributes are ignored; path-level style strings are not
    /// interpreted. A malformed path aborts the whole import.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] for XML or attribute failures and a
    /// [`crate::error::ParseError`] for path data failures.
    pub fn import(text: &str) -> Result<Self> {
        let mut reader = Reader::from_str(text);

        let mut saw_root = false;
        let mut width: Option<Scalar> = None;
        let mut height: Option<Scalar> = None;
        let mut view_box: Option<ViewBox> = None;
        let mut stroke_color: Option<String> = None;
        let mut stroke_width: Option<f64> = None;
        let mut shapes: Vec<Shape> = Vec::new();

        loop {
            match reader.read_event().map_err(DocumentError::Xml)? {
                Event::Start(e) | Event::Empty(e) => {
                    let name = std::str::from_utf8(e.name().as_ref()).unwrap_or("").to_string();
                    match name.as_str() {
                        "svg" => {
                            saw_root = true;
                            for attr in e.attributes().flatten() {
                                let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
                                let value = std::str::from_utf8(&attr.value).unwrap_or("");
                                match key {
                                    "width" => width = Some(Scalar::parse(value)?),
                                    "height" => height = Some(Scalar::parse(value)?),
                                    "viewBox" => view_box = Some(ViewBox::parse(value)?),
                                    _ => {}
                                }
                            }
                        }
                        "g" => {
                            for attr in e.attributes().flatten() {
                                let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
                                let value = std::str::from_utf8(&attr.value).unwrap_or("");
                                match key {
                                    "stroke" if stroke_color.is_none() => {
                                        stroke_color = Some(value.to_string());
                                    }
                                    "stroke-width" if stroke_width.is_none() => {
                                        stroke_width = Some(value.parse().map_err(|_| {
                                            DocumentError::MalformedAttribute {
                                                name: "stroke-width",
                                                value: value.to_string(),
                                            }
                                        })?);
                                    }
                                    _ => {}
                                }
                            }
                        }
                        "path" => {
                            for attr in e.attributes().flatten() {
                                if attr.key.as_ref() == b"d" {
                                    let value = std::str::from_utf8(&attr.value).unwrap_or("");
                                    let data = PathReader::new(value).read_path()?;
                                    shapes.push(Shape::from_points(&data.points, data.closed));
                                }
                            }
                        }
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !saw_root {
            return Err(DocumentError::MissingRoot.into());
        }

        let width_value = width
            .as_ref()
            .map(|scalar| scalar.value)
            .or(view_box.map(|vb| vb.width))
            .unwrap_or(0.0);
        let height_value = height
            .as_ref()
            .map(|scalar| scalar.value)
            .or(view_box.map(|vb| vb.height))
            .unwrap_or(0.0);
        let unit = width
            .map(|scalar| scalar.unit)
            .filter(|unit| !unit.is_empty())
            .or(height.map(|scalar| scalar.unit).filter(|unit| !unit.is_empty()))
            .unwrap_or_else(|| DocumentAttributes::DEFAULT_UNIT.to_string());

        let mut attributes = DocumentAttributes::new(width_value, height_value);
        attributes.unit = unit;
        if let Some(color) = stroke_color {
            attributes.stroke_color = color;
        }
        if let Some(value) = stroke_width {
            attributes.stroke_width = value;
        }
        if let Some(vb) = view_box {
            attributes.view_box = vb;
        }

        let mut document = Self::new(0.0, 0.0);
        document.attributes = attributes;
        for shape in shapes {
            let id = document.shapes.insert(shape);
            document.order.push(id);
        }
        Ok(document)
    }

    /// Canvas attributes fitted to the content with the given margin.
    fn fitted_attributes(&self, margin: f64) -> DocumentAttributes {
        let mut attributes = self.attributes.clone();
        match self.content_bounds() {
            Some((min, max)) => {
                let pad = margin + attributes.stroke_width / 2.0;
                attributes.width = (max.x - min.x) + 2.0 * pad;
                attributes.height = (max.y - min.y) + 2.0 * pad;
            }
            None => {
                attributes.width = 0.0;
                attributes.height = 0.0;
            }
        }
        attributes.view_box = ViewBox::new(0.0, 0.0, attributes.width, attributes.height);
        attributes
    }

    /// Bounding corners over every drawn shape, or `None` without edges.
    fn content_bounds(&self) -> Option<(Point, Point)> {
        let mut bounds: Option<(Point, Point)> = None;
        for shape in self.shapes() {
            let Some((min, max)) = shape.bounding_box() else {
                continue;
            };
            bounds = Some(match bounds {
                None => (min, max),
                Some((acc_min, acc_max)) => (
                    Point::new(acc_min.x.min(min.x), acc_min.y.min(min.y)),
                    Point::new(acc_max.x.max(max.x), acc_max.y.max(max.y)),
                ),
            });
        }
        bounds
    }
}
