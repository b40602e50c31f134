use std::fmt;

use crate::error::DocumentError;

/// A magnitude with a trailing unit suffix, as written in SVG size
/// attributes (`"123.00mm"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    pub value: f64,
    pub unit: String,
}

impl Scalar {
    /// Creates a scalar from a value and unit.
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Splits a string like `"12.46mm"` into value and unit by scanning
    /// trailing non-digit characters.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MalformedScalar`] when no numeric value
    /// can be read.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let bytes = text.as_bytes();
        let mut unit_start = bytes.len();
        for (i, byte) in bytes.iter().enumerate().rev() {
            if byte.is_ascii_digit() {
                unit_start = i + 1;
                break;
            }
        }

        let value: f64 = text[..unit_start]
            .parse()
            .map_err(|_| DocumentError::MalformedScalar(text.to_string()))?;
        Ok(Self::new(value, &text[unit_start..]))
    }
}

impl fmt::Display for Scalar {
    /// Two-decimal invariant value followed by the unit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}{}", self.value, self.unit)
    }
}

/// The SVG viewBox: the internal coordinate system of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Creates a view box.
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Parses the four space- or comma-separated viewBox numbers.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MalformedAttribute`] unless exactly four
    /// numbers are present.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let malformed = || DocumentError::MalformedAttribute {
            name: "viewBox",
            value: text.to_string(),
        };

        let parts: Vec<&str> = text
            .split(|c| c == ',' || c == ' ')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() != 4 {
            return Err(malformed());
        }

        Ok(Self {
            min_x: parts[0].parse().map_err(|_| malformed())?,
            min_y: parts[1].parse().map_err(|_| malformed())?,
            width: parts[2].parse().map_err(|_| malformed())?,
            height: parts[3].parse().map_err(|_| malformed())?,
        })
    }
}

impl fmt::Display for ViewBox {
    /// Origin in shortest form, dimensions with two decimals, space
    /// separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2} {:.2}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Canvas-level attributes of an SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAttributes {
    /// Physical canvas width, in `unit`.
    pub width: f64,
    /// Physical canvas height, in `unit`.
    pub height: f64,
    /// Stroke width used for drawing paths.
    pub stroke_width: f64,
    /// Stroke color, in any SVG color format.
    pub stroke_color: String,
    /// Unit of the width and height attributes.
    pub unit: String,
    /// Internal coordinate system.
    pub view_box: ViewBox,
}

impl DocumentAttributes {
    pub const DEFAULT_STROKE_COLOR: &'static str = "black";
    pub const DEFAULT_UNIT: &'static str = "mm";

    /// Creates attributes for the given canvas size with default stroke
    /// and unit, and a view box matching the canvas.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stroke_width: 1.0,
            stroke_color: Self::DEFAULT_STROKE_COLOR.to_string(),
            unit: Self::DEFAULT_UNIT.to_string(),
            view_box: ViewBox::new(0.0, 0.0, width, height),
        }
    }

    /// The width, height and viewBox attributes of the `svg` element.
    #[must_use]
    pub fn svg_attributes(&self) -> String {
        let width = Scalar::new(self.width, self.unit.as_str());
        let height = Scalar::new(self.height, self.unit.as_str());
        format!(
            "width=\"{width}\" height=\"{height}\" viewBox=\"{}\"",
            self.view_box
        )
    }

    /// The stroke attributes of the drawing group element.
    #[must_use]
    pub fn stroke_attributes(&self) -> String {
        format!(
            "stroke=\"{}\" stroke-width=\"{}\"",
            self.stroke_color, self.stroke_width
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn scalar_parses_value_and_unit() {
        let scalar = Scalar::parse("12.46mm").unwrap();

        assert_eq!(scalar.value, 12.46);
        assert_eq!(scalar.unit, "mm");
    }

    #[test]
    fn scalar_parses_unitless_value() {
        let scalar = Scalar::parse("123").unwrap();

        assert_eq!(scalar.value, 123.0);
        assert_eq!(scalar.unit, "");
    }

    #[test]
    fn scalar_parses_percent() {
        let scalar = Scalar::parse("100%").unwrap();

        assert_eq!(scalar.value, 100.0);
        assert_eq!(scalar.unit, "%");
    }

    #[test]
    fn scalar_without_digits_fails() {
        assert!(matches!(
            Scalar::parse("auto"),
            Err(DocumentError::MalformedScalar(_))
        ));
    }

    #[test]
    fn scalar_formats_two_decimals() {
        assert_eq!(Scalar::new(123.0, "mm").to_string(), "123.00mm");
        assert_eq!(Scalar::new(60.1, "mm").to_string(), "60.10mm");
    }

    #[test]
    fn view_box_round_trips() {
        let parsed = ViewBox::parse("0 0 123.00 456.00").unwrap();

        assert_eq!(parsed, ViewBox::new(0.0, 0.0, 123.0, 456.0));
        assert_eq!(parsed.to_string(), "0 0 123.00 456.00");
    }

    #[test]
    fn view_box_accepts_commas() {
        let parsed = ViewBox::parse("0, 0, 50, 70").unwrap();

        assert_eq!(parsed, ViewBox::new(0.0, 0.0, 50.0, 70.0));
    }

    #[test]
    fn view_box_with_wrong_arity_fails() {
        assert!(ViewBox::parse("0 0 50").is_err());
    }

    #[test]
    fn svg_attributes_format() {
        let attributes = DocumentAttributes::new(123.0, 456.0);

        assert_eq!(
            attributes.svg_attributes(),
            "width=\"123.00mm\" height=\"456.00mm\" viewBox=\"0 0 123.00 456.00\""
        );
    }

    #[test]
    fn stroke_attributes_use_shortest_width_form() {
        let mut attributes = DocumentAttributes::new(100.0, 100.0);
        attributes.stroke_width = 3.5;

        assert_eq!(attributes.stroke_attributes(), "stroke=\"black\" stroke-width=\"3.5\"");
    }
}
