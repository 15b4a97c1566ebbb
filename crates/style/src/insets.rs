//! Spacing around a region's content: margins and padding.
use charta_types::Rect;
use serde::{Deserialize, Deserializer, Serialize, de};

/// How inset values are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Values are lengths in points.
    #[default]
    Absolute,
    /// Values are fractions of the length being trimmed or extended.
    Relative,
}

/// Per-side spacing applied around a region, either absolute or relative.
///
/// Trimming and extending are exact inverses of each other (identity for
/// zero insets); a trim that would drive a length negative floors at zero
/// instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
    pub unit: LengthUnit,
}

impl Insets {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
        unit: LengthUnit::Absolute,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            unit: LengthUnit::Absolute,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn x(value: f32) -> Self {
        Self::new(0.0, value, 0.0, value)
    }

    pub fn y(value: f32) -> Self {
        Self::new(value, 0.0, value, 0.0)
    }

    pub fn relative(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            unit: LengthUnit::Relative,
        }
    }

    pub fn top_for(&self, length: f32) -> f32 {
        match self.unit {
            LengthUnit::Absolute => self.top,
            LengthUnit::Relative => self.top * length,
        }
    }

    pub fn right_for(&self, length: f32) -> f32 {
        match self.unit {
            LengthUnit::Absolute => self.right,
            LengthUnit::Relative => self.right * length,
        }
    }

    pub fn bottom_for(&self, length: f32) -> f32 {
        match self.unit {
            LengthUnit::Absolute => self.bottom,
            LengthUnit::Relative => self.bottom * length,
        }
    }

    pub fn left_for(&self, length: f32) -> f32 {
        match self.unit {
            LengthUnit::Absolute => self.left,
            LengthUnit::Relative => self.left * length,
        }
    }

    /// The width left once both horizontal insets are removed, floored at
    /// zero.
    pub fn trim_width(&self, width: f32) -> f32 {
        (width - self.left_for(width) - self.right_for(width)).max(0.0)
    }

    /// The height left once both vertical insets are removed, floored at
    /// zero.
    pub fn trim_height(&self, height: f32) -> f32 {
        (height - self.top_for(height) - self.bottom_for(height)).max(0.0)
    }

    /// The outer width needed to leave `width` after trimming; exact
    /// inverse of [`trim_width`](Self::trim_width).
    pub fn extend_width(&self, width: f32) -> f32 {
        match self.unit {
            LengthUnit::Absolute => width + self.left + self.right,
            LengthUnit::Relative => {
                let remainder = 1.0 - self.left - self.right;
                if remainder > 0.0 {
                    width / remainder
                } else {
                    width
                }
            }
        }
    }

    /// The outer height needed to leave `height` after trimming; exact
    /// inverse of [`trim_height`](Self::trim_height).
    pub fn extend_height(&self, height: f32) -> f32 {
        match self.unit {
            LengthUnit::Absolute => height + self.top + self.bottom,
            LengthUnit::Relative => {
                let remainder = 1.0 - self.top - self.bottom;
                if remainder > 0.0 {
                    height / remainder
                } else {
                    height
                }
            }
        }
    }

    /// Shrinks a bounds rectangle by these insets on all four sides,
    /// flooring the resulting extents at zero.
    pub fn trim_rect(&self, area: Rect) -> Rect {
        let left = self.left_for(area.width);
        let right = self.right_for(area.width);
        let top = self.top_for(area.height);
        let bottom = self.bottom_for(area.height);
        Rect::new(
            area.x + left,
            area.y + top,
            (area.width - left - right).max(0.0),
            (area.height - top - bottom).max(0.0),
        )
    }

    /// Parse a length with an optional unit suffix (`"10pt"`, `"5mm"`,
    /// `"12"`); unitless values are points.
    fn parse_length(input: &str) -> Result<f32, String> {
        const UNITS: [(&str, f32); 5] = [
            ("pt", 1.0),
            ("px", 1.0),
            ("in", 72.0),
            ("cm", 28.35),
            ("mm", 2.835),
        ];
        let input = input.trim();
        for (suffix, factor) in UNITS {
            if let Some(value) = input.strip_suffix(suffix) {
                return value
                    .trim()
                    .parse::<f32>()
                    .map(|v| v * factor)
                    .map_err(|e| format!("invalid length '{input}': {e}"));
            }
        }
        input
            .parse::<f32>()
            .map_err(|e| format!("invalid length '{input}': {e}"))
    }

    /// Parse a CSS-style shorthand with 1, 2 or 4 values.
    fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(Self::parse_length)
            .collect::<Result<Vec<_>, _>>()?;
        match values.as_slice() {
            [all] => Ok(Self::all(*all)),
            [vertical, horizontal] => Ok(Self::new(*vertical, *horizontal, *vertical, *horizontal)),
            [top, right, bottom, left] => Ok(Self::new(*top, *right, *bottom, *left)),
            _ => Err(format!(
                "inset shorthand expects 1, 2 or 4 values, got {}",
                values.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Insets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct InsetsVisitor;
        impl<'de> de::Visitor<'de> for InsetsVisitor {
            type Value = Insets;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, a string like '10pt 20pt', or a map of sides")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Insets, E> {
                Ok(Insets::all(value as f32))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Insets, E> {
                Ok(Insets::all(value as f32))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Insets, E> {
                Ok(Insets::all(value as f32))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Insets, E> {
                Insets::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Insets, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut insets = Insets::ZERO;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => insets.top = map.next_value()?,
                        "right" => insets.right = map.next_value()?,
                        "bottom" => insets.bottom = map.next_value()?,
                        "left" => insets.left = map.next_value()?,
                        "unit" => insets.unit = map.next_value()?,
                        _ => {
                            let _ = map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(insets)
            }
        }
        deserializer.deserialize_any(InsetsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_trim_and_extend_are_inverses() {
        let insets = Insets::new(5.0, 10.0, 5.0, 10.0);
        assert_eq!(insets.trim_width(100.0), 80.0);
        assert_eq!(insets.extend_width(80.0), 100.0);
        assert_eq!(insets.trim_height(50.0), 40.0);
        assert_eq!(insets.extend_height(40.0), 50.0);
    }

    #[test]
    fn relative_trim_and_extend_are_inverses() {
        let insets = Insets::relative(0.125, 0.25, 0.125, 0.25);
        assert_eq!(insets.trim_width(200.0), 100.0);
        assert_eq!(insets.extend_width(100.0), 200.0);
        assert_eq!(insets.trim_height(100.0), 75.0);
        assert_eq!(insets.extend_height(75.0), 100.0);
    }

    #[test]
    fn oversized_insets_floor_at_zero() {
        let insets = Insets::all(60.0);
        assert_eq!(insets.trim_width(100.0), 0.0);
        assert_eq!(insets.trim_height(10.0), 0.0);
    }

    #[test]
    fn trim_rect_offsets_origin_and_shrinks_extents() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        let area = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(insets.trim_rect(area), Rect::new(14.0, 21.0, 94.0, 46.0));
    }

    #[test]
    fn deserializes_from_number_string_and_map() {
        let from_number: Insets = serde_json::from_str("4").unwrap();
        assert_eq!(from_number, Insets::all(4.0));

        let from_shorthand: Insets = serde_json::from_str("\"10pt 5pt\"").unwrap();
        assert_eq!(from_shorthand, Insets::new(10.0, 5.0, 10.0, 5.0));

        let from_units: Insets = serde_json::from_str("\"1in 4mm 2cm 12px\"").unwrap();
        assert_eq!(from_units, Insets::new(72.0, 11.34, 56.7, 12.0));

        let from_map: Insets =
            serde_json::from_str(r#"{ "top": 1, "right": 2, "bottom": 3, "left": 4 }"#).unwrap();
        assert_eq!(from_map, Insets::new(1.0, 2.0, 3.0, 4.0));

        let relative: Insets =
            serde_json::from_str(r#"{ "left": 0.1, "right": 0.1, "unit": "relative" }"#).unwrap();
        assert_eq!(relative, Insets::relative(0.0, 0.1, 0.0, 0.1));
    }

    #[test]
    fn serialization_round_trips() {
        for insets in [Insets::new(1.0, 2.0, 3.0, 4.0), Insets::relative(0.0, 0.1, 0.0, 0.1)] {
            let json = serde_json::to_string(&insets).unwrap();
            let back: Insets = serde_json::from_str(&json).unwrap();
            assert_eq!(back, insets);
        }
    }

    #[test]
    fn rejects_malformed_shorthand() {
        assert!(serde_json::from_str::<Insets>("\"1 2 3\"").is_err());
        assert!(serde_json::from_str::<Insets>("\"abcpt\"").is_err());
    }
}
