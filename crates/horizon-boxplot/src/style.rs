//! Glyph style configuration.
//!
//! [`GlyphStyle`] is the resolved set of options a glyph is drawn and
//! hit-tested with. Hosts start from [`GlyphStyle::default`] (or a style
//! loaded from TOML/JSON) and layer per-dataset and per-element
//! [`StyleOverrides`] on top before building a view model.
//!
//! # Loading styles
//!
//! ```
//! use horizon_boxplot::{GlyphStyle, StyleOverrides};
//!
//! let defaults = GlyphStyle::from_toml_str(r##"
//! borderWidth = 2
//! outlierColor = "#FF0000"
//! "##)?;
//!
//! let mut element = StyleOverrides::default();
//! element.set_option("itemRadius", "3")?;
//! element.set_option("itemStyle", "triangle")?;
//!
//! let style = element.apply(&defaults);
//! assert_eq!(style.border_width, 2.0);
//! assert_eq!(style.item_radius, 3.0);
//! # Ok::<(), horizon_boxplot::Error>(())
//! ```

use horizon_boxplot_render::{Color, PointStyle, Stroke};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Fill color shared by rectangle-like elements: black at 10% opacity.
pub const DEFAULT_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.1);

/// Resolved style of one glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlyphStyle {
    /// Fill of the quartile box.
    pub background_color: Color,
    /// Stroke of the box, whiskers and median.
    pub border_color: Color,
    /// Line width of the box, whiskers and median.
    pub border_width: f32,
    /// Radius of outlier markers; `<= 0` disables the outlier tier.
    pub outlier_radius: f32,
    /// Fill of outlier markers.
    pub outlier_color: Color,
    /// Fill of the box segment between `q1` and the median, if any.
    pub lower_color: Option<Color>,
    /// Separate stroke color for the median line, if any.
    pub median_color: Option<Color>,
    /// Radius of item markers; `<= 0` disables the item tier.
    pub item_radius: f32,
    /// Marker shape of items.
    pub item_style: PointStyle,
    /// Fill of item markers.
    pub item_background_color: Color,
    /// Outline of item markers.
    pub item_border_color: Color,
    /// Padding added around the bounds for box hits.
    pub hit_padding: f32,
    /// Hit radius around outliers and items.
    pub outlier_hit_radius: f32,
    /// Decimal places of values in tooltip labels.
    pub tooltip_decimals: u8,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_COLOR,
            border_color: DEFAULT_COLOR,
            border_width: 1.0,
            outlier_radius: 2.0,
            outlier_color: DEFAULT_COLOR,
            lower_color: None,
            median_color: None,
            item_radius: 0.0,
            item_style: PointStyle::Circle,
            item_background_color: DEFAULT_COLOR,
            item_border_color: DEFAULT_COLOR,
            hit_padding: 2.0,
            outlier_hit_radius: 8.0,
            tooltip_decimals: 2,
        }
    }
}

impl GlyphStyle {
    /// Parse a complete style from TOML; missing options keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        parse_toml(source)
    }

    /// Parse a complete style from JSON; missing options keep their defaults.
    pub fn from_json_str(source: &str) -> Result<Self> {
        parse_json(source)
    }

    /// Stroke used for the box, whiskers and median.
    pub fn border_stroke(&self) -> Stroke {
        Stroke::new(self.border_color, self.border_width)
    }

    /// Stroke used for item marker outlines.
    pub fn item_stroke(&self) -> Stroke {
        Stroke::new(self.item_border_color, 1.0)
    }

    /// Whether outliers are drawn and hit-tested.
    #[inline]
    pub fn outliers_enabled(&self) -> bool {
        self.outlier_radius > 0.0
    }

    /// Whether items are drawn and hit-tested.
    #[inline]
    pub fn items_enabled(&self) -> bool {
        self.item_radius > 0.0
    }

    /// Set the outlier marker radius.
    pub fn with_outlier_radius(mut self, radius: f32) -> Self {
        self.outlier_radius = radius;
        self
    }

    /// Set the item marker radius and shape.
    pub fn with_items(mut self, radius: f32, style: PointStyle) -> Self {
        self.item_radius = radius;
        self.item_style = style;
        self
    }

    /// Set the box hit padding.
    pub fn with_hit_padding(mut self, padding: f32) -> Self {
        self.hit_padding = padding;
        self
    }

    /// Format a value for a tooltip label.
    pub fn format_value(&self, value: f64) -> String {
        format!("{value:.*}", usize::from(self.tooltip_decimals))
    }

    /// Set the outlier/item hit radius.
    pub fn with_outlier_hit_radius(mut self, radius: f32) -> Self {
        self.outlier_hit_radius = radius;
        self
    }
}

/// Partial style applied on top of a [`GlyphStyle`].
///
/// Every option is independent; unset options fall through to the base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOverrides {
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub outlier_radius: Option<f32>,
    pub outlier_color: Option<Color>,
    pub lower_color: Option<Color>,
    pub median_color: Option<Color>,
    pub item_radius: Option<f32>,
    pub item_style: Option<PointStyle>,
    pub item_background_color: Option<Color>,
    pub item_border_color: Option<Color>,
    pub hit_padding: Option<f32>,
    pub outlier_hit_radius: Option<f32>,
    pub tooltip_decimals: Option<u8>,
}

impl StyleOverrides {
    /// Parse overrides from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        parse_toml(source)
    }

    /// Parse overrides from JSON.
    pub fn from_json_str(source: &str) -> Result<Self> {
        parse_json(source)
    }

    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set one option by its camelCase name from a string value.
    ///
    /// Colors use `#RRGGBB`/`#RRGGBBAA`, point styles their camelCase names,
    /// and sizes plain numbers.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "backgroundColor" => self.background_color = Some(value.parse()?),
            "borderColor" => self.border_color = Some(value.parse()?),
            "borderWidth" => self.border_width = Some(parse_number(name, value)?),
            "outlierRadius" => self.outlier_radius = Some(parse_number(name, value)?),
            "outlierColor" => self.outlier_color = Some(value.parse()?),
            "lowerColor" => self.lower_color = Some(value.parse()?),
            "medianColor" => self.median_color = Some(value.parse()?),
            "itemRadius" => self.item_radius = Some(parse_number(name, value)?),
            "itemStyle" => self.item_style = Some(value.parse()?),
            "itemBackgroundColor" => self.item_background_color = Some(value.parse()?),
            "itemBorderColor" => self.item_border_color = Some(value.parse()?),
            "hitPadding" => self.hit_padding = Some(parse_number(name, value)?),
            "outlierHitRadius" => self.outlier_hit_radius = Some(parse_number(name, value)?),
            "tooltipDecimals" => {
                let decimals = value.trim().parse().map_err(|_| Error::invalid_value(name, value))?;
                self.tooltip_decimals = Some(decimals);
            }
            _ => return Err(Error::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Layer `other` on top of `self`; options set in `other` win.
    pub fn merge(&self, other: &StyleOverrides) -> StyleOverrides {
        StyleOverrides {
            background_color: other.background_color.or(self.background_color),
            border_color: other.border_color.or(self.border_color),
            border_width: other.border_width.or(self.border_width),
            outlier_radius: other.outlier_radius.or(self.outlier_radius),
            outlier_color: other.outlier_color.or(self.outlier_color),
            lower_color: other.lower_color.or(self.lower_color),
            median_color: other.median_color.or(self.median_color),
            item_radius: other.item_radius.or(self.item_radius),
            item_style: other.item_style.or(self.item_style),
            item_background_color: other.item_background_color.or(self.item_background_color),
            item_border_color: other.item_border_color.or(self.item_border_color),
            hit_padding: other.hit_padding.or(self.hit_padding),
            outlier_hit_radius: other.outlier_hit_radius.or(self.outlier_hit_radius),
            tooltip_decimals: other.tooltip_decimals.or(self.tooltip_decimals),
        }
    }

    /// Resolve a full style from `base` and these overrides.
    pub fn apply(&self, base: &GlyphStyle) -> GlyphStyle {
        GlyphStyle {
            background_color: self.background_color.unwrap_or(base.background_color),
            border_color: self.border_color.unwrap_or(base.border_color),
            border_width: self.border_width.unwrap_or(base.border_width),
            outlier_radius: self.outlier_radius.unwrap_or(base.outlier_radius),
            outlier_color: self.outlier_color.unwrap_or(base.outlier_color),
            lower_color: self.lower_color.or(base.lower_color),
            median_color: self.median_color.or(base.median_color),
            item_radius: self.item_radius.unwrap_or(base.item_radius),
            item_style: self.item_style.unwrap_or(base.item_style),
            item_background_color: self
                .item_background_color
                .unwrap_or(base.item_background_color),
            item_border_color: self.item_border_color.unwrap_or(base.item_border_color),
            hit_padding: self.hit_padding.unwrap_or(base.hit_padding),
            outlier_hit_radius: self.outlier_hit_radius.unwrap_or(base.outlier_hit_radius),
            tooltip_decimals: self.tooltip_decimals.unwrap_or(base.tooltip_decimals),
        }
    }
}

/// Resolve an element's style: defaults, then dataset, then element overrides.
pub fn resolve_style(
    defaults: &GlyphStyle,
    dataset: &StyleOverrides,
    element: &StyleOverrides,
) -> GlyphStyle {
    dataset.merge(element).apply(defaults)
}

fn parse_number(option: &str, value: &str) -> Result<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::invalid_value(option, value))
}

fn parse_toml<T: DeserializeOwned>(source: &str) -> Result<T> {
    let parsed = toml::from_str(source)?;
    debug!(format = "toml", bytes = source.len(), "loaded glyph style");
    Ok(parsed)
}

fn parse_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    let parsed = serde_json::from_str(source)?;
    debug!(format = "json", bytes = source.len(), "loaded glyph style");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = GlyphStyle::default();
        assert_eq!(style.border_width, 1.0);
        assert_eq!(style.outlier_radius, 2.0);
        assert_eq!(style.item_radius, 0.0);
        assert_eq!(style.item_style, PointStyle::Circle);
        assert_eq!(style.hit_padding, 2.0);
        assert_eq!(style.outlier_hit_radius, 8.0);
        assert_eq!(style.tooltip_decimals, 2);
        assert!(style.outliers_enabled());
        assert!(!style.items_enabled());
        assert!(style.lower_color.is_none());
        assert!(style.median_color.is_none());
    }

    #[test]
    fn test_from_toml_partial() {
        let style = GlyphStyle::from_toml_str(
            r##"
            itemRadius = 3.5
            itemStyle = "rectRot"
            medianColor = "#FF0000"
            "##,
        )
        .unwrap();
        assert_eq!(style.item_radius, 3.5);
        assert_eq!(style.item_style, PointStyle::RectRot);
        assert_eq!(style.median_color, Some(Color::RED));
        assert_eq!(style.outlier_hit_radius, 8.0);
    }

    #[test]
    fn test_from_json_rejects_bad_color() {
        let err = GlyphStyle::from_json_str(r#"{"borderColor": "black"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_toml_rejects_bad_point_style() {
        let err = StyleOverrides::from_toml_str(r#"itemStyle = "hexagon""#).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_set_option() {
        let mut overrides = StyleOverrides::default();
        assert!(overrides.is_empty());

        overrides.set_option("hitPadding", " 4 ").unwrap();
        overrides.set_option("outlierColor", "#0000FF").unwrap();
        overrides.set_option("itemStyle", "star").unwrap();
        assert_eq!(overrides.hit_padding, Some(4.0));
        assert_eq!(overrides.outlier_color, Some(Color::BLUE));
        assert_eq!(overrides.item_style, Some(PointStyle::Star));

        assert!(matches!(
            overrides.set_option("hitPadding", "wide"),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            overrides.set_option("hitPadding", "NaN"),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            overrides.set_option("borderColor", "blue"),
            Err(Error::Render(_))
        ));
        assert!(matches!(
            overrides.set_option("tooltipFont", "12px"),
            Err(Error::UnknownOption(ref name)) if name == "tooltipFont"
        ));
    }

    #[test]
    fn test_layering_order() {
        let defaults = GlyphStyle::default();
        let dataset = StyleOverrides {
            border_width: Some(3.0),
            outlier_radius: Some(4.0),
            ..Default::default()
        };
        let element = StyleOverrides {
            outlier_radius: Some(0.0),
            ..Default::default()
        };

        let style = resolve_style(&defaults, &dataset, &element);
        assert_eq!(style.border_width, 3.0);
        assert_eq!(style.outlier_radius, 0.0);
        assert!(!style.outliers_enabled());
        assert_eq!(style.hit_padding, defaults.hit_padding);
    }

    #[test]
    fn test_tooltip_decimals() {
        assert_eq!(GlyphStyle::default().format_value(12.3456), "12.35");

        let mut overrides = StyleOverrides::default();
        overrides.set_option("tooltipDecimals", "0").unwrap();
        let style = overrides.apply(&GlyphStyle::default());
        assert_eq!(style.format_value(12.6), "13");

        assert!(matches!(
            overrides.set_option("tooltipDecimals", "-1"),
            Err(Error::InvalidValue { .. })
        ));
        let parsed = GlyphStyle::from_json_str(r#"{"tooltipDecimals": 4}"#).unwrap();
        assert_eq!(parsed.format_value(0.5), "0.5000");
    }

    #[test]
    fn test_strokes() {
        let style = GlyphStyle::default();
        let stroke = style.border_stroke();
        assert_eq!(stroke.width, 1.0);
        assert_eq!(style.item_stroke().width, 1.0);
    }
}
