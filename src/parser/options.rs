//! Render configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{CellStyle, PageGeometry, TextDefaults};

/// Options controlling how markup is turned into a document.
///
/// Every value that the renderer would otherwise hard-code (font, palette,
/// page geometry, heading style ids) lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Font family applied document-wide
    pub font: String,

    /// Default font size in points
    pub font_size_pt: f32,

    /// Paragraph style id per heading level; unmapped levels use the body style
    pub heading_styles: BTreeMap<u8, String>,

    /// Background of table header cells
    pub header_highlight: String,

    /// Text color of table header cells
    pub header_text_color: String,

    /// Background of table data cells
    pub data_highlight: String,

    /// Text color of table data cells
    pub data_text_color: String,

    /// Page size and margins
    pub page: PageGeometry,

    /// Heading text (level 2) that opens the employment history section
    pub employment_heading: String,
}

impl RenderConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the document font.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Set the default font size.
    pub fn with_font_size(mut self, size_pt: f32) -> Self {
        self.font_size_pt = size_pt;
        self
    }

    /// Map a heading level to a paragraph style id.
    pub fn with_heading_style(mut self, level: u8, style_id: impl Into<String>) -> Self {
        self.heading_styles.insert(level.clamp(1, 6), style_id.into());
        self
    }

    /// Set the table header palette.
    pub fn with_header_palette(
        mut self,
        background: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        self.header_highlight = background.into();
        self.header_text_color = color.into();
        self
    }

    /// Set the table data palette.
    pub fn with_data_palette(
        mut self,
        background: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        self.data_highlight = background.into();
        self.data_text_color = color.into();
        self
    }

    /// Set the page geometry.
    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    /// Style id for a heading level, `None` for the body style.
    pub fn heading_style(&self, level: u8) -> Option<&str> {
        self.heading_styles.get(&level).map(String::as_str)
    }

    /// Cell style for table header cells.
    pub fn header_cell_style(&self) -> CellStyle {
        CellStyle::new(&self.header_highlight, &self.header_text_color)
    }

    /// Cell style for table data cells.
    pub fn data_cell_style(&self) -> CellStyle {
        CellStyle::new(&self.data_highlight, &self.data_text_color)
    }

    /// Document-wide text defaults derived from this config.
    pub fn text_defaults(&self) -> TextDefaults {
        TextDefaults {
            font: self.font.clone(),
            size_pt: self.font_size_pt,
            ..TextDefaults::default()
        }
    }

    /// Check colors, sizes and heading levels.
    pub fn validate(&self) -> Result<()> {
        for color in [
            &self.header_highlight,
            &self.header_text_color,
            &self.data_highlight,
            &self.data_text_color,
        ] {
            if !is_hex_color(color) {
                return Err(Error::Config(format!(
                    "color must be 6 hex digits without '#': {color:?}"
                )));
            }
        }
        if let Some(level) = self.heading_styles.keys().find(|l| !(1..=6).contains(*l)) {
            return Err(Error::Config(format!("heading level {level} is out of range")));
        }
        if self.font.trim().is_empty() {
            return Err(Error::Config("font must not be empty".into()));
        }
        if self.font_size_pt <= 0.0 {
            return Err(Error::Config("font size must be positive".into()));
        }
        if self.page.content_width() <= 0.0 {
            return Err(Error::Config("margins leave no room on the page".into()));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        let heading_styles = (1..=3).map(|l| (l, format!("Heading{l}"))).collect();
        Self {
            font: "Aptos".to_string(),
            font_size_pt: 11.0,
            heading_styles,
            header_highlight: "C6EFCE".to_string(),
            header_text_color: "006100".to_string(),
            data_highlight: "FFFACD".to_string(),
            data_text_color: "000000".to_string(),
            page: PageGeometry::letter(),
            employment_heading: "EMPLOYMENT HISTORY".to_string(),
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.font, "Aptos");
        assert_eq!(config.heading_style(1), Some("Heading1"));
        assert_eq!(config.heading_style(3), Some("Heading3"));
        assert_eq!(config.heading_style(4), None);
        assert_eq!(config.page, PageGeometry::letter());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = RenderConfig::new()
            .with_font("Calibri")
            .with_font_size(10.5)
            .with_heading_style(4, "Heading4")
            .with_data_palette("FFFFFF", "333333");

        assert_eq!(config.font, "Calibri");
        assert_eq!(config.text_defaults().size_pt, 10.5);
        assert_eq!(config.heading_style(4), Some("Heading4"));
        assert_eq!(config.data_cell_style(), CellStyle::new("FFFFFF", "333333"));
    }

    #[test]
    fn test_from_json_partial() {
        let config = RenderConfig::from_json(r#"{"font": "Georgia"}"#).unwrap();
        assert_eq!(config.font, "Georgia");
        assert_eq!(config.header_highlight, "C6EFCE");
    }

    #[test]
    fn test_invalid_color_rejected() {
        let result = RenderConfig::from_json(r##"{"data_highlight": "#FFFACD"}"##);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_heading_level_rejected() {
        let mut config = RenderConfig::default();
        config.heading_styles.insert(7, "Heading7".into());
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
