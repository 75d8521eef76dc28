use crate::constants::mm_to_pt;
use crate::layout::{GridSize, compute_grid};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Flat key-value settings as stored on disk.
///
/// Distances are in millimetres and converted exactly once by
/// [`DeckSettings::layout_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    #[serde(rename = "PAGE_SIZE")]
    pub page_size: String,
    #[serde(rename = "MARGIN_MM")]
    pub margin_mm: f32,
    #[serde(rename = "GAP_MM")]
    pub gap_mm: f32,
    #[serde(rename = "CARD_WIDTH_MM")]
    pub card_width_mm: f32,
    #[serde(rename = "CARD_HEIGHT_MM")]
    pub card_height_mm: f32,
    /// Rotation applied to back pages only
    #[serde(rename = "PAGE_ROTATION_DEG")]
    pub page_rotation_deg: f32,
    #[serde(rename = "BACK_OFFSET_MM")]
    pub back_offset_mm: f32,
    #[serde(rename = "VERTICAL_BACK_OFFSET_MM")]
    pub vertical_back_offset_mm: f32,
    #[serde(rename = "BACK_OVERSIZE_MM")]
    pub back_oversize_mm: f32,
    #[serde(rename = "GUIDED_LINES")]
    pub guided_lines: bool,
    #[serde(rename = "CROSS_CALIBRATOR")]
    pub cross_calibrator: bool,
    #[serde(rename = "BLANK_BACK")]
    pub blank_back: bool,
    #[serde(rename = "PAGES_INTERCALATION")]
    pub pages_intercalation: bool,
    #[serde(rename = "DEFAULT_BACK", skip_serializing_if = "Option::is_none")]
    pub default_back: Option<PathBuf>,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            page_size: PaperSize::A4.name().to_string(),
            margin_mm: 5.0,
            gap_mm: 0.0,
            card_width_mm: 63.0,
            card_height_mm: 88.0,
            page_rotation_deg: 0.0,
            back_offset_mm: 0.0,
            vertical_back_offset_mm: 0.0,
            back_oversize_mm: 0.0,
            guided_lines: false,
            cross_calibrator: false,
            blank_back: true,
            pages_intercalation: false,
            default_back: None,
        }
    }
}

impl DeckSettings {
    /// Load settings from a JSON file; missing keys take their defaults
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let settings = serde_json::from_slice(&bytes)
            .map_err(|e| DeckError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DeckError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Build the validated layout configuration, converting millimetres to points
    pub fn layout_config(&self) -> Result<LayoutConfig> {
        let (width_mm, height_mm) = PaperSize::from_name(&self.page_size)?.dimensions_mm();

        let config = LayoutConfig {
            page_width: mm_to_pt(width_mm),
            page_height: mm_to_pt(height_mm),
            margin: mm_to_pt(self.margin_mm),
            gap: mm_to_pt(self.gap_mm),
            card_width: mm_to_pt(self.card_width_mm),
            card_height: mm_to_pt(self.card_height_mm),
            rotation_deg: self.page_rotation_deg,
            back_offset_x: mm_to_pt(self.back_offset_mm),
            back_offset_y: mm_to_pt(self.vertical_back_offset_mm),
            back_oversize: mm_to_pt(self.back_oversize_mm),
            guide_lines: self.guided_lines,
            crosshairs: self.cross_calibrator,
            blank_back: self.blank_back,
            order: if self.pages_intercalation {
                DocumentOrder::Interleaved
            } else {
                DocumentOrder::Sequential
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Back-matching policy for the deck parser
    pub fn back_policy(&self) -> BackPolicy {
        BackPolicy {
            default_back: self.default_back.clone(),
            blank_back: self.blank_back,
        }
    }
}

/// What to put behind a front that has no matching back file
#[derive(Debug, Clone, PartialEq)]
pub struct BackPolicy {
    pub default_back: Option<PathBuf>,
    /// Use a blank back when there is no default; otherwise fail
    pub blank_back: bool,
}

impl Default for BackPolicy {
    fn default() -> Self {
        Self {
            default_back: None,
            blank_back: true,
        }
    }
}

/// Immutable layout configuration. All distances are in points.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub gap: f32,
    pub card_width: f32,
    pub card_height: f32,
    /// Degrees, applied to back pages only
    pub rotation_deg: f32,
    pub back_offset_x: f32,
    pub back_offset_y: f32,
    pub back_oversize: f32,
    pub guide_lines: bool,
    pub crosshairs: bool,
    pub blank_back: bool,
    pub order: DocumentOrder,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let (width_mm, height_mm) = PaperSize::A4.dimensions_mm();
        Self {
            page_width: mm_to_pt(width_mm),
            page_height: mm_to_pt(height_mm),
            margin: mm_to_pt(5.0),
            gap: 0.0,
            card_width: mm_to_pt(63.0),
            card_height: mm_to_pt(88.0),
            rotation_deg: 0.0,
            back_offset_x: 0.0,
            back_offset_y: 0.0,
            back_oversize: 0.0,
            guide_lines: false,
            crosshairs: false,
            blank_back: true,
            order: DocumentOrder::Sequential,
        }
    }
}

impl LayoutConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(DeckError::Config("Page size must be positive".to_string()));
        }
        if self.card_width <= 0.0 || self.card_height <= 0.0 {
            return Err(DeckError::Config("Card size must be positive".to_string()));
        }
        if self.margin < 0.0 || self.gap < 0.0 || self.back_oversize < 0.0 {
            return Err(DeckError::Config(
                "Margin, gap and back oversize must not be negative".to_string(),
            ));
        }

        let usable_width = self.page_width - 2.0 * self.margin;
        let usable_height = self.page_height - 2.0 * self.margin;
        if usable_width < self.card_width || usable_height < self.card_height {
            return Err(DeckError::Config(format!(
                "A {:.1}x{:.1}pt card does not fit inside the {:.1}x{:.1}pt printable area",
                self.card_width, self.card_height, usable_width, usable_height
            )));
        }

        Ok(())
    }

    /// Number of columns and rows that fit on one page
    pub fn grid(&self) -> GridSize {
        compute_grid(
            self.page_width,
            self.page_height,
            self.margin,
            self.gap,
            self.card_width,
            self.card_height,
        )
    }
}
