use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page layout configuration applied to every composed page
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    // Page
    pub page_size: PageSize,
    pub orientation: Orientation,

    // Margins and colors
    pub margins: Margins,
    pub margin_color: RgbColor,
    pub background_color: RgbColor,

    // Image placement
    pub overflow: OverflowPolicy,
    pub embedding: ImageEmbedding,
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes).map_err(|e| {
            ComposeError::InvalidConfiguration(format!("Failed to parse config: {}", e))
        })?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ComposeError::InvalidConfiguration(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page width and height in millimeters, orientation applied
    pub fn page_dimensions_mm(&self) -> (f32, f32) {
        self.page_size.dimensions_with_orientation(self.orientation)
    }

    /// Content area width and height in millimeters.
    /// Not validated; may be zero or negative.
    pub fn content_dimensions_mm(&self) -> (f32, f32) {
        let (width, height) = self.page_dimensions_mm();
        (
            width - self.margins.left_mm - self.margins.right_mm,
            height - self.margins.top_mm - self.margins.bottom_mm,
        )
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        for (side, value) in self.margins.sides() {
            if !value.is_finite() || value < 0.0 {
                return Err(ComposeError::InvalidConfiguration(format!(
                    "The {} margin must be a non-negative number of millimeters, got {}",
                    side, value
                )));
            }
        }

        let (page_width, page_height) = self.page_dimensions_mm();
        let (content_width, content_height) = self.content_dimensions_mm();

        if content_width <= 0.0 {
            return Err(ComposeError::InvalidConfiguration(format!(
                "Left and right margins ({} + {} mm) leave no room on a {} mm wide {} page",
                self.margins.left_mm,
                self.margins.right_mm,
                page_width,
                self.page_size.name()
            )));
        }

        if content_height <= 0.0 {
            return Err(ComposeError::InvalidConfiguration(format!(
                "Top and bottom margins ({} + {} mm) leave no room on a {} mm tall {} page",
                self.margins.top_mm,
                self.margins.bottom_mm,
                page_height,
                self.page_size.name()
            )));
        }

        Ok(())
    }
}
