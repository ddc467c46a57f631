use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sorting orders for deterministic sheet composition.
///
/// Directory listings are not guaranteed sorted, so `NameAsc` is the default;
/// `None` keeps whatever order the caller supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    NameAsc,
    None,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name_asc" => Ok(Self::NameAsc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// Stacking and sheet-layout configuration.
/// Key notes:
///   - `tile_size` is the height of one horizontal slice cut from a source image
///   - `stack_height` is the composite canvas height, independent of slice count
///   - `cell_width`/`cell_height` fix the sheet grid cell; sprite content that
///     does not match is clipped or overlaps silently
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackerConfig {
    /// Height in pixels of one slice cut from a source image.
    pub tile_size: u32,
    /// Height in pixels of the stacked-composite canvas.
    pub stack_height: u32,
    /// Sheet grid cell width in pixels.
    pub cell_width: u32,
    /// Sheet grid cell height in pixels.
    pub cell_height: u32,
    /// Number of sprites per sheet row.
    pub sheet_width: u32,
    #[serde(default = "default_sort_order")]
    pub sort_order: SortOrder,
}

impl Default for StackerConfig {
    fn default() -> Self {
        Self {
            tile_size: 16,
            stack_height: 32,
            cell_width: 16,
            cell_height: 16,
            sheet_width: 12,
            sort_order: default_sort_order(),
        }
    }
}

impl StackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - Cell dimensions are zero
    /// - `tile_size`, `stack_height` or `sheet_width` is zero
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::StackerError;

        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(StackerError::InvalidDimensions {
                width: self.cell_width,
                height: self.cell_height,
            });
        }

        if self.tile_size == 0 {
            return Err(StackerError::InvalidConfig(
                "tile_size must be at least 1".into(),
            ));
        }

        if self.stack_height == 0 {
            return Err(StackerError::InvalidConfig(
                "stack_height must be at least 1".into(),
            ));
        }

        if self.sheet_width == 0 {
            return Err(StackerError::InvalidConfig(
                "sheet_width must be at least 1 sprite per row".into(),
            ));
        }

        Ok(())
    }
}

fn default_sort_order() -> SortOrder {
    SortOrder::NameAsc
}

/// Builder for `StackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct StackerConfigBuilder {
    cfg: StackerConfig,
}

impl StackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: StackerConfig::default(),
        }
    }
    pub fn tile_size(mut self, v: u32) -> Self {
        self.cfg.tile_size = v;
        self
    }
    pub fn stack_height(mut self, v: u32) -> Self {
        self.cfg.stack_height = v;
        self
    }
    pub fn with_cell_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.cell_width = w;
        self.cfg.cell_height = h;
        self
    }
    pub fn sheet_width(mut self, v: u32) -> Self {
        self.cfg.sheet_width = v;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn build(self) -> StackerConfig {
        self.cfg
    }
}

impl StackerConfig {
    /// Create a fluent builder for `StackerConfig`.
    pub fn builder() -> StackerConfigBuilder {
        StackerConfigBuilder::new()
    }
}
