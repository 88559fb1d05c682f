//! Fluent builder for [`TickConfig`]
//!
//! The builder doubles as the serialized form of a configuration: every field
//! is optional in JSON and falls back to the documented default.

use crate::{
    core::{
        config::{EdgeOffsets, TickConfig},
        constants::{
            DEFAULT_FONT_SIZE, DEFAULT_LABEL_OFFSET, DEFAULT_MAJOR_DIVIDER, DEFAULT_MAJOR_SIZE,
            DEFAULT_MINOR_COUNT, DEFAULT_MINOR_SIZE,
        },
    },
    Result,
};
use serde::{Deserialize, Serialize};

/// Builder for creating validated [`TickConfig`] values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickConfigBuilder {
    minor_count: usize,
    major_divider: usize,
    minor_size: f64,
    major_size: f64,
    font_size: f64,
    label_offset: f64,
    enable_lat: bool,
    enable_lng: bool,
    offsets: EdgeOffsets,
    hemisphere_labels: bool,
}

impl TickConfigBuilder {
    /// Create a new builder holding the default ruler layout
    pub fn new() -> Self {
        Self {
            minor_count: DEFAULT_MINOR_COUNT,
            major_divider: DEFAULT_MAJOR_DIVIDER,
            minor_size: DEFAULT_MINOR_SIZE,
            major_size: DEFAULT_MAJOR_SIZE,
            font_size: DEFAULT_FONT_SIZE,
            label_offset: DEFAULT_LABEL_OFFSET,
            enable_lat: true,
            enable_lng: true,
            offsets: EdgeOffsets::default(),
            hemisphere_labels: true,
        }
    }

    /// Set the total number of minor steps and how many majors they split into
    pub fn with_steps(mut self, minor_count: usize, major_divider: usize) -> Self {
        self.minor_count = minor_count;
        self.major_divider = major_divider;
        self
    }

    /// Set minor and major tick lengths in pixels
    pub fn with_tick_sizes(mut self, minor_size: f64, major_size: f64) -> Self {
        self.minor_size = minor_size;
        self.major_size = major_size;
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_label_offset(mut self, label_offset: f64) -> Self {
        self.label_offset = label_offset;
        self
    }

    /// Enable or disable the latitude ruler on the left edge
    pub fn with_latitude(mut self, enabled: bool) -> Self {
        self.enable_lat = enabled;
        self
    }

    /// Enable or disable the longitude ruler on the bottom edge
    pub fn with_longitude(mut self, enabled: bool) -> Self {
        self.enable_lng = enabled;
        self
    }

    pub fn with_offsets(mut self, offsets: EdgeOffsets) -> Self {
        self.offsets = offsets;
        self
    }

    /// Use N/S/E/W prefixes (true) or a leading minus sign (false) in labels
    pub fn with_hemisphere_labels(mut self, enabled: bool) -> Self {
        self.hemisphere_labels = enabled;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<TickConfig> {
        let config = self.into_unchecked();
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn into_unchecked(self) -> TickConfig {
        TickConfig {
            minor_count: self.minor_count,
            major_divider: self.major_divider,
            minor_size: self.minor_size,
            major_size: self.major_size,
            font_size: self.font_size,
            label_offset: self.label_offset,
            enable_lat: self.enable_lat,
            enable_lng: self.enable_lng,
            offsets: self.offsets,
            hemisphere_labels: self.hemisphere_labels,
        }
    }
}

impl Default for TickConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<TickConfig> for TickConfigBuilder {
    fn from(config: TickConfig) -> Self {
        Self {
            minor_count: config.minor_count,
            major_divider: config.major_divider,
            minor_size: config.minor_size,
            major_size: config.major_size,
            font_size: config.font_size,
            label_offset: config.label_offset,
            enable_lat: config.enable_lat,
            enable_lng: config.enable_lng,
            offsets: config.offsets,
            hemisphere_labels: config.hemisphere_labels,
        }
    }
}
