use crate::{
    ticks::series::{LabelDescriptor, TickDescriptor},
    GeoTickError, Result,
};
use serde::{Deserialize, Serialize};

/// Filled axis-aligned rectangle in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectPrimitive {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GeoTickError::InvalidPrimitive(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(GeoTickError::InvalidPrimitive(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl From<&TickDescriptor> for RectPrimitive {
    fn from(tick: &TickDescriptor) -> Self {
        Self::new(tick.x, tick.y, tick.width, tick.height)
    }
}

/// Text anchored at its baseline start `(x, y)`, rotated around that point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Clockwise degrees in screen space
    pub rotation_deg: f64,
    pub font_size_px: f64,
}

impl TextPrimitive {
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        rotation_deg: f64,
        font_size_px: f64,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            rotation_deg,
            font_size_px,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(GeoTickError::InvalidPrimitive(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(GeoTickError::InvalidPrimitive(
                "text position and rotation must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(GeoTickError::InvalidPrimitive(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl From<LabelDescriptor> for TextPrimitive {
    fn from(label: LabelDescriptor) -> Self {
        Self::new(label.text, label.x, label.y, label.rotation, label.font_size)
    }
}

/// Commands that can be issued to a drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> Result<()> {
        match self {
            DrawCommand::Rect(rect) => rect.validate(),
            DrawCommand::Text(text) => text.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticks::series::Axis;

    #[test]
    fn test_rect_from_tick() {
        let tick = TickDescriptor {
            x: 0.0,
            y: 42.5,
            width: 20.0,
            height: 1.0,
            axis: Axis::Latitude,
            major: true,
        };
        assert_eq!(RectPrimitive::from(&tick), RectPrimitive::new(0.0, 42.5, 20.0, 1.0));
    }

    #[test]
    fn test_text_from_label() {
        let label = LabelDescriptor {
            x: 10.0,
            y: 20.0,
            rotation: -45.0,
            font_size: 12.0,
            text: "E 1° 0' 0.0\"".to_owned(),
        };
        let text = TextPrimitive::from(label);
        assert_eq!(text.rotation_deg, -45.0);
        assert_eq!(text.font_size_px, 12.0);
        assert!(text.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_finite() {
        assert!(RectPrimitive::new(f64::NAN, 0.0, 1.0, 1.0).validate().is_err());
        assert!(RectPrimitive::new(0.0, 0.0, -1.0, 1.0).validate().is_err());
        assert!(TextPrimitive::new("", 0.0, 0.0, 0.0, 12.0).validate().is_err());
        assert!(TextPrimitive::new("x", 0.0, f64::INFINITY, 0.0, 12.0)
            .validate()
            .is_err());
        assert!(TextPrimitive::new("x", 0.0, 0.0, 0.0, 0.0).validate().is_err());
        assert!(DrawCommand::Rect(RectPrimitive::new(1.0, 2.0, 3.0, 4.0))
            .validate()
            .is_ok());
    }
}
