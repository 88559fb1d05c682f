pub mod primitives;
pub mod surface;
pub mod svg;

#[cfg(feature = "egui")]
pub mod egui_surface;

// Re-export main types
pub use primitives::{DrawCommand, RectPrimitive, TextPrimitive};
pub use surface::{DrawSurface, RecordingSurface};
pub use svg::SvgSurface;

#[cfg(feature = "egui")]
pub use egui_surface::EguiSurface;
