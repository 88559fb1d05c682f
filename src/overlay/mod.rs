pub mod controller;

pub use controller::{OverlayController, RedrawStats};
