pub mod events;

pub use events::{EventKind, EventManager, MapEvent};
