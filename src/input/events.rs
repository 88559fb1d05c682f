use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Map event types that can be emitted by the host map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// Map finished loading; fires once
    Ready { size: Point },
    /// Map view has changed (center or zoom)
    ViewChanged { center: LatLng, zoom: f64 },
    /// Container was resized
    Resize { size: Point },
    /// Pointer moved over the map
    MouseMove { lat_lng: LatLng, pixel: Point },
}

/// Discriminant of a [`MapEvent`], used to register listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Ready,
    ViewChanged,
    Resize,
    MouseMove,
}

impl MapEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            MapEvent::Ready { .. } => EventKind::Ready,
            MapEvent::ViewChanged { .. } => EventKind::ViewChanged,
            MapEvent::Resize { .. } => EventKind::Resize,
            MapEvent::MouseMove { .. } => EventKind::MouseMove,
        }
    }

    /// Whether the event changes what is visible in the container
    pub fn changes_viewport(&self) -> bool {
        matches!(self, MapEvent::ViewChanged { .. } | MapEvent::Resize { .. })
    }
}

type EventCallback = Box<dyn FnMut(&MapEvent)>;

/// FIFO queue of map events plus per-kind listeners.
///
/// Events are delivered strictly in emission order; listeners for one event
/// all run before the next event is looked at.
#[derive(Default)]
pub struct EventManager {
    listeners: HashMap<EventKind, Vec<EventCallback>>,
    event_queue: VecDeque<MapEvent>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener
    pub fn on<F>(&mut self, kind: EventKind, callback: F)
    where
        F: FnMut(&MapEvent) + 'static,
    {
        self.listeners.entry(kind).or_default().push(Box::new(callback));
    }

    /// Emit an event to the queue
    pub fn emit(&mut self, event: MapEvent) {
        self.event_queue.push_back(event);
    }

    /// Drain the queue, notifying listeners, and hand the events back in order
    pub fn process_events(&mut self) -> Vec<MapEvent> {
        let events: Vec<_> = self.event_queue.drain(..).collect();

        for event in &events {
            if let Some(callbacks) = self.listeners.get_mut(&event.kind()) {
                for callback in callbacks.iter_mut() {
                    callback(event);
                }
            }
        }

        events
    }

    pub fn pending(&self) -> usize {
        self.event_queue.len()
    }

    /// Clear all events from the queue
    pub fn clear_events(&mut self) {
        self.event_queue.clear();
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("listener_kinds", &self.listeners.keys().collect::<Vec<_>>())
            .field("event_queue", &self.event_queue)
            .finish()
    }
}
