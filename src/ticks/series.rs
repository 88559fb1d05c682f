use serde::{Deserialize, Serialize};

/// Which ruler a tick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left edge, bottom to top
    Latitude,
    /// Bottom edge, left to right
    Longitude,
}

impl Axis {
    /// Hemisphere letter for a value on this axis
    pub fn hemisphere(self, negative: bool) -> char {
        match (self, negative) {
            (Axis::Latitude, false) => 'N',
            (Axis::Latitude, true) => 'S',
            (Axis::Longitude, false) => 'E',
            (Axis::Longitude, true) => 'W',
        }
    }
}

/// One tick rectangle in container pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickDescriptor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub axis: Axis,
    pub major: bool,
}

/// Text attached to a major tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDescriptor {
    pub x: f64,
    pub y: f64,
    /// Clockwise rotation in degrees around `(x, y)`
    pub rotation: f64,
    pub font_size: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Step index, `0..=minor_count`
    pub index: usize,
    /// Interpolated latitude or longitude in degrees
    pub value: f64,
    pub tick: TickDescriptor,
    pub label: Option<LabelDescriptor>,
}

/// Ticks of one ruler for one viewport state, ordered by step index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    axis: Axis,
    entries: Vec<SeriesEntry>,
}

impl Series {
    pub(crate) fn with_capacity(axis: Axis, capacity: usize) -> Self {
        Self {
            axis,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, entry: SeriesEntry) {
        self.entries.push(entry);
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SeriesEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn majors(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.entries.iter().filter(|entry| entry.tick.major)
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelDescriptor> {
        self.entries.iter().filter_map(|entry| entry.label.as_ref())
    }

    pub fn label_count(&self) -> usize {
        self.labels().count()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SeriesEntry;
    type IntoIter = std::slice::Iter<'a, SeriesEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Series {
    type Item = SeriesEntry;
    type IntoIter = std::vec::IntoIter<SeriesEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
