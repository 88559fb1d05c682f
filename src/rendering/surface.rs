use crate::{
    core::geo::Point,
    rendering::primitives::{DrawCommand, RectPrimitive, TextPrimitive},
    Result,
};

/// Contract implemented by anything the overlay can draw on.
///
/// A surface holds the primitives of exactly one redraw: `clear` drops all of
/// them and the following `draw_*` calls rebuild the picture from scratch.
pub trait DrawSurface {
    /// Places the surface over a map container of `size` pixels
    fn attach(&mut self, size: Point) -> Result<()>;

    /// Removes every primitive drawn so far
    fn clear(&mut self);

    fn draw_rect(&mut self, rect: RectPrimitive) -> Result<()>;

    fn draw_text(&mut self, text: TextPrimitive) -> Result<()>;
}

/// In-memory surface used by tests and headless embedding.
///
/// It still validates every primitive so tests catch invalid geometry
/// before a real backend does.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    size: Option<Point>,
    drawing_queue: Vec<DrawCommand>,
    attach_count: usize,
    clear_count: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container size given at the last `attach`
    pub fn size(&self) -> Option<Point> {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.drawing_queue
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.drawing_queue.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            DrawCommand::Text(_) => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.drawing_queue.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            DrawCommand::Rect(_) => None,
        })
    }

    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn is_empty(&self) -> bool {
        self.drawing_queue.is_empty()
    }
}

impl DrawSurface for RecordingSurface {
    fn attach(&mut self, size: Point) -> Result<()> {
        self.size = Some(size);
        self.attach_count += 1;
        Ok(())
    }

    fn clear(&mut self) {
        self.drawing_queue.clear();
        self.clear_count += 1;
    }

    fn draw_rect(&mut self, rect: RectPrimitive) -> Result<()> {
        rect.validate()?;
        self.drawing_queue.push(DrawCommand::Rect(rect));
        Ok(())
    }

    fn draw_text(&mut self, text: TextPrimitive) -> Result<()> {
        text.validate()?;
        self.drawing_queue.push(DrawCommand::Text(text));
        Ok(())
    }
}
