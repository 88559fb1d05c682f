use crate::{
    core::geo::Point,
    rendering::{
        primitives::{DrawCommand, RectPrimitive, TextPrimitive},
        surface::DrawSurface,
    },
    Result,
};
use egui::{epaint::TextShape, Color32, FontId, Painter, Pos2, Rect, Shape, Vec2};

/// Surface that replays its primitives onto an egui [`Painter`] every frame.
#[derive(Debug, Clone)]
pub struct EguiSurface {
    size: Point,
    drawing_queue: Vec<DrawCommand>,
    color: Color32,
}

impl EguiSurface {
    pub fn new(color: Color32) -> Self {
        Self {
            size: Point::default(),
            drawing_queue: Vec::new(),
            color,
        }
    }

    pub fn size(&self) -> Point {
        self.size
    }

    /// Paints the primitives with the container's top-left corner at `origin`
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        for command in &self.drawing_queue {
            match command {
                DrawCommand::Rect(rect) => {
                    let min = origin + Vec2::new(rect.x as f32, rect.y as f32);
                    let size = Vec2::new(rect.width as f32, rect.height as f32);
                    painter.rect_filled(Rect::from_min_size(min, size), 0.0, self.color);
                }
                DrawCommand::Text(text) => {
                    painter.add(self.text_shape(painter, origin, text));
                }
            }
        }
    }

    fn text_shape(&self, painter: &Painter, origin: Pos2, text: &TextPrimitive) -> Shape {
        let galley = painter.layout_no_wrap(
            text.text.clone(),
            FontId::proportional(text.font_size_px as f32),
            self.color,
        );
        // primitives are anchored on the baseline; egui anchors galleys at their top-left
        let angle = text.rotation_deg.to_radians() as f32;
        let height = galley.size().y;
        let anchor = origin + Vec2::new(text.x as f32, text.y as f32);
        let pos = anchor + Vec2::new(height * angle.sin(), -height * angle.cos());

        let mut shape = TextShape::new(pos, galley, self.color);
        shape.angle = angle;
        Shape::Text(shape)
    }
}

impl Default for EguiSurface {
    fn default() -> Self {
        Self::new(Color32::BLACK)
    }
}

impl DrawSurface for EguiSurface {
    fn attach(&mut self, size: Point) -> Result<()> {
        self.size = size;
        Ok(())
    }

    fn clear(&mut self) {
        self.drawing_queue.clear();
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
