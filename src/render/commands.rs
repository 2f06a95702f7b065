use crate::game::Cell;

/// Rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A single draw primitive, in grid coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Playing field, covering `width` x `height` cells
    Background { width: i32, height: i32 },
    Food(Cell),
    Segment { cell: Cell, head: bool },
    /// Debug text anchored at a character position
    Text { x: u16, y: u16, text: String },
}

impl DrawCommand {
    /// Pixel rectangle covered by this command, for pixel-space backends.
    ///
    /// Text, cells left of or above the origin, and rectangles that do not
    /// fit in `u32` pixel coordinates have no rectangle.
    pub fn pixel_rect(&self, cell_size: u32) -> Option<PixelRect> {
        match self {
            DrawCommand::Background { width, height } => Some(PixelRect {
                x: 0,
                y: 0,
                width: u32::try_from(*width).ok()?.checked_mul(cell_size)?,
                height: u32::try_from(*height).ok()?.checked_mul(cell_size)?,
            }),
            DrawCommand::Food(cell) | DrawCommand::Segment { cell, .. } => Some(PixelRect {
                x: u32::try_from(cell.x).ok()?.checked_mul(cell_size)?,
                y: u32::try_from(cell.y).ok()?.checked_mul(cell_size)?,
                width: cell_size,
                height: cell_size,
            }),
            DrawCommand::Text { .. } => None,
        }
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_size: u32,
    /// Commands in paint order: background, food, body (tail to head), text
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    pub fn food(&self) -> Option<Cell> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Food(cell) => Some(*cell),
            _ => None,
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Segment { cell, head } => Some((*cell, *head)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
