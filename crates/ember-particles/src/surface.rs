//! Draw surface abstraction and a recording implementation

use crate::image::ImageHandle;

/// 2D canvas that particles draw into.
///
/// Transforms compose in call order and are undone by the matching
/// `restore`. Angles are in degrees, clockwise with +Y down.
pub trait DrawSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, degrees: f32, pivot_x: f32, pivot_y: f32);
    fn scale(&mut self, sx: f32, sy: f32, pivot_x: f32, pivot_y: f32);
    fn draw_image(&mut self, image: &ImageHandle, x: f32, y: f32, alpha: u8);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate {
        dx: f32,
        dy: f32,
    },
    Rotate {
        degrees: f32,
        pivot_x: f32,
        pivot_y: f32,
    },
    Scale {
        sx: f32,
        sy: f32,
        pivot_x: f32,
        pivot_y: f32,
    },
    DrawImage {
        image: ImageHandle,
        x: f32,
        y: f32,
        alpha: u8,
    },
}

/// Surface that records every call, for hosts that replay commands onto
/// their own canvas later in the frame.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of images drawn since the last clear
    pub fn image_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawImage { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for CommandBuffer {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, degrees: f32, pivot_x: f32, pivot_y: f32) {
        self.commands.push(DrawCommand::Rotate {
            degrees,
            pivot_x,
            pivot_y,
        });
    }

    fn scale(&mut self, sx: f32, sy: f32, pivot_x: f32, pivot_y: f32) {
        self.commands.push(DrawCommand::Scale {
            sx,
            sy,
            pivot_x,
            pivot_y,
        });
    }

    fn draw_image(&mut self, image: &ImageHandle, x: f32, y: f32, alpha: u8) {
        self.commands.push(DrawCommand::DrawImage {
            image: *image,
            x,
            y,
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::ImageId;

    #[test]
    fn buffer_records_in_order() {
        let mut buf = CommandBuffer::new();
        let handle = ImageHandle::new(ImageId(1), 8, 8);
        buf.save();
        buf.translate(1.0, 2.0);
        buf.draw_image(&handle, 0.0, 0.0, 200);
        buf.restore();

        assert_eq!(buf.commands().len(), 4);
        assert_eq!(buf.commands()[0], DrawCommand::Save);
        assert_eq!(buf.image_count(), 1);

        let taken = buf.take();
        assert_eq!(taken.last(), Some(&DrawCommand::Restore));
        assert!(buf.commands().is_empty());
    }
}
