//! Canvas Surface Module
//! Named offscreen RGB pixel surfaces standing in for the host page's canvas
//! elements, plus the 2D drawing context handed to the chart engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("canvas element not found: {0}")]
    NotFound(String),
}

const BYTES_PER_PIXEL: usize = 3;
const BACKGROUND: u8 = 0xff;

/// An offscreen drawing surface with a stable id.
///
/// Pixels are tightly packed RGB, row-major, white by default.
#[derive(Debug)]
pub struct Canvas {
    id: String,
    width: u32,
    height: u32,
    buf: Vec<u8>,
}

impl Canvas {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        let buf = vec![BACKGROUND; width as usize * height as usize * BYTES_PER_PIXEL];
        Self {
            id: id.into(),
            width,
            height,
            buf,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Acquire the 2D drawing context. Returns `None` when the surface has no
    /// drawable area, which callers treat as a non-fatal degrade-to-blank.
    pub fn context_2d(&mut self) -> Option<Context2d<'_>> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(Context2d {
            width: self.width,
            height: self.height,
            buf: &mut self.buf,
        })
    }

    /// Reset every pixel to the white background.
    pub fn clear(&mut self) {
        self.buf.fill(BACKGROUND);
    }

    /// Raw RGB pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.buf
    }

    /// True when no pixel differs from the background.
    pub fn is_blank(&self) -> bool {
        self.buf.iter().all(|&b| b == BACKGROUND)
    }
}

/// Exclusive 2D drawing handle over a canvas buffer.
pub struct Context2d<'a> {
    width: u32,
    height: u32,
    buf: &'a mut [u8],
}

impl Context2d<'_> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_available_on_sized_surface() {
        let mut canvas = Canvas::new("c", 10, 10);
        assert!(canvas.context_2d().is_some());
    }

    #[test]
    fn context_unavailable_on_zero_sized_surface() {
        let mut canvas = Canvas::new("c", 0, 10);
        assert!(canvas.context_2d().is_none());
        let mut canvas = Canvas::new("c", 10, 0);
        assert!(canvas.context_2d().is_none());
    }

    #[test]
    fn clear_restores_blank_surface() {
        let mut canvas = Canvas::new("c", 4, 4);
        {
            let mut ctx = canvas.context_2d().unwrap();
            ctx.buffer_mut()[0] = 0;
        }
        assert!(!canvas.is_blank());
        canvas.clear();
        assert!(canvas.is_blank());
    }
}
