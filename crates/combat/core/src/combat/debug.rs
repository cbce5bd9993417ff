//! Collision debug image.

use crate::config::CombatConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const CLEAR: Self = Self::rgba(0, 0, 0, 0);
    pub const BOX: Self = Self::rgba(0, 0, 0, 255);
    pub const GHOST: Self = Self::rgba(255, 255, 255, 100);
    pub const ORIGIN: Self = Self::rgba(255, 255, 0, 255);
    pub const POINT: Self = Self::rgba(0, 0, 255, 255);
    pub const BOX_HIT: Self = Self::rgba(0, 255, 0, 255);
    pub const PIXEL_HIT: Self = Self::rgba(255, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// RGBA image the collision resolver draws into when debugging is enabled.
///
/// Uploading it as a texture is the renderer's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugImage {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    /// Set whenever a resolution drew a box or pixel hit.
    dirty: bool,
}

impl DebugImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::CLEAR; width as usize * height as usize],
            dirty: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Color::CLEAR);
    }

    /// Sets a pixel; coordinates outside the image are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Draws a one-pixel rectangle outline.
    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        for dx in 0..width {
            self.set_pixel(x + dx, y, color);
            self.set_pixel(x + dx, y + height - 1, color);
        }
        for dy in 0..height {
            self.set_pixel(x, y + dy, color);
            self.set_pixel(x + width - 1, y + dy, color);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns and resets the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }
}

impl Default for DebugImage {
    fn default() -> Self {
        Self::new(
            CombatConfig::DEBUG_IMAGE_WIDTH,
            CombatConfig::DEBUG_IMAGE_HEIGHT,
        )
    }
}
