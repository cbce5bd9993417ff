use crate::config::CombatConfig;

/// Palette-index mask of a single animation sprite.
///
/// Rows are stored top to bottom relative to the sprite's anchor; the anchor
/// offset places the sprite's top-left corner relative to the owner's
/// position when facing right.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteMask {
    pub anchor_x: i32,
    pub anchor_y: i32,
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl SpriteMask {
    pub fn new(anchor_x: i32, anchor_y: i32, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            anchor_x,
            anchor_y,
            width,
            height,
            pixels,
        }
    }

    /// A fully transparent mask.
    pub fn transparent(anchor_x: i32, anchor_y: i32, width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self::new(anchor_x, anchor_y, width, height, vec![0; len])
    }

    /// Returns true if `value` is a palette index belonging to the fighter.
    pub const fn is_solid_value(value: u8) -> bool {
        value > 0 && value < CombatConfig::SOLID_MASK_LIMIT
    }

    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_consistent(&self) -> bool {
        self.pixels.len() == self.expected_len()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mask value at sprite-local `(x, y)`, or `None` outside the sprite.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.pixel(x, y).is_some_and(Self::is_solid_value)
    }

    /// Sets a single mask value; out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            let index = y as usize * self.width as usize + x as usize;
            if let Some(pixel) = self.pixels.get_mut(index) {
                *pixel = value;
            }
        }
    }

    /// Iterates over the sprite-local coordinates of every solid pixel.
    pub fn solid_pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width.max(1) as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, value)| Self::is_solid_value(**value))
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }
}
