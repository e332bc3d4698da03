//! Image utilities
//! The render pass paints into a plain RGBA buffer which is then handed to bevy as a texture.
//! This keeps us from having to use specific bevy types in the physics engine

use bevy::render::{
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::Image,
};

use crate::physics::fallingsand::elements::element::Rgba;
use crate::physics::fallingsand::renderer::CellRenderer;
use crate::physics::fallingsand::util::vectors::PixelRect;

/// Bytes per pixel
const CHANNELS: usize = 4;

/// Representing a raw RGBA image, row major, origin top left
/// Game engine agnostic, full ownership, no lifetimes, not a component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RawImage {
    /// Create a fully transparent image
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn get_width(&self) -> u32 {
        self.width
    }

    pub fn get_height(&self) -> u32 {
        self.height
    }

    pub fn get_pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The color of one pixel, if it exists
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.offset(x, y);
        let p = &self.pixels[start..start + CHANNELS];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Paint every pixel one color
    pub fn clear(&mut self, color: Rgba) {
        let color = color.to_array();
        for pixel in self.pixels.chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Byte offset of a pixel that is known to be in the image
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Convert to a bevy image
    /// Load this into an asset server to get a texture like the following
    /// ```ignore
    /// let image: RawImage = RawImage::new(800, 600);
    /// let image_handle: Handle<Image> = images.add(image.to_bevy_image());
    /// ```
    pub fn to_bevy_image(&self) -> Image {
        let size = Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        };

        Image::new(
            size,
            TextureDimension::D2,
            self.pixels.clone(),
            TextureFormat::Rgba8UnormSrgb,
        )
    }

    /// Overwrite the pixels of an existing bevy image created by [`RawImage::to_bevy_image`]
    pub fn copy_into(&self, image: &mut Image) {
        image.data.clear();
        image.data.extend_from_slice(&self.pixels);
    }
}

impl CellRenderer for RawImage {
    /// An image without pixels has nothing to paint on
    fn is_ready(&self) -> bool {
        !self.pixels.is_empty()
    }

    /// Paints the part of the rectangle that overlaps the image
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        let color = color.to_array();
        let x_end = rect.x.saturating_add(rect.width).min(self.width);
        let y_end = rect.y.saturating_add(rect.height).min(self.height);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                let start = self.offset(x, y);
                self.pixels[start..start + CHANNELS].copy_from_slice(&color);
            }
        }
    }
}
