//! Pixel strip: the shared canvas every actor draws into
//!
//! Direct accessors are bounds-checked and report [`StripError`]; indexing
//! panics. Entities use the `*_clipped` helpers with signed positions and
//! are responsible for keeping their own draw positions sensible.

use core::ops::{Index, IndexMut};

use crate::{
    color::{BLACK, Rgb, add_colors, nscale8},
    error::StripError,
};

/// Fixed-length LED strip backed by a `MAX_LEDS` buffer
#[derive(Debug, Clone)]
pub struct PixelStrip<const MAX_LEDS: usize> {
    pixels: [Rgb; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> PixelStrip<MAX_LEDS> {
    /// Create a strip of `len` pixels, all set to `fill`
    pub fn new(len: usize, fill: Rgb) -> Result<Self, StripError> {
        if len == 0 {
            return Err(StripError::ZeroLength);
        }
        if len > MAX_LEDS {
            return Err(StripError::TooLong {
                len,
                capacity: MAX_LEDS,
            });
        }
        Ok(Self {
            pixels: [fill; MAX_LEDS],
            len,
        })
    }

    /// Number of pixels in the strip
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; a strip holds at least one pixel
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the last pixel as a signed position
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn last_position(&self) -> i32 {
        self.len as i32 - 1
    }

    /// Visible pixels
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    /// Visible pixels, mutable
    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.len]
    }

    /// Read one pixel
    pub fn get(&self, index: usize) -> Result<Rgb, StripError> {
        self.check(index)?;
        Ok(self.pixels[index])
    }

    /// Overwrite one pixel
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<(), StripError> {
        self.check(index)?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Add `color` onto one pixel, each channel rolling over at 255
    pub fn add(&mut self, index: usize, color: Rgb) -> Result<(), StripError> {
        self.check(index)?;
        self.pixels[index] = add_colors(self.pixels[index], color);
        Ok(())
    }

    /// Add the color of pixel `from` onto pixel `to`
    pub fn add_pixel(&mut self, to: usize, from: usize) -> Result<(), StripError> {
        let color = self.get(from)?;
        self.add(to, color)
    }

    /// Darken one pixel by `scale / 255`
    pub fn nscale8(&mut self, index: usize, scale: u8) -> Result<(), StripError> {
        self.check(index)?;
        self.pixels[index] = nscale8(self.pixels[index], scale);
        Ok(())
    }

    /// Darken every pixel by `scale / 255`
    pub fn nscale8_all(&mut self, scale: u8) {
        for pixel in self.as_mut_slice() {
            *pixel = nscale8(*pixel, scale);
        }
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb) {
        for pixel in self.as_mut_slice() {
            *pixel = color;
        }
    }

    /// Clamp a signed position onto the strip
    #[allow(clippy::cast_sign_loss)]
    pub fn clamp_position(&self, position: i32) -> usize {
        position.clamp(0, self.last_position()) as usize
    }

    /// Convert a signed position to an index, if it is on the strip
    pub fn index_of(&self, position: i32) -> Option<usize> {
        usize::try_from(position).ok().filter(|&i| i < self.len)
    }

    /// Overwrite the pixel at `position`, skipping positions off the strip
    pub fn paint_clipped(&mut self, position: i32, color: Rgb) {
        if let Some(index) = self.index_of(position) {
            self.pixels[index] = color;
        }
    }

    /// Add onto the pixel at `position`, skipping positions off the strip
    pub fn add_clipped(&mut self, position: i32, color: Rgb) {
        if let Some(index) = self.index_of(position) {
            self.pixels[index] = add_colors(self.pixels[index], color);
        }
    }

    const fn check(&self, index: usize) -> Result<(), StripError> {
        if index < self.len {
            Ok(())
        } else {
            Err(StripError::OutOfRange {
                index,
                len: self.len,
            })
        }
    }
}

impl<const MAX_LEDS: usize> Index<usize> for PixelStrip<MAX_LEDS> {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.as_slice()[index]
    }
}

impl<const MAX_LEDS: usize> IndexMut<usize> for PixelStrip<MAX_LEDS> {
    fn index_mut(&mut self, index: usize) -> &mut Rgb {
        &mut self.as_mut_slice()[index]
    }
}
