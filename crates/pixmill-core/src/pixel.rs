//! A single RGB pixel with saturating constructors.

use serde::{Deserialize, Serialize};

/// One RGB sample. Channels are always in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::gray(0);
    pub const WHITE: Pixel = Pixel::gray(255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// A pixel with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Build a pixel from wide integers, saturating each channel into `0..=255`.
    #[inline]
    pub fn from_clamped_i32(red: i32, green: i32, blue: i32) -> Self {
        Self::new(clamp_channel(red), clamp_channel(green), clamp_channel(blue))
    }

    /// Build a pixel from real-valued channels.
    ///
    /// Each value is truncated toward zero and then saturated into `0..=255`.
    #[inline]
    pub fn from_truncated_f64(red: f64, green: f64, blue: f64) -> Self {
        Self::new(
            truncate_channel(red),
            truncate_channel(green),
            truncate_channel(blue),
        )
    }

    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    #[inline]
    pub fn from_channels(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map_channels(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(channels: [u8; 3]) -> Self {
        Self::from_channels(channels)
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.channels()
    }
}

#[inline]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Float-to-int `as` casts saturate and map NaN to zero.
#[inline]
fn truncate_channel(value: f64) -> u8 {
    value.trunc().clamp(0.0, 255.0) as u8
}
