//! Owned row-major RGB pixel buffer.
//!
//! `PixelGrid` is the value every transform consumes and produces. Pixels are
//! stored interleaved (`r, g, b, r, g, b, ...`) one row after another, the same
//! layout as `image::RgbImage`, so handing a grid to or from the decode
//! collaborator never copies channel data.
//!
//! # Coordinate System
//!
//! - `x` is the column, `y` is the row
//! - Origin is the top-left corner

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::TransformError;
use crate::pixel::Pixel;

/// A width × height grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pixels: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a raw RGB buffer.
    ///
    /// Fails with `GridTooLarge` if `width * height * 3` does not fit in
    /// `usize`, and with `InvalidPixelData` if `pixels.len()` differs from it.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, TransformError> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(TransformError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A 0×0 grid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A grid with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self::from_fn(width, height, |_, _| pixel)
    }

    /// Build a grid by evaluating `f(x, y)` for every coordinate.
    ///
    /// The buffer grows one pixel per coordinate, so its length always matches
    /// the dimensions; a size beyond the address space aborts on allocation.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(byte_len(width, height).unwrap_or(0));
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y).channels());
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a grid from an `image::RgbImage` without copying.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an `image::RgbImage`, cloning the pixel data.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        self.clone().into_rgb_image()
    }

    /// Convert to an `image::RgbImage`, reusing the pixel buffer.
    pub fn into_rgb_image(self) -> image::RgbImage {
        // The buffer length is checked on every construction path.
        image::RgbImage::from_raw(self.width, self.height, self.pixels)
            .unwrap_or_else(|| image::RgbImage::new(0, 0))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / 3
    }

    /// True when the grid holds no pixels (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw interleaved RGB bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Result<Pixel, TransformError> {
        let idx = self.byte_index(x, y)?;
        Ok(self.pixel_at_byte(idx))
    }

    /// Overwrite the pixel at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<(), TransformError> {
        let idx = self.byte_index(x, y)?;
        self.pixels[idx..idx + 3].copy_from_slice(&pixel.channels());
        Ok(())
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.pixels
            .chunks_exact(3)
            .map(|c| Pixel::new(c[0], c[1], c[2]))
    }

    /// Pixel by row-major index. Callers guarantee `index < pixel_count()`.
    #[inline]
    pub(crate) fn pixel_at_index(&self, index: usize) -> Pixel {
        self.pixel_at_byte(index * 3)
    }

    /// Rewrite every pixel in place with `f(index, pixel)`.
    ///
    /// `index` is the row-major pixel index. With the `parallel` feature the
    /// work is split into whole rows, so each worker only writes the rows it
    /// owns and the result is identical to the sequential loop.
    pub(crate) fn update_indexed<F>(&mut self, f: F)
    where
        F: Fn(usize, Pixel) -> Pixel + Sync + Send,
    {
        if self.pixels.is_empty() {
            return;
        }

        #[cfg(feature = "parallel")]
        {
            let width = self.width as usize;
            self.pixels
                .par_chunks_mut(width * 3)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, chunk) in row.chunks_exact_mut(3).enumerate() {
                        write_pixel(chunk, &f, y * width + x);
                    }
                });
        }

        #[cfg(not(feature = "parallel"))]
        for (idx, chunk) in self.pixels.chunks_exact_mut(3).enumerate() {
            write_pixel(chunk, &f, idx);
        }
    }

    /// Rewrite every pixel in place with `f(pixel)`.
    pub(crate) fn update<F>(&mut self, f: F)
    where
        F: Fn(Pixel) -> Pixel + Sync + Send,
    {
        self.update_indexed(|_, pixel| f(pixel));
    }

    /// Collect `f(pixel)` for every pixel, in row-major order.
    pub(crate) fn collect<T, F>(&self, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(Pixel) -> T + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        let values = self
            .pixels
            .par_chunks_exact(3)
            .map(|c| f(Pixel::new(c[0], c[1], c[2])))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let values = self.pixels().map(f).collect();

        values
    }

    fn byte_index(&self, x: u32, y: u32) -> Result<usize, TransformError> {
        if x >= self.width || y >= self.height {
            return Err(TransformError::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * 3)
    }

    #[inline]
    fn pixel_at_byte(&self, idx: usize) -> Pixel {
        Pixel::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        )
    }
}

impl From<image::RgbImage> for PixelGrid {
    fn from(img: image::RgbImage) -> Self {
        Self::from_rgb_image(img)
    }
}

impl From<PixelGrid> for image::RgbImage {
    fn from(grid: PixelGrid) -> Self {
        grid.into_rgb_image()
    }
}

#[inline]
fn write_pixel<F>(chunk: &mut [u8], f: &F, idx: usize)
where
    F: Fn(usize, Pixel) -> Pixel,
{
    let out = f(idx, Pixel::new(chunk[0], chunk[1], chunk[2]));
    chunk.copy_from_slice(&out.channels());
}

/// `width * height * 3`, or `GridTooLarge` when that overflows `usize`
/// (32 bits on wasm32).
fn byte_len(width: u32, height: u32) -> Result<usize, TransformError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|count| count.checked_mul(3))
        .ok_or(TransformError::GridTooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| {
            Pixel::new((x * 10) as u8, (y * 10) as u8, ((x + y) * 5) as u8)
        })
    }

    #[test]
    fn test_new_validates_length() {
        assert!(PixelGrid::new(2, 2, vec![0u8; 12]).is_ok());

        let err = PixelGrid::new(2, 2, vec![0u8; 11]).unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidPixelData {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        // u32::MAX² * 3 overflows even a 64-bit usize
        assert_eq!(
            PixelGrid::new(u32::MAX, u32::MAX, vec![]),
            Err(TransformError::GridTooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_byte_len_checked() {
        assert_eq!(byte_len(4, 3), Ok(36));
        assert_eq!(byte_len(0, u32::MAX), Ok(0));
        assert!(byte_len(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_filled_matches_dimensions() {
        let grid = PixelGrid::filled(4, 3, Pixel::new(1, 2, 3));
        assert_eq!(grid.as_raw().len(), 36);
        assert_eq!(grid.pixel_count(), 12);
        assert!(grid.pixels().all(|p| p == Pixel::new(1, 2, 3)));
    }

    #[test]
    fn test_empty_grid() {
        let grid = PixelGrid::empty();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (0, 0));
        assert_eq!(grid.pixel_count(), 0);
        assert_eq!(grid.pixels().count(), 0);
    }

    #[test]
    fn test_zero_width_grid_is_empty() {
        let grid = PixelGrid::new(0, 7, vec![]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 7);
    }

    #[test]
    fn test_get_and_set() {
        let mut grid = PixelGrid::filled(3, 2, Pixel::BLACK);
        grid.set(2, 1, Pixel::new(1, 2, 3)).unwrap();

        assert_eq!(grid.get(2, 1).unwrap(), Pixel::new(1, 2, 3));
        assert_eq!(grid.get(0, 0).unwrap(), Pixel::BLACK);
        // Row-major: (2, 1) is the last pixel
        assert_eq!(&grid.as_raw()[15..18], &[1, 2, 3]);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = PixelGrid::filled(3, 2, Pixel::BLACK);

        assert_eq!(
            grid.get(3, 0).unwrap_err(),
            TransformError::IndexOutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            }
        );
        assert!(grid.get(0, 2).is_err());
        assert!(grid.set(5, 5, Pixel::WHITE).is_err());
        // Failed set leaves the grid untouched
        assert!(grid.pixels().all(|p| p == Pixel::BLACK));
    }

    #[test]
    fn test_from_fn_layout() {
        let grid = gradient(4, 3);
        assert_eq!(grid.get(3, 2).unwrap(), Pixel::new(30, 20, 25));
        assert_eq!(grid.pixel_at_index(2 * 4 + 3), Pixel::new(30, 20, 25));
    }

    #[test]
    fn test_update_indexed_sees_row_major_index() {
        let mut grid = PixelGrid::filled(5, 3, Pixel::BLACK);
        grid.update_indexed(|idx, _| Pixel::gray(idx as u8));

        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(grid.get(x, y).unwrap(), Pixel::gray((y * 5 + x) as u8));
            }
        }
    }

    #[test]
    fn test_update_indexed_matches_sequential_loop() {
        // Enough rows that the parallel build splits the work
        let source = gradient(37, 29);
        let f = |idx: usize, p: Pixel| {
            Pixel::new(
                p.red.wrapping_add(idx as u8),
                p.green ^ (idx / 7) as u8,
                p.blue.wrapping_mul(3),
            )
        };

        let mut expected = Vec::with_capacity(source.as_raw().len());
        for (idx, pixel) in source.pixels().enumerate() {
            expected.extend_from_slice(&f(idx, pixel).channels());
        }

        let mut grid = source.clone();
        grid.update_indexed(f);
        assert_eq!(grid.as_raw(), expected.as_slice());

        let sums: Vec<u32> = source.collect(|p| p.red as u32 + p.green as u32);
        let sequential: Vec<u32> = source
            .pixels()
            .map(|p| p.red as u32 + p.green as u32)
            .collect();
        assert_eq!(sums, sequential);
    }

    #[test]
    fn test_update_on_empty_grid() {
        let mut grid = PixelGrid::empty();
        grid.update(|_| Pixel::WHITE);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_collect_preserves_order() {
        let grid = gradient(6, 4);
        let reds: Vec<u8> = grid.collect(|p| p.red);
        let expected: Vec<u8> = grid.pixels().map(|p| p.red).collect();
        assert_eq!(reds, expected);
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let grid = gradient(7, 5);
        let img = grid.to_rgb_image();
        assert_eq!(img.dimensions(), (7, 5));
        assert_eq!(img.get_pixel(3, 2).0, grid.get(3, 2).unwrap().channels());

        let back = PixelGrid::from_rgb_image(img);
        assert_eq!(back, grid);
    }
}
