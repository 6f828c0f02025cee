//! Image decoding and the pixel views the analysers work on

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage, imageops};
use ndarray::Array2;

use crate::color::space::Rgb;
use crate::io::configuration::PALETTE_THUMBNAIL_EDGE;
use crate::io::error::{Result, ThemeError};

/// MIME type of the bytes produced by [`SourceImage::encode_png`]
pub const PNG_MIME_TYPE: &str = "image/png";

/// A decoded RGB image with a label for diagnostics
#[derive(Debug, Clone)]
pub struct SourceImage {
    label: String,
    pixels: RgbImage,
}

impl SourceImage {
    /// Decode an image file, dropping any alpha channel
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a supported
    /// image format
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let decoded = image::open(&path_buf).map_err(|e| ThemeError::ImageLoad {
            path: path_buf.clone(),
            source: e,
        })?;

        Ok(Self {
            label: path_buf.display().to_string(),
            pixels: decoded.to_rgb8(),
        })
    }

    /// Wrap an already decoded buffer
    pub fn from_rgb(label: impl Into<String>, pixels: RgbImage) -> Self {
        Self {
            label: label.into(),
            pixels,
        }
    }

    /// Name used in warnings and per-image records
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Luma array indexed `[row, col]` using ITU-R 601-2 integer weights
    pub fn grayscale(&self) -> Array2<u8> {
        let (width, height) = self.pixels.dimensions();
        let mut gray = Array2::zeros((height as usize, width as usize));

        for (x, y, pixel) in self.pixels.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            let luma = (u32::from(r) * 19_595 + u32::from(g) * 38_470 + u32::from(b) * 7_471
                + 0x8000)
                >> 16;
            if let Some(cell) = gray.get_mut((y as usize, x as usize)) {
                *cell = u8::try_from(luma).unwrap_or(u8::MAX);
            }
        }

        gray
    }

    /// Mean of each channel over all pixels, or `None` for an empty image
    pub fn average_rgb(&self) -> Option<[f64; 3]> {
        let count = self.pixels.pixels().len();
        if count == 0 {
            return None;
        }

        let mut sums = [0_u64; 3];
        for pixel in self.pixels.pixels() {
            for (sum, &channel) in sums.iter_mut().zip(&pixel.0) {
                *sum += u64::from(channel);
            }
        }

        Some(sums.map(|sum| sum as f64 / count as f64))
    }

    /// Pixels of a thumbnail no larger than the palette sampling edge
    ///
    /// Aspect ratio is preserved and small images are never upscaled.
    pub fn palette_sample(&self) -> Vec<Rgb> {
        let (width, height) = self.pixels.dimensions();
        let longest = width.max(height);

        let to_colors = |buffer: &RgbImage| -> Vec<Rgb> {
            buffer
                .pixels()
                .map(|p| {
                    let [r, g, b] = p.0;
                    Rgb::new(r, g, b)
                })
                .collect()
        };

        if longest <= PALETTE_THUMBNAIL_EDGE {
            return to_colors(&self.pixels);
        }

        let scale = f64::from(PALETTE_THUMBNAIL_EDGE) / f64::from(longest);
        let fit = |edge: u32| ((f64::from(edge) * scale).round() as u32).max(1);

        let thumbnail = imageops::thumbnail(&self.pixels, fit(width), fit(height));
        to_colors(&thumbnail)
    }

    /// Encode as PNG for the aesthetic scorer
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder rejects the buffer
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| ThemeError::ImageEncode { source: e })?;
        Ok(bytes)
    }
}
