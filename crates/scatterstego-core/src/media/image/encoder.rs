use image::RgbaImage;
use log::debug;

use crate::media::codec_options::CodecOptions;
use crate::media::image::cursor::ScanCursor;
use crate::media::image::unit_codec::{force_marker_zero, symbol_to_unit, Unit, PIXELS_PER_UNIT};
use crate::{Result, SteganoError};

/// Decides how many pixels are skipped in front of each unit.
pub trait GapSource {
    /// returns the gap for the next unit, expected to be in `0..=max_gap`
    fn next_gap(&mut self, max_gap: usize) -> usize;
}

impl GapSource for fastrand::Rng {
    fn next_gap(&mut self, max_gap: usize) -> usize {
        self.usize(0..=max_gap)
    }
}

impl<G: GapSource + ?Sized> GapSource for &mut G {
    fn next_gap(&mut self, max_gap: usize) -> usize {
        (**self).next_gap(max_gap)
    }
}

/// Hides a payload in an `RgbaImage`, one byte per unit of 3 pixels.
///
/// The image is cut into one section of `max_gap + 3` pixels per payload byte. Inside each
/// section the unit starts after a random gap, every pixel outside of a unit gets its marker
/// bit cleared so the decoder only stops at real unit starts.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use scatterstego_core::media::image::{decode_text, ScatterEncoder};
/// use scatterstego_core::CodecOptions;
///
/// let carrier = RgbaImage::from_pixel(10, 10, Rgba([200, 100, 50, 255]));
/// let mut encoder = ScatterEncoder::with_options(carrier, &CodecOptions::with_gap_seed(7));
/// encoder.encode_text("HELLO").expect("Cannot hide the message");
///
/// assert_eq!(decode_text(encoder.carrier()).unwrap(), "HELLO");
/// ```
pub struct ScatterEncoder<G: GapSource = fastrand::Rng> {
    original: RgbaImage,
    carrier: RgbaImage,
    gaps: G,
    encoded: bool,
}

impl ScatterEncoder {
    /// encoder with fresh randomness for the gaps
    pub fn new(carrier: RgbaImage) -> Self {
        Self::with_options(carrier, &CodecOptions::default())
    }

    pub fn with_options(carrier: RgbaImage, options: &CodecOptions) -> Self {
        Self::with_gap_source(carrier, options.gap_source())
    }
}

impl<G: GapSource> ScatterEncoder<G> {
    pub fn with_gap_source(carrier: RgbaImage, gaps: G) -> Self {
        Self {
            original: carrier.clone(),
            carrier,
            gaps,
            encoded: false,
        }
    }

    pub fn pixel_count(&self) -> usize {
        let (width, height) = self.carrier.dimensions();
        width as usize * height as usize
    }

    /// the maximum number of payload bytes this image can take
    pub fn capacity(&self) -> usize {
        self.pixel_count() / PIXELS_PER_UNIT
    }

    pub fn is_encoded(&self) -> bool {
        self.encoded
    }

    pub fn carrier(&self) -> &RgbaImage {
        &self.carrier
    }

    pub fn into_carrier(self) -> RgbaImage {
        self.carrier
    }

    /// hides the UTF-8 bytes of `text`
    pub fn encode_text(&mut self, text: &str) -> Result<&mut Self> {
        self.encode(text.as_bytes())
    }

    /// hides `payload` in the carrier. On any error the carrier is left as it was.
    pub fn encode(&mut self, payload: &[u8]) -> Result<&mut Self> {
        if self.encoded {
            return Err(SteganoError::AlreadyEncoded);
        }

        let pixels = self.pixel_count();
        if payload.is_empty() || pixels == 0 {
            return Err(SteganoError::DegenerateInput);
        }

        let needed = payload.len().saturating_mul(PIXELS_PER_UNIT);
        if needed > pixels {
            return Err(SteganoError::PayloadTooLarge {
                needed_pixels: needed,
                available_pixels: pixels,
            });
        }

        let max_gap = (pixels - needed) / needed;
        debug!(
            "scattering {} units over {pixels} pixels, gaps of up to {max_gap} pixels",
            payload.len()
        );

        self.scatter(payload, max_gap);
        self.encoded = true;

        Ok(self)
    }

    /// discards the hidden payload and starts over with the original image
    pub fn reset(&mut self) -> &mut Self {
        self.carrier = self.original.clone();
        self.encoded = false;
        self
    }

    /// `payload.len() * (max_gap + 3) <= pixels`, so every section fits into the image
    fn scatter(&mut self, payload: &[u8], max_gap: usize) {
        let section_size = max_gap + PIXELS_PER_UNIT;
        let mut cursor = ScanCursor::over(&self.carrier);

        for &symbol in payload {
            let gap = self.gaps.next_gap(max_gap).min(max_gap);

            self.clear_markers(&mut cursor, gap);
            self.write_unit(&mut cursor, symbol);
            self.clear_markers(&mut cursor, section_size - (gap + PIXELS_PER_UNIT));
        }

        let tail = cursor.remaining();
        self.clear_markers(&mut cursor, tail);
    }

    fn clear_markers(&mut self, cursor: &mut ScanCursor, count: usize) {
        for (x, y) in cursor.by_ref().take(count) {
            force_marker_zero(self.carrier.get_pixel_mut(x, y));
        }
    }

    fn write_unit(&mut self, cursor: &mut ScanCursor, symbol: u8) {
        let positions: Vec<(u32, u32)> = cursor.by_ref().take(PIXELS_PER_UNIT).collect();
        let unit: Unit = std::array::from_fn(|i| {
            let (x, y) = positions[i];
            *self.carrier.get_pixel(x, y)
        });

        for (&(x, y), pixel) in positions.iter().zip(symbol_to_unit(symbol, unit)) {
            self.carrier.put_pixel(x, y, pixel);
        }
    }
}
