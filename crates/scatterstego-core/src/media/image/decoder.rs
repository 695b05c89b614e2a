use image::{Rgba, RgbaImage};
use log::debug;

use crate::media::image::cursor::ScanCursor;
use crate::media::image::unit_codec::{has_marker, unit_to_symbol, Unit, PIXELS_PER_UNIT};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// looking for the next pixel with a marker
    Seeking,
    /// inside a unit, the number of pixels collected so far
    Collecting(usize),
}

/// Reads the bytes hidden by [`ScatterEncoder`](super::ScatterEncoder) out of an `RgbaImage`.
///
/// One pass over the pixels in scan order: a pixel with its marker bit set starts a unit,
/// the unit then takes that pixel and the next two no matter what their markers say.
/// A unit cut short by the end of the image is dropped.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use scatterstego_core::media::image::ScatterDecoder;
///
/// let image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
/// assert_eq!(ScatterDecoder::new(&image).count(), 0);
/// ```
pub struct ScatterDecoder<'i> {
    image: &'i RgbaImage,
    cursor: ScanCursor,
    state: ScanState,
    unit: Unit,
}

impl<'i> ScatterDecoder<'i> {
    pub fn new(image: &'i RgbaImage) -> Self {
        Self {
            image,
            cursor: ScanCursor::over(image),
            state: ScanState::Seeking,
            unit: [Rgba([0; 4]); PIXELS_PER_UNIT],
        }
    }
}

impl Iterator for ScatterDecoder<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        for (x, y) in self.cursor.by_ref() {
            let pixel = *self.image.get_pixel(x, y);
            let collected = match self.state {
                ScanState::Seeking if !has_marker(&pixel) => continue,
                ScanState::Seeking => 0,
                ScanState::Collecting(collected) => collected,
            };

            self.unit[collected] = pixel;
            if collected + 1 == PIXELS_PER_UNIT {
                self.state = ScanState::Seeking;
                return Some(unit_to_symbol(&self.unit));
            }
            self.state = ScanState::Collecting(collected + 1);
        }

        if let ScanState::Collecting(collected) = self.state {
            debug!("discarding {collected} trailing pixel(s) of an incomplete unit");
            self.state = ScanState::Seeking;
        }

        None
    }
}

/// all bytes hidden in the image, empty for an image without any pixel
pub fn decode(image: &RgbaImage) -> Vec<u8> {
    ScatterDecoder::new(image).collect()
}

/// the hidden bytes as text, fails if they are no valid UTF-8
pub fn decode_text(image: &RgbaImage) -> Result<String> {
    Ok(String::from_utf8(decode(image))?)
}
