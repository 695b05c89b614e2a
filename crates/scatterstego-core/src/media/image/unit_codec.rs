//! Packs one payload byte into a unit of three pixels and back.
//!
//! The least significant bits of the R, G and B channels of three pixels in scan order give
//! nine slots. Slot 0 is the start marker and always `1`, slots 1 to 8 carry the byte with the
//! most significant bit first. Alpha and the upper seven bits of every channel stay untouched.
//!
//! ```text
//! pixel    |   0   |   1   |   2   |
//! channel  | R G B | R G B | R G B |
//! slot     | 0 1 2 | 3 4 5 | 6 7 8 |
//! meaning  | M 7 6 | 5 4 3 | 2 1 0 |   M = marker, n = bit n of the byte
//! ```

use image::Rgba;

pub const PIXELS_PER_UNIT: usize = 3;
const CHANNELS_PER_PIXEL: usize = 3;
const MARKER_CHANNEL: usize = 0;

/// three consecutive pixels in scan order
pub type Unit = [Rgba<u8>; PIXELS_PER_UNIT];

#[inline(always)]
fn hide_bit(channel: &mut u8, bit: bool) {
    *channel = (*channel & (u8::MAX - 1)) | u8::from(bit);
}

/// writes the marker and the bits of `symbol` into the LSBs of `unit`
pub fn symbol_to_unit(symbol: u8, mut unit: Unit) -> Unit {
    let slots = unit
        .iter_mut()
        .flat_map(|pixel| pixel.0.iter_mut().take(CHANNELS_PER_PIXEL));

    for (slot, channel) in slots.enumerate() {
        let bit = slot == 0 || (symbol >> (8 - slot)) & 1 == 1;
        hide_bit(channel, bit);
    }

    unit
}

/// reads the byte back out of a unit. The marker slot is skipped, the caller already used it
/// to find the start of the unit.
pub fn unit_to_symbol(unit: &Unit) -> u8 {
    unit.iter()
        .flat_map(|pixel| pixel.0.iter().take(CHANNELS_PER_PIXEL))
        .skip(1)
        .fold(0, |symbol, channel| (symbol << 1) | (channel & 1))
}

/// clears the marker slot of a pixel that is not the start of a unit
#[inline]
pub fn force_marker_zero(pixel: &mut Rgba<u8>) {
    hide_bit(&mut pixel.0[MARKER_CHANNEL], false);
}

#[inline]
pub fn has_marker(pixel: &Rgba<u8>) -> bool {
    pixel.0[MARKER_CHANNEL] & 1 == 1
}
