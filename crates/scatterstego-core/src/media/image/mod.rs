pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod unit_codec;

pub use cursor::ScanCursor;
pub use decoder::{decode, decode_text, ScatterDecoder};
pub use encoder::{GapSource, ScatterEncoder};
