//! # Scatterstego Core API
//!
//! Hides a text message in the pixels of a PNG image. Every byte of the message takes a unit
//! of 3 pixels, the units are spread over the whole image with random gaps in between.
//! The finished image can be sealed with a password afterwards.
//!
//! - [`ScatterEncoder`][enc] for hiding bytes in an `RgbaImage`
//! - [`decode`][dec] / [`ScatterDecoder`][sdec] for reading them back
//! - [`api::hide`][hide] and [`api::unveil`][unveil] for the whole file based flow
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! RgbaImage::from_pixel(64, 64, Rgba([120, 60, 30, 255]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! let report = scatterstego_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .with_password("SuperSecret42") // will seal the resulting image with this password
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let sealed = report.sealed.expect("Image was not sealed");
//!
//! // ## Unveil the message again
//! let message = scatterstego_core::api::unveil::prepare()
//!     .from_secret_file(&sealed.ciphertext)
//!     .with_nonce_file(&sealed.nonce)
//!     .using_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! [enc]: ./media/image/encoder/struct.ScatterEncoder.html
//! [dec]: ./media/image/decoder/fn.decode.html
//! [sdec]: ./media/image/decoder/struct.ScatterDecoder.html
//! [hide]: ./api/hide/index.html
//! [unveil]: ./api/unveil/index.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod error;
pub mod media;
pub mod result;
pub mod seal;

pub use crate::error::SteganoError;
pub use crate::media::image::{decode, decode_text, GapSource, ScatterDecoder, ScatterEncoder};
pub use crate::media::{CodecOptions, Media, Persist};
pub use crate::result::Result;
