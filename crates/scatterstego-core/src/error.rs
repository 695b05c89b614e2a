use std::string::FromUtf8Error;
use thiserror::Error;

pub use scatterstego_seal::SealError;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a second encode on a carrier that already holds a payload, call `reset` first
    #[error("Image has already been encoded with data")]
    AlreadyEncoded,

    /// Represents a payload that needs more pixels than the carrier offers
    #[error(
"Capacity Error: The payload needs {needed_pixels} pixels but the image only has {available_pixels}.
Use a larger image or a shorter message"
    )]
    PayloadTooLarge {
        needed_pixels: usize,
        available_pixels: usize,
    },

    /// Represents an empty payload or a carrier image without any pixel
    #[error("Nothing to encode: the payload is empty or the image has no pixels")]
    DegenerateInput,

    /// Represents an unsupported carrier media. For example a JPEG, lossy formats destroy the payload
    #[error("Media format is not supported, only lossless PNG images are")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents the error of invalid UTF-8 text data recovered from an image
    #[error("Invalid text data found inside the image")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents an error caused by an invalid filename, for example a path that ends in `..`
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(SealError),

    /// Represents an error when decrypting the data, most likely a wrong password
    #[error("Decryption error")]
    DecryptionError(SealError),

    /// Represents a nonce file that does not hold a valid nonce
    #[error("Invalid nonce file")]
    InvalidNonce(SealError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
