use std::path::{Path, PathBuf};

use log::debug;

use crate::media::image::ScatterEncoder;
use crate::seal::{seal_file, SealedFile};
use crate::{CodecOptions, Media, Persist, SteganoError};

use super::shared::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// what [`HideApi::execute`] wrote to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HideReport {
    /// the carrier image with the hidden message
    pub image: PathBuf,
    /// the sealed copy of `image`, only when a password was given
    pub sealed: Option<SealedFile>,
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// the PNG image that carries the message, it is only read
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// where the carrier with the message is stored, must be a PNG file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password, the output image gets sealed with it
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, no password will be used, leads to no sealing
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn execute(self) -> Result<HideReport, SteganoError> {
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let media = Media::from_file(&image)?;
        let mut encoder = ScatterEncoder::with_options(media.into_image(), &self.options);
        encoder.encode_text(&message)?.save_as(&output)?;
        debug!("hid {} bytes in {output:?}", message.len());

        let sealed = match self.password.as_str() {
            Some(password) => Some(seal_file(&output, password)?),
            None => None,
        };

        Ok(HideReport {
            image: output,
            sealed,
        })
    }
}
