use std::fs;
use std::path::{Path, PathBuf};

use crate::media::image::decode_text;
use crate::seal::{default_nonce_path, unseal_bytes, unseal_file};
use crate::{Media, SteganoError};

use super::shared::Password;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    nonce_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    password: Password,
    keep_unsealed: bool,
}

impl UnveilApi {
    /// This is the image that contains the message, sealed when a password is used
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The nonce written when the image was sealed.
    /// Defaults to `iv_<name>` next to the secret file, with a leading `encrypted_` dropped from `<name>`
    pub fn with_nonce_file(mut self, nonce_file: impl AsRef<Path>) -> Self {
        self.nonce_file = Some(nonce_file.as_ref().to_path_buf());
        self
    }

    /// The unveiled message is additionally written into this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Set the password used for sealing the image
    /// If `None` is passed, the secret file is expected to be a plain PNG image
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Write the unsealed image as `new_<name>` instead of only decrypting it in memory
    pub fn keep_unsealed_image(mut self, keep: bool) -> Self {
        self.keep_unsealed = keep;
        self
    }

    /// Execute the unveil process and returns the hidden message
    pub fn execute(self) -> Result<String, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let media = match self.password.as_str() {
            Some(password) => {
                let nonce_file = match self.nonce_file {
                    Some(nonce_file) => nonce_file,
                    None => default_nonce_path(&secret_media)?,
                };
                let data = if self.keep_unsealed {
                    unseal_file(&secret_media, &nonce_file, password)?.1
                } else {
                    unseal_bytes(&secret_media, &nonce_file, password)?
                };
                Media::from_png_bytes(&data)?
            }
            None => Media::from_file(&secret_media)?,
        };

        let message = decode_text(media.image())?;

        if let Some(output_file) = self.output_file {
            fs::write(output_file, message.as_bytes())
                .map_err(|source| SteganoError::WriteError { source })?;
        }

        Ok(message)
    }
}
