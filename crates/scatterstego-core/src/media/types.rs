use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use image::RgbaImage;
use image::ImageFormat;
use log::error;

use crate::error::SteganoError;
use crate::media::image::{GapSource, ScatterEncoder};
use crate::result::Result;

use super::Persist;

/// a carrier image for steganography, only lossless PNG files are accepted
#[derive(Debug, Clone)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        if !is_png_extension(f) {
            return Err(SteganoError::UnsupportedMedia);
        }
        let image = image::open(f).map_err(|e| {
            error!("Error opening image {f:?}: {e}");
            SteganoError::InvalidImageMedia
        })?;

        Ok(Self::from_image(image.to_rgba8()))
    }

    /// reads a PNG image from memory, for example right after it was unsealed
    pub fn from_png_bytes(buf: &[u8]) -> Result<Self> {
        let image = image::load_from_memory_with_format(buf, ImageFormat::Png).map_err(|e| {
            error!("Error reading image from memory: {e}");
            SteganoError::InvalidImageMedia
        })?;

        Ok(Self::from_image(image.to_rgba8()))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save_to_writer<W: Write + Seek>(&self, writer: W) -> Result<()> {
        write_png(&self.image, writer)
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        save_png(&self.image, file)
    }
}

impl<G: GapSource> Persist for ScatterEncoder<G> {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        save_png(self.carrier(), file)
    }
}

pub(crate) fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

fn save_png(image: &RgbaImage, file: &Path) -> Result<()> {
    if !is_png_extension(file) {
        error!("Refusing to save {file:?}, only png keeps the hidden bits intact");
        return Err(SteganoError::UnsupportedMedia);
    }
    let f = File::create(file).map_err(|e| {
        error!("Error creating file {file:?}: {e}");
        SteganoError::WriteError { source: e }
    })?;
    let mut writer = BufWriter::new(f);
    write_png(image, &mut writer)?;

    writer
        .flush()
        .map_err(|source| SteganoError::WriteError { source })
}

fn write_png<W: Write + Seek>(image: &RgbaImage, mut writer: W) -> Result<()> {
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
}
