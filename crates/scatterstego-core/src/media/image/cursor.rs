use image::GenericImageView;

/// Walks the pixel coordinates of an image in row-major order: `col` runs from `0` to
/// `width - 1`, then `row` increments and `col` wraps back to `0`.
///
/// Encoder and decoder must agree on this order. The walk is bound by a single flattened
/// index, so it only ends once all `width * height` pixels were visited.
#[derive(Debug, Clone)]
pub struct ScanCursor {
    index: usize,
    total: usize,
    width: u32,
}

impl ScanCursor {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            index: 0,
            total: width as usize * height as usize,
            width,
        }
    }

    /// cursor over all pixels of the given image
    pub fn over<I: GenericImageView>(image: &I) -> Self {
        let (width, height) = image.dimensions();
        Self::new(width, height)
    }

    /// column of the pixel the next call to `next` yields
    pub fn col(&self) -> u32 {
        match self.width {
            0 => 0,
            w => (self.index % w as usize) as u32,
        }
    }

    /// row of the pixel the next call to `next` yields
    pub fn row(&self) -> u32 {
        match self.width {
            0 => 0,
            w => (self.index / w as usize) as u32,
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.index
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.total
    }
}

impl Iterator for ScanCursor {
    type Item = (u32, u32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let position = (self.col(), self.row());
        self.index += 1;

        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for ScanCursor {}
