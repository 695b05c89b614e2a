#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Seeds the random gap placement. Encoding the same message into the same image with the
    /// same seed yields the same result, `None` draws fresh randomness on every run.
    ///
    /// Decoding never needs the seed, the unit markers carry all the layout information.
    pub gap_seed: Option<u64>,
}

impl CodecOptions {
    pub fn with_gap_seed(seed: u64) -> Self {
        Self {
            gap_seed: Some(seed),
        }
    }

    /// builds the random source used to draw the gaps in front of each unit
    pub fn gap_source(&self) -> fastrand::Rng {
        match self.gap_seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}
