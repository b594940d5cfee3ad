use crate::permutation::PositionGenerators;

/// Options shared by hiding and unveiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// If true the alpha channel carries payload bits like any other channel and is
    /// otherwise left as is.
    /// If false the alpha channel is never used for payload bits and every alpha byte
    /// of the output is forced to fully opaque.
    ///
    /// Unveiling detects the setting on its own, it only matters for hiding.
    pub transparency: bool,

    /// The strategy that picks the channel bytes for the payload bits.
    /// Hiding and unveiling must use the same one.
    pub positions: PositionGenerators,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            transparency: true,
            positions: PositionGenerators::default(),
        }
    }
}

impl CodecOptions {
    pub fn with_transparency(mut self, transparency: bool) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_positions<P: Into<PositionGenerators>>(mut self, positions: P) -> Self {
        self.positions = positions.into();
        self
    }
}
