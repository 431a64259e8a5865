//! Hook for an external compressed-RTF decoder
//!
//! The decoder exposes the compressed RTF body untouched. Turning it into RTF
//! text (and from there into HTML or plain text) is left to an implementation
//! of [`RtfDecompressor`].

use crate::document::Document;

/// Decompresses a `PidTagRtfCompressed` body
pub trait RtfDecompressor {
    type Error;

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

impl Document {
    /// Run `decompressor` over the compressed RTF body, if there is one
    pub fn decompress_rtf<D: RtfDecompressor>(
        &self,
        decompressor: &D,
    ) -> Option<Result<Vec<u8>, D::Error>> {
        self.compressed_rtf()
            .map(|compressed| decompressor.decompress(compressed))
    }
}
