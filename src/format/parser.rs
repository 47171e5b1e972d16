//! RIFF/WAVE container parsing

use super::header::WavFormat;
use super::{ChunkHeader, DATA_CHUNK, FMT_CHUNK, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};

/// Parsed view over an in-memory WAV file
///
/// Borrows the input buffer; the `data` payload is referenced in place,
/// never copied.
#[derive(Debug)]
pub struct WavView<'a> {
    /// Decoded `fmt ` chunk
    pub format: WavFormat,
    /// Raw `data` chunk payload (interleaved sample frames)
    pub data: &'a [u8],
}

impl<'a> WavView<'a> {
    /// Parse a RIFF/WAVE byte stream
    ///
    /// Walks the chunk list from offset 12, capturing the first `fmt ` and
    /// first `data` chunk. A second occurrence of either is an error, as is
    /// any chunk whose declared size runs past the end of the buffer.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < 12 {
            return Err(Error::malformed("file too small for a RIFF header"));
        }
        if &bytes[0..4] != RIFF_MAGIC {
            return Err(Error::malformed("not a RIFF file"));
        }
        if &bytes[8..12] != WAVE_MAGIC {
            return Err(Error::malformed("not a WAVE file"));
        }

        let mut offset = 12usize;
        let mut format: Option<WavFormat> = None;
        let mut data: Option<&[u8]> = None;

        while offset < bytes.len() {
            let header = ChunkHeader::from_bytes(&bytes[offset..])
                .ok_or_else(|| Error::malformed("truncated chunk header"))?;

            let payload_start = offset + 8;
            let payload_end = payload_start + header.size as usize;
            if payload_end > bytes.len() {
                return Err(Error::malformed(format!(
                    "chunk '{}' runs past end of file",
                    header.id_display()
                )));
            }
            let payload = &bytes[payload_start..payload_end];

            if &header.id == FMT_CHUNK {
                if format.is_some() {
                    return Err(Error::malformed("duplicate fmt chunk"));
                }
                format = Some(WavFormat::from_bytes(payload)?);
            } else if &header.id == DATA_CHUNK {
                if data.is_some() {
                    return Err(Error::malformed("duplicate data chunk"));
                }
                data = Some(payload);
            }

            // chunks are word-aligned
            offset = payload_end + (header.size as usize & 1);
        }

        let format = format.ok_or_else(|| Error::malformed("fmt chunk not found"))?;
        let data = data.ok_or_else(|| Error::malformed("data chunk not found"))?;

        Ok(WavView { format, data })
    }

    /// Number of sample frames in the data payload
    pub fn frames(&self) -> usize {
        if self.format.block_align == 0 {
            return 0;
        }
        self.data.len() / self.format.block_align as usize
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / self.format.sample_rate as f64
    }
}
