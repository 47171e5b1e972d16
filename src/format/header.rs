//! WAV format chunk structures and parsing

use crate::error::{Error, Result};
use crate::util::SampleFormat;

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// IEEE Float
    IeeeFloat,
    /// A-Law
    ALaw,
    /// Mu-Law
    MuLaw,
    /// Extensible format
    Extensible,
    /// Unknown format
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            0x0006 => FormatTag::ALaw,
            0x0007 => FormatTag::MuLaw,
            0xFFFE => FormatTag::Extensible,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::IeeeFloat => 0x0003,
            FormatTag::ALaw => 0x0006,
            FormatTag::MuLaw => 0x0007,
            FormatTag::Extensible => 0xFFFE,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// WAV format chunk data
#[derive(Debug, Clone)]
pub struct WavFormat {
    /// Format tag (codec ID)
    pub format_tag: FormatTag,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Block alignment (bytes per sample frame, all channels)
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Encoding carried by the extensible sub-structure, if present
    pub subformat: Option<FormatTag>,
    /// Speaker position mask from the extensible sub-structure, if present
    pub channel_mask: Option<u32>,
}

impl WavFormat {
    /// Parse WAV format chunk from bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < 16 {
            return Err(Error::malformed("fmt chunk too small"));
        }

        let format_tag = u16::from_le_bytes([data[0], data[1]]).into();
        let channels = u16::from_le_bytes([data[2], data[3]]);
        let sample_rate = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let byte_rate = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        let block_align = u16::from_le_bytes([data[12], data[13]]);
        let bits_per_sample = u16::from_le_bytes([data[14], data[15]]);

        let mut subformat = None;
        let mut channel_mask = None;

        if format_tag == FormatTag::Extensible {
            // cbSize (2) + valid bits (2) + channel mask (4) + subformat GUID (16)
            if data.len() < 40 {
                return Err(Error::malformed("extensible fmt chunk too small"));
            }

            let extension_size = u16::from_le_bytes([data[16], data[17]]);
            if extension_size < 22 {
                return Err(Error::malformed(format!(
                    "extensible fmt extension too small: {} bytes",
                    extension_size
                )));
            }

            channel_mask = Some(u32::from_le_bytes([data[20], data[21], data[22], data[23]]));
            // The encoding code is the first field of the subformat GUID
            subformat = Some(u16::from_le_bytes([data[24], data[25]]).into());
        }

        Ok(WavFormat {
            format_tag,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            subformat,
            channel_mask,
        })
    }

    /// Serialize as a classic 16-byte PCM format chunk payload
    ///
    /// Only non-extensible output is supported; the extension sub-structure
    /// is never written.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16);

        bytes.extend_from_slice(&u16::from(self.format_tag).to_le_bytes());
        bytes.extend_from_slice(&self.channels.to_le_bytes());
        bytes.extend_from_slice(&self.sample_rate.to_le_bytes());
        bytes.extend_from_slice(&self.byte_rate.to_le_bytes());
        bytes.extend_from_slice(&self.block_align.to_le_bytes());
        bytes.extend_from_slice(&self.bits_per_sample.to_le_bytes());

        bytes
    }

    /// Build the descriptor for a minimal mono PCM output file
    pub fn mono_pcm(sample_rate: u32, format: SampleFormat) -> Self {
        let width = format.sample_size() as u16;
        WavFormat {
            format_tag: FormatTag::Pcm,
            channels: 1,
            sample_rate,
            byte_rate: sample_rate * width as u32,
            block_align: width,
            bits_per_sample: format.bits_per_sample(),
            subformat: None,
            channel_mask: None,
        }
    }

    /// Effective encoding code, unwrapping the extensible sub-structure
    pub fn effective_tag(&self) -> FormatTag {
        match self.format_tag {
            FormatTag::Extensible => self.subformat.unwrap_or(FormatTag::Extensible),
            tag => tag,
        }
    }

    /// Check that this format is one the splitter can handle losslessly
    ///
    /// Returns the typed sample format to de-interleave with. Sample rate
    /// is passed through unchecked.
    pub fn validate(&self) -> Result<SampleFormat> {
        if self.channels == 0 {
            return Err(Error::malformed("invalid channel count: 0"));
        }

        let tag = self.effective_tag();
        if tag != FormatTag::Pcm {
            return Err(Error::UnsupportedEncoding(tag));
        }

        let format = SampleFormat::from_bits(self.bits_per_sample)
            .ok_or(Error::UnsupportedBitDepth(self.bits_per_sample))?;

        let expected_block_align = self.channels as u32 * format.sample_size() as u32;
        if self.block_align as u32 != expected_block_align {
            return Err(Error::malformed(format!(
                "block align mismatch: expected {}, got {}",
                expected_block_align, self.block_align
            )));
        }

        Ok(format)
    }
}
