//! Minimal mono WAV writing

use super::header::WavFormat;
use super::{DATA_CHUNK, FMT_CHUNK, RIFF_MAGIC, WAVE_MAGIC};
use crate::util::Sample;
use bytes::{BufMut, Bytes, BytesMut};

/// Serialize one channel's samples as a standalone mono WAV file.
///
/// The header is the classic 12-byte RIFF preamble plus a 16-byte PCM
/// `fmt ` chunk; the extensible variant is never written because downstream
/// playback hardware rejects it. Chunk sizes are exact byte counts, with a
/// single pad byte after an odd-length `data` payload per the RIFF
/// alignment rule.
pub fn write_mono<S: Sample>(sample_rate: u32, samples: &[S]) -> Bytes {
    let format = WavFormat::mono_pcm(sample_rate, S::FORMAT);
    let fmt_payload = format.to_bytes();

    let data_len = samples.len() * S::WIDTH;
    let pad = data_len & 1;
    let riff_size = (4 + 8 + fmt_payload.len() + 8 + data_len + pad) as u32;

    let mut out = BytesMut::with_capacity(riff_size as usize + 8);
    out.put_slice(RIFF_MAGIC);
    out.put_u32_le(riff_size);
    out.put_slice(WAVE_MAGIC);

    out.put_slice(FMT_CHUNK);
    out.put_u32_le(fmt_payload.len() as u32);
    out.put_slice(&fmt_payload);

    out.put_slice(DATA_CHUNK);
    out.put_u32_le(data_len as u32);
    for &sample in samples {
        sample.write_le(&mut out);
    }
    if pad == 1 {
        out.put_u8(0);
    }

    out.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parser::WavView;
    use crate::format::FormatTag;
    use crate::util::SampleFormat;

    #[test]
    fn test_write_mono_i16_layout() {
        let bytes = write_mono::<i16>(44100, &[1, 3, 5]);
        assert_eq!(bytes.len(), 12 + 8 + 16 + 8 + 6);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");

        let wav = WavView::parse(&bytes).unwrap();
        assert_eq!(wav.format.format_tag, FormatTag::Pcm);
        assert_eq!(wav.format.channels, 1);
        assert_eq!(wav.format.sample_rate, 44100);
        assert_eq!(wav.format.bits_per_sample, 16);
        assert_eq!(wav.format.block_align, 2);
        assert_eq!(wav.format.byte_rate, 88200);
        assert_eq!(wav.format.subformat, None);
        assert_eq!(wav.data, &[1, 0, 3, 0, 5, 0]);
    }

    #[test]
    fn test_riff_size_matches_file_size() {
        let bytes = write_mono::<u8>(8000, &[1, 2, 3, 4]);
        let declared = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        assert_eq!(declared as usize + 8, bytes.len());
    }

    #[test]
    fn test_odd_data_length_gets_pad_byte() {
        let bytes = write_mono::<u8>(8000, &[9, 9, 9]);
        // data chunk declares 3 bytes, file carries one pad byte after it
        let wav = WavView::parse(&bytes).unwrap();
        assert_eq!(wav.data, &[9, 9, 9]);
        assert_eq!(bytes.len() % 2, 0);

        let declared = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        assert_eq!(declared as usize + 8, bytes.len());
    }

    #[test]
    fn test_write_mono_i24_width() {
        use crate::util::I24;

        let bytes = write_mono::<I24>(48000, &[I24(-1), I24(2)]);
        let wav = WavView::parse(&bytes).unwrap();
        assert_eq!(wav.format.validate().unwrap(), SampleFormat::I24);
        assert_eq!(wav.data, &[0xFF, 0xFF, 0xFF, 0x02, 0x00, 0x00]);
    }
}
