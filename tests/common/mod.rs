//! Common test utilities for wavsplit integration tests
//!
//! Synthetic WAV inputs are assembled byte-by-byte so that tests control
//! the exact container layout, including malformed shapes.

#![allow(dead_code)]

/// Assemble a RIFF/WAVE file from raw `(id, payload)` chunk pairs
///
/// Chunk sizes are the exact payload lengths; odd payloads get the RIFF pad
/// byte. The outer RIFF size is computed from the real body length.
pub fn build_riff(chunks: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(b"WAVE");

    for (id, payload) in chunks {
        body.extend_from_slice(*id);
        body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        body.extend_from_slice(payload);
        if payload.len() % 2 != 0 {
            body.push(0);
        }
    }

    let mut out = Vec::with_capacity(body.len() + 8);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(&body);
    out
}

/// Classic 16-byte format chunk payload with a consistent block align
pub fn pcm_fmt(format_tag: u16, channels: u16, sample_rate: u32, bits: u16) -> Vec<u8> {
    let block_align = channels * (bits / 8);
    pcm_fmt_raw(format_tag, channels, sample_rate, bits, block_align)
}

/// Classic 16-byte format chunk payload with an explicit block align
pub fn pcm_fmt_raw(
    format_tag: u16,
    channels: u16,
    sample_rate: u32,
    bits: u16,
    block_align: u16,
) -> Vec<u8> {
    let byte_rate = sample_rate * block_align as u32;

    let mut fmt = Vec::with_capacity(16);
    fmt.extend_from_slice(&format_tag.to_le_bytes());
    fmt.extend_from_slice(&channels.to_le_bytes());
    fmt.extend_from_slice(&sample_rate.to_le_bytes());
    fmt.extend_from_slice(&byte_rate.to_le_bytes());
    fmt.extend_from_slice(&block_align.to_le_bytes());
    fmt.extend_from_slice(&bits.to_le_bytes());
    fmt
}

/// Extensible (40-byte) format chunk payload
///
/// `subformat` is the encoding code placed in the first field of the
/// subformat GUID; the GUID tail is the standard WAVE media GUID.
pub fn extensible_fmt(
    channels: u16,
    sample_rate: u32,
    bits: u16,
    channel_mask: u32,
    subformat: u16,
) -> Vec<u8> {
    let mut fmt = pcm_fmt(0xFFFE, channels, sample_rate, bits);
    fmt.extend_from_slice(&22u16.to_le_bytes()); // extension size
    fmt.extend_from_slice(&bits.to_le_bytes()); // valid bits per sample
    fmt.extend_from_slice(&channel_mask.to_le_bytes());
    fmt.extend_from_slice(&subformat.to_le_bytes());
    fmt.extend_from_slice(&[
        0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B, 0x71,
    ]);
    fmt
}

/// Complete plain-PCM WAV file around the given interleaved sample bytes
pub fn pcm_wav(channels: u16, sample_rate: u32, bits: u16, data: &[u8]) -> Vec<u8> {
    build_riff(&[
        (b"fmt ", pcm_fmt(1, channels, sample_rate, bits)),
        (b"data", data.to_vec()),
    ])
}

/// Complete extensible-format WAV file around the given sample bytes
pub fn extensible_wav(
    channels: u16,
    sample_rate: u32,
    bits: u16,
    channel_mask: u32,
    subformat: u16,
    data: &[u8],
) -> Vec<u8> {
    build_riff(&[
        (
            b"fmt ",
            extensible_fmt(channels, sample_rate, bits, channel_mask, subformat),
        ),
        (b"data", data.to_vec()),
    ])
}

/// Interleave per-channel i16 buffers into little-endian frame-major bytes
pub fn interleave_i16(channels: &[Vec<i16>]) -> Vec<u8> {
    let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
    let mut out = Vec::with_capacity(frames * channels.len() * 2);
    for frame in 0..frames {
        for channel in channels {
            out.extend_from_slice(&channel[frame].to_le_bytes());
        }
    }
    out
}
