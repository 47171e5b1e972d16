//! PCM sample matrix de-interleaving

use crate::error::{Error, Result};
use crate::util::{Sample, SampleFormat};

/// Borrowed view of an interleaved PCM `data` payload as a
/// frames × channels sample grid.
///
/// Construction validates the frame geometry; access is random by
/// `(frame, channel)` and extraction is one linear scan per channel with no
/// buffering beyond the output.
#[derive(Debug)]
pub struct SampleMatrix<'a> {
    data: &'a [u8],
    channels: usize,
    frames: usize,
    width: usize,
}

impl<'a> SampleMatrix<'a> {
    /// Create a matrix view over `data`
    ///
    /// `block_align` must be exactly `channels * width`; anything else means
    /// per-frame padding, which cannot be split losslessly.
    pub fn new(
        data: &'a [u8],
        format: SampleFormat,
        channels: u16,
        block_align: u16,
    ) -> Result<Self> {
        let width = format.sample_size();

        if block_align == 0 || block_align as usize % width != 0 {
            return Err(Error::malformed(format!(
                "block align {} is not a multiple of the {}-byte sample width",
                block_align, width
            )));
        }

        let stride = block_align as usize / width;
        if stride != channels as usize {
            return Err(Error::malformed(format!(
                "unexpected frame padding: block align {} for {} channels of {} bytes",
                block_align, channels, width
            )));
        }

        Ok(SampleMatrix {
            data,
            channels: channels as usize,
            frames: data.len() / block_align as usize,
            width,
        })
    }

    /// Number of sample frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Read the sample at `(frame, channel)`
    pub fn sample<S: Sample>(&self, frame: usize, channel: usize) -> S {
        debug_assert_eq!(S::WIDTH, self.width);
        debug_assert!(frame < self.frames && channel < self.channels);

        let start = (frame * self.channels + channel) * self.width;
        S::read_le(&self.data[start..start + self.width])
    }

    /// Extract one channel as a contiguous sample buffer
    pub fn channel<S: Sample>(&self, channel: usize) -> Vec<S> {
        let mut samples = Vec::with_capacity(self.frames);
        for frame in 0..self.frames {
            samples.push(self.sample(frame, channel));
        }
        samples
    }
}
