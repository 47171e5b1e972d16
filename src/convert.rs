//! Multichannel WAV to per-channel mono WAV conversion

use crate::codec::SampleMatrix;
use crate::error::Result;
use crate::format::{writer, WavView};
use crate::util::{channel_labels, Sample, SampleFormat, I24};
use bytes::Bytes;
use std::time::SystemTime;
use tracing::debug;

/// One converted mono WAV file
///
/// Created by [`convert`] and handed to the caller; the library retains
/// nothing after returning.
#[derive(Debug, Clone)]
pub struct OutputFile {
    /// Suggested file name, `{base}-{label}{ext}`
    pub filename: String,
    /// Complete standalone WAV file contents
    pub data: Bytes,
    /// Wall-clock start time of the conversion that produced this file
    pub created: SystemTime,
}

impl OutputFile {
    /// MIME type of the produced files
    pub const MIME_TYPE: &'static str = "audio/vnd.wave;codec=1";
}

/// Split a multichannel WAV into one standalone mono WAV per channel.
///
/// `input_name` is the caller-supplied display name of the input; it is
/// only used to derive output file names. Either every channel converts or
/// the whole call fails.
pub fn convert(input: &[u8], input_name: &str) -> Result<Vec<OutputFile>> {
    let created = SystemTime::now();

    let wav = WavView::parse(input)?;
    let sample_format = wav.format.validate()?;
    debug!(
        channels = wav.format.channels,
        sample_rate = wav.format.sample_rate,
        format = %sample_format,
        frames = wav.frames(),
        "parsed WAV input"
    );

    let matrix = SampleMatrix::new(
        wav.data,
        sample_format,
        wav.format.channels,
        wav.format.block_align,
    )?;

    let labels = channel_labels(matrix.channels(), wav.format.channel_mask);
    let (base, ext) = split_name(input_name);

    let mut outputs = Vec::with_capacity(matrix.channels());
    for (channel, label) in labels.iter().enumerate() {
        let data = match sample_format {
            SampleFormat::U8 => split_channel::<u8>(&matrix, channel, wav.format.sample_rate),
            SampleFormat::I16 => split_channel::<i16>(&matrix, channel, wav.format.sample_rate),
            SampleFormat::I24 => split_channel::<I24>(&matrix, channel, wav.format.sample_rate),
            SampleFormat::I32 => split_channel::<i32>(&matrix, channel, wav.format.sample_rate),
        };

        outputs.push(OutputFile {
            filename: format!("{}-{}{}", base, label, ext),
            data,
            created,
        });
    }

    debug!(outputs = outputs.len(), "conversion finished");
    Ok(outputs)
}

fn split_channel<S: Sample>(matrix: &SampleMatrix<'_>, channel: usize, sample_rate: u32) -> Bytes {
    let samples: Vec<S> = matrix.channel(channel);
    writer::write_mono(sample_rate, &samples)
}

/// Split `name` at its last dot into base and extension (dot included).
///
/// A name with no dot keeps its whole text as the base and gets `.wav`.
fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) => (&name[..pos], &name[pos..]),
        None => (name, ".wav"),
    }
}
