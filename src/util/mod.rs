//! Common utilities and data structures

pub mod layout;
pub mod samplefmt;

pub use layout::{channel_labels, positional_label, CHANNEL_LABELS};
pub use samplefmt::{Sample, SampleFormat, I24};
