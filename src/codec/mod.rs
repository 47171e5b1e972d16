//! Sample codec support
//!
//! Only integer PCM is handled; the de-interleaver reads the container's
//! raw sample bytes through typed fixed-width views.

pub mod pcm;

pub use pcm::SampleMatrix;
