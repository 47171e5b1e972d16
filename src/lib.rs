//! wavsplit - split multichannel WAV files into mono WAV files
//!
//! wavsplit decodes a RIFF/WAVE byte stream, de-interleaves its sample
//! matrix, and re-synthesizes one minimal standalone mono WAV file per
//! channel, at the original sample rate and bit depth. Downstream playback
//! hardware that cannot route multichannel audio consumes the outputs
//! directly, so the generated headers never use the extensible format
//! variant.
//!
//! # Architecture
//!
//! - `format`: RIFF/WAVE container parsing and mono WAV writing
//! - `codec`: PCM sample matrix de-interleaving
//! - `convert`: the conversion pipeline and its public entry point
//! - `util`: sample formats, typed sample views, channel labeling
//!
//! The whole pipeline is pure and synchronous: every call operates on its
//! own buffers and may run concurrently with other calls without
//! coordination.
//!
//! # Example
//!
//! ```no_run
//! let bytes = std::fs::read("surround.wav")?;
//! for file in wavsplit::convert(&bytes, "surround.wav")? {
//!     std::fs::write(&file.filename, &file.data)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod convert;
pub mod error;
pub mod format;
pub mod util;

pub use convert::{convert, OutputFile};
pub use error::{Error, Result};

/// wavsplit version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the wavsplit library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize library logging with the given configuration
pub fn init(config: Config) {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt().with_env_filter(level).init();
    }
}
