//! WAVE speaker positions and channel labeling

/// Canonical labels for the 18 standard WAVE speaker positions, in
/// channel-mask bit order.
pub const CHANNEL_LABELS: [&str; 18] = [
    "FL", "FR", "FC", "LF", "BL", "BR", "FLC", "FRC", "BC", "SL", "SR", "TC", "TFL", "TFC",
    "TFR", "TBL", "TBC", "TBR",
];

/// Label for channel `index` in the positional (maskless) layout
pub fn positional_label(index: usize) -> String {
    match CHANNEL_LABELS.get(index) {
        Some(label) => (*label).to_string(),
        None => format!("ch{}", index),
    }
}

/// Resolve one label per output channel.
///
/// A nonzero channel mask (extensible-format inputs) assigns the n-th
/// channel the n-th set bit's position label; set bits past the named
/// positions and channels past the last set bit take the numeric fallback.
/// Without a mask the labels are purely positional.
pub fn channel_labels(channels: usize, mask: Option<u32>) -> Vec<String> {
    let mut labels = Vec::with_capacity(channels);

    if let Some(mask) = mask.filter(|&m| m != 0) {
        let mut positions = (0..u32::BITS).filter(|bit| mask & (1 << bit) != 0);
        for index in 0..channels {
            let label = match positions.next() {
                Some(bit) if (bit as usize) < CHANNEL_LABELS.len() => {
                    CHANNEL_LABELS[bit as usize].to_string()
                }
                _ => format!("ch{}", index),
            };
            labels.push(label);
        }
    } else {
        for index in 0..channels {
            labels.push(positional_label(index));
        }
    }

    labels
}
