// src/lib.rs
// ============================================================================
// HEXNUM-CONVERT - Hex <-> float32/int16 LE y detección de runs float32
// ============================================================================

pub mod builder;
pub mod codec;
pub mod error;
pub mod files;
pub mod hex;
pub mod magic;
pub mod viz;

// Re-exports principales
pub use builder::{decode_file, visualize_text, MagicReport};
pub use codec::{
    decode_float32_le, decode_int16_le, encode_float32_le, encode_int16_le, reverse_byte_order,
    unreverse_byte_order, Conversion, SkipReason, TokenOutcome,
};
pub use error::{Error, Result};
pub use hex::sanitize;
pub use magic::{segment, segment_with, Plausibility, Segment, SegmentSummary};
pub use viz::{normalize, IntensityGrid, Mode};
