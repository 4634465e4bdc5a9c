// src/codec/int16.rs
// ============================================================================
// INT16 LE - Hex <-> i16 little-endian con signo
// ============================================================================

use std::num::IntErrorKind;

use byteorder::{ByteOrder, LittleEndian};

use super::token::{parse_tokens, parsed_values, SkipReason, TokenOutcome};
use crate::hex::{digits_to_bytes, sanitize, to_hex};

pub const INT16_BYTES: usize = 2;

/// Hex libre → valores i16, 4 dígitos por valor
pub fn decode_values(hex: &str) -> Vec<i16> {
    digits_to_bytes(&sanitize(hex))
        .chunks_exact(INT16_BYTES)
        .map(LittleEndian::read_i16)
        .collect()
}

/// Hex → "v0, v1, ..."
pub fn decode_int16_le(hex: &str) -> String {
    decode_values(hex)
        .iter()
        .map(i16::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parsea un token como entero; fuera de [-32768, 32767] se salta
pub fn parse_int16(token: &str) -> Result<i16, SkipReason> {
    let wide: i64 = token.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SkipReason::OutOfRange,
        _ => SkipReason::Unparseable,
    })?;
    i16::try_from(wide).map_err(|_| SkipReason::OutOfRange)
}

pub fn int16_tokens(text: &str) -> Vec<TokenOutcome<i16>> {
    parse_tokens(text, parse_int16)
}

/// Un i16 → 4 dígitos hex LE
pub fn encode_value(value: i16) -> String {
    let mut buf = [0u8; INT16_BYTES];
    LittleEndian::write_i16(&mut buf, value);
    to_hex(&buf)
}

/// "v0, v1, ..." → "xxxx xxxx ..."
pub fn encode_int16_le(text: &str) -> String {
    parsed_values(int16_tokens(text))
        .into_iter()
        .map(encode_value)
        .collect::<Vec<_>>()
        .join(" ")
}
