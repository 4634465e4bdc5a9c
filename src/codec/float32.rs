// src/codec/float32.rs
// ============================================================================
// FLOAT32 LE - Hex <-> f32 little-endian
// ============================================================================
//
// Decode: 8 dígitos hex (4 bytes) por valor, chunk final incompleto descartado.
// Encode: "1.0, 0.5" → "0000803f 0000003f"
//
// NaN/inf NO se rechazan al decodificar.
//
// ============================================================================

use byteorder::{ByteOrder, LittleEndian};

use super::token::{parse_tokens, parsed_values, SkipReason, TokenOutcome};
use crate::hex::{digits_to_bytes, sanitize, to_hex};

/// Bytes por valor
pub const FLOAT32_BYTES: usize = 4;

/// Decodifica hex libre a valores f32 en orden de entrada
pub fn decode_values(hex: &str) -> Vec<f32> {
    digits_to_bytes(&sanitize(hex))
        .chunks_exact(FLOAT32_BYTES)
        .map(LittleEndian::read_f32)
        .collect()
}

/// Texto decimal de un f32.
///
/// Se ensancha a f64 antes de formatear: la salida es el valor exacto del
/// f32 (0.1f32 → "0.10000000149011612"), y vuelve a parsear al mismo patrón.
pub fn format_value(value: f32) -> String {
    format!("{:?}", value as f64)
}

/// Hex → "v0, v1, ..."
pub fn decode_float32_le(hex: &str) -> String {
    decode_values(hex)
        .into_iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parsea un token como f32.
/// Un finito que desborda f32 al reducirlo se considera fuera de rango.
pub fn parse_float32(token: &str) -> Result<f32, SkipReason> {
    let wide: f64 = token.parse().map_err(|_| SkipReason::Unparseable)?;
    let narrow = wide as f32;
    if wide.is_finite() && narrow.is_infinite() {
        return Err(SkipReason::OutOfRange);
    }
    Ok(narrow)
}

/// Outcome por token del texto separado por comas
pub fn float32_tokens(text: &str) -> Vec<TokenOutcome<f32>> {
    parse_tokens(text, parse_float32)
}

/// Un f32 → 8 dígitos hex LE en minúsculas
pub fn encode_value(value: f32) -> String {
    let mut buf = [0u8; FLOAT32_BYTES];
    LittleEndian::write_f32(&mut buf, value);
    to_hex(&buf)
}

/// "v0, v1, ..." → "xxxxxxxx xxxxxxxx ..."; tokens inválidos se saltan
pub fn encode_float32_le(text: &str) -> String {
    parsed_values(float32_tokens(text))
        .into_iter()
        .map(encode_value)
        .collect::<Vec<_>>()
        .join(" ")
}
