// src/codec/endian.rs
// ============================================================================
// ENDIAN - Inversión del orden de bytes en hex de longitud arbitraria
// ============================================================================

use crate::hex::sanitize;

/// "ab cd ef" → "ef cd ab"
///
/// Agrupa de 2 en 2 desde el inicio; un dígito suelto al final es su propio
/// token (y por tanto acaba el primero).
pub fn reverse_byte_order(hex: &str) -> String {
    let digits = sanitize(hex);
    // sanitize sólo deja ASCII, así que los chunks son UTF-8 válido
    let tokens: Vec<&str> = digits
        .as_bytes()
        .chunks(2)
        .filter_map(|c| std::str::from_utf8(c).ok())
        .collect();
    tokens.into_iter().rev().collect::<Vec<_>>().join(" ")
}

/// "ef cd ab" → "abcdef". No sanea: los tokens se toman tal cual.
pub fn unreverse_byte_order(text: &str) -> String {
    text.split_whitespace().rev().collect()
}
