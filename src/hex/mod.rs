// src/hex/mod.rs
// ============================================================================
// HEX - Limpieza de texto hexadecimal y helpers de bytes
// ============================================================================
//
// Todo lo que entra como texto pasa por `sanitize` antes de decodificarse:
// espacios, comas, "0x", saltos de línea... se descartan sin error.
//
// ============================================================================

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Elimina todo carácter que no sea dígito hex, conservando el orden.
/// Nunca falla; puede devolver un string vacío.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_hexdigit()).collect()
}

/// Valor (0-15) de un dígito hex ASCII
#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Empareja dígitos hex en bytes.
///
/// Se espera texto ya saneado; cualquier par con un carácter no-hex se ignora.
/// Un nibble suelto al final se descarta.
pub fn digits_to_bytes(digits: &str) -> Vec<u8> {
    digits
        .as_bytes()
        .chunks_exact(2)
        .filter_map(|pair| Some((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect()
}

/// Bytes → hex en minúsculas, 2 dígitos por byte, sin separadores
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_CHARS[(b >> 4) as usize] as char);
        out.push(HEX_CHARS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Un token de 2 dígitos por byte (formato de las líneas de bytes sueltos)
pub fn byte_tokens(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|b| to_hex(std::slice::from_ref(b))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_non_hex() {
        assert_eq!(sanitize("0x3F, 80-00 zz 00\n"), "03F800000");
        assert_eq!(sanitize("ghijk"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_sanitize_keeps_case_and_order() {
        assert_eq!(sanitize("Ab:cD"), "AbcD");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let inputs = ["", "ab cd", "0x12,0x34;ZZ", "ñandú 9f", "\t\tDEAD beef\r\n"];
        for s in inputs {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn test_digits_to_bytes() {
        assert_eq!(digits_to_bytes("00ff7F"), vec![0x00, 0xff, 0x7f]);
        // Nibble final suelto
        assert_eq!(digits_to_bytes("abc"), vec![0xab]);
        assert!(digits_to_bytes("").is_empty());
    }

    #[test]
    fn test_to_hex_lowercase() {
        assert_eq!(to_hex(&[0xAB, 0x01, 0x00]), "ab0100");
        assert_eq!(byte_tokens(&[0xFF, 0x0a]), vec!["ff", "0a"]);
    }
}
