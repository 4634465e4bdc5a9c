// src/codec/mod.rs
// ============================================================================
// CODEC - Conversiones hex <-> numérico little-endian
// ============================================================================
//
// Política de errores: un token mal formado se descarta y se sigue.
// Ninguna operación del codec falla; el resultado puede ser vacío.
//
// ============================================================================

pub mod endian;
pub mod float32;
pub mod int16;
pub mod token;

// Re-exports
pub use endian::{reverse_byte_order, unreverse_byte_order};
pub use float32::{decode_float32_le, encode_float32_le, float32_tokens};
pub use int16::{decode_int16_le, encode_int16_le, int16_tokens};
pub use token::{SkipReason, TokenOutcome};

/// Las seis conversiones de texto disponibles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    HexToFloat32,
    Float32ToHex,
    HexToInt16,
    Int16ToHex,
    HexToLittleEndian,
    LittleEndianToHex,
}

impl Conversion {
    pub fn apply(&self, input: &str) -> String {
        match self {
            Self::HexToFloat32 => decode_float32_le(input),
            Self::Float32ToHex => encode_float32_le(input),
            Self::HexToInt16 => decode_int16_le(input),
            Self::Int16ToHex => encode_int16_le(input),
            Self::HexToLittleEndian => reverse_byte_order(input),
            Self::LittleEndianToHex => unreverse_byte_order(input),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HexToFloat32 => "hex2f32",
            Self::Float32ToHex => "f322hex",
            Self::HexToInt16 => "hex2i16",
            Self::Int16ToHex => "i162hex",
            Self::HexToLittleEndian => "hex2le",
            Self::LittleEndianToHex => "le2hex",
        }
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(Conversion::HexToFloat32.apply("0000803f"), "1.0");
        assert_eq!(Conversion::Float32ToHex.apply("1.0"), "0000803f");
        assert_eq!(Conversion::HexToInt16.apply("0100"), "1");
        assert_eq!(Conversion::Int16ToHex.apply("1"), "0100");
        assert_eq!(Conversion::HexToLittleEndian.apply("ab cd"), "cd ab");
        assert_eq!(Conversion::LittleEndianToHex.apply("cd ab"), "abcd");
    }

    #[test]
    fn test_names() {
        assert_eq!(Conversion::HexToInt16.to_string(), "hex2i16");
    }
}
