// src/error.rs
// ============================================================================
// ERRORS - Errores de la librería
// ============================================================================
//
// Los tokens mal formados NO son errores (ver codec::TokenOutcome).
// Aquí solo viven los fallos que abortan una operación concreta.
//
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Visualización sin ningún valor numérico
    #[error("No valid numbers to visualize")]
    EmptyInput,

    /// Token no numérico en un panel a visualizar
    #[error("Invalid number '{token}' at position {index}")]
    InvalidNumber { token: String, index: usize },

    /// NaN o ±inf en los valores a visualizar
    #[error("Non-finite value {value} at position {index}")]
    NonFinite { value: f64, index: usize },

    /// max - min no es un rango finito y positivo
    #[error("Cannot normalize value range [{min}, {max}]")]
    BadRange { min: f64, max: f64 },

    /// Fallo leyendo o escribiendo un archivo
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fallo codificando el PNG de preview
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::EmptyInput.to_string(), "No valid numbers to visualize");

        let err = Error::io(
            "/tmp/x.bin",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "I/O error on /tmp/x.bin: gone");

        let err = Error::NonFinite { value: f64::NAN, index: 1 };
        assert_eq!(err.to_string(), "Non-finite value NaN at position 1");
    }
}
