// src/codec/token.rs
// ============================================================================
// TOKENS - Resultado por token de los encoders numéricos
// ============================================================================
//
// Los encoders trabajan "best effort": un token que no se puede parsear se
// salta y se sigue con el resto. Cada token produce un TokenOutcome.
//
// ============================================================================

use std::fmt;

/// Motivo por el que un token no llega a la salida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Token vacío tras trim (",," o texto vacío)
    Empty,
    /// No es un número del tipo esperado
    Unparseable,
    /// Es un número pero no cabe en el ancho destino
    OutOfRange,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Unparseable => write!(f, "unparseable"),
            Self::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Resultado de parsear un token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenOutcome<T> {
    Parsed(T),
    Skipped { token: String, reason: SkipReason },
}

impl<T> TokenOutcome<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Self::Parsed(v) => Some(v),
            Self::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Parte `text` por comas, hace trim de cada token y aplica `parse`.
/// Devuelve un outcome por token, en orden.
pub fn parse_tokens<T, F>(text: &str, parse: F) -> Vec<TokenOutcome<T>>
where
    F: Fn(&str) -> Result<T, SkipReason>,
{
    text.split(',')
        .map(str::trim)
        .map(|token| {
            let result = if token.is_empty() {
                Err(SkipReason::Empty)
            } else {
                parse(token)
            };
            match result {
                Ok(v) => TokenOutcome::Parsed(v),
                Err(reason) => TokenOutcome::Skipped { token: token.to_string(), reason },
            }
        })
        .collect()
}

/// Se queda con los valores parseados; los saltados van al log en debug
pub fn parsed_values<T>(outcomes: Vec<TokenOutcome<T>>) -> Vec<T> {
    let mut values = Vec::with_capacity(outcomes.len());
    for (idx, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            TokenOutcome::Parsed(v) => values.push(v),
            TokenOutcome::Skipped { token, reason } => {
                log::debug!("skipping token #{} {:?}: {}", idx, token, reason);
            }
        }
    }
    values
}
