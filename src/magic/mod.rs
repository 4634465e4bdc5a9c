// src/magic/mod.rs
// ============================================================================
// FLOAT32 MAGIC - Detección heurística de runs de float32 en binarios
// ============================================================================
//
// Recorre el buffer con una ventana LE de 4 bytes:
//   - float plausible → se acepta y se avanza 4 bytes
//   - si no (o quedan < 4 bytes) → byte suelto y se avanza 1
//
// Greedy, sin backtracking. Un byte espurio justo antes de floats reales
// puede desalinear la lectura y perderlos; es una limitación conocida.
//
// ============================================================================

pub mod segment;

use byteorder::{ByteOrder, LittleEndian};

pub use segment::{render_document, Segment, SegmentInfo, SegmentSummary};

/// |v| debe ser estrictamente mayor
pub const DEFAULT_MIN_ABS: f64 = 1e-9;
/// |v| debe ser estrictamente menor
pub const DEFAULT_MAX_ABS: f64 = 64.0;

const WINDOW: usize = 4;

/// Umbrales del predicado de plausibilidad.
///
/// La comparación se hace en f64 sobre el valor ensanchado, así los límites
/// son exactamente 1e-9 y 64.0 y no su redondeo a f32.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plausibility {
    pub min_abs: f64,
    pub max_abs: f64,
}

impl Default for Plausibility {
    fn default() -> Self {
        Self {
            min_abs: DEFAULT_MIN_ABS,
            max_abs: DEFAULT_MAX_ABS,
        }
    }
}

impl Plausibility {
    /// `raw` es la misma ventana leída como u32 LE
    #[inline]
    pub fn accepts(&self, value: f32, raw: u32) -> bool {
        let abs = (value as f64).abs();
        value.is_finite() && abs > self.min_abs && abs < self.max_abs && raw != 0
    }
}

/// Acumula el run abierto y cierra segmentos al cambiar de tipo
#[derive(Default)]
struct RunBuilder {
    segments: Vec<Segment>,
    open: Option<Segment>,
}

impl RunBuilder {
    fn push_float(&mut self, offset: usize, value: f32) {
        if let Some(Segment::FloatRun { values, .. }) = &mut self.open {
            values.push(value);
            return;
        }
        self.close();
        self.open = Some(Segment::FloatRun { offset, values: vec![value] });
    }

    fn push_byte(&mut self, offset: usize, byte: u8) {
        if let Some(Segment::ByteRun { bytes, .. }) = &mut self.open {
            bytes.push(byte);
            return;
        }
        self.close();
        self.open = Some(Segment::ByteRun { offset, bytes: vec![byte] });
    }

    fn close(&mut self) {
        if let Some(segment) = self.open.take() {
            self.segments.push(segment);
        }
    }

    fn finish(mut self) -> Vec<Segment> {
        self.close();
        self.segments
    }
}

/// Segmenta con los umbrales por defecto
pub fn segment(buffer: &[u8]) -> Vec<Segment> {
    segment_with(buffer, &Plausibility::default())
}

/// Segmenta `buffer` en runs de float32 plausibles y bytes sueltos
pub fn segment_with(buffer: &[u8], bounds: &Plausibility) -> Vec<Segment> {
    let mut runs = RunBuilder::default();
    let mut i = 0;

    while i < buffer.len() {
        if let Some(window) = buffer.get(i..i + WINDOW) {
            let value = LittleEndian::read_f32(window);
            let raw = LittleEndian::read_u32(window);
            if bounds.accepts(value, raw) {
                runs.push_float(i, value);
                i += WINDOW;
                continue;
            }
        }
        runs.push_byte(i, buffer[i]);
        i += 1;
    }

    let segments = runs.finish();
    log::debug!(
        "segmented {} bytes into {} runs",
        buffer.len(),
        segments.len()
    );
    segments
}

/// Buffer → documento de texto
pub fn decode_buffer(buffer: &[u8]) -> String {
    render_document(&segment(buffer))
}
