// src/magic/segment.rs
// ============================================================================
// SEGMENTS - Runs de floats / bytes sueltos y su render a texto
// ============================================================================
//
// Documento de salida: una línea por segmento, en orden de archivo.
//   float run → "1.00000000, 0.50000000"
//   byte run  → "ff 00 7a"
//
// ============================================================================

use serde::Serialize;

use crate::hex::byte_tokens;

/// Decimales fijos de los floats en el documento
pub const FLOAT_DECIMALS: usize = 8;

/// Run contiguo producido por el heurístico. Nunca vacío.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    FloatRun { offset: usize, values: Vec<f32> },
    ByteRun { offset: usize, bytes: Vec<u8> },
}

impl Segment {
    /// Offset del primer byte del run en el buffer original
    pub fn offset(&self) -> usize {
        match self {
            Self::FloatRun { offset, .. } | Self::ByteRun { offset, .. } => *offset,
        }
    }

    /// Bytes del buffer cubiertos por el run (4 por float, 1 por byte)
    pub fn byte_len(&self) -> usize {
        match self {
            Self::FloatRun { values, .. } => values.len() * 4,
            Self::ByteRun { bytes, .. } => bytes.len(),
        }
    }

    pub fn is_float_run(&self) -> bool {
        matches!(self, Self::FloatRun { .. })
    }

    /// Línea de texto del segmento
    pub fn render(&self) -> String {
        match self {
            Self::FloatRun { values, .. } => values
                .iter()
                .map(|&v| format!("{:.*}", FLOAT_DECIMALS, v as f64))
                .collect::<Vec<_>>()
                .join(", "),
            Self::ByteRun { bytes, .. } => byte_tokens(bytes).join(" "),
        }
    }

    pub fn info(&self) -> SegmentInfo {
        let (kind, count) = match self {
            Self::FloatRun { values, .. } => ("float32", values.len()),
            Self::ByteRun { bytes, .. } => ("bytes", bytes.len()),
        };
        SegmentInfo {
            kind,
            offset: self.offset(),
            byte_len: self.byte_len(),
            count,
        }
    }
}

/// Descripción de un segmento para el reporte JSON
#[derive(Debug, Clone, Serialize)]
pub struct SegmentInfo {
    pub kind: &'static str,
    pub offset: usize,
    pub byte_len: usize,
    pub count: usize,
}

/// Une los segmentos en el documento final (sin salto de línea final)
pub fn render_document(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Estadísticas de una segmentación
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentSummary {
    pub float_runs: usize,
    pub byte_runs: usize,
    pub floats: usize,
    pub stray_bytes: usize,
    pub total_bytes: usize,
}

impl SegmentSummary {
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut summary = Self::default();
        for segment in segments {
            summary.record(segment);
        }
        summary
    }

    pub fn record(&mut self, segment: &Segment) {
        match segment {
            Segment::FloatRun { values, .. } => {
                self.float_runs += 1;
                self.floats += values.len();
            }
            Segment::ByteRun { bytes, .. } => {
                self.byte_runs += 1;
                self.stray_bytes += bytes.len();
            }
        }
        self.total_bytes += segment.byte_len();
    }

    /// Fracción del buffer reconocida como float32
    pub fn float_coverage(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        (self.floats * 4) as f64 / self.total_bytes as f64
    }
}
