// src/builder.rs
// ============================================================================
// BUILDER - Orquestación de las operaciones sobre archivos
// ============================================================================
//
// El builder es TONTO:
// - NO decide umbrales (los recibe)
// - NO decide rutas por defecto más allá de <stem>_decoded.txt
// - Solo lee, segmenta/normaliza, escribe
//
// ============================================================================

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::files::{decoded_output_path, read_buffer, write_atomic, write_preview};
use crate::magic::{render_document, segment_with, Plausibility, SegmentInfo, SegmentSummary};
use crate::viz::{normalize, parse_values, Mode, PREVIEW_SCALE};

/// Resultado de float32 magic sobre un archivo
#[derive(Debug, Serialize)]
pub struct MagicReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: SegmentSummary,
    pub segments: Vec<SegmentInfo>,
}

/// Segmenta `input` y escribe el documento en `output`
/// (o en `<stem>_decoded.txt` junto al input).
pub fn decode_file(
    input: &Path,
    output: Option<&Path>,
    bounds: &Plausibility,
) -> Result<MagicReport> {
    let buffer = read_buffer(input)?;
    log::info!("read {} bytes from {}", buffer.len(), input.display());

    let segments = segment_with(&buffer, bounds);
    let document = render_document(&segments);

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| decoded_output_path(input));
    write_atomic(&output, document.as_bytes())?;

    Ok(MagicReport {
        input: input.to_path_buf(),
        output,
        summary: SegmentSummary::from_segments(&segments),
        segments: segments.iter().map(|s| s.info()).collect(),
    })
}

/// Parsea un panel de texto numérico y escribe su preview PNG.
/// Devuelve el lado de la rejilla.
pub fn visualize_text(text: &str, mode: Mode, output: &Path) -> Result<usize> {
    let values = parse_values(text)?;
    let grid = normalize(&values, mode)?;
    write_preview(output, &grid, PREVIEW_SCALE)?;
    Ok(grid.side())
}
