// src/files/mod.rs
// ============================================================================
// FILES - Lectura completa y escritura atómica
// ============================================================================
//
// Lectura: el archivo entero a memoria (no hay streaming).
// Escritura: todo o nada. Se escribe a un temporal en el mismo directorio
// y se renombra al destino; si algo falla no queda salida parcial.
// El temporal nace 0600; en unix se crea con 0666 & !umask, como un
// archivo normal.
//
// ============================================================================

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tempfile::{Builder, NamedTempFile};

use crate::error::{Error, Result};
use crate::viz::IntensityGrid;

/// Sufijo del documento generado por float32 magic
pub const DECODED_SUFFIX: &str = "_decoded.txt";

/// Lee un archivo binario completo
pub fn read_buffer(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Lee un archivo de texto completo
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// "dump.bin" → "dump_decoded.txt", en el mismo directorio
pub fn decoded_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", stem, DECODED_SUFFIX))
}

/// Escribe `data` en `path` de forma atómica
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = temp_file_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(data).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.flush().map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;

    log::info!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    // open(2) aplica el umask sobre este modo
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

/// Codifica la rejilla como PNG ampliado y lo escribe de forma atómica
pub fn write_preview(path: &Path, grid: &IntensityGrid, scale: u32) -> Result<()> {
    let img = grid.to_image(scale);
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    write_atomic(path, &png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viz::{normalize, Mode};

    #[test]
    fn test_decoded_output_path() {
        assert_eq!(
            decoded_output_path(Path::new("/tmp/dump.bin")),
            PathBuf::from("/tmp/dump_decoded.txt")
        );
        assert_eq!(
            decoded_output_path(Path::new("archive.tar.gz")),
            PathBuf::from("archive.tar_decoded.txt")
        );
        assert_eq!(
            decoded_output_path(Path::new("raw")),
            PathBuf::from("raw_decoded.txt")
        );
    }

    #[test]
    fn test_write_atomic_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_atomic(&path, b"1.00000000\nff").unwrap();
        assert_eq!(read_text(&path).unwrap(), "1.00000000\nff");

        // Sobrescribe
        write_atomic(&path, b"aa").unwrap();
        assert_eq!(read_buffer(&path).unwrap(), b"aa");
    }

    #[test]
    fn test_write_atomic_missing_dir_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_atomic(&path, b"data").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_regular_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_atomic(&path, b"aa").unwrap();

        // Referencia: archivo creado a pelo, 0666 & !umask
        let plain = dir.path().join("plain.txt");
        fs::write(&plain, b"aa").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&plain));
        assert_eq!(mode(&path) & 0o111, 0);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.bin");
        match read_buffer(&path) {
            Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_write_preview_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");
        let grid = normalize(&[1.0, 2.0, 3.0], Mode::Float32).unwrap();

        write_preview(&path, &grid, 10).unwrap();

        let bytes = read_buffer(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (20, 20));
    }
}
