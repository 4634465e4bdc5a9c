// src/viz/mod.rs
// ============================================================================
// VIZ - Normalización de secuencias numéricas a rejilla de intensidades
// ============================================================================
//
// N valores → rejilla cuadrada de lado ceil(sqrt(N)), row-major.
// Cada valor → gris lineal en [0, 255]; celdas sin valor quedan en negro.
//
// El render a pantalla queda fuera; aquí solo se produce la rejilla y, como
// mucho, un RgbImage ampliado por vecino más cercano.
//
// ============================================================================

use image::{Rgb, RgbImage};

use crate::error::{Error, Result};

/// Escala del preview (cada celda → 10×10 píxeles)
pub const PREVIEW_SCALE: u32 = 10;

/// Color centinela del modo int16
pub const CYAN: [u8; 3] = [0, 255, 255];

/// Interpretación de los valores a visualizar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Float32,
    Int16,
}

impl Mode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "float32" | "f32" => Some(Self::Float32),
            "int16" | "i16" => Some(Self::Int16),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float32 => write!(f, "float32"),
            Self::Int16 => write!(f, "int16"),
        }
    }
}

/// Rejilla cuadrada de tripletas RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    side: usize,
    pixels: Vec<[u8; 3]>,
}

impl IntensityGrid {
    pub fn side(&self) -> usize {
        self.side
    }

    /// Celda (x, y); None fuera de la rejilla
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.side || y >= self.side {
            return None;
        }
        self.pixels.get(y * self.side + x).copied()
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Imagen ampliada `scale` veces por vecino más cercano
    pub fn to_image(&self, scale: u32) -> RgbImage {
        let scale = scale.max(1);
        let side = self.side as u32;
        RgbImage::from_fn(side * scale, side * scale, |x, y| {
            let cx = (x / scale) as usize;
            let cy = (y / scale) as usize;
            Rgb(self.pixels[cy * self.side + cx])
        })
    }
}

/// Parsea el texto de un panel ("1.5, 2, -3") para visualizarlo.
///
/// Tokens en blanco se ignoran; cualquier otro token no numérico aborta.
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .enumerate()
        .filter(|(_, token)| !token.is_empty())
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| Error::InvalidNumber {
                token: token.to_string(),
                index,
            })
        })
        .collect()
}

/// Normaliza `values` a una rejilla de intensidades.
///
/// NaN, ±inf o un rango max - min no finito abortan antes de pintar nada.
pub fn normalize(values: &[f64], mode: Mode) -> Result<IntensityGrid> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFinite { value, index });
    }

    let vmin = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut vmax = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if vmax == vmin {
        vmax += 1.0;
    }
    // Desborda con extremos opuestos enormes; es 0 si el +1 se pierde
    let range = vmax - vmin;
    if !range.is_finite() || range <= 0.0 {
        return Err(Error::BadRange { min: vmin, max: vmax });
    }

    let side = (values.len() as f64).sqrt().ceil() as usize;
    let mut pixels = vec![[0u8; 3]; side * side];

    for (idx, &val) in values.iter().enumerate() {
        let norm = (((val - vmin) / range) * 255.0) as u8;
        pixels[idx] = match mode {
            Mode::Float32 => [norm; 3],
            // vmax sale de los mismos datos: la rama cyan no se alcanza
            // con entradas actuales, pero se mantiene
            Mode::Int16 if val <= vmax => [norm; 3],
            Mode::Int16 => CYAN,
        };
    }

    log::debug!("normalized {} values ({}) into {}x{} grid", values.len(), mode, side, side);

    Ok(IntensityGrid { side, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(matches!(normalize(&[], Mode::Float32), Err(Error::EmptyInput)));
        assert!(matches!(normalize(&[], Mode::Int16), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_linear_mapping() {
        let grid = normalize(&[0.0, 5.0, 10.0, 2.5], Mode::Float32).unwrap();
        assert_eq!(grid.side(), 2);
        assert_eq!(grid.get(0, 0), Some([0, 0, 0]));
        assert_eq!(grid.get(1, 0), Some([127, 127, 127]));
        assert_eq!(grid.get(0, 1), Some([255, 255, 255]));
        assert_eq!(grid.get(1, 1), Some([63, 63, 63]));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_unused_cells_black() {
        let grid = normalize(&[1.0, 2.0, 3.0, 4.0, 5.0], Mode::Int16).unwrap();
        assert_eq!(grid.side(), 3);
        assert_eq!(grid.pixels().len(), 9);
        assert_eq!(grid.get(1, 1), Some([255, 255, 255]));
        for idx in 5..9 {
            assert_eq!(grid.pixels()[idx], [0, 0, 0]);
        }
    }

    #[test]
    fn test_constant_values_nudge_max() {
        // min == max → max + 1, todo queda en 0
        let grid = normalize(&[7.0, 7.0], Mode::Float32).unwrap();
        assert_eq!(grid.side(), 2);
        assert_eq!(grid.get(0, 0), Some([0, 0, 0]));
        assert_eq!(grid.get(1, 0), Some([0, 0, 0]));
    }

    #[test]
    fn test_int16_mode_never_cyan_for_own_data() {
        let values: Vec<f64> = (-300..300).map(|v| v as f64 * 100.0).collect();
        let grid = normalize(&values, Mode::Int16).unwrap();
        assert!(grid.pixels().iter().all(|&p| p != CYAN));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        for mode in [Mode::Float32, Mode::Int16] {
            for text in ["1, nan", "1, inf", "1, -inf"] {
                let values = parse_values(text).unwrap();
                match normalize(&values, mode) {
                    Err(Error::NonFinite { index, .. }) => assert_eq!(index, 1),
                    other => panic!("{} ({}): unexpected {:?}", text, mode, other),
                }
            }
        }
    }

    #[test]
    fn test_overflowing_range_rejected() {
        for mode in [Mode::Float32, Mode::Int16] {
            let values = parse_values("1e308, -1e308").unwrap();
            match normalize(&values, mode) {
                Err(Error::BadRange { min, max }) => {
                    assert_eq!(min, -1e308);
                    assert_eq!(max, 1e308);
                }
                other => panic!("{}: unexpected {:?}", mode, other),
            }

            // 1e308 + 1 == 1e308: rango 0
            let values = parse_values("1e308, 1e308").unwrap();
            assert!(matches!(normalize(&values, mode), Err(Error::BadRange { .. })));
        }
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("1.5, 2,, -3 ,").unwrap(), vec![1.5, 2.0, -3.0]);
        assert!(parse_values("").unwrap().is_empty());

        match parse_values("1, abc") {
            Err(Error::InvalidNumber { token, index }) => {
                assert_eq!(token, "abc");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_to_image_scales_nearest() {
        let grid = normalize(&[0.0, 1.0], Mode::Float32).unwrap();
        let img = grid.to_image(PREVIEW_SCALE);
        assert_eq!(img.dimensions(), (20, 20));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(19, 9).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(5, 15).0, [0, 0, 0]);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from_str("FLOAT32"), Some(Mode::Float32));
        assert_eq!(Mode::from_str("i16"), Some(Mode::Int16));
        assert_eq!(Mode::from_str("u8"), None);
    }
}
