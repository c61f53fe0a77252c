//! Image-neighborhood objective.
//!
//! Model
//! - Draw a pixel uniformly from the image interior, gather its 3×3
//!   neighborhood, and decode each color to linear RGB (`(raw/255)^gamma`).
//! - Bound the nine colors with the candidate axes (support extents) and take
//!   the k-DOP volume.
//! - Average over a fixed sample count. Sample `i` always uses the stream
//!   `Pcg::new(seed + i)`, so every candidate is scored on the same pixels.

use nalgebra::Vector3;
use rayon::prelude::*;

use super::{ExecMode, Objective, ObjectiveError};
use crate::dop::{kdop_volume, support_extents};
use crate::rng::Pcg;

/// Interleaved 8-bit RGB raster, row-major.
#[derive(Clone, Debug)]
pub struct ColorImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ColorImage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ObjectiveError> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(ObjectiveError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (x + y * self.width) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Sampling parameters for `ImageObjective`.
#[derive(Clone, Copy, Debug)]
pub struct ImageObjectiveCfg {
    /// Neighborhoods averaged per evaluation.
    pub samples: usize,
    /// Base seed; sample `i` uses `seed + i`.
    pub seed: u32,
    /// Decoding exponent applied to `raw / 255`.
    pub gamma: f64,
    pub mode: ExecMode,
}

impl Default for ImageObjectiveCfg {
    fn default() -> Self {
        Self {
            samples: 10_000,
            seed: 0,
            gamma: 2.2,
            mode: ExecMode::Parallel,
        }
    }
}

/// Mean k-DOP volume of sampled 3×3 color neighborhoods.
#[derive(Clone, Debug)]
pub struct ImageObjective {
    image: ColorImage,
    cfg: ImageObjectiveCfg,
    decode: [f64; 256],
}

impl ImageObjective {
    pub fn new(image: ColorImage, cfg: ImageObjectiveCfg) -> Result<Self, ObjectiveError> {
        if image.width < 3 || image.height < 3 {
            return Err(ObjectiveError::ImageTooSmall {
                width: image.width,
                height: image.height,
            });
        }
        let mut decode = [0.0; 256];
        for (raw, slot) in decode.iter_mut().enumerate() {
            *slot = (raw as f64 / 255.0).powf(cfg.gamma);
        }
        Ok(Self { image, cfg, decode })
    }

    #[inline]
    pub fn cfg(&self) -> &ImageObjectiveCfg {
        &self.cfg
    }

    /// Interior pixel for one sample stream: `clamp(int(u*(n-2)+1), 1, n-2)`
    /// per coordinate, x first.
    fn sample_position(&self, rng: &mut Pcg) -> (usize, usize) {
        let pick = |rng: &mut Pcg, n: usize| -> usize {
            let raw = (rng.uniform() * (n - 2) as f32 + 1.0) as i64;
            raw.clamp(1, n as i64 - 2) as usize
        };
        let x = pick(rng, self.image.width);
        let y = pick(rng, self.image.height);
        (x, y)
    }

    /// Linear colors of the 3×3 block centered at `(x, y)`, indexed
    /// `(dx + 1) + 3 * (dy + 1)`.
    fn neighborhood(&self, x: usize, y: usize) -> [Vector3<f64>; 9] {
        let mut out = [Vector3::zeros(); 9];
        for dy in 0..3 {
            for dx in 0..3 {
                let [r, g, b] = self.image.pixel(x + dx - 1, y + dy - 1);
                out[dx + 3 * dy] = Vector3::new(
                    self.decode[r as usize],
                    self.decode[g as usize],
                    self.decode[b as usize],
                );
            }
        }
        out
    }

    /// Volume contributed by sample `index`.
    pub fn sample_volume(&self, axes: &[Vector3<f64>], index: usize) -> f64 {
        let mut rng = Pcg::new(self.cfg.seed.wrapping_add(index as u32));
        let (x, y) = self.sample_position(&mut rng);
        let colors = self.neighborhood(x, y);
        let extents = support_extents(axes, &colors);
        kdop_volume(axes, &extents)
    }
}

impl Objective for ImageObjective {
    fn evaluate(&self, axes: &[Vector3<f64>]) -> f64 {
        let n = self.cfg.samples;
        if n == 0 {
            return 0.0;
        }
        let sum: f64 = match self.cfg.mode {
            ExecMode::Sequential => (0..n).map(|i| self.sample_volume(axes, i)).sum(),
            ExecMode::Parallel => (0..n)
                .into_par_iter()
                .map(|i| self.sample_volume(axes, i))
                .sum(),
        };
        sum / n as f64
    }
}
