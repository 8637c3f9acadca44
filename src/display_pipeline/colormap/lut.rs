//! Gradient lookup tables
//!
//! Each map is a set of evenly spaced RGB anchor points; sampling
//! interpolates linearly between the two surrounding anchors.

use crate::display_pipeline::colormap::types::ColorMap;

const GRAY: &[[u8; 3]] = &[[0, 0, 0], [255, 255, 255]];

const VIRIDIS: &[[u8; 3]] = &[
    [68, 1, 84],
    [59, 82, 139],
    [33, 144, 140],
    [92, 200, 99],
    [253, 231, 37],
];

const PLASMA: &[[u8; 3]] = &[
    [13, 8, 135],
    [126, 3, 168],
    [204, 71, 120],
    [248, 149, 64],
    [240, 249, 33],
];

const INFERNO: &[[u8; 3]] = &[
    [0, 0, 4],
    [87, 16, 110],
    [188, 55, 84],
    [249, 142, 9],
    [252, 255, 164],
];

const MAGMA: &[[u8; 3]] = &[
    [0, 0, 4],
    [81, 18, 124],
    [183, 55, 121],
    [252, 137, 97],
    [252, 253, 191],
];

const TURBO: &[[u8; 3]] = &[
    [48, 18, 59],
    [62, 155, 254],
    [139, 252, 98],
    [249, 140, 53],
    [122, 4, 3],
];

const JET: &[[u8; 3]] = &[
    [0, 0, 128],
    [0, 0, 255],
    [0, 255, 255],
    [255, 255, 0],
    [255, 0, 0],
    [128, 0, 0],
];

const HOT: &[[u8; 3]] = &[
    [0, 0, 0],
    [255, 0, 0],
    [255, 255, 0],
    [255, 255, 255],
];

const COOL: &[[u8; 3]] = &[[0, 255, 255], [255, 0, 255]];

impl ColorMap {
    fn anchors(&self) -> &'static [[u8; 3]] {
        match self {
            ColorMap::Gray => GRAY,
            ColorMap::Viridis => VIRIDIS,
            ColorMap::Plasma => PLASMA,
            ColorMap::Inferno => INFERNO,
            ColorMap::Magma => MAGMA,
            ColorMap::Turbo => TURBO,
            ColorMap::Jet => JET,
            ColorMap::Hot => HOT,
            ColorMap::Cool => COOL,
        }
    }

    /// Map a normalized intensity to an RGB color.
    ///
    /// `t` is clamped to [0, 1]; non-finite values sample the bottom anchor.
    pub fn sample(&self, t: f32) -> [u8; 3] {
        let anchors = self.anchors();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        let scaled = t * (anchors.len() - 1) as f32;
        let idx = (scaled as usize).min(anchors.len() - 2);
        let frac = scaled - idx as f32;

        let lo = anchors[idx];
        let hi = anchors[idx + 1];
        [
            lerp(lo[0], hi[0], frac),
            lerp(lo[1], hi[1], frac),
            lerp(lo[2], hi[2], frac),
        ]
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
