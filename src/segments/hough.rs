//! Progressive probabilistic Hough transform over a binary edge map.
//!
//! The `imageproc` Hough detects only infinite polar lines, so the crate
//! carries its own segment extractor. Edge pixels are drawn in random
//! order; each draw votes across all angle bins, and once a bin crosses
//! the vote threshold the extractor walks the edge map along that line in
//! both directions, tolerating gaps up to `max_gap`, to recover finite
//! endpoints. Pixels consumed by a walk are released from the working
//! mask, and accepted lines withdraw their votes from the accumulator.
//!
//! The sampling RNG is re-seeded with a fixed constant on every call, so
//! two calls over identical inputs return identical segments.
use super::options::HoughOptions;
use super::types::RawSegment;
use image::GrayImage;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLING_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Capability interface for the line-segment detection stage.
///
/// An empty result means "no segments found" and is normal control flow;
/// implementations never error on degenerate input.
pub trait SegmentDetector: Send + Sync {
    /// Find straight segments in a `{0, on}` edge map.
    fn detect(&self, edges: &GrayImage, opts: &HoughOptions) -> Vec<RawSegment>;
}

/// Default CPU backend implementing the progressive probabilistic Hough
/// transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoughSegments;

impl SegmentDetector for HoughSegments {
    fn detect(&self, edges: &GrayImage, opts: &HoughOptions) -> Vec<RawSegment> {
        if edges.width() == 0 || edges.height() == 0 {
            return Vec::new();
        }
        PphtExtractor::new(edges, opts).run()
    }
}

struct PphtExtractor {
    w: i32,
    h: i32,
    opts: HoughOptions,
    numrho: usize,
    /// (cos, sin) per angle bin, pre-scaled by 1/rho.
    trig: Vec<(f32, f32)>,
    accum: Vec<i32>,
    /// Working copy of the edge map; pixels are released as lines consume them.
    mask: Vec<u8>,
    /// Remaining unprocessed on-pixels.
    points: Vec<(i32, i32)>,
}

impl PphtExtractor {
    fn new(edges: &GrayImage, opts: &HoughOptions) -> Self {
        let w = edges.width() as i32;
        let h = edges.height() as i32;
        let theta = opts.theta_deg.to_radians();
        let numangle = ((std::f32::consts::PI / theta).round() as usize).max(1);
        let numrho = ((((w + h) * 2 + 1) as f32) / opts.rho).round() as usize;
        let irho = 1.0 / opts.rho;

        let trig: Vec<(f32, f32)> = (0..numangle)
            .map(|n| {
                let a = n as f32 * theta;
                (a.cos() * irho, a.sin() * irho)
            })
            .collect();

        let mut mask = vec![0u8; (w * h) as usize];
        let mut points = Vec::new();
        for (y, row) in edges.chunks(w as usize).enumerate() {
            for (x, &px) in row.iter().enumerate() {
                if px > 0 {
                    mask[y * w as usize + x] = 1;
                    points.push((x as i32, y as i32));
                }
            }
        }

        Self {
            w,
            h,
            opts: *opts,
            numrho,
            trig,
            accum: vec![0i32; numangle * numrho],
            mask,
            points,
        }
    }

    #[inline]
    fn rho_index(&self, x: i32, y: i32, n: usize) -> usize {
        let (c, s) = self.trig[n];
        let shift = ((self.numrho - 1) / 2) as i32;
        let r = (x as f32 * c + y as f32 * s).round() as i32 + shift;
        r.clamp(0, self.numrho as i32 - 1) as usize
    }

    fn run(mut self) -> Vec<RawSegment> {
        let mut rng = StdRng::seed_from_u64(SAMPLING_SEED);
        let threshold = self.opts.votes as i32;
        let min_len = self.opts.min_length.round() as i32;
        let max_gap = self.opts.max_gap.round() as i32;
        let mut out = Vec::new();

        let mut count = self.points.len();
        while count > 0 {
            let idx = rng.gen_range(0..count);
            let (x, y) = self.points[idx];
            count -= 1;
            self.points[idx] = self.points[count];

            // The pixel may already belong to an extracted line.
            if self.mask[(y * self.w + x) as usize] == 0 {
                continue;
            }

            let mut max_val = threshold - 1;
            let mut max_n = None;
            for n in 0..self.trig.len() {
                let r = self.rho_index(x, y, n);
                let a = &mut self.accum[n * self.numrho + r];
                *a += 1;
                if *a > max_val {
                    max_val = *a;
                    max_n = Some(n);
                }
            }
            let Some(n) = max_n else {
                continue;
            };

            // Unit step along the line whose normal is (cos, sin); the major
            // axis advances by exactly one pixel per step.
            let (c, s) = self.trig[n];
            let (a_dir, b_dir) = (-s, c);
            let (dx, dy) = if a_dir.abs() > b_dir.abs() {
                (a_dir.signum(), b_dir / a_dir.abs())
            } else {
                (a_dir / b_dir.abs(), b_dir.signum())
            };

            // Walk both directions from the seed, tolerating short gaps.
            let mut ends = [(x, y), (x, y)];
            for (k, end) in ends.iter_mut().enumerate() {
                let (sdx, sdy) = if k == 0 { (dx, dy) } else { (-dx, -dy) };
                let (mut px, mut py) = (x as f32, y as f32);
                let mut gap = 0;
                loop {
                    px += sdx;
                    py += sdy;
                    let (ix, iy) = (px.round() as i32, py.round() as i32);
                    if ix < 0 || ix >= self.w || iy < 0 || iy >= self.h {
                        break;
                    }
                    if self.mask[(iy * self.w + ix) as usize] != 0 {
                        gap = 0;
                        *end = (ix, iy);
                    } else {
                        gap += 1;
                        if gap > max_gap {
                            break;
                        }
                    }
                }
            }

            let good = (ends[0].0 - ends[1].0).abs() >= min_len
                || (ends[0].1 - ends[1].1).abs() >= min_len;

            // Release the walked pixels; accepted lines also withdraw their
            // votes so residual clutter cannot re-trigger the same bin.
            for (k, end) in ends.iter().enumerate() {
                let (sdx, sdy) = if k == 0 { (dx, dy) } else { (-dx, -dy) };
                let (mut px, mut py) = (x as f32, y as f32);
                loop {
                    let (ix, iy) = (px.round() as i32, py.round() as i32);
                    let m_idx = (iy * self.w + ix) as usize;
                    if self.mask[m_idx] != 0 {
                        if good {
                            for n2 in 0..self.trig.len() {
                                let r = self.rho_index(ix, iy, n2);
                                self.accum[n2 * self.numrho + r] -= 1;
                            }
                        }
                        self.mask[m_idx] = 0;
                    }
                    if (ix, iy) == *end {
                        break;
                    }
                    px += sdx;
                    py += sdy;
                }
            }

            if good {
                out.push(RawSegment::new(ends[0].0, ends[0].1, ends[1].0, ends[1].1));
            }
        }

        debug!(
            "PphtExtractor::run {}x{} points={} segments={}",
            self.w,
            self.h,
            self.points.len(),
            out.len()
        );
        out
    }
}
