//! Synthetic dental-arch force systems (deterministic, replayable).
//!
//! Model
//! - `teeth` anchor points on a parabolic arch opening towards +Y (screen down),
//!   left to right. Each force points away from a focus inside the arch, with
//!   bounded angular and length jitter.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::algebra::{angle_of, line_from_polar, Line2};
use crate::resultant::ArcPath;

/// Arch sampler configuration (pixels / degrees).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchCfg {
    pub teeth: usize,
    /// Bottom-centre of the arch (between the last molars).
    pub center: Vector2<f64>,
    pub half_width: f64,
    pub depth: f64,
    /// Mean force length.
    pub force_len: f64,
    /// Relative length jitter, lengths are `force_len * (1 + u)`, `u ∈ [-len_jitter, len_jitter]`.
    pub len_jitter: f64,
    pub angle_jitter_deg: f64,
}

impl Default for ArchCfg {
    fn default() -> Self {
        Self {
            teeth: 12,
            center: Vector2::new(410.0, 690.0),
            half_width: 170.0,
            depth: 250.0,
            force_len: 50.0,
            len_jitter: 0.3,
            angle_jitter_deg: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn arch_point(cfg: &ArchCfg, t: f64) -> Vector2<f64> {
    cfg.center + Vector2::new(t * cfg.half_width, -cfg.depth * (1.0 - t * t))
}

#[inline]
fn arch_param(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        -1.0 + 2.0 * (i as f64) / ((n - 1) as f64)
    }
}

/// Draw one ordered force system (at least one force).
pub fn draw_arch_forces(cfg: ArchCfg, tok: ReplayToken) -> Vec<Line2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.teeth.max(1);
    let lj = cfg.len_jitter.clamp(0.0, 0.9);
    let aj = cfg.angle_jitter_deg.abs();
    let focus = cfg.center - Vector2::new(0.0, cfg.depth * 0.4);
    (0..n)
        .map(|i| {
            let p = arch_point(&cfg, arch_param(i, n) * 0.9);
            let outward = angle_of(&Line2::new(focus, p));
            let angle = outward + (rng.gen::<f64>() * 2.0 - 1.0) * aj;
            let len = cfg.force_len.abs().max(1e-6) * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * lj);
            line_from_polar(p, len, angle)
        })
        .collect()
}

/// Polyline of the arch itself with `samples` points (at least two).
pub fn arch_outline(cfg: ArchCfg, samples: usize) -> ArcPath {
    let n = samples.max(2);
    ArcPath::new((0..n).map(|i| arch_point(&cfg, arch_param(i, n))).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resultant::{compute, ForceSystem};

    #[test]
    fn replay_is_deterministic() {
        let cfg = ArchCfg::default();
        let tok = ReplayToken { seed: 3, index: 9 };
        assert_eq!(draw_arch_forces(cfg, tok), draw_arch_forces(cfg, tok));
        let other = ReplayToken { seed: 3, index: 10 };
        assert_ne!(draw_arch_forces(cfg, tok), draw_arch_forces(cfg, other));
    }

    #[test]
    fn forces_follow_the_arch_left_to_right() {
        let cfg = ArchCfg {
            teeth: 14,
            ..ArchCfg::default()
        };
        let forces = draw_arch_forces(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(forces.len(), 14);
        for w in forces.windows(2) {
            assert!(w[0].p1.x < w[1].p1.x);
        }
        for f in &forces {
            let len = f.length();
            assert!(len >= cfg.force_len * 0.7 - 1e-9 && len <= cfg.force_len * 1.3 + 1e-9);
        }
        let outline = arch_outline(cfg, 32);
        let b = outline.bounds();
        assert!(forces.iter().all(|f| b.contains(f.p1)));
    }

    #[test]
    fn sampled_arches_are_solvable() {
        let cfg = ArchCfg::default();
        for index in 0..20 {
            let forces = draw_arch_forces(cfg, ReplayToken { seed: 11, index });
            let res = compute(&ForceSystem::new(forces).unwrap(), None).unwrap();
            let gr = res.point_of_application;
            assert!(gr.x.is_finite() && gr.y.is_finite());
        }
    }
}
