//! Timing probe for the resultant on a batch of synthetic arches.
//!
//! Prints the point of application of the first arch and the mean time per
//! `compute` call over the batch.

use std::time::Instant;

use funicular::prelude::*;

fn main() {
    let cfg = ArchCfg::default();
    let systems: Vec<ForceSystem> = (0..1000)
        .map(|index| {
            ForceSystem::new(draw_arch_forces(cfg, ReplayToken { seed: 5, index }))
                .expect("sampled arch is a valid force system")
        })
        .collect();

    let start = Instant::now();
    let mut failures = 0usize;
    let mut first = None;
    for sys in &systems {
        match compute(sys, None) {
            Ok(res) => {
                first.get_or_insert(res.point_of_application);
            }
            Err(_) => failures += 1,
        }
    }
    let per_call_us = start.elapsed().as_secs_f64() * 1e6 / systems.len() as f64;

    if let Some(p) = first {
        println!("teeth={} first_point_gr=({:.3}, {:.3})", cfg.teeth, p.x, p.y);
    }
    println!("arches={} failures={failures}", systems.len());
    println!("compute_time_us={per_call_us:.3}");
}
