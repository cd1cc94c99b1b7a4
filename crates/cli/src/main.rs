use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use funicular::prelude::*;
use funicular::sample::arch_outline;
use std::fs;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::InputDoc;

#[derive(Parser)]
#[command(name = "funicular-cli")]
#[command(about = "Resultant and point of application for dental arch force systems")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute resultant, point of application and bounds; writes JSON plus provenance
    Compute {
        /// Force system (.json document or .csv with x1,y1,x2,y2)
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Arch outline JSON ([[x, y], ...]); overrides an arc inside the input
        #[arg(long)]
        arc: Option<String>,
        #[arg(long, default_value_t = 5.0)]
        multiplier: f64,
        #[arg(long, default_value_t = 30.0)]
        turn: f64,
        #[arg(long, default_value_t = 40.0)]
        margin: f64,
        /// Arch midline X for the turning tendency
        #[arg(long)]
        mid_x: Option<f64>,
        /// Millimetres per pixel for the turning tolerance; only used with --mid-x
        #[arg(long, requires = "mid_x")]
        scale: Option<f64>,
        /// Front limit Y for the projection tendency
        #[arg(long)]
        front: Option<f64>,
    },
    /// Write a replayable synthetic arch as an input document
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        teeth: usize,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Thresholds for the report read-outs; all optional.
#[derive(Clone, Copy, Debug, Default)]
struct ReportInputs {
    mid_x: Option<f64>,
    scale: Option<f64>,
    front: Option<f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Compute {
            input,
            out,
            arc,
            multiplier,
            turn,
            margin,
            mid_x,
            scale,
            front,
        } => {
            let cfg = CalcCfg {
                extend_multiplier: multiplier,
                turn_deg: turn,
                bound_margin: margin,
                ..CalcCfg::default()
            };
            let report = ReportInputs {
                mid_x,
                scale,
                front,
            };
            run_compute(&input, &out, arc.as_deref(), cfg, report)
        }
        Action::Sample {
            seed,
            index,
            teeth,
            out,
        } => sample(seed, index, teeth, &out),
        Action::Report => report(),
    }
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run_compute(
    input: &str,
    out: &str,
    arc: Option<&str>,
    cfg: CalcCfg,
    report: ReportInputs,
) -> Result<()> {
    tracing::info!(input, out, arc = ?arc, "compute");
    let doc = input::load(Path::new(input))?;
    let arc = match arc {
        Some(path) => Some(input::load_arc(Path::new(path))?),
        None => doc.arc,
    };

    let mut model = InMemoryModel::new(doc.vectors, arc);
    let result = store_results(&mut model, &cfg).with_context(|| format!("computing {input}"))?;
    let tendencies = Tendencies::evaluate(&result, report.mid_x, report.scale, report.front);

    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    let body = serde_json::json!({
        "result": result,
        "tendencies": tendencies,
    });
    fs::write(out_path, serde_json::to_vec_pretty(&body)?)
        .with_context(|| format!("writing {out}"))?;

    provenance::write_sidecar(
        out_path,
        serde_json::json!({
            "input": input,
            "cfg": cfg,
            "mid_x": report.mid_x,
            "scale": report.scale,
            "front": report.front,
        }),
    )?;
    Ok(())
}

fn sample(seed: u64, index: u64, teeth: usize, out: &str) -> Result<()> {
    tracing::info!(seed, index, teeth, out, "sample");
    let cfg = ArchCfg {
        teeth,
        ..ArchCfg::default()
    };
    let doc = InputDoc {
        vectors: draw_arch_forces(cfg, ReplayToken { seed, index }),
        arc: Some(arch_outline(cfg, 64)),
    };
    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {out}"))?;
    provenance::write_sidecar(
        out_path,
        serde_json::json!({ "seed": seed, "index": index, "arch": cfg }),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "engine": funicular::VERSION,
        "defaults": CalcCfg::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sample_then_compute_round_trip() {
        let dir = tempdir().unwrap();
        let forces = dir.path().join("arch.json");
        let out = dir.path().join("nested").join("result.json");
        let forces_s = forces.to_str().unwrap();
        let out_s = out.to_str().unwrap();

        sample(2, 0, 12, forces_s).unwrap();
        assert!(dir.path().join("arch.provenance.json").exists());

        let report = ReportInputs {
            mid_x: Some(410.0),
            ..ReportInputs::default()
        };
        run_compute(forces_s, out_s, None, CalcCfg::default(), report).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert!(parsed["result"]["pointGr"].is_array());
        assert_eq!(parsed["result"]["debug_rays"].as_array().unwrap().len(), 3);
        assert!(parsed["tendencies"]["turning"].is_string());
        assert!(parsed["tendencies"]["projection"].is_null());
        assert!(out.with_file_name("result.provenance.json").exists());
    }

    #[test]
    fn compute_fails_on_empty_vector_list() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.json");
        fs::write(&input, r#"{"vectors": []}"#).unwrap();
        let out = dir.path().join("r.json");
        let err = run_compute(
            input.to_str().unwrap(),
            out.to_str().unwrap(),
            None,
            CalcCfg::default(),
            ReportInputs::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("empty"));
        assert!(!out.exists());
    }

    #[test]
    fn arc_file_overrides_document_arc_in_bounds() {
        let dir = tempdir().unwrap();
        let forces = dir.path().join("arch.json");
        let arc = dir.path().join("far_arc.json");
        let out = dir.path().join("result.json");
        let doc = InputDoc {
            vectors: draw_arch_forces(ArchCfg::default(), ReplayToken { seed: 5, index: 0 }),
            arc: Some(ArcPath::new(vec![Vec2::new(5000.0, 5000.0)])),
        };
        fs::write(&forces, serde_json::to_vec(&doc).unwrap()).unwrap();
        fs::write(&arc, "[[-5000.0, -4000.0]]").unwrap();

        run_compute(
            forces.to_str().unwrap(),
            out.to_str().unwrap(),
            arc.to_str(),
            CalcCfg::default(),
            ReportInputs::default(),
        )
        .unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let bounds = &parsed["result"]["result_bounds"];
        let coord = |corner: &str, i: usize| bounds[corner][i].as_f64().unwrap();
        // override arc sets the min corner; the document arc is dropped
        assert!((coord("min", 0) + 5040.0).abs() < 1e-9);
        assert!((coord("min", 1) + 4040.0).abs() < 1e-9);
        assert!(coord("max", 0) < 5000.0);
        assert!(coord("max", 1) < 5000.0);
    }

    #[test]
    fn scale_without_mid_x_is_rejected() {
        let base = ["funicular-cli", "compute", "--input", "a.json", "--out", "r.json"];
        let alone = Cmd::try_parse_from(base.iter().copied().chain(["--scale", "0.1"]));
        assert!(alone.is_err());
        let paired = Cmd::try_parse_from(
            base.iter()
                .copied()
                .chain(["--scale", "0.1", "--mid-x", "410"]),
        );
        assert!(paired.is_ok());
    }
}
