use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nearest::api::{Algo, CloudCfg, CloudKind, ReplayToken, SolveCfg};
use nearest::{ClosestPair, Point};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest-pair solver runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write a random point cloud as an x,y CSV
    Gen {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Draw clustered (non-uniform) points instead of uniform ones
        #[arg(long)]
        clustered: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Solve a CSV point set and write the result as JSON
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// One of: bf, bf-x, dc, dc-par
        #[arg(long, default_value = "dc")]
        algo: String,
        /// Thread budget for dc-par (values below 1 mean sequential)
        #[arg(long, default_value_t = 1)]
        threads: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run every solver on one random cloud and check they agree
    Compare {
        #[arg(long, default_value_t = 10_000)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 4)]
        threads: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON written by `solve`.
#[derive(Debug, Serialize)]
struct SolveReport {
    algo: &'static str,
    n: usize,
    threads: usize,
    /// `null` when fewer than two points were given.
    dmin: Option<f64>,
    p1: Option<[f64; 2]>,
    p2: Option<[f64; 2]>,
    distance_evals: u64,
    elapsed_ms: f64,
}

impl SolveReport {
    fn new(algo: Algo, n: usize, threads: usize, res: &ClosestPair, evals: u64, ms: f64) -> Self {
        let found = res.is_found();
        let xy = |p: &Point| found.then(|| [p.x, p.y]);
        Self {
            algo: algo.name(),
            n,
            threads,
            dmin: found.then_some(res.dmin),
            p1: xy(&res.p1),
            p2: xy(&res.p2),
            distance_evals: evals,
            elapsed_ms: ms,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            n,
            seed,
            clustered,
            out,
        } => gen(n, seed, clustered, &out),
        Action::Solve {
            input,
            algo,
            threads,
            out,
        } => solve(&input, &algo, threads, &out).map(|_| ()),
        Action::Compare { n, seed, threads } => compare(n, seed, threads),
        Action::Report => report(),
    }
}

fn cloud_cfg(n: usize, clustered: bool) -> CloudCfg {
    let kind = if clustered {
        CloudKind::Clustered {
            clusters: 8,
            spread: 0.01,
        }
    } else {
        CloudKind::Uniform
    };
    CloudCfg { n, side: 1.0, kind }
}

fn gen(n: usize, seed: u64, clustered: bool, out: &Path) -> Result<()> {
    tracing::info!(n, seed, clustered, out = %out.display(), "gen");
    let pts = nearest::rand::draw_cloud(cloud_cfg(n, clustered), ReplayToken::new(seed));
    points::write_points(out, &pts)?;
    write_sidecar(
        out,
        Payload::new(
            "gen",
            serde_json::json!({ "n": n, "seed": seed, "clustered": clustered }),
        ),
    )?;
    Ok(())
}

fn solve(input: &Path, algo: &str, threads: usize, out: &Path) -> Result<SolveReport> {
    let Some(algo) = Algo::from_name(algo) else {
        bail!("unknown algo `{algo}` (expected one of bf, bf-x, dc, dc-par)");
    };
    let mut pts = points::read_points(input)?;
    tracing::info!(algo = algo.name(), n = pts.len(), threads, input = %input.display(), "solve");

    let cfg = SolveCfg::with_threads(threads);
    let start = Instant::now();
    let (res, stats) = algo.solve(&mut pts, cfg);
    let ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        dmin = res.dmin,
        distance_evals = stats.distance_evals,
        forks = stats.forks,
        elapsed_ms = ms,
        "solved"
    );

    let report = SolveReport::new(algo, pts.len(), cfg.threads.get(), &res, stats.distance_evals, ms);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Payload::new(
            "solve",
            serde_json::json!({
                "input": input.to_string_lossy(),
                "algo": algo.name(),
                "threads": cfg.threads.get(),
            }),
        )
        .with_results(serde_json::json!({
            "n": report.n,
            "dmin": report.dmin,
            "distance_evals": report.distance_evals,
            "forks": stats.forks,
        })),
    )?;
    Ok(report)
}

fn compare(n: usize, seed: u64, threads: usize) -> Result<()> {
    tracing::info!(n, seed, threads, "compare");
    let pts = nearest::rand::draw_cloud(cloud_cfg(n, false), ReplayToken::new(seed));
    let cfg = SolveCfg::with_threads(threads);
    let mut reference: Option<f64> = None;
    for algo in Algo::ALL {
        let mut work = pts.clone();
        let start = Instant::now();
        let (res, stats) = algo.solve(&mut work, cfg);
        let ms = start.elapsed().as_secs_f64() * 1e3;
        tracing::info!(
            algo = algo.name(),
            dmin = res.dmin,
            distance_evals = stats.distance_evals,
            forks = stats.forks,
            elapsed_ms = ms,
            "solver"
        );
        match reference {
            None => reference = Some(res.dmin),
            Some(d) if res.dmin.is_infinite() && d.is_infinite() => {}
            Some(d) => {
                if (res.dmin - d).abs() > 1e-12 * d.abs().max(1.0) {
                    bail!("{} disagrees: dmin {} vs {}", algo.name(), res.dmin, d);
                }
            }
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "nearest_version": nearest::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn solve_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tri.csv");
        std::fs::write(&input, "x,y\n0,0\n3,4\n1,1\n").unwrap();
        let out = dir.path().join("out/result.json");
        let report = solve(&input, "dc-par", 2, &out).unwrap();
        assert!((report.dmin.unwrap() - 2f64.sqrt()).abs() < 1e-12);
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["algo"], "dc-par");
        assert_eq!(parsed["n"], 3);
        let prov: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("out/result.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["results"]["n"], 3);
        assert_eq!(prov["results"]["distance_evals"], report.distance_evals);
    }

    #[test]
    fn single_point_reports_null_dmin() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("one.csv");
        std::fs::write(&input, "x,y\n2.5,1\n").unwrap();
        let report = solve(&input, "bf", 1, &dir.path().join("r.json")).unwrap();
        assert_eq!(report.dmin, None);
        assert_eq!(report.p1, None);
    }

    #[test]
    fn unknown_algo_is_rejected() {
        let dir = tempdir().unwrap();
        let err = solve(&dir.path().join("x.csv"), "fast", 1, &dir.path().join("r.json"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown algo"));
    }

    #[test]
    fn gen_then_compare_agree() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("cloud.csv");
        gen(500, 3, true, &out).unwrap();
        assert_eq!(points::read_points(&out).unwrap().len(), 500);
        compare(2_000, 3, 4).unwrap();
    }
}
