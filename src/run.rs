use crate::core::engine::{self, RunConfig};
use crate::core::metrics::EMA_SPAN;
use crate::report;
use anyhow::{Context, Result};
use std::env;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

const INPUT_CSV: &str = "deepvstripes-querytime-d.csv";
const OUT_PNG: &str = "deepvstripes-querytime-d.png";
const OUT_SVG: &str = "deepvstripes-querytime-d.svg";

pub fn entry() -> Result<()> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    let t_engine = Instant::now();
    let output = engine::run(RunConfig {
        input: Path::new(INPUT_CSV).to_path_buf(),
        span: EMA_SPAN,
    })?;
    stage_done(stats, "engine", t_engine);

    let t_report = Instant::now();
    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    report::table_txt::write(&mut w, &output)?;
    w.flush()?;
    stage_done(stats, "report", t_report);

    let t_png = Instant::now();
    report::chart::write_png(Path::new(OUT_PNG), &output.derived)
        .with_context(|| format!("failed to write {OUT_PNG}"))?;
    stage_done(stats, "chart.png", t_png);

    let t_svg = Instant::now();
    report::chart::write_svg(Path::new(OUT_SVG), &output.derived)
        .with_context(|| format!("failed to write {OUT_SVG}"))?;
    stage_done(stats, "chart.svg", t_svg);

    println!("saved {OUT_PNG} and {OUT_SVG}");

    if stats {
        eprintln!("STRIPES_STATS total={}", fmt_dur(t0.elapsed()));
    }
    Ok(())
}

fn stats_enabled() -> bool {
    matches!(env::var("STRIPES_STATS").as_deref(), Ok("1"))
}

fn stage_done(stats: bool, name: &str, t: Instant) {
    if stats {
        eprintln!("STRIPES_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
}

fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
