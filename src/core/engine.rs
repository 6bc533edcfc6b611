use crate::core::io;
use crate::core::metrics;
use crate::core::model::{StatsTable, TrialTable};
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

pub struct RunConfig {
    pub input: PathBuf,
    pub span: f64,
}

pub struct RunOutput {
    pub table: TrialTable,
    pub derived: StatsTable,
}

pub fn run(cfg: RunConfig) -> Result<RunOutput> {
    let stats = stats_enabled();

    let t_load = Instant::now();
    let table = io::load_table(&cfg.input)?;
    log_stage(stats, "engine.load", t_load);

    let t_reduce = Instant::now();
    let derived = metrics::summarize(&table, cfg.span);
    log_stage(stats, "engine.reduce", t_reduce);

    Ok(RunOutput { table, derived })
}

fn stats_enabled() -> bool {
    matches!(env::var("STRIPES_STATS").as_deref(), Ok("1"))
}

fn log_stage(stats: bool, name: &str, t: Instant) {
    if stats {
        eprintln!(
            "STRIPES_STATS stage={} time={}ms",
            name,
            t.elapsed().as_millis()
        );
    }
}
