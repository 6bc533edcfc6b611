use crate::core::engine::RunOutput;
use anyhow::Result;
use std::io::Write;

/// Dumps both tables in full, then the stripe width where the smoothed mean
/// bottoms out.
pub fn write<W: Write>(w: &mut W, output: &RunOutput) -> Result<()> {
    let table = &output.table;
    writeln!(
        w,
        "# input: {} rows x {} trials",
        table.n_rows(),
        table.n_trials()
    )?;
    for (i, trials) in table.trials.iter().enumerate() {
        write!(w, "{:.6}", table.index[i])?;
        for v in trials {
            write!(w, "\t{v:.3}")?;
        }
        writeln!(w)?;
    }

    let d = &output.derived;
    writeln!(w)?;
    writeln!(w, "# smoothed statistics (span {})", crate::core::metrics::EMA_SPAN)?;
    writeln!(w, "delta\tmedian\tq1\tq3\tmin\tmax\tmean")?;
    for i in 0..d.index.len() {
        writeln!(
            w,
            "{:.6}\t{:.3}\t{:.3}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
            d.index[i], d.median[i], d.q1[i], d.q3[i], d.min[i], d.max[i], d.mean[i]
        )?;
    }

    if let Some((_, delta)) = d.min_mean_position() {
        writeln!(w)?;
        writeln!(w, "min mean query time at delta = {delta:.6}")?;
    }
    Ok(())
}
