use crate::core::model::{StatsTable, TrialTable, quantile_sorted};

/// Smoothing span shared by all six series.
pub const EMA_SPAN: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSummary {
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Pre-smoothing aggregates, one per input row, across that row's trial cells.
pub fn row_summaries(table: &TrialTable) -> Vec<RowSummary> {
    let mut rows = Vec::with_capacity(table.n_rows());
    let mut sorted: Vec<f64> = Vec::new();
    for trials in &table.trials {
        sorted.clear();
        sorted.extend_from_slice(trials);
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in trials {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        rows.push(RowSummary {
            median: quantile_sorted(&sorted, 0.5),
            q1: quantile_sorted(&sorted, 0.25),
            q3: quantile_sorted(&sorted, 0.75),
            min,
            max,
            mean: sum / trials.len() as f64,
        });
    }
    rows
}

/// Exponential moving average with normalized weights, alpha = 2 / (span + 1).
///
/// y_t = sum_{i=0..t} (1-a)^i x_{t-i} / sum_{i=0..t} (1-a)^i
pub fn ewma(values: &[f64], span: f64) -> Vec<f64> {
    let alpha = 2.0 / (span + 1.0);
    let decay = 1.0 - alpha;
    let mut out = Vec::with_capacity(values.len());
    let mut num = 0.0;
    let mut den = 0.0;
    for &x in values {
        num = x + decay * num;
        den = 1.0 + decay * den;
        out.push(num / den);
    }
    out
}

/// Reduces the trial table to the six smoothed series. The output index is
/// the input index, same values, same order.
pub fn summarize(table: &TrialTable, span: f64) -> StatsTable {
    let rows = row_summaries(table);
    let smoothed = |pick: fn(&RowSummary) -> f64| -> Vec<f64> {
        let series: Vec<f64> = rows.iter().map(pick).collect();
        ewma(&series, span)
    };
    StatsTable {
        index: table.index.clone(),
        median: smoothed(|r| r.median),
        q1: smoothed(|r| r.q1),
        q3: smoothed(|r| r.q3),
        min: smoothed(|r| r.min),
        max: smoothed(|r| r.max),
        mean: smoothed(|r| r.mean),
    }
}
