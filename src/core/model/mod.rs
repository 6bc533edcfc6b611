/// Raw measurements: one row per stripe width, one cell per trial run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrialTable {
    pub index: Vec<f64>,
    pub trials: Vec<Vec<f64>>,
}

impl TrialTable {
    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_trials(&self) -> usize {
        self.trials.first().map_or(0, Vec::len)
    }
}

/// Per-row aggregates after exponential smoothing, indexed like the input.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsTable {
    pub index: Vec<f64>,
    pub median: Vec<f64>,
    pub q1: Vec<f64>,
    pub q3: Vec<f64>,
    pub min: Vec<f64>,
    pub max: Vec<f64>,
    pub mean: Vec<f64>,
}

impl StatsTable {
    /// Argmin over the smoothed mean column. Returns the row position and the
    /// index value there; first row wins on ties.
    pub fn min_mean_position(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &m) in self.mean.iter().enumerate() {
            match best {
                Some((_, cur)) if m >= cur => {}
                _ => best = Some((i, m)),
            }
        }
        best.map(|(i, _)| (i, self.index[i]))
    }
}

/// Linear-interpolation quantile over a sorted slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f64)
}
