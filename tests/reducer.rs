use stripes_eval::core::metrics::{EMA_SPAN, row_summaries, summarize};
use stripes_eval::core::model::TrialTable;

fn table(index: Vec<f64>, trials: Vec<Vec<f64>>) -> TrialTable {
    TrialTable { index, trials }
}

fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-12, "got={got} want={want}");
}

#[test]
fn two_row_scenario_matches_reference_stats() {
    let t = table(vec![0.0, 1.0], vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
    let rows = row_summaries(&t);

    assert_close(rows[0].min, 1.0);
    assert_close(rows[0].max, 3.0);
    assert_close(rows[0].mean, 2.0);
    assert_close(rows[0].median, 2.0);
    assert_close(rows[0].q1, 1.5);
    assert_close(rows[0].q3, 2.5);

    assert_close(rows[1].min, 2.0);
    assert_close(rows[1].max, 4.0);
    assert_close(rows[1].mean, 3.0);
    assert_close(rows[1].median, 3.0);
    assert_close(rows[1].q1, 2.5);
    assert_close(rows[1].q3, 3.5);
}

#[test]
fn single_trial_column_collapses_to_that_value() {
    let values = [12.5, 7.0, 903.25];
    let t = table(
        vec![0.1, 0.2, 0.3],
        values.iter().map(|&v| vec![v]).collect(),
    );
    for (row, &v) in row_summaries(&t).iter().zip(&values) {
        assert_close(row.min, v);
        assert_close(row.max, v);
        assert_close(row.mean, v);
        assert_close(row.median, v);
        assert_close(row.q1, v);
        assert_close(row.q3, v);
    }
}

#[test]
fn order_statistics_are_ordered_per_row() {
    let t = table(
        vec![1.0, 2.0, 3.0, 4.0],
        vec![
            vec![5.0, 1.0, 9.0, 3.0, 7.0],
            vec![100.0, 100.0, 100.0, 100.0],
            vec![2.0, 2.0, 8.0],
            vec![0.5, 400.0, 17.0, 17.0, 3.25, 88.0],
        ],
    );
    for row in row_summaries(&t) {
        assert!(row.min <= row.q1, "{row:?}");
        assert!(row.q1 <= row.median, "{row:?}");
        assert!(row.median <= row.q3, "{row:?}");
        assert!(row.q3 <= row.max, "{row:?}");
    }
}

#[test]
fn derived_index_matches_input_index() {
    let index = vec![0.0001, 0.0004, 0.0002, 0.0016];
    let t = table(
        index.clone(),
        vec![
            vec![10.0, 20.0],
            vec![30.0, 40.0],
            vec![50.0, 60.0],
            vec![70.0, 80.0],
        ],
    );
    let derived = summarize(&t, EMA_SPAN);
    assert_eq!(derived.index, index);
}

#[test]
fn summarize_is_deterministic() {
    let t = table(
        vec![0.1, 0.2, 0.3],
        vec![
            vec![3.0, 1.0, 4.0, 1.0, 5.0],
            vec![9.0, 2.0, 6.0, 5.0, 3.0],
            vec![5.0, 8.0, 9.0, 7.0, 9.0],
        ],
    );
    assert_eq!(summarize(&t, EMA_SPAN), summarize(&t, EMA_SPAN));
}

#[test]
fn min_mean_position_matches_brute_force() {
    let means = [90.0, 60.0, 30.0, 25.0, 40.0, 80.0, 20.0, 95.0];
    let t = table(
        (0..means.len()).map(|i| i as f64 * 0.0001).collect(),
        means.iter().map(|&m| vec![m]).collect(),
    );
    let derived = summarize(&t, EMA_SPAN);

    let mut best = 0usize;
    for i in 1..derived.mean.len() {
        if derived.mean[i] < derived.mean[best] {
            best = i;
        }
    }

    let (pos, delta) = derived.min_mean_position().expect("non-empty table");
    assert_eq!(pos, best);
    assert_close(delta, derived.index[best]);
}

#[test]
fn min_mean_position_empty_table_is_none() {
    let derived = summarize(&table(vec![], vec![]), EMA_SPAN);
    assert!(derived.min_mean_position().is_none());
}
