use crate::core::model::TrialTable;
use anyhow::{Context, Result, bail};
use memchr::{memchr, memchr_iter};
use std::fs;
use std::path::Path;

/// Loads a comma-delimited table: first column is the row index, remaining
/// columns are trial observations. No header line.
pub fn load_table(path: &Path) -> Result<TrialTable> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_table(&bytes).with_context(|| format!("malformed table in {}", path.display()))
}

pub fn parse_table(bytes: &[u8]) -> Result<TrialTable> {
    let mut table = TrialTable::default();
    let mut width = 0usize;
    let mut line_ends: Vec<usize> = memchr_iter(b'\n', bytes).collect();
    line_ends.push(bytes.len());

    let mut start = 0usize;
    for (line_no, &end) in (1..).zip(&line_ends) {
        let mut line = &bytes[start..end];
        start = end + 1;
        if let [rest @ .., b'\r'] = line {
            line = rest;
        }
        if line.is_empty() {
            continue;
        }
        let fields =
            parse_row(line).with_context(|| format!("line {line_no}"))?;
        if fields.len() < 2 {
            bail!("line {line_no}: expected an index and at least one trial column");
        }
        if table.index.is_empty() {
            width = fields.len();
        } else if fields.len() != width {
            bail!(
                "line {line_no}: expected {width} fields, saw {}",
                fields.len()
            );
        }
        table.index.push(fields[0]);
        table.trials.push(fields[1..].to_vec());
    }

    if table.index.is_empty() {
        bail!("no data rows");
    }
    Ok(table)
}

fn parse_row(line: &[u8]) -> Result<Vec<f64>> {
    let mut fields = Vec::new();
    let mut rest = line;
    loop {
        let (cell, next) = match memchr(b',', rest) {
            Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
            None => (rest, None),
        };
        fields.push(parse_cell(cell)?);
        match next {
            Some(r) => rest = r,
            None => break,
        }
    }
    Ok(fields)
}

fn parse_cell(cell: &[u8]) -> Result<f64> {
    let text = str::from_utf8(cell).unwrap_or("").trim();
    text.parse::<f64>()
        .with_context(|| format!("invalid numeric cell '{}'", String::from_utf8_lossy(cell)))
}
