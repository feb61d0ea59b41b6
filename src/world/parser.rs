use crate::error::{ParseError, Result};

/// Parse a `row,col` board coordinate. Anything but two non-negative integers is rejected.
pub fn parse_coordinate(src: &str) -> Option<(usize, usize)> {
    let (row, col) = src.trim().split_once(',')?;
    let row = row.trim().parse().ok()?;
    let col = col.trim().parse().ok()?;
    Some((row, col))
}

/// Parse a wave schedule such as `2:1,4:3` into `(turn, bee count)` pairs
pub fn parse_waves(src: &str) -> Result<Vec<(u32, usize)>> {
    let mut waves = Vec::new();

    for entry in src.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (turn, count) = entry
            .split_once(':')
            .ok_or_else(|| ParseError::InvalidWave(entry.to_string()))?;
        let turn = turn
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidWave(entry.to_string()))?;
        let count = count
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidWave(entry.to_string()))?;
        waves.push((turn, count));
    }

    Ok(waves)
}
