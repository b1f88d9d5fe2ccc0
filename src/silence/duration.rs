use thiserror::Error;

/// Unit symbols and their second factors, largest first. Shared with the
/// relative-time formatter so parse and display agree on units.
pub(crate) const TIME_DELTAS: &[(char, i64)] = &[
    ('w', 7 * 24 * 60 * 60),
    ('d', 24 * 60 * 60),
    ('h', 60 * 60),
    ('m', 60),
    ('s', 1),
];

#[derive(Debug, Error, PartialEq)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,
    #[error("unknown duration unit '{0}'")]
    UnknownUnit(char),
    #[error("invalid duration magnitude '{0}'")]
    BadMagnitude(String),
    #[error("negative duration magnitude {0}")]
    Negative(f64),
}

/// Parses a duration like "2h" or "4d" into seconds.
///
/// Fail-soft: anything that is not a numeric magnitude followed by one of
/// `w`, `d`, `h`, `m`, `s` yields 0, and callers treat 0 as "no duration".
/// Use [`parse_duration_strict`] when the failure should surface instead.
pub fn parse_duration(d: &str) -> i64 {
    let Some(unit) = d.chars().last() else {
        return 0;
    };
    let Some(&(_, delta)) = TIME_DELTAS.iter().find(|&&(u, _)| u == unit) else {
        return 0;
    };
    let prefix = &d[..d.len() - unit.len_utf8()];
    match prefix.parse::<f64>() {
        Ok(scalar) => (scalar * delta as f64).round() as i64,
        Err(_) => 0,
    }
}

/// Strict companion to [`parse_duration`]: same grammar, but malformed
/// input and negative magnitudes are reported instead of collapsing to 0.
pub fn parse_duration_strict(d: &str) -> Result<i64, DurationParseError> {
    let unit = d.chars().last().ok_or(DurationParseError::Empty)?;
    let Some(&(_, delta)) = TIME_DELTAS.iter().find(|&&(u, _)| u == unit) else {
        return Err(DurationParseError::UnknownUnit(unit));
    };
    let prefix = &d[..d.len() - unit.len_utf8()];
    let scalar: f64 = prefix
        .parse()
        .map_err(|_| DurationParseError::BadMagnitude(prefix.to_string()))?;
    if scalar < 0.0 {
        return Err(DurationParseError::Negative(scalar));
    }
    Ok((scalar * delta as f64).round() as i64)
}
