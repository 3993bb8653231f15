use crate::error::EtlError;

/// Converts an ISO-8601 duration string (e.g. `PT1H30M`) into minutes.
///
/// An empty string means the source row simply has no duration and maps to
/// exactly 0, not an error. Anything that is non-empty but not a valid
/// duration fails with [`EtlError::InvalidDuration`]; the caller decides
/// whether to propagate or substitute an unknown value.
pub fn duration_to_minutes(raw: &str) -> Result<f64, EtlError> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    total_seconds(raw)
        .map(|seconds| seconds / 60.0)
        .ok_or(EtlError::InvalidDuration)
}

/// Total seconds of a `P[nW][nD][T[nH][nM][nS]]` duration, or `None` when
/// the string does not follow that shape. Calendar designators (years,
/// months) are rejected: they have no fixed length in seconds.
fn total_seconds(raw: &str) -> Option<f64> {
    let rest = raw.strip_prefix('P')?;
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };
    // "P1DT" has a time designator with nothing behind it
    if time_part == Some("") {
        return None;
    }

    let mut components = 0;
    let mut seconds = parse_components(
        date_part,
        &[('W', 7.0 * 86_400.0), ('D', 86_400.0)],
        &mut components,
    )?;
    if let Some(time) = time_part {
        seconds += parse_components(
            time,
            &[('H', 3_600.0), ('M', 60.0), ('S', 1.0)],
            &mut components,
        )?;
    }

    (components > 0).then_some(seconds)
}

/// Parses a run of `<number><designator>` pairs. Designators must appear in
/// the order given by `units`, each at most once; values may carry a decimal
/// fraction written with `.` or `,`.
fn parse_components(part: &str, units: &[(char, f64)], components: &mut u32) -> Option<f64> {
    let mut rest = part;
    let mut next_unit = 0;
    let mut seconds = 0.0;
    while !rest.is_empty() {
        let end = rest.find(|c: char| c.is_ascii_alphabetic())?;
        let number = &rest[..end];
        if !number.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return None;
        }
        let value: f64 = number.replace(',', ".").parse().ok()?;

        let designator = rest[end..].chars().next()?;
        let idx = units.iter().position(|(unit, _)| *unit == designator)?;
        if idx < next_unit {
            return None;
        }
        next_unit = idx + 1;

        seconds += value * units[idx].1;
        *components += 1;
        rest = &rest[end + 1..];
    }
    Some(seconds)
}
