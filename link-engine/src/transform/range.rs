use crate::error::{EngineError, Result};

/// Trimmed, non-blank lines of `content`, in order.
pub fn non_blank_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Parses `"from-to"` into two integers.
///
/// Input without `-` is [`EngineError::RangeFormat`]; anything else that is not exactly two
/// integers, or a range with `from < 1` or `to < from`, is [`EngineError::InvalidRange`].
pub fn parse_line_range(input: &str) -> Result<(i64, i64)> {
    let input = input.trim();
    if !input.contains('-') {
        return Err(EngineError::RangeFormat);
    }
    let parts: Vec<&str> = input.split('-').collect();
    let parsed = match parts.as_slice() {
        [from, to] => from
            .trim()
            .parse::<i64>()
            .ok()
            .zip(to.trim().parse::<i64>().ok()),
        _ => None,
    };
    let (from, to) = parsed.ok_or(EngineError::InvalidRange { from: 0, to: 0 })?;
    validate_range(from, to)?;
    Ok((from, to))
}

/// Lines `from..=to` (1-based, inclusive) of `all_lines`, with `to` clamped to the input length.
///
/// The raw bounds are validated before clamping: `from < 1` or `to < from` is
/// [`EngineError::InvalidRange`].
pub fn slice_line_range<S: AsRef<str>>(all_lines: &[S], from: i64, to: i64) -> Result<Vec<String>> {
    validate_range(from, to)?;
    let start = usize::try_from(from - 1).unwrap_or(usize::MAX).min(all_lines.len());
    let end = usize::try_from(to).unwrap_or(usize::MAX).min(all_lines.len());
    Ok(all_lines[start..end.max(start)]
        .iter()
        .map(|line| line.as_ref().to_string())
        .collect())
}

fn validate_range(from: i64, to: i64) -> Result<()> {
    if from < 1 || to < from {
        return Err(EngineError::InvalidRange { from, to });
    }
    Ok(())
}
