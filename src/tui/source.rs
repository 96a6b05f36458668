//! Function body extraction for the source viewer.

/// Source lines of one function, paired with 1-indexed line numbers.
///
/// Starts at `line_number`. A header prototype ending in `;` yields just that
/// line; otherwise lines accumulate until braces balance. With no `{` in
/// sight the very next line still gets included before the cut; the
/// heuristics only record single-line signatures, so that is the best
/// available guess at where the body ends.
pub fn function_source(content: &str, line_number: usize, is_header: bool) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut depth: i32 = 0;

    for (idx, line) in content.lines().enumerate() {
        let n = idx + 1;
        if n < line_number {
            continue;
        }
        out.push((n, line.to_string()));

        if n == line_number {
            if is_header && line.trim().ends_with(';') {
                break;
            }
            depth += brace_delta(line);
        } else {
            depth += brace_delta(line);
            if depth <= 0 {
                break;
            }
        }
    }
    out
}

fn brace_delta(line: &str) -> i32 {
    line.chars()
        .map(|c| match c {
            '{' => 1,
            '}' => -1,
            _ => 0,
        })
        .sum()
}
