//! Code fence removal for markup produced by chat models.

/// Opening fence line that is dropped.
pub const OPENING_FENCE: &str = "```markdown";

/// Closing fence line that is dropped.
pub const CLOSING_FENCE: &str = "```";

/// Drop a leading ```` ```markdown ```` line and a trailing ```` ``` ```` line.
///
/// Each check looks at a single line, compared after trimming. Other
/// fences, including a bare leading ```` ``` ````, are kept.
///
/// ```
/// use resumark::convert::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```markdown\n# Jane\n```"), "# Jane");
/// assert_eq!(strip_code_fence("# Jane"), "# Jane");
/// ```
pub fn strip_code_fence(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();

    if lines.first().is_some_and(|l| l.trim() == OPENING_FENCE) {
        log::debug!("Stripping opening code fence");
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| l.trim() == CLOSING_FENCE) {
        log::debug!("Stripping closing code fence");
        lines.pop();
    }

    lines.join("\n")
}
