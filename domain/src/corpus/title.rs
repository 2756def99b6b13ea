//! Corpus title parsing.
//!
//! Item titles follow `<file>_Q<question>_<level>_<index>` where `<level>`
//! is `Orig` for the canonical form or `L<n>` for a degraded variant with
//! noise level `n`. The downstream statistics pass correlates evaluator
//! scores against this level, so the parse must be tolerant of titles that
//! predate the scheme (returns `None` rather than failing the run).

/// Extract the degradation level from an item title.
///
/// `Orig` anywhere in the title means the canonical form (level 0);
/// otherwise the first `_L<digits>_` infix is taken.
///
/// # Example
///
/// ```
/// use blindset_domain::parse_noise_level;
///
/// assert_eq!(parse_noise_level("2302.03287v3.pdf_Q1_L2_0"), Some(2));
/// assert_eq!(parse_noise_level("2302.03287v3.pdf_Q1_Orig_1"), Some(0));
/// assert_eq!(parse_noise_level("untitled draft"), None);
/// ```
pub fn parse_noise_level(title: &str) -> Option<u8> {
    if title.contains("Orig") {
        return Some(0);
    }

    let mut rest = title;
    while let Some(pos) = rest.find("_L") {
        let after = &rest[pos + 2..];
        let digits: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() && after[digits.len()..].starts_with('_') {
            return digits.parse().ok();
        }
        rest = &rest[pos + 2..];
    }
    None
}
