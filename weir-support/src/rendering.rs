//! Text rendering utilities for human-friendly error messages.
//!
//! Provides helpers to shorten fully qualified type names and to score
//! "did you mean?" suggestions against the registered service types.

/// Shortens a fully qualified type name for display.
///
/// ```
/// use weir_support::rendering::shorten_type_name;
///
/// let short = shorten_type_name("my_app::services::clock::GameClock");
/// assert_eq!(short, "GameClock");
///
/// let short = shorten_type_name("alloc::sync::Arc<dyn my_app::traits::Logger>");
/// assert_eq!(short, "Arc<dyn Logger>");
/// ```
pub fn shorten_type_name(full_name: &str) -> String {
    // Keep only the final segment of every `::` path, preserving generic
    // brackets and separators: "a::b::C<x::Y>" → "C<Y>".
    let mut result = String::with_capacity(full_name.len());
    let mut segment = String::new();
    let mut pending_colon = false;

    for ch in full_name.chars() {
        match ch {
            ':' if pending_colon => {
                segment.clear();
                pending_colon = false;
            }
            ':' => pending_colon = true,
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' => {
                result.push_str(&segment);
                result.push(ch);
                segment.clear();
                pending_colon = false;
            }
            _ => {
                segment.push(ch);
                pending_colon = false;
            }
        }
    }

    result.push_str(&segment);
    result
}

/// Scores the registered type names against a requested one and returns the
/// closest matches, best first.
///
/// Containment (of the full or shortened name) beats a shared prefix; a
/// shared prefix shorter than three characters is not worth suggesting.
pub fn suggest_similar(
    requested: &str,
    available: &[&str],
    max_suggestions: usize,
) -> Vec<String> {
    let want_full = requested.to_lowercase();
    let want_short = shorten_type_name(requested).to_lowercase();

    let mut ranked: Vec<(usize, &str)> = available
        .iter()
        .filter_map(|&candidate| {
            let full = candidate.to_lowercase();
            let short = shorten_type_name(candidate).to_lowercase();

            let score = if full.contains(&want_full) || want_full.contains(&full) {
                100
            } else if short.contains(&want_short) || want_short.contains(&short) {
                80
            } else {
                let prefix = short
                    .bytes()
                    .zip(want_short.bytes())
                    .take_while(|(a, b)| a == b)
                    .count();
                if prefix < 3 {
                    return None;
                }
                prefix * 10
            };

            Some((score, candidate))
        })
        .collect();

    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked
        .into_iter()
        .take(max_suggestions)
        .map(|(_, name)| name.to_string())
        .collect()
}
