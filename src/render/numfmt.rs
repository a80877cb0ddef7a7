//! Numeric display formatting.

/// Format a finite floating point value for display.
///
/// Zero is formatted as `"0"` regardless of sign. Any other value uses the
/// shortest decimal representation that round-trips, with a mathematically
/// integral value losing its trailing `.0`. This is a display formatter only;
/// it never rounds beyond the shortest round-tripping representation.
///
/// ```
/// use optexpr::render::format_number;
/// assert_eq!(format_number(5.3),  "5.3");
/// assert_eq!(format_number(1.0),  "1");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(v : f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    // f64 Display is shortest round-tripping and already drops the fractional
    // part of integral values; the suffix strip covers any representation
    // that still carries one.
    let s = v.to_string();
    match s.strip_suffix(".0") {
        Some(head) => head.to_string(),
        None       => s
    }
}
