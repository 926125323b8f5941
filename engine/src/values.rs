pub const NEG_INFINITY_SYMBOL: &str = "-∞";
pub const INFINITY_SYMBOL: &str = "∞";
pub const PRUNED_LABEL: &str = "pruned";
pub const UNSET_LABEL: &str = "?";

/// Formats a value the way the display surface shows it: integral floats
/// without a trailing `.0`, infinities as their sentinel symbols.
pub fn display_number(value: f64) -> String {
    if value == f64::NEG_INFINITY {
        return NEG_INFINITY_SYMBOL.to_owned();
    }
    if value == f64::INFINITY {
        return INFINITY_SYMBOL.to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Reads a leaf's display value at terminal depth. Anything that does not
/// parse as a number evaluates as 0 rather than failing the run.
pub fn leaf_value(display: Option<&str>) -> f64 {
    display
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}
