/// Float formatting for dashboard readouts.
///
/// Core float-to-decimal formatting has panicked on wasm in some
/// toolchain/browser combinations, so these helpers never `format!` a float:
/// they scale, round into an `i64`, and format integers.

pub fn fmt_fixed(v: f64, decimals: usize) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    let decimals = decimals.min(9);
    let scale = 10_i64.pow(decimals as u32);
    let scaled = (v * scale as f64).round();
    if scaled.abs() >= i64::MAX as f64 {
        return if v < 0.0 { "-Inf" } else { "Inf" }.to_string();
    }

    let scaled = scaled as i64;
    let mut out = String::new();
    if scaled < 0 {
        out.push('-');
    }
    let abs = scaled.unsigned_abs();
    let scale = scale as u64;
    out.push_str(&(abs / scale).to_string());
    if decimals > 0 {
        let frac = (abs % scale).to_string();
        out.push('.');
        out.extend(std::iter::repeat('0').take(decimals - frac.len()));
        out.push_str(&frac);
    }
    out
}

/// `ratio` in `[0,1]` as a percentage, e.g. `0.4567 -> "45.7%"`.
pub fn fmt_percent(ratio: f64, decimals: usize) -> String {
    format!("{}%", fmt_fixed(ratio * 100.0, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_decimals() {
        assert_eq!(fmt_fixed(0.15, 3), "0.150");
        assert_eq!(fmt_fixed(0.9876, 3), "0.988");
        assert_eq!(fmt_fixed(-0.04, 2), "-0.04");
        assert_eq!(fmt_fixed(42.0, 0), "42");
        assert_eq!(fmt_fixed(0.05, 1), "0.1");
    }

    #[test]
    fn non_finite() {
        assert_eq!(fmt_fixed(f64::NAN, 2), "NaN");
        assert_eq!(fmt_fixed(f64::INFINITY, 2), "Inf");
        assert_eq!(fmt_fixed(f64::NEG_INFINITY, 2), "-Inf");
    }

    #[test]
    fn percent() {
        assert_eq!(fmt_percent(0.2, 1), "20.0%");
        assert_eq!(fmt_percent(0.95, 1), "95.0%");
    }
}
