//! SI-suffixed value parsing for calculator inputs.
//!
//! Accepts what people type on a bench: `"4k7"`, `"10 kΩ"`, `"100nF"`,
//! `"4.7uH"`, `"1kHz"`. Every parser returns `None` for anything it cannot
//! read, so bad input stays "unknown" instead of turning into zero.

/// Split a lowercase value into its numeric prefix and unit suffix.
fn split_number_unit(value: &str) -> Option<(f64, String)> {
    let mut num_str = String::new();
    let mut unit = String::new();
    let mut found_digit = false;

    for ch in value.chars() {
        if !found_digit && (ch.is_ascii_digit() || ch == '.' || ch == '-' || ch == '+') {
            num_str.push(ch);
            if ch.is_ascii_digit() {
                found_digit = true;
            }
        } else if found_digit && unit.is_empty() && (ch.is_ascii_digit() || ch == '.') {
            num_str.push(ch);
        } else if found_digit {
            unit.push(ch);
        } else {
            return None;
        }
    }

    if !found_digit {
        return None;
    }

    let num = num_str.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some((num, unit.trim().to_string()))
}

/// Parse a resistance into Ohms.
///
/// Handles `"470"`, `"4.7k"`, `"4k7"`, `"2R2"`, `"1M"`, `"10 kΩ"`, `"1meg"`.
pub fn parse_resistance_value(value: &str) -> Option<f64> {
    let v = value.trim().to_lowercase();
    if v.is_empty() {
        return None;
    }

    // "XkY" / "XmY" / "XrY" style (e.g. "4k7" -> 4700, "2r2" -> 2.2)
    for (sep, mult) in [('k', 1_000.0), ('m', 1_000_000.0), ('r', 1.0)] {
        if let Some(pos) = v.find(sep) {
            let head = &v[..pos];
            let tail = &v[pos + sep.len_utf8()..];
            if !head.is_empty()
                && !tail.is_empty()
                && head.chars().all(|c| c.is_ascii_digit())
                && tail.chars().all(|c| c.is_ascii_digit())
            {
                let integer: f64 = head.parse().ok()?;
                let fraction: f64 =
                    tail.parse::<f64>().ok()? / 10f64.powi(tail.len() as i32);
                return Some((integer + fraction) * mult);
            }
        }
    }

    let (num, unit) = split_number_unit(&v)?;
    let multiplier = match unit.as_str() {
        "" | "r" | "ω" | "ohm" | "ohms" => 1.0,
        "k" | "kω" | "kohm" | "kohms" => 1_000.0,
        "m" | "mω" | "meg" | "mohm" | "mohms" => 1_000_000.0,
        "g" | "gω" => 1_000_000_000.0,
        _ => return None,
    };
    Some(num * multiplier)
}

/// Parse a capacitance into Farads.
pub fn parse_capacitance_value(value: &str) -> Option<f64> {
    let v = value.trim().to_lowercase();
    let (num, unit) = split_number_unit(&v)?;
    let multiplier = match unit.as_str() {
        "" | "f" => 1.0,
        "mf" | "m" => 1e-3,
        "uf" | "u" | "µf" | "µ" => 1e-6,
        "nf" | "n" => 1e-9,
        "pf" | "p" => 1e-12,
        _ => return None,
    };
    Some(num * multiplier)
}

/// Parse an inductance into Henries.
pub fn parse_inductance_value(value: &str) -> Option<f64> {
    let v = value.trim().to_lowercase();
    let (num, unit) = split_number_unit(&v)?;
    let multiplier = match unit.as_str() {
        "" | "h" => 1.0,
        "mh" | "m" => 1e-3,
        "uh" | "u" | "µh" | "µ" => 1e-6,
        "nh" | "n" => 1e-9,
        _ => return None,
    };
    Some(num * multiplier)
}

/// Parse a frequency into Hertz.
pub fn parse_frequency_value(value: &str) -> Option<f64> {
    let v = value.trim().to_lowercase();
    let (num, unit) = split_number_unit(&v)?;
    let multiplier = match unit.as_str() {
        "" | "hz" => 1.0,
        "k" | "khz" => 1e3,
        "m" | "mhz" => 1e6,
        "g" | "ghz" => 1e9,
        _ => return None,
    };
    Some(num * multiplier)
}
