/// Extension tokens that mark a canvas image. Matched as substrings, so
/// `preview.png.tmp` qualifies while `preview.Png` does not.
pub const IMAGE_TOKENS: &[&str] = &[".png", ".PNG"];

/// Whether a directory name is a numeric project or canvas identifier.
///
/// Surrounding whitespace is ignored. Integers and floating point values
/// (including exponent forms) are accepted. A float literal that overflows to
/// infinity is rejected; spelled-out `inf`/`infinity`/`nan` are accepted.
pub fn is_numeric(name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }

    name.parse::<i64>().is_ok() || parses_as_float(name)
}

fn parses_as_float(name: &str) -> bool {
    match name.parse::<f64>() {
        Ok(value) if value.is_finite() => true,
        Ok(_) => is_special_float(name),
        Err(_) => false,
    }
}

fn is_special_float(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    if lower == "nan" {
        return true;
    }
    let unsigned = lower
        .strip_prefix('+')
        .or_else(|| lower.strip_prefix('-'))
        .unwrap_or(lower.as_str());
    unsigned == "inf" || unsigned == "infinity"
}

pub fn matches_image_pattern(file_name: &str) -> bool {
    IMAGE_TOKENS.iter().any(|token| file_name.contains(token))
}
