//! Device label normalization.

/// Derives a display name from a raw device label.
///
/// Hosts commonly append a parenthesized hardware identifier to camera
/// labels, e.g. `"HD Cam (04f2:b5d6)"`. This strips a trailing
/// `(<hex>)` or `(<hex>:<hex>)` suffix along with surrounding
/// whitespace. If nothing remains after stripping, the original label
/// is returned; an empty label yields `None`.
pub fn camera_name(label: &str) -> Option<String> {
    let stripped = strip_hardware_id(label);
    if !stripped.is_empty() {
        Some(stripped.to_string())
    } else if !label.is_empty() {
        Some(label.to_string())
    } else {
        None
    }
}

/// Removes a trailing `"<ws>(<hex>[:<hex>])<ws>"` suffix, if present.
fn strip_hardware_id(label: &str) -> &str {
    let trimmed = label.trim_end();
    let Some(body) = trimmed.strip_suffix(')') else {
        return label;
    };
    let Some(open) = body.rfind('(') else {
        return label;
    };

    let id = &body[open + 1..];
    let valid = match id.split_once(':') {
        Some((vendor, product)) => is_hex(vendor) && is_hex(product),
        None => is_hex(id),
    };
    if !valid {
        return label;
    }

    body[..open].trim_end()
}

/// Lowercase hexadecimal, one or more digits.
fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
