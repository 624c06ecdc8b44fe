//! Color keys offered to users and the display colors they map to.

pub const NEUTRAL_COLOR: &str = "#9e9e9e";

pub const PALETTE: &[(&str, &str)] = &[
    ("red", "#e53935"),
    ("yellow", "#fdd835"),
    ("gray", "#9e9e9e"),
    ("black", "#212121"),
    ("green", "#43a047"),
    ("pink", "#ec407a"),
    ("blue", "#1e88e5"),
    ("purple", "#8e24aa"),
    ("brown", "#6d4c41"),
];

pub fn lookup(key: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, hex)| *hex)
}

/// Resolve a stored monster color to a display value. Palette keys map to
/// their hex value, `#rgb`/`#rrggbb` values pass through, anything else is neutral.
pub fn resolve(color: &str) -> String {
    let color = color.trim();
    if let Some(hex) = lookup(color) {
        return hex.to_string();
    }
    if is_hex_color(color) {
        return color.to_ascii_lowercase();
    }
    NEUTRAL_COLOR.to_string()
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}
