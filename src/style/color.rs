//! CSS color string parsing (hex, rgb()/rgba(), named subset).

/// Parse a CSS color string to RGBA [0..1].
pub fn parse_color(s: &str) -> Option<[f32; 4]> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s);
    }

    if s.starts_with("rgb") {
        return parse_rgb(s);
    }

    match s.to_ascii_lowercase().as_str() {
        "black" => Some([0.0, 0.0, 0.0, 1.0]),
        "white" => Some([1.0, 1.0, 1.0, 1.0]),
        "red" => Some([1.0, 0.0, 0.0, 1.0]),
        "green" => Some([0.0, 0.5, 0.0, 1.0]),
        "blue" => Some([0.0, 0.0, 1.0, 1.0]),
        "yellow" => Some([1.0, 1.0, 0.0, 1.0]),
        "gray" | "grey" => Some([0.5, 0.5, 0.5, 1.0]),
        "transparent" => Some([0.0, 0.0, 0.0, 0.0]),
        _ => None,
    }
}

fn parse_hex(s: &str) -> Option<[f32; 4]> {
    let hex = s.trim_start_matches('#');

    let channel = |a: &str| -> Option<f32> {
        let v = if a.len() == 1 {
            u8::from_str_radix(&a.repeat(2), 16).ok()?
        } else {
            u8::from_str_radix(a, 16).ok()?
        };
        Some(v as f32 / 255.0)
    };

    match hex.len() {
        3 => Some([
            channel(&hex[0..1])?,
            channel(&hex[1..2])?,
            channel(&hex[2..3])?,
            1.0,
        ]),
        4 => Some([
            channel(&hex[0..1])?,
            channel(&hex[1..2])?,
            channel(&hex[2..3])?,
            channel(&hex[3..4])?,
        ]),
        6 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            1.0,
        ]),
        8 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        ]),
        _ => None,
    }
}

fn parse_rgb(s: &str) -> Option<[f32; 4]> {
    let inner = s
        .trim_start_matches("rgba(")
        .trim_start_matches("rgb(")
        .trim_end_matches(')');
    let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();

    if parts.len() < 3 {
        return None;
    }

    let r: f32 = parts[0].trim_end_matches('%').parse().ok()?;
    let g: f32 = parts[1].trim_end_matches('%').parse().ok()?;
    let b: f32 = parts[2].trim_end_matches('%').parse().ok()?;

    let (r, g, b) = if parts[0].contains('%') {
        (r / 100.0, g / 100.0, b / 100.0)
    } else {
        (r / 255.0, g / 255.0, b / 255.0)
    };

    let a = if parts.len() >= 4 {
        parts[3].parse().unwrap_or(1.0)
    } else {
        1.0
    };

    Some([r, g, b, a])
}
