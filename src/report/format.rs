//! Number and text formatting for the report

/// Placeholder shown for a missing (zero) value
pub const MISSING: &str = "-";

/// Insert `,` between groups of three digits: `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Fixed-precision number with a grouped integer part: `1234.567, 2` -> `1,234.57`
pub fn format_decimal(value: f64, places: usize) -> String {
    let fixed = format!("{:.*}", places, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

pub fn format_population(population: u64) -> String {
    if population == 0 {
        MISSING.to_string()
    } else {
        group_thousands(population)
    }
}

pub fn format_area(area: f64) -> String {
    if area > 0.0 {
        format_decimal(area, 1)
    } else {
        MISSING.to_string()
    }
}

/// Escape text for use in HTML content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(42), "42");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(84000), "84,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1234.567, 2), "1,234.57");
        assert_eq!(format_decimal(0.0, 2), "0.00");
        assert_eq!(format_decimal(17075200.0, 1), "17,075,200.0");
        assert_eq!(format_decimal(-1500.4, 1), "-1,500.4");
        assert_eq!(format_decimal(12.0, 0), "12");
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "-");
        assert_eq!(format_population(42), "42");
        assert_eq!(format_population(1234567), "1,234,567");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(0.0), "-");
        assert_eq!(format_area(468.0), "468.0");
        assert_eq!(format_area(12.5), "12.5");
        assert_eq!(format_area(9629091.0), "9,629,091.0");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Bosnia & Herzegovina"), "Bosnia &amp; Herzegovina");
        assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape_html("Côte d'Ivoire"), "Côte d&#39;Ivoire");
    }
}
