use colored::{ColoredString, Colorize};

/// Placeholder for a metric that could not be computed.
pub const MISSING: &str = "—";

/// Billions of USD with precision scaled to magnitude.
///
/// ```
/// use india_gdp_engine::visualization::format_billions;
///
/// assert_eq!(format_billions(5060.3), "5.060T");
/// assert_eq!(format_billions(488.7), "488.7B");
/// assert_eq!(format_billions(3.9), "3.900B");
/// ```
pub fn format_billions(b: f64) -> String {
    if b >= 1000.0 {
        format!("{}T", fixed(b / 1000.0, 3))
    } else if b >= 100.0 {
        format!("{}B", fixed(b, 1))
    } else if b >= 10.0 {
        format!("{}B", fixed(b, 2))
    } else {
        format!("{}B", fixed(b, 3))
    }
}

/// Raw units with a T/B/M/K suffix, or a grouped integer below one thousand.
pub fn format_compact(v: f64) -> String {
    if v >= 1e12 {
        format!("{}T", fixed(v / 1e12, 2))
    } else if v >= 1e9 {
        format!("{}B", fixed(v / 1e9, 2))
    } else if v >= 1e6 {
        format!("{}M", fixed(v / 1e6, 2))
    } else if v >= 1e3 {
        format!("{}K", fixed(v / 1e3, 1))
    } else {
        group_thousands(round_half_up(v) as i64)
    }
}

/// Nearest integer, with exact halves going toward positive infinity.
pub fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// `v` with `decimals` places, halves rounded away from zero.
///
/// Unlike `{:.N}`, which breaks exact ties to even, `fixed(1.25, 1)` is `1.3`.
pub fn fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let scale = 10f64.powi(decimals as i32);
    let scaled = round_half_up(v.abs() * scale) / scale;
    let magnitude = format!("{scaled:.decimals$}");
    if v < 0.0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Whole number with comma thousands separators.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole US dollars, e.g. `$2,982`.
pub fn format_dollars(v: f64) -> String {
    format!("${}", group_thousands(round_half_up(v) as i64))
}

pub fn format_percent(v: Option<f64>) -> String {
    match v {
        Some(p) => format!("{}%", fixed(p, 2)),
        None => MISSING.to_string(),
    }
}

pub fn format_optional_dollars(v: Option<f64>) -> String {
    v.map(format_dollars).unwrap_or_else(|| MISSING.to_string())
}

/// Magnitude band used to colour an entity by GDP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GdpTier {
    Trillion,
    FiveHundred,
    ThreeHundred,
    Hundred,
    Fifty,
    Ten,
    BelowTen,
}

impl GdpTier {
    pub const ALL: [GdpTier; 7] = [
        GdpTier::Trillion,
        GdpTier::FiveHundred,
        GdpTier::ThreeHundred,
        GdpTier::Hundred,
        GdpTier::Fifty,
        GdpTier::Ten,
        GdpTier::BelowTen,
    ];

    /// Tier for a GDP in billions USD.
    pub fn for_gdp(billions: f64) -> Self {
        if billions >= 1000.0 {
            GdpTier::Trillion
        } else if billions >= 500.0 {
            GdpTier::FiveHundred
        } else if billions >= 300.0 {
            GdpTier::ThreeHundred
        } else if billions >= 100.0 {
            GdpTier::Hundred
        } else if billions >= 50.0 {
            GdpTier::Fifty
        } else if billions >= 10.0 {
            GdpTier::Ten
        } else {
            GdpTier::BelowTen
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            GdpTier::Trillion => "#f59e0b",
            GdpTier::FiveHundred => "#0ea5e9",
            GdpTier::ThreeHundred => "#38bdf8",
            GdpTier::Hundred => "#7dd3fc",
            GdpTier::Fifty => "#f87171",
            GdpTier::Ten => "#ef4444",
            GdpTier::BelowTen => "#b91c1c",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GdpTier::Trillion => "$1T+",
            GdpTier::FiveHundred => "$500B+",
            GdpTier::ThreeHundred => "$300B+",
            GdpTier::Hundred => "$100B+",
            GdpTier::Fifty => "$50B+",
            GdpTier::Ten => "$10B+",
            GdpTier::BelowTen => "<$10B",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }

    /// Render `text` in this tier's colour.
    pub fn paint(self, text: &str) -> ColoredString {
        let (r, g, b) = self.rgb();
        text.truecolor(r, g, b)
    }
}
