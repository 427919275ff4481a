//! Requested-versus-capacity ratios computed from Kubernetes quantity strings.

use serde::Serialize;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Divisors from the suffixed unit to whole cores.
const CPU_SUFFIXES: [(&str, f64); 3] = [("m", 1e3), ("u", 1e6), ("n", 1e9)];

/// Byte multipliers by suffix. Binary suffixes come first so that `Mi` is not
/// read as `M`.
const MEMORY_SUFFIXES: [(&str, f64); 8] = [
    ("Ki", 1024.0),
    ("Mi", 1024.0 * 1024.0),
    ("Gi", 1024.0 * 1024.0 * 1024.0),
    ("Ti", 1024.0 * 1024.0 * 1024.0 * 1024.0),
    ("k", 1e3),
    ("M", 1e6),
    ("G", 1e9),
    ("T", 1e12),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Measured in cores.
    Cpu,
    /// Measured in GiB.
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

impl UsageLevel {
    pub fn of(percent: u8) -> Self {
        match percent {
            p if p > 85 => UsageLevel::Critical,
            p if p > 60 => UsageLevel::Warning,
            _ => UsageLevel::Normal,
        }
    }
}

/// Parsed request and capacity for one resource, in cores or GiB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceUsage {
    pub requested: f64,
    pub capacity: f64,
    /// `requested / capacity` as a whole percentage, capped at 100.
    pub percent: u8,
    pub level: UsageLevel,
}

impl ResourceUsage {
    /// Returns `None` when the capacity is missing, unparsable or zero.
    /// A missing request counts as zero.
    pub fn from_quantities(requested: &str, capacity: &str, kind: ResourceKind) -> Option<Self> {
        let capacity = parse_quantity(capacity, kind)?;
        if capacity <= 0.0 {
            return None;
        }
        let requested = parse_quantity(requested, kind).unwrap_or(0.0);
        let percent = ((requested / capacity) * 100.0).round().clamp(0.0, 100.0) as u8;
        Some(Self {
            requested,
            capacity,
            percent,
            level: UsageLevel::of(percent),
        })
    }
}

/// Parses `"4"`, `"3500m"`, `"250000000n"` (cores) or `"16Gi"`, `"32768Mi"`,
/// `"2G"`, `"1024"` (bytes, returned as GiB). Unknown suffixes yield `None`.
pub fn parse_quantity(value: &str, kind: ResourceKind) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match kind {
        ResourceKind::Cpu => {
            let (cores, divisor) = split_suffix(value, &CPU_SUFFIXES)?;
            Some(cores / divisor)
        }
        ResourceKind::Memory => {
            let (number, multiplier) = split_suffix(value, &MEMORY_SUFFIXES)?;
            Some(number * multiplier / BYTES_PER_GIB)
        }
    }
}

/// Splits a quantity into its number and the scale of its suffix (1 when unsuffixed).
fn split_suffix(value: &str, suffixes: &[(&str, f64)]) -> Option<(f64, f64)> {
    let (number, scale) = suffixes
        .iter()
        .find_map(|(suffix, scale)| value.strip_suffix(suffix).map(|n| (n, *scale)))
        .unwrap_or((value, 1.0));
    number.parse::<f64>().ok().map(|n| (n, scale))
}
