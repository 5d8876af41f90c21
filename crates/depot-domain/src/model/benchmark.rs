use serde::{Deserialize, Serialize};

/// Reference numbers shown beside an input: the current depot figure and the
/// estimate it is being measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub current: f64,
    pub estimate: f64,
    /// Whole-number figures (driver counts) are shown without a decimal part
    #[serde(default)]
    pub whole: bool,
}

impl BenchmarkEntry {
    pub const ZERO: BenchmarkEntry = BenchmarkEntry {
        current: 0.0,
        estimate: 0.0,
        whole: true,
    };

    pub const fn new(current: f64, estimate: f64) -> Self {
        Self {
            current,
            estimate,
            whole: false,
        }
    }

    pub fn counts(current: i64, estimate: i64) -> Self {
        Self {
            current: current as f64,
            estimate: estimate as f64,
            whole: true,
        }
    }

    pub fn as_pair(&self) -> (f64, f64) {
        (self.current, self.estimate)
    }

    fn show(&self, value: f64) -> String {
        if self.whole {
            format!("{}", value as i64)
        } else {
            format!("{:?}", value)
        }
    }

    /// `current → estimate`, e.g. `13.6 → 14.0` or `571 → 544`
    pub fn describe(&self) -> String {
        format!("{} → {}", self.show(self.current), self.show(self.estimate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_decimal_keeps_fraction() {
        assert_eq!(BenchmarkEntry::new(13.6, 14.0).describe(), "13.6 → 14.0");
        assert_eq!(BenchmarkEntry::new(71.0, 71.0).describe(), "71.0 → 71.0");
        assert_eq!(BenchmarkEntry::new(2.57, 2.45).describe(), "2.57 → 2.45");
    }

    #[test]
    fn test_describe_counts() {
        assert_eq!(BenchmarkEntry::counts(52, -22).describe(), "52 → -22");
        assert_eq!(BenchmarkEntry::ZERO.describe(), "0 → 0");
        assert_eq!(BenchmarkEntry::ZERO.as_pair(), (0.0, 0.0));
    }
}
