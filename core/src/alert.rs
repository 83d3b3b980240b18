use crate::Thresholds;
use serde::Serialize;

/// Position of a level relative to the station thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Unknown,
    Normal,
    Yellow,
    Orange,
    Red,
}

impl AlertLevel {
    pub fn classify(value: Option<f64>, thresholds: Thresholds) -> Self {
        let (Some(value), Some(yellow), Some(orange), Some(red)) =
            (value, thresholds.yellow, thresholds.orange, thresholds.red)
        else {
            return AlertLevel::Unknown;
        };

        if value <= yellow {
            AlertLevel::Normal
        } else if value <= orange {
            AlertLevel::Yellow
        } else if value <= red {
            AlertLevel::Orange
        } else {
            AlertLevel::Red
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            AlertLevel::Unknown => "",
            AlertLevel::Normal => "🟢",
            AlertLevel::Yellow => "🟡",
            AlertLevel::Orange => "🟠",
            AlertLevel::Red => "🔴",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: Thresholds = Thresholds {
        yellow: Some(1.0),
        orange: Some(2.0),
        red: Some(3.0),
    };

    #[test]
    fn classifies_on_threshold_boundaries() {
        assert_eq!(AlertLevel::classify(Some(0.5), THRESHOLDS), AlertLevel::Normal);
        assert_eq!(AlertLevel::classify(Some(1.0), THRESHOLDS), AlertLevel::Normal);
        assert_eq!(AlertLevel::classify(Some(1.5), THRESHOLDS), AlertLevel::Yellow);
        assert_eq!(AlertLevel::classify(Some(2.0), THRESHOLDS), AlertLevel::Yellow);
        assert_eq!(AlertLevel::classify(Some(2.2), THRESHOLDS), AlertLevel::Orange);
        assert_eq!(AlertLevel::classify(Some(3.0), THRESHOLDS), AlertLevel::Orange);
        assert_eq!(AlertLevel::classify(Some(3.01), THRESHOLDS), AlertLevel::Red);
    }

    #[test]
    fn unknown_without_value_or_thresholds() {
        assert_eq!(AlertLevel::classify(None, THRESHOLDS), AlertLevel::Unknown);
        let partial = Thresholds {
            red: None,
            ..THRESHOLDS
        };
        assert_eq!(AlertLevel::classify(Some(9.0), partial), AlertLevel::Unknown);
        assert_eq!(AlertLevel::Unknown.marker(), "");
    }
}
