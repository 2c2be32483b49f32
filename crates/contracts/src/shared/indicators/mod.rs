use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key in the overview catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// Static metadata describing one indicator (label, format, icon, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed indicator value. Everything is derived client-side from
/// the in-memory collections; `previous_value` carries the prior refresh for
/// the change badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    /// Primary numeric value (`None` while loading).
    pub value: Option<f64>,
    /// Value at the previous refresh tick.
    pub previous_value: Option<f64>,
    /// Change relative to the previous tick, expressed as a percentage.
    pub change_percent: Option<f64>,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

impl IndicatorValue {
    /// Value for an indicator still waiting on data.
    pub fn pending(id: IndicatorId) -> Self {
        Self {
            id,
            value: None,
            previous_value: None,
            change_percent: None,
            status: IndicatorStatus::Neutral,
            subtitle: None,
        }
    }

    /// Roll a freshly computed value forward, deriving the change badge from
    /// the previous one.
    pub fn advance(&self, value: f64, status: IndicatorStatus) -> Self {
        let change_percent = self.value.and_then(|prev| {
            if prev == 0.0 {
                None
            } else {
                Some((value - prev) / prev * 100.0)
            }
        });
        Self {
            id: self.id.clone(),
            value: Some(value),
            previous_value: self.value,
            change_percent,
            status,
            subtitle: self.subtitle.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_previous_and_change() {
        let first = IndicatorValue::pending(IndicatorId::new("volume"))
            .advance(100.0, IndicatorStatus::Good);
        assert_eq!(first.value, Some(100.0));
        assert_eq!(first.previous_value, None);
        assert_eq!(first.change_percent, None);

        let second = first.advance(150.0, IndicatorStatus::Good);
        assert_eq!(second.value, Some(150.0));
        assert_eq!(second.previous_value, Some(100.0));
        assert_eq!(second.change_percent, Some(50.0));
    }

    #[test]
    fn advance_from_zero_has_no_change_percent() {
        let zero =
            IndicatorValue::pending(IndicatorId::new("x")).advance(0.0, IndicatorStatus::Neutral);
        let next = zero.advance(10.0, IndicatorStatus::Neutral);
        assert_eq!(next.change_percent, None);
    }
}
