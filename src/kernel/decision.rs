//! Buy/rent decisions and the append-only log that persists them.

use chrono::{DateTime, TimeZone, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::services::ports::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The fixed swipe policy: right buys, left rents.
    pub const fn choice(self) -> Choice {
        match self {
            Direction::Right => Choice::Buy,
            Direction::Left => Choice::Rent,
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Buy,
    Rent,
}

impl Choice {
    pub fn label(self) -> &'static str {
        match self {
            Choice::Buy => "BUY",
            Choice::Rent => "RENT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub item_id: u64,
    pub item_label: CompactString,
    pub choice: Choice,
    pub decided_at: DateTime<Utc>,
}

impl Decision {
    /// Timestamps are kept at millisecond precision so the persisted form reproduces them exactly.
    pub fn new(item: &Item, choice: Choice, at: DateTime<Utc>) -> Self {
        Self {
            item_id: item.id,
            item_label: item.label.clone(),
            choice,
            decided_at: truncate_millis(at),
        }
    }
}

fn truncate_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(at.timestamp_millis())
        .single()
        .unwrap_or(at)
}

/// Wire shape of one persisted decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredDecision {
    #[serde(rename = "objectName")]
    object_name: String,
    choice: Choice,
    #[serde(with = "iso_millis")]
    timestamp: DateTime<Utc>,
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionLog {
    entries: Vec<Decision>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a log from a persisted snapshot.
    ///
    /// Decisions are matched to items by position. Anything that fails to parse counts as
    /// "no saved session"; a snapshot longer than the item list is cut to the item count.
    pub fn restore(snapshot: Option<&str>, items: &[Item]) -> Self {
        let Some(raw) = snapshot else {
            return Self::new();
        };

        let stored: Vec<StoredDecision> = match serde_json::from_str(raw) {
            Ok(stored) => stored,
            Err(error) => {
                tracing::warn!(error = %error, "discarding unreadable decision snapshot");
                return Self::new();
            }
        };

        if stored.len() > items.len() {
            tracing::warn!(
                saved = stored.len(),
                items = items.len(),
                "decision snapshot longer than item list; truncating"
            );
        }

        let entries = stored
            .into_iter()
            .zip(items)
            .map(|(stored, item)| {
                if stored.object_name != item.label.as_str() {
                    tracing::debug!(
                        saved = %stored.object_name,
                        item = %item.label,
                        "saved decision label differs from item label"
                    );
                }
                Decision {
                    item_id: item.id,
                    item_label: CompactString::from(stored.object_name),
                    choice: stored.choice,
                    decided_at: stored.timestamp,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn append(&mut self, decision: Decision) {
        self.entries.push(decision);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Decision] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Decision> {
        self.entries.last()
    }

    /// JSON array of `{objectName, choice, timestamp}` in presentation order.
    pub fn to_snapshot(&self) -> String {
        let stored: Vec<StoredDecision> = self
            .entries
            .iter()
            .map(|decision| StoredDecision {
                object_name: decision.item_label.to_string(),
                choice: decision.choice,
                timestamp: decision.decided_at,
            })
            .collect();
        serde_json::to_string(&stored).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn summary(&self) -> DecisionSummary {
        DecisionSummary::from_decisions(&self.entries)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionSummary {
    pub total: usize,
    pub buy: usize,
    pub rent: usize,
    pub buy_percent: u8,
    pub rent_percent: u8,
}

impl DecisionSummary {
    pub fn from_decisions(decisions: &[Decision]) -> Self {
        let total = decisions.len();
        let buy = decisions.iter().filter(|d| d.choice == Choice::Buy).count();
        let rent = total - buy;
        Self {
            total,
            buy,
            rent,
            buy_percent: percent(buy, total),
            rent_percent: percent(rent, total),
        }
    }
}

/// Leaning read off the buy share: above 70% either way, or balanced in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoppingStyle {
    Buyer,
    Renter,
    Balanced,
}

impl ShoppingStyle {
    pub fn label(self) -> &'static str {
        match self {
            Self::Buyer => "Buyer",
            Self::Renter => "Renter",
            Self::Balanced => "Balanced",
        }
    }
}

impl DecisionSummary {
    /// `None` until at least one decision exists.
    pub fn style(&self) -> Option<ShoppingStyle> {
        if self.total == 0 {
            return None;
        }
        Some(if self.buy_percent > 70 {
            ShoppingStyle::Buyer
        } else if self.rent_percent > 70 {
            ShoppingStyle::Renter
        } else {
            ShoppingStyle::Balanced
        })
    }
}

fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/decision.rs"]
mod tests;
