use serde::{Deserialize, Serialize};

/// One of the seven two-hour home-collection windows offered for sample
/// pickup. The string form is what customers see and what gets stored on a
/// booking, so parse/display must round-trip exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSlot {
    SixAm,
    EightAm,
    TenAm,
    TwelvePm,
    TwoPm,
    FourPm,
    SixPm,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot::SixAm,
        TimeSlot::EightAm,
        TimeSlot::TenAm,
        TimeSlot::TwelvePm,
        TimeSlot::TwoPm,
        TimeSlot::FourPm,
        TimeSlot::SixPm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::SixAm => "06:00 AM - 08:00 AM",
            TimeSlot::EightAm => "08:00 AM - 10:00 AM",
            TimeSlot::TenAm => "10:00 AM - 12:00 PM",
            TimeSlot::TwelvePm => "12:00 PM - 02:00 PM",
            TimeSlot::TwoPm => "02:00 PM - 04:00 PM",
            TimeSlot::FourPm => "04:00 PM - 06:00 PM",
            TimeSlot::SixPm => "06:00 PM - 08:00 PM",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|slot| slot.as_str() == s)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeSlot::parse(&value).ok_or_else(|| format!("unknown collection slot: {value}"))
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_slots_round_trip() {
        for slot in TimeSlot::ALL {
            assert_eq!(TimeSlot::parse(slot.as_str()), Some(slot));
        }
    }

    #[test]
    fn test_seven_windows() {
        assert_eq!(TimeSlot::ALL.len(), 7);
        assert_eq!(TimeSlot::ALL[0].as_str(), "06:00 AM - 08:00 AM");
        assert_eq!(TimeSlot::ALL[6].as_str(), "06:00 PM - 08:00 PM");
    }

    #[test]
    fn test_unknown_slot_rejected() {
        assert_eq!(TimeSlot::parse("09:00 AM - 11:00 AM"), None);
        assert_eq!(TimeSlot::parse(""), None);
    }

    #[test]
    fn test_serde_uses_display_form() {
        let json = serde_json::to_string(&TimeSlot::TenAm).unwrap();
        assert_eq!(json, "\"10:00 AM - 12:00 PM\"");

        let parsed: TimeSlot = serde_json::from_str("\"08:00 AM - 10:00 AM\"").unwrap();
        assert_eq!(parsed, TimeSlot::EightAm);

        assert!(serde_json::from_str::<TimeSlot>("\"whenever\"").is_err());
    }
}
