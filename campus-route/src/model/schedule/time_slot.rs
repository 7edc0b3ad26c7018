use chrono::NaiveTime;
use serde::Serialize;
use std::{cmp::Ordering, fmt::Display};

/// start and end of a meeting as `HH:MM` text. zero-padded clock text sorts
/// lexically in chronological order, so slots compare as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot {
    start: String,
    end: String,
}

impl TimeSlot {
    const CLOCK_FORMATS: [&'static str; 3] = ["%H:%M", "%H:%M:%S", "%H%M"];

    /// creates a slot, normalizing each endpoint to zero-padded `HH:MM` when it reads
    /// as a clock time. text that does not is kept verbatim (trimmed).
    pub fn new(start: &str, end: &str) -> TimeSlot {
        TimeSlot {
            start: normalize_clock(start),
            end: normalize_clock(end),
        }
    }

    /// parses `"<start>-<end>"`. anything other than exactly two non-empty
    /// hyphen-separated parts yields None.
    pub fn parse(text: &str) -> Option<TimeSlot> {
        let parts = text.split('-').map(str::trim).collect::<Vec<_>>();
        match parts.as_slice() {
            [start, end] if !start.is_empty() && !end.is_empty() => {
                Some(TimeSlot::new(start, end))
            }
            _ => None,
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// true when the slots share any time: `start_a < end_b && end_a > start_b`.
    /// touching slots (one ends as the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl Ord for TimeSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for TimeSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn normalize_clock(text: &str) -> String {
    let trimmed = text.trim();
    // 930 -> 0930
    let padded = if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    };
    TimeSlot::CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&padded, format).ok())
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let slot = TimeSlot::parse("09:00-09:50").expect("well-formed slot");
        assert_eq!(slot.start(), "09:00");
        assert_eq!(slot.end(), "09:50");
        assert_eq!(slot.to_string(), "09:00-09:50");
    }

    #[test]
    fn test_parse_normalizes_clock_text() {
        let slot = TimeSlot::parse(" 9:05 - 1350 ").expect("well-formed slot");
        assert_eq!(slot.start(), "09:05");
        assert_eq!(slot.end(), "13:50");
        let slot = TimeSlot::parse("930-1045").expect("well-formed slot");
        assert_eq!(slot.start(), "09:30");
        assert_eq!(slot.end(), "10:45");
    }

    #[test]
    fn test_parse_keeps_unrecognized_text() {
        let slot = TimeSlot::parse("TBA-TBA").expect("two parts");
        assert_eq!(slot.start(), "TBA");
    }

    #[test]
    fn test_parse_malformed() {
        assert!(TimeSlot::parse("09:00").is_none());
        assert!(TimeSlot::parse("09:00-09:50-10:00").is_none());
        assert!(TimeSlot::parse("09:00-").is_none());
        assert!(TimeSlot::parse("").is_none());
    }

    #[test]
    fn test_overlaps() {
        let a = TimeSlot::new("09:00", "09:50");
        let b = TimeSlot::new("09:30", "10:20");
        let c = TimeSlot::new("09:50", "10:40");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut slots = vec![
            TimeSlot::new("13:00", "13:50"),
            TimeSlot::new("08:00", "08:50"),
            TimeSlot::new("10:00", "10:50"),
        ];
        slots.sort();
        let starts = slots.iter().map(|s| s.start()).collect::<Vec<_>>();
        assert_eq!(starts, vec!["08:00", "10:00", "13:00"]);
    }
}
