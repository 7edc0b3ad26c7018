use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// maps a single schedule day letter, case-insensitive. `R` and `H` are both Thursday.
    pub fn from_code(code: char) -> Option<DayOfWeek> {
        match code.to_ascii_uppercase() {
            'U' => Some(DayOfWeek::Sunday),
            'M' => Some(DayOfWeek::Monday),
            'T' => Some(DayOfWeek::Tuesday),
            'W' => Some(DayOfWeek::Wednesday),
            'R' | 'H' => Some(DayOfWeek::Thursday),
            'F' => Some(DayOfWeek::Friday),
            'S' => Some(DayOfWeek::Saturday),
            _ => None,
        }
    }

    /// expands a days field such as `"MWF"` one letter at a time. unknown letters
    /// and whitespace are skipped.
    pub fn expand_codes(codes: &str) -> Vec<DayOfWeek> {
        codes
            .chars()
            .filter(|c| !c.is_whitespace())
            .filter_map(|c| {
                let day = DayOfWeek::from_code(c);
                if day.is_none() {
                    log::debug!("ignoring unrecognized day code '{c}' in '{codes}'");
                }
                day
            })
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    /// accepts canonical day names and their three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| format!("unknown day of week '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_mwf() {
        let days = DayOfWeek::expand_codes("MWF");
        assert_eq!(
            days,
            vec![DayOfWeek::Monday, DayOfWeek::Wednesday, DayOfWeek::Friday]
        );
    }

    #[test]
    fn test_thursday_aliases() {
        assert_eq!(DayOfWeek::expand_codes("R"), vec![DayOfWeek::Thursday]);
        assert_eq!(DayOfWeek::expand_codes("H"), vec![DayOfWeek::Thursday]);
    }

    #[test]
    fn test_expand_is_case_insensitive_and_skips_unknown() {
        let days = DayOfWeek::expand_codes("u t x?s");
        assert_eq!(
            days,
            vec![DayOfWeek::Sunday, DayOfWeek::Tuesday, DayOfWeek::Saturday]
        );
        assert!(DayOfWeek::expand_codes("XYZ").is_empty());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Monday".parse::<DayOfWeek>(), Ok(DayOfWeek::Monday));
        assert_eq!(" thursday ".parse::<DayOfWeek>(), Ok(DayOfWeek::Thursday));
        assert_eq!("SAT".parse::<DayOfWeek>(), Ok(DayOfWeek::Saturday));
        assert!("funday".parse::<DayOfWeek>().is_err());
        assert!("mo".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_display_round_trips_names() {
        for day in DayOfWeek::ALL {
            assert_eq!(day.to_string().parse::<DayOfWeek>(), Ok(day));
        }
    }
}
