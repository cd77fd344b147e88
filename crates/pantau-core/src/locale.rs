//! Month names and week labels for the timeline header.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Language of generated header text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Locale {
    /// Bahasa Indonesia (`Januari`, `M1`)
    #[default]
    #[serde(rename = "id")]
    Indonesian,

    /// English (`January`, `W1`)
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Name of `month` (1-12). Out-of-range months clamp into the table.
    pub fn month_name(&self, month: i8) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::Indonesian => MONTHS_ID[index],
            Locale::English => MONTHS_EN[index],
        }
    }

    /// Prefix of week-of-month column labels (`M` for minggu, `W` for week).
    pub fn week_prefix(&self) -> &'static str {
        match self {
            Locale::Indonesian => "M",
            Locale::English => "W",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Indonesian => "id",
            Locale::English => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" | "id-id" | "indonesian" => Ok(Locale::Indonesian),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::English),
            _ => Err(format!("Unsupported locale: {s}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::Indonesian.month_name(1), "Januari");
        assert_eq!(Locale::Indonesian.month_name(8), "Agustus");
        assert_eq!(Locale::English.month_name(12), "December");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("id".parse::<Locale>(), Ok(Locale::Indonesian));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::English));
        assert!("fr".parse::<Locale>().is_err());
    }
}
