use crate::domain::tables::{PeriodLabel, MAX_MARK, PERIOD_LABELS, SPIRITS};
use crate::utils::error::{PlayWheError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Time-of-day slot of a draw, using the four-code scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Period {
    Morning = 0,
    Midday = 1,
    Afternoon = 2,
    Evening = 3,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Morning,
        Period::Midday,
        Period::Afternoon,
        Period::Evening,
    ];

    fn entry(self) -> &'static PeriodLabel {
        &PERIOD_LABELS[self as usize]
    }

    /// Wire code: `EM`, `AM`, `AN` or `PM`.
    pub fn code(self) -> &'static str {
        self.entry().code
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    pub fn clock_time(self) -> &'static str {
        self.entry().clock_time
    }
}

impl FromStr for Period {
    type Err = PlayWheError;

    fn from_str(code: &str) -> Result<Self> {
        PERIOD_LABELS
            .iter()
            .position(|entry| entry.code == code)
            .map(|index| Period::ALL[index])
            .ok_or_else(|| PlayWheError::UnknownPeriod {
                code: code.to_string(),
            })
    }
}

impl TryFrom<String> for Period {
    type Error = PlayWheError;

    fn try_from(code: String) -> Result<Self> {
        code.parse()
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A winning number, always within the spirit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Mark(u8);

impl Mark {
    pub fn new(mark: i64) -> Result<Self> {
        if (1..=MAX_MARK).contains(&mark) {
            Ok(Mark(mark as u8))
        } else {
            Err(PlayWheError::OutOfRange { mark })
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn spirit(self) -> &'static str {
        SPIRITS[self.0 as usize]
    }
}

impl TryFrom<i64> for Mark {
    type Error = PlayWheError;

    fn try_from(mark: i64) -> Result<Self> {
        Mark::new(mark)
    }
}

impl From<Mark> for i64 {
    fn from(mark: Mark) -> Self {
        i64::from(mark.0)
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One draw as returned by the results API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw: Option<u32>,
    pub date: NaiveDate,
    pub period: Period,
    pub mark: Mark,
}

/// Display-ready strings for one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResult {
    pub draw: Option<u32>,
    pub date: String,
    pub time: String,
    pub mark: u8,
    pub spirit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_codes_round_trip_through_from_str() {
        for period in Period::ALL {
            assert_eq!(period.code().parse::<Period>().unwrap(), period);
        }
        assert!(matches!(
            "XX".parse::<Period>(),
            Err(PlayWheError::UnknownPeriod { code }) if code == "XX"
        ));
    }

    #[test]
    fn test_mark_bounds() {
        assert_eq!(Mark::new(1).unwrap().spirit(), "centipede");
        assert_eq!(Mark::new(36).unwrap().spirit(), "donkey");
        assert!(matches!(Mark::new(0), Err(PlayWheError::OutOfRange { mark: 0 })));
        assert!(matches!(Mark::new(37), Err(PlayWheError::OutOfRange { mark: 37 })));
        assert!(Mark::new(-5).is_err());
    }

    #[test]
    fn test_draw_result_decodes_api_record() {
        let record: DrawResult = serde_json::from_str(
            r#"{"draw": 15012, "date": "2024-01-05", "period": "AN", "mark": 12}"#,
        )
        .unwrap();

        assert_eq!(record.draw, Some(15012));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(record.period, Period::Afternoon);
        assert_eq!(record.mark.spirit(), "king");
    }

    #[test]
    fn test_draw_result_rejects_bad_data() {
        let bad_mark = r#"{"date": "2024-01-05", "period": "EM", "mark": 37}"#;
        assert!(serde_json::from_str::<DrawResult>(bad_mark).is_err());

        let legacy_period = r#"{"date": "2024-01-05", "period": "1", "mark": 4}"#;
        assert!(serde_json::from_str::<DrawResult>(legacy_period).is_err());
    }

    #[test]
    fn test_draw_result_serializes_wire_codes() {
        let record = DrawResult {
            draw: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            period: Period::Evening,
            mark: Mark::new(8).unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2024-03-09", "period": "PM", "mark": 8})
        );
    }
}
