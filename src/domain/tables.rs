//! Static lookup data for formatting draws.
//!
//! All tables are 1-based: slot 0 is reserved so a mark or month number
//! indexes its own entry directly.

/// Highest mark drawn in Play Whe.
pub const MAX_MARK: i64 = 36;

/// Traditional spirit name for each mark.
pub static SPIRITS: [&str; 37] = [
    "", // reserved
    "centipede",
    "old lady",
    "carriage",
    "dead man",
    "parson man",
    "belly",
    "hog",
    "tiger",
    "cattle",
    "monkey",
    "corbeau",
    "king",
    "crapaud",
    "money",
    "sick woman",
    "jamette",
    "pigeon",
    "water boat",
    "horse",
    "dog",
    "mouth",
    "rat",
    "house",
    "queen",
    "morocoy",
    "fowl",
    "little snake",
    "red fish",
    "opium man",
    "house cat",
    "parson wife",
    "shrimps",
    "spider",
    "blind man",
    "big snake",
    "donkey",
];

pub static MONTHS: [&str; 13] = [
    "", // reserved
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Display text for one draw period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodLabel {
    pub code: &'static str,
    pub label: &'static str,
    pub clock_time: &'static str,
}

/// Periods in draw order through the day.
pub static PERIOD_LABELS: [PeriodLabel; 4] = [
    PeriodLabel {
        code: "EM",
        label: "Morning",
        clock_time: "10:30 AM",
    },
    PeriodLabel {
        code: "AM",
        label: "Midday",
        clock_time: "1:00 PM",
    },
    PeriodLabel {
        code: "AN",
        label: "Afternoon",
        clock_time: "4:00 PM",
    },
    PeriodLabel {
        code: "PM",
        label: "Evening",
        clock_time: "6:30 PM",
    },
];
