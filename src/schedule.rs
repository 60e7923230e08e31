use serde::{Deserialize, Serialize};

/// Opening window for a single weekday, as delivered by the backend.
/// An empty `from`/`to` or the `closed` flag marks the day as closed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkDay {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub closed: bool,
}

/// Per-weekday schedule for a factory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkWeek {
    #[serde(default)]
    pub mon: WorkDay,
    #[serde(default)]
    pub tue: WorkDay,
    #[serde(default)]
    pub wed: WorkDay,
    #[serde(default)]
    pub thu: WorkDay,
    #[serde(default)]
    pub fri: WorkDay,
    #[serde(default)]
    pub sat: WorkDay,
    #[serde(default)]
    pub sun: WorkDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl Weekday {
    /// Map the JS `Date::get_day()` convention (0 = Sunday).
    pub fn from_js_day(day: u32) -> Weekday {
        match day % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Translation key for the weekday name.
    pub fn label_key(self) -> &'static str {
        match self {
            Weekday::Mon => "day.mon",
            Weekday::Tue => "day.tue",
            Weekday::Wed => "day.wed",
            Weekday::Thu => "day.thu",
            Weekday::Fri => "day.fri",
            Weekday::Sat => "day.sat",
            Weekday::Sun => "day.sun",
        }
    }
}

impl WorkWeek {
    pub fn day(&self, weekday: Weekday) -> &WorkDay {
        match weekday {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
            Weekday::Sun => &self.sun,
        }
    }
}

/// Parse an `HH:MM` time into minutes since midnight.
fn parse_hhmm(raw: &str) -> Option<u32> {
    let (hours, minutes) = raw.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Whether the facility is open at `minute_of_day` on `weekday`.
///
/// A day marked closed, missing either bound, or carrying an unparseable
/// time is treated as closed. The window is inclusive on both ends.
/// Overnight windows (`from > to`) never match; the backend does not emit
/// them and this keeps the check predictable if it ever does.
pub fn is_open_at(week: &WorkWeek, weekday: Weekday, minute_of_day: u32) -> bool {
    let day = week.day(weekday);
    if day.closed || day.from.is_empty() || day.to.is_empty() {
        return false;
    }
    let (Some(from), Some(to)) = (parse_hhmm(&day.from), parse_hhmm(&day.to)) else {
        return false;
    };
    from <= minute_of_day && minute_of_day <= to
}

/// Whether the facility is open at the visitor's current local time.
pub fn is_open_now(week: &WorkWeek) -> bool {
    let now = js_sys::Date::new_0();
    let weekday = Weekday::from_js_day(now.get_day());
    let minute_of_day = now.get_hours() * 60 + now.get_minutes();
    is_open_at(week, weekday, minute_of_day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_with_monday(from: &str, to: &str, closed: bool) -> WorkWeek {
        WorkWeek {
            mon: WorkDay {
                from: from.to_string(),
                to: to.to_string(),
                closed,
            },
            ..WorkWeek::default()
        }
    }

    #[test]
    fn test_open_within_window() {
        let week = week_with_monday("08:00", "18:00", false);
        assert!(is_open_at(&week, Weekday::Mon, 9 * 60));
    }

    #[test]
    fn test_closed_after_window() {
        let week = week_with_monday("08:00", "18:00", false);
        assert!(!is_open_at(&week, Weekday::Mon, 19 * 60));
    }

    #[test]
    fn test_closed_flag_wins_over_times() {
        let week = week_with_monday("08:00", "18:00", true);
        assert!(!is_open_at(&week, Weekday::Mon, 9 * 60));
    }

    #[test]
    fn test_window_is_inclusive_on_both_ends() {
        let week = week_with_monday("08:00", "18:00", false);
        assert!(is_open_at(&week, Weekday::Mon, 8 * 60));
        assert!(is_open_at(&week, Weekday::Mon, 18 * 60));
        assert!(!is_open_at(&week, Weekday::Mon, 18 * 60 + 1));
    }

    #[test]
    fn test_other_weekday_without_schedule_is_closed() {
        let week = week_with_monday("08:00", "18:00", false);
        assert!(!is_open_at(&week, Weekday::Tue, 9 * 60));
    }

    #[test]
    fn test_missing_or_garbage_times_mean_closed() {
        let week = week_with_monday("", "18:00", false);
        assert!(!is_open_at(&week, Weekday::Mon, 9 * 60));

        let week = week_with_monday("8am", "18:00", false);
        assert!(!is_open_at(&week, Weekday::Mon, 9 * 60));

        let week = week_with_monday("25:00", "26:00", false);
        assert!(!is_open_at(&week, Weekday::Mon, 9 * 60));
    }

    #[test]
    fn test_overnight_window_never_matches() {
        let week = week_with_monday("22:00", "06:00", false);
        assert!(!is_open_at(&week, Weekday::Mon, 23 * 60));
        assert!(!is_open_at(&week, Weekday::Mon, 5 * 60));
    }

    #[test]
    fn test_js_day_mapping() {
        assert_eq!(Weekday::from_js_day(0), Weekday::Sun);
        assert_eq!(Weekday::from_js_day(1), Weekday::Mon);
        assert_eq!(Weekday::from_js_day(6), Weekday::Sat);
    }
}
