//! Wall-clock snapshots for the header clock and chat timestamps.

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Local wall-clock reading used by the header clock and chat timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Zero-based weekday, Sunday = 0.
    pub weekday: u32,
    /// One-based month.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute.
    pub minute: u32,
    /// Second.
    pub second: u32,
}

impl ClockSnapshot {
    /// Reads the local clock. Non-WASM targets report the unix epoch.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                weekday: date.get_day(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }

    /// `HH:MM:SS`, 24-hour.
    pub fn time_label(self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// `HH:MM`, 24-hour; chat message timestamps.
    pub fn short_time_label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Short date such as `Thu, Jan 1`.
    pub fn date_label(self) -> String {
        let weekday = WEEKDAYS
            .get(self.weekday as usize)
            .copied()
            .unwrap_or("???");
        let month = MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("???");
        format!("{weekday}, {month} {}", self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_labels_pad_and_name_fields() {
        let snapshot = ClockSnapshot {
            weekday: 2,
            month: 10,
            day: 6,
            hour: 9,
            minute: 5,
            second: 7,
        };
        assert_eq!(snapshot.time_label(), "09:05:07");
        assert_eq!(snapshot.short_time_label(), "09:05");
        assert_eq!(snapshot.date_label(), "Tue, Oct 6");
    }

    #[test]
    fn out_of_range_calendar_fields_do_not_panic() {
        let snapshot = ClockSnapshot {
            weekday: 9,
            month: 13,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        };
        assert_eq!(snapshot.date_label(), "???, ??? 1");
    }
}
