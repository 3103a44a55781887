pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time-of-day interval in minutes since midnight, half-open `[start, end)`.
/// A slot that crosses midnight is stored with `end` past `MINUTES_PER_DAY`,
/// e.g. "10:00 PM - 02:00 AM" becomes `[1320, 1560)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: u16,
    pub end: u16,
}

impl TimeSlot {
    pub fn new(start: u16, end: u16) -> Self {
        let end = if end <= start {
            end + MINUTES_PER_DAY
        } else {
            end
        };
        Self { start, end }
    }

    /// Point containment under the `[start, end)` rule
    pub fn contains(&self, minute: u16) -> bool {
        let m = u32::from(minute);
        let wrapped = m + u32::from(MINUTES_PER_DAY);
        let (s, e) = (u32::from(self.start), u32::from(self.end));
        (s <= m && m < e) || (s <= wrapped && wrapped < e)
    }

    /// Interval overlap under the `[start, end)` rule
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        fn linear(a0: i32, a1: i32, b0: i32, b1: i32) -> bool {
            a0.max(b0) < a1.min(b1)
        }
        let day = i32::from(MINUTES_PER_DAY);
        let (s0, s1) = (i32::from(self.start), i32::from(self.end));
        let (o0, o1) = (i32::from(other.start), i32::from(other.end));
        linear(s0, s1, o0, o1) || linear(s0, s1, o0 + day, o1 + day) || linear(s0 + day, s1 + day, o0, o1)
    }
}

/// Parse "HH:MM AM", "HH:MM PM" (meridiem optionally unspaced, any case) or
/// 24-hour "HH:MM" into minutes since midnight. Returns None on anything else.
pub fn parse_clock(input: &str) -> Option<u16> {
    let input = input.trim();
    let upper = input.to_uppercase();

    let (clock_part, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end().to_string(), Some(false))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end().to_string(), Some(true))
    } else {
        (upper, None)
    };

    let (hour_str, minute_str) = clock_part.split_once(':')?;
    let hour: u16 = hour_str.trim().parse().ok()?;
    let minute: u16 = minute_str.trim().parse().ok()?;
    if minute >= 60 {
        return None;
    }

    let hour = match meridiem {
        Some(is_pm) => {
            if hour == 0 || hour > 12 {
                return None;
            }
            match (hour, is_pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            }
        }
        None => {
            if hour >= 24 {
                return None;
            }
            hour
        }
    };

    Some(hour * 60 + minute)
}

/// Parse a stored "HH:MM AM/PM - HH:MM AM/PM" range into a TimeSlot
pub fn parse_slot(input: &str) -> Option<TimeSlot> {
    let (from, to) = input.split_once('-')?;
    let start = parse_clock(from)?;
    let end = parse_clock(to)?;
    Some(TimeSlot::new(start, end))
}

/// Render minutes since midnight back to "HH:MM AM/PM"
pub fn format_clock(minute: u16) -> String {
    let minute = minute % MINUTES_PER_DAY;
    let (hour, min) = (minute / 60, minute % 60);
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", display_hour, min, meridiem)
}
