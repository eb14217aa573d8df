use chrono::{NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DaySchedule {
    pub open: Option<String>,
    pub close: Option<String>,
    #[serde(default)]
    pub closed: bool,
}

impl DaySchedule {
    fn window(&self) -> Option<(NaiveTime, NaiveTime)> {
        if self.closed {
            return None;
        }
        let open = NaiveTime::parse_from_str(self.open.as_deref()?, "%H:%M").ok()?;
        let close = NaiveTime::parse_from_str(self.close.as_deref()?, "%H:%M").ok()?;
        Some((open, close))
    }
}

/// Weekly opening hours, stored as a JSON column. A day with no parseable
/// window counts as closed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Schedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl Schedule {
    pub fn for_weekday(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn is_open_at(&self, weekday: Weekday, time: NaiveTime) -> bool {
        match self.for_weekday(weekday).window() {
            Some((open, close)) => time >= open && time < close,
            None => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Restaurant {
    pub restaurant_id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub category: String,
    pub schedule: Json<Schedule>,
    pub rating: f64,
    pub delivery_time_minutes: i32,
    pub logo_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekday_schedule() -> Schedule {
        Schedule {
            monday: DaySchedule {
                open: Some("09:00".into()),
                close: Some("18:00".into()),
                closed: false,
            },
            sunday: DaySchedule {
                closed: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn open_within_window() {
        let schedule = weekday_schedule();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        assert!(schedule.is_open_at(Weekday::Mon, noon));
    }

    #[test]
    fn closed_outside_window_and_on_closed_days() {
        let schedule = weekday_schedule();
        let early = NaiveTime::from_hms_opt(8, 59, 0).unwrap();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        assert!(!schedule.is_open_at(Weekday::Mon, early));
        assert!(!schedule.is_open_at(Weekday::Sun, noon));
        // no hours configured at all
        assert!(!schedule.is_open_at(Weekday::Tue, noon));
    }

    #[test]
    fn closing_time_is_exclusive() {
        let schedule = weekday_schedule();
        let close = NaiveTime::from_hms_opt(18, 0, 0).unwrap();

        assert!(!schedule.is_open_at(Weekday::Mon, close));
    }

    #[test]
    fn malformed_hours_count_as_closed() {
        let schedule = Schedule {
            friday: DaySchedule {
                open: Some("nine".into()),
                close: Some("17:00".into()),
                closed: false,
            },
            ..Default::default()
        };
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        assert!(!schedule.is_open_at(Weekday::Fri, noon));
    }
}
