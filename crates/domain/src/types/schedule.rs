//! Day and week schedule containers

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::DAYS_PER_WEEK;
use crate::types::{Activity, Weekday};

/// Ordered activities for a single day
pub type DaySchedule = Vec<Activity>;

/// One [`DaySchedule`] for every day of the week
///
/// Every weekday is always present, possibly empty. Serialized as a map
/// keyed by day name in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<Weekday, DaySchedule>")]
pub struct WeekSchedule {
    days: [DaySchedule; DAYS_PER_WEEK],
}

impl WeekSchedule {
    /// A week with every day empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Activities of `day`, in schedule order
    pub fn day(&self, day: Weekday) -> &[Activity] {
        &self.days[day.index()]
    }

    /// Replace the activities of `day`
    pub fn set_day(&mut self, day: Weekday, activities: DaySchedule) {
        self.days[day.index()] = activities;
    }

    /// Days with their activities, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Activity])> + '_ {
        Weekday::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Every activity of the week in day order
    pub fn activities(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.days.iter().flatten()
    }

    /// Activities across all seven days
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// Whether nothing is scheduled on any day
    pub fn is_empty(&self) -> bool {
        self.activity_count() == 0
    }
}

impl From<BTreeMap<Weekday, DaySchedule>> for WeekSchedule {
    fn from(map: BTreeMap<Weekday, DaySchedule>) -> Self {
        let mut schedule = Self::default();
        for (day, activities) in map {
            schedule.set_day(day, activities);
        }
        schedule
    }
}

impl Serialize for WeekSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DAYS_PER_WEEK))?;
        for (day, activities) in self.iter() {
            map.serialize_entry(&day, activities)?;
        }
        map.end()
    }
}
