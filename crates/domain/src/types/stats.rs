//! Weekly statistics types

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::CATEGORY_COUNT;
use crate::types::ActivityCategory;

/// Minutes per category, with every category present
///
/// Serialized as a map keyed by category key in legend order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<ActivityCategory, u32>")]
pub struct CategoryTotals {
    minutes: [u32; CATEGORY_COUNT],
}

impl CategoryTotals {
    /// Minutes recorded for `category`
    pub fn get(&self, category: ActivityCategory) -> u32 {
        self.minutes[category.index()]
    }

    /// Add `minutes` to `category`
    ///
    /// ```
    /// use weekplan_domain::{ActivityCategory, CategoryTotals};
    ///
    /// let mut totals = CategoryTotals::default();
    /// totals.add(ActivityCategory::Study, 60);
    /// totals.add(ActivityCategory::Study, 30);
    /// assert_eq!(totals.get(ActivityCategory::Study), 90);
    /// assert_eq!(totals.get(ActivityCategory::Work), 0);
    /// ```
    pub fn add(&mut self, category: ActivityCategory, minutes: u32) {
        self.minutes[category.index()] += minutes;
    }

    /// Every category with its minutes, in legend order
    pub fn iter(&self) -> impl Iterator<Item = (ActivityCategory, u32)> + '_ {
        ActivityCategory::ALL.into_iter().map(move |category| (category, self.get(category)))
    }

    /// Sum over all categories
    pub fn total(&self) -> u32 {
        self.minutes.iter().sum()
    }
}

impl From<BTreeMap<ActivityCategory, u32>> for CategoryTotals {
    fn from(map: BTreeMap<ActivityCategory, u32>) -> Self {
        let mut totals = Self::default();
        for (category, minutes) in map {
            totals.add(category, minutes);
        }
        totals
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, minutes) in self.iter() {
            map.serialize_entry(&category, &minutes)?;
        }
        map.end()
    }
}

/// Aggregated statistics for one generated week
///
/// `total_scheduled_minutes` is the sum of the weighted category totals,
/// so meals only count half of their clock time here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WeeklyStats {
    /// Weighted minutes per category
    #[cfg_attr(feature = "ts-gen", ts(type = "Record<string, number>"))]
    pub totals: CategoryTotals,

    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub total_scheduled_minutes: u32,

    /// Share of the 10,080-minute week that is scheduled, rounded to a
    /// whole percent
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub scheduled_hours_percentage: u32,
}
