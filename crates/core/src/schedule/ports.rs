//! Port interfaces for schedule generation

use std::sync::Arc;

use weekplan_domain::{Result, ScheduleConfig};

use super::service::WeeklyPlan;

/// Trait for loading a schedule configuration from somewhere
pub trait ScheduleConfigSource: Send + Sync {
    /// Load and validate the configuration
    fn load(&self) -> Result<ScheduleConfig>;
}

/// Trait for memoizing generated plans per configuration
///
/// Implementations must treat two equal configurations as the same key.
pub trait ScheduleCache: Send + Sync {
    /// Get a previously generated plan for `config`
    fn get(&self, config: &ScheduleConfig) -> Option<Arc<WeeklyPlan>>;

    /// Store the plan generated for `config`
    fn insert(&self, config: &ScheduleConfig, plan: Arc<WeeklyPlan>);

    /// Drop every stored plan
    fn clear(&self);
}
