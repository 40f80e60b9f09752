//! Weekly plan memoization with moka
//!
//! Generated plans are keyed by a fingerprint of the configuration that
//! produced them, so two equal configurations share one entry no matter
//! where they were loaded from.
//!
//! # Architecture
//!
//! - **Key**: hex-encoded `blake3` digest of the configuration's JSON form
//! - **Value**: the shared `Arc<WeeklyPlan>`
//! - **Error Handling**: only successful generations reach the cache
//! - **TTL**: configurable time-to-live with default 10 minutes
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use weekplan_core::ScheduleService;
//! use weekplan_infra::cache::{MokaScheduleCache, ScheduleCacheConfig};
//!
//! let cache = Arc::new(MokaScheduleCache::new(ScheduleCacheConfig::default()));
//! let service = ScheduleService::with_cache(cache);
//! let plan = service.generate(&config)?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use weekplan_common::{log_error, CommonError};
use weekplan_core::{ScheduleCache, WeeklyPlan};
use weekplan_domain::{Result, ScheduleConfig, WeekplanError};

/// Default TTL for cached plans (10 minutes)
///
/// Override via `WEEKPLAN_CACHE_TTL_SECONDS` environment variable
pub const DEFAULT_SCHEDULE_CACHE_TTL_SECONDS: u64 = 600;

/// Default max capacity for the plan cache (64 entries)
///
/// Override via `WEEKPLAN_CACHE_MAX_CAPACITY` environment variable
pub const DEFAULT_SCHEDULE_CACHE_MAX_CAPACITY: u64 = 64;

/// Plan cache configuration
#[derive(Debug, Clone)]
pub struct ScheduleCacheConfig {
    /// Time-to-live for cache entries
    pub ttl: Duration,

    /// Maximum number of cached plans
    pub max_capacity: u64,
}

impl Default for ScheduleCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(
                std::env::var("WEEKPLAN_CACHE_TTL_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SCHEDULE_CACHE_TTL_SECONDS),
            ),
            max_capacity: std::env::var("WEEKPLAN_CACHE_MAX_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SCHEDULE_CACHE_MAX_CAPACITY),
        }
    }
}

impl ScheduleCacheConfig {
    /// Create config with custom TTL (useful for testing)
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl, max_capacity: DEFAULT_SCHEDULE_CACHE_MAX_CAPACITY }
    }

    /// Log configuration at startup
    pub fn log_config(&self) {
        tracing::info!(
            ttl_seconds = self.ttl.as_secs(),
            max_capacity = self.max_capacity,
            "Schedule cache configuration loaded"
        );
    }
}

/// Stable fingerprint of a configuration
///
/// Every map in [`ScheduleConfig`] is ordered, so equal configurations
/// always serialize to the same bytes.
///
/// # Errors
/// Returns `WeekplanError::Config` if the configuration cannot be
/// serialized.
pub fn config_fingerprint(config: &ScheduleConfig) -> Result<String> {
    let bytes = serde_json::to_vec(config).map_err(|e| WeekplanError::from(CommonError::from(e)))?;
    Ok(hex::encode(blake3::hash(&bytes).as_bytes()))
}

/// In-memory [`ScheduleCache`] backed by `moka`
pub struct MokaScheduleCache {
    plans: Cache<String, Arc<WeeklyPlan>>,
}

impl MokaScheduleCache {
    /// Create a new plan cache
    pub fn new(config: ScheduleCacheConfig) -> Self {
        config.log_config();
        let plans = Cache::builder().time_to_live(config.ttl).max_capacity(config.max_capacity).build();
        Self { plans }
    }

    /// Number of cached plans
    ///
    /// Runs pending maintenance first so the count reflects recent writes
    /// and expirations.
    pub fn entry_count(&self) -> u64 {
        self.plans.run_pending_tasks();
        self.plans.entry_count()
    }

    fn key(config: &ScheduleConfig) -> Option<String> {
        match config_fingerprint(config) {
            Ok(key) => Some(key),
            Err(err) => {
                log_error(&err, "Schedule configuration could not be fingerprinted");
                None
            }
        }
    }
}

impl ScheduleCache for MokaScheduleCache {
    fn get(&self, config: &ScheduleConfig) -> Option<Arc<WeeklyPlan>> {
        let key = Self::key(config)?;
        let plan = self.plans.get(&key);
        tracing::debug!(fingerprint = %key, hit = plan.is_some(), "Schedule cache lookup");
        plan
    }

    fn insert(&self, config: &ScheduleConfig, plan: Arc<WeeklyPlan>) {
        if let Some(key) = Self::key(config) {
            tracing::debug!(fingerprint = %key, "Caching weekly plan");
            self.plans.insert(key, plan);
        }
    }

    fn clear(&self) {
        self.plans.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use weekplan_core::ScheduleService;
    use weekplan_domain::{ActivityCategory, ActivityTemplate, DayConfig, DayPattern, Weekday};

    use super::*;

    fn create_test_config(start: &str) -> ScheduleConfig {
        let mut config = ScheduleConfig::default();
        config.templates.insert(
            "study".to_string(),
            ActivityTemplate {
                name: "Study Block".to_string(),
                category: ActivityCategory::Study,
                details: String::new(),
                duration: 120,
            },
        );
        config.patterns.insert(
            "weekday".to_string(),
            DayPattern {
                start: start.to_string(),
                blocks: vec![weekplan_domain::PatternBlock::with_default_duration("study")],
            },
        );
        config.days.insert(
            Weekday::Monday,
            DayConfig { pattern: "weekday".to_string(), unique: Vec::new() },
        );
        config
    }

    #[test]
    fn test_fingerprint_is_stable_and_distinguishes_configs() {
        let a = config_fingerprint(&create_test_config("08:00")).unwrap();
        let b = config_fingerprint(&create_test_config("08:00")).unwrap();
        let c = config_fingerprint(&create_test_config("09:00")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_insert_and_get() {
        let cache = MokaScheduleCache::new(ScheduleCacheConfig::with_ttl(Duration::from_secs(60)));
        let config = create_test_config("08:00");
        assert!(cache.get(&config).is_none());

        let plan = ScheduleService::new().generate(&config).unwrap();
        cache.insert(&config, Arc::clone(&plan));

        let cached = cache.get(&config).unwrap();
        assert!(Arc::ptr_eq(&cached, &plan));
        assert!(cache.get(&create_test_config("09:00")).is_none());
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn test_clear_drops_plans() {
        let cache = MokaScheduleCache::new(ScheduleCacheConfig::with_ttl(Duration::from_secs(60)));
        let config = create_test_config("08:00");
        let plan = ScheduleService::new().generate(&config).unwrap();
        cache.insert(&config, plan);

        cache.clear();

        assert!(cache.get(&config).is_none());
    }

    #[test]
    fn test_service_memoizes_through_cache() {
        let cache = Arc::new(MokaScheduleCache::new(ScheduleCacheConfig::with_ttl(
            Duration::from_secs(60),
        )));
        let service = ScheduleService::with_cache(cache.clone());
        let config = create_test_config("08:00");

        let first = service.generate(&config).unwrap();
        let second = service.generate(&config.clone()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn test_expired_plan_is_regenerated() {
        let cache = MokaScheduleCache::new(ScheduleCacheConfig::with_ttl(Duration::from_millis(20)));
        let config = create_test_config("08:00");
        let plan = ScheduleService::new().generate(&config).unwrap();
        cache.insert(&config, plan);

        std::thread::sleep(Duration::from_millis(60));

        assert!(cache.get(&config).is_none());
    }
}
