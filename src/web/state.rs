use std::sync::Arc;

use crate::database::ActivityRegistry;
use crate::services::activities_service::CapacityPolicy;

/// Shared handler state. Cloning is cheap; every clone sees the same registry.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
    pub capacity: CapacityPolicy,
}

impl AppState {
    pub fn new(registry: ActivityRegistry, capacity: CapacityPolicy) -> Self {
        Self {
            registry: Arc::new(registry),
            capacity,
        }
    }

    pub fn seeded(capacity: CapacityPolicy) -> Self {
        Self::new(ActivityRegistry::seeded(), capacity)
    }
}
