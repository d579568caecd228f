use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::models::Activity;

use super::seed;

/// Activity name → record, in seed order.
pub type ActivityMap = IndexMap<String, Activity>;

/// Process-wide activity store. Every read and write goes through one lock,
/// so a lookup-check-mutate sequence run inside [`ActivityRegistry::with_activity_mut`]
/// is atomic with respect to other requests.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: Mutex<ActivityMap>,
}

impl ActivityRegistry {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: Mutex::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    /// Snapshot of the whole registry.
    pub fn list_activities(&self) -> ActivityMap {
        self.activities.lock().clone()
    }

    pub fn load_activity(&self, name: &str) -> Option<Activity> {
        self.activities.lock().get(name).cloned()
    }

    /// Runs `f` against the named activity (or `None` if absent) while
    /// holding the registry lock. `f` must not block.
    pub fn with_activity_mut<R>(&self, name: &str, f: impl FnOnce(Option<&mut Activity>) -> R) -> R {
        let mut activities = self.activities.lock();
        f(activities.get_mut(name))
    }
}
