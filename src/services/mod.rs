//! Services module
//!
//! External collaborators of the conversation engine: the schedule API and
//! the static instructor and building directories.

pub mod buildings;
pub mod instructors;
pub mod schedule;

// Re-export commonly used services
pub use buildings::{Building, BuildingDirectory, MAX_BUILDING_CODE};
pub use instructors::{Instructor, InstructorDirectory};
pub use schedule::{HttpScheduleService, ScheduleSource};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and sharing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub schedule: Arc<dyn ScheduleSource>,
    pub instructors: Arc<InstructorDirectory>,
    pub buildings: Arc<BuildingDirectory>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let schedule = HttpScheduleService::new(&settings.schedule)?;

        Ok(Self::with_schedule(Arc::new(schedule)))
    }

    /// Built-in directories combined with the given schedule source
    pub fn with_schedule(schedule: Arc<dyn ScheduleSource>) -> Self {
        Self {
            schedule,
            instructors: Arc::new(InstructorDirectory::new()),
            buildings: Arc::new(BuildingDirectory::new()),
        }
    }
}

impl std::fmt::Debug for ServiceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceFactory")
            .field("instructors", &self.instructors.len())
            .finish_non_exhaustive()
    }
}
