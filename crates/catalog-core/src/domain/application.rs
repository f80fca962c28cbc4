//! Application entity (read-only view of the external app registry)

use catalog_shared::constants::APP_STATUS_NORMAL;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub mode: String,
    pub icon_type: Option<String>,
    pub icon: Option<String>,
    pub icon_background: Option<String>,
    pub icon_url: Option<String>,
    pub site_code: Option<String>,
    pub status: String,
}

impl Application {
    /// Only applications in normal status may be attached to a category.
    pub fn is_normal(&self) -> bool {
        self.status == APP_STATUS_NORMAL
    }
}
