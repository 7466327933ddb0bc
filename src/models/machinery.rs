use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ValidationError, require_text};
use crate::editor::ordering::renumber_with;
use crate::services::Resource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineImage {
    pub url: String,
    pub alt: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Machine {
    pub name: String,
    pub description: String,
    pub images: Vec<MachineImage>,
    pub order: i32,
    pub is_active: bool,
}

impl Default for Machine {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            images: Vec::new(),
            order: 0,
            is_active: true,
        }
    }
}

/// A production stage grouping the machines used in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stage {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub machines: Vec<Machine>,
    pub order: i32,
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Stage {
    /// Active machines in display order.
    pub fn visible_machines(&self) -> Vec<&Machine> {
        let mut machines: Vec<&Machine> = self.machines.iter().filter(|m| m.is_active).collect();
        machines.sort_by_key(|m| m.order);
        machines
    }
}

impl Resource for Stage {
    const ENDPOINT: &'static str = "/api/machinery/stages";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draft(order: i32) -> Self {
        Self {
            order,
            is_active: true,
            ..Self::default()
        }
    }

    fn validate(&self, _is_new: bool, _has_upload: bool) -> Result<(), ValidationError> {
        require_text("title", &self.title, "Vui lòng nhập tên công đoạn!")?;
        if let Some(position) = self.machines.iter().position(|m| m.name.trim().is_empty()) {
            return Err(ValidationError::new(
                "machines",
                format!("Vui lòng nhập tên cho máy thứ {}!", position + 1),
            ));
        }
        Ok(())
    }

    fn order(&self) -> Option<i32> {
        Some(self.order)
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }

    fn renumber(&mut self) {
        renumber_with(&mut self.machines, |m, i| m.order = i);
        for machine in &mut self.machines {
            renumber_with(&mut machine.images, |img, i| img.order = i);
        }
    }
}
