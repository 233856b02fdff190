use serde::{Deserialize, Serialize};

use crate::domain::EmployeeId;

/// Employee record as exchanged with `/employee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub phone: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
}

/// Create body: an employee before the server has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub phone: String,
    pub image_url: Option<String>,
}

impl NewEmployee {
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            job_title: self.job_title,
            phone: self.phone,
            image_url: self.image_url,
            employee_code: None,
        }
    }
}
