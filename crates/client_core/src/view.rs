//! Records to view-model transformation. Painting happens in the GUI crate.

use shared::{domain::EmployeeId, protocol::Employee};

pub const EMPTY_STATE_TITLE: &str = "No employees yet";
pub const EMPTY_STATE_HINT: &str = "Add your first employee to get started!";
pub const LOADING_TEXT: &str = "Loading employees...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Cards(Vec<EmployeeCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    /// `initials` is shown if the image cannot be loaded.
    Image { url: String, initials: String },
    Initials(String),
}

impl Avatar {
    pub fn initials(&self) -> &str {
        match self {
            Avatar::Image { initials, .. } | Avatar::Initials(initials) => initials,
        }
    }
}

/// One employee card; edit and delete actions are addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeCard {
    pub id: EmployeeId,
    pub avatar: Avatar,
    pub name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub employee_code: Option<String>,
}

impl EmployeeCard {
    fn from_employee(employee: &Employee) -> Self {
        let initials = initials(&employee.name);
        let avatar = match &employee.image_url {
            Some(url) => Avatar::Image {
                url: url.clone(),
                initials,
            },
            None => Avatar::Initials(initials),
        };

        Self {
            id: employee.id,
            avatar,
            name: employee.name.clone(),
            job_title: employee.job_title.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            employee_code: employee.employee_code.clone(),
        }
    }
}

pub fn render_employees<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> ListView {
    let cards: Vec<EmployeeCard> = employees
        .into_iter()
        .map(EmployeeCard::from_employee)
        .collect();
    if cards.is_empty() {
        ListView::Empty
    } else {
        ListView::Cards(cards)
    }
}

/// Uppercase first letters of the first two space-separated words.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
