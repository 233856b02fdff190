//! Create/edit form state and its conversion to wire records.

use shared::{
    domain::EmployeeId,
    protocol::{Employee, NewEmployee},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EmployeeId),
}

/// What a valid form turns into on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewEmployee),
    Update(Employee),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    mode: FormMode,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub phone: String,
    pub image_url: String,
}

impl EmployeeForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            email: String::new(),
            job_title: String::new(),
            phone: String::new(),
            image_url: String::new(),
        }
    }

    pub fn edit(employee: &Employee) -> Self {
        Self {
            mode: FormMode::Edit(employee.id),
            name: employee.name.clone(),
            email: employee.email.clone(),
            job_title: employee.job_title.clone(),
            phone: employee.phone.clone(),
            image_url: employee.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Clears every field; the mode is kept.
    pub fn reset(&mut self) {
        *self = Self {
            mode: self.mode,
            ..Self::create()
        };
    }

    pub fn submission(&self) -> Result<Submission, FormError> {
        self.check_required()?;

        let fields = NewEmployee {
            name: self.name.clone(),
            email: self.email.clone(),
            job_title: self.job_title.clone(),
            phone: self.phone.clone(),
            image_url: Some(self.image_url.clone()).filter(|url| !url.is_empty()),
        };

        Ok(match self.mode {
            FormMode::Create => Submission::Create(fields),
            FormMode::Edit(id) => Submission::Update(fields.with_id(id)),
        })
    }

    // Same rule as an HTML `required` input: empty fails, whitespace passes.
    fn check_required(&self) -> Result<(), FormError> {
        let required = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Job title", &self.job_title),
            ("Phone", &self.phone),
        ];
        match required.into_iter().find(|(_, value)| value.is_empty()) {
            Some((label, _)) => Err(FormError::MissingField(label)),
            None => Ok(()),
        }
    }
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_create_form() -> EmployeeForm {
        let mut form = EmployeeForm::create();
        form.name = "A".into();
        form.email = "a@x.com".into();
        form.job_title = "Eng".into();
        form.phone = "555".into();
        form
    }

    #[test]
    fn create_submission_treats_empty_image_url_as_absent() {
        let submission = filled_create_form().submission().expect("valid form");
        let Submission::Create(new_employee) = submission else {
            panic!("expected create submission");
        };
        assert_eq!(new_employee.image_url, None);
        assert_eq!(new_employee.job_title, "Eng");
    }

    #[test]
    fn edit_form_round_trips_selected_employee() {
        let employee = Employee {
            id: EmployeeId(7),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            job_title: "Engineer".into(),
            phone: "555-0100".into(),
            image_url: Some("https://img.example/ada.png".into()),
            employee_code: Some("EMP-7".into()),
        };

        let form = EmployeeForm::edit(&employee);
        assert_eq!(form.mode(), FormMode::Edit(EmployeeId(7)));
        assert_eq!(form.image_url, "https://img.example/ada.png");

        let Submission::Update(updated) = form.submission().expect("valid form") else {
            panic!("expected update submission");
        };
        assert_eq!(updated.id, EmployeeId(7));
        assert_eq!(updated.image_url.as_deref(), Some("https://img.example/ada.png"));
        assert_eq!(updated.employee_code, None);
    }

    #[test]
    fn missing_required_field_blocks_submission() {
        let mut form = filled_create_form();
        form.email.clear();
        assert_eq!(form.submission(), Err(FormError::MissingField("Email")));
    }

    #[test]
    fn malformed_values_pass_through() {
        let mut form = filled_create_form();
        form.email = "not-an-email".into();
        form.phone = " ".into();
        assert!(form.submission().is_ok());
    }

    #[test]
    fn reset_clears_fields_but_keeps_mode() {
        let employee = NewEmployee {
            name: "Grace Hopper".into(),
            email: "grace@navy.mil".into(),
            job_title: "Admiral".into(),
            phone: "555-0101".into(),
            image_url: Some("https://img.example/grace.png".into()),
        }
        .with_id(EmployeeId(3));

        let mut form = EmployeeForm::edit(&employee);
        form.reset();
        assert_eq!(form.mode(), FormMode::Edit(EmployeeId(3)));
        assert!(form.name.is_empty());
        assert!(form.image_url.is_empty());
    }
}
