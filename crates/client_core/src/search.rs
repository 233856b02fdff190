use shared::protocol::Employee;

/// Case-insensitive match on name, email and job title; plain substring on phone.
///
/// An empty term keeps every record in store order.
pub fn filter_employees<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return employees.iter().collect();
    }

    employees
        .iter()
        .filter(|employee| matches_term(employee, &term))
        .collect()
}

fn matches_term(employee: &Employee, term: &str) -> bool {
    employee.name.to_lowercase().contains(term)
        || employee.email.to_lowercase().contains(term)
        || employee.job_title.to_lowercase().contains(term)
        || employee.phone.contains(term)
}

#[cfg(test)]
mod tests {
    use shared::domain::EmployeeId;

    use super::*;

    fn employee(id: i64, name: &str, email: &str, job_title: &str, phone: &str) -> Employee {
        Employee {
            id: EmployeeId(id),
            name: name.to_string(),
            email: email.to_string(),
            job_title: job_title.to_string(),
            phone: phone.to_string(),
            image_url: None,
            employee_code: None,
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(1, "Ada Lovelace", "ada@example.com", "Engineer", "555-0100"),
            employee(2, "Grace Hopper", "grace@navy.mil", "Admiral", "555-0101"),
            employee(3, "Bengt Olsen", "bengt@example.com", "Designer", "555-0199"),
            employee(4, "Linus", "linus@kernel.org", "Maintainer", "PHONE-EXT"),
        ]
    }

    fn ids(found: &[&Employee]) -> Vec<i64> {
        found.iter().map(|employee| employee.id.0).collect()
    }

    #[test]
    fn empty_term_returns_full_store_in_order() {
        let employees = roster();
        assert_eq!(ids(&filter_employees(&employees, "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn term_matches_name_email_and_job_title_case_insensitively() {
        let employees = roster();
        assert_eq!(ids(&filter_employees(&employees, "eng")), vec![1, 3]);
        assert_eq!(ids(&filter_employees(&employees, "NAVY")), vec![2]);
        assert_eq!(ids(&filter_employees(&employees, "admiral")), vec![2]);
    }

    #[test]
    fn phone_matches_as_plain_substring() {
        let employees = roster();
        assert_eq!(ids(&filter_employees(&employees, "0199")), vec![3]);
        assert!(filter_employees(&employees, "phone-ext").is_empty());
    }

    #[test]
    fn unmatched_term_returns_nothing() {
        let employees = roster();
        assert!(filter_employees(&employees, "zzz").is_empty());
    }
}
