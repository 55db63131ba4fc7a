use crate::domain::employee::{Employee, EmployeeId};
use crate::domain::ports::EmployeeStore;
use crate::error::{PayrollError, Result};

/// An in-memory store for employee records.
///
/// Backed by a `Vec` so the payroll report renders records in the order the
/// operator entered them. Unbounded; records live until the process exits.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeStore {
    /// Creates a new, empty in-memory employee store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn add(&mut self, employee: Employee) -> Result<()> {
        if self.contains(employee.id) {
            return Err(PayrollError::ValidationError(format!(
                "Duplicate employee id {}",
                employee.id
            )));
        }
        self.employees.push(employee);
        Ok(())
    }

    fn contains(&self, id: EmployeeId) -> bool {
        self.employees.iter().any(|employee| employee.id == id)
    }

    fn all(&self) -> &[Employee] {
        &self.employees
    }

    fn len(&self) -> usize {
        self.employees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::{EmployeeName, Rate};
    use rust_decimal_macros::dec;

    fn full_time(id: u32, name: &str, salary: rust_decimal::Decimal) -> Employee {
        Employee::full_time(
            EmployeeId::new(id).unwrap(),
            EmployeeName::new(name.to_string()).unwrap(),
            Rate::new(salary).unwrap(),
        )
    }

    #[test]
    fn test_add_and_retrieve() {
        let mut store = InMemoryEmployeeStore::new();
        assert!(store.is_empty());

        store.add(full_time(1, "Ann", dec!(5000))).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.contains(EmployeeId::new(1).unwrap()));
        assert!(!store.contains(EmployeeId::new(2).unwrap()));
        assert_eq!(store.all()[0].name.as_str(), "Ann");
    }

    #[test]
    fn test_duplicate_id_rejected_and_size_unchanged() {
        let mut store = InMemoryEmployeeStore::new();
        store.add(full_time(1, "Ann", dec!(5000))).unwrap();

        let result = store.add(full_time(1, "Dee", dec!(100)));
        assert!(matches!(result, Err(PayrollError::ValidationError(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name.as_str(), "Ann");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = InMemoryEmployeeStore::new();
        store.add(full_time(3, "Cy", dec!(1))).unwrap();
        store.add(full_time(1, "Ann", dec!(1))).unwrap();
        store.add(full_time(2, "Bo", dec!(1))).unwrap();

        let ids: Vec<u32> = store.all().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
