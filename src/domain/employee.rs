use crate::error::PayrollError;
use rust_decimal::Decimal;
use std::fmt;

/// Unique identifier for an employee record.
///
/// Wraps a `u32` to enforce that ids are always positive. Uniqueness across
/// the collection is enforced at the store boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub fn new(value: u32) -> Result<Self, PayrollError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(PayrollError::ValidationError(
                "Employee id must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for EmployeeId {
    type Error = PayrollError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee's display name: non-empty, alphabetic characters and spaces only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeName(String);

impl EmployeeName {
    /// Returns true if `value` satisfies the name rule.
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_alphabetic() || c == ' ')
    }

    pub fn new(value: String) -> Result<Self, PayrollError> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(PayrollError::ValidationError(
                "Name must be non-empty and contain only alphabetic characters and spaces"
                    .to_string(),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A positive monetary rate.
///
/// What the rate means depends on the employee kind: fixed monthly salary,
/// hourly wage, or payment per project.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rate(Decimal);

impl Rate {
    pub fn new(value: Decimal) -> Result<Self, PayrollError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PayrollError::ValidationError(
                "Rate must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = PayrollError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The closed set of employee classifications, carrying the kind-specific
/// pay data.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeKind {
    FullTime,
    PartTime { hours_worked: Decimal },
    Contractual { projects_completed: u32 },
}

/// One stored employee record. Immutable after construction; records are
/// only created through the add-employee flow once every field has passed
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: EmployeeName,
    pub rate: Rate,
    pub kind: EmployeeKind,
}

impl Employee {
    pub fn full_time(id: EmployeeId, name: EmployeeName, salary: Rate) -> Self {
        Self {
            id,
            name,
            rate: salary,
            kind: EmployeeKind::FullTime,
        }
    }

    pub fn part_time(
        id: EmployeeId,
        name: EmployeeName,
        hourly_rate: Rate,
        hours_worked: Decimal,
    ) -> Result<Self, PayrollError> {
        if hours_worked <= Decimal::ZERO {
            return Err(PayrollError::ValidationError(
                "Hours worked must be positive".to_string(),
            ));
        }
        Ok(Self {
            id,
            name,
            rate: hourly_rate,
            kind: EmployeeKind::PartTime { hours_worked },
        })
    }

    pub fn contractual(
        id: EmployeeId,
        name: EmployeeName,
        payment_per_project: Rate,
        projects_completed: u32,
    ) -> Result<Self, PayrollError> {
        if projects_completed == 0 {
            return Err(PayrollError::ValidationError(
                "Projects completed must be positive".to_string(),
            ));
        }
        Ok(Self {
            id,
            name,
            rate: payment_per_project,
            kind: EmployeeKind::Contractual { projects_completed },
        })
    }

    /// Computes the total pay for this record.
    ///
    /// FullTime pay is the flat salary; PartTime is hourly wage times hours
    /// worked; Contractual is payment per project times projects completed.
    /// Products that exceed `Decimal` range saturate to `Decimal::MAX`;
    /// report rendering must never panic on operator input.
    pub fn pay(&self) -> Decimal {
        match &self.kind {
            EmployeeKind::FullTime => self.rate.value(),
            EmployeeKind::PartTime { hours_worked } => self
                .rate
                .value()
                .checked_mul(*hours_worked)
                .unwrap_or(Decimal::MAX),
            EmployeeKind::Contractual { projects_completed } => self
                .rate
                .value()
                .checked_mul(Decimal::from(*projects_completed))
                .unwrap_or(Decimal::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn id(value: u32) -> EmployeeId {
        value.try_into().unwrap()
    }

    fn name(value: &str) -> EmployeeName {
        EmployeeName::new(value.to_string()).unwrap()
    }

    fn rate(value: Decimal) -> Rate {
        value.try_into().unwrap()
    }

    #[test]
    fn test_employee_id_rejects_zero() {
        assert!(matches!(
            EmployeeId::new(0),
            Err(PayrollError::ValidationError(_))
        ));
        assert_eq!(EmployeeId::new(1).unwrap().value(), 1);
    }

    #[test]
    fn test_name_validation() {
        assert!(EmployeeName::is_valid("Ann"));
        assert!(EmployeeName::is_valid("Ann Smith"));
        assert!(!EmployeeName::is_valid(""));
        assert!(!EmployeeName::is_valid("Ann3"));
        assert!(!EmployeeName::is_valid("Ann-Smith"));
        assert!(matches!(
            EmployeeName::new("R2D2".to_string()),
            Err(PayrollError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rate_validation() {
        assert!(Rate::new(dec!(1.0)).is_ok());
        assert!(matches!(
            Rate::new(dec!(0.0)),
            Err(PayrollError::ValidationError(_))
        ));
        assert!(matches!(
            Rate::new(dec!(-1.0)),
            Err(PayrollError::ValidationError(_))
        ));
    }

    #[test]
    fn test_full_time_pay_is_flat_salary() {
        let employee = Employee::full_time(id(1), name("Ann"), rate(dec!(5000)));
        assert_eq!(employee.pay(), dec!(5000));
    }

    #[test]
    fn test_part_time_pay_is_rate_times_hours() {
        let employee =
            Employee::part_time(id(2), name("Bo"), rate(dec!(20)), dec!(10))
                .unwrap();
        assert_eq!(employee.pay(), dec!(200));
    }

    #[test]
    fn test_part_time_fractional_hours() {
        let employee =
            Employee::part_time(id(2), name("Bo"), rate(dec!(15.5)), dec!(2.5))
                .unwrap();
        assert_eq!(employee.pay(), dec!(38.75));
    }

    #[test]
    fn test_part_time_rejects_non_positive_hours() {
        let result = Employee::part_time(id(2), name("Bo"), rate(dec!(20)), dec!(0));
        assert!(matches!(result, Err(PayrollError::ValidationError(_))));
    }

    #[test]
    fn test_part_time_pay_saturates_instead_of_overflowing() {
        let employee = Employee::part_time(id(2), name("Bo"), rate(Decimal::MAX), dec!(2)).unwrap();
        assert_eq!(employee.pay(), Decimal::MAX);
    }

    #[test]
    fn test_contractual_pay_saturates_instead_of_overflowing() {
        let employee = Employee::contractual(id(3), name("Cy"), rate(Decimal::MAX), 2).unwrap();
        assert_eq!(employee.pay(), Decimal::MAX);
    }

    #[test]
    fn test_contractual_pay_is_rate_times_projects() {
        let employee =
            Employee::contractual(id(3), name("Cy"), rate(dec!(300)), 4).unwrap();
        assert_eq!(employee.pay(), dec!(1200));
    }

    #[test]
    fn test_contractual_rejects_zero_projects() {
        let result = Employee::contractual(id(3), name("Cy"), rate(dec!(300)), 0);
        assert!(matches!(result, Err(PayrollError::ValidationError(_))));
    }
}
