use crate::domain::employee::{Employee, EmployeeKind};
use rust_decimal::Decimal;
use std::io::{self, Write};

/// Renders the payroll report to any `Write` sink.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the report header followed by one pay slip per record, in
    /// insertion order.
    pub fn write_report(&mut self, employees: &[Employee]) -> io::Result<()> {
        writeln!(self.writer, "\n------ Employee Payroll Report ------")?;
        for employee in employees {
            self.write_pay_slip(employee)?;
        }
        self.writer.flush()
    }

    fn write_pay_slip(&mut self, employee: &Employee) -> io::Result<()> {
        writeln!(
            self.writer,
            "Employee: {} (ID: {})",
            employee.name, employee.id
        )?;
        match &employee.kind {
            EmployeeKind::FullTime => {
                writeln!(
                    self.writer,
                    "Fixed Monthly Salary: ${}",
                    display(employee.rate.value())
                )?;
            }
            EmployeeKind::PartTime { hours_worked } => {
                writeln!(self.writer, "Hourly Wage: ${}", display(employee.rate.value()))?;
                writeln!(self.writer, "Hours Worked: {}", display(*hours_worked))?;
                writeln!(self.writer, "Total Salary: ${}", display(employee.pay()))?;
            }
            EmployeeKind::Contractual { projects_completed } => {
                writeln!(
                    self.writer,
                    "Contract Payment Per Project: ${}",
                    display(employee.rate.value())
                )?;
                writeln!(self.writer, "Projects Completed: {projects_completed}")?;
                writeln!(self.writer, "Total Salary: ${}", display(employee.pay()))?;
            }
        }
        writeln!(self.writer)
    }
}

// Strips trailing zeros so 20 * 10.0 prints as $200, not $200.0.
fn display(value: Decimal) -> Decimal {
    value.normalize()
}
