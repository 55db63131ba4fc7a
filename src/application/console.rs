use crate::domain::employee::{Employee, Rate};
use crate::domain::ports::EmployeeStoreBox;
use crate::error::Result;
use crate::interfaces::console::prompt::Prompter;
use crate::interfaces::console::report_writer::ReportWriter;
use std::io::{BufRead, Write};

const MENU: &str = "\nMenu\n\
1 - Full-time Employee\n\
2 - Part-time Employee\n\
3 - Contractual Employee\n\
4 - Display Payroll Report\n\
5 - Exit\n";

/// The employee classification the operator picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    FullTime,
    PartTime,
    Contractual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddEmployee(RecordKind),
    ShowReport,
    Exit,
}

impl MenuAction {
    // `choice` is already validated to 1..=5 by the prompter.
    fn from_choice(choice: u32) -> Self {
        match choice {
            1 => Self::AddEmployee(RecordKind::FullTime),
            2 => Self::AddEmployee(RecordKind::PartTime),
            3 => Self::AddEmployee(RecordKind::Contractual),
            4 => Self::ShowReport,
            _ => Self::Exit,
        }
    }
}

/// The interactive payroll console.
///
/// Owns the employee store and the operator I/O streams, and runs the menu
/// state machine to completion: add-employee flows append validated records,
/// the report action renders every stored record, and exit (or declining to
/// return after a report) ends the session.
pub struct PayrollConsole<R, W> {
    prompter: Prompter<R, W>,
    store: EmployeeStoreBox,
}

impl<R: BufRead, W: Write> PayrollConsole<R, W> {
    pub fn new(input: R, output: W, store: EmployeeStoreBox) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            store,
        }
    }

    /// Runs the menu loop until the operator exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.prompter.output(), "{MENU}")?;
            let choice = self.prompter.menu_choice()?;
            match MenuAction::from_choice(choice) {
                MenuAction::AddEmployee(kind) => self.add_employee(kind)?,
                MenuAction::ShowReport => {
                    if !self.show_report()? {
                        break;
                    }
                }
                MenuAction::Exit => break,
            }
        }
        Ok(())
    }

    /// Consumes the console and returns the employee store.
    pub fn into_store(self) -> EmployeeStoreBox {
        self.store
    }

    fn add_employee(&mut self, kind: RecordKind) -> Result<()> {
        let id = self.prompter.employee_id(self.store.as_ref())?;
        let name = self.prompter.name()?;

        let employee = match kind {
            RecordKind::FullTime => {
                let salary = self.prompter.positive_amount("Enter Fixed Salary: ")?;
                Employee::full_time(id, name, Rate::new(salary)?)
            }
            RecordKind::PartTime => {
                let hourly_rate = self.prompter.positive_amount("Enter Hourly Rate: ")?;
                let hours_worked = self.prompter.positive_amount("Enter Hours Worked: ")?;
                Employee::part_time(id, name, Rate::new(hourly_rate)?, hours_worked)?
            }
            RecordKind::Contractual => {
                let payment = self.prompter.positive_amount("Enter Payment Per Project: ")?;
                let projects = self
                    .prompter
                    .positive_count("Enter Number of Projects Completed: ")?;
                Employee::contractual(id, name, Rate::new(payment)?, projects)?
            }
        };

        self.store.add(employee)
    }

    /// Renders the report, then asks whether to return to the menu.
    /// Returns false when the operator chooses to terminate.
    fn show_report(&mut self) -> Result<bool> {
        ReportWriter::new(self.prompter.output()).write_report(self.store.all())?;
        self.prompter
            .confirm("Would you like to go back to the menu? (y/n): ")
    }
}
