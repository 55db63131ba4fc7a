use crate::domain::employee::{EmployeeId, EmployeeName};
use crate::domain::ports::EmployeeStore;
use crate::error::{PayrollError, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Returns true if `input` is a non-empty string of decimal digits.
///
/// No sign and no decimal point: this is the lexical rule for fields entered
/// as whole numbers (ids, project counts, menu choices).
pub fn is_valid_number(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Captures validated operator input from a console-like stream pair.
///
/// Each capture method loops until the operator supplies an acceptable
/// value, reprompting on every invalid answer. Generic over `BufRead` and
/// `Write` so tests can drive it with in-memory buffers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output stream, for text that is not a prompt
    /// (menu listing, report rendering).
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one trimmed line. A closed input stream is not operator error
    /// and surfaces as `InputClosed` instead of looping forever.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PayrollError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Captures a menu selection in 1..=5.
    pub fn menu_choice(&mut self) -> Result<u32> {
        loop {
            self.prompt("Enter your choice: ")?;
            let line = self.read_line()?;
            if is_valid_number(&line)
                && let Ok(choice) = line.parse::<u32>()
                && (1..=5).contains(&choice)
            {
                return Ok(choice);
            }
            writeln!(
                self.output,
                "Invalid input! Please enter a number between 1 and 5."
            )?;
        }
    }

    /// Captures a positive id that is not already present in `store`.
    pub fn employee_id(&mut self, store: &dyn EmployeeStore) -> Result<EmployeeId> {
        self.prompt("Enter ID: ")?;
        loop {
            let line = self.read_line()?;
            if is_valid_number(&line)
                && let Ok(raw) = line.parse::<u32>()
                && let Ok(id) = EmployeeId::new(raw)
                && !store.contains(id)
            {
                return Ok(id);
            }
            self.prompt("Invalid or duplicate ID! Please enter a unique numeric ID: ")?;
        }
    }

    /// Captures an employee name (alphabetic characters and spaces only).
    pub fn name(&mut self) -> Result<EmployeeName> {
        self.prompt("Enter Name: ")?;
        loop {
            let line = self.read_line()?;
            match EmployeeName::new(line) {
                Ok(name) => return Ok(name),
                Err(_) => {
                    self.prompt("Invalid name! Please enter alphabetic characters only: ")?;
                }
            }
        }
    }

    /// Captures a strictly positive decimal amount (rates, hours).
    pub fn positive_amount(&mut self, label: &str) -> Result<Decimal> {
        self.prompt(label)?;
        loop {
            let line = self.read_line()?;
            if let Ok(value) = line.parse::<Decimal>()
                && value > Decimal::ZERO
            {
                return Ok(value);
            }
            self.prompt("Invalid input! Please enter a positive number: ")?;
        }
    }

    /// Captures a strictly positive whole number (project counts).
    pub fn positive_count(&mut self, label: &str) -> Result<u32> {
        self.prompt(label)?;
        loop {
            let line = self.read_line()?;
            if is_valid_number(&line)
                && let Ok(value) = line.parse::<u32>()
                && value > 0
            {
                return Ok(value);
            }
            self.prompt("Invalid input! Please enter a positive number: ")?;
        }
    }

    /// Captures a yes/no answer; returns true for `y`.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.prompt(question)?;
        loop {
            let line = self.read_line()?;
            if line.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if line.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
            self.prompt("Invalid input! Please enter y or n: ")?;
        }
    }
}
