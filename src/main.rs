use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payroll_console::application::console::PayrollConsole;
use payroll_console::domain::ports::EmployeeStoreBox;
use payroll_console::infrastructure::in_memory::InMemoryEmployeeStore;
use std::io;

/// Interactive payroll console: records full-time, part-time, and
/// contractual employees, then prints a payroll report.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let store: EmployeeStoreBox = Box::new(InMemoryEmployeeStore::new());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = PayrollConsole::new(stdin.lock(), stdout.lock(), store);
    console.run().into_diagnostic()?;

    Ok(())
}
