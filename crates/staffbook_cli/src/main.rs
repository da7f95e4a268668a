//! Command-line shell over the staffbook core.
//!
//! # Responsibility
//! - Map the three form actions (add, view, delete) onto subcommands.
//! - Render outcomes as messages; hold no business logic of its own.

use clap::{Parser, Subcommand};
use staffbook_core::{
    default_log_level, init_logging, AddEmployeeRequest, EmployeeService, FileEmployeeStore,
    ServiceError,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about = "Employee register backed by a flat text file")]
struct Cli {
    /// Store file to operate on
    #[arg(short, long, value_name = "FILE", default_value = "employees.txt")]
    file: PathBuf,

    /// Directory for rotating log files (absolute path); logging is off
    /// when omitted
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add one employee record
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        /// Base salary before the role adjustment
        #[arg(long, allow_negative_numbers = true)]
        salary: String,
        /// Manager, Developer or Intern; anything else counts as Intern
        #[arg(long, default_value = "Intern")]
        role: String,
    },
    /// Print every stored record
    List,
    /// Delete records by exact id
    Delete {
        #[arg(long)]
        id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: {err}");
        }
    }

    let service = EmployeeService::new(FileEmployeeStore::new(cli.file));

    match cli.command {
        Command::Add {
            id,
            name,
            salary,
            role,
        } => {
            let request = AddEmployeeRequest {
                id,
                name,
                base_salary: salary,
                role,
            };
            match service.add_employee(&request) {
                Ok(_) => {
                    println!("employee added.");
                    ExitCode::SUCCESS
                }
                Err(err) => report(err),
            }
        }
        Command::List => match service.list_employees() {
            Ok(rows) => {
                for row in rows {
                    println!("{}", row.report_line());
                }
                ExitCode::SUCCESS
            }
            Err(err) => report(err),
        },
        Command::Delete { id } => match service.delete_employee(&id) {
            Ok(true) => {
                println!("employee deleted.");
                ExitCode::SUCCESS
            }
            Ok(false) => {
                println!("employee not found.");
                ExitCode::SUCCESS
            }
            Err(err) => report(err),
        },
    }
}

/// Input problems are recoverable form feedback; store failures are real
/// faults and fail the process.
fn report(err: ServiceError) -> ExitCode {
    match err {
        ServiceError::Validation(_) | ServiceError::InvalidNumber { .. } => {
            println!("error: {err}");
            ExitCode::SUCCESS
        }
        ServiceError::Store(_) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
