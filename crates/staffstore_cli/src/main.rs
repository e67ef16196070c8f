//! StaffStore command-line front end.
//!
//! # Responsibility
//! - Drive the employee persistence port against a live PostgreSQL endpoint.
//! - Keep output deterministic: one `key=value` line per result on stdout,
//!   classified errors on stderr.

use clap::{Args, Parser, Subcommand};
use staffstore_core::{
    default_log_level, init_logging, DbConfig, EmployeeService, PgEmployeeRepository,
};

#[derive(Parser)]
#[command(name = "staffstore", version, about = "Employee record store")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, default_value = default_log_level())]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ConnectionArgs {
    #[arg(long, default_value = "localhost")]
    host: String,

    #[arg(long, default_value_t = 5432)]
    port: u16,

    #[arg(long, default_value = "staffstore")]
    database: String,

    #[arg(long, default_value = "postgres")]
    username: String,

    #[arg(long, default_value = "postgres")]
    password: String,
}

#[derive(Subcommand)]
enum Command {
    /// Persist a new employee and print the assigned id.
    Save { name: String, age: u8 },
    /// Look an employee up by id.
    Find { id: i64 },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli.log_level) {
        eprintln!("logging setup failed: {err}");
        std::process::exit(2);
    }

    let config = DbConfig::new(
        cli.connection.username,
        cli.connection.password,
        cli.connection.host,
        cli.connection.port,
        cli.connection.database,
    );
    let service = EmployeeService::new(PgEmployeeRepository::new(config));

    let outcome = match cli.command {
        Command::Save { name, age } => service.hire(&name, age).await,
        Command::Find { id } => service.lookup(id).await,
    };

    match outcome {
        Ok(employee) => {
            println!(
                "id={} name={} age={}",
                employee.id(),
                employee.name(),
                employee.age()
            );
        }
        Err(err) => {
            eprintln!("error kind={} code={} message={err}", err.kind(), err.code());
            std::process::exit(1);
        }
    }
}
