//! Naozi CLI - order printing from your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{init, login, logout, order, orders, ping, register, services, whoami};

/// Naozi - print shop orders in your terminal
#[derive(Parser)]
#[command(name = "naozi", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Ping {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the backend to initialize its spreadsheet tabs
    Init {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new account (logs you in on success)
    Register {
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in to your account
    Login {
        /// Email address
        email: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out and forget the stored session
    Logout,

    /// Show the current session
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the print services on offer
    Services {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Place a print order
    Order {
        /// Service type, e.g. business-cards, brochures, banners
        #[arg(long)]
        service: String,
        /// Number of copies
        #[arg(long)]
        quantity: u32,
        /// Design file (PDF, JPG, PNG, AI, PSD, or CDR; max 10 MB)
        #[arg(long)]
        file: PathBuf,
        /// Contact name (defaults to the logged-in user, prompted otherwise)
        #[arg(long)]
        name: Option<String>,
        /// Contact email (defaults to the logged-in user, prompted otherwise)
        #[arg(long)]
        email: Option<String>,
        /// Contact phone (prompted when omitted)
        #[arg(long)]
        phone: Option<String>,
        /// Company name
        #[arg(long, default_value = "")]
        company: String,
        /// Delivery address
        #[arg(long, default_value = "")]
        address: String,
        /// Notes for the print shop
        #[arg(long, default_value = "")]
        notes: String,
        /// Paper type
        #[arg(long, default_value = "")]
        paper: String,
        /// Print size, e.g. A4, A5
        #[arg(long, default_value = "")]
        size: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List your past orders
    Orders {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ping { json } => ping::run(json),
        Commands::Init { json } => init::run(json),
        Commands::Register { name, email, phone, password } => {
            register::run(&name, &email, phone, password)
        }
        Commands::Login { email, password } => login::run(&email, password),
        Commands::Logout => logout::run(),
        Commands::Whoami { json } => whoami::run(json),
        Commands::Services { json } => services::run(json),
        Commands::Order { service, quantity, file, name, email, phone,
                          company, address, notes, paper, size, json } => {
            order::run(order::OrderArgs {
                service,
                quantity,
                file,
                name,
                email,
                phone,
                company,
                address,
                notes,
                paper,
                size,
                json,
            })
        }
        Commands::Orders { json } => orders::run(json),
    }
}
