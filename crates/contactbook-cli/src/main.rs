use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use contactbook_core::{
    Address, Email, Entry, MeetingName, Name, OtherPhones, Phone, ValidationError, Venue, When,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;

/// Contactbook — validate contact fields the way the contact book does
///
/// Check single field values, meeting date/times, and whole contact files.
#[derive(Parser)]
#[command(name = "contactbook", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one field value
    Check {
        /// Field kind
        #[arg(value_enum)]
        field: FieldKind,
        /// Raw value, e.g. "Blk 30 Geylang St (Home) Blk 11 AMK (Work)"
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a meeting date/time
    When {
        /// Raw value, e.g. "12/01/2025 1400"
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and re-validate a JSON contacts file
    Load {
        /// Path to .json file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldKind {
    Name,
    Phone,
    OtherPhones,
    Email,
    Address,
    MeetingName,
    Venue,
}

impl FieldKind {
    fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::OtherPhones => "other phones",
            FieldKind::Email => "email",
            FieldKind::Address => "address",
            FieldKind::MeetingName => "meeting name",
            FieldKind::Venue => "venue",
        }
    }
}

/// Accepted field value in display form
#[derive(Serialize)]
struct Checked {
    value: String,
    entries: Vec<Entry>,
}

impl Checked {
    fn single(value: String) -> Self {
        let entries = vec![Entry {
            parameter: value.clone(),
            label: None,
        }];
        Checked { value, entries }
    }

    fn labeled(value: &str, entries: &[Entry]) -> Self {
        Checked {
            value: value.to_string(),
            entries: entries.to_vec(),
        }
    }
}

fn check_field(kind: FieldKind, raw: &str) -> Result<Checked, ValidationError> {
    Ok(match kind {
        FieldKind::Name => Checked::single(Name::parse(raw)?.to_string()),
        FieldKind::Phone => Checked::single(Phone::parse(raw)?.to_string()),
        FieldKind::MeetingName => Checked::single(MeetingName::parse(raw)?.to_string()),
        FieldKind::OtherPhones => {
            let phones = OtherPhones::parse(raw)?;
            Checked::labeled(phones.as_str(), phones.entries())
        }
        FieldKind::Email => {
            let email = Email::parse(raw)?;
            Checked::labeled(email.as_str(), email.entries())
        }
        FieldKind::Address => {
            let address = Address::parse(raw)?;
            Checked::labeled(address.as_str(), address.entries())
        }
        FieldKind::Venue => {
            let venue = Venue::parse(raw)?;
            Checked::labeled(venue.as_str(), venue.entries())
        }
    })
}

// ── Commands ───────────────────────────────────────────────

fn cmd_check(kind: FieldKind, raw: &str, json: bool) -> i32 {
    let result = check_field(kind, raw);

    if json {
        let output = match &result {
            Ok(checked) => serde_json::json!({
                "valid": true,
                "field": kind.label(),
                "value": checked.value,
                "entries": checked.entries,
            }),
            Err(e) => serde_json::json!({
                "valid": false,
                "field": kind.label(),
                "error": e.to_string(),
            }),
        };
        println!("{}", output);
    } else {
        match &result {
            Ok(checked) => {
                println!("{} {} is valid", "✓".green().bold(), kind.label());
                for entry in &checked.entries {
                    println!("  {}", entry);
                }
            }
            Err(e) => {
                eprintln!("{} {} is invalid", "✗".red().bold(), kind.label());
                eprintln!("  {}", e);
            }
        }
    }

    if result.is_ok() { 0 } else { 1 }
}

fn cmd_when(raw: &str, json: bool) -> i32 {
    let result = When::parse(raw);

    if json {
        let output = match &result {
            Ok(when) => serde_json::json!({
                "valid": true,
                "display": when.to_string(),
                "canonical": when.canonical(),
            }),
            Err(e) => serde_json::json!({
                "valid": false,
                "error": e.to_string(),
            }),
        };
        println!("{}", output);
    } else {
        match &result {
            Ok(when) => println!("{} {}", "✓".green().bold(), when),
            Err(e) => {
                eprintln!("{} invalid date/time", "✗".red().bold());
                eprintln!("  {}", e);
            }
        }
    }

    if result.is_ok() { 0 } else { 1 }
}

fn cmd_load(file: &Path, json: bool) -> i32 {
    tracing::debug!(file = %file.display(), "reading contacts file");
    let text = match std::fs::read_to_string(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{} cannot read {}: {}", "error:".red().bold(), file.display(), e);
            return 2;
        }
    };

    match contactbook_core::load_contacts(&text) {
        Ok(contacts) => {
            if json {
                let output = serde_json::json!({
                    "valid": true,
                    "contacts": contacts.len(),
                    "meetings": contacts.iter().map(|c| c.meetings.len()).sum::<usize>(),
                });
                println!("{}", output);
            } else {
                println!(
                    "{} {} contacts loaded from {}",
                    "✓".green().bold(),
                    contacts.len(),
                    file.display()
                );
                for contact in &contacts {
                    let flag = if contact.flagged { " [flagged]" } else { "" };
                    println!("  {}; Phone: {}{}", contact.name, contact.phone, flag);
                    for meeting in &contact.meetings {
                        println!("    {} @ {} on {}", meeting.name, meeting.venue, meeting.when);
                    }
                }
            }
            0
        }
        Err(e) => {
            if json {
                let output = serde_json::json!({
                    "valid": false,
                    "error": e.to_string(),
                });
                println!("{}", output);
            } else {
                eprintln!("{} {}", "✗".red().bold(), e);
            }
            1
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("contactbook_cli=warn,contactbook_core=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check { field, value, json } => cmd_check(field, &value, json),
        Commands::When { value, json } => cmd_when(&value, json),
        Commands::Load { file, json } => cmd_load(&file, json),
        Commands::Version => {
            println!(
                "contactbook {} (contactbook-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            0
        }
    };

    process::exit(exit_code);
}
