//! Pulsebook command-line entry point.
//!
//! # Responsibility
//! - Host the view layer: map subcommands onto application routes and
//!   render store state as plain text.
//! - Own process-level wiring: data directory, logging, async runtime.
//!
//! # Invariants
//! - Store mutations go through the core form controller and delete
//!   confirmation flow, never directly through storage.
//! - A logging setup failure degrades to stderr notice; it never blocks
//!   a command.

mod render;

use clap::{Args, Parser, Subcommand};
use pulsebook_core::{
    default_log_level, init_logging, prefill, submit_edit, submit_new, ContactDraft, ContactId,
    ContactStore, DeleteConfirmation, EpidemicClient, FetchState, FileStorage, FormError, Route,
    DEFAULT_API_URL,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pulsebook", version, about = "Contact manager with an epidemiological dashboard")]
struct Cli {
    /// Directory holding contacts.json and logs.
    #[arg(long, env = "PULSEBOOK_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "PULSEBOOK_LOG", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all contacts.
    List,
    /// Create a contact.
    Add(AddArgs),
    /// Edit an existing contact.
    Edit {
        /// Contact id, as shown by `list`.
        id: String,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete a contact after confirmation.
    Delete {
        /// Contact id, as shown by `list`.
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Show the epidemiological dashboard.
    Dashboard {
        /// Remote API base URL.
        #[arg(long, env = "PULSEBOOK_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,
    },
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    /// Optional postal address.
    #[arg(long, default_value = "")]
    address: String,
    /// active or inactive.
    #[arg(long, default_value = "active")]
    status: String,
}

#[derive(Args)]
struct EditArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    /// Pass an empty string to clear the address.
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    status: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir);
    init_process_logging(cli.log_level.as_deref(), &data_dir);
    log::info!(
        "event=command module=cli name={} data_dir={}",
        command_name(&cli.command),
        data_dir.display()
    );

    let mut store = ContactStore::hydrate(FileStorage::in_dir(&data_dir));

    match cli.command {
        Command::List => {
            render_route(Route::ContactList, &store);
            ExitCode::SUCCESS
        }
        Command::Add(args) => run_add(&mut store, args),
        Command::Edit { id, fields } => run_edit(&mut store, &id, fields),
        Command::Delete { id, yes } => run_delete(&mut store, &id, yes),
        Command::Dashboard { api_url } => run_dashboard(&api_url).await,
    }
}

fn run_add(store: &mut ContactStore<FileStorage>, args: AddArgs) -> ExitCode {
    let draft = ContactDraft {
        name: args.name,
        email: args.email,
        phone: args.phone,
        address: args.address,
        status: args.status,
    };

    match submit_new(store, &draft) {
        Ok(id) => {
            println!("Contact created ({id}).");
            println!();
            render_route(Route::ContactList, store);
            ExitCode::SUCCESS
        }
        Err(err) => report_form_error(err),
    }
}

fn run_edit(store: &mut ContactStore<FileStorage>, raw_id: &str, fields: EditArgs) -> ExitCode {
    let id = match parse_contact_id(raw_id) {
        Some(id) => id,
        None => return ExitCode::FAILURE,
    };

    let draft = match prefill(store, id) {
        Some(draft) => apply_overrides(draft, fields),
        None => {
            println!("No contact with id {id}.");
            return ExitCode::SUCCESS;
        }
    };

    match submit_edit(store, id, &draft) {
        Ok(()) => {
            println!("Contact updated.");
            println!();
            render_route(Route::ContactList, store);
            ExitCode::SUCCESS
        }
        Err(err) => report_form_error(err),
    }
}

fn run_delete(store: &mut ContactStore<FileStorage>, raw_id: &str, yes: bool) -> ExitCode {
    let id = match parse_contact_id(raw_id) {
        Some(id) => id,
        None => return ExitCode::FAILURE,
    };

    let name = match store.get(id) {
        Some(contact) => contact.name.clone(),
        None => {
            println!("No contact with id {id}.");
            return ExitCode::SUCCESS;
        }
    };

    let mut confirmation = DeleteConfirmation::new();
    confirmation.request(id);

    if !yes && !prompt_confirm(&format!("Delete contact \"{name}\"? [y/N] ")) {
        confirmation.cancel();
        println!("Deletion cancelled.");
        return ExitCode::SUCCESS;
    }

    match confirmation.confirm(store) {
        Ok(_) => {
            println!("Contact deleted.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to persist contacts: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run_dashboard(api_url: &str) -> ExitCode {
    let client = EpidemicClient::new(api_url);
    println!("Fetching dashboard data from {} ...", client.base_url());
    println!();

    // The two fetches are independent; neither failure affects the other.
    let (historical, countries) = tokio::join!(client.historical_all(), client.countries());
    let historical = FetchState::from_result(historical);
    let countries = FetchState::from_result(countries);

    render::dashboard(&historical, &countries);

    if historical.is_ready() && countries.is_ready() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn render_route(route: Route, store: &ContactStore<FileStorage>) {
    match route {
        Route::ContactList => render::contact_list(store.contacts()),
        // The remaining routes are interactive targets; subcommands
        // handle them directly.
        Route::AddContact | Route::EditContact(_) | Route::Dashboard => {}
    }
}

fn report_form_error(err: FormError) -> ExitCode {
    match err {
        FormError::Validation(errors) => {
            eprintln!("Contact was not saved:");
            for (field, message) in &errors {
                eprintln!("  {field}: {message}");
            }
        }
        FormError::Storage(err) => {
            eprintln!("Failed to persist contacts: {err}");
        }
    }
    ExitCode::FAILURE
}

fn parse_contact_id(raw: &str) -> Option<ContactId> {
    match ContactId::parse_str(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            eprintln!("Invalid contact id: {raw}");
            None
        }
    }
}

fn apply_overrides(mut draft: ContactDraft, fields: EditArgs) -> ContactDraft {
    if let Some(name) = fields.name {
        draft.name = name;
    }
    if let Some(email) = fields.email {
        draft.email = email;
    }
    if let Some(phone) = fields.phone {
        draft.phone = phone;
    }
    if let Some(address) = fields.address {
        draft.address = address;
    }
    if let Some(status) = fields.status {
        draft.status = status;
    }
    draft
}

fn prompt_confirm(question: &str) -> bool {
    print!("{question}");
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_affirmative(&answer)
}

fn is_affirmative(answer: &str) -> bool {
    let normalized = answer.trim();
    normalized.eq_ignore_ascii_case("y") || normalized.eq_ignore_ascii_case("yes")
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::List => "list",
        Command::Add(_) => "add",
        Command::Edit { .. } => "edit",
        Command::Delete { .. } => "delete",
        Command::Dashboard { .. } => "dashboard",
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    let dir = flag
        .or_else(|| dirs::data_dir().map(|base| base.join("pulsebook")))
        .unwrap_or_else(|| std::env::temp_dir().join("pulsebook"));

    if dir.is_absolute() {
        dir
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&dir))
            .unwrap_or(dir)
    }
}

fn init_process_logging(level_flag: Option<&str>, data_dir: &std::path::Path) {
    let level = level_flag.unwrap_or(default_log_level());
    let log_dir = data_dir.join("logs");
    let log_dir = log_dir.to_string_lossy();

    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}
