use clap::Parser;
use directories::ProjectDirs;
use pim::api::{CmdResult, NewContact, PimApi, PimPaths};
use pim::config::PimConfig;
use pim::error::{PimError, Result};
use pim::model::notes::parse_tags;
use pim::store::fs::JsonFileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::print::{print_birthdays, print_config, print_messages, print_notes, print_records};

const DATA_DIR_ENV: &str = "PIM_DATA_DIR";
const LOG_ENV: &str = "PIM_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PimApi<JsonFileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Contacts) | None => handle_contacts(&ctx),
        Some(Commands::AddContact {
            name,
            phone,
            email,
            address,
            birthday,
        }) => {
            let contact = NewContact {
                name,
                phone,
                email,
                address,
                birthday,
            };
            report(ctx.api.add_contact(contact)?);
            Ok(())
        }
        Some(Commands::Show { name }) => {
            let result = ctx.api.show_contact(&name)?;
            print_records(&result.listed_records);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::DeleteContact { name }) => {
            report(ctx.api.delete_contact(&name)?);
            Ok(())
        }
        Some(Commands::AddPhone { name, phone }) => {
            report(ctx.api.add_phone(&name, &phone)?);
            Ok(())
        }
        Some(Commands::EditPhone { name, old, new }) => {
            report(ctx.api.edit_phone(&name, &old, &new)?);
            Ok(())
        }
        Some(Commands::DeletePhone { name, phone }) => {
            report(ctx.api.delete_phone(&name, &phone)?);
            Ok(())
        }
        Some(Commands::FindPhone { name, phone }) => {
            report(ctx.api.find_phone(&name, &phone)?);
            Ok(())
        }
        Some(Commands::SetEmail { name, email }) => {
            report(ctx.api.set_email(&name, &email)?);
            Ok(())
        }
        Some(Commands::SetAddress { name, address }) => {
            report(ctx.api.set_address(&name, &address)?);
            Ok(())
        }
        Some(Commands::SetBirthday { name, birthday }) => {
            report(ctx.api.set_birthday(&name, &birthday)?);
            Ok(())
        }
        Some(Commands::Birthdays { days }) => {
            let result = ctx.api.birthdays_in_days(days)?;
            print_birthdays(&result.birthdays);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Notes { by_tags }) => {
            let result = ctx.api.list_notes(by_tags)?;
            print_notes(&result.listed_notes);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::AddNote { text, tags }) => {
            let tags = tags.as_deref().map(parse_tags).unwrap_or_default();
            report(ctx.api.add_note(&text, tags)?);
            Ok(())
        }
        Some(Commands::EditNote {
            id,
            text,
            tags,
            clear_tags,
        }) => {
            let tags = if clear_tags {
                Some(Vec::new())
            } else {
                tags.as_deref().map(parse_tags)
            };
            report(ctx.api.edit_note(id, text.as_deref(), tags)?);
            Ok(())
        }
        Some(Commands::DeleteNote { id }) => {
            report(ctx.api.delete_note(id)?);
            Ok(())
        }
        Some(Commands::SearchNotes { keyword }) => handle_note_search(&ctx, |api| {
            api.search_notes(&keyword)
        }),
        Some(Commands::SearchTag { tag }) => {
            handle_note_search(&ctx, |api| api.search_notes_by_tag(&tag))
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "pim", "pim")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            PimError::Config(format!(
                "Could not determine a data directory; pass --data-dir or set {}",
                DATA_DIR_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = PimConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {}", e);
        PimConfig::default()
    });

    let store = JsonFileStore::new(config.contacts_path(&data_dir), config.notes_path(&data_dir));
    tracing::debug!(
        contacts = %store.contacts_path().display(),
        notes = %store.notes_path().display(),
        "using data files"
    );
    let api = PimApi::new(store, PimPaths { data_dir });
    Ok(AppContext { api })
}

/// Prints whatever a mutating command returned.
fn report(result: CmdResult) {
    print_messages(&result.messages);
}

fn handle_contacts(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_note_search<F>(ctx: &AppContext, search: F) -> Result<()>
where
    F: FnOnce(&PimApi<JsonFileStore>) -> Result<CmdResult>,
{
    let result = search(&ctx.api)?;
    if !result.listed_notes.is_empty() {
        print_notes(&result.listed_notes);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let result = match (key, value) {
        (None, _) => ctx.api.show_config()?,
        (Some(k), None) => ctx.api.config_value(&k)?,
        (Some(k), Some(v)) => ctx.api.set_config(&k, &v)?,
    };

    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
