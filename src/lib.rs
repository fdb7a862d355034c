// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{KeyValueStore, LocalCache, NoteRepository, RemoteStore, SaveKind, SessionGate};
use domain::note::reminder_format;
use domain::{DomainError, ImagePayload, NoteId, NoteInput, SortMode};
use infrastructure::{Config, FileStore, HttpRemoteStore};
use ports::TextPresenter;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::args::{Args, Command, NoteFields};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notesync with arguments");

    // Initialize configuration
    let mut config = Config::resolve(args.config.as_deref())?.with_env_overrides();
    if let Some(url) = &args.api_url {
        config.remote.base_url = url.clone();
    }
    let cache_dir = match &args.cache_dir {
        Some(dir) => dir.clone(),
        None => config.cache_directory()?,
    };
    debug!(?cache_dir, base_url = %config.remote.base_url, "Resolved configuration");

    // Initialize infrastructure
    let store = FileStore::new(cache_dir);
    let mut session = SessionGate::new(store.clone());
    let presenter = TextPresenter::new();

    match &args.command {
        Command::Login { user, password } => {
            if !session.login(user, password)? {
                return Err(DomainError::AuthenticationFailed.into());
            }
            println!("Logged in as {user}");
            return Ok(());
        }
        Command::Logout => {
            session.logout()?;
            println!("Logged out");
            return Ok(());
        }
        Command::Status => {
            let draft = LocalCache::new(store.clone()).load_draft()?;
            println!("Authenticated: {}", session.is_authenticated()?);
            println!("Backend:       {}", config.remote.base_url);
            println!("Cache:         {}", store.directory().display());
            println!("{}", presenter.render_draft(draft.as_ref()));
            return Ok(());
        }
        _ => {}
    }

    session
        .require()
        .context("Not logged in, run `notesync login <USER> <PASSWORD>` first")?;

    // Initialize application
    let remote = HttpRemoteStore::new(&config.remote.base_url, config.timeout())?;
    let mut repository = NoteRepository::new(remote, LocalCache::new(store))
        .with_content_limit(config.content_limit());

    // Execute use case
    execute(&mut repository, &presenter, args.command)
}

/// Dispatch one authenticated command against `repository`
pub fn execute<R: RemoteStore, S: KeyValueStore>(
    repository: &mut NoteRepository<R, S>,
    presenter: &TextPresenter,
    command: Command,
) -> Result<()> {
    match command {
        Command::List { search, sort, json } => {
            let outcome = repository.refresh();
            if let Some(banner) = presenter.render_status(&outcome) {
                eprintln!("{banner}");
            }
            let mode = SortMode::parse(&sort);
            let view = repository.query(search.as_deref().unwrap_or(""), mode);
            debug!(count = view.len(), %mode, "Queried notes");
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", presenter.render_list(&view));
            }
        }
        Command::Show { note_id } => {
            let id = NoteId::from(note_id);
            report_refresh(repository, presenter);
            let note = repository
                .find(&id)
                .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;
            println!("{}", presenter.render(note));
        }
        Command::Add { fields } => {
            let draft = repository.load_draft()?.unwrap_or_default();
            let title = fields.title.clone().unwrap_or(draft.title);
            let content = match &fields.content {
                Some(typed) => repository.limit_content(typed),
                None => draft.content,
            };
            let mut input = NoteInput::new(title, content);
            apply_fields(&mut input, &fields)?;
            let image = load_image(fields.image.as_deref())?;

            let outcome = repository.save(input, image.as_ref(), None)?;
            print_save(presenter, outcome.kind, &outcome.note.id, &outcome.refresh);
        }
        Command::Edit { note_id, fields } => {
            let id = NoteId::from(note_id);
            report_refresh(repository, presenter);
            let note = repository
                .find(&id)
                .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;
            let mut input = NoteInput::from(note);
            if let Some(title) = &fields.title {
                input.title = title.clone();
            }
            if let Some(content) = &fields.content {
                input.content = repository.limit_content(content);
            }
            apply_fields(&mut input, &fields)?;
            let image = load_image(fields.image.as_deref())?;

            let outcome = repository.save(input, image.as_ref(), Some(&id))?;
            print_save(presenter, outcome.kind, &outcome.note.id, &outcome.refresh);
        }
        Command::Delete { note_id, yes } => {
            if !yes {
                bail!("Refusing to delete note {note_id} without confirmation, pass --yes");
            }
            let id = NoteId::from(note_id);
            let outcome = repository.remove(&id)?;
            info!(note_id = %id, "Note deleted");
            println!("Note deleted: {id}");
            if let Some(banner) = presenter.render_status(&outcome) {
                eprintln!("{banner}");
            }
        }
        Command::Pin { note_id } => {
            let id = NoteId::from(note_id);
            report_refresh(repository, presenter);
            let outcome = repository.toggle_pin(&id)?;
            let state = if outcome.note.is_pinned() { "Pinned" } else { "Unpinned" };
            println!("{state}: {id}");
        }
        Command::Draft { title, content } => {
            let current = repository.load_draft()?.unwrap_or_default();
            let draft = if title.is_some() || content.is_some() {
                repository.set_draft(
                    title.as_deref().unwrap_or(&current.title),
                    content.as_deref().unwrap_or(&current.content),
                )?
            } else {
                current
            };
            println!("{}", presenter.render_draft(Some(&draft)));
        }
        Command::Login { .. } | Command::Logout | Command::Status => {
            bail!("Session commands are handled before the repository is opened")
        }
    }

    Ok(())
}

fn report_refresh<R: RemoteStore, S: KeyValueStore>(
    repository: &mut NoteRepository<R, S>,
    presenter: &TextPresenter,
) {
    let outcome = repository.refresh();
    if let Some(banner) = presenter.render_status(&outcome) {
        eprintln!("{banner}");
    }
}

fn print_save(
    presenter: &TextPresenter,
    kind: SaveKind,
    id: &NoteId,
    refresh: &application::RefreshOutcome,
) {
    match kind {
        SaveKind::Created => println!("Note Added! ({id})"),
        SaveKind::Updated => println!("Note Updated! ({id})"),
    }
    if let Some(banner) = presenter.render_status(refresh) {
        eprintln!("{banner}");
    }
}

/// Copy optional tag/reminder/color from the command line onto `input`
fn apply_fields(input: &mut NoteInput, fields: &NoteFields) -> Result<(), DomainError> {
    if let Some(tag) = &fields.tag {
        input.tag = Some(tag.clone()).filter(|t| !t.is_empty());
    }
    if let Some(raw) = &fields.reminder {
        input.reminder = match raw.trim() {
            "" => None,
            value => Some(reminder_format::parse(value).ok_or_else(|| {
                DomainError::Validation(format!("invalid reminder '{value}', expected YYYY-MM-DDTHH:MM"))
            })?),
        };
    }
    if let Some(color) = &fields.color {
        input.color = Some(color.clone());
    }
    Ok(())
}

fn load_image(path: Option<&Path>) -> Result<Option<ImagePayload>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();
    Ok(Some(ImagePayload::new(file_name, bytes)))
}
