use clap::Parser;
use directories::ProjectDirs;
use roster::api::RosterApi;
use roster::error::{Result, RosterError};
use roster::model::StudentDraft;
use roster::query::SortKey;
use roster::storage::fs::FileBackend;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_messages, print_roster, print_student_card};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api();

    match cli.command {
        Some(Commands::Add {
            name,
            age,
            class,
            interests,
        }) => handle_submit(&mut api, StudentDraft::new(name, age, class, interests), None),
        Some(Commands::Update {
            id,
            name,
            age,
            class,
            interests,
        }) => handle_submit(
            &mut api,
            StudentDraft::new(name, age, class, interests),
            Some(id),
        ),
        Some(Commands::Delete { id }) => handle_delete(&mut api, id),
        Some(Commands::List { search, sort }) => handle_list(&api, search, sort),
        Some(Commands::Show { id }) => handle_show(&api, id),
        Some(Commands::Export { output }) => handle_export(&api, output),
        Some(Commands::Clear { yes }) => handle_clear(&mut api, yes),
        None => handle_list(&api, None, SortKey::None),
    }
}

fn init_api() -> RosterApi<FileBackend> {
    // ROSTER_HOME lets tests (and users) pin the data directory.
    let data_dir = match std::env::var_os("ROSTER_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "roster", "roster")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let (api, warnings) = RosterApi::open(FileBackend::new(data_dir));
    print_messages(&warnings);
    api
}

fn handle_submit(
    api: &mut RosterApi<FileBackend>,
    draft: StudentDraft,
    editing_id: Option<u64>,
) -> Result<()> {
    let result = api.submit_form(draft, editing_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut RosterApi<FileBackend>, id: u64) -> Result<()> {
    let result = api.delete_student(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    api: &RosterApi<FileBackend>,
    search: Option<String>,
    sort: SortKey,
) -> Result<()> {
    let term = search.unwrap_or_default();
    let result = api.list_students(&term, sort)?;
    print_roster(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &RosterApi<FileBackend>, id: u64) -> Result<()> {
    let result = api.get_student(id)?;
    if let Some(student) = result.listed.first() {
        print_student_card(student);
    }
    Ok(())
}

fn handle_export(api: &RosterApi<FileBackend>, output: Option<PathBuf>) -> Result<()> {
    let result = api.export()?;
    if let Some(export) = &result.export {
        let path = output.unwrap_or_else(|| PathBuf::from(&export.filename));
        std::fs::write(&path, &export.json).map_err(RosterError::Io)?;
        println!("Wrote {}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(api: &mut RosterApi<FileBackend>, yes: bool) -> Result<()> {
    let result = api.clear_all(yes)?;
    print_messages(&result.messages);
    Ok(())
}
