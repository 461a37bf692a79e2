//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap
//! 2. **Context Setup**: `AppContext` with the API and configuration
//! 3. **API Dispatch**: call the matching `SunpanelApi` method
//! 4. **Output Formatting**: `CmdResult` into terminal output
//! 5. **Error Handling**: errors bubble up to `main`, which prints one line and exits 1
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: builds `AppContext` with API and configuration
//! - `handle_*()`: per-command handlers that call the API and print

use super::print::{
    print_collections, print_config, print_full_records, print_json, print_messages,
    print_records,
};
use super::setup::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use sunpanelapp::api::SunpanelApi;
use sunpanelapp::config::SunpanelConfig;
use sunpanelapp::init::initialize;
use sunpanelapp::model::Collection;
use sunpanelapp::ordering::Direction;
use sunpanelapp::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: SunpanelApi<FileStore>,
    config: SunpanelConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);
    init_tracing(cli.verbose, &ctx.config.log_filter);
    tracing::debug!(data_dir = %ctx.api.paths().data_dir.display(), "context ready");

    match cli.command {
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Collections { json }) => handle_collections(&ctx, json),
        Some(Commands::List {
            collection,
            search,
            json,
        }) => handle_list(&ctx, collection, search, json),
        Some(Commands::View {
            collection,
            selectors,
            json,
        }) => handle_view(&ctx, collection, selectors, json),
        Some(Commands::Create { collection, fields }) => {
            handle_create(&mut ctx, collection, fields)
        }
        Some(Commands::Edit {
            collection,
            selectors,
            fields,
        }) => handle_edit(&mut ctx, collection, selectors, fields),
        Some(Commands::Up {
            collection,
            selectors,
        }) => handle_move(&mut ctx, collection, selectors, Direction::Up),
        Some(Commands::Down {
            collection,
            selectors,
        }) => handle_move(&mut ctx, collection, selectors, Direction::Down),
        Some(Commands::Delete {
            collection,
            selectors,
        }) => handle_delete(&mut ctx, collection, selectors),
        Some(Commands::Doctor { collection, fix }) => handle_doctor(&mut ctx, collection, fix),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&ctx, None, None, false),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.data.clone());

    AppContext {
        api: ctx.api,
        config: ctx.config,
    }
}

/// `-v` wins, then `RUST_LOG`, then the configured filter. Logs go to stderr
/// so they never mix with command output.
fn init_tracing(verbose: bool, configured: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(configured))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_collections(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.status()?;
    if json {
        print_json(&result.collections)
    } else {
        print_collections(&result.collections);
        Ok(())
    }
}

fn handle_list(
    ctx: &AppContext,
    collection: Option<Collection>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let collection = match collection {
        Some(collection) => collection,
        None => ctx.config.default_collection()?,
    };
    let result = ctx.api.list_records(collection, search.as_deref())?;

    if json {
        return print_json(&result.listed_records);
    }
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(
    ctx: &AppContext,
    collection: Collection,
    selectors: Vec<String>,
    json: bool,
) -> Result<()> {
    let result = ctx.api.view_records(collection, &selectors)?;
    if json {
        return print_json(&result.listed_records);
    }
    print_full_records(&result.listed_records);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, collection: Collection, fields: Vec<String>) -> Result<()> {
    let result = ctx.api.create_record(collection, &fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    collection: Collection,
    selectors: Vec<String>,
    fields: Vec<String>,
) -> Result<()> {
    let result = ctx.api.update_record(collection, &selectors, &fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(
    ctx: &mut AppContext,
    collection: Collection,
    selectors: Vec<String>,
    direction: Direction,
) -> Result<()> {
    let result = ctx.api.move_record(collection, &selectors, direction)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, collection: Collection, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_records(collection, &selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext, collection: Collection, fix: bool) -> Result<()> {
    let result = ctx.api.doctor(collection, fix)?;
    print_messages(&result.messages);
    if !result.listed_records.is_empty() {
        println!();
        print_records(&result.listed_records);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    print_config(&ctx.config, ctx.api.paths());
    Ok(())
}
