//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap
//! 2. **Context Setup**: data directory, configuration and a file-backed API
//! 3. **API Dispatch**: call the matching `RosterApi` method
//! 4. **Output Formatting**: `CmdResult` into templates, or JSON
//!
//! Business logic is not tested here; that is the library's job.

use super::logging;
use super::render::{
    render_activities, render_json, render_messages, render_roster, render_summary,
    render_text_list, Output,
};
use super::session::run_session;
use super::setup::{Cli, Commands, ConfigAction, OrderArg, SortArg};
use clap::Parser;
use rollcall::commands::CmdResult;
use rollcall::config::RollcallConfig;
use rollcall::error::Result;
use rollcall::init::{initialize, RollcallContext};
use rollcall::model::{SortField, SortOrder, ViewUpdate};
use std::io::{self, Write};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Template generation needs no data directory
    if let Some(Commands::Config {
        action: Some(ConfigAction::Gen),
    }) = &cli.command
    {
        print!("{}", RollcallConfig::template());
        return Ok(());
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = initialize(&cwd, cli.data.clone())?;
    let output = Output {
        mode: cli.output,
        use_color: if cli.no_color { Some(false) } else { None },
        line_width: ctx.config.line_width,
    };

    match cli.command {
        None => handle_list(&mut ctx, None, None, None, &output),
        Some(Commands::List {
            sort,
            order,
            search,
        }) => handle_list(&mut ctx, sort, order, search, &output),
        Some(Commands::Roll { name }) => handle_roll(&mut ctx, name, &output),
        Some(Commands::Activity { id }) => handle_activity(&ctx, id, &output),
        Some(Commands::Config { .. }) => handle_config(&ctx, &output),
    }
}

fn handle_list(
    ctx: &mut RollcallContext,
    sort: Option<SortArg>,
    order: Option<OrderArg>,
    search: Option<String>,
    output: &Output,
) -> Result<()> {
    let loaded = ctx.api.load()?;

    let mut update = ViewUpdate::default();
    if let Some(sort) = sort {
        let field = SortField::from(sort);
        update.sort_field = Some(field);
        update.sort_order = Some(match order {
            Some(order) => SortOrder::from(order),
            None if field == SortField::None => SortOrder::None,
            None => SortOrder::Ascending,
        });
    }
    update.search_text = search;
    let mut result = ctx.api.update_view(update);

    if output.is_json() {
        let mut messages = loaded.messages;
        messages.append(&mut result.messages);
        let result = CmdResult {
            summary: Some(ctx.api.summary()),
            messages,
            ..result
        };
        print!("{}", render_json(&result, true)?);
        return Ok(());
    }

    let view = &ctx.api.state().view;
    print!(
        "{}",
        render_roster(&result.listed, view, output.line_width, output.use_color)
    );
    if !ctx.api.state().records.is_empty() {
        print!("{}", render_summary(&ctx.api.summary(), output.use_color));
    }
    Ok(())
}

fn handle_roll(ctx: &mut RollcallContext, name: Option<String>, output: &Output) -> Result<()> {
    let loaded = ctx.api.load()?;
    if !output.is_json() {
        eprint!("{}", render_messages(&loaded.messages, output.use_color));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    run_session(
        &mut ctx.api,
        stdin.lock(),
        &mut out,
        &mut err,
        output,
        name.as_deref(),
    )?;
    out.flush()?;
    Ok(())
}

fn handle_activity(ctx: &RollcallContext, id: Option<u64>, output: &Output) -> Result<()> {
    let result = match id {
        Some(id) => ctx.api.activity(id)?,
        None => ctx.api.activities()?,
    };

    if output.is_json() {
        print!("{}", render_json(&result, true)?);
        return Ok(());
    }

    print!(
        "{}",
        render_activities(&result.rolls, output.line_width, output.use_color)
    );
    Ok(())
}

fn handle_config(ctx: &RollcallContext, output: &Output) -> Result<()> {
    if output.is_json() {
        let value = serde_json::json!({
            "data_dir": ctx.data_dir,
            "config": ctx.config,
        });
        print!("{}", render_json(&value, true)?);
        return Ok(());
    }

    let lines = vec![
        format!("data_dir = {}", ctx.data_dir.display()),
        format!("students_file = {:?}", ctx.config.students_file),
        format!("activities_file = {:?}", ctx.config.activities_file),
        format!("line_width = {}", ctx.config.line_width),
    ];
    print!("{}", render_text_list(&lines, "", output.use_color));
    Ok(())
}
