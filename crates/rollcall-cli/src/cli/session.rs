//! # Roll Session
//!
//! `rollcall roll` reads one command per line and turns each into an [`Action`] on
//! the API, or into a read (list, summary) or a session control (save, help, quit).
//!
//! ```text
//! list                          show the roster under the current view
//! sort <first|last|none> [asc|desc]
//! search [text]                 filter by name; no text clears the search
//! mark <id> <state>             state: present, late, absent, unmarked
//! cycle <id>  |  <id>           advance one person along the roll cycle
//! reset                         everyone back to unmarked
//! summary                       head counts over the whole roster
//! save [name]                   complete the roll
//! help                          this list
//! quit                          leave the session (end of input works too)
//! ```
//!
//! A failing line is reported on the error stream and the session carries on.
//! Search text is taken verbatim after the first space, so `search  a` searches
//! for `" a"`.

use super::render::{render_json, render_messages, render_roster, render_summary, Output};
use rollcall::api::{Action, RosterApi};
use rollcall::commands::{CmdMessage, CmdResult};
use rollcall::error::{Result, RollcallError};
use rollcall::model::{PersonId, RollState, SortField, SortOrder};
use rollcall::source::RosterSource;
use std::io::{BufRead, Write};

pub const SESSION_HELP: &str = "\
Commands:
  list                              show the roster
  sort <first|last|none> [asc|desc] sort by name
  search [text]                     filter by name (no text clears)
  mark <id> <state>                 present, late, absent or unmarked
  cycle <id>, or just <id>          unmarked/absent -> present -> late -> absent
  reset                             everyone back to unmarked
  summary                           head counts
  save [name]                       complete the roll
  help                              this list
  quit                              leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Act(Action),
    List,
    Summary,
    Save(Option<String>),
    Help,
    Quit,
    Nothing,
}

pub fn parse_line(line: &str) -> Result<SessionCommand> {
    let line = line.trim_end_matches(['\n', '\r']).trim_start();
    if line.trim().is_empty() {
        return Ok(SessionCommand::Nothing);
    }

    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let word = word.to_ascii_lowercase();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match word.as_str() {
        "list" | "ls" => SessionCommand::List,
        "sort" => parse_sort(&args)?,
        "search" | "find" => SessionCommand::Act(Action::Search(rest.to_string())),
        "mark" => match args.as_slice() {
            [id, state] => SessionCommand::Act(Action::Mark {
                id: parse_id(id)?,
                state: state.parse::<RollState>()?,
            }),
            _ => return Err(usage("mark <id> <state>")),
        },
        "cycle" => match args.as_slice() {
            [id] => SessionCommand::Act(Action::Cycle(parse_id(id)?)),
            _ => return Err(usage("cycle <id>")),
        },
        "reset" => SessionCommand::Act(Action::Reset),
        "summary" | "sum" => SessionCommand::Summary,
        "save" => {
            let name = rest.trim();
            SessionCommand::Save((!name.is_empty()).then(|| name.to_string()))
        }
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => match other.parse::<PersonId>() {
            Ok(id) if args.is_empty() => SessionCommand::Act(Action::Cycle(id)),
            _ => {
                return Err(RollcallError::InvalidInput(format!(
                    "unknown command \"{}\" (type help)",
                    other
                )))
            }
        },
    };
    Ok(command)
}

fn parse_sort(args: &[&str]) -> Result<SessionCommand> {
    let (field, order) = match args {
        [field] => (*field, None),
        [field, order] => (*field, Some(*order)),
        _ => return Err(usage("sort <first|last|none> [asc|desc]")),
    };

    let field = match field.to_ascii_lowercase().as_str() {
        "first" | "first_name" => SortField::FirstName,
        "last" | "last_name" => SortField::LastName,
        "none" | "off" => SortField::None,
        other => {
            return Err(RollcallError::InvalidInput(format!(
                "unknown sort field \"{}\" (expected first, last or none)",
                other
            )))
        }
    };
    let order = match order.map(str::to_ascii_lowercase).as_deref() {
        None if field == SortField::None => SortOrder::None,
        None | Some("asc") | Some("ascending") => SortOrder::Ascending,
        Some("desc") | Some("descending") => SortOrder::Descending,
        Some(other) => {
            return Err(RollcallError::InvalidInput(format!(
                "unknown sort order \"{}\" (expected asc or desc)",
                other
            )))
        }
    };
    Ok(SessionCommand::Act(Action::Sort { field, order }))
}

fn parse_id(raw: &str) -> Result<PersonId> {
    raw.parse::<PersonId>()
        .map_err(|_| RollcallError::InvalidInput(format!("\"{}\" is not a person id", raw)))
}

fn usage(text: &str) -> RollcallError {
    RollcallError::InvalidInput(format!("usage: {}", text))
}

/// Runs the session until `quit` or end of input. Results go to `out`, failing
/// lines to `err`. Only I/O failures end the session early.
pub fn run_session<S, R, W, E>(
    api: &mut RosterApi<S>,
    input: R,
    out: &mut W,
    err: &mut E,
    output: &Output,
    default_name: Option<&str>,
) -> Result<()>
where
    S: RosterSource,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut unsaved = false;
    show_roster(api, &api.list(), out, output)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                report(err, &e, output)?;
                continue;
            }
        };
        tracing::debug!(?command, "session line");

        let outcome = match command {
            SessionCommand::Nothing => Ok(()),
            SessionCommand::Quit => break,
            SessionCommand::Help => write!(out, "{}", SESSION_HELP).map_err(RollcallError::from),
            SessionCommand::List => show_roster(api, &api.list(), out, output),
            SessionCommand::Summary => show_summary(api, out, output),
            SessionCommand::Save(name) => {
                let name = name.as_deref().or(default_name);
                api.complete_roll(name).and_then(|result| {
                    unsaved = false;
                    show_messages(&result, out, output)
                })
            }
            SessionCommand::Act(action) => {
                let marks = matches!(action, Action::Mark { .. } | Action::Cycle(_));
                let resets = matches!(action, Action::Reset);
                api.dispatch(action).and_then(|result| {
                    if marks {
                        unsaved = true;
                        show_messages(&result, out, output)
                    } else {
                        if resets {
                            unsaved = false;
                        }
                        show_roster(api, &result, out, output)
                    }
                })
            }
        };

        if let Err(e) = outcome {
            if matches!(e, RollcallError::Io(_)) {
                return Err(e);
            }
            report(err, &e, output)?;
        }
    }

    if unsaved {
        let warning = CmdResult {
            messages: vec![CmdMessage::warning("Session ended without saving the roll")],
            ..Default::default()
        };
        show_messages(&warning, err, output)?;
    }
    Ok(())
}

fn show_roster<S: RosterSource, W: Write>(
    api: &RosterApi<S>,
    result: &CmdResult,
    out: &mut W,
    output: &Output,
) -> Result<()> {
    if output.is_json() {
        out.write_all(render_json(result, false)?.as_bytes())?;
        return Ok(());
    }
    let view = &api.state().view;
    write!(
        out,
        "{}",
        render_roster(&result.listed, view, output.line_width, output.use_color)
    )?;
    write!(out, "{}", render_messages(&result.messages, output.use_color))?;
    Ok(())
}

fn show_summary<S: RosterSource, W: Write>(
    api: &RosterApi<S>,
    out: &mut W,
    output: &Output,
) -> Result<()> {
    let result = api.summary_result();
    if output.is_json() {
        out.write_all(render_json(&result, false)?.as_bytes())?;
    } else if let Some(summary) = &result.summary {
        write!(out, "{}", render_summary(summary, output.use_color))?;
    }
    Ok(())
}

fn show_messages<W: Write>(result: &CmdResult, out: &mut W, output: &Output) -> Result<()> {
    if output.is_json() {
        out.write_all(render_json(result, false)?.as_bytes())?;
    } else {
        write!(out, "{}", render_messages(&result.messages, output.use_color))?;
    }
    Ok(())
}

fn report<E: Write>(err: &mut E, e: &RollcallError, output: &Output) -> Result<()> {
    if output.is_json() {
        let value = serde_json::json!({ "error": e.to_string() });
        err.write_all(render_json(&value, false)?.as_bytes())?;
    } else {
        let message = CmdMessage::error(format!("Error: {}", e));
        write!(err, "{}", render_messages(&[message], output.use_color))?;
    }
    Ok(())
}
