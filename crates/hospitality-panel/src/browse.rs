//! Interactive, line-driven screen session.
//!
//! Each input line is one user event. Pagination commands only move the
//! cursor; search and filter commands re-filter and return to page 1.

use std::io::Write;

use hospitality_seeker::{Record, ViewCoordinator};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::{PanelError, Result};
use crate::render::{Renderer, TableRow};
use crate::source::{refresh, RecordSource};
use crate::views::{ListView, Message};

pub const HELP: &str = "\
commands:
  search TEXT        search (empty TEXT clears)
  filter DIM VALUE   set a filter dimension
  clear              reset search and filters
  next | prev        move one page
  first | last       jump to an end
  page N             go to page N
  refresh            fetch again
  facets             show filter options
  help               this text
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Filter { dimension: String, value: String },
    Clear,
    Next,
    Prev,
    First,
    Last,
    Page(usize),
    Refresh,
    Facets,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> std::result::Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => BrowseCommand::Search(rest.to_string()),
        "filter" | "f" => {
            let (dimension, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: filter DIM VALUE".to_string())?;
            BrowseCommand::Filter {
                dimension: dimension.to_string(),
                value: value.trim().to_string(),
            }
        }
        "clear" => BrowseCommand::Clear,
        "next" | "n" => BrowseCommand::Next,
        "prev" | "p" => BrowseCommand::Prev,
        "first" => BrowseCommand::First,
        "last" => BrowseCommand::Last,
        "page" => {
            let n = rest
                .parse()
                .map_err(|_| format!("usage: page N (got `{rest}`)"))?;
            BrowseCommand::Page(n)
        }
        "refresh" | "r" => BrowseCommand::Refresh,
        "facets" => BrowseCommand::Facets,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => return Err(format!("unknown command `{other}` (try `help`)")),
    };
    Ok(Some(command))
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Refresh,
    ShowFacets,
    Help,
    Quit,
}

/// Applies a command to the coordinator.
pub fn apply<R: Record>(view: &mut ViewCoordinator<R>, command: &BrowseCommand) -> Result<Outcome> {
    match command {
        BrowseCommand::Search(query) => view.set_search(query.clone()),
        BrowseCommand::Filter { dimension, value } => view.set_filter(dimension, value.clone())?,
        BrowseCommand::Clear => {
            view.clear_filters();
            view.set_search("");
        }
        BrowseCommand::Next => view.next_page(),
        BrowseCommand::Prev => view.prev_page(),
        BrowseCommand::First => view.first_page(),
        BrowseCommand::Last => view.last_page(),
        BrowseCommand::Page(n) => view.go_to_page(*n),
        BrowseCommand::Refresh => return Ok(Outcome::Refresh),
        BrowseCommand::Facets => return Ok(Outcome::ShowFacets),
        BrowseCommand::Help => return Ok(Outcome::Help),
        BrowseCommand::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Render)
}

fn render_frame<R, W>(view: &ViewCoordinator<R>, title: &str, facets: bool, renderer: &Renderer, out: &mut W) -> Result<()>
where
    R: Record + TableRow + Serialize,
    W: Write,
{
    let frame = view.frame();
    let list = ListView::from_frame(title, &frame, facets);
    writeln!(out, "{}", renderer.list(&list)?)?;
    Ok(())
}

/// Runs the session until `quit` or end of input.
///
/// Fetch failures are shown in the view and the session continues; a lost
/// session ends it with [`PanelError::Unauthenticated`].
pub async fn run<R, S, I, W>(
    view: &mut ViewCoordinator<R>,
    source: &S,
    renderer: &Renderer,
    title: &str,
    input: I,
    out: &mut W,
) -> Result<()>
where
    R: Record + TableRow + Serialize + Send,
    S: RecordSource<R> + ?Sized,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    reload(view, source).await?;
    render_frame(view, title, false, renderer, out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", renderer.messages(&[Message::error(message)])?)?;
                continue;
            }
        };

        match apply(view, &command) {
            Ok(Outcome::Render) => render_frame(view, title, false, renderer, out)?,
            Ok(Outcome::ShowFacets) => render_frame(view, title, true, renderer, out)?,
            Ok(Outcome::Refresh) => {
                reload(view, source).await?;
                render_frame(view, title, false, renderer, out)?;
            }
            Ok(Outcome::Help) => writeln!(out, "{HELP}")?,
            Ok(Outcome::Quit) => break,
            Err(err) => writeln!(out, "{}", renderer.messages(&[Message::from(&err)])?)?,
        }
    }
    Ok(())
}

async fn reload<R, S>(view: &mut ViewCoordinator<R>, source: &S) -> Result<()>
where
    R: Record + Send,
    S: RecordSource<R> + ?Sized,
{
    match refresh(view, source).await {
        Err(PanelError::Unauthenticated) => Err(PanelError::Unauthenticated),
        // Other failures are already recorded in the view.
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(
            parse_command("search priya sharma"),
            Ok(Some(BrowseCommand::Search("priya sharma".into())))
        );
        assert_eq!(parse_command("search"), Ok(Some(BrowseCommand::Search(String::new()))));
        assert_eq!(
            parse_command("filter hostel Not Assigned"),
            Ok(Some(BrowseCommand::Filter {
                dimension: "hostel".into(),
                value: "Not Assigned".into()
            }))
        );
        assert_eq!(parse_command("page 3"), Ok(Some(BrowseCommand::Page(3))));
        assert_eq!(parse_command("NEXT"), Ok(Some(BrowseCommand::Next)));
        assert_eq!(parse_command("q"), Ok(Some(BrowseCommand::Quit)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("filter hostel").is_err());
        assert!(parse_command("page two").is_err());
        assert!(parse_command("jump").is_err());
    }
}
