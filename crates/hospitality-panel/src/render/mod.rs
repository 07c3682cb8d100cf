//! Rendering views to text or structured output.
//!
//! ```rust
//! use hospitality_panel::render::{OutputMode, Renderer};
//! use hospitality_panel::views::Message;
//!
//! let renderer = Renderer::new(OutputMode::Text).unwrap();
//! let out = renderer.messages(&[Message::success("Logged out")]).unwrap();
//! assert_eq!(out.trim(), "Logged out");
//! ```

mod output;
mod table;
mod templates;

pub use output::{serialize_csv, serialize_structured, OutputMode};
pub use table::{
    display_width, render_table, resolve_widths, terminal_width, truncate_to_width, Align, Column,
    TableRow, Width, DEFAULT_WIDTH,
};
pub use templates::style_for;

use minijinja::{context, Environment};
use serde::Serialize;
use serde_json::Value as Json;

use crate::error::Result;
use crate::models::User;
use crate::views::{AnalyticsView, ListView, Message, MutationView};

/// Turns views into the text written to stdout.
pub struct Renderer {
    mode: OutputMode,
    width: usize,
    env: Environment<'static>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("mode", &self.mode)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    /// `mode` is resolved immediately; `Auto` never survives construction.
    pub fn new(mode: OutputMode) -> Result<Self> {
        let mode = mode.resolve_auto();
        let env = templates::environment(mode.is_styled())?;
        Ok(Renderer {
            mode,
            width: terminal_width(),
            env,
        })
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    fn styled(&self) -> bool {
        self.mode.is_styled()
    }

    pub fn list<R>(&self, view: &ListView<&R>) -> Result<String>
    where
        R: TableRow + Serialize,
    {
        if self.mode.is_structured() {
            return serialize_structured(view, self.mode);
        }
        let table = render_table(view.items.iter().copied(), self.width, self.styled());
        Ok(self.env.get_template(templates::LIST)?.render(context! {
            title => &view.title,
            filter_summary => &view.filter_summary,
            table => table,
            footer => list_footer(view),
            facets => &view.facets,
            messages => &view.messages,
        })?)
    }

    /// `noun` names the item in the heading, e.g. "Hostel".
    pub fn mutation<T: Serialize>(&self, noun: &str, view: &MutationView<T>) -> Result<String> {
        if self.mode.is_structured() {
            return serialize_structured(view, self.mode);
        }
        let heading = if view.is_valid() {
            match (view.dry_run, view.action.past_tense()) {
                (true, verb) => format!("{noun} would be {verb}"),
                (false, verb) => format!("{noun} {verb}"),
            }
        } else {
            format!("{noun} not {}", view.action.past_tense())
        };
        Ok(self.env.get_template(templates::MUTATION)?.render(context! {
            heading => heading,
            dry_run => view.dry_run,
            fields => item_fields(&serde_json::to_value(&view.item)?),
            validation_errors => &view.validation_errors,
            messages => &view.messages,
        })?)
    }

    pub fn analytics(&self, view: &AnalyticsView) -> Result<String> {
        if self.mode.is_structured() {
            return serialize_structured(view, self.mode);
        }
        let headline = match &view.latest {
            Some(day) => format!(
                "{}: {} currently inside ({} in, {} out)",
                day.date, day.counts.currently_inside, day.counts.entered, day.counts.exited
            ),
            None => "No gate activity recorded".to_string(),
        };
        let beds_headline = format!(
            "{} of {} beds filled",
            view.beds.total_beds_filled,
            view.beds.total_beds()
        );
        Ok(self.env.get_template(templates::ANALYTICS)?.render(context! {
            headline => headline,
            recent_table => render_table(view.history.iter(), self.width, self.styled()),
            beds_headline => beds_headline,
            beds_table => render_table(view.beds.hostels.iter(), self.width, self.styled()),
            messages => &view.messages,
        })?)
    }

    pub fn user(&self, user: &User) -> Result<String> {
        if self.mode.is_structured() {
            return serialize_structured(user, self.mode);
        }
        Ok(self.env.get_template(templates::USER)?.render(context! {
            name => &user.name,
            email => &user.email,
        })?)
    }

    pub fn messages(&self, messages: &[Message]) -> Result<String> {
        if self.mode.is_structured() {
            return serialize_structured(&serde_json::json!({ "messages": messages }), self.mode);
        }
        Ok(self
            .env
            .get_template(templates::MESSAGES)?
            .render(context! { messages => messages })?)
    }
}

fn list_footer<T>(view: &ListView<T>) -> String {
    if view.total_count == 0 {
        return if view.total_records == 0 {
            "No records".to_string()
        } else {
            format!("No results ({} records hidden by filters)", view.total_records)
        };
    }
    let mut footer = format!(
        "Showing {} of {} results, page {} of {}",
        view.len(),
        view.total_count,
        view.current_page,
        view.total_pages
    );
    if view.is_filtered() {
        footer.push_str(&format!(" ({} records in total)", view.total_records));
    }
    footer
}

fn item_fields(value: &Json) -> Vec<(String, String)> {
    match value {
        Json::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                let text = match v {
                    Json::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), text)
            })
            .collect(),
        Json::Null => Vec::new(),
        Json::String(s) => vec![("id".to_string(), s.clone())],
        other => vec![("value".to_string(), other.to_string())],
    }
}
