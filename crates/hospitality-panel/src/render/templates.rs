//! Text templates and the `style` filter.
//!
//! Templates never compute anything: tables and footers are prepared in Rust
//! and passed in as plain strings.

use console::Style;
use minijinja::{Environment, Value};

use crate::error::Result;

pub const LIST: &str = "list";
pub const MUTATION: &str = "mutation";
pub const ANALYTICS: &str = "analytics";
pub const USER: &str = "user";
pub const MESSAGES: &str = "messages";

const MESSAGES_BLOCK: &str = r#"{% for message in messages %}
{{ message.text | style(message.level) }}
{% endfor %}"#;

const LIST_TEMPLATE: &str = r#"{{ title | style("title") }}
{% if filter_summary %}
{{ ("filtered by: " ~ filter_summary) | style("muted") }}
{% endif %}

{{ table }}

{{ footer | style("muted") }}
{% for facet in facets %}
{{ facet.dimension | style("header") }}: {{ facet.wildcard | style("muted") }}{% if facet.options %}, {{ facet.options | join(", ") }}{% endif %}

{% endfor %}
{% include "messages" %}"#;

const MUTATION_TEMPLATE: &str = r#"{% if dry_run %}
{{ "Dry run: nothing was sent" | style("warning") }}
{% endif %}
{{ heading | style("title") }}
{% for key, value in fields %}
  {{ key | style("muted") }}: {{ value }}
{% endfor %}
{% for error in validation_errors %}
{{ (error.field ~ ": " ~ error.message) | style("error") }}
{% endfor %}
{% include "messages" %}"#;

const ANALYTICS_TEMPLATE: &str = r#"{{ "Inside campus" | style("title") }}
{{ headline }}

{{ recent_table }}

{{ "Live bed occupancy" | style("title") }}
{{ beds_headline }}

{{ beds_table }}
{% include "messages" %}"#;

const USER_TEMPLATE: &str = r#"{{ "Logged in as" | style("muted") }} {{ name | style("title") }} <{{ email }}>
"#;

/// Style applied to a named token.
pub fn style_for(name: &str) -> Style {
    match name {
        "title" => Style::new().bold().cyan(),
        "header" => Style::new().bold(),
        "muted" => Style::new().dim(),
        "info" => Style::new().blue(),
        "success" => Style::new().green(),
        "warning" => Style::new().yellow(),
        "error" => Style::new().red().bold(),
        _ => Style::new(),
    }
}

/// Builds the template environment. `styled` decides whether `style`
/// emits ANSI escapes or passes text through.
pub fn environment(styled: bool) -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = if value.is_undefined() || value.is_none() {
            String::new()
        } else {
            value.to_string()
        };
        if styled {
            style_for(&name).force_styling(true).apply_to(text).to_string()
        } else {
            text
        }
    });
    env.add_template(MESSAGES, MESSAGES_BLOCK)?;
    env.add_template(LIST, LIST_TEMPLATE)?;
    env.add_template(MUTATION, MUTATION_TEMPLATE)?;
    env.add_template(ANALYTICS, ANALYTICS_TEMPLATE)?;
    env.add_template(USER, USER_TEMPLATE)?;
    Ok(env)
}
