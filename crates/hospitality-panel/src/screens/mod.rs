//! One module per panel screen.
//!
//! Each screen declares its schema, default page size and table columns, and
//! builds a [`ViewCoordinator`] for its record type.

use std::num::NonZeroUsize;

use hospitality_seeker::{Record, ViewCoordinator};

use crate::error::Result;

pub mod allotments;
pub mod gate_logs;
pub mod hostel_logs;
pub mod hostels;
pub mod registrants;

pub const ALL_HOSTELS: &str = "All hostels";
pub const ALL_COLLEGES: &str = "All colleges";
pub const ALL: &str = "All";

pub(crate) const fn page_size(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => NonZeroUsize::MIN,
    }
}

/// Default page size for log screens.
pub const LOG_PAGE_SIZE: NonZeroUsize = page_size(25);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Screen {
    Registrants,
    GateLogs,
    HostelLogs,
    Allotments,
    Hostels,
}

impl Screen {
    pub const ALL: &'static [Screen] = &[
        Screen::Registrants,
        Screen::GateLogs,
        Screen::HostelLogs,
        Screen::Allotments,
        Screen::Hostels,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Registrants => registrants::TITLE,
            Screen::GateLogs => gate_logs::TITLE,
            Screen::HostelLogs => hostel_logs::TITLE,
            Screen::Allotments => allotments::TITLE,
            Screen::Hostels => hostels::TITLE,
        }
    }

    pub fn default_page_size(&self) -> NonZeroUsize {
        match self {
            Screen::Registrants => registrants::PAGE_SIZE,
            Screen::GateLogs => gate_logs::PAGE_SIZE,
            Screen::HostelLogs => hostel_logs::PAGE_SIZE,
            Screen::Allotments => allotments::PAGE_SIZE,
            Screen::Hostels => hostels::PAGE_SIZE,
        }
    }

    /// Log screens refresh continuously in the web panel.
    pub fn is_live(&self) -> bool {
        matches!(self, Screen::GateLogs | Screen::HostelLogs)
    }
}

/// Screen input from the command line.
///
/// Applied in event order: filters, then search, then page navigation. Apply
/// it after the first load so that the page number is checked against real
/// data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewArgs {
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    pub page: Option<usize>,
}

impl ViewArgs {
    pub fn apply<R: Record>(&self, view: &mut ViewCoordinator<R>) -> Result<()> {
        for (dimension, value) in &self.filters {
            view.set_filter(dimension, value.clone())?;
        }
        if let Some(query) = &self.search {
            view.set_search(query.clone());
        }
        if let Some(page) = self.page {
            view.go_to_page(page);
        }
        Ok(())
    }
}

/// Parses `dimension=value`. The value may itself contain `=`.
pub fn parse_filter(raw: &str) -> std::result::Result<(String, String), String> {
    let (dimension, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected DIMENSION=VALUE, got `{raw}`"))?;
    let dimension = dimension.trim();
    if dimension.is_empty() {
        return Err(format!("missing dimension in `{raw}`"));
    }
    Ok((dimension.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_syntax() {
        assert_eq!(
            parse_filter("hostel=Not Assigned"),
            Ok(("hostel".to_string(), "Not Assigned".to_string()))
        );
        assert_eq!(
            parse_filter("college = A=B College"),
            Ok(("college".to_string(), "A=B College".to_string()))
        );
        assert!(parse_filter("hostel").is_err());
        assert!(parse_filter("=A").is_err());
    }

    #[test]
    fn page_sizes() {
        assert_eq!(Screen::Registrants.default_page_size().get(), 50);
        assert_eq!(Screen::GateLogs.default_page_size().get(), 25);
        assert!(Screen::HostelLogs.is_live());
        assert!(!Screen::Hostels.is_live());
    }
}
