//! Hostel check-in scans.

use std::num::NonZeroUsize;

use hospitality_seeker::{Schema, ViewCoordinator};

use super::{ALL_COLLEGES, ALL_HOSTELS, LOG_PAGE_SIZE};
use crate::error::Result;
use crate::models::HostelLog;
use crate::render::{Column, TableRow};

pub const TITLE: &str = "Hostel logs";
pub const PAGE_SIZE: NonZeroUsize = LOG_PAGE_SIZE;

pub fn schema() -> Result<Schema> {
    Ok(Schema::builder()
        .searchable("student_name")
        .searchable("student_email")
        .equality("hostel", "hostel_name", ALL_HOSTELS)
        .equality("college", "college_name", ALL_COLLEGES)
        .build()?)
}

pub fn coordinator(page_size: Option<NonZeroUsize>) -> Result<ViewCoordinator<HostelLog>> {
    Ok(ViewCoordinator::new(schema()?, page_size.unwrap_or(PAGE_SIZE))?)
}

impl TableRow for HostelLog {
    const COLUMNS: &'static [Column] = &[
        Column::fixed("Time", 20),
        Column::fill("Student"),
        Column::fill("Email"),
        Column::fill("Hostel"),
        Column::fill("College"),
        Column::fill("Personnel"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.logged_at.clone(),
            self.student_name.clone(),
            self.student_email.clone(),
            self.hostel_name.clone(),
            self.college_name.clone(),
            self.personell_name.clone(),
        ]
    }
}
