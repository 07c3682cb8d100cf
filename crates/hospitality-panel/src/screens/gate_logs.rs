//! Campus gate crossings.

use std::num::NonZeroUsize;

use hospitality_seeker::{Schema, ViewCoordinator};

use super::{ALL, ALL_COLLEGES, LOG_PAGE_SIZE};
use crate::error::Result;
use crate::models::{Direction, GateLog};
use crate::render::{Column, TableRow};

pub const TITLE: &str = "Gate logs";
pub const PAGE_SIZE: NonZeroUsize = LOG_PAGE_SIZE;

pub fn schema() -> Result<Schema> {
    Ok(Schema::builder()
        .searchable("student_name")
        .searchable("student_email")
        .equality("direction", "direction", ALL)
        .options("direction", Direction::labels())
        .equality("college", "college_name", ALL_COLLEGES)
        .build()?)
}

pub fn coordinator(page_size: Option<NonZeroUsize>) -> Result<ViewCoordinator<GateLog>> {
    Ok(ViewCoordinator::new(schema()?, page_size.unwrap_or(PAGE_SIZE))?)
}

impl TableRow for GateLog {
    const COLUMNS: &'static [Column] = &[
        Column::fixed("Time", 20),
        Column::fill("Student"),
        Column::fill("Email"),
        Column::fill("College"),
        Column::fixed("Dir", 3),
        Column::fill("Personnel"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.logged_at.clone(),
            self.student_name.clone(),
            self.student_email.clone(),
            self.college_name.clone(),
            self.direction.to_string(),
            self.personell_name.clone(),
        ]
    }
}
