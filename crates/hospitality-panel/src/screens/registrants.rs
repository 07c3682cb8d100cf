//! Accommodation status of every registrant.

use std::num::NonZeroUsize;

use hospitality_seeker::{Schema, ViewCoordinator};

use super::{page_size, ALL, ALL_COLLEGES, ALL_HOSTELS};
use crate::error::Result;
use crate::models::{Gender, HostelCode, PaymentStatus, Registrant};
use crate::render::{Column, TableRow};

pub const TITLE: &str = "Registrants";
pub const PAGE_SIZE: NonZeroUsize = page_size(50);

pub fn schema() -> Result<Schema> {
    Ok(Schema::builder()
        .searchable("fullName")
        .searchable("email")
        .equality("hostel", "hostel", ALL_HOSTELS)
        .options("hostel", HostelCode::labels())
        .equality("gender", "gender", ALL)
        .options("gender", Gender::labels())
        .equality("college", "college", ALL_COLLEGES)
        .equality("payment", "paymentStatus", ALL)
        .options("payment", PaymentStatus::labels())
        .build()?)
}

pub fn coordinator(page_size: Option<NonZeroUsize>) -> Result<ViewCoordinator<Registrant>> {
    Ok(ViewCoordinator::new(schema()?, page_size.unwrap_or(PAGE_SIZE))?)
}

impl TableRow for Registrant {
    const COLUMNS: &'static [Column] = &[
        Column::fill("Name"),
        Column::fill("Email"),
        Column::fill("College"),
        Column::fixed("Hostel", 12),
        Column::fixed("Gender", 6),
        Column::fixed("Payment", 7),
        Column::fixed("Status", 11),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.email.clone(),
            self.college.clone(),
            self.hostel.to_string(),
            self.gender.to_string(),
            self.payment_status.to_string(),
            self.check_in_status.to_string(),
        ]
    }
}
