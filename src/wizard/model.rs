//! Listing draft models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::state::{FIRST_STEP, ListingCategory};

/// Whether a property is offered for rent or for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Rent,
    Sale,
}

/// Employment terms for a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

/// Structured postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub country: String,
    pub street: String,
    pub apartment: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// The in-progress listing accumulated across wizard steps.
///
/// Fields that do not apply to the chosen category keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub category: ListingCategory,
    /// Current wizard step, always within `FIRST_STEP..=MAX_STEPS`.
    pub step: u8,
    pub listing_type: Option<ListingType>,
    pub property_type: Option<String>,
    pub beds: u32,
    pub baths: u32,
    pub dens: u32,
    pub square_feet: Option<u32>,
    pub location: String,
    pub description: String,
    /// Free-form price as typed ("500000", "2,400/mo").
    pub price: String,
    pub amenities: BTreeSet<String>,
    pub address: Address,
    pub images: Vec<String>,
    pub job_title: String,
    pub company: String,
    pub employment_type: Option<EmploymentType>,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            category: ListingCategory::default(),
            step: FIRST_STEP,
            listing_type: None,
            property_type: None,
            beds: 0,
            baths: 0,
            dens: 0,
            square_feet: None,
            location: String::new(),
            description: String::new(),
            price: String::new(),
            amenities: BTreeSet::new(),
            address: Address::default(),
            images: Vec::new(),
            job_title: String::new(),
            company: String::new(),
            employment_type: None,
        }
    }
}

/// A partial update to a [`ListingDraft`].
///
/// `None` leaves the field unchanged. Collections and the address are
/// replaced wholesale, not merged element by element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingDraftPatch {
    pub category: Option<ListingCategory>,
    pub listing_type: Option<ListingType>,
    pub property_type: Option<String>,
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    pub dens: Option<u32>,
    pub square_feet: Option<u32>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub amenities: Option<BTreeSet<String>>,
    pub address: Option<Address>,
    pub images: Option<Vec<String>>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub employment_type: Option<EmploymentType>,
}

impl ListingDraftPatch {
    /// Shallow-merge the set fields into `draft`.
    pub fn apply_to(self, draft: &mut ListingDraft) {
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(listing_type) = self.listing_type {
            draft.listing_type = Some(listing_type);
        }
        if let Some(property_type) = self.property_type {
            draft.property_type = Some(property_type);
        }
        if let Some(beds) = self.beds {
            draft.beds = beds;
        }
        if let Some(baths) = self.baths {
            draft.baths = baths;
        }
        if let Some(dens) = self.dens {
            draft.dens = dens;
        }
        if let Some(square_feet) = self.square_feet {
            draft.square_feet = Some(square_feet);
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(amenities) = self.amenities {
            draft.amenities = amenities;
        }
        if let Some(address) = self.address {
            draft.address = address;
        }
        if let Some(images) = self.images {
            draft.images = images;
        }
        if let Some(job_title) = self.job_title {
            draft.job_title = job_title;
        }
        if let Some(company) = self.company {
            draft.company = company;
        }
        if let Some(employment_type) = self.employment_type {
            draft.employment_type = Some(employment_type);
        }
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
