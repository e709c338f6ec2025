//! `StaticCatalog` — in-memory catalog seeded with demo listings.

use super::model::{Catalog, CatalogItem, ItemKind};

/// Catalog over a fixed, in-memory item list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
}

impl StaticCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The demo data set shipped with the binary.
    pub fn demo() -> Self {
        Self::new(vec![
            property(
                "p1",
                "Sunny two-bedroom near the park",
                "$2,400/mo",
                "Brooklyn, NY",
                &["2 beds", "1 bath", "850 sqft"],
            ),
            property(
                "p2",
                "Modern loft with skyline views",
                "$685,000",
                "Chicago, IL",
                &["1 bed", "1 bath", "1,020 sqft"],
            ),
            property(
                "p3",
                "Family house with garden",
                "$3,150/mo",
                "Austin, TX",
                &["4 beds", "3 baths", "2,300 sqft"],
            ),
            property(
                "p4",
                "Studio close to campus",
                "$1,250/mo",
                "Seattle, WA",
                &["Studio", "1 bath", "420 sqft"],
            ),
            job(
                "j1",
                "Leasing Consultant",
                "$52k/yr",
                "Denver, CO",
                &["Full-time", "On-site"],
            ),
            job(
                "j2",
                "Property Manager",
                "$78k/yr",
                "Remote",
                &["Full-time", "Remote"],
            ),
            job(
                "j3",
                "Maintenance Technician",
                "$28/hr",
                "Phoenix, AZ",
                &["Part-time", "On-site"],
            ),
        ])
    }

    /// Items of a single kind, in catalog order.
    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}

impl Catalog for StaticCatalog {
    fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}

fn property(id: &str, title: &str, price: &str, location: &str, specs: &[&str]) -> CatalogItem {
    item(ItemKind::Property, id, title, price, location, specs)
}

fn job(id: &str, title: &str, price: &str, location: &str, specs: &[&str]) -> CatalogItem {
    item(ItemKind::Job, id, title, price, location, specs)
}

fn item(
    kind: ItemKind,
    id: &str,
    title: &str,
    price: &str,
    location: &str,
    specs: &[&str],
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        price: price.to_string(),
        location: location.to_string(),
        specs: specs.iter().map(|s| s.to_string()).collect(),
        images: vec![format!("images/{id}/cover.jpg")],
    }
}
