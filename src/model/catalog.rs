use crate::model::data::{Branding, CatalogRecord, Service};

/// Never offered as a standalone service; the visit is booked in scheduling.
const SITE_VISIT_SERVICE: &str = "Site Visit";

/// Display priority of the known services. Unknown names go last.
const DESIRED_ORDER: [&str; 10] = [
    "New Masonry Installation",
    "Chimney / Fireplace Repair",
    "Masonry Rebuilding",
    "Brick / Mortar Repair",
    "New Paver / Retaining Wall Installation",
    "Paver / Retaining Wall Repair",
    "Masonry / Paver Sealing",
    "Historical Masonry Restoration",
    "Masonry Washing / Cleaning",
    "Inspection / Consultation",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub branding: Branding,
}

impl Catalog {
    pub fn from_record(record: CatalogRecord) -> Catalog {
        Catalog {
            services: record.services.map(arrange_services).unwrap_or_default(),
            branding: record.branding.unwrap_or_default(),
        }
    }

    pub fn fallback() -> Catalog {
        let services = [
            ("rec1", "New Masonry Installation"),
            ("rec2", "Chimney / Fireplace Repair"),
            ("rec3", "Brick / Mortar Repair"),
            ("rec4", "Masonry Washing / Cleaning"),
            ("rec5", "Inspection / Consultation"),
        ]
        .into_iter()
        .map(|(id, name)| Service {
            id: id.to_string(),
            name: name.to_string(),
            icon_url: None,
        })
        .collect();

        Catalog {
            services,
            branding: Branding::default(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.services.iter().any(|s| s.id == id)
    }

    pub fn names_of(&self, selected: &[String]) -> Vec<String> {
        self.services
            .iter()
            .filter(|s| selected.contains(&s.id))
            .map(|s| s.name.clone())
            .collect()
    }
}

pub fn arrange_services(services: Vec<Service>) -> Vec<Service> {
    let mut services: Vec<Service> = services
        .into_iter()
        .filter(|s| s.name != SITE_VISIT_SERVICE)
        .collect();
    services.sort_by_key(|s| {
        DESIRED_ORDER
            .iter()
            .position(|name| *name == s.name)
            .unwrap_or(DESIRED_ORDER.len())
    });
    services
}
