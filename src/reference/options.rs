//! Form option lists and default labels.

use crate::service_request::domain::{ChecklistItemKey, Urgency};

/// Airport offered by the new-request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirportOption {
    /// ICAO code stored on the request.
    pub code: &'static str,
    /// City shown next to the code.
    pub city: &'static str,
}

/// Airports served by the marketplace.
pub const AIRPORT_OPTIONS: [AirportOption; 5] = [
    AirportOption {
        code: "EBBR",
        city: "Brussels",
    },
    AirportOption {
        code: "EBAW",
        city: "Antwerp",
    },
    AirportOption {
        code: "EBLG",
        city: "Liège",
    },
    AirportOption {
        code: "EBCI",
        city: "Charleroi",
    },
    AirportOption {
        code: "EBOS",
        city: "Ostend-Bruges",
    },
];

impl AirportOption {
    /// Returns the option label, for example `EBBR (Brussels)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.code, self.city)
    }
}

/// Service types offered by the new-request form.
pub const SERVICE_OPTIONS: [&str; 4] = [
    "Exterior Cleaning",
    "Interior Cleaning",
    "Deep Cleaning",
    "Interior Maintenance",
];

/// Urgency levels offered by the new-request form.
pub const URGENCY_OPTIONS: [Urgency; 2] = Urgency::ALL;

/// Manufacturer preset for the add-aircraft form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JetBrandOption {
    /// Manufacturer.
    pub brand: &'static str,
    /// Default model line.
    pub jet_type: &'static str,
    /// Reference photo used when the owner uploads none.
    pub image_url: &'static str,
}

const FALLBACK_BRAND_IMAGE: &str = "/assets/images/jet1.jpg";

/// Known manufacturers in form order.
pub const JET_BRAND_OPTIONS: [JetBrandOption; 5] = [
    JetBrandOption {
        brand: "Dassault",
        jet_type: "Falcon",
        image_url: FALLBACK_BRAND_IMAGE,
    },
    JetBrandOption {
        brand: "Gulfstream",
        jet_type: "G650",
        image_url: "/assets/images/jet2.jpg",
    },
    JetBrandOption {
        brand: "Bombardier",
        jet_type: "Global",
        image_url: "/assets/images/jet3.jpg",
    },
    JetBrandOption {
        brand: "Cessna",
        jet_type: "Citation",
        image_url: "https://images.unsplash.com/photo-1541893361138-28562162a893?q=80&w=800",
    },
    JetBrandOption {
        brand: "Embraer",
        jet_type: "Praetor",
        image_url: "https://images.unsplash.com/photo-1614041113234-b5a7885b00a5?q=80&w=800",
    },
];

/// Returns the reference photo for a manufacturer.
///
/// Matching ignores case and surrounding whitespace. Unknown brands get the
/// first option's photo.
#[must_use]
pub fn brand_reference_image(brand: &str) -> &'static str {
    let wanted = brand.trim();
    JET_BRAND_OPTIONS
        .iter()
        .find(|option| option.brand.eq_ignore_ascii_case(wanted))
        .map_or(FALLBACK_BRAND_IMAGE, |option| option.image_url)
}

/// Default (Dutch) label of a checklist item.
///
/// Translated labels live in the catalogs under
/// [`ChecklistItemKey::translation_key`].
#[must_use]
pub const fn checklist_default_label(key: ChecklistItemKey) -> &'static str {
    match key {
        ChecklistItemKey::ExteriorWash => "Exterieur gewassen en gedroogd",
        ChecklistItemKey::WindowsPolished => "Ramen gepolijst",
        ChecklistItemKey::LandingGear => "Landingsgestel gereinigd",
        ChecklistItemKey::CabinCleaned => "Cabine gestofzuigd en opgeruimd",
        ChecklistItemKey::CockpitDetailed => "Cockpit gedetailleerd",
        ChecklistItemKey::LavatorySanitized => "Toilet gesaniteerd",
    }
}

/// Detailing package advertised on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServicePackage {
    /// Stable package identifier.
    pub id: &'static str,
    /// Catalog key of the package name.
    pub name_key: &'static str,
    /// Catalog key of the price line.
    pub price_key: &'static str,
    /// Catalog key of the feature list.
    pub features_key: &'static str,
    /// Catalog key of the target audience line.
    pub ideal_for_key: &'static str,
    /// Whether the package is highlighted.
    pub is_popular: bool,
}

/// Packages in display order.
pub const SERVICE_PACKAGES: [ServicePackage; 3] = [
    ServicePackage {
        id: "essential",
        name_key: "servicePackages.essential.name",
        price_key: "servicePackages.essential.price",
        features_key: "servicePackages.essential.features",
        ideal_for_key: "servicePackages.essential.idealFor",
        is_popular: false,
    },
    ServicePackage {
        id: "premium",
        name_key: "servicePackages.premium.name",
        price_key: "servicePackages.premium.price",
        features_key: "servicePackages.premium.features",
        ideal_for_key: "servicePackages.premium.idealFor",
        is_popular: true,
    },
    ServicePackage {
        id: "elite",
        name_key: "servicePackages.elite.name",
        price_key: "servicePackages.elite.price",
        features_key: "servicePackages.elite.features",
        ideal_for_key: "servicePackages.elite.idealFor",
        is_popular: false,
    },
];
