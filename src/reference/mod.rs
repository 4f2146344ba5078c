//! Read-only lookup tables consumed by presentation layers.
//!
//! Colours are Tailwind utility class pairs. Option lists keep the order in
//! which forms present them.

mod colours;
mod options;

pub use colours::{
    ColourPair, invoice_status_colours, jet_status_colours, request_status_colours,
};
pub use options::{
    AIRPORT_OPTIONS, AirportOption, JET_BRAND_OPTIONS, JetBrandOption, SERVICE_OPTIONS,
    SERVICE_PACKAGES, ServicePackage, URGENCY_OPTIONS, brand_reference_image,
    checklist_default_label,
};
