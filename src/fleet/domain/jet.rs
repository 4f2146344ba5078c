//! Jet aggregate and related fleet types.

use super::{FleetDomainError, JetId, ParseJetStatusError, TailNumber};
use crate::reference::brand_reference_image;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational status of a jet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JetStatus {
    /// Available for flight.
    #[serde(rename = "Ready")]
    Ready,
    /// Maintenance or detailing is due.
    #[serde(rename = "Service Due")]
    ServiceDue,
    /// Currently being serviced.
    #[serde(rename = "In Service")]
    InService,
}

impl JetStatus {
    /// Returns the canonical display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::ServiceDue => "Service Due",
            Self::InService => "In Service",
        }
    }
}

impl fmt::Display for JetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for JetStatus {
    type Error = ParseJetStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "ready" => Ok(Self::Ready),
            "service due" => Ok(Self::ServiceDue),
            "in service" => Ok(Self::InService),
            _ => Err(ParseJetStatusError(value.to_owned())),
        }
    }
}

/// Values submitted by the add-aircraft form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewAircraft {
    /// Display name, for example "The Falcon".
    pub name: String,
    /// Registration mark.
    pub tail_number: String,
    /// Manufacturer.
    pub brand: String,
    /// Model line.
    pub jet_type: String,
    /// Optional model version.
    pub version: Option<String>,
    /// Optional photo URL; the brand image is used when absent.
    pub image_url: Option<String>,
    /// Range in nautical miles.
    pub range_nm: u32,
    /// Passenger seats.
    pub seats: u16,
}

impl NewAircraft {
    /// Creates a form with the required fields set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tail_number: impl Into<String>,
        brand: impl Into<String>,
        jet_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tail_number: tail_number.into(),
            brand: brand.into(),
            jet_type: jet_type.into(),
            ..Self::default()
        }
    }

    /// Sets the model version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the photo URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Sets range and seat count.
    #[must_use]
    pub const fn with_capacity(mut self, range_nm: u32, seats: u16) -> Self {
        self.range_nm = range_nm;
        self.seats = seats;
        self
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.as_str()),
            ("tail_number", self.tail_number.as_str()),
            ("brand", self.brand.as_str()),
            ("jet_type", self.jet_type.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Fleet record for one aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jet {
    id: JetId,
    name: String,
    brand: String,
    jet_type: String,
    version: String,
    tail_number: TailNumber,
    image_url: String,
    range_nm: u32,
    seats: u16,
    last_service: Option<NaiveDate>,
    status: JetStatus,
}

/// Parameter object for reconstructing a stored jet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedJetData {
    /// Stored identifier.
    pub id: JetId,
    /// Display name.
    pub name: String,
    /// Manufacturer.
    pub brand: String,
    /// Model line.
    pub jet_type: String,
    /// Model version, possibly empty.
    pub version: String,
    /// Registration mark.
    pub tail_number: TailNumber,
    /// Photo URL.
    pub image_url: String,
    /// Range in nautical miles.
    pub range_nm: u32,
    /// Passenger seats.
    pub seats: u16,
    /// Date of the last completed service.
    pub last_service: Option<NaiveDate>,
    /// Operational status.
    pub status: JetStatus,
}

impl Jet {
    /// Creates a ready jet from the add-aircraft form.
    ///
    /// # Errors
    ///
    /// Returns [`FleetDomainError::RequiredFieldsMissing`] listing all blank
    /// required fields, or [`FleetDomainError::InvalidTailNumber`] when the
    /// registration contains whitespace.
    pub fn register(form: NewAircraft) -> Result<Self, FleetDomainError> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(FleetDomainError::RequiredFieldsMissing(missing));
        }
        let tail_number = TailNumber::new(form.tail_number)?;
        let brand = form.brand.trim().to_owned();
        let image_url = form
            .image_url
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| brand_reference_image(&brand).to_owned());

        Ok(Self {
            id: JetId::generate(),
            name: form.name.trim().to_owned(),
            jet_type: form.jet_type.trim().to_owned(),
            version: form.version.map(|v| v.trim().to_owned()).unwrap_or_default(),
            brand,
            tail_number,
            image_url,
            range_nm: form.range_nm,
            seats: form.seats,
            last_service: None,
            status: JetStatus::Ready,
        })
    }

    /// Reconstructs a jet from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedJetData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            brand: data.brand,
            jet_type: data.jet_type,
            version: data.version,
            tail_number: data.tail_number,
            image_url: data.image_url,
            range_nm: data.range_nm,
            seats: data.seats,
            last_service: data.last_service,
            status: data.status,
        }
    }

    /// Returns the jet identifier.
    #[must_use]
    pub const fn id(&self) -> &JetId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the manufacturer.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the model line.
    #[must_use]
    pub fn jet_type(&self) -> &str {
        &self.jet_type
    }

    /// Returns the model version, empty when unknown.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the registration mark.
    #[must_use]
    pub const fn tail_number(&self) -> &TailNumber {
        &self.tail_number
    }

    /// Returns the photo URL.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns the range in nautical miles.
    #[must_use]
    pub const fn range_nm(&self) -> u32 {
        self.range_nm
    }

    /// Returns the seat count.
    #[must_use]
    pub const fn seats(&self) -> u16 {
        self.seats
    }

    /// Returns the last service date, if any.
    #[must_use]
    pub const fn last_service(&self) -> Option<NaiveDate> {
        self.last_service
    }

    /// Returns the operational status.
    #[must_use]
    pub const fn status(&self) -> JetStatus {
        self.status
    }

    /// Returns "Brand Type Version" with empty parts skipped.
    #[must_use]
    pub fn model_label(&self) -> String {
        [self.brand.as_str(), self.jet_type.as_str(), self.version.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
