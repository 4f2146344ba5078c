//! Photo-evidenced service checklist.

use super::{ParseChecklistItemKeyError, ServiceRequestDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known checklist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItemKey {
    /// Exterior washed and dried.
    ExteriorWash,
    /// Windows polished.
    WindowsPolished,
    /// Landing gear cleaned.
    LandingGear,
    /// Cabin vacuumed and tidied.
    CabinCleaned,
    /// Cockpit detailed.
    CockpitDetailed,
    /// Lavatory sanitized.
    LavatorySanitized,
}

impl ChecklistItemKey {
    /// Every checklist item in display order.
    pub const ALL: [Self; 6] = [
        Self::ExteriorWash,
        Self::WindowsPolished,
        Self::LandingGear,
        Self::CabinCleaned,
        Self::CockpitDetailed,
        Self::LavatorySanitized,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExteriorWash => "exterior_wash",
            Self::WindowsPolished => "windows_polished",
            Self::LandingGear => "landing_gear",
            Self::CabinCleaned => "cabin_cleaned",
            Self::CockpitDetailed => "cockpit_detailed",
            Self::LavatorySanitized => "lavatory_sanitized",
        }
    }

    /// Returns the translation key for the item label.
    #[must_use]
    pub fn translation_key(self) -> String {
        format!("checklist.{}", self.as_str())
    }
}

impl fmt::Display for ChecklistItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ChecklistItemKey {
    type Error = ParseChecklistItemKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ParseChecklistItemKeyError(value.to_owned()))
    }
}

/// Inspection result of one checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistItemStatus {
    /// Not yet inspected.
    #[default]
    Pending,
    /// Passed inspection.
    Approved,
    /// Flagged for attention.
    Flagged,
}

impl ChecklistItemStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Flagged => "FLAGGED",
        }
    }
}

impl fmt::Display for ChecklistItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to an uploaded photo (URL or data URI).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Wraps a photo reference.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::EmptyPhotoReference`] when the
    /// value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ServiceRequestDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ServiceRequestDomainError::EmptyPhotoReference);
        }
        Ok(Self(raw))
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which of the two evidence photos is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoSlot {
    /// Taken before the work.
    Before,
    /// Taken after the work.
    After,
}

/// One item of a request's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    key: ChecklistItemKey,
    status: ChecklistItemStatus,
    before_photo: Option<PhotoRef>,
    after_photo: Option<PhotoRef>,
}

impl ChecklistItem {
    /// Creates a pending item without photos.
    #[must_use]
    pub const fn pending(key: ChecklistItemKey) -> Self {
        Self {
            key,
            status: ChecklistItemStatus::Pending,
            before_photo: None,
            after_photo: None,
        }
    }

    /// Sets the inspection status.
    #[must_use]
    pub const fn with_status(mut self, status: ChecklistItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets both evidence photos.
    #[must_use]
    pub fn with_photos(mut self, before: PhotoRef, after: PhotoRef) -> Self {
        self.before_photo = Some(before);
        self.after_photo = Some(after);
        self
    }

    /// Returns the item key.
    #[must_use]
    pub const fn key(&self) -> ChecklistItemKey {
        self.key
    }

    /// Returns the inspection status.
    #[must_use]
    pub const fn status(&self) -> ChecklistItemStatus {
        self.status
    }

    /// Returns the photo in `slot`, if attached.
    #[must_use]
    pub const fn photo(&self, slot: PhotoSlot) -> Option<&PhotoRef> {
        match slot {
            PhotoSlot::Before => self.before_photo.as_ref(),
            PhotoSlot::After => self.after_photo.as_ref(),
        }
    }

    /// Returns `true` when both evidence photos are attached.
    #[must_use]
    pub const fn has_both_photos(&self) -> bool {
        self.before_photo.is_some() && self.after_photo.is_some()
    }

    pub(super) fn attach(&mut self, slot: PhotoSlot, photo: PhotoRef) {
        match slot {
            PhotoSlot::Before => self.before_photo = Some(photo),
            PhotoSlot::After => self.after_photo = Some(photo),
        }
    }

    pub(super) const fn set_status(&mut self, status: ChecklistItemStatus) {
        self.status = status;
    }
}
