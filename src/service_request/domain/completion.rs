//! Completion report drafted by the provider before submission.

use super::{
    ChecklistItem, ChecklistItemKey, PhotoRef, PhotoSlot, RequestId, ServiceRequestDomainError,
};

/// Draft of the evidence a provider submits to complete a request.
///
/// Obtained from [`super::ServiceRequest::begin_completion`]. Submission is
/// blocked until every item carries both a before and an after photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    request_id: RequestId,
    items: Vec<ChecklistItem>,
}

impl CompletionReport {
    pub(super) const fn new(request_id: RequestId, items: Vec<ChecklistItem>) -> Self {
        Self { request_id, items }
    }

    /// Returns the request this report belongs to.
    #[must_use]
    pub const fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Returns the report items.
    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Attaches a photo to one slot of an item, replacing any earlier photo.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::UnknownChecklistItem`] when the
    /// item is not part of the checklist.
    pub fn attach_photo(
        &mut self,
        key: ChecklistItemKey,
        slot: PhotoSlot,
        photo: PhotoRef,
    ) -> Result<(), ServiceRequestDomainError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.key() == key)
            .ok_or(ServiceRequestDomainError::UnknownChecklistItem(key))?;
        item.attach(slot, photo);
        Ok(())
    }

    /// Attaches both photos to an item.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::UnknownChecklistItem`] when the
    /// item is not part of the checklist.
    pub fn attach_photos(
        &mut self,
        key: ChecklistItemKey,
        before: PhotoRef,
        after: PhotoRef,
    ) -> Result<(), ServiceRequestDomainError> {
        self.attach_photo(key, PhotoSlot::Before, before)?;
        self.attach_photo(key, PhotoSlot::After, after)
    }

    /// Returns the items still lacking a before or after photo.
    #[must_use]
    pub fn missing_photos(&self) -> Vec<ChecklistItemKey> {
        self.items
            .iter()
            .filter(|item| !item.has_both_photos())
            .map(ChecklistItem::key)
            .collect()
    }

    /// Returns `true` when the report may be submitted.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.items.iter().all(ChecklistItem::has_both_photos)
    }

    pub(super) fn matches_checklist(&self, checklist: &[ChecklistItem]) -> bool {
        self.items.len() == checklist.len()
            && self
                .items
                .iter()
                .zip(checklist)
                .all(|(reported, expected)| reported.key() == expected.key())
    }

    pub(super) fn into_items(self) -> Vec<ChecklistItem> {
        self.items
    }
}
