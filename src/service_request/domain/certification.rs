//! Result of a quality inspection.

use super::{ChecklistItem, ChecklistItemKey, ChecklistItemStatus, VeritasStatus};

/// Verdict reported by a quality inspector for a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationOutcome {
    veritas_status: VeritasStatus,
    item_statuses: Vec<(ChecklistItemKey, ChecklistItemStatus)>,
}

impl CertificationOutcome {
    /// Creates an outcome from explicit per-item statuses.
    #[must_use]
    pub const fn new(
        veritas_status: VeritasStatus,
        item_statuses: Vec<(ChecklistItemKey, ChecklistItemStatus)>,
    ) -> Self {
        Self {
            veritas_status,
            item_statuses,
        }
    }

    /// Certifies the checklist, flagging the item at `flagged_index` and
    /// approving every other item.
    ///
    /// An index outside the checklist flags nothing.
    #[must_use]
    pub fn certified_with_flag(checklist: &[ChecklistItem], flagged_index: Option<usize>) -> Self {
        let item_statuses = checklist
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let status = if Some(index) == flagged_index {
                    ChecklistItemStatus::Flagged
                } else {
                    ChecklistItemStatus::Approved
                };
                (item.key(), status)
            })
            .collect();
        Self::new(VeritasStatus::Certified, item_statuses)
    }

    /// Returns the reported veritas status.
    #[must_use]
    pub const fn veritas_status(&self) -> VeritasStatus {
        self.veritas_status
    }

    /// Returns the per-item verdicts.
    #[must_use]
    pub fn item_statuses(&self) -> &[(ChecklistItemKey, ChecklistItemStatus)] {
        &self.item_statuses
    }

    /// Returns the verdict for one item, if reported.
    #[must_use]
    pub fn status_for(&self, key: ChecklistItemKey) -> Option<ChecklistItemStatus> {
        self.item_statuses
            .iter()
            .find(|(reported, _)| *reported == key)
            .map(|(_, status)| *status)
    }

    /// Returns the flagged items.
    #[must_use]
    pub fn flagged_items(&self) -> Vec<ChecklistItemKey> {
        self.item_statuses
            .iter()
            .filter(|(_, status)| *status == ChecklistItemStatus::Flagged)
            .map(|(key, _)| *key)
            .collect()
    }
}
