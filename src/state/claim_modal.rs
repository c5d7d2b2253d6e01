//! Claim-details modal state.
//!
//! The modal owns the fraud findings of one claim: accept or decline
//! each finding, attach remarks, add a new finding from the catalog.
//! While it is open it captures every key; the screen behind it does
//! not move.

use crate::model::finding::FINDINGS_CATALOG;
use crate::model::{AuditRecord, Finding, FindingId, FindingStatus};

/// Which part of the modal owns the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimModalFocus {
    /// Moving through the findings list.
    Findings,
    /// Choosing a catalog entry to add.
    Picker {
        /// Cursor inside the catalog list.
        cursor: usize,
    },
    /// Editing remarks for one finding.
    Remarks {
        /// Index of the finding being annotated.
        index: usize,
        /// Edit buffer.
        input: String,
    },
}

/// State of the open claim-details view.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimModalState {
    /// Claim number shown in the title.
    pub claim_number: String,
    /// Hospital, for the summary line.
    pub hospital_name: String,
    /// Audit status, for the summary line.
    pub status: String,
    /// The findings under review.
    pub findings: Vec<Finding>,
    /// Cursor in the findings list.
    pub cursor: usize,
    /// Keyboard owner.
    pub focus: ClaimModalFocus,
    next_finding_id: usize,
}

impl ClaimModalState {
    /// Open the modal for a record, seeding findings from the record or,
    /// when the record carries none, from the first two catalog entries
    /// so a reviewer always has something to act on.
    pub fn open(record: &AuditRecord) -> Self {
        let descriptions: Vec<String> = if record.findings.is_empty() {
            FINDINGS_CATALOG.iter().take(2).map(|s| s.to_string()).collect()
        } else {
            record.findings.clone()
        };
        let findings = descriptions
            .into_iter()
            .enumerate()
            .map(|(idx, description)| {
                Finding::pending(
                    FindingId::new(format!("finding-{}", idx + 1)).expect("generated id"),
                    description,
                )
            })
            .collect::<Vec<_>>();
        let next_finding_id = findings.len() + 1;
        Self {
            claim_number: record.claim_number.clone(),
            hospital_name: record.hospital_name.clone(),
            status: record.status.clone(),
            findings,
            cursor: 0,
            focus: ClaimModalFocus::Findings,
            next_finding_id,
        }
    }

    /// Move the findings cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the findings cursor down.
    pub fn cursor_down(&mut self) {
        if !self.findings.is_empty() {
            self.cursor = (self.cursor + 1).min(self.findings.len() - 1);
        }
    }

    /// Accept the finding under the cursor. Returns its description for
    /// the status line.
    pub fn accept_current(&mut self) -> Option<String> {
        self.set_current_status(FindingStatus::Accepted)
    }

    /// Decline the finding under the cursor.
    pub fn decline_current(&mut self) -> Option<String> {
        self.set_current_status(FindingStatus::Declined)
    }

    fn set_current_status(&mut self, status: FindingStatus) -> Option<String> {
        let finding = self.findings.get_mut(self.cursor)?;
        finding.status = status;
        Some(finding.description.clone())
    }

    /// Open the add-finding picker.
    pub fn open_picker(&mut self) {
        self.focus = ClaimModalFocus::Picker { cursor: 0 };
    }

    /// Move the picker cursor.
    pub fn picker_move(&mut self, delta: i32) {
        if let ClaimModalFocus::Picker { cursor } = &mut self.focus {
            let len = FINDINGS_CATALOG.len() as i32;
            let next = (*cursor as i32 + delta).clamp(0, len - 1);
            *cursor = next as usize;
        }
    }

    /// Add the picked catalog entry as a pending finding and return to
    /// the findings list.
    pub fn picker_confirm(&mut self) -> Option<String> {
        let ClaimModalFocus::Picker { cursor } = self.focus else {
            return None;
        };
        let description = FINDINGS_CATALOG.get(cursor)?.to_string();
        let id = FindingId::new(format!("finding-{}", self.next_finding_id)).expect("generated id");
        self.next_finding_id += 1;
        self.findings.push(Finding::pending(id, description.clone()));
        self.cursor = self.findings.len() - 1;
        self.focus = ClaimModalFocus::Findings;
        Some(description)
    }

    /// Open the remarks editor for the finding under the cursor, seeded
    /// with its current remarks.
    pub fn open_remarks(&mut self) {
        if let Some(finding) = self.findings.get(self.cursor) {
            self.focus = ClaimModalFocus::Remarks {
                index: self.cursor,
                input: finding.remarks.clone().unwrap_or_default(),
            };
        }
    }

    /// Append a character to the remarks buffer.
    pub fn remarks_push(&mut self, ch: char) {
        if let ClaimModalFocus::Remarks { input, .. } = &mut self.focus {
            input.push(ch);
        }
    }

    /// Delete the last character of the remarks buffer.
    pub fn remarks_backspace(&mut self) {
        if let ClaimModalFocus::Remarks { input, .. } = &mut self.focus {
            input.pop();
        }
    }

    /// Save the remarks buffer onto its finding. Empty remarks clear.
    pub fn save_remarks(&mut self) {
        if let ClaimModalFocus::Remarks { index, input } = &self.focus {
            if let Some(finding) = self.findings.get_mut(*index) {
                finding.remarks = if input.is_empty() {
                    None
                } else {
                    Some(input.clone())
                };
            }
            self.focus = ClaimModalFocus::Findings;
        }
    }

    /// Leave the picker or remarks editor without applying; from the
    /// findings list there is nothing to cancel and the caller closes
    /// the modal instead. Returns true when something was cancelled.
    pub fn cancel_inner(&mut self) -> bool {
        match self.focus {
            ClaimModalFocus::Findings => false,
            _ => {
                self.focus = ClaimModalFocus::Findings;
                true
            }
        }
    }
}
