//! Modal State
//!
//! At most one modal is open; the edit modal carries the record being edited.
//! Every opening gets a fresh ticket so a request can only close the modal
//! it was submitted from.

use crate::config::Reconcile;
use crate::domain::FoodRecord;

/// Which modal a flow was started from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Add,
    Edit,
}

/// What is on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalView {
    #[default]
    Closed,
    AddOpen,
    /// Edit modal open on the selected record
    EditOpen(FoodRecord),
}

/// One opening of a modal. Taken at submit, handed back at settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTicket {
    pub kind: ModalKind,
    opening: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    view: ModalView,
    /// Bumped on every open
    opening: u32,
}

impl ModalState {
    pub fn view(&self) -> &ModalView {
        &self.view
    }

    pub fn open_add(&mut self) {
        self.open(ModalView::AddOpen);
    }

    /// Select a record and open the edit modal. No network call.
    pub fn select_for_edit(&mut self, record: FoodRecord) {
        self.open(ModalView::EditOpen(record));
    }

    fn open(&mut self, view: ModalView) {
        self.opening = self.opening.wrapping_add(1);
        self.view = view;
    }

    pub fn close(&mut self) {
        self.view = ModalView::Closed;
    }

    pub fn kind(&self) -> Option<ModalKind> {
        match self.view {
            ModalView::Closed => None,
            ModalView::AddOpen => Some(ModalKind::Add),
            ModalView::EditOpen(_) => Some(ModalKind::Edit),
        }
    }

    /// Ticket of the modal currently open
    pub fn ticket(&self) -> Option<ModalTicket> {
        self.kind().map(|kind| ModalTicket { kind, opening: self.opening })
    }

    /// The selected record, only while the edit modal is open
    pub fn editing(&self) -> Option<&FoodRecord> {
        match &self.view {
            ModalView::EditOpen(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.view != ModalView::Closed
    }

    pub fn is_add_open(&self) -> bool {
        matches!(self.view, ModalView::AddOpen)
    }

    pub fn is_edit_open(&self) -> bool {
        matches!(self.view, ModalView::EditOpen(_))
    }

    /// Close only if `ticket`'s opening is still the one on screen
    pub fn dismiss(&mut self, ticket: ModalTicket) {
        if self.ticket() == Some(ticket) {
            self.close();
        }
    }

    /// Called as the form submits, before the request resolves
    pub fn after_submit(&mut self, ticket: ModalTicket, policy: Reconcile) {
        if policy == Reconcile::Optimistic {
            self.dismiss(ticket);
        }
    }

    /// Called once the request resolved
    pub fn after_settle(&mut self, ticket: ModalTicket, policy: Reconcile, ok: bool) {
        if policy == Reconcile::Confirmed && ok {
            self.dismiss(ticket);
        }
    }
}
