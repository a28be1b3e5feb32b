//! Food Flows
//!
//! Each flow makes one request and hands back the mutation the caller
//! applies to its food list. Errors are logged here and never returned.

use crate::config::Reconcile;
use crate::domain::{FoodDraft, FoodId, FoodPatch, FoodRecord, NewFood};
use crate::service::FoodService;
use crate::state::{ModalState, ModalTicket, Mutation};

/// Result of an add/edit/delete flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub mutation: Mutation<FoodRecord>,
    /// Whether the server accepted the request
    pub ok: bool,
}

impl Settled {
    fn failed(mutation: Mutation<FoodRecord>) -> Self {
        Self { mutation, ok: false }
    }

    fn succeeded(mutation: Mutation<FoodRecord>) -> Self {
        Self { mutation, ok: true }
    }

    /// Settle the modal the flow was submitted from and hand back the
    /// mutation for the food list
    pub fn settle(
        self,
        ticket: ModalTicket,
        policy: Reconcile,
        modal: &mut ModalState,
    ) -> Mutation<FoodRecord> {
        modal.after_settle(ticket, policy, self.ok);
        self.mutation
    }
}

#[derive(Debug, Clone)]
pub struct FoodFlows<S> {
    service: S,
    policy: Reconcile,
}

impl<S: FoodService> FoodFlows<S> {
    pub fn new(service: S, policy: Reconcile) -> Self {
        Self { service, policy }
    }

    pub fn policy(&self) -> Reconcile {
        self.policy
    }

    /// Initial fetch. Yields `Load` on success.
    pub async fn load(&self) -> Mutation<FoodRecord> {
        match self.service.list().await {
            Ok(foods) => {
                log::info!("[FLOW] Loaded {} foods", foods.len());
                Mutation::Load(foods)
            }
            Err(e) => {
                log::error!("[FLOW] Loading foods failed: {}", e);
                Mutation::Nothing
            }
        }
    }

    /// Create with `available: true`; appends the server's record.
    pub async fn add(&self, draft: FoodDraft) -> Settled {
        let body = NewFood::from(draft);
        match self.service.create(&body).await {
            Ok(created) => {
                log::info!("[FLOW] Added food {} ({})", created.id, created.name);
                Settled::succeeded(Mutation::Append(created))
            }
            Err(e) => {
                log::error!("[FLOW] Adding food {:?} failed: {}", body.name, e);
                Settled::failed(Mutation::Nothing)
            }
        }
    }

    /// Merge `patch` over `selected` and update by `selected.id`.
    /// The server's record replaces the local one with the same ID.
    pub async fn update(&self, selected: &FoodRecord, patch: FoodPatch) -> Settled {
        let merged = patch.apply_to(selected);
        match self.service.update(&merged).await {
            Ok(updated) => {
                log::info!("[FLOW] Updated food {}", updated.id);
                Settled::succeeded(Mutation::Replace(updated))
            }
            Err(e) => {
                log::error!("[FLOW] Updating food {} failed: {}", selected.id, e);
                Settled::failed(Mutation::Nothing)
            }
        }
    }

    /// Delete by ID. Optimistic removal ignores the server's answer.
    pub async fn delete(&self, id: FoodId) -> Settled {
        match self.service.delete(id).await {
            Ok(()) => {
                log::info!("[FLOW] Deleted food {}", id);
                Settled::succeeded(Mutation::Remove(id))
            }
            Err(e) => {
                log::error!("[FLOW] Deleting food {} failed: {}", id, e);
                match self.policy {
                    Reconcile::Optimistic => Settled::failed(Mutation::Remove(id)),
                    Reconcile::Confirmed => Settled::failed(Mutation::Nothing),
                }
            }
        }
    }
}
