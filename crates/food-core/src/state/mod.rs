//! View State
//!
//! The food list and the modal state. Both are plain owned values; the view
//! owns them and flows hand back mutations to apply.

mod list;
mod modal;

pub use list::{EntityList, FoodList, Mutation};
pub use modal::{ModalKind, ModalState, ModalTicket, ModalView};
