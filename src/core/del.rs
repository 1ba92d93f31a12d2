use crate::models::LogId;
use crate::store::LogStore;
use crate::ui::messages::{info, success};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one log. Returns whether something was actually removed.
    pub fn apply(store: &mut dyn LogStore, id: &LogId) -> bool {
        let removed = store.delete(id);

        if removed {
            success(format!("Training session {} has been deleted.", id));
        } else {
            info(format!("No training session with id {}.", id));
        }
        removed
    }
}
