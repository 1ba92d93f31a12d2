use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::success;

pub struct ClearLogic;

impl ClearLogic {
    pub fn apply(store: &mut dyn LogStore) -> AppResult<usize> {
        let count = store.list().len();
        store.clear_all()?;
        success(format!("Deleted {} training session(s).", count));
        Ok(count)
    }
}
