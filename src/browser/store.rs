use super::js_error_message;
use crate::error::StoreError;
use crate::traits::KeyValueStore;

/// localStorage-backed store for the current origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .ok_or_else(|| StoreError("localStorage unavailable".to_string()))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StoreError(js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StoreError(js_error_message(&err)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        local_storage()?
            .remove_item(key)
            .map_err(|err| StoreError(js_error_message(&err)))
    }
}
