use contracts::system::auth::SessionStore;
use web_sys::window;

/// Optional TOML document overriding the embedded settings
const SETTINGS_KEY: &str = "realEstateSettings";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Log a failed localStorage write; true when the write went through
fn checked<E>(result: Result<(), E>, action: &str, key: &str) -> bool {
    if result.is_err() {
        log::warn!("localStorage could not {} key '{}'", action, key);
    }
    result.is_ok()
}

/// Browser localStorage as a session store
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            checked(storage.set_item(key, value), "store", key);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = get_local_storage() {
            checked(storage.remove_item(key), "remove", key);
        }
    }
}

/// Settings overrides saved by hand in localStorage, if any
pub fn get_settings_override() -> Option<String> {
    LocalStorageStore.get(SETTINGS_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_writes_are_reported() {
        assert!(checked(Ok::<(), ()>(()), "remove", "realEstateSession"));
        assert!(!checked(Err(()), "remove", "realEstateSession"));
        assert!(!checked(Err("quota exceeded"), "store", "realEstateSession"));
    }
}
