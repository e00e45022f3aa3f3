//! The signed-in admin identity in `localStorage`. Nothing else survives a
//! reload.

use contracts::system::auth::AdminIdentity;
use web_sys::window;

const IDENTITY_KEY: &str = "shop_admin_identity";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_identity(identity: &AdminIdentity) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(identity) {
        Ok(json) => {
            let _ = storage.set_item(IDENTITY_KEY, &json);
        }
        Err(e) => log::error!("failed to store identity: {}", e),
    }
}

/// Stored identity, `None` when absent or unreadable.
pub fn load_identity() -> Option<AdminIdentity> {
    let raw = get_local_storage()?.get_item(IDENTITY_KEY).ok()??;
    match serde_json::from_str::<AdminIdentity>(&raw) {
        Ok(identity) if !identity.id.is_empty() => Some(identity),
        Ok(_) => None,
        Err(e) => {
            log::warn!("discarding stored identity: {}", e);
            clear_identity();
            None
        }
    }
}

pub fn clear_identity() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(IDENTITY_KEY);
    }
}
