//! Session tokens persisted in `localStorage` by the sign-in page.

use web_sys::Storage;

#[derive(Debug, Clone, Copy)]
enum TokenSlot {
    Access,
    Refresh,
}

impl TokenSlot {
    const ALL: [TokenSlot; 2] = [TokenSlot::Access, TokenSlot::Refresh];

    fn key(self) -> &'static str {
        match self {
            TokenSlot::Access => "auth_access_token",
            TokenSlot::Refresh => "auth_refresh_token",
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read(slot: TokenSlot) -> Option<String> {
    local_storage()?
        .get_item(slot.key())
        .ok()?
        .filter(|token| !token.is_empty())
}

pub fn get_access_token() -> Option<String> {
    read(TokenSlot::Access)
}

pub fn get_refresh_token() -> Option<String> {
    read(TokenSlot::Refresh)
}

/// Replaces the access token after a refresh.
pub fn save_access_token(token: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(TokenSlot::Access.key(), token).is_err() {
        log::warn!("Could not persist refreshed access token");
    }
}

/// Forget both tokens after the backend rejected them.
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        for slot in TokenSlot::ALL {
            let _ = storage.remove_item(slot.key());
        }
    }
}
