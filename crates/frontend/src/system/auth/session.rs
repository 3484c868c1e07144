use contracts::system::auth::UserInfo;

use super::{api, storage};

/// Authenticated session handed to pages that talk to the backend.
///
/// Pages receive it as a prop; there is no global auth context.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: UserInfo,
}

/// Restores a session from stored tokens, refreshing the access token once
/// if the backend rejects it. Returns `None` when the user must sign in.
pub async fn restore_session() -> Option<Session> {
    let access_token = storage::get_access_token()?;

    match api::get_current_user(&access_token).await {
        Ok(user) => return Some(Session { access_token, user }),
        Err(err) => log::warn!("Stored access token rejected: {}", err),
    }

    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return None;
    };

    let refreshed = match api::refresh_token(refresh_token).await {
        Ok(response) => response,
        Err(err) => {
            log::warn!("Token refresh failed: {}", err);
            storage::clear_tokens();
            return None;
        }
    };
    storage::save_access_token(&refreshed.access_token);

    match api::get_current_user(&refreshed.access_token).await {
        Ok(user) => Some(Session {
            access_token: refreshed.access_token,
            user,
        }),
        Err(err) => {
            log::error!("Failed to load user after refresh: {}", err);
            None
        }
    }
}
