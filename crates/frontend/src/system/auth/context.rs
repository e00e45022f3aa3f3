use contracts::shared::api_error::ApiError;
use contracts::system::auth::AdminIdentity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Session identity of the admin using the app.
///
/// `Some` means signed in. The value is mirrored to local storage so a
/// reload keeps the user in; the backend cookie stays the real authority
/// and is re-checked with [`AuthContext::verify_session`].
#[derive(Clone, Copy)]
pub struct AuthContext {
    identity: RwSignal<Option<AdminIdentity>>,
}

impl AuthContext {
    /// Starts from the stored identity, if any.
    pub fn new() -> Self {
        Self {
            identity: RwSignal::new(storage::load_identity()),
        }
    }

    pub fn identity(&self) -> Option<AdminIdentity> {
        self.identity.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.with(|i| i.is_some())
    }

    pub fn login(&self, identity: AdminIdentity) {
        storage::save_identity(&identity);
        self.identity.set(Some(identity));
    }

    /// Forgets the identity locally without calling the backend.
    pub fn clear(&self) {
        storage::clear_identity();
        let _ = self.identity.try_set(None);
    }

    /// Clears the session on a 401. Returns whether it did.
    pub fn expire_on(&self, err: &ApiError) -> bool {
        if err.is_unauthorized() {
            log::warn!("session expired: {}", err);
            self.clear();
            true
        } else {
            false
        }
    }

    /// Asks the backend whether the cookie still belongs to an admin and
    /// signs out when it does not. Network failures keep the local identity.
    pub fn verify_session(&self) {
        if !self.identity.with_untracked(|i| i.is_some()) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            match api::test_session().await {
                Ok(check) => match check.valid_admin() {
                    Some(user) => {
                        log::debug!("session valid for {}", user.email);
                        this.login(user.clone());
                    }
                    None => {
                        log::info!("no admin session on the backend, signing out");
                        this.clear();
                    }
                },
                Err(err) => {
                    if !this.expire_on(&err) {
                        log::warn!("session check failed: {}", err);
                    }
                }
            }
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}

/// Logs out on the backend, then locally. The local identity is cleared even
/// when the backend call fails.
pub async fn do_logout(auth: AuthContext) {
    if let Err(e) = api::logout().await {
        log::warn!("logout request failed: {}", e);
    }
    auth.clear();
}
