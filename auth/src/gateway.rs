//! Auth gateway: the only writer of the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, registration, profile, and password calls go through here. The
//! gateway persists the bearer token through [`TokenStore`] and publishes the
//! resulting [`Session`] through [`SessionStore`].
//!
//! INVARIANTS
//! ==========
//! - A session is published only after its token is in storage.
//! - A published session never outlives its token being replaced in storage.
//! - Token removal and session clearing happen in one synchronous step.
//! - No `RefCell` borrow is held across an await, and state is re-checked
//!   after each await because a logout may land while a request is in flight.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use crate::error::{AuthError, rejection};
use crate::forms::{LoginForm, PasswordChangeForm, ProfileForm, RegisterForm};
use crate::guard::{self, GuardDecision};
use crate::session::{Session, SessionStore, SubscriptionId};
use crate::storage::TokenStore;
use crate::transport::{ApiRequest, HttpTransport, endpoints};
use crate::types::{AuthResponse, LoginRequest, PasswordChange, RegisterRequest, Subscription, User, UserUpdate};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials and try again.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const PASSWORD_FAILED: &str = "Password change failed. Please try again.";
pub const PROFILE_UPDATE_FAILED: &str = "Profile update failed. Please try again.";
const PROFILE_FETCH_FAILED: &str = "Could not load your profile.";
const SUBSCRIPTION_FAILED: &str = "Could not load your subscription.";

pub struct AuthGateway<T, S> {
    transport: T,
    storage: S,
    session: SessionStore,
}

impl<T, S> AuthGateway<T, S>
where
    T: HttpTransport,
    S: TokenStore,
{
    /// Gateway with an empty session; call [`Self::restore_session`] once at
    /// startup to pick up a token left by a previous run.
    pub fn new(transport: T, storage: S) -> Self {
        Self {
            transport,
            storage,
            session: SessionStore::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read-only view of the session store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Guard decision for a protected navigation against the current snapshot.
    pub fn guard(&self) -> GuardDecision {
        guard::check(self.session.current().as_ref())
    }

    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(Option<&Session>) + 'static,
    {
        self.session.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.session.unsubscribe(id)
    }

    /// Exchange credentials for a token, persist it, and load the profile.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Authentication`] / [`AuthError::Remote`] when the server
    ///   refuses the credentials; the session is unchanged.
    /// - [`AuthError::Transport`] when the server cannot be reached; the
    ///   session is unchanged.
    /// - [`AuthError::Profile`] when the token was issued but the profile
    ///   could not be loaded; the new token is discarded and the session is
    ///   cleared.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, AuthError> {
        let request = ApiRequest::post(endpoints::TOKEN, credentials)?;
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::info!("login rejected with status {}", response.status);
            return Err(rejection(response.status, &response.body, LOGIN_FAILED));
        }
        let granted: AuthResponse = response.decode()?;
        self.storage.save(&granted.access_token)?;
        if self.session.token().is_some_and(|held| held != granted.access_token) {
            self.session.replace(None);
        }

        let user = match self.fetch_profile(&granted.access_token).await {
            Ok(user) => user,
            Err(err) => {
                log::warn!("profile fetch after login failed: {err}");
                if self.holds_token(&granted.access_token) {
                    self.drop_session();
                }
                return Err(AuthError::Profile(err.to_string()));
            }
        };

        if !self.holds_token(&granted.access_token) {
            return Err(AuthError::NotAuthenticated);
        }
        let session = Session {
            user,
            token: granted.access_token,
        };
        self.session.replace(Some(session.clone()));
        log::info!("signed in as {}", session.username());
        Ok(session)
    }

    /// Create an account. The session is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Remote`] with the server's reason (e.g. a taken
    /// username) or [`AuthError::Transport`] on network failure.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        let request = ApiRequest::post(endpoints::REGISTER, request)?;
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(rejection(response.status, &response.body, REGISTER_FAILED));
        }
        log::info!("account registered");
        Ok(())
    }

    /// Delete the stored token and clear the session. Always succeeds.
    pub fn logout(&self) {
        self.drop_session();
        log::info!("signed out");
    }

    /// Repopulate the session from a stored token. Called once at startup.
    ///
    /// A token the server rejects (401/403) is purged. Any other failure
    /// leaves the token in place for a later run and the session empty.
    pub async fn restore_session(&self) -> Option<Session> {
        let token = match self.storage.load() {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return None,
            Err(err) => {
                log::warn!("could not read stored token: {err}");
                return None;
            }
        };

        match self.fetch_profile(&token).await {
            Ok(user) => {
                if !self.holds_token(&token) {
                    return None;
                }
                let session = Session { user, token };
                self.session.replace(Some(session.clone()));
                log::info!("session restored for {}", session.username());
                Some(session)
            }
            Err(err) if err.is_rejection() => {
                log::info!("stored token rejected, discarding it");
                if self.holds_token(&token) {
                    self.drop_session();
                }
                None
            }
            Err(err) => {
                log::warn!("session restore failed: {err}");
                None
            }
        }
    }

    /// Change the signed-in user's password. The session is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session, otherwise
    /// the server's reason or a transport error.
    pub async fn update_password(&self, change: &PasswordChange) -> Result<(), AuthError> {
        let token = self.session.token().ok_or(AuthError::NotAuthenticated)?;
        let request = ApiRequest::put(endpoints::PASSWORD, change)?.bearer(&token);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(rejection(response.status, &response.body, PASSWORD_FAILED));
        }
        Ok(())
    }

    /// Update profile fields and refresh the cached user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session (or if the
    /// session ended while the request was in flight), otherwise the server's
    /// reason or a transport error.
    pub async fn update_profile(&self, update: &UserUpdate) -> Result<Session, AuthError> {
        let token = self.session.token().ok_or(AuthError::NotAuthenticated)?;
        let request = ApiRequest::put(endpoints::ME, update)?.bearer(&token);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(rejection(response.status, &response.body, PROFILE_UPDATE_FAILED));
        }
        let user: User = response.decode()?;
        if self.session.token().as_deref() != Some(token.as_str()) {
            return Err(AuthError::NotAuthenticated);
        }
        let session = Session { user, token };
        self.session.replace(Some(session.clone()));
        Ok(session)
    }

    /// Active subscription of the signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session, otherwise
    /// the server's reason or a transport error.
    pub async fn subscription(&self) -> Result<Option<Subscription>, AuthError> {
        let token = self.session.token().ok_or(AuthError::NotAuthenticated)?;
        let request = ApiRequest::get(endpoints::SUBSCRIPTION).bearer(&token);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(rejection(response.status, &response.body, SUBSCRIPTION_FAILED));
        }
        Ok(response.decode()?)
    }

    /// Validate `form` and log in. Nothing is sent if validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] for invalid input, otherwise as
    /// [`Self::login`].
    pub async fn submit_login(&self, form: &LoginForm) -> Result<Session, AuthError> {
        let credentials = form.validate().map_err(AuthError::Validation)?;
        self.login(&credentials).await
    }

    /// Validate `form` and register. Nothing is sent if validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] for invalid input, otherwise as
    /// [`Self::register`].
    pub async fn submit_registration(&self, form: &RegisterForm) -> Result<(), AuthError> {
        let request = form.validate().map_err(AuthError::Validation)?;
        self.register(&request).await
    }

    /// Validate `form` and change the password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] for invalid input, otherwise as
    /// [`Self::update_password`].
    pub async fn submit_password_change(&self, form: &PasswordChangeForm) -> Result<(), AuthError> {
        let change = form.validate().map_err(AuthError::Validation)?;
        self.update_password(&change).await
    }

    /// Validate `form` and update the profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] for invalid input, otherwise as
    /// [`Self::update_profile`].
    pub async fn submit_profile(&self, form: &ProfileForm) -> Result<Session, AuthError> {
        let update = form.validate().map_err(AuthError::Validation)?;
        self.update_profile(&update).await
    }

    async fn fetch_profile(&self, token: &str) -> Result<User, AuthError> {
        let request = ApiRequest::get(endpoints::ME).bearer(token);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(rejection(response.status, &response.body, PROFILE_FETCH_FAILED));
        }
        Ok(response.decode()?)
    }

    fn holds_token(&self, token: &str) -> bool {
        matches!(self.storage.load(), Ok(Some(stored)) if stored == token)
    }

    fn drop_session(&self) {
        if let Err(err) = self.storage.clear() {
            log::warn!("could not remove stored token: {err}");
        }
        self.session.replace(None);
    }
}
