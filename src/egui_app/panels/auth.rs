//! Login and registration form

use crate::egui_app::state::pending::Pending;
use crate::shared::error::ClientError;
use crate::shared::user::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    pub pending: Pending<Result<UserRecord, ClientError>>,
}

impl AuthForm {
    pub fn is_loading(&self) -> bool {
        self.pending.is_busy()
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.error = None;
        self.clear_secrets();
    }

    /// Checks only the register form knows about; the rest happen in the session manager
    pub fn check_register(&self) -> Result<(), ClientError> {
        if self.password != self.confirm_password {
            return Err(ClientError::validation(
                "confirm_password",
                "Passwords do not match",
            ));
        }
        Ok(())
    }

    pub fn clear_secrets(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }

    /// Reset after a successful login, keeping the email for next time
    pub fn finish(&mut self) {
        self.mode = AuthMode::Login;
        self.full_name.clear();
        self.error = None;
        self.clear_secrets();
    }
}
