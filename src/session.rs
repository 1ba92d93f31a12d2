//! Who is calling the store. Sign-in itself happens elsewhere; the store only
//! needs the resulting user id, or its absence.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    /// Blank or whitespace-only ids count as signed out.
    pub fn new(user_id: Option<String>) -> Self {
        let user_id = user_id
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        Self { user_id }
    }

    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self::new(Some(user_id.into()))
    }

    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn require_user(&self) -> AppResult<&str> {
        self.user_id().ok_or(AppError::Unauthenticated)
    }
}
