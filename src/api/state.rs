//! Application state for the wage tracker API.
//!
//! This module defines the shared state available to all request handlers
//! and resolves the acting user of a request.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::models::User;
use crate::store::LedgerStore;

use super::response::ApiErrorResponse;

/// Header carrying the id of the user making the request.
pub const USER_HEADER: &str = "x-user-id";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn LedgerStore>,
    config: Arc<TrackerConfig>,
}

impl AppState {
    /// Creates application state around a store and configuration.
    pub fn new(store: Arc<dyn LedgerStore>, config: TrackerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns the ledger store.
    pub fn store(&self) -> &dyn LedgerStore {
        self.store.as_ref()
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Resolves the active user named by the `x-user-id` header.
    pub fn acting_user(&self, headers: &HeaderMap) -> Result<User, ApiErrorResponse> {
        let user_id = headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(ApiErrorResponse::missing_user)?;

        let user = self.store.get_user(user_id)?;
        if !user.active {
            return Err(TrackerError::InactiveUser { id: user.id }.into());
        }
        Ok(user)
    }

    /// Resolves the acting user and requires the admin role.
    pub fn acting_admin(&self, headers: &HeaderMap, action: &str) -> Result<User, ApiErrorResponse> {
        let user = self.acting_user(headers)?;
        if !user.is_admin() {
            return Err(TrackerError::Forbidden {
                user_id: user.id,
                action: action.to_string(),
            }
            .into());
        }
        Ok(user)
    }
}
