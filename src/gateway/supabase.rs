//! REST client for the hosted persistence backend.
//!
//! The backend exposes its tables over a PostgREST-style API: rows live
//! under `rest/v1/<table>`, filters are query parameters (`id=eq.5`,
//! `order=id.desc`), and every call must carry the project key both as an
//! `apikey` header and as a bearer token.
//!
//! A gateway built without credentials still exists and answers every call
//! with [`GatewayError::Unconfigured`]; request execution works without
//! persistence, it just records nothing.

use super::{GatewayError, PersistenceGateway};
use crate::config::AppConfig;
use crate::history::{HistoryEntry, NewHistoryEntry};
use crate::models::Instrument;
use log::warn;
use url::Url;

/// Table holding one row per attempted request.
const HISTORY_TABLE: &str = "api_history";

/// Table of domain records shown in the side list.
const INSTRUMENTS_TABLE: &str = "instruments";

#[derive(Debug, Clone)]
struct Credentials {
    base: Url,
    anon_key: String,
}

/// Gateway speaking the hosted backend's REST dialect.
pub struct SupabaseGateway {
    client: reqwest::Client,
    credentials: Option<Credentials>,
}

impl SupabaseGateway {
    /// Builds a gateway from the application configuration.
    ///
    /// Missing or unparseable configuration degrades to an unconfigured
    /// gateway with a warning; it never fails construction, so the rest of
    /// the application keeps working without persistence.
    pub fn from_config(config: &AppConfig) -> Self {
        match (
            config.supabase_url.as_deref(),
            config.supabase_anon_key.as_deref(),
        ) {
            (Some(url), Some(key)) => match Self::with_credentials(url, key) {
                Ok(gateway) => gateway,
                Err(err) => {
                    warn!("ignoring persistence endpoint: {}", err);
                    Self::unconfigured()
                }
            },
            _ => Self::unconfigured(),
        }
    }

    /// Builds a gateway for an explicit endpoint and key.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidEndpoint` when the URL does not parse.
    pub fn with_credentials(url: &str, anon_key: &str) -> Result<Self, GatewayError> {
        let base = Url::parse(url)?;
        Ok(Self {
            client: reqwest::Client::new(),
            credentials: Some(Credentials {
                base,
                anon_key: anon_key.to_string(),
            }),
        })
    }

    /// A gateway with no backend; every operation returns `Unconfigured`.
    pub fn unconfigured() -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials: None,
        }
    }

    /// Whether this gateway has an endpoint to talk to.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn credentials(&self) -> Result<&Credentials, GatewayError> {
        self.credentials.as_ref().ok_or(GatewayError::Unconfigured)
    }

    fn table_url(credentials: &Credentials, table: &str) -> Result<Url, GatewayError> {
        Ok(credentials.base.join(&format!("rest/v1/{}", table))?)
    }

    fn authed(
        &self,
        builder: reqwest::RequestBuilder,
        credentials: &Credentials,
    ) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &credentials.anon_key)
            .bearer_auth(&credentials.anon_key)
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl PersistenceGateway for SupabaseGateway {
    async fn list_history(&self) -> Result<Vec<HistoryEntry>, GatewayError> {
        let credentials = self.credentials()?;
        let url = Self::table_url(credentials, HISTORY_TABLE)?;

        let response = self
            .authed(self.client.get(url), credentials)
            .query(&[("select", "*"), ("order", "id.desc")])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        response
            .json::<Vec<HistoryEntry>>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn insert_history(&self, entry: &NewHistoryEntry) -> Result<(), GatewayError> {
        let credentials = self.credentials()?;
        let url = Self::table_url(credentials, HISTORY_TABLE)?;

        let response = self
            .authed(self.client.post(url), credentials)
            .header("Prefer", "return=minimal")
            .json(entry)
            .send()
            .await?;
        Self::ensure_success(response).await?;

        Ok(())
    }

    async fn delete_history(&self, id: i64) -> Result<(), GatewayError> {
        let credentials = self.credentials()?;
        let url = Self::table_url(credentials, HISTORY_TABLE)?;

        let response = self
            .authed(self.client.delete(url), credentials)
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;
        Self::ensure_success(response).await?;

        Ok(())
    }

    async fn list_instruments(&self) -> Result<Vec<Instrument>, GatewayError> {
        let credentials = self.credentials()?;
        let url = Self::table_url(credentials, INSTRUMENTS_TABLE)?;

        let response = self
            .authed(self.client.get(url), credentials)
            .query(&[("select", "*")])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        response
            .json::<Vec<Instrument>>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}
