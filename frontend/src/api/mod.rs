//! REST client for The Forge API.
//!
//! `ForgeApi` wraps `gloo_net` requests against the configured base URL and
//! attaches the bearer token from its injected `CredentialProvider`. A 401 on
//! an authenticated call hands control back to the provider through
//! `handle_unauthenticated`.
//!
//! Components receive the client as an [`ApiHandle`] property so it can be
//! shared cheaply and compared by identity.

mod credentials;

use std::ops::Deref;
use std::rc::Rc;

use forge_common::auth::CredentialProvider;
use forge_common::failure::FailureReport;
use forge_common::model::config::ClientConfig;
use forge_common::model::machine::Machine;
use forge_common::model::schema::MachineUsageSchema;
use forge_common::model::status::MachineStatusResponse;
use forge_common::outcome::SubmitOutcome;
use forge_common::requests::{ErrorDetail, LoginResponse, MachineUsageRequest};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::FormData;

pub use credentials::LocalStorageCredentials;

/// Path the host server publishes the client configuration under.
pub const CONFIG_PATH: &str = "/forge-config.json";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("Your session has expired. Please log in again.")]
    Unauthenticated,
    #[error("The server answered {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("Unexpected data from the server: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|detail| format!(": {detail}")).unwrap_or_default()
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

pub struct ForgeApi {
    config: ClientConfig,
    credentials: Rc<dyn CredentialProvider>,
}

impl ForgeApi {
    pub fn new(config: ClientConfig, credentials: Rc<dyn CredentialProvider>) -> Self {
        Self { config, credentials }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_logged_in(&self) -> bool {
        self.credentials.current_token().is_some()
    }

    pub fn logout(&self) {
        self.credentials.handle_unauthenticated();
    }

    /// Fetches the client configuration from the host server, falling back to
    /// the defaults when it is unavailable.
    pub async fn load_config() -> ClientConfig {
        match Request::get(CONFIG_PATH).send().await {
            Ok(response) if response.ok() => match response.json::<ClientConfig>().await {
                Ok(config) => config,
                Err(err) => {
                    gloo_console::error!(format!("invalid client configuration: {}", err));
                    ClientConfig::default()
                }
            },
            _ => {
                gloo_console::log!("no client configuration served, using defaults");
                ClientConfig::default()
            }
        }
    }

    pub async fn machines(&self) -> Result<Vec<Machine>, ApiError> {
        self.get_json("machines?limit=200", true).await
    }

    pub async fn usage_schema(&self, machine_id: &str) -> Result<MachineUsageSchema, ApiError> {
        self.get_json(&format!("use/{}/schema", machine_id), true).await
    }

    pub async fn machine_status(&self) -> Result<MachineStatusResponse, ApiError> {
        self.get_json("machinestatus", false).await
    }

    /// Logs a usage. Every response, including transport failures, is turned
    /// into a [`SubmitOutcome`].
    pub async fn use_machine(&self, machine_id: &str, request: &MachineUsageRequest) -> SubmitOutcome {
        let builder = self.authorized(Request::post(&self.config.endpoint(&format!("use/{}", machine_id))));
        let request = match builder.json(request) {
            Ok(request) => request,
            Err(err) => return SubmitOutcome::transport_error(err.to_string()),
        };

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if status == 401 {
                    self.credentials.handle_unauthenticated();
                }
                let body = response.text().await.unwrap_or_default();
                SubmitOutcome::from_response(status, &body)
            }
            Err(err) => SubmitOutcome::transport_error(err.to_string()),
        }
    }

    pub async fn fail_machine(&self, machine_id: &str, report: &FailureReport) -> Result<(), ApiError> {
        let request = self
            .authorized(Request::post(&self.config.endpoint(&format!("fail/{}", machine_id))))
            .json(report)?;
        self.check(request.send().await?, true).await.map(|_| ())
    }

    pub async fn clear_machine(&self, machine_id: &str) -> Result<(), ApiError> {
        let response = self
            .authorized(Request::post(&self.config.endpoint(&format!("clear/{}", machine_id))))
            .send()
            .await?;
        self.check(response, true).await.map(|_| ())
    }

    /// Exchanges a username and password for a token and hands it to the
    /// credential provider.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let form = FormData::new().map_err(|_| ApiError::Network("form data unavailable".to_string()))?;
        form.append_with_str("username", username)
            .and_then(|_| form.append_with_str("password", password))
            .map_err(|_| ApiError::Network("form data unavailable".to_string()))?;

        let response = Request::post(&self.config.endpoint("login"))
            .body(form)?
            .send()
            .await?;
        let response = self.check(response, false).await?;
        let login: LoginResponse = response.json().await?;
        self.credentials.store_token(&login.access_token, login.expires_at);
        Ok(())
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.credentials.authorization_header() {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, authenticated: bool) -> Result<T, ApiError> {
        let mut builder = Request::get(&self.config.endpoint(path)).header("Content-Type", "application/json");
        if authenticated {
            builder = self.authorized(builder);
        }
        let response = self.check(builder.send().await?, authenticated).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check(&self, response: Response, authenticated: bool) -> Result<Response, ApiError> {
        match response.status() {
            200..=299 => Ok(response),
            401 if authenticated => {
                self.credentials.handle_unauthenticated();
                Err(ApiError::Unauthenticated)
            }
            status => {
                let detail = response.json::<ErrorDetail>().await.ok().map(|error| error.detail);
                Err(ApiError::Status { status, detail })
            }
        }
    }
}

/// Shared, identity-compared handle to the API client for component props.
#[derive(Clone)]
pub struct ApiHandle(Rc<ForgeApi>);

impl ApiHandle {
    pub fn new(api: ForgeApi) -> Self {
        Self(Rc::new(api))
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ApiHandle {
    type Target = ForgeApi;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_include_the_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("One or more required resource slots not populated".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "The server answered 400: One or more required resource slots not populated"
        );
        let bare = ApiError::Status { status: 500, detail: None };
        assert_eq!(bare.to_string(), "The server answered 500");
    }
}
