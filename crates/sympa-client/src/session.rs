// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Session state and the guarded dispatch path every domain operation
//! funnels through.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sympa_soap::{SessionToken, SoapError, SympaSoap};
use thiserror::Error;
use tracing::debug;

/// Default protocol namespace for Sympa's SOAP interface.
pub const DEFAULT_NAMESPACE: &str = "urn:sympasoap";

/// Client-local failures, raised synchronously before any network activity.
/// Remote faults pass through as [`ClientError::Soap`] without wrapping or
/// inspection.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A gated operation was invoked before a successful `login`.
    #[error("must login first")]
    NotAuthenticated,
    /// Missing or malformed argument, detected before dispatch.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Soap(#[from] SoapError),
}

/// Construction parameters for a [`Session`]. All three fields are fixed for
/// the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Address of the remote SOAP service.
    pub endpoint: String,
    /// Protocol namespace.
    pub namespace: String,
    /// Whether remote-application authentication mode is enabled.
    pub trusted: bool,
}

impl SessionConfig {
    /// Configuration for `endpoint` with the default namespace and trust
    /// disabled. Structured URI values are coerced through their string form.
    pub fn new(endpoint: impl ToString) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            trusted: false,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }
}

/// One session against one Sympa server.
///
/// Construction performs no network call; [`Session::login`] must succeed
/// before any gated operation. `login` may be called again at any time to
/// re-authenticate or switch identity, overwriting the stored identity and
/// token. There is no teardown; drop the session when done.
///
/// Not safe for concurrent `login` calls (identity and token are mutated in
/// place); read-only dispatch after a stable login is as reentrant as the
/// underlying transport.
pub struct Session<T> {
    config: SessionConfig,
    transport: T,
    identity: Option<String>,
    token: Option<SessionToken>,
}

impl<T> Session<T> {
    pub fn new(transport: T, config: SessionConfig) -> Self {
        Self {
            config,
            transport,
            identity: None,
            token: None,
        }
    }

    /// Address of the remote SOAP service.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Protocol namespace.
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// Whether remote-application authentication mode is enabled.
    pub fn trusted(&self) -> bool {
        self.config.trusted
    }

    /// The identity used by the last successful `login`, if any.
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// The session cookie from the last successful `login`, if any.
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: SympaSoap> Session<T> {
    /// Authenticate with the server. On success the returned token is also
    /// stored on the session, gating all subsequent catalog operations. A
    /// failed login propagates the remote fault and leaves any previously
    /// stored identity and token untouched.
    pub async fn login(
        &mut self,
        identity: &str,
        secret: &str,
    ) -> Result<SessionToken, ClientError> {
        require_nonempty("identity", identity)?;
        require_nonempty("secret", secret)?;

        let reply = self.transport.login(identity, secret).await?;
        let Value::String(cookie) = reply else {
            return Err(SoapError::CouldNotDecode(format!(
                "expected session cookie string from login, got {reply}"
            ))
            .into());
        };

        debug!(identity, "logged in");
        let token = SessionToken(cookie);
        self.identity = Some(identity.to_string());
        self.token = Some(token.clone());
        Ok(token)
    }

    /// Envelope 1: user-authenticated dispatch. Requires a prior successful
    /// `login`; checked before any network attempt.
    pub(crate) async fn authenticated_call(
        &self,
        service: &str,
        parameters: Vec<Value>,
    ) -> Result<Value, ClientError> {
        let (Some(identity), Some(token)) = (&self.identity, &self.token) else {
            return Err(ClientError::NotAuthenticated);
        };

        debug!(service, "dispatching authenticated call");
        let reply = self
            .transport
            .authenticate_and_run(identity, token.as_str(), service, &parameters)
            .await?;
        Ok(reply)
    }

    /// Envelope 2: trusted-application dispatch. Independent of session login
    /// state; the application's own credentials substitute for a user token.
    pub(crate) async fn trusted_call(
        &self,
        app_name: &str,
        app_secret: &str,
        vars: &str,
        service: &str,
        parameters: Vec<Value>,
    ) -> Result<Value, ClientError> {
        debug!(service, app_name, "dispatching trusted-application call");
        let reply = self
            .transport
            .authenticate_remote_app_and_run(app_name, app_secret, vars, service, &parameters)
            .await?;
        Ok(reply)
    }
}

/// Arity contract for required string arguments; raised before dispatch.
pub(crate) fn require_nonempty(name: &str, value: &str) -> Result<(), ClientError> {
    if value.is_empty() {
        return Err(ClientError::InvalidArgument(format!(
            "{name} must not be empty"
        )));
    }
    Ok(())
}
