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

//! Transport doubles for exercising the session without a server.

use crate::{Session, SessionConfig};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;
use sympa_soap::{SoapError, SoapFault, SympaSoap};

/// One recorded transport invocation, in the order the wire would see it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Login {
        email: String,
    },
    Run {
        service: String,
        parameters: Vec<Value>,
    },
    TrustedRun {
        app_name: String,
        app_password: String,
        vars: String,
        service: String,
        parameters: Vec<Value>,
    },
}

/// Records every invocation and replays a canned reply for dispatch calls.
/// Logins succeed with a cookie derived from the email, except for the email
/// `"bogus"` (server fault) and `"nonstring"` (malformed login reply).
pub(crate) struct SpyTransport {
    calls: Mutex<Vec<Call>>,
    reply: Mutex<Value>,
}

impl SpyTransport {
    pub(crate) fn new() -> Self {
        Self::replying(Value::Null)
    }

    pub(crate) fn replying(reply: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Mutex::new(reply),
        }
    }

    pub(crate) fn set_reply(&self, reply: Value) {
        *self.reply.lock().unwrap() = reply;
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the envelope-1 dispatches, skipping login exchanges.
    pub(crate) fn runs(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Run { .. }))
            .collect()
    }

    pub(crate) fn was_invoked(&self) -> bool {
        !self.calls.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl SympaSoap for SpyTransport {
    async fn login(&self, email: &str, _password: &str) -> Result<Value, SoapError> {
        self.calls.lock().unwrap().push(Call::Login {
            email: email.to_string(),
        });
        match email {
            "bogus" => Err(SoapError::Fault(SoapFault {
                code: "soap:Client".to_string(),
                message: "Authentication failed".to_string(),
                detail: None,
            })),
            "nonstring" => Ok(json!(42)),
            _ => Ok(json!(format!("cookie-{email}"))),
        }
    }

    async fn authenticate_and_run(
        &self,
        _email: &str,
        _cookie: &str,
        service: &str,
        parameters: &[Value],
    ) -> Result<Value, SoapError> {
        self.calls.lock().unwrap().push(Call::Run {
            service: service.to_string(),
            parameters: parameters.to_vec(),
        });
        Ok(self.reply.lock().unwrap().clone())
    }

    async fn authenticate_remote_app_and_run(
        &self,
        app_name: &str,
        app_password: &str,
        vars: &str,
        service: &str,
        parameters: &[Value],
    ) -> Result<Value, SoapError> {
        self.calls.lock().unwrap().push(Call::TrustedRun {
            app_name: app_name.to_string(),
            app_password: app_password.to_string(),
            vars: vars.to_string(),
            service: service.to_string(),
            parameters: parameters.to_vec(),
        });
        Ok(self.reply.lock().unwrap().clone())
    }
}

pub(crate) fn session(transport: SpyTransport) -> Session<SpyTransport> {
    Session::new(
        transport,
        SessionConfig::new("http://lists.example.org/sympasoap"),
    )
}

pub(crate) async fn logged_in() -> Session<SpyTransport> {
    let mut session = session(SpyTransport::new());
    session.login("user@example.org", "hunter2").await.unwrap();
    session
}
