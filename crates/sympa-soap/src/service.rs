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

use crate::errors::SoapError;
use async_trait::async_trait;
use serde_json::Value;

/// Remote operation name for the login exchange.
pub const LOGIN: &str = "login";

/// Remote operation name for user-authenticated dispatch.
pub const AUTHENTICATE_AND_RUN: &str = "authenticateAndRun";

/// Remote operation name for trusted-application dispatch.
pub const AUTHENTICATE_REMOTE_APP_AND_RUN: &str = "authenticateRemoteAppAndRun";

/// The RPC transport boundary: a callable bound to an endpoint address and
/// protocol namespace, exposing the three remote operations the server
/// registers.
///
/// Implementations own message framing, serialization, and fault decoding.
/// Callers get decoded results back as opaque [`Value`]s and remote-side
/// errors as [`SoapError::Fault`]. Every method is one blocking round trip to
/// the server; there is no retry, no background task, and no timeout policy
/// at this layer.
#[async_trait]
pub trait SympaSoap {
    /// `login(email, password)` — exchanges credentials for a session cookie.
    async fn login(&self, email: &str, password: &str) -> Result<Value, SoapError>;

    /// `authenticateAndRun(email, cookie, service, parameters)` — runs the
    /// named service as a logged-in user.
    async fn authenticate_and_run(
        &self,
        email: &str,
        cookie: &str,
        service: &str,
        parameters: &[Value],
    ) -> Result<Value, SoapError>;

    /// `authenticateRemoteAppAndRun(appname, apppassword, vars, service,
    /// parameters)` — runs the named service through a pre-registered trusted
    /// application, acting on behalf of the identity carried in `vars` (e.g.
    /// `USER_EMAIL=someone@example.org`).
    async fn authenticate_remote_app_and_run(
        &self,
        app_name: &str,
        app_password: &str,
        vars: &str,
        service: &str,
        parameters: &[Value],
    ) -> Result<Value, SoapError>;
}
