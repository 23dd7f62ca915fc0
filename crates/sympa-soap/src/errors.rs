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

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// A fault raised by the remote server, decoded by the transport and surfaced
/// verbatim. The client layer never inspects or translates fault contents;
/// distinguishing "unknown list" from "authentication failed" is the caller's
/// business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoapFault {
    /// The server's fault code, e.g. `soap:Client`.
    pub code: String,
    /// Human-readable fault string.
    pub message: String,
    /// Optional fault detail payload, left undecoded.
    pub detail: Option<Value>,
}

impl fmt::Display for SoapFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Errors at the SOAP transport layer.
#[derive(Debug, Error)]
pub enum SoapError {
    #[error("could not send SOAP request: {0}")]
    CouldNotSend(String),
    #[error("could not receive SOAP response: {0}")]
    CouldNotReceive(String),
    #[error("could not decode SOAP response: {0}")]
    CouldNotDecode(String),
    #[error("server fault: {0}")]
    Fault(SoapFault),
}
