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

//! Session client for the Sympa SOAP API.
//!
//! [`Session`] owns the endpoint address, the protocol namespace, and — after
//! a successful [`Session::login`] — the session token. Every domain
//! operation (list enumeration, subscriber management, list lifecycle) is a
//! thin wrapper that funnels through one guarded dispatch path; server
//! responses come back as opaque `serde_json::Value`s that the client never
//! interprets.
//!
//! The SOAP transport itself is behind the [`sympa_soap::SympaSoap`] trait;
//! this crate supplies no concrete wire implementation.
//!
//! ```no_run
//! # use sympa_client::{Session, SessionConfig};
//! # async fn example<T: sympa_soap::SympaSoap>(transport: T) -> Result<(), sympa_client::ClientError> {
//! let mut session = Session::new(transport, SessionConfig::new("http://lists.example.org/sympasoap"));
//! session.login("me@example.org", "secret").await?;
//! let lists = session.lists("", "").await?;
//! # Ok(())
//! # }
//! ```

pub use catalog::CreateListOptions;
pub use session::{ClientError, DEFAULT_NAMESPACE, Session, SessionConfig};

mod catalog;
mod session;
#[cfg(test)]
mod testing;
