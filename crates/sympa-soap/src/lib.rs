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

//! Shared protocol entities for talking to a Sympa mailing-list server over
//! its SOAP RPC interface.
//!
//! The wire protocol itself (envelope framing, XML serialization, fault
//! decoding) is not implemented here; it belongs to whatever implements
//! [`SympaSoap`]. This crate only fixes the seam: the three remote operations
//! the server exposes, the session token its `login` call returns, and the
//! error surface a transport can produce.

pub use errors::{SoapError, SoapFault};
pub use service::{AUTHENTICATE_AND_RUN, AUTHENTICATE_REMOTE_APP_AND_RUN, LOGIN, SympaSoap};
pub use tokens::SessionToken;

mod errors;
mod service;
mod tokens;
