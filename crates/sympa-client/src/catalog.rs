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

//! The domain operation catalog: every method is a thin wrapper that checks
//! its local preconditions, builds the positional argument list in wire
//! order, and forwards through one of the session's dispatch envelopes.
//! Responses are returned opaquely; all domain semantics live on the server.

use crate::session::{ClientError, Session, require_nonempty};
use serde_json::{Value, json};
use sympa_soap::SympaSoap;

/// Role names the server accepts for `amI`.
const LIST_ROLES: [&str; 2] = ["editor", "owner"];

/// Options for [`Session::create_list`] beyond the required name and subject.
/// The defaults mirror the server's conventional values.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateListOptions {
    pub template: String,
    pub description: String,
    pub topics: String,
}

impl Default for CreateListOptions {
    fn default() -> Self {
        Self {
            template: "discussion_list".to_string(),
            description: " ".to_string(),
            topics: " ".to_string(),
        }
    }
}

impl<T: SympaSoap> Session<T> {
    /// Available mailing lists filtered by `topic` and `sub_topic`. Empty
    /// strings mean no filter; an unmatched topic yields an empty result,
    /// not an error.
    pub async fn lists(&self, topic: &str, sub_topic: &str) -> Result<Value, ClientError> {
        self.authenticated_call("lists", vec![json!(topic), json!(sub_topic)])
            .await
    }

    /// Same family as [`lists`](Self::lists), but the server returns
    /// structured records instead of bare names.
    pub async fn complex_lists(&self, topic: &str, sub_topic: &str) -> Result<Value, ClientError> {
        self.authenticated_call("complexLists", vec![json!(topic), json!(sub_topic)])
            .await
    }

    /// Structured record describing one list.
    pub async fn info(&self, list_name: &str) -> Result<Value, ClientError> {
        require_nonempty("list_name", list_name)?;
        self.authenticated_call("info", vec![json!(list_name)]).await
    }

    /// Subscriber identities of a list. An empty list comes back as the
    /// server's single-element sentinel `["no_subscribers"]`, passed through
    /// untouched.
    pub async fn review(&self, list_name: &str) -> Result<Value, ClientError> {
        require_nonempty("list_name", list_name)?;
        self.authenticated_call("review", vec![json!(list_name)])
            .await
    }

    /// Lists `user` belongs to, acting through a trusted application. `user`
    /// carries the proxy variable assignment from the server's trusted
    /// application configuration, e.g. `USER_EMAIL=someone@example.org`.
    /// Does not require a prior `login`.
    pub async fn which(
        &self,
        user: &str,
        app_name: &str,
        app_secret: &str,
    ) -> Result<Value, ClientError> {
        self.trusted_call(app_name, app_secret, user, "which", vec![json!("")])
            .await
    }

    /// Structured variant of [`which`](Self::which).
    pub async fn complex_which(
        &self,
        user: &str,
        app_name: &str,
        app_secret: &str,
    ) -> Result<Value, ClientError> {
        self.trusted_call(app_name, app_secret, user, "complexWhich", vec![json!("")])
            .await
    }

    /// Whether `user` holds `role` on the list. `role` must be `editor` or
    /// `owner`; anything else is rejected before dispatch.
    pub async fn am_i(
        &self,
        user: &str,
        list_name: &str,
        role: &str,
    ) -> Result<Value, ClientError> {
        if !LIST_ROLES.contains(&role) {
            return Err(ClientError::InvalidArgument(format!(
                "invalid role name {role:?}, expected one of {LIST_ROLES:?}"
            )));
        }
        require_nonempty("list_name", list_name)?;
        require_nonempty("user", user)?;
        self.authenticated_call("amI", vec![json!(list_name), json!(role), json!(user)])
            .await
    }

    /// Adds `email` to the list with display name `name` (gecos). `quiet`
    /// suppresses the server's notification mail to the added member.
    pub async fn add(
        &self,
        email: &str,
        list_name: &str,
        name: &str,
        quiet: bool,
    ) -> Result<Value, ClientError> {
        require_nonempty("email", email)?;
        require_nonempty("list_name", list_name)?;
        self.authenticated_call(
            "add",
            vec![json!(list_name), json!(email), json!(name), json!(quiet)],
        )
        .await
    }

    /// Removes `email` from the list. `quiet` suppresses the notification
    /// mail.
    pub async fn del(
        &self,
        email: &str,
        list_name: &str,
        quiet: bool,
    ) -> Result<Value, ClientError> {
        require_nonempty("email", email)?;
        require_nonempty("list_name", list_name)?;
        self.authenticated_call("del", vec![json!(list_name), json!(email), json!(quiet)])
            .await
    }

    /// Alias for [`del`](Self::del).
    pub async fn delete(
        &self,
        email: &str,
        list_name: &str,
        quiet: bool,
    ) -> Result<Value, ClientError> {
        self.del(email, list_name, quiet).await
    }

    /// Subscribes the currently authenticated identity to the list. The
    /// display name defaults to that identity when `name` is `None`.
    pub async fn subscribe(
        &self,
        list_name: &str,
        name: Option<&str>,
    ) -> Result<Value, ClientError> {
        require_nonempty("list_name", list_name)?;
        let gecos = match name {
            Some(name) => name,
            None => self.identity().ok_or(ClientError::NotAuthenticated)?,
        };
        self.authenticated_call("subscribe", vec![json!(list_name), json!(gecos)])
            .await
    }

    /// Unsubscribes the currently authenticated identity from the list.
    pub async fn signoff(&self, list_name: &str) -> Result<Value, ClientError> {
        require_nonempty("list_name", list_name)?;
        let identity = self.identity().ok_or(ClientError::NotAuthenticated)?;
        self.authenticated_call("signoff", vec![json!(list_name), json!(identity)])
            .await
    }

    /// Alias for [`signoff`](Self::signoff).
    pub async fn unsubscribe(&self, list_name: &str) -> Result<Value, ClientError> {
        self.signoff(list_name).await
    }

    /// Creates a list.
    pub async fn create_list(
        &self,
        list_name: &str,
        subject: &str,
        options: &CreateListOptions,
    ) -> Result<Value, ClientError> {
        require_nonempty("list_name", list_name)?;
        require_nonempty("subject", subject)?;
        self.authenticated_call(
            "createList",
            vec![
                json!(list_name),
                json!(subject),
                json!(options.template),
                json!(options.description),
                json!(options.topics),
            ],
        )
        .await
    }

    /// Closes a list.
    pub async fn close_list(&self, list_name: &str) -> Result<Value, ClientError> {
        require_nonempty("list_name", list_name)?;
        self.authenticated_call("closeList", vec![json!(list_name)])
            .await
    }

    /// Applies the named access-control scenario to a list.
    pub async fn change_list_scenari(
        &self,
        list_name: &str,
        scenario: &str,
        value: &str,
    ) -> Result<Value, ClientError> {
        require_nonempty("list_name", list_name)?;
        require_nonempty("scenario", scenario)?;
        self.authenticated_call(
            "changeListScenari",
            vec![json!(list_name), json!(scenario), json!(value)],
        )
        .await
    }

    /// Raw envelope-2 pass-through, for trusted-application operations not in
    /// the catalog. No precondition; the application's credentials stand on
    /// their own.
    pub async fn authenticate_remote_app_and_run(
        &self,
        app_name: &str,
        app_secret: &str,
        vars: &str,
        service: &str,
        parameters: Vec<Value>,
    ) -> Result<Value, ClientError> {
        self.trusted_call(app_name, app_secret, vars, service, parameters)
            .await
    }
}
