//! Application routes.

use crate::model::contact::ContactId;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Navigation targets of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`: contact list.
    ContactList,
    /// `/add`: create form.
    AddContact,
    /// `/edit/:id`: edit form for one contact.
    EditContact(ContactId),
    /// `/dashboard`: charts and map data.
    Dashboard,
}

impl Route {
    /// Parses a path into a route. Unknown paths and malformed edit ids
    /// yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::ContactList),
            "/add" => Some(Self::AddContact),
            "/dashboard" => Some(Self::Dashboard),
            _ => path
                .strip_prefix("/edit/")
                .and_then(|raw| Uuid::parse_str(raw).ok())
                .map(Self::EditContact),
        }
    }

    /// Formats the route back into its path.
    pub fn to_path(&self) -> String {
        match self {
            Self::ContactList => "/".to_string(),
            Self::AddContact => "/add".to_string(),
            Self::EditContact(id) => format!("/edit/{id}"),
            Self::Dashboard => "/dashboard".to_string(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
