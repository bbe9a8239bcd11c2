//! Standard HTTP methods used as link verbs.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods a link verb can name.
///
/// Link verbs are stored as plain strings so custom verbs survive encoding;
/// this enum covers the standard ones for presentation layers that need to
/// reason about them.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::RestMethod;
///
/// let parsed: RestMethod = "DELETE".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Delete);
/// assert!(!parsed.is_safe());
/// assert_eq!(parsed.form_method(), RestMethod::Post);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
    /// HTTP HEAD - Retrieve headers only.
    Head,
    /// HTTP OPTIONS - Query supported methods.
    Options,
    /// HTTP TRACE - Echo the request for debugging.
    Trace,
}

impl RestMethod {
    /// Returns `true` if this method is safe (read-only).
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options | Self::Trace)
    }

    /// The method an HTML form can submit with: GET stays GET, everything
    /// else goes out as POST.
    pub fn form_method(&self) -> RestMethod {
        match self {
            Self::Get => Self::Get,
            _ => Self::Post,
        }
    }

    /// Returns `true` if an HTML form must carry the real method in a
    /// `_method` override field.
    pub fn needs_method_override(&self) -> bool {
        !matches!(self, Self::Get | Self::Post)
    }
}
