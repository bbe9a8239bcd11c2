//! Typed hypermedia links.

use super::RestMethod;

/// Verb assumed for links that do not set one.
pub const DEFAULT_VERB: &str = "GET";

/// A named link from a resource to a related URL.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::{Link, Parameter};
///
/// let search = Link::new("/users{?name}")
///     .templated()
///     .with_parameter(Parameter::new("name").with_data_type("string"));
/// assert_eq!(search.verb, "GET");
/// assert_eq!(search.template_params(), vec!["?name"]);
///
/// let delete = Link::new("/users/1").with_verb("DELETE");
/// assert!(!delete.is_get());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target URL, possibly containing `{param}` placeholders.
    pub href: String,
    /// HTTP verb to follow the link with.
    pub verb: String,
    /// Whether `href` is a URL template.
    pub templated: bool,
    /// Inputs the link accepts, in display order.
    pub parameters: Vec<Parameter>,
}

impl Link {
    /// Creates a GET link to `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            verb: DEFAULT_VERB.to_string(),
            templated: false,
            parameters: Vec::new(),
        }
    }

    /// Sets the verb.
    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = verb.into();
        self
    }

    /// Sets the verb from a standard method.
    pub fn with_method(self, method: RestMethod) -> Self {
        self.with_verb(method.to_string())
    }

    /// Marks the href as a URL template.
    pub fn templated(mut self) -> Self {
        self.templated = true;
        self
    }

    /// Appends a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn is_get(&self) -> bool {
        self.verb == DEFAULT_VERB
    }

    /// The verb as a standard method, if it is one.
    pub fn method(&self) -> Option<RestMethod> {
        self.verb.parse().ok()
    }

    /// Placeholder names in the href, in order of appearance.
    pub fn template_params(&self) -> Vec<&str> {
        let mut params = Vec::new();
        let mut rest = self.href.as_str();

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            if close > 0 {
                params.push(&after[..close]);
            }
            rest = &after[close + 1..];
        }

        params
    }

    /// Substitutes `{name}` placeholders with the given values.
    ///
    /// Placeholders without a value are left in place.
    pub fn expand(&self, values: &[(&str, &str)]) -> String {
        let mut href = self.href.clone();
        for (key, value) in values {
            href = href.replace(&format!("{{{key}}}"), value);
        }
        href
    }
}

/// An input accepted by a link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameter {
    pub name: String,
    pub default_value: Option<String>,
    /// Comma separated allowed values.
    pub list_of_values: Option<String>,
    pub data_type: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_list_of_values(mut self, values: impl Into<String>) -> Self {
        self.list_of_values = Some(values.into());
        self
    }

    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// The allowed values split on commas, trimmed, empties dropped.
    pub fn options(&self) -> Vec<&str> {
        self.list_of_values
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
