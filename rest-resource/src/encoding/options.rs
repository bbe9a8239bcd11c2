//! Encoder configuration.

/// Default maximum nesting depth accepted by the encoders.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default XML root element name.
pub const DEFAULT_XML_ROOT: &str = "resource";

/// Options for JSON output.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::encoding::JsonOptions;
///
/// let options = JsonOptions::new().pretty(true).max_depth(16);
/// assert!(options.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    /// Indent the output.
    pub pretty: bool,
    /// Deepest embedded-resource or value nesting accepted.
    pub max_depth: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl JsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Options for XML output.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::encoding::XmlOptions;
///
/// let options = XmlOptions::new()
///     .root("order")
///     .indent(2)
///     .declaration(true)
///     .include_hypermedia(true);
/// assert_eq!(options.root, "order");
/// assert_eq!(options.indent, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlOptions {
    /// Name of the root element.
    pub root: String,
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Emit an `<?xml ...?>` declaration first.
    pub declaration: bool,
    /// Merge `_links` and `_embedded` into the tree before encoding.
    pub include_hypermedia: bool,
    /// Deepest nesting accepted.
    pub max_depth: usize,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            root: DEFAULT_XML_ROOT.to_string(),
            indent: None,
            declaration: false,
            include_hypermedia: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl XmlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = Some(spaces);
        self
    }

    pub fn declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    pub fn include_hypermedia(mut self, include: bool) -> Self {
        self.include_hypermedia = include;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
