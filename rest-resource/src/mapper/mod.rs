//! Populating resources from arbitrary source objects.
//!
//! Source objects are anything implementing [`serde::Serialize`]. Binding a
//! source normalizes it once into a field map; the builders then copy fields
//! into the resource by name:
//!
//! - [`ConfigureMap`] - field-by-field and bulk mapping of one source
//! - [`ConfigureSliceMap`] - column-wise projection of a collection
//!
//! ## Examples
//!
//! ```rust
//! use rest_resource::Resource;
//!
//! #[derive(serde::Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Order { id: u32, total: f64, secret: String }
//!
//! let order = Order { id: 7, total: 19.5, secret: "x".into() };
//! let mut resource = Resource::new("Order");
//! resource
//!     .map_from(&order)?
//!     .map_formatted("Total", |v| format!("{:.2}", v.as_f64().unwrap_or_default()))?
//!     .exclude("Secret")
//!     .map_all();
//!
//! assert_eq!(resource.get("total").unwrap().to_string(), "19.50");
//! assert!(resource.get("secret").is_none());
//! # Ok::<(), rest_resource::error::MapError>(())
//! ```

mod configure;
mod normalize;
mod slice;

pub use configure::ConfigureMap;
pub use normalize::normalize;
pub use slice::ConfigureSliceMap;

use serde::Serialize;

use crate::error::MapError;
use crate::model::Resource;

/// Default maximum nesting depth accepted during normalization.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Mapping configuration.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::mapper::MapOptions;
///
/// let options = MapOptions::new().max_depth(8);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    /// Deepest nesting level a normalized source may reach.
    pub max_depth: usize,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Resource {
    /// Normalizes `value` and stores it under the camelCased `name`.
    ///
    /// ## Errors
    ///
    /// Returns an error if `value` fails to serialize or nests too deeply.
    pub fn set_data<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> Result<&mut Self, MapError> {
        let value = normalize(value, &MapOptions::default())?;
        Ok(self.set(name, value))
    }

    /// Binds `source` and starts a mapping session.
    ///
    /// ## Errors
    ///
    /// Returns [`MapError::NotStructLike`] if the source does not normalize
    /// into a field map.
    pub fn map_from<T: Serialize + ?Sized>(&mut self, source: &T) -> Result<ConfigureMap<'_>, MapError> {
        self.map_from_with(source, MapOptions::default())
    }

    /// Like [`map_from`](Self::map_from) with explicit options.
    pub fn map_from_with<T: Serialize + ?Sized>(
        &mut self,
        source: &T,
        options: MapOptions,
    ) -> Result<ConfigureMap<'_>, MapError> {
        ConfigureMap::bind(self, source, &options)
    }

    /// Maps every field of `source` and returns the resource.
    pub fn map_all_from<T: Serialize + ?Sized>(&mut self, source: &T) -> Result<&mut Self, MapError> {
        Ok(self.map_from(source)?.map_all().end_map())
    }

    /// Installs one empty nested map per element of `source` under `name`
    /// and returns a builder that copies fields into them column by column.
    ///
    /// ## Errors
    ///
    /// Returns [`MapError::ElementNotStructLike`] if an element does not
    /// normalize into a field map; the resource is left untouched then.
    pub fn map_slice_from<I>(&mut self, name: &str, source: I) -> Result<ConfigureSliceMap<'_>, MapError>
    where
        I: IntoIterator,
        I::Item: Serialize,
    {
        ConfigureSliceMap::bind(self, name, source, &MapOptions::default())
    }
}
