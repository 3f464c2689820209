//! Configuration options for document scanning.
//!
//! The `Options` struct controls scan behavior. Classification rules and the
//! rank policy are fixed; options only affect how attribute values are
//! resolved and which passes run.

/// Configuration options for document scanning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use media_sniffer::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     base_url: Some("https://example.com/watch".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL for resolving relative source attributes.
    ///
    /// A live browser hands scripts pre-resolved absolute URLs; raw markup
    /// does not. When set, relative `src`/`href` values are joined against
    /// this URL before deduplication. When unset (or unparsable), attribute
    /// values are reported as written.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Include image elements in the scan.
    ///
    /// Inline `data:` images are excluded regardless of this setting; they
    /// are embedded payloads, not resources to find.
    ///
    /// Default: `true`
    pub include_images: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: None,
            include_images: true,
        }
    }
}
