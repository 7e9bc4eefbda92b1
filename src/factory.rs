//! Factories, registry and analyzer configuration
//!
//! Filters are named in configuration (`latinNumberNormalization`,
//! `latinNumberConvert`, `latinStem`) and built through a
//! [`FilterRegistry`]. An [`Analyzer`] chains the configured factories over a
//! host token stream in configuration order.
//!
//! ```rust
//! use latin_analysis::{Analyzer, AnalyzerConfig, Token, VecTokenStream, collect_tokens};
//!
//! let config = AnalyzerConfig::from_json_str(
//!     r#"{ "filters": [ { "name": "latinNumberConvert", "args": { "strictMode": "true" } } ] }"#,
//! )?;
//! let analyzer = Analyzer::from_config(&config)?;
//! let tokens = collect_tokens(analyzer.analyze(VecTokenStream::new(vec![
//!     Token::word("XIX", 0, 3),
//!     Token::word("IC", 4, 6),
//! ])));
//! assert_eq!(tokens[0].text, "19");
//! assert_eq!(tokens[1].text, "IC");
//! # Ok::<(), latin_analysis::AnalysisError>(())
//! ```

use crate::error::{AnalysisError, Result};
use crate::filter::{LatinNumberConvertFilter, LatinNumberNormalizationFilter, LatinStemFilter};
use crate::token::{BoxedTokenStream, TokenStream};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Ordered string arguments of one filter entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterArgs {
    values: IndexMap<String, String>,
}

impl FilterArgs {
    /// Creates an empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an argument, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Gets an argument without consuming it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of arguments not yet consumed
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if every argument has been consumed
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes a boolean argument
    ///
    /// Accepts `true` and `false` in any ASCII case. A missing argument
    /// yields `default`.
    pub fn take_bool(&mut self, filter: &str, name: &str, default: bool) -> Result<bool> {
        let Some(value) = self.values.shift_remove(name) else {
            return Ok(default);
        };
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(AnalysisError::InvalidParameter {
                filter: filter.to_string(),
                parameter: name.to_string(),
                value,
                expected: "true or false".to_string(),
            })
        }
    }

    /// Fails if any argument was not consumed
    pub fn finish(self, filter: &str) -> Result<()> {
        if self.values.is_empty() {
            return Ok(());
        }
        Err(AnalysisError::UnknownParameters {
            filter: filter.to_string(),
            names: self.values.into_keys().collect(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builds one kind of filter over an upstream stream
pub trait TokenFilterFactory: fmt::Debug {
    /// Name the factory is registered under
    fn name(&self) -> &str;

    /// Wraps `input` in a new filter instance
    fn create(&self, input: BoxedTokenStream) -> BoxedTokenStream;
}

/// Factory for [`LatinNumberNormalizationFilter`]; takes no arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinNumberNormalizationFilterFactory;

impl LatinNumberNormalizationFilterFactory {
    /// Registered filter name
    pub const NAME: &'static str = "latinNumberNormalization";

    /// Builds the factory, rejecting any argument
    pub fn from_args(args: FilterArgs) -> Result<Self> {
        args.finish(Self::NAME)?;
        Ok(Self)
    }
}

impl TokenFilterFactory for LatinNumberNormalizationFilterFactory {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn create(&self, input: BoxedTokenStream) -> BoxedTokenStream {
        Box::new(LatinNumberNormalizationFilter::new(input))
    }
}

/// Factory for [`LatinNumberConvertFilter`]
///
/// Accepts `strictMode` (`true`/`false`, default `false`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinNumberConvertFilterFactory {
    strict: bool,
}

impl LatinNumberConvertFilterFactory {
    /// Registered filter name
    pub const NAME: &'static str = "latinNumberConvert";
    /// Argument enabling strict validation
    pub const STRICT_MODE: &'static str = "strictMode";

    /// Creates a factory with the given strictness
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Builds the factory from `strictMode`, rejecting other arguments
    pub fn from_args(mut args: FilterArgs) -> Result<Self> {
        let strict = args.take_bool(Self::NAME, Self::STRICT_MODE, false)?;
        args.finish(Self::NAME)?;
        Ok(Self::new(strict))
    }

    /// Returns whether created filters validate strictly
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl TokenFilterFactory for LatinNumberConvertFilterFactory {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn create(&self, input: BoxedTokenStream) -> BoxedTokenStream {
        Box::new(LatinNumberConvertFilter::new(input, self.strict))
    }
}

/// Factory for [`LatinStemFilter`]; takes no arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinStemFilterFactory;

impl LatinStemFilterFactory {
    /// Registered filter name
    pub const NAME: &'static str = "latinStem";

    /// Builds the factory, rejecting any argument
    pub fn from_args(args: FilterArgs) -> Result<Self> {
        args.finish(Self::NAME)?;
        Ok(Self)
    }
}

impl TokenFilterFactory for LatinStemFilterFactory {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn create(&self, input: BoxedTokenStream) -> BoxedTokenStream {
        Box::new(LatinStemFilter::new(input))
    }
}

/// Builds a factory from its arguments
pub type FactoryConstructor = fn(FilterArgs) -> Result<Box<dyn TokenFilterFactory>>;

fn build_normalization(args: FilterArgs) -> Result<Box<dyn TokenFilterFactory>> {
    Ok(Box::new(LatinNumberNormalizationFilterFactory::from_args(args)?))
}

fn build_convert(args: FilterArgs) -> Result<Box<dyn TokenFilterFactory>> {
    Ok(Box::new(LatinNumberConvertFilterFactory::from_args(args)?))
}

fn build_stem(args: FilterArgs) -> Result<Box<dyn TokenFilterFactory>> {
    Ok(Box::new(LatinStemFilterFactory::from_args(args)?))
}

/// Registry mapping filter names to factory constructors
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    constructors: IndexMap<String, FactoryConstructor>,
}

impl FilterRegistry {
    /// Creates a registry holding the three Latin filters
    pub fn new() -> Self {
        let mut constructors: IndexMap<String, FactoryConstructor> = IndexMap::new();
        constructors.insert(
            LatinNumberNormalizationFilterFactory::NAME.to_string(),
            build_normalization,
        );
        constructors.insert(
            LatinNumberConvertFilterFactory::NAME.to_string(),
            build_convert,
        );
        constructors.insert(LatinStemFilterFactory::NAME.to_string(), build_stem);
        Self { constructors }
    }

    /// Creates a registry with no filters
    pub fn empty() -> Self {
        Self {
            constructors: IndexMap::new(),
        }
    }

    /// Registers a constructor under a new name
    pub fn register(&mut self, name: impl Into<String>, constructor: FactoryConstructor) -> Result<()> {
        let name = name.into();
        if self.constructors.contains_key(&name) {
            return Err(AnalysisError::DuplicateFilter { name });
        }
        debug!(filter = %name, "registered filter factory");
        self.constructors.insert(name, constructor);
        Ok(())
    }

    /// Returns true if a filter is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    /// Builds the factory registered under `name`
    pub fn create(&self, name: &str, args: FilterArgs) -> Result<Box<dyn TokenFilterFactory>> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| AnalysisError::UnknownFilter {
                name: name.to_string(),
            })?;
        let factory = constructor(args)?;
        debug!(filter = %name, "created filter factory");
        Ok(factory)
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// One configured filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Registered filter name
    pub name: String,
    /// Filter arguments
    #[serde(default)]
    pub args: FilterArgs,
}

impl FilterSpec {
    /// Creates an entry with no arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: FilterArgs::new(),
        }
    }

    /// Replaces the arguments, builder style
    pub fn with_args(mut self, args: FilterArgs) -> Self {
        self.args = args;
        self
    }
}

/// Ordered filter chain configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Filters applied in order to the host stream
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
}

impl AnalyzerConfig {
    /// Creates an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter to the chain
    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filters.push(filter);
        self
    }

    /// Parses a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A chain of configured filter factories
#[derive(Debug, Default)]
pub struct Analyzer {
    factories: Vec<Box<dyn TokenFilterFactory>>,
}

impl Analyzer {
    /// Builds an analyzer with the default registry
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        Self::with_registry(config, &FilterRegistry::new())
    }

    /// Builds an analyzer resolving names through `registry`
    pub fn with_registry(config: &AnalyzerConfig, registry: &FilterRegistry) -> Result<Self> {
        let factories = config
            .filters
            .iter()
            .map(|spec| registry.create(&spec.name, spec.args.clone()))
            .collect::<Result<Vec<_>>>()?;
        debug!(filters = factories.len(), "built analyzer");
        Ok(Self { factories })
    }

    /// Appends an already built factory
    pub fn with_factory(mut self, factory: Box<dyn TokenFilterFactory>) -> Self {
        self.factories.push(factory);
        self
    }

    /// Names of the chained filters, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.factories.iter().map(|f| f.name()).collect()
    }

    /// Number of chained filters
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if the analyzer leaves streams unchanged
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Wraps a host stream in every configured filter
    pub fn analyze<S: TokenStream + 'static>(&self, source: S) -> BoxedTokenStream {
        self.factories
            .iter()
            .fold(Box::new(source) as BoxedTokenStream, |stream, factory| {
                factory.create(stream)
            })
    }
}
