//! Materializing validators from factories and named injections.
use itertools::Itertools;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use super::validator::Validator;
use super::TypeMapperError;

/// Resolves injection names to values, in the order asked for.
pub trait ResolveInjections {
    type Injection;
    fn resolve(&self, names: &[String]) -> Result<Vec<Self::Injection>, TypeMapperError>;
}

impl<V: Clone> ResolveInjections for HashMap<String, V> {
    type Injection = V;

    fn resolve(&self, names: &[String]) -> Result<Vec<V>, TypeMapperError> {
        names
            .iter()
            .map(|name| {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| TypeMapperError::InjectionNotFound(name.clone()))
            })
            .collect()
    }
}

impl ResolveInjections for serde_yaml::Mapping {
    type Injection = serde_yaml::Value;

    fn resolve(&self, names: &[String]) -> Result<Vec<serde_yaml::Value>, TypeMapperError> {
        names
            .iter()
            .map(|name| {
                self.get(&serde_yaml::Value::from(name.as_str()))
                    .cloned()
                    .ok_or_else(|| TypeMapperError::InjectionNotFound(name.clone()))
            })
            .collect()
    }
}

/// Builds a validator from resolved injections.  `None` means the factory
/// produced no validator.
pub type ValidatorFactory<V> =
    Box<dyn Fn(Vec<V>) -> Result<Option<Validator>, TypeMapperError> + Send + Sync>;

/// Where a route parameter's validator comes from.
pub enum ValidatorSource<V> {
    Absent,
    Resolved(Validator),
    Factory {
        factory: ValidatorFactory<V>,
        injections: Vec<String>,
    },
}

impl<V> ValidatorSource<V> {
    pub fn factory<F>(injections: &[&str], factory: F) -> Self
    where
        F: Fn(Vec<V>) -> Result<Option<Validator>, TypeMapperError> + Send + Sync + 'static,
    {
        Self::Factory {
            factory: Box::new(factory),
            injections: injections.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Yields the effective validator, invoking the factory with its
    /// injections when there is one.  Resolver and factory errors are
    /// returned untouched.
    pub fn materialize<R>(&self, resolver: &R) -> Result<Option<Cow<'_, Validator>>, TypeMapperError>
    where
        R: ResolveInjections<Injection = V>,
    {
        match self {
            Self::Absent => Ok(None),
            Self::Resolved(validator) => Ok(Some(Cow::Borrowed(validator))),
            Self::Factory {
                factory,
                injections,
            } => {
                log::trace!("Resolving injections [{}]", injections.iter().join(", "));
                let values = resolver.resolve(injections)?;
                Ok(factory(values)?.map(Cow::Owned))
            }
        }
    }
}

impl<V> From<Validator> for ValidatorSource<V> {
    fn from(validator: Validator) -> Self {
        Self::Resolved(validator)
    }
}

impl<V> From<Option<Validator>> for ValidatorSource<V> {
    fn from(validator: Option<Validator>) -> Self {
        validator.map_or(Self::Absent, Self::Resolved)
    }
}

impl<V> fmt::Debug for ValidatorSource<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Resolved(validator) => f.debug_tuple("Resolved").field(validator).finish(),
            Self::Factory { injections, .. } => f
                .debug_struct("Factory")
                .field("injections", injections)
                .finish(),
        }
    }
}
