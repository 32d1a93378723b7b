use serde::{de::Visitor, Deserialize, Deserializer};
use std::fmt;

/// Prefix the site is mounted under, e.g. `/blog`. Empty when served from `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPrefix(String);

impl<'de> Deserialize<'de> for PathPrefix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathPrefixVisitor;

        impl<'de> Visitor<'de> for PathPrefixVisitor {
            type Value = PathPrefix;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an empty string or a path starting with `/`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                PathPrefix::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PathPrefixVisitor)
    }
}

impl PathPrefix {
    pub fn parse(prefix: &str) -> Result<Self, String> {
        if prefix.is_empty() {
            return Ok(Self::default());
        }
        if !prefix.starts_with('/') {
            return Err(format!("expected a path prefix starting with `/`. found: {prefix}"));
        }
        if prefix.ends_with('/') {
            return Err(format!("path prefix must not end with `/`. found: {prefix}"));
        }
        Ok(Self(prefix.to_string()))
    }

    /// Site root, the target of every header link.
    pub fn root_path(&self) -> String {
        format!("{}/", self.0)
    }

    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}
