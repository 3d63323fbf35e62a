//! The `Query` struct used to parse and store the URL query parameters.
//!
//! ```text
//! URI = scheme ":" ["//" authority] path ["?" query] ["#" fragment]
//! ```
//!
//! Values are kept as they arrive, still percent encoded. Decoding is left to
//! each request type because the `BitTorrent` params carry raw bytes.
use std::panic::Location;
use std::str::FromStr;

use multimap::MultiMap;
use thiserror::Error;

use super::responses;

type ParamName = String;
type ParamValue = String;

/// It represents a URL query component.
///
/// Repeated params keep all of their values in the order they were written.
#[derive(Debug, Default)]
pub struct Query {
    params: MultiMap<ParamName, Param>,
}

impl Query {
    /// It return `Some(value)` for a URL query param if the param with the
    /// input `name` exists. For example:
    ///
    /// ```rust
    /// use torrust_scrape_tracker::servers::http::v1::query::Query;
    ///
    /// let query = "info_hash=a&info_hash=b".parse::<Query>().unwrap();
    ///
    /// assert_eq!(query.get_param("info_hash").unwrap(), "a");
    /// ```
    ///
    /// It returns only the first param value even if it has multiple values.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<String> {
        self.params.get(name).map(|param| param.value.clone())
    }

    /// Returns all the param values as a vector, in query order.
    ///
    /// ```rust
    /// use torrust_scrape_tracker::servers::http::v1::query::Query;
    ///
    /// let query = "info_hash=a&other=x&info_hash=b".parse::<Query>().unwrap();
    ///
    /// assert_eq!(
    ///     query.get_param_vec("info_hash"),
    ///     Some(vec!["a".to_string(), "b".to_string()])
    /// );
    /// assert_eq!(query.get_param_vec("missing"), None);
    /// ```
    #[must_use]
    pub fn get_param_vec(&self, name: &str) -> Option<Vec<String>> {
        self.params
            .get_vec(name)
            .map(|params| params.iter().map(|param| param.value.clone()).collect())
    }

    /// Returns `true` if the query has no params.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// This error can be returned when parsing a [`Query`]
/// from a string.
#[derive(Error, Debug)]
pub enum ParseQueryError {
    /// Invalid URL query param. For example: `"name=value=value"` contains
    /// an unescaped `=` character and `"name"` has no value.
    #[error("invalid param {raw_param} in {location}")]
    InvalidParam {
        location: &'static Location<'static>,
        raw_param: String,
    },
}

impl From<ParseQueryError> for responses::error::Error {
    fn from(err: ParseQueryError) -> Self {
        responses::error::Error {
            failure_reason: format!("Cannot parse query params: {err}"),
        }
    }
}

impl FromStr for Query {
    type Err = ParseQueryError;

    /// Empty segments are skipped, so `""`, `"?"` and `"a=1&&b=2"` are
    /// valid queries.
    fn from_str(raw_query: &str) -> Result<Self, Self::Err> {
        let mut params: MultiMap<ParamName, Param> = MultiMap::new();

        for raw_param in raw_query.trim().trim_start_matches('?').split('&') {
            if raw_param.is_empty() {
                continue;
            }

            let param: Param = raw_param.parse()?;
            params.insert(param.name.clone(), param);
        }

        Ok(Self { params })
    }
}

impl From<Vec<(&str, &str)>> for Query {
    fn from(raw_params: Vec<(&str, &str)>) -> Self {
        let mut params: MultiMap<ParamName, Param> = MultiMap::new();

        for (name, value) in raw_params {
            params.insert(name.to_owned(), Param::new(name, value));
        }

        Self { params }
    }
}

/// The order of different params is not preserved. Values of the same param
/// are written in query order.
impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let query = self
            .params
            .iter_all()
            .flat_map(|(_name, params)| params.iter().map(ToString::to_string))
            .collect::<Vec<String>>()
            .join("&");

        write!(f, "{query}")
    }
}

#[derive(Debug, PartialEq, Clone)]
struct Param {
    name: ParamName,
    value: ParamValue,
}

impl Param {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}

impl FromStr for Param {
    type Err = ParseQueryError;

    #[track_caller]
    fn from_str(raw_param: &str) -> Result<Self, Self::Err> {
        match raw_param.split('=').collect::<Vec<&str>>()[..] {
            [name, value] => Ok(Self::new(name, value)),
            _ => Err(ParseQueryError::InvalidParam {
                location: Location::caller(),
                raw_param: raw_param.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
