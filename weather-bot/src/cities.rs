//! Allowed-city registry: display name shown on the menu → query string the weather provider expects.
//! Fixed at startup and shared read-only between conversations.

use std::collections::HashSet;

use thiserror::Error;

/// Prefix of every city button's callback data: `city_<display name>`.
pub const CALLBACK_PREFIX: &str = "city_";

/// Supported cities in menu order.
pub const DEFAULT_CITIES: &[(&str, &str)] = &[
    ("Москва", "Moscow"),
    ("Норильск", "Norilsk"),
    ("Красноярск", "Krasnoyarsk"),
    ("Калининград", "Kaliningrad"),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("City registry is empty")]
    Empty,

    #[error("Duplicate display name: {0}")]
    DuplicateName(String),

    #[error("Duplicate provider query: {0}")]
    DuplicateQuery(String),
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub display_name: String,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct CityRegistry {
    cities: Vec<City>,
}

impl CityRegistry {
    /// Builds a registry; display names and queries must each be unique.
    pub fn new<N, Q>(entries: impl IntoIterator<Item = (N, Q)>) -> Result<Self, RegistryError>
    where
        N: Into<String>,
        Q: Into<String>,
    {
        let mut names = HashSet::new();
        let mut queries = HashSet::new();
        let mut cities = Vec::new();

        for (name, query) in entries {
            let city = City {
                display_name: name.into(),
                query: query.into(),
            };
            if !names.insert(city.display_name.clone()) {
                return Err(RegistryError::DuplicateName(city.display_name));
            }
            if !queries.insert(city.query.clone()) {
                return Err(RegistryError::DuplicateQuery(city.query));
            }
            cities.push(city);
        }

        if cities.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { cities })
    }

    /// Provider query for an exact display name.
    pub fn lookup(&self, display_name: &str) -> Option<&str> {
        self.cities
            .iter()
            .find(|c| c.display_name == display_name)
            .map(|c| c.query.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|c| c.display_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES
                .iter()
                .map(|(name, query)| City {
                    display_name: (*name).to_string(),
                    query: (*query).to_string(),
                })
                .collect(),
        }
    }
}

/// Callback data for a city button.
pub fn callback_data(display_name: &str) -> String {
    format!("{}{}", CALLBACK_PREFIX, display_name)
}

/// Display-name part of a `city_` callback token; None for tokens without the prefix.
/// The token is not checked against any registry here.
pub fn parse_callback_data(data: &str) -> Option<&str> {
    data.strip_prefix(CALLBACK_PREFIX)
}
