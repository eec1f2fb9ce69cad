use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the analytics backends the dashboard can read from.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on the developer's machine.
    #[default]
    Local,
    /// Staging backend for pre-production testing.
    Staging,
    /// Production backend.
    Production,
}

impl Environment {
    /// Returns the backend root URL (without the API version prefix).
    pub fn backend_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Staging => "https://staging.api.nexero.io".to_string(),
            Environment::Production => "https://api.nexero.io".to_string(),
        }
    }

    /// Returns the versioned analytics API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        format!("{}/api/v1", self.backend_url())
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("STAGING".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
        assert!("moon".parse::<Environment>().is_err());
    }

    #[test]
    fn test_api_url_is_versioned() {
        assert_eq!(Environment::Local.api_url(), "http://localhost:8000/api/v1");
    }
}
