use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ContextEndpoints;

/// Subject area of a question. Selects the context source and the persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    Medical,
    Legal,
    Finance,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Medical, Domain::Legal, Domain::Finance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medical => "medical",
            Self::Legal => "legal",
            Self::Finance => "finance",
        }
    }

    pub fn endpoint<'a>(&self, endpoints: &'a ContextEndpoints) -> &'a str {
        match self {
            Self::Medical => &endpoints.medical_url,
            Self::Legal => &endpoints.legal_url,
            Self::Finance => &endpoints.finance_url,
        }
    }

    /// URL parameters carrying `query` for this domain's source.
    pub fn query_params(&self, query: &str, endpoints: &ContextEndpoints) -> Vec<(&'static str, String)> {
        match self {
            Self::Medical => vec![("term", query.to_string()), ("retmode", "text".to_string())],
            Self::Legal => vec![("query", query.to_string())],
            Self::Finance => vec![
                ("function", "NEWS_SENTIMENT".to_string()),
                ("keywords", query.to_string()),
                ("apikey", endpoints.finance_api_key.clone()),
            ],
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown domain \"{0}\", expected one of: medical, legal, finance")]
pub struct UnknownDomain(pub String);

impl FromStr for Domain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "medical" => Ok(Self::Medical),
            "legal" => Ok(Self::Legal),
            "finance" => Ok(Self::Finance),
            _ => Err(UnknownDomain(s.to_string())),
        }
    }
}
