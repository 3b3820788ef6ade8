use std::fmt;

use thiserror::Error;

/// Failure of a single remote call
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed with HTTP {status}")]
    Network { url: String, status: u16 },

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("Invalid JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} was cancelled")]
    Cancelled { url: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl FetchError {
    /// The URL the failing request targeted, if there was one
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Network { url, .. }
            | FetchError::NotFound { url }
            | FetchError::Parse { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Cancelled { url } => Some(url),
            FetchError::Build(_) => None,
        }
    }

    /// HTTP status of a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Network { status, .. } => Some(*status),
            FetchError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled { .. })
    }
}

/// Which sub-fetch of an aggregation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PokemonList,
    TypeMembers,
    Pokemon,
    Species,
    EvolutionChain,
    EvolutionNode,
    EvolutionCondition,
    Ability,
    Move,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::PokemonList => "pokemon list",
            Stage::TypeMembers => "type members",
            Stage::Pokemon => "pokemon",
            Stage::Species => "species",
            Stage::EvolutionChain => "evolution chain",
            Stage::EvolutionNode => "evolution stage",
            Stage::EvolutionCondition => "evolution condition",
            Stage::Ability => "ability",
            Stage::Move => "move",
        };
        f.write_str(name)
    }
}

/// An aggregation aborted by the first failing sub-fetch
#[derive(Error, Debug)]
#[error("Failed to fetch {stage} for {subject}")]
pub struct AggregationError {
    pub stage: Stage,
    /// Name or id of the entity being fetched
    pub subject: String,
    #[source]
    pub source: FetchError,
}

impl AggregationError {
    pub fn is_not_found(&self) -> bool {
        self.source.is_not_found()
    }

    pub fn is_cancelled(&self) -> bool {
        self.source.is_cancelled()
    }
}

/// Attach the aggregation stage to a fetch result
pub(crate) trait StageContext<T> {
    fn stage(self, stage: Stage, subject: impl fmt::Display) -> Result<T, AggregationError>;
}

impl<T> StageContext<T> for Result<T, FetchError> {
    fn stage(self, stage: Stage, subject: impl fmt::Display) -> Result<T, AggregationError> {
        self.map_err(|source| AggregationError {
            stage,
            subject: subject.to_string(),
            source,
        })
    }
}
