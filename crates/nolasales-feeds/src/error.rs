use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("no API URL configured for {store}")]
    MissingApiUrl { store: String },

    #[error("no store with id \"{id}\"")]
    UnknownStore { id: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
