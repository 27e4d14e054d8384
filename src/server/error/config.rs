use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A configured URL could not be parsed.
    #[error("Invalid URL for {name}: {source}")]
    InvalidUrl {
        /// Which setting held the URL
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}
