use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_decoding_key, parse_jwt_encoding_key};
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_max_connections: u32,

    pub max_http_content_len: usize,
    pub request_timeout: Duration,

    /// Algorithms must belong to the same family.
    /// The first one is used to sign issued tokens.
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_encoding_key: EncodingKey,
    pub jwt_decoding_key: DecodingKey,
    pub jwt_issuer: String,
    pub jwt_lifespan: Duration,

    pub login_username: String,
    pub login_password: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("EVENT_BOOKING_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("EVENT_BOOKING_LOG_FILENAME")?;
        let bind_address = Self::env_var("EVENT_BOOKING_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("EVENT_BOOKING_DB_CONNECTION_STRING")?;
        let db_max_connections = Self::env_var("EVENT_BOOKING_DB_MAX_CONNECTIONS")?.parse()?;
        let max_http_content_len = Self::env_var("EVENT_BOOKING_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let request_timeout = Self::env_var("EVENT_BOOKING_REQUEST_TIMEOUT")?.parse()?;
        let request_timeout = Duration::from_secs(request_timeout);
        let jwt_algorithms = parse_jwt_algorithms(Self::env_var("EVENT_BOOKING_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "EVENT_BOOKING_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_encoding_key = parse_jwt_encoding_key(
            jwt_algorithm,
            Self::env_var("EVENT_BOOKING_JWT_ENCODING_KEY")?,
        )?;
        let jwt_decoding_key = parse_jwt_decoding_key(
            jwt_algorithm,
            Self::env_var("EVENT_BOOKING_JWT_DECODING_KEY")?,
        )?;
        let jwt_issuer = Self::env_var("EVENT_BOOKING_JWT_ISSUER")?;
        let jwt_lifespan = Self::env_var("EVENT_BOOKING_JWT_LIFESPAN")?.parse()?;
        let jwt_lifespan = Duration::from_secs(jwt_lifespan);
        let login_username = Self::env_var("EVENT_BOOKING_LOGIN_USERNAME")?;
        let login_password = Self::env_var("EVENT_BOOKING_LOGIN_PASSWORD")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_max_connections,
            max_http_content_len,
            request_timeout,
            jwt_algorithms,
            jwt_encoding_key,
            jwt_decoding_key,
            jwt_issuer,
            jwt_lifespan,
            login_username,
            login_password,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
