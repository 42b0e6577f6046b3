///
/// Placeholder credentials pair accepted by login
///
pub struct AuthServiceConfig {
    pub username: String,
    pub password: String,
}
