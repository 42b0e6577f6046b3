use serde::Deserialize;

///
/// Login request. Not `Debug`, password must not be logged.
///
#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
