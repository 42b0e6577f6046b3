use serde::Serialize;

#[derive(Serialize)]
pub struct AccessToken {
    pub token: String,
}
