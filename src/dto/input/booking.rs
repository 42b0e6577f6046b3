use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Booking {
    pub customer_name: String,
    pub quantity: i32,
}
