use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub is_verified: bool,
    pub is_deactivated: bool,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UpdateHotelDto {
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SetHotelVerificationDto {
    pub is_verified: bool,
    pub is_deactivated: bool,
}
