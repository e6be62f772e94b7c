use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct VenueDto {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub capacity: i32,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CreateVenueDto {
    pub name: String,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UpdateVenueDto {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub is_active: Option<bool>,
}
