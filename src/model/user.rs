use entity::user::Role;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub hotel_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SignUpDto {
    pub email: String,
    pub name: String,
    pub password: String,
    /// Requested role; defaults to customer when omitted.
    pub role: Option<Role>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UpdateProfileDto {
    pub name: String,
}
