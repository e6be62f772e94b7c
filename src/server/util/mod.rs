pub mod password;
pub mod redirect;
