mod auth;
mod billing;
mod hotel;
mod maintenance;
mod notification;
mod user;
