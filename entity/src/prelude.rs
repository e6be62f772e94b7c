pub use super::booking::Entity as Booking;
pub use super::hotel::Entity as Hotel;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
pub use super::venue::Entity as Venue;
