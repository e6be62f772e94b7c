mod booking;
mod hotel;
mod venue;
