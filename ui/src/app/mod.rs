pub mod booking_page;
pub mod routes;

pub use booking_page::BookingPage;
