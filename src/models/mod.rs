pub mod account;
pub mod booking;
pub mod provider;

pub use account::{AdminAccount, CustomerAccount, Role};
pub use booking::{Booking, BookingStatus, CustomerDetails};
pub use provider::Provider;
