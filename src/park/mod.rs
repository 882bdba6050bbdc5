pub mod ride;
pub mod system;

pub use self::ride::Ride;
pub use self::system::{Booking, Cancellation, ParkSystem, Registration, RideListing, TicketListing};
