use crate::config::ParkConfig;
use crate::park::ride::Ride;
use std::collections::vec_deque::VecDeque;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Ride(String),
    Customer(String),
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Registration::Ride(name) => write!(f, "Ride added: {}", name),
            Registration::Customer(name) => write!(f, "Customer added: {}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Booking {
    NoCustomers,
    Booked { customer: String, ride: String },
    Unavailable { customer: String },
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Booking::NoCustomers => write!(f, "No customers in the queue!"),
            Booking::Booked { customer, ride } => {
                write!(f, "Ticket booked successfully for {} on {}!", customer, ride)
            }
            Booking::Unavailable { .. } => write!(f, "No available tickets. Customer removed from queue!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cancellation {
    Canceled { ride: String },
    NothingToCancel { ride: String },
    RideNotFound { ride: String },
}

impl fmt::Display for Cancellation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cancellation::Canceled { ride } => write!(f, "Ticket canceled for ride: {}", ride),
            Cancellation::NothingToCancel { .. } => write!(f, "No tickets to cancel for this ride!"),
            Cancellation::RideNotFound { .. } => write!(f, "Ride not found!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RideSummary {
    pub name: String,
    pub available: u32,
}

/// Every ride in the park, in the order they were added
#[derive(Debug, Clone, PartialEq)]
pub struct RideListing(pub Vec<RideSummary>);

impl fmt::Display for RideListing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No rides available!");
        }

        write!(f, "Available Rides: ")?;

        for ride in self.0.iter() {
            write!(f, "\n- {} (Capacity: {} available)", ride.name, ride.available)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RideTickets {
    pub name: String,
    pub holders: Vec<String>,
}

/// Tickets of every ride matching a name; empty when the name matched nothing
#[derive(Debug, Clone, PartialEq)]
pub struct TicketListing(pub Vec<RideTickets>);

impl fmt::Display for TicketListing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "Ride not found!");
        }

        for (index, ride) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }

            if ride.holders.is_empty() {
                write!(f, "No tickets booked for {}!", ride.name)?;
                continue;
            }

            write!(f, "Customers with tickets for {}: ", ride.name)?;

            for holder in ride.holders.iter() {
                write!(f, "\n- {}", holder)?;
            }
        }

        Ok(())
    }
}

/// `ParkSystem` owns the rides and the queue of customers waiting to book,
/// customers are served first come first served and always go to the first
/// ride (in order of addition) which still has free capacity
#[derive(Debug, Default)]
pub struct ParkSystem {
    rides: Vec<Ride>,
    waiting_customers: VecDeque<String>,
}

impl ParkSystem {
    pub fn new() -> ParkSystem {
        ParkSystem::default()
    }

    pub fn from_config(config: ParkConfig) -> ParkSystem {
        let system = ParkSystem {
            rides: config.rides.into_iter().map(Ride::from).collect(),
            waiting_customers: config.customers.into_iter().collect(),
        };

        info!(
            rides = system.rides.len(),
            customers = system.waiting_customers.len(),
            "park seeded from config"
        );

        system
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    pub fn waiting_customers(&self) -> impl Iterator<Item = &str> {
        self.waiting_customers.iter().map(String::as_str)
    }

    pub fn add_ride<S: Into<String>>(&mut self, name: S, capacity: u32) -> Registration {
        let name = name.into();

        info!(ride = %name, capacity, "ride added");

        self.rides.push(Ride::new(name.clone(), capacity));

        Registration::Ride(name)
    }

    pub fn add_customer<S: Into<String>>(&mut self, name: S) -> Registration {
        let name = name.into();

        info!(customer = %name, queued = self.waiting_customers.len() + 1, "customer queued");

        self.waiting_customers.push_back(name.clone());

        Registration::Customer(name)
    }

    pub fn book_next(&mut self) -> Booking {
        let customer = match self.waiting_customers.pop_front() {
            Some(customer) => customer,
            None => {
                debug!("booking requested with empty queue");
                return Booking::NoCustomers;
            }
        };

        match self.rides.iter_mut().find(|ride| ride.has_capacity()) {
            Some(ride) => {
                ride.book(customer.clone());

                info!(customer = %customer, ride = %ride.name(), available = ride.available(), "ticket booked");

                Booking::Booked {
                    customer,
                    ride: ride.name().to_string(),
                }
            }
            None => {
                info!(customer = %customer, "no ride with free capacity, customer dropped");

                Booking::Unavailable { customer }
            }
        }
    }

    pub fn cancel_ticket(&mut self, ride_name: &str) -> Cancellation {
        let ride = match self.rides.iter_mut().find(|ride| ride.name() == ride_name) {
            Some(ride) => ride,
            None => {
                debug!(ride = %ride_name, "cancel requested for unknown ride");
                return Cancellation::RideNotFound {
                    ride: ride_name.to_string(),
                };
            }
        };

        if ride.cancel() {
            info!(ride = %ride_name, available = ride.available(), "ticket canceled");

            Cancellation::Canceled {
                ride: ride_name.to_string(),
            }
        } else {
            Cancellation::NothingToCancel {
                ride: ride_name.to_string(),
            }
        }
    }

    pub fn list_rides(&self) -> RideListing {
        RideListing(
            self.rides
                .iter()
                .map(|ride| RideSummary {
                    name: ride.name().to_string(),
                    available: ride.available(),
                })
                .collect(),
        )
    }

    pub fn list_ride_tickets(&self, ride_name: &str) -> TicketListing {
        TicketListing(
            self.rides
                .iter()
                .filter(|ride| ride.name() == ride_name)
                .map(|ride| RideTickets {
                    name: ride.name().to_string(),
                    holders: ride.holders().map(String::from).collect(),
                })
                .collect(),
        )
    }
}
