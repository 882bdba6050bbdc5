use crate::config::RideConfig;
use std::collections::vec_deque::VecDeque;

/// 1. `Ride`
///     * `book(customer)`
///         * If `ticket_holders.len() < capacity` append the customer and succeed
///         * Otherwise leave holders untouched and fail
///     * `cancel()`
///         * Pop the oldest holder if there is one and succeed
///         * Otherwise fail
#[derive(Debug, Clone)]
pub struct Ride {
    name: String,
    capacity: u32,
    ticket_holders: VecDeque<String>,
}

impl Ride {
    pub fn new<S: Into<String>>(name: S, capacity: u32) -> Ride {
        Ride {
            name: name.into(),
            capacity,
            ticket_holders: VecDeque::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn available(&self) -> u32 {
        self.capacity.saturating_sub(self.ticket_holders.len() as u32)
    }

    pub fn has_capacity(&self) -> bool {
        self.ticket_holders.len() < self.capacity as usize
    }

    pub fn book<S: Into<String>>(&mut self, customer: S) -> bool {
        if !self.has_capacity() {
            return false;
        }

        self.ticket_holders.push_back(customer.into());

        true
    }

    pub fn cancel(&mut self) -> bool {
        self.ticket_holders.pop_front().is_some()
    }

    /// Holders in booking order
    pub fn holders(&self) -> impl Iterator<Item = &str> {
        self.ticket_holders.iter().map(String::as_str)
    }
}

impl From<RideConfig> for Ride {
    fn from(config: RideConfig) -> Ride {
        Ride::new(config.name, config.capacity)
    }
}
