use crate::config;
use crate::park::ParkSystem;
use colored::Colorize;
use failure::Error;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    AddRide,
    AddCustomer,
    BookTicket,
    CancelTicket,
    DisplayRideTickets,
    DisplayRides,
    Exit,
}

impl Command {
    pub fn from_choice(choice: &str) -> Option<Command> {
        match choice.trim().parse::<u32>().ok()? {
            1 => Some(Command::AddRide),
            2 => Some(Command::AddCustomer),
            3 => Some(Command::BookTicket),
            4 => Some(Command::CancelTicket),
            5 => Some(Command::DisplayRideTickets),
            6 => Some(Command::DisplayRides),
            7 => Some(Command::Exit),
            _ => None,
        }
    }
}

const MENU: [&str; 7] = [
    "1. Add Ride",
    "2. Add Customer",
    "3. Book Ticket",
    "4. Cancel Ticket",
    "5. Display Ride Tickets",
    "6. Display Rides",
    "7. Exit",
];

/// Menu driven read-eval loop, reads one command, runs it against the park
/// and prints the report before asking for the next one
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Console<R, W> {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the operator exits or the input ends
    pub fn run(&mut self, system: &mut ParkSystem) -> Result<(), Error> {
        loop {
            self.print_menu()?;

            let choice = match self.prompt("Enter your choice: ")? {
                Some(choice) => choice,
                None => return self.goodbye(),
            };

            let command = match Command::from_choice(&choice) {
                Some(command) => command,
                None => {
                    debug!(choice = %choice.trim(), "unknown menu choice");
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    continue;
                }
            };

            if !self.execute(command, system)? {
                return self.goodbye();
            }
        }
    }

    /// Returns `false` once the loop should stop
    fn execute(&mut self, command: Command, system: &mut ParkSystem) -> Result<bool, Error> {
        match command {
            Command::AddRide => {
                let name = match self.prompt("Enter ride name: ")? {
                    Some(name) => name,
                    None => return Ok(false),
                };

                let capacity = match self.prompt("Enter ride capacity: ")? {
                    Some(capacity) => capacity,
                    None => return Ok(false),
                };

                match config::parse_capacity(&capacity) {
                    Ok(capacity) => writeln!(self.output, "{}", system.add_ride(name, capacity))?,
                    Err(error) => {
                        warn!(ride = %name, %error, "ride rejected");
                        writeln!(self.output, "Invalid capacity: {}", error)?;
                    }
                }
            }
            Command::AddCustomer => match self.prompt("Enter customer name: ")? {
                Some(name) => writeln!(self.output, "{}", system.add_customer(name))?,
                None => return Ok(false),
            },
            Command::BookTicket => writeln!(self.output, "{}", system.book_next())?,
            Command::CancelTicket => match self.prompt("Enter ride name: ")? {
                Some(name) => writeln!(self.output, "{}", system.cancel_ticket(&name))?,
                None => return Ok(false),
            },
            Command::DisplayRideTickets => match self.prompt("Enter ride name: ")? {
                Some(name) => writeln!(self.output, "{}", system.list_ride_tickets(&name))?,
                None => return Ok(false),
            },
            Command::DisplayRides => writeln!(self.output, "{}", system.list_rides())?,
            Command::Exit => return Ok(false),
        }

        Ok(true)
    }

    fn print_menu(&mut self) -> Result<(), Error> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "Amusement Park Management System using Queue".bold())?;

        for entry in MENU.iter() {
            writeln!(self.output, "{}", entry)?;
        }

        Ok(())
    }

    /// `None` when the input is exhausted
    fn prompt(&mut self, message: &str) -> Result<Option<String>, Error> {
        write!(self.output, "{}", message.cyan())?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

        Ok(Some(line.to_string()))
    }

    fn goodbye(&mut self) -> Result<(), Error> {
        writeln!(self.output, "Exiting program. Goodbye!")?;
        self.output.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, system: &mut ParkSystem) -> String {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());

        console.run(system).unwrap();

        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn parses_menu_choices() {
        assert_eq!(Command::from_choice("1"), Some(Command::AddRide));
        assert_eq!(Command::from_choice(" 6 \n"), Some(Command::DisplayRides));
        assert_eq!(Command::from_choice("7"), Some(Command::Exit));
        assert_eq!(Command::from_choice("0"), None);
        assert_eq!(Command::from_choice("8"), None);
        assert_eq!(Command::from_choice("book"), None);
    }

    #[test]
    fn coaster_session() {
        let mut system = ParkSystem::new();

        let output = run("1\nCoaster\n1\n2\nAlice\n2\nBob\n3\n3\n6\n4\nCoaster\n6\n7\n", &mut system);

        assert!(output.contains("Ride added: Coaster"));
        assert!(output.contains("Customer added: Alice"));
        assert!(output.contains("Customer added: Bob"));
        assert!(output.contains("Ticket booked successfully for Alice on Coaster!"));
        assert!(output.contains("No available tickets. Customer removed from queue!"));

        let full = output.find("Coaster (Capacity: 0 available)").unwrap();
        let canceled = output.find("Ticket canceled for ride: Coaster").unwrap();
        let freed = output.find("Coaster (Capacity: 1 available)").unwrap();
        assert!(full < canceled && canceled < freed);

        assert!(output.ends_with("Exiting program. Goodbye!\n"));
        assert_eq!(system.waiting_customers().count(), 0);
    }

    #[test]
    fn ride_names_keep_inner_spaces() {
        let mut system = ParkSystem::new();

        let output = run("1\nHaunted House\n2\n5\nHaunted House\n7\n", &mut system);

        assert_eq!(system.rides()[0].name(), "Haunted House");
        assert!(output.contains("No tickets booked for Haunted House!"));
    }

    #[test]
    fn invalid_input_is_reported() {
        let mut system = ParkSystem::new();

        let output = run("9\nabc\n1\nWheel\n-2\n1\nWheel\nlots\n5\nWheel\n7\n", &mut system);

        assert_eq!(output.matches("Invalid choice! Please try again.").count(), 2);
        assert_eq!(output.matches("Invalid capacity:").count(), 2);
        assert!(output.contains("Ride not found!"));
        assert!(system.rides().is_empty());
    }

    #[test]
    fn end_of_input_exits() {
        let mut system = ParkSystem::new();

        let output = run("2\nAlice\n", &mut system);

        assert!(output.ends_with("Exiting program. Goodbye!\n"));
        assert_eq!(system.waiting_customers().collect::<Vec<_>>(), vec!["Alice"]);

        let output = run("1\nCoaster\n", &mut system);

        assert!(output.ends_with("Exiting program. Goodbye!\n"));
        assert!(system.rides().is_empty());
    }

    #[test]
    fn handles_windows_line_endings() {
        let mut system = ParkSystem::new();

        run("1\r\nCoaster\r\n2\r\n4\r\nCoaster\r\n7\r\n", &mut system);

        assert_eq!(system.rides()[0].name(), "Coaster");
        assert_eq!(system.rides()[0].available(), 2);
    }
}
