use failure::{Error, Fail};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Debug, Fail)]
#[fail(display = "validation failed because of \"{}\"", error)]
pub struct ValidationError {
    error: String,
}

impl ValidationError {
    fn new(error: String) -> ValidationError {
        ValidationError { error }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RideConfig {
    pub name: String,
    pub capacity: u32, // Maximum number of ticket holders at the same time
}

/// Rides and customers present in the park when the console starts
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ParkConfig {
    #[serde(default)]
    pub rides: Vec<RideConfig>,
    #[serde(default)]
    pub customers: Vec<String>,
}

impl ParkConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ParkConfig, Error> {
        let file = File::open(path.as_ref())?;

        let config: ParkConfig = serde_json::from_reader(file)?;

        validate(&config)?;

        Ok(config)
    }
}

pub fn validate(config: &ParkConfig) -> Result<(), Error> {
    for (index, ride) in config.rides.iter().enumerate() {
        if ride.name.trim().is_empty() {
            return Err(ValidationError::new(format!("There is ride #{} without a name", index)).into());
        }

        if ride.capacity == 0 {
            return Err(ValidationError::new(format!("There is ride \"{}\" with invalid capacity", ride.name)).into());
        }
    }

    for (index, customer) in config.customers.iter().enumerate() {
        if customer.trim().is_empty() {
            return Err(ValidationError::new(format!("There is customer #{} without a name", index)).into());
        }
    }

    Ok(())
}

/// Capacity typed by the operator; must be a positive integer
pub fn parse_capacity(input: &str) -> Result<u32, Error> {
    let input = input.trim();

    let capacity: i64 = input
        .parse()
        .map_err(|_| ValidationError::new(format!("\"{}\" is not a whole number", input)))?;

    if capacity <= 0 || capacity > i64::from(u32::MAX) {
        return Err(ValidationError::new(format!("capacity {} is out of range", capacity)).into());
    }

    Ok(capacity as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_file_with_missing_sections() {
        let config: ParkConfig = serde_json::from_str(r#"{ "rides": [{ "name": "Coaster", "capacity": 2 }] }"#).unwrap();

        assert_eq!(config.rides, vec![RideConfig { name: "Coaster".to_string(), capacity: 2 }]);
        assert!(config.customers.is_empty());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn rejects_zero_capacity_ride() {
        let config = ParkConfig {
            rides: vec![RideConfig { name: "Wheel".to_string(), capacity: 0 }],
            customers: vec![],
        };

        let error = validate(&config).unwrap_err();

        assert!(error.to_string().contains("\"Wheel\" with invalid capacity"));
    }

    #[test]
    fn rejects_blank_names() {
        let config = ParkConfig {
            rides: vec![RideConfig { name: "  ".to_string(), capacity: 3 }],
            customers: vec![],
        };
        assert!(validate(&config).is_err());

        let config = ParkConfig {
            rides: vec![],
            customers: vec!["Alice".to_string(), "".to_string()],
        };
        assert!(validate(&config).unwrap_err().to_string().contains("customer #1"));
    }

    #[test]
    fn capacity_must_be_positive_integer() {
        assert_eq!(parse_capacity(" 4 \n").unwrap(), 4);
        assert!(parse_capacity("0").is_err());
        assert!(parse_capacity("-3").is_err());
        assert!(parse_capacity("ten").is_err());
        assert!(parse_capacity("").is_err());
        assert!(parse_capacity("99999999999").is_err());
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        assert!(ParkConfig::load("/nonexistent/park.json").is_err());
    }
}
