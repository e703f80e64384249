//! Command vocabulary and argument validation.
//!
//! The external interface is a closed set of six commands; each arm
//! validates its own arity and numeric arguments before any engine state
//! is touched. Every parse failure surfaces as `INVALID_COMMAND`.

use crate::geo::Point;

/// A validated command, one per input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddDriver {
        id: String,
        location: Point,
    },
    AddRider {
        id: String,
        location: Point,
    },
    Match {
        rider_id: String,
    },
    StartRide {
        ride_id: String,
        /// 1-based index into the rider's match snapshot.
        match_index: usize,
        rider_id: String,
    },
    StopRide {
        ride_id: String,
        destination: Point,
        duration_min: f64,
    },
    Bill {
        ride_id: String,
    },
}

/// Why a `(command, args)` pair could not be turned into a [Command].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand,
    WrongArity { expected: usize, got: usize },
    MalformedNumber,
}

impl Command {
    /// Build a command from a pre-tokenized `(command, args)` pair.
    pub fn from_parts(command: &str, args: &[&str]) -> Result<Self, ParseError> {
        match command {
            "ADD_DRIVER" => {
                expect_arity(args, 3)?;
                Ok(Command::AddDriver {
                    id: args[0].to_string(),
                    location: parse_point(args[1], args[2])?,
                })
            }
            "ADD_RIDER" => {
                expect_arity(args, 3)?;
                Ok(Command::AddRider {
                    id: args[0].to_string(),
                    location: parse_point(args[1], args[2])?,
                })
            }
            "MATCH" => {
                expect_arity(args, 1)?;
                Ok(Command::Match {
                    rider_id: args[0].to_string(),
                })
            }
            "START_RIDE" => {
                expect_arity(args, 3)?;
                Ok(Command::StartRide {
                    ride_id: args[0].to_string(),
                    match_index: parse_index(args[1])?,
                    rider_id: args[2].to_string(),
                })
            }
            "STOP_RIDE" => {
                expect_arity(args, 4)?;
                Ok(Command::StopRide {
                    ride_id: args[0].to_string(),
                    destination: parse_point(args[1], args[2])?,
                    duration_min: parse_number(args[3])?,
                })
            }
            "BILL" => {
                expect_arity(args, 1)?;
                Ok(Command::Bill {
                    ride_id: args[0].to_string(),
                })
            }
            _ => Err(ParseError::UnknownCommand),
        }
    }

    /// Tokenize a raw input line (space-separated, no quoting) and parse it.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next().ok_or(ParseError::UnknownCommand)?;
        let args: Vec<&str> = tokens.collect();
        Self::from_parts(command, &args)
    }
}

fn expect_arity(args: &[&str], expected: usize) -> Result<(), ParseError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ParseError::WrongArity {
            expected,
            got: args.len(),
        })
    }
}

fn parse_number(token: &str) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::MalformedNumber)
}

fn parse_index(token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::MalformedNumber)
}

fn parse_point(x: &str, y: &str) -> Result<Point, ParseError> {
    Ok(Point::new(parse_number(x)?, parse_number(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_command_shape() {
        assert_eq!(
            Command::from_parts("ADD_DRIVER", &["D1", "2", "1"]),
            Ok(Command::AddDriver {
                id: "D1".to_string(),
                location: Point::new(2.0, 1.0),
            })
        );
        assert_eq!(
            Command::from_parts("START_RIDE", &["RIDE-101", "1", "R2"]),
            Ok(Command::StartRide {
                ride_id: "RIDE-101".to_string(),
                match_index: 1,
                rider_id: "R2".to_string(),
            })
        );
        assert_eq!(
            Command::from_parts("STOP_RIDE", &["RIDE-101", "6", "7", "32"]),
            Ok(Command::StopRide {
                ride_id: "RIDE-101".to_string(),
                destination: Point::new(6.0, 7.0),
                duration_min: 32.0,
            })
        );
        assert_eq!(
            Command::from_parts("BILL", &["RIDE-101"]),
            Ok(Command::Bill {
                ride_id: "RIDE-101".to_string(),
            })
        );
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert_eq!(
            Command::from_parts("SOME_RANDOM_COMMAND", &[]),
            Err(ParseError::UnknownCommand)
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert_eq!(
            Command::from_parts("MATCH", &[]),
            Err(ParseError::WrongArity {
                expected: 1,
                got: 0,
            })
        );
        assert_eq!(
            Command::from_parts("ADD_RIDER", &["R1", "0", "1", "extra"]),
            Err(ParseError::WrongArity {
                expected: 3,
                got: 4,
            })
        );
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert_eq!(
            Command::from_parts("ADD_DRIVER", &["D1", "x", "1"]),
            Err(ParseError::MalformedNumber)
        );
        assert_eq!(
            Command::from_parts("START_RIDE", &["RIDE-1", "-1", "R1"]),
            Err(ParseError::MalformedNumber)
        );
    }

    #[test]
    fn parse_line_tokenizes_on_whitespace() {
        assert_eq!(
            Command::parse_line("MATCH R1"),
            Ok(Command::Match {
                rider_id: "R1".to_string(),
            })
        );
        assert_eq!(Command::parse_line(""), Err(ParseError::UnknownCommand));
    }
}
