/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::debug;
use std::io::{self, BufRead};
use std::thread::{Builder, JoinHandle};
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Floor, MAX_ELEVATORS, MAX_FLOOR};

/// Reasons a line typed at the console is rejected. The message is shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Type a number!")]
    NotANumber,
    #[error("Number of elevators must be between 1 - {}!", MAX_ELEVATORS)]
    FleetSizeOutOfRange,
    #[error("Choose floor from 0 to {}!", MAX_FLOOR)]
    FloorOutOfRange,
    #[error("You can't go upper than {} or lower than 0!", MAX_FLOOR)]
    DestinationOutOfRange,
    #[error("Don't call the elevator unless you want to go somewhere!")]
    SameFloor,
}

fn parse_number(line: &str) -> Result<i64, InputError> {
    line.trim().parse::<i64>().map_err(|_| InputError::NotANumber)
}

fn to_floor(value: i64) -> Option<Floor> {
    Floor::try_from(value).ok().filter(|floor| *floor <= MAX_FLOOR)
}

pub fn validate_fleet_size(n_elevators: usize) -> Result<usize, InputError> {
    if (1..=MAX_ELEVATORS).contains(&n_elevators) {
        Ok(n_elevators)
    } else {
        Err(InputError::FleetSizeOutOfRange)
    }
}

pub fn parse_fleet_size(line: &str) -> Result<usize, InputError> {
    let value = parse_number(line)?;
    let n_elevators = usize::try_from(value).map_err(|_| InputError::FleetSizeOutOfRange)?;
    validate_fleet_size(n_elevators)
}

pub fn parse_origin(line: &str) -> Result<Floor, InputError> {
    to_floor(parse_number(line)?).ok_or(InputError::FloorOutOfRange)
}

pub fn parse_destination(line: &str, origin: Floor) -> Result<Floor, InputError> {
    let destination = to_floor(parse_number(line)?).ok_or(InputError::DestinationOutOfRange)?;
    if destination == origin {
        return Err(InputError::SameFloor);
    }
    Ok(destination)
}

/**
 * Spawns the thread that forwards stdin to the console, one line per message.
 *
 * The thread stops at end of input, on a read error, or once the receiving side is gone.
 * Dropping the sender is what tells the console that input has ended.
 */
pub fn spawn_stdin_reader(input_tx: cbc::Sender<String>) -> io::Result<JoinHandle<()>> {
    Builder::new().name("console_input".into()).spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    debug!("Stopped reading stdin: {}", e);
                    break;
                }
            };
            if input_tx.send(line).is_err() {
                break;
            }
        }
        debug!("Console input closed");
    })
}
