/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::io::{self, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ConsoleConfig;
use crate::console::input::{parse_destination, parse_fleet_size, parse_origin, InputError};
use crate::dispatcher::Dispatcher;

const MENU: &str = "\nPress:\n\
    [a] - adding new person\n\
    [s] - step all elevators\n\
    [e] - print status of elevators\n\
    [p] - show where people are waiting\n\
    [q] - quit";

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuOption {
    AddPerson,
    Step,
    Status,
    Waiting,
    Quit,
}

impl MenuOption {
    fn parse(line: &str) -> Option<MenuOption> {
        match line.trim() {
            "a" => Some(MenuOption::AddPerson),
            "s" => Some(MenuOption::Step),
            "e" => Some(MenuOption::Status),
            "p" => Some(MenuOption::Waiting),
            "q" => Some(MenuOption::Quit),
            _ => None,
        }
    }
}

/**
 * Interactive front end of the simulation.
 *
 * The console reads user input line by line from a channel, validates it and turns it into
 * dispatcher calls. It owns the dispatcher for the whole session, so every command runs to
 * completion before the next line is read.
 *
 * # Fields
 * - `input_rx`:    Lines typed by the user. A disconnected channel ends the session.
 * - `output`:      Where prompts and reports are written.
 * - `config`:      Console settings.
 */
pub struct Console<W: Write> {
    input_rx: cbc::Receiver<String>,
    output: W,
    config: ConsoleConfig,
}

impl<W: Write> Console<W> {
    pub fn new(config: &ConsoleConfig, input_rx: cbc::Receiver<String>, output: W) -> Console<W> {
        Console {
            input_rx,
            output,
            config: config.clone(),
        }
    }

    /**
     * Runs the session until the user quits or input ends.
     *
     * `fleet_size` skips the fleet size prompt and must already be validated. Returns the
     * dispatcher in its final state, or `None` when input ended before a fleet was created.
     */
    pub fn run(&mut self, fleet_size: Option<usize>) -> io::Result<Option<Dispatcher>> {
        let n_elevators = match fleet_size {
            Some(n_elevators) => n_elevators,
            None => match self.prompt("How many elevators?", parse_fleet_size)? {
                Some(n_elevators) => n_elevators,
                None => return Ok(None),
            },
        };

        let mut dispatcher = Dispatcher::new(n_elevators);
        info!("Simulation started with {} elevator(s)", n_elevators);

        loop {
            writeln!(self.output, "{}", MENU)?;
            let line = match self.read_line() {
                Some(line) => line,
                None => break,
            };

            match MenuOption::parse(&line) {
                Some(MenuOption::AddPerson) => {
                    if !self.add_person(&mut dispatcher)? {
                        break;
                    }
                }
                Some(MenuOption::Step) => {
                    dispatcher.step();
                    if self.config.status_after_step {
                        self.print_status(&dispatcher)?;
                    }
                }
                Some(MenuOption::Status) => self.print_status(&dispatcher)?,
                Some(MenuOption::Waiting) => self.print_waiting(&dispatcher)?,
                Some(MenuOption::Quit) => {
                    writeln!(self.output, "Closing...")?;
                    break;
                }
                None => {
                    warn!("Unknown menu option {:?}", line);
                    writeln!(
                        self.output,
                        "Wrong option, please choose one from options below:"
                    )?;
                }
            }
        }

        info!(
            "Simulation ended, {} passenger(s) delivered, {} still waiting",
            dispatcher.passengers_delivered(),
            dispatcher.waiting().total()
        );
        Ok(Some(dispatcher))
    }

    fn read_line(&self) -> Option<String> {
        self.input_rx.recv().ok()
    }

    // Asks until a valid answer is given. None when input ends first.
    fn prompt<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        writeln!(self.output, "{}", question)?;
        while let Some(line) = self.read_line() {
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    warn!("Rejected input {:?}: {}", line, e);
                    writeln!(self.output, "{}\n{}", e, question)?;
                }
            }
        }
        Ok(None)
    }

    // Returns false when input ended in the middle of the request.
    fn add_person(&mut self, dispatcher: &mut Dispatcher) -> io::Result<bool> {
        let origin = match self.prompt("On which floor: ", parse_origin)? {
            Some(origin) => origin,
            None => return Ok(false),
        };
        let destination =
            match self.prompt("Where to go: ", |line| parse_destination(line, origin))? {
                Some(destination) => destination,
                None => return Ok(false),
            };

        let elevator_id = dispatcher.pickup(origin, destination);
        writeln!(
            self.output,
            "Elevator {} will take the person from floor {} to floor {}",
            elevator_id, origin, destination
        )?;
        Ok(true)
    }

    fn print_status(&mut self, dispatcher: &Dispatcher) -> io::Result<()> {
        for status in dispatcher.status() {
            if self.config.json_status {
                serde_json::to_writer(&mut self.output, &status)?;
                writeln!(self.output)?;
            } else {
                writeln!(self.output, "{}", status)?;
            }
        }
        Ok(())
    }

    fn print_waiting(&mut self, dispatcher: &Dispatcher) -> io::Result<()> {
        for (floor, count) in dispatcher.where_are_waiting() {
            if count == 1 {
                writeln!(self.output, "There is 1 person waiting on the floor {}", floor)?;
            } else {
                writeln!(
                    self.output,
                    "There are {} people waiting on the floor {}",
                    count, floor
                )?;
            }
        }
        Ok(())
    }
}
