pub mod console;
pub mod input;
pub mod console_tests;

pub use console::Console;
pub use input::spawn_stdin_reader;
pub use input::validate_fleet_size;
