pub mod macros;
pub mod structs;
pub mod waiting_registry;
pub mod shared_tests;

pub use structs::Call;
pub use structs::Direction;
pub use structs::Floor;
pub use structs::Passenger;
pub use structs::PassengerId;
pub use structs::{MAX_ELEVATORS, MAX_FLOOR};
pub use waiting_registry::WaitingRegistry;
