pub mod elevator;
pub mod queue;

pub use elevator::Elevator;
