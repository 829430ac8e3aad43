pub mod events;
pub mod match_state;
pub mod serialization;
