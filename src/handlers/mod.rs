pub mod rides;
pub mod search;
