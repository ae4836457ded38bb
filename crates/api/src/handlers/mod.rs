pub mod bloqs;
pub mod lockers;
pub mod rents;
