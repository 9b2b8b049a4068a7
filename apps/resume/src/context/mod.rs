// Input side: turns the user's data file into a validated Profile.

pub mod ingest;

pub use ingest::load_profile;
