pub mod ambassador;
pub mod serve;
pub mod waitlist;
