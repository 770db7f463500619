pub mod args;

pub use args::{parse_date, Args, FontChoice};
