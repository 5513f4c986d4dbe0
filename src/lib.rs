pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod greeting;
pub mod util;
