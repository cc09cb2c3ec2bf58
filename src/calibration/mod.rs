pub mod error;
pub mod line;
pub mod scanner;
pub mod token;

pub use error::{CalibrationError, LineError};
pub use line::evaluate_line;
pub use scanner::{scan_line, TokenSet};
pub use token::{parse_token, Token};
