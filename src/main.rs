use std::process::ExitCode;

use trebuchet::driver::{format_sum, run};
use trebuchet::input::INPUT_PATH;

fn main() -> ExitCode {
    env_logger::init();

    match run(INPUT_PATH) {
        Ok(total) => {
            println!("{}", format_sum(total));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
