use std::process::ExitCode;

fn main() -> ExitCode {
    worms::run()
}
