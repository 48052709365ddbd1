use std::process::ExitCode;

fn main() -> ExitCode {
    redmine_instances::run()
}
