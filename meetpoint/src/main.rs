use clap::Parser;
use meetpoint::app::{MeetPointApp, MeetPointAppError};

fn main() -> Result<(), MeetPointAppError> {
    env_logger::init();
    let args = MeetPointApp::parse();
    args.op.run()
}
