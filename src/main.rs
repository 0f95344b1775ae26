use std::{env::args, process::exit};

use log::error;
use sandrs::{config::USAGE, view, Command, Config, Error};

fn try_main() -> Result<(), Error> {
    match Config::parse(args().skip(1))? {
        Command::Run(config) => view::run(&config),
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = try_main() {
        error!("{err}");
        match err {
            Error::Config(_) => eprintln!("[error] {err}\n\n{USAGE}"),
            Error::Io(_) => eprintln!("[error] {err}"),
        }
        exit(1);
    }
}
