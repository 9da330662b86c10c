use std::{env, io::Write, process::ExitCode};

use ratio64::{
    config::{config_path, load_config},
    eval::Expression,
};

fn main() -> ExitCode {
    // load environment variables from `.env` if present
    let _ = dotenv::dotenv();
    // use INFO log level by default, RUST_LOG overrides it
    let log_env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(log_env)
        .format(|buf, record| {
            let ts = buf.timestamp_seconds();
            writeln!(buf, "[{}] {}: {}", record.level(), ts, record.args())
        })
        .init();

    let path = config_path();
    let config = match load_config(&path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load {path}: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let result = Expression::parse_args(&args, config.approximation.denominator)
        .and_then(|expression| expression.evaluate());
    match result {
        Ok(value) => {
            println!("{}", value.render(config.output.decimal));
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to evaluate {:?}: {}", args.join(" "), err);
            ExitCode::FAILURE
        }
    }
}
