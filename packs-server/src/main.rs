use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use packs_server::{config::load_config, logging, routes::SharedCalculator, serve};
use packs_solver::Strategy;
use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info};

fn cli() -> Command {
    Command::new("packs-server")
        .about("Serves optimal pack breakdowns over HTTP")
        .arg(
            Arg::new("config")
                .long("config")
                .help("Pack configuration json string or path to json file")
                .default_value("packs.json")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("(Optional) Set address to listen on")
                .default_value("0.0.0.0")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .help("(Optional) Set port to listen on")
                .default_value("8080")
                .value_parser(value_parser!(u16)),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .help("(Optional) Override the strategy from the config file")
                .value_parser(["search", "dynamic"]),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .help("(Optional) Set log output format")
                .default_value("json")
                .value_parser(["json", "pretty"]),
        )
}

#[tokio::main]
async fn main() {
    let matches = cli().get_matches();

    let log_format = matches
        .get_one::<String>("log-format")
        .and_then(|format| format.parse().ok())
        .unwrap_or_default();
    logging::init(log_format);

    if let Err(e) = run(&matches).await {
        error!("cannot start server: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(matches: &ArgMatches) -> Result<()> {
    let config = matches.get_one::<String>("config").unwrap();
    let host = matches.get_one::<String>("host").unwrap();
    let port = *matches.get_one::<u16>("port").unwrap();
    let strategy = matches
        .get_one::<String>("strategy")
        .map(|strategy| strategy.parse::<Strategy>())
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let calculator = load_config(config)
        .and_then(|config| config.into_calculator(strategy))
        .context("cannot load pack config")?;

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", host, port))?;

    info!(
        port,
        packs = ?calculator.catalog().sizes(),
        strategy = %calculator.strategy(),
        "starting server"
    );

    let calculator: SharedCalculator = Arc::new(calculator);
    serve(calculator, addr, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("received shutdown signal");
    })
    .await
}
