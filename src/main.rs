use clap::Parser;
use pair_sum::app;
use pair_sum::utils::logger;
use pair_sum::{CliConfig, OutputFormat};

fn main() {
    let config = CliConfig::parse();
    let verbose = config.verbose;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    // 初始化日誌
    let code = app::run(
        &config,
        stdin.lock(),
        stdout.lock(),
        &mut stderr,
        |format| match format {
            OutputFormat::Json => logger::init_json_logger(verbose),
            OutputFormat::Text => logger::init_cli_logger(verbose),
        },
    );

    std::process::exit(code);
}
