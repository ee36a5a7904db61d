use classic_cipher::core::job::{load_job, read_text};
use classic_cipher::utils::{logger, validation::Validate};
use classic_cipher::{run_job, CipherError, CliConfig};
use clap::Parser;

fn exit_with(e: &CipherError) -> ! {
    tracing::error!(
        "Cipher run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let mut config = match config.load_file() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if !config.has_text_source() {
        tracing::debug!("No text or input file given, reading stdin");
        match read_text(tokio::io::stdin()).await {
            Ok(text) => config.text = Some(text),
            Err(e) => exit_with(&e),
        }
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let job = match load_job(&config).await {
        Ok(job) => job,
        Err(e) => exit_with(&e),
    };

    let output = match run_job(&job) {
        Ok(output) => output,
        Err(e) => exit_with(&e),
    };

    if config.json {
        match output.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(&e),
        }
    } else {
        println!("{}", output.text);
    }

    Ok(())
}
