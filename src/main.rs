use std::process::ExitCode;

use faucet_client::bootstrap::run;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    if let Err(e) = run().await {
        tracing::error!("Faucet client error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
