//! Terminal front end for the faucet session.

use std::str::FromStr;
use std::sync::Arc;

use alloy_signer_local::PrivateKeySigner;
use dotenvy::dotenv;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::chain::alloy_client::{AlloyChainReader, AlloyFaucetWriter};
use crate::chain::FaucetWriter;
use crate::config::{FaucetConfig, ENV_PRIVATE_KEY};
use crate::errors::{ConfigError, FaucetError};
use crate::provider::{create_read_provider, create_signing_provider, ProviderConfig};
use crate::session::{FaucetSession, SessionState, StatusMessage};
use crate::types::action::FaucetAction;

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = FaucetConfig::from_env()?;
    let private_key = dotenvy::var(ENV_PRIVATE_KEY).ok();
    let session = connect(config, private_key.as_deref())?;

    let stdin = BufReader::new(tokio::io::stdin());
    let result = serve_terminal(&session, stdin, tokio::io::stdout()).await;
    session.shutdown();

    result
}

/// Build the alloy providers for `config` and wrap them in a session
///
/// Without a private key the session has no writer, which reads as "no
/// wallet connected". Nothing is sent to the RPC endpoint here.
///
/// # Errors
///
/// [`FaucetError::Config`] for a malformed private key and
/// [`FaucetError::Rpc`] for an unusable RPC URL.
pub fn connect(
    config: FaucetConfig,
    private_key: Option<&str>,
) -> Result<FaucetSession, FaucetError> {
    let provider_config = ProviderConfig::from(&config);
    let reader = AlloyChainReader::new(create_read_provider(&provider_config)?);

    let writer: Option<Arc<dyn FaucetWriter>> = match private_key {
        Some(key) => {
            let signer = PrivateKeySigner::from_str(key.trim())
                .map_err(|e| ConfigError::InvalidSigner(e.to_string()))?;
            info!(account = %signer.address(), "Wallet connected");
            let provider = create_signing_provider(&provider_config, signer)?;
            Some(Arc::new(AlloyFaucetWriter::new(provider)))
        }
        None => {
            warn!("{ENV_PRIVATE_KEY} not set, mint and claim are disabled");
            None
        }
    };

    info!(
        chain = %config.chain,
        faucet = %config.faucet_address,
        rpc_url = %config.rpc_url,
        "Starting faucet session"
    );

    Ok(FaucetSession::new(config, Arc::new(reader), writer))
}

/// A line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `token <address>`
    Token(String),
    /// `receiver <address>`
    Receiver(String),
    /// `amount <value>`
    Amount(String),
    /// `mint` or `claim`
    Submit(FaucetAction),
    /// `refresh`
    Refresh,
    /// `status`
    Status,
    /// `json`
    Json,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            // field edits may clear the field by passing nothing
            "token" => Ok(Command::Token(rest.to_string())),
            "receiver" => Ok(Command::Receiver(rest.to_string())),
            "amount" => Ok(Command::Amount(rest.to_string())),
            "mint" => Ok(Command::Submit(FaucetAction::Mint)),
            "claim" => Ok(Command::Submit(FaucetAction::Claim)),
            "refresh" => Ok(Command::Refresh),
            "status" => Ok(Command::Status),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}', try 'help'")),
        }
    }
}

const HELP: &str = "\
commands:
  token <address>      set the token address (0x000...000 for the native asset)
  receiver <address>   set the receiver address
  amount <value>       set the amount, e.g. 1.5
  mint | claim         submit a faucet transaction
  refresh              fetch the faucet balance now
  status | json        show the form state
  quit
";

/// Read commands from `input` until EOF or `quit`, writing responses to `output`.
///
/// Only one submission runs at a time: a second `mint` or `claim` is refused
/// while the first is still waiting on the chain client.
pub async fn serve_terminal<R, W>(
    session: &FaucetSession,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut in_flight: Option<JoinHandle<()>> = None;

    output.write_all(HELP.as_bytes()).await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<Command>() {
            Err(message) => message,
            Ok(Command::Quit) => break,
            Ok(Command::Help) => HELP.trim_end().to_string(),
            Ok(Command::Token(address)) => {
                session.set_token_address(address);
                "token updated, balance refreshes shortly".to_string()
            }
            Ok(Command::Receiver(address)) => {
                session.set_receiver_address(address);
                "receiver updated".to_string()
            }
            Ok(Command::Amount(amount)) => {
                session.set_amount(amount);
                format!("amount: {}", session.amount_preview())
            }
            Ok(Command::Refresh) => {
                let outcome = session.refresh_balance().await;
                format!("faucet balance: {}", outcome.balance)
            }
            Ok(Command::Status) => render_state(&session.snapshot()),
            Ok(Command::Json) => serde_json::to_string_pretty(&session.snapshot())?,
            Ok(Command::Submit(action)) => {
                let busy = session.is_busy()
                    || in_flight.as_ref().is_some_and(|handle| !handle.is_finished());
                if busy {
                    "a transaction is already being submitted".to_string()
                } else {
                    in_flight = Some(spawn_submission(session.clone(), action));
                    format!("submitting {action}...")
                }
            }
        };

        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    Ok(())
}

fn spawn_submission(session: FaucetSession, action: FaucetAction) -> JoinHandle<()> {
    tokio::spawn(async move {
        match session.submit(action).await {
            Ok(pending) => {
                let tx_hash = pending.transaction().tx_hash;
                let status = pending.wait().await;
                info!(%tx_hash, ?status, "{action} finished");
            }
            Err(e) => warn!(error = %e, "{action} not submitted"),
        }
    })
}

/// Human-readable summary of the form state
pub fn render_state(state: &SessionState) -> String {
    let mut lines = vec![
        format!("token:    {}", state.token_input),
        format!("receiver: {}", state.receiver_input),
        format!(
            "amount:   {} ({})",
            state.amount_input,
            crate::submission::AmountPreview::compute(
                &state.amount_input,
                state.effective_decimals()
            )
        ),
        format!(
            "balance:  {}{}",
            state.balance,
            if state.loading { " (loading)" } else { "" }
        ),
    ];

    if !state.submitting.is_empty() {
        let actions: Vec<&str> = state.submitting.iter().map(FaucetAction::name).collect();
        lines.push(format!("sending:  {}", actions.join(", ")));
    }

    match &state.status {
        Some(StatusMessage::Error(message)) => lines.push(format!("error:    {message}")),
        Some(StatusMessage::Success(message)) => lines.push(format!("ok:       {message}")),
        None => {}
    }

    if let Some(tx) = &state.last_transaction {
        lines.push(format!(
            "last tx:  {} {} ({:?})",
            tx.action, tx.explorer_url, tx.confirmation
        ));
    }

    lines.join("\n")
}
