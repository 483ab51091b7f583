use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, Command};
use tracing::{info, warn};

use vcp_verifier::proof::{verify_audit_proof, verify_proof_file};
use vcp_verifier::{AppConfig, AuditProof, ExplorerClient, VerifyResult};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("vcp-verifier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Verify VCP audit-log Merkle proofs locally (\"verify, don't trust\")")
        .arg(
            Arg::new("event-id")
                .short('e')
                .long("event-id")
                .value_name("ID")
                .help("Verify the proof for a specific event instead of the latest one"),
        )
        .arg(
            Arg::new("proof-file")
                .short('f')
                .long("proof-file")
                .value_name("PATH")
                .help("Verify a saved proof JSON offline, without contacting the explorer"),
        )
        .arg(
            Arg::new("limit")
                .short('n')
                .long("limit")
                .value_name("N")
                .default_value("5")
                .help("How many recent events to list"),
        )
        .arg(
            Arg::new("max-depth")
                .short('d')
                .long("max-depth")
                .value_name("N")
                .help("Cap on proof path length (overrides VCP_MAX_PROOF_DEPTH)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress output except errors"),
        )
        .get_matches();

    let quiet = matches.get_flag("quiet");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if quiet { "error".into() } else { "vcp_verifier=info".into() }
            }),
        )
        .init();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(depth) = matches.get_one::<String>("max-depth") {
        config.max_proof_depth = depth
            .parse()
            .map_err(|e| anyhow!("Invalid --max-depth: {}", e))?;
    }

    let result = if let Some(path) = matches.get_one::<String>("proof-file") {
        verify_proof_file(path, config.max_proof_depth)
            .with_context(|| format!("Failed to verify proof file: {}", path))?
    } else {
        let limit: usize = matches
            .get_one::<String>("limit")
            .unwrap()
            .parse()
            .map_err(|e| anyhow!("Invalid --limit: {}", e))?;
        let event_id = matches.get_one::<String>("event-id").map(String::as_str);
        run_quickstart(&config, event_id, limit, quiet).await?
    };

    if !quiet {
        println!("{}", result.summary());
    }

    if !result.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}

/// The quickstart flow: status, recent events, then fetch and locally
/// verify one event's inclusion proof.
async fn run_quickstart(
    config: &AppConfig,
    event_id: Option<&str>,
    limit: usize,
    quiet: bool,
) -> Result<VerifyResult> {
    let client = ExplorerClient::new(config.api_base.clone(), config.api_key.clone());

    if config.api_key.is_none() {
        warn!("VCP_API_KEY not set; authenticated endpoints may be unavailable");
    }

    let status = client
        .system_status()
        .await
        .context("Failed to fetch system status")?;
    if !quiet {
        println!(
            "Explorer status: {} events, VCP {}, API {}",
            status
                .total_events
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string()),
            status.vcp_version.as_deref().unwrap_or("1.0"),
            status.api_version.as_deref().unwrap_or("1.1"),
        );
        if let Some(anchor) = &status.last_anchor {
            println!(
                "Last anchor:     {} block #{}",
                anchor.network.as_deref().unwrap_or("?"),
                anchor
                    .block_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "?".to_string()),
            );
        }
    }

    let target_id = match event_id {
        Some(id) => id.to_string(),
        None => {
            let events = client
                .list_events(limit)
                .await
                .context("Failed to list events")?;

            if !quiet {
                for event in &events {
                    println!(
                        "  {:3} | {:8} | {} | {}",
                        event.header.event_type,
                        event.header.symbol.as_deref().unwrap_or("?"),
                        event.header.event_id,
                        event.header.timestamp_iso.format("%Y-%m-%dT%H:%M:%S"),
                    );
                }
            }

            events
                .first()
                .map(|e| e.header.event_id.to_string())
                .ok_or_else(|| anyhow!("No events available to verify"))?
        }
    };

    info!("Verifying inclusion proof for event {}", target_id);
    let response = client
        .fetch_proof(&target_id)
        .await
        .context("Failed to fetch proof")?;

    if !quiet {
        println!("Event hash:  {}", response.event_hash);
        println!("Merkle root: {}", response.merkle_root);
        println!("Proof steps: {}", response.proof_path.len());
    }

    let proof = AuditProof::from_response(&response).context("Malformed proof response")?;
    Ok(verify_audit_proof(&proof, config.max_proof_depth))
}
