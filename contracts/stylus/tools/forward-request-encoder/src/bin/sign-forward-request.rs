use std::{fs, io::Read, path::PathBuf};

use alloy_primitives::Address;
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use k256::ecdsa::SigningKey;
use serde_json::json;

use forward_request_encoder::{
    context::{forward_request_digest, ForwarderDomain},
    encoder::{encode_execute_calldata, sign_request, signer_address},
    types::RequestFile,
};

/// Sign a forward request for the MinimalForwarder and print the relayer calldata as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON request file (`to`, `gas`, optional `from`/`value`/`nonce`/`data`).
    /// Reads stdin if omitted.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Originator private key (hex string, 0x...).
    #[arg(long, env = "SIGNER_PKEY", hide_env_values = true)]
    private_key: String,

    /// Chain id of the EIP-712 domain.
    #[arg(long, env = "CHAIN_ID")]
    chain_id: u64,

    /// Forwarder contract address (EIP-712 verifying contract).
    #[arg(long, env = "FORWARDER_ADDRESS")]
    forwarder: Address,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = read_request(&cli)?;
    let file: RequestFile =
        serde_json::from_str(&raw).context("failed parsing forward request JSON")?;

    let signing_key = parse_signing_key(&cli.private_key)?;
    let signer = signer_address(&signing_key);
    if let Some(from) = file.from {
        if from != signer {
            bail!("request `from` {from} does not match signer {signer}");
        }
    }

    let req = file.into_request(signer);
    let domain = ForwarderDomain::new(cli.chain_id, cli.forwarder);
    let signature = sign_request(&domain, &req, &signing_key)
        .map_err(|e| anyhow!("failed signing forward request: {e}"))?;

    eprintln!(
        "signed forward request from {} to {} (nonce {})",
        req.from, req.to, req.nonce
    );

    let out = json!({
        "from": signer,
        "digest": forward_request_digest(&domain, &req),
        "signature": format!("0x{}", hex::encode(signature)),
        "calldata": format!("0x{}", hex::encode(encode_execute_calldata(&req, &signature))),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).context("failed serialising output JSON")?
    );
    Ok(())
}

fn read_request(cli: &Cli) -> Result<String> {
    match cli.request {
        Some(ref path) => fs::read_to_string(path)
            .with_context(|| format!("failed reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed reading request from stdin")?;
            Ok(buf)
        }
    }
}

fn parse_signing_key(raw: &str) -> Result<SigningKey> {
    let bytes = hex::decode(raw.trim().trim_start_matches("0x"))
        .context("private key is not valid hex")?;
    SigningKey::from_slice(&bytes).map_err(|e| anyhow!("invalid private key: {e}"))
}
