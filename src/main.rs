use clap::Parser;
use std::path::Path;
use std::sync::Arc;

use siteweaver::cli::Args;
use siteweaver::client::CompletionClient;
use siteweaver::config::Config;
use siteweaver::emit;
use siteweaver::ledger::SpendLedger;
use siteweaver::pipeline::Generator;
use siteweaver::provider;
use siteweaver::ux;
use siteweaver::wire::GenerationRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut cfg = Config::load(args.config.as_deref().map(Path::new))?;
    if let Some(p) = args.provider.clone() {
        cfg.provider = p;
    }
    if let Some(m) = args.model.clone() {
        cfg.model = m;
    }
    if let Some(e) = args.endpoint.clone() {
        cfg.endpoint = Some(e);
    }
    if let Some(t) = args.timeout_secs {
        cfg.timeout_secs = t;
    }
    if let Some(c) = args.ceiling_usd {
        cfg.spend_ceiling_usd = c;
    }
    cfg.validate()?;

    let mut request = GenerationRequest::new(args.prompt.clone())?;
    if let Some(a) = args.archetype {
        request = request.with_archetype(a);
    }

    let prov = provider::make_provider(
        cfg.provider.clone(),
        cfg.model.clone(),
        cfg.timeout_secs,
        cfg.endpoint.clone(),
    )?;
    let ledger = Arc::new(SpendLedger::new(cfg.spend_ceiling_usd));
    let client = CompletionClient::new(prov, ledger, cfg.estimated_call_cost_usd);
    let generator = Generator::new(cfg.detector(), client);

    let outcome = generator.generate(&request).await;
    ux::print_outcome_dashboard(&outcome);

    match args.out {
        Some(dir) => {
            let summary = emit::emit_bundle(Path::new(&dir), &outcome.bundle)?;
            ux::print_emit_dashboard(&summary);
        }
        None => println!("{}", serde_json::to_string_pretty(&outcome.bundle)?),
    }

    Ok(())
}
