//! Features command.

use clap::Args;
use tracing::instrument;

use lexis_core::Engine;

/// Arguments for the `features` subcommand.
#[derive(Args, Debug, Default)]
pub struct FeaturesArgs {}

/// List the analysis features the engine supports.
#[instrument(name = "cmd_features", skip_all)]
pub fn cmd_features(_args: FeaturesArgs, global_json: bool, engine: &Engine) -> anyhow::Result<()> {
    let features = engine.supported_features();
    if global_json {
        println!("{}", serde_json::to_string_pretty(features)?);
    } else {
        for feature in features {
            println!("{feature}");
        }
    }
    Ok(())
}
