use pricedash_client::commands;
use pricedash_client::commands::dash::DashOptions;
use pricedash_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Dash { uploads, item, .. } => commands::dash::run(DashOptions {
            uploads: uploads.to_options(),
            item: item.clone(),
        }),
        Commands::Items { uploads, .. } => commands::items::run(uploads.to_options()),
        Commands::Chart { uploads, item } => commands::chart::run(DashOptions {
            uploads: uploads.to_options(),
            item: item.clone(),
        }),
    }
}
