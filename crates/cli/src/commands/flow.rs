//! Multi-step flow commands.

use catalog_admin::{create_product_flow, create_product_flow_with_title};
use clap::Subcommand;

use super::{CommandError, Context, print_json};

#[derive(Subcommand)]
pub enum FlowAction {
    /// Create a "{Color} Snowboard" and price its first variant at 100.00
    Snowboard {
        /// Use this title instead of a random color
        #[arg(long)]
        title: Option<String>,
    },
}

pub async fn run(context: &Context, action: FlowAction) -> Result<(), CommandError> {
    match action {
        FlowAction::Snowboard { title } => {
            let outcome = match title {
                Some(title) => create_product_flow_with_title(&context.products, title).await?,
                None => create_product_flow(&context.products).await?,
            };
            print_json(&outcome)
        }
    }
}
