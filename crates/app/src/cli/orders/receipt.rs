use booknest::receipt::render_receipt;
use booknest_app::{
    database::{self, Db},
    domain::orders::{OrdersService, PgOrdersService, models::OrderUuid},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct ReceiptArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Order UUID
    #[arg(long)]
    order: OrderUuid,
}

pub(crate) async fn run(args: ReceiptArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let order = PgOrdersService::new(Db::new(pool))
        .get_order(args.order)
        .await
        .map_err(|error| format!("failed to load order: {error}"))?;

    println!("order: {}", order.uuid);
    println!("status: {}", order.status);
    println!("placed: {}", order.created_at);
    println!("ship to: {}", order.shipping_address);
    println!("{}", render_receipt(&order.receipt_lines()));

    Ok(())
}
