use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "order-api")]
#[command(about = "client cli used to place and list orders against the server", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// order related ops
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    #[command(arg_required_else_help = true)]
    Place {
        #[arg(long, help = "Ticker symbol, e.g. AAPL")]
        symbol: String,
        #[arg(long, help = "buy or sell", value_parser = ["buy", "sell"])]
        side: String,
        #[arg(long, help = "Quantity to trade")]
        quantity: f64,
        #[arg(long, help = "Limit price")]
        price: f64,
    },
    List,
}

const HOST: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: i64,
    symbol: String,
    side: String,
    quantity: f64,
    price: f64,
    created_at: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();

    match args.command {
        Commands::Order(order) => match order.command {
            OrderCmds::Place {
                symbol,
                side,
                quantity,
                price,
            } => {
                println!("placing {} order for {}", side, symbol);
                let res = Client::new()
                    .post(format!("{}/{}", HOST, "orders"))
                    .json(&serde_json::json!({
                        "symbol": symbol,
                        "side": side,
                        "quantity": quantity,
                        "price": price,
                    }))
                    .send()
                    .await?;
                match res.status() {
                    StatusCode::OK => {
                        let order = res
                            .json::<OrderResponse>()
                            .await
                            .expect("failed to get response, aborting");
                        println!("order placed successfully, id = {}", order.id);
                    }
                    StatusCode::BAD_REQUEST => {
                        println!("order was rejected, please check the fields and try again");
                    }
                    unexpected => {
                        println!("got unexpected status code, {}", unexpected);
                    }
                }
            }
            OrderCmds::List => {
                let res = Client::new()
                    .get(format!("{}/{}", HOST, "orders"))
                    .send()
                    .await?;
                match res.status() {
                    StatusCode::OK => {
                        let orders = res
                            .json::<Vec<OrderResponse>>()
                            .await
                            .expect("failed to get response, aborting");
                        if orders.is_empty() {
                            println!("no orders yet");
                        }
                        for o in orders {
                            println!(
                                "#{} {} {} qty={} price={} at {}",
                                o.id, o.side, o.symbol, o.quantity, o.price, o.created_at
                            );
                        }
                    }
                    unexpected => {
                        println!("got unexpected status code, {}", unexpected);
                    }
                }
            }
        },
    };
    Ok(())
}
