use dorfyn::{DorfynClient, LogLevel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only prints anything when built with `--features tracing-subscriber`.
    dorfyn::init_tracing(LogLevel::Info);

    let client = DorfynClient::builder().build()?;

    // One symbol per asset class: index, equity, crypto, forex, future, mutual fund, ETF.
    let symbols = ["^DJI", "AAPL", "BTC-USD", "CADUSD=X", "CL=F", "FMAGX", "VT"];

    match dorfyn::quotes(&client, symbols).await {
        Ok(quotes) => {
            for q in quotes {
                println!(
                    "{}: {:.4}",
                    q.symbol.unwrap_or_default(),
                    q.regular_market_price.unwrap_or_default()
                );
            }
        }
        Err(e) => println!("{e}"),
    }

    // A second call reuses the cached cookie and crumb.
    let again = dorfyn::QuotesBuilder::new(&client).add_symbol("MSFT").fetch().await?;
    println!("{} quote(s) on the cached session", again.len());

    Ok(())
}
