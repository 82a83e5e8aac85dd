//! Option analytics CLI
//!
//! Command-line demo: model pricing, Greeks, re-pricing what-ifs, and a
//! live Yahoo Finance fetch.

use option_analytics::models::black_scholes;
use option_analytics::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("Option Analytics");
    println!("================\n");

    // Example: Black-Scholes pricing
    let spot = 500.0;
    let strike = 500.0; // ATM
    let time = 30.0 / 365.0; // 30 days
    let rate = DEFAULT_RISK_FREE_RATE;
    let vol = 0.20;

    println!("Black-Scholes Pricing Example:");
    println!("  Spot: ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Time: {:.0} days", time * 365.0);
    println!("  Rate: {:.1}%", rate * 100.0);
    println!("  Vol: {:.1}%\n", vol * 100.0);

    let call = OptionParameters::new(spot, strike, rate, vol, time, OptionType::Call);
    let put = OptionParameters::new(spot, strike, rate, vol, time, OptionType::Put);

    match (black_scholes::price(&call), black_scholes::price(&put)) {
        (Ok(c), Ok(p)) => {
            println!("Option Prices:");
            println!("  Call: ${:.2}", c);
            println!("  Put: ${:.2}", p);
        }
        (Err(e), _) | (_, Err(e)) => println!("Pricing failed: {}", e),
    }

    if let Ok(greeks) = black_scholes::greeks(&call) {
        println!("\nCall Greeks:");
        println!("  Delta: {:.4}", greeks.delta);
        println!("  Gamma: {:.6}", greeks.gamma);
        println!("  Vega: {:.4}", greeks.vega);
        println!("  Theta: {:.4}", greeks.theta);
        println!("  Rho: {:.4}", greeks.rho);
    }

    // Try fetching real data
    println!("\n--- Live Data ---");
    println!("Attempting to fetch QQQ options from Yahoo Finance...\n");

    let client = YahooClient::new();

    match client.get_quote("QQQ") {
        Ok(quote) => {
            println!("QQQ Quote:");
            println!("  Price: ${:.2}", quote.regular_market_price.unwrap_or(0.0));
            println!("  Bid: ${:.2}", quote.bid.unwrap_or(0.0));
            println!("  Ask: ${:.2}", quote.ask.unwrap_or(0.0));

            match client.get_option_chain("QQQ", None) {
                Ok(chain) => show_chain(&chain),
                Err(e) => println!("  Could not fetch chain: {}", e),
            }
        }
        Err(e) => {
            println!("Could not fetch QQQ: {}", e);
            println!("(This is expected if you're offline or Yahoo API is unavailable)");
        }
    }

    println!("\n--- Done ---");
}

fn show_chain(chain: &OptionChain) {
    println!(
        "\nNearest chain: {} calls, {} puts",
        chain.calls.len(),
        chain.puts.len()
    );

    let Some(atm) = chain.atm_strike() else {
        return;
    };
    let Some(call) = chain.call_at(atm) else {
        return;
    };

    println!("ATM call at strike ${:.2}:", atm);
    if let Some(greeks) = call.greeks {
        println!("  Delta: {:.4}", greeks.delta);
        println!("  Gamma: {:.6}", greeks.gamma);
        println!("  Vega: {:.4}", greeks.vega);
        println!("  Theta: {:.4}", greeks.theta);
        println!("  Rho: {:.4}", greeks.rho);
    }
    if let Some(leverage) = call.leverage {
        println!("  Leverage: {:.2}x", leverage);
    }

    // What-if re-pricing without re-fetching
    if let Some(repricer) = call.repricer {
        match (
            repricer.price(None, None),
            repricer.price(Some(repricer.default_volatility + 0.05), None),
            repricer.price(None, Some(repricer.default_underlying * 1.02)),
        ) {
            (Ok(base), Ok(vol_up), Ok(spot_up)) => {
                println!("  Model price: ${:.2}", base);
                println!("  At +5 vol points: ${:.2}", vol_up);
                println!("  At +2% spot: ${:.2}", spot_up);
            }
            _ => println!("  Re-pricing failed"),
        }
    }
}
