//! Quotation walkthrough against the reference testnet pool.
//!
//! Quotes a swap in both directions, a proportional deposit and a partial
//! withdrawal, then prints the contract calls a wallet would be asked to
//! sign.
//!
//! # Run
//!
//! ```bash
//! cargo run --example quote
//! ```

use amm_quote::config::QuoteConfig;
use amm_quote::domain::{Amount, Fraction, PoolState, QuoteRequest, QuoteResult, SwapDirection};
use amm_quote::quote::evaluate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product Quotes (Stacks testnet) ===\n");

    // ── 1. Deployment ───────────────────────────────────────────────────
    let config = QuoteConfig::testnet()?;
    let key = config.pool_key();
    let (token_a, token_b) = (config.pair().first(), config.pair().second());
    println!("AMM:       {}", config.amm());
    println!("Token A:   {token_a}");
    println!("Token B:   {token_b}");
    println!("LP token:  {}", key.lp_token()?);
    println!(
        "Fee:       {}% included, slippage {}",
        config.fee().as_percent(),
        config.slippage()
    );

    // ── 2. Pool snapshot: 1 000 000 A / 2 000 000 B ─────────────────────
    let pool = PoolState::new(
        config.parse_amount("1000000")?,
        config.parse_amount("2000000")?,
        config.fee(),
        config.parse_amount("1414213.562373")?,
    );
    println!(
        "\nReserves:  {} A / {} B (1 A = {} B)",
        config.format_amount(pool.reserve_a()),
        config.format_amount(pool.reserve_b()),
        config.format_amount(pool.ratio_b_per_a(config.token_decimals())?),
    );

    // ── 3. Swaps ────────────────────────────────────────────────────────
    println!("\n--- Swaps ---");
    for (direction, input) in [(SwapDirection::AToB, "10000"), (SwapDirection::BToA, "20000")] {
        let request = QuoteRequest::Swap {
            amount_in: config.parse_amount(input)?,
            direction,
        };
        if let QuoteResult::Swap(quote) = evaluate(&pool, &request, config.slippage())? {
            println!(
                "{direction:?}: {} in -> {} out (min {}, fee {}, rate {})",
                config.format_amount(quote.amount_in()),
                config.format_amount(quote.amount_out()),
                config.format_amount(quote.min_amount_out()),
                config.format_amount(quote.fee()),
                config.format_amount(quote.effective_rate(config.token_decimals())?),
            );
            println!("  call: {}", key.swap(&quote));
        }
    }

    // ── 4. Deposit ──────────────────────────────────────────────────────
    println!("\n--- Deposit ---");
    let request = QuoteRequest::Deposit {
        amount_a: config.parse_amount("1.5")?,
    };
    if let QuoteResult::Deposit(quote) = evaluate(&pool, &request, config.slippage())? {
        println!(
            "{} A needs {} B (min {} / {})",
            config.format_amount(quote.amount_a()),
            config.format_amount(quote.amount_b()),
            config.format_amount(quote.min_amount_a()),
            config.format_amount(quote.min_amount_b()),
        );
        println!("  call: {}", key.add_liquidity(&quote));
    }

    // ── 5. Withdrawal ───────────────────────────────────────────────────
    println!("\n--- Withdrawal ---");
    let request = QuoteRequest::Withdraw {
        lp_balance: Amount::new(5_000_000),
        lp_fraction: Fraction::parse("0.25")?,
    };
    if let QuoteResult::Withdraw(quote) = evaluate(&pool, &request, config.slippage())? {
        println!(
            "burn {} of {} LP",
            config.format_amount(quote.lp_to_burn()),
            config.format_amount(quote.lp_balance()),
        );
        println!("  call: {}", key.remove_liquidity(&quote));
    }

    println!("\n=== Done ===");
    Ok(())
}
