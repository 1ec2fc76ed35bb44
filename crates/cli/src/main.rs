//! Command line demo for the directional-cooldown token ledger.
//!
//! Scripts a sandwich attempt against an in-memory guarded token: a
//! frontrun sell, a victim sell, an optional wait, then the backrun buy.
//! The backrun is rejected with `DirectionalCooldownActive` whenever the
//! wait is shorter than the cooldown window.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use amev_domain::config::{GateConfig, TokenConfig};
use amev_domain::value_objects::address::Address;
use amev_domain::value_objects::amount::Amount;
use amev_ledger::clock::{BlockSource, ManualClock};
use amev_ledger::ledger::InMemoryLedger;
use amev_ledger::token::GuardedToken;

#[derive(Parser)]
#[command(name = "amev")]
#[command(about = "Directional-cooldown sandwich defense demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Script a frontrun/victim/backrun sequence against the pool
    Sandwich {
        /// Cooldown window in blocks
        #[arg(short = 'k', long, default_value_t = 3)]
        cooldown_blocks: u64,

        /// Blocks mined between the victim trade and the backrun
        #[arg(short, long, default_value_t = 0)]
        delay_blocks: u64,

        /// Perform the backrun from a second attacker address
        #[arg(long)]
        multi_address: bool,

        /// Emit the step log as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct StepReport {
    step: &'static str,
    actor: String,
    from: String,
    to: String,
    amount: u64,
    block: u64,
    outcome: String,
    blocked_by_policy: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sandwich {
            cooldown_blocks,
            delay_blocks,
            multi_address,
            json,
        } => run_sandwich(cooldown_blocks, delay_blocks, multi_address, json),
    }
}

fn run_sandwich(
    cooldown_blocks: u64,
    delay_blocks: u64,
    multi_address: bool,
    json: bool,
) -> Result<()> {
    let owner = Address::new("owner");
    let pool = Address::new("pool");
    let attacker1 = Address::new("attacker1");
    let attacker2 = Address::new("attacker2");
    let victim = Address::new("victim");

    let clock = Arc::new(ManualClock::starting_at(1));
    let gate = GateConfig::new(pool.clone(), cooldown_blocks)?;
    let config = TokenConfig::new("AntiMEV", "AMV", owner.clone(), Amount::from(10_000), gate);
    let mut token: GuardedToken<InMemoryLedger> = GuardedToken::new(config, clock.clone())?;

    // Fund the participants and give the pool a float for the backrun.
    for account in [&attacker1, &attacker2, &victim] {
        token.transfer(&owner, account, Amount::from(1000))?;
    }
    token.transfer(&owner, &pool, Amount::from(2000))?;
    clock.mine();

    let mut steps = Vec::new();

    let frontrunner = attacker1.clone();
    steps.push(report(
        "frontrun-sell",
        &frontrunner,
        &frontrunner,
        &pool,
        100,
        clock.current_block().0,
        token.transfer(&frontrunner, &pool, Amount::from(100)),
    ));

    steps.push(report(
        "victim-sell",
        &victim,
        &victim,
        &pool,
        50,
        clock.current_block().0,
        token.transfer(&victim, &pool, Amount::from(50)),
    ));

    clock.advance(delay_blocks);

    let backrunner = if multi_address { attacker2 } else { attacker1 };
    token.approve(&pool, &backrunner, Amount::from(100));
    steps.push(report(
        "backrun-buy",
        &backrunner,
        &pool,
        &backrunner,
        100,
        clock.current_block().0,
        token.transfer_from(&backrunner, &pool, &backrunner, Amount::from(100)),
    ));

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    println!(
        "Pool {pool} guarded with k = {cooldown_blocks} block(s); backrun delayed {delay_blocks} block(s)"
    );
    for s in &steps {
        let marker = if s.outcome == "ok" {
            "✅"
        } else if s.blocked_by_policy {
            "🚫"
        } else {
            "💥"
        };
        println!(
            "{marker} [{}] {} {} -> {} ({} units, block {}): {}",
            s.step, s.actor, s.from, s.to, s.amount, s.block, s.outcome
        );
    }

    let state = token.direction_state();
    println!(
        "Final direction state: {:?} at block {}",
        state.last_direction, state.last_direction_block
    );
    Ok(())
}

fn report(
    step: &'static str,
    actor: &Address,
    from: &Address,
    to: &Address,
    amount: u64,
    block: u64,
    result: std::result::Result<(), amev_domain::errors::TransferError>,
) -> StepReport {
    let (outcome, blocked) = match &result {
        Ok(()) => {
            info!(step, actor = %actor, block, "step applied");
            ("ok".to_string(), false)
        }
        Err(err) if err.is_cooldown_violation() => {
            warn!(step, actor = %actor, block, "step blocked by directional cooldown");
            (err.to_string(), true)
        }
        Err(err) => {
            warn!(step, actor = %actor, block, error = %err, "step failed at the ledger");
            (err.to_string(), false)
        }
    };
    StepReport {
        step,
        actor: actor.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        amount,
        block,
        outcome,
        blocked_by_policy: blocked,
    }
}
