//! Bracket Walkthrough Example
//!
//! Runs a small tournament end to end: seeding, round-by-round results,
//! full-bracket projections, and the answers a careless caller gets.

use std::thread;

use anyhow::{Context, Result};
use knockout::{BracketEngine, BracketHandle, Competitor, MatchId};

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Bracket Walkthrough ===\n");

    // Example 1: Seed an eight-competitor field
    println!("Example 1: Seeding eight competitors");
    let names = [
        "Alice", "Bob", "Carol", "Dan", "Erin", "Faye", "Grace", "Heidi",
    ];
    let field: Vec<Competitor> = names
        .iter()
        .map(|name| Competitor::new(name))
        .collect::<Result<_, _>>()?;

    let mut engine = BracketEngine::new();
    engine.initialize(field)?;
    println!("{}", engine.view());

    // Example 2: Rejected operations leave the bracket untouched
    println!("Example 2: Rejected operations");
    let outsider = Competitor::new("Mallory")?;
    if let Err(err) = engine.record_result(99, &outsider) {
        println!("  unknown id     -> {err}");
    }
    if let Err(err) = engine.record_result(1, &outsider) {
        println!("  outsider name  -> {err}");
    }
    if let Err(err) = BracketEngine::new().initialize(vec![Competitor::new("Solo")?]) {
        println!("  short field    -> {err}");
    }

    // Example 3: Play the first round
    println!("\nExample 3: Playing round 1");
    play_open_matches(&mut engine)?;
    println!("\n{}", engine.view());

    // Example 4: Play the rest; the last result crowns the champion
    println!("Example 4: Finishing the tournament");
    while engine.champion().is_none() {
        play_open_matches(&mut engine)?;
    }
    println!("\n{}", engine.view());
    if let Some(champion) = engine.champion() {
        println!("Champion: {champion}\n");
    }

    // Example 5: Concurrent result entry through a shared handle
    println!("Example 5: Two writers race to decide one match");
    let handle = BracketHandle::new();
    let semifinalists: Vec<Competitor> = ["North", "South", "East", "West"]
        .iter()
        .map(|name| Competitor::new(name))
        .collect::<Result<_, _>>()?;
    handle.initialize(semifinalists)?;

    let first = handle
        .ready_matches()
        .into_iter()
        .next()
        .context("a freshly seeded bracket has open matches")?;
    let id = first.id;
    let sides = [
        first.slot_a.competitor().context("seeded slots are full")?.clone(),
        first.slot_b.competitor().context("seeded slots are full")?.clone(),
    ];

    let workers = sides.map(|winner| {
        let handle = handle.clone();
        thread::spawn(move || (winner.clone(), handle.record_result(id, &winner)))
    });
    for worker in workers {
        let (name, outcome) = worker
            .join()
            .map_err(|_| anyhow::anyhow!("worker panicked"))?;
        match outcome {
            Ok(recorded) => println!("  {name} landed first: {recorded}"),
            Err(err) => println!("  {name} was too late: {err}"),
        }
    }

    while handle.champion().is_none() {
        let open = handle
            .ready_matches()
            .into_iter()
            .next()
            .context("an unfinished bracket has open matches")?;
        let winner = open
            .slot_a
            .competitor()
            .context("open matches are full")?
            .clone();
        handle.record_result(open.id, &winner)?;
    }
    let shared_champion = handle.champion().context("the bracket just completed")?;
    println!("  shared bracket champion: {shared_champion}");

    println!("\n=== End of Bracket Walkthrough ===");
    Ok(())
}

/// Decides every currently open match in favor of slot A, printing each
/// outcome as it lands.
fn play_open_matches(engine: &mut BracketEngine) -> Result<()> {
    let picks: Vec<(MatchId, Competitor)> = engine
        .ready_matches()
        .filter_map(|m| m.slot_a.competitor().map(|winner| (m.id, winner.clone())))
        .collect();

    for (id, winner) in picks {
        let outcome = engine.record_result(id, &winner)?;
        println!("  {outcome}");
    }
    Ok(())
}
