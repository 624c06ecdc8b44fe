use futures_util::StreamExt;

use crate::arena::Arena;
use crate::combat::BattleSnapshot;
use crate::config::ArenaConfig;
use crate::data::monster::MonsterFields;
use crate::data::palette::PALETTE;

pub const DEFAULT_FIRST: &str = "Grog:20:5:10:30:red";
pub const DEFAULT_SECOND: &str = "Blob:15:5:5:40:green";

const USAGE: &str = "usage: monster-arena <battle|simulate|colors> [name:attack:defense:speed:hp[:color]] [name:attack:defense:speed:hp[:color]] [--table]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Battle,
    Simulate,
    Colors,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("battle") => Some(Command::Battle),
        Some("simulate") => Some(Command::Simulate),
        Some("colors") => Some(Command::Colors),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Colors) => handle_colors(),
        Some(command) => run_matchup(command, args),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn run_matchup(command: Command, args: &[String]) -> i32 {
    let config = match ArenaConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return 1;
        }
    };

    let mut arena = match arena_from_args(args, config) {
        Ok(arena) => arena,
        Err(code) => return code,
    };

    if command == Command::Battle {
        handle_battle(&mut arena)
    } else {
        handle_simulate(&mut arena, args)
    }
}

/// Register the two monsters named on the command line (or the demo pair) and select them.
fn arena_from_args(args: &[String], config: ArenaConfig) -> Result<Arena, i32> {
    let positional: Vec<&str> = args
        .iter()
        .skip(2)
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
        .collect();
    if positional.len() > 2 {
        eprintln!("{USAGE}");
        return Err(2);
    }

    let mut arena = Arena::new(config);
    let entries = [
        positional.first().copied().unwrap_or(DEFAULT_FIRST),
        positional.get(1).copied().unwrap_or(DEFAULT_SECOND),
    ];
    for entry in entries {
        let id = arena.submit(MonsterFields::from_compact(entry)).id;
        arena.toggle(id);
    }

    if let Err(err) = arena.start_selected() {
        eprintln!("cannot start battle: {err}");
        return Err(1);
    }
    Ok(arena)
}

fn handle_simulate(arena: &mut Arena, args: &[String]) -> i32 {
    let as_table = args.iter().any(|arg| arg == "--table");
    while arena.advance().is_some() {}
    let snapshot = arena.snapshot();

    if as_table {
        println!("rounds\twinner\tlog_lines");
        println!(
            "{}\t{}\t{}",
            snapshot.round,
            snapshot.winner().unwrap_or("draw"),
            snapshot.log.len()
        );
        return 0;
    }

    match serde_json::to_string_pretty(&snapshot) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize battle snapshot: {err}");
            1
        }
    }
}

fn handle_battle(arena: &mut Arena) -> i32 {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            return 1;
        }
    };

    let _entered = runtime.enter();
    if let Err(err) = arena.start_timed() {
        eprintln!("cannot start battle: {err}");
        return 1;
    }

    let finished = runtime.block_on(async {
        if let Some(clock) = arena.clock() {
            print_matchup(&clock.snapshot());
            let mut updates = clock.updates();
            let mut printed = 0;
            while let Some(snapshot) = updates.next().await {
                for line in snapshot.log.iter().skip(printed) {
                    println!("[round {}] {line}", snapshot.round);
                }
                printed = printed.max(snapshot.log.len());
            }
        }
        arena.finish_timed().await
    });

    match finished {
        Ok(snapshot) => {
            match snapshot.winner() {
                Some(name) => println!("winner: {name}"),
                None => println!("result: draw"),
            }
            0
        }
        Err(err) => {
            eprintln!("battle failed: {err}");
            1
        }
    }
}

fn print_matchup(snapshot: &BattleSnapshot) {
    if let Some([a, b]) = &snapshot.fighters {
        println!(
            "{} (hp {}, atk {}, def {}, spd {}) vs {} (hp {}, atk {}, def {}, spd {})",
            a.name, a.max_hp, a.attack, a.defense, a.speed, b.name, b.max_hp, b.attack, b.defense,
            b.speed
        );
    }
}

fn handle_colors() -> i32 {
    for (key, hex) in PALETTE {
        println!("{key}\t{hex}");
    }
    0
}
