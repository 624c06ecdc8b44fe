use monster_arena::combat::{
    damage, round_bound, turn_order, BattleResolver, FighterStatus, LogEntry, Outcome,
};
use monster_arena::data::Monster;

fn monster(id: u64, name: &str, attack: u32, defense: u32, speed: u32, hp: u32) -> Monster {
    Monster {
        id,
        name: name.to_string(),
        attack,
        defense,
        speed,
        hp,
        color: "red".to_string(),
        image_url: String::new(),
    }
}

fn scenario_pair() -> (Monster, Monster) {
    (
        monster(1, "A", 20, 5, 10, 30),
        monster(2, "B", 15, 5, 5, 40),
    )
}

fn hp_of(resolver: &BattleResolver) -> (i64, i64) {
    let fighters = resolver.fighters().expect("battle should be loaded");
    (fighters[0].current_hp, fighters[1].current_hp)
}

#[test]
fn reference_scenario_plays_out_round_by_round() {
    let (a, b) = scenario_pair();
    let mut resolver = BattleResolver::new();
    resolver.start(a, b);

    let round1 = resolver.advance().expect("round 1");
    assert_eq!(round1.order.first, 0, "A is faster and moves first");
    assert_eq!(round1.attacks.len(), 2);
    assert_eq!(round1.attacks[0].damage, 15);
    assert_eq!(round1.attacks[1].damage, 10);
    assert_eq!(round1.attacks[0].defender_hp, 25);
    assert_eq!(round1.attacks[1].defender_hp, 20);
    assert_eq!(hp_of(&resolver), (20, 25));
    assert_eq!(round1.outcome, Outcome::InProgress);

    resolver.advance().expect("round 2");
    assert_eq!(hp_of(&resolver), (10, 10));

    let round3 = resolver.advance().expect("round 3");
    assert_eq!(round3.attacks.len(), 1, "B is knocked out before countering");
    assert_eq!(round3.attacks[0].defender, 2);
    assert_eq!(round3.attacks[0].defender_hp, -5);
    assert_eq!(hp_of(&resolver), (10, -5));
    assert_eq!(round3.outcome, Outcome::Win(1));

    let attacks = resolver
        .log()
        .iter()
        .filter(|entry| matches!(entry, LogEntry::Attack { .. }))
        .count();
    assert_eq!(attacks, 5);
    assert_eq!(resolver.log().len(), 6);
    assert_eq!(resolver.log().last().map(ToString::to_string).as_deref(), Some("A wins!"));
}

#[test]
fn no_rounds_after_terminal_outcome() {
    let (a, b) = scenario_pair();
    let mut resolver = BattleResolver::new();
    resolver.start(a, b);
    assert_eq!(resolver.run_to_end(), 3);

    let log_len = resolver.log().len();
    assert!(resolver.advance().is_none());
    assert_eq!(resolver.log().len(), log_len);
    assert_eq!(resolver.round(), 3);
}

#[test]
fn full_tie_lets_first_argument_move_first_every_round() {
    let a = monster(1, "A", 10, 0, 5, 35);
    let b = monster(2, "B", 10, 0, 5, 35);
    let mut resolver = BattleResolver::new();
    resolver.start(a, b);

    let mut rounds = 0;
    while let Some(report) = resolver.advance() {
        assert_eq!(report.order.first, 0);
        assert_eq!(report.attacks[0].attacker, 1);
        rounds += 1;
    }
    // 35 hp at 10 per hit: A lands the fourth hit first.
    assert_eq!(rounds, 4);
    assert_eq!(resolver.outcome(), Some(Outcome::Win(1)));
}

#[test]
fn second_argument_wins_turn_order_when_faster() {
    let a = monster(1, "Slow", 10, 0, 1, 10);
    let b = monster(2, "Quick", 10, 0, 2, 10);
    let mut resolver = BattleResolver::new();
    resolver.start(a, b);
    let report = resolver.advance().expect("one round");
    assert_eq!(report.order.first, 1);
    assert_eq!(report.outcome, Outcome::Win(2));
    assert_eq!(hp_of(&resolver), (0, 10));
}

#[test]
fn turn_order_is_a_function_of_speed_then_attack() {
    for a_speed in 0..4 {
        for b_speed in 0..4 {
            for a_attack in 0..4 {
                for b_attack in 0..4 {
                    let a = monster(1, "A", a_attack, 0, a_speed, 1);
                    let b = monster(2, "B", b_attack, 0, b_speed, 1);
                    let expected_b_first =
                        b_speed > a_speed || (b_speed == a_speed && b_attack > a_attack);
                    let order = turn_order(&a, &b);
                    assert_eq!(order.first == 1, expected_b_first);
                    assert_eq!(turn_order(&a, &b), order, "order must be stable");
                }
            }
        }
    }
}

#[test]
fn damage_floor_holds_when_defense_exceeds_attack() {
    let pebble = monster(1, "Pebble", 1, 0, 0, 3);
    let fortress = monster(2, "Fortress", 0, 1000, 0, 3);
    assert_eq!(damage(&pebble, &fortress), 1);

    let mut resolver = BattleResolver::new();
    resolver.start(pebble, fortress);
    for report in std::iter::from_fn(|| resolver.advance()) {
        assert!(report.attacks.iter().all(|attack| attack.damage >= 1));
    }
    assert!(resolver.is_resolved());
}

#[test]
fn battles_end_within_the_round_bound() {
    let stats = [0, 1, 3, 7, 20];
    let hps = [1, 2, 9, 25];
    let mut id = 0;
    for &a_attack in &stats {
        for &a_defense in &stats {
            for &b_attack in &stats {
                for &b_defense in &stats {
                    for &a_hp in &hps {
                        for &b_hp in &hps {
                            id += 2;
                            let a = monster(id, "A", a_attack, a_defense, 3, a_hp);
                            let b = monster(id + 1, "B", b_attack, b_defense, 3, b_hp);
                            let bound = round_bound(&a, &b);
                            let mut resolver = BattleResolver::new();
                            resolver.start(a, b);
                            let rounds = u64::from(resolver.run_to_end());
                            assert!(resolver.is_resolved());
                            assert!(rounds <= bound, "{rounds} rounds exceeds bound {bound}");
                            let log = resolver.log();
                            assert_eq!(log.iter().filter(|entry| entry.is_terminal()).count(), 1);
                            assert!(log.last().is_some_and(LogEntry::is_terminal));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn draw_when_both_start_knocked_out() {
    let a = monster(1, "Husk", 5, 0, 1, 0);
    let b = monster(2, "Shell", 5, 0, 0, 0);
    let mut resolver = BattleResolver::new();
    resolver.start(a, b);

    let report = resolver.advance().expect("one round");
    assert_eq!(report.attacks.len(), 1);
    assert_eq!(report.outcome, Outcome::Draw);
    assert_eq!(resolver.log().last(), Some(&LogEntry::Draw));

    let snapshot = resolver.snapshot();
    assert!(snapshot.winner().is_none());
    let statuses: Vec<_> = snapshot
        .fighters
        .expect("fighters")
        .iter()
        .map(|f| f.status)
        .collect();
    assert_eq!(statuses, vec![FighterStatus::Defeated, FighterStatus::Defeated]);
}

#[test]
fn zero_hp_first_mover_loses_to_surviving_defender() {
    let a = monster(1, "Glass", 1, 0, 9, 0);
    let b = monster(2, "Tank", 1, 0, 1, 10);
    let mut resolver = BattleResolver::new();
    resolver.start(a, b);
    let report = resolver.advance().expect("one round");
    assert_eq!(report.attacks.len(), 2);
    assert_eq!(report.outcome, Outcome::Win(2));
}

#[test]
fn reset_returns_to_pre_battle_state() {
    let (a, b) = scenario_pair();
    let mut resolver = BattleResolver::new();
    let pristine = resolver.snapshot();

    resolver.start(a.clone(), b.clone());
    resolver.advance();
    resolver.reset();
    assert!(resolver.is_idle());
    assert_eq!(resolver.outcome(), None);
    assert!(resolver.log().is_empty());
    assert!(resolver.advance().is_none());
    assert_eq!(resolver.snapshot(), pristine);

    resolver.start(a, b);
    resolver.run_to_end();
    resolver.reset();
    assert_eq!(resolver.snapshot(), pristine);
}

#[test]
fn restarting_discards_previous_battle() {
    let (a, b) = scenario_pair();
    let mut resolver = BattleResolver::new();
    resolver.start(a.clone(), b.clone());
    resolver.run_to_end();

    resolver.start(a, b);
    assert_eq!(resolver.outcome(), Some(Outcome::InProgress));
    assert!(resolver.log().is_empty());
    assert_eq!(hp_of(&resolver), (30, 40));
    assert_eq!(resolver.round(), 0);
}

#[test]
fn snapshot_marks_winner_and_resolves_colors() {
    let (a, mut b) = scenario_pair();
    b.color = "#ABCDEF".to_string();
    let mut resolver = BattleResolver::new();
    resolver.start(a, b);
    resolver.run_to_end();

    let snapshot = resolver.snapshot();
    assert!(snapshot.is_resolved());
    assert_eq!(snapshot.winner(), Some("A"));
    let [winner, loser] = snapshot.fighters.expect("fighters");
    assert_eq!(winner.status, FighterStatus::Winner);
    assert_eq!(winner.color, "#e53935");
    assert_eq!(winner.max_hp, 30);
    assert_eq!(loser.status, FighterStatus::Defeated);
    assert_eq!(loser.color, "#abcdef");
    assert_eq!(loser.current_hp, -5);
}

#[test]
fn snapshot_serializes_for_presentation() {
    let (a, b) = scenario_pair();
    let mut resolver = BattleResolver::new();
    resolver.start(a, b);
    resolver.advance();

    let payload = serde_json::to_value(resolver.snapshot()).expect("snapshot should serialize");
    assert_eq!(payload["round"], 1);
    assert_eq!(payload["outcome"], "in_progress");
    assert_eq!(payload["fighters"][1]["current_hp"], 25);
    assert_eq!(payload["fighters"][0]["status"], "alive");
    assert_eq!(payload["log"][0], "A attacked B dealing 15 damage");

    resolver.run_to_end();
    let payload = serde_json::to_value(resolver.snapshot()).expect("snapshot should serialize");
    assert_eq!(payload["outcome"]["win"], 1);
}
