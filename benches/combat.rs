//! Combat benchmarks
//!
//! Run with `cargo bench --bench combat`.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use towerfall::combat::{scale_stats, RngDice, StandardAttack};
use towerfall::entities::{spawn_enemy, EnemyKind, Player};
use towerfall::progression::{Difficulty, WorldContext};

fn bench_scaling(c: &mut Criterion) {
    let profile = WorldContext::new(Difficulty::Hardcore, 12).profile();
    let base = EnemyKind::Warrior.base_stats();

    c.bench_function("scale_stats", |b| {
        b.iter(|| scale_stats(black_box(&base), black_box(7), &profile))
    });
}

fn bench_enemy_turn(c: &mut Criterion) {
    let world = WorldContext::new(Difficulty::Hard, 3);
    let mut dice = RngDice::new(StdRng::seed_from_u64(42));

    for kind in [EnemyKind::Human, EnemyKind::Warrior, EnemyKind::Mage] {
        let mut enemy = spawn_enemy(kind, 5, &world);
        c.bench_function(&format!("choose_action/{}", kind.id()), |b| {
            b.iter(|| {
                let mut player = Player::adventurer("Hero");
                enemy.tick_status_effects();
                enemy.choose_action(&mut player, &mut dice, &StandardAttack)
            })
        });
    }
}

criterion_group!(benches, bench_scaling, bench_enemy_turn);
criterion_main!(benches);
