use zombie_shooter::assets::SpriteId;
use zombie_shooter::audio::SoundCue;
use zombie_shooter::combat::resolve;
use zombie_shooter::compute::idle_state;
use zombie_shooter::entities::*;
use zombie_shooter::spawn::spawn_boss;

// Player sits at (160, 580) 50×50, well away from the enemies placed here.
fn make_state() -> SessionState {
    SessionState {
        status: GameStatus::Running,
        ..idle_state(Canvas::default())
    }
}

fn enemy(x: f32, y: f32, health: u32) -> Enemy {
    Enemy {
        x,
        y,
        width: 100.0,
        height: 100.0,
        speed: 1.2,
        health,
        sprite: SpriteId::Enemy,
    }
}

fn projectile(x: f32, y: f32) -> Projectile {
    Projectile {
        x,
        y,
        width: 50.0,
        height: 30.0,
        speed: 5.0,
    }
}

// ── Projectiles ↔ enemies ─────────────────────────────────────────────────────

#[test]
fn lethal_hit_removes_enemy_projectile_and_scores() {
    let mut s = make_state();
    s.enemies = vec![enemy(0.0, 0.0, 10), enemy(200.0, 200.0, 25)];
    s.projectiles = vec![projectile(10.0, 10.0), projectile(300.0, 500.0)];

    let u = resolve(&s);
    assert_eq!(u.state.enemies.len(), 1);
    assert_eq!(u.state.enemies[0].x, 200.0);
    assert_eq!(u.state.projectiles.len(), 1);
    assert_eq!(u.state.projectiles[0].x, 300.0);
    assert_eq!(u.state.score, 10);
    assert_eq!(u.cues, vec![SoundCue::EnemyKilled]);
}

#[test]
fn non_lethal_hit_consumes_projectile_only() {
    let mut s = make_state();
    s.enemies = vec![enemy(0.0, 0.0, 30)];
    s.projectiles = vec![projectile(10.0, 10.0)];

    let u = resolve(&s);
    assert_eq!(u.state.enemies.len(), 1);
    assert_eq!(u.state.enemies[0].health, 20);
    assert!(u.state.projectiles.is_empty());
    assert_eq!(u.state.score, 0);
    assert!(u.cues.is_empty());
}

#[test]
fn projectile_damages_only_the_first_enemy_it_touches() {
    let mut s = make_state();
    // Two stacked enemies both under the same projectile
    s.enemies = vec![enemy(0.0, 0.0, 30), enemy(20.0, 20.0, 30)];
    s.projectiles = vec![projectile(30.0, 30.0)];

    let u = resolve(&s);
    assert_eq!(u.state.enemies[0].health, 20);
    assert_eq!(u.state.enemies[1].health, 30);
    assert!(u.state.projectiles.is_empty());
}

#[test]
fn adjacent_kills_in_one_pass_are_all_processed() {
    let mut s = make_state();
    s.enemies = vec![
        enemy(0.0, 0.0, 10),
        enemy(0.0, 120.0, 10),
        enemy(0.0, 240.0, 10),
    ];
    s.projectiles = vec![
        projectile(10.0, 30.0),
        projectile(10.0, 150.0),
        projectile(10.0, 270.0),
    ];

    let u = resolve(&s);
    assert!(u.state.enemies.is_empty());
    assert!(u.state.projectiles.is_empty());
    assert_eq!(u.state.score, 30);
    assert_eq!(u.cues.len(), 3);
}

#[test]
fn dead_enemy_does_not_absorb_further_projectiles() {
    let mut s = make_state();
    s.enemies = vec![enemy(0.0, 0.0, 10)];
    s.projectiles = vec![projectile(10.0, 10.0), projectile(20.0, 20.0)];

    let u = resolve(&s);
    assert!(u.state.enemies.is_empty());
    assert_eq!(u.state.projectiles.len(), 1);
    assert_eq!(u.state.score, 10);
}

#[test]
fn two_hits_finish_a_tougher_enemy() {
    let mut s = make_state();
    s.enemies = vec![enemy(0.0, 0.0, 20)];
    s.projectiles = vec![projectile(10.0, 10.0), projectile(20.0, 20.0)];

    let u = resolve(&s);
    assert!(u.state.enemies.is_empty());
    assert!(u.state.projectiles.is_empty());
    assert_eq!(u.state.score, 10);
}

#[test]
fn score_accumulates() {
    let mut s = make_state();
    s.score = 120;
    s.enemies = vec![enemy(0.0, 0.0, 5)];
    s.projectiles = vec![projectile(10.0, 10.0)];
    assert_eq!(resolve(&s).state.score, 130);
}

// ── Enemy contact ↔ player ────────────────────────────────────────────────────

#[test]
fn each_touching_enemy_hurts_the_player() {
    let mut s = make_state();
    s.enemies = vec![
        enemy(120.0, 500.0, 25),
        enemy(180.0, 520.0, 25),
        enemy(0.0, 0.0, 25),
    ];
    let u = resolve(&s);
    assert_eq!(u.state.player.health, 80);
    assert_eq!(u.state.enemies.len(), 3);
}

#[test]
fn contact_damage_repeats_every_frame() {
    let mut s = make_state();
    s.enemies = vec![enemy(120.0, 500.0, 25)];
    let once = resolve(&s).state;
    let twice = resolve(&once).state;
    assert_eq!(twice.player.health, 80);
}

#[test]
fn player_health_floors_at_zero() {
    let mut s = make_state();
    s.player.health = 5;
    s.enemies = vec![enemy(120.0, 500.0, 25)];
    assert_eq!(resolve(&s).state.player.health, 0);
}

#[test]
fn touching_edge_does_no_damage() {
    let mut s = make_state();
    // Enemy bottom edge at exactly the player's top (580)
    s.enemies = vec![enemy(150.0, 480.0, 25)];
    assert_eq!(resolve(&s).state.player.health, 100);
}

// ── Boss ──────────────────────────────────────────────────────────────────────

#[test]
fn boss_contact_costs_twenty() {
    let mut s = make_state();
    s.is_boss_level = true;
    s.boss = Some(spawn_boss());
    s.player.x = 150.0;
    s.player.y = 150.0;
    assert_eq!(resolve(&s).state.player.health, 80);
}

#[test]
fn projectiles_wound_the_boss() {
    let mut s = make_state();
    s.is_boss_level = true;
    s.boss = Some(spawn_boss());
    s.projectiles = vec![projectile(150.0, 100.0), projectile(10.0, 400.0)];

    let u = resolve(&s);
    assert_eq!(u.state.boss.as_ref().map(|b| b.health), Some(190));
    assert_eq!(u.state.projectiles.len(), 1);
    assert_eq!(u.state.score, 0);
}

#[test]
fn resolve_does_not_mutate_original() {
    let mut s = make_state();
    s.enemies = vec![enemy(0.0, 0.0, 10)];
    s.projectiles = vec![projectile(10.0, 10.0)];
    let _ = resolve(&s);
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.projectiles.len(), 1);
    assert_eq!(s.score, 0);
}
