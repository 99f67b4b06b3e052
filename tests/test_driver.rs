use std::time::Instant;

use zombie_shooter::assets::{Assets, SpriteId};
use zombie_shooter::audio::SoundCue;
use zombie_shooter::compute::idle_state;
use zombie_shooter::driver::*;
use zombie_shooter::entities::*;
use zombie_shooter::input::InputSnapshot;
use zombie_shooter::render::{DrawCommand, Surface};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Counts frames; fails on demand.
#[derive(Default)]
struct CountingSurface {
    frames: usize,
    fail: bool,
}

impl Surface for CountingSurface {
    type Error = String;

    fn clear(&mut self) -> Result<(), String> {
        if self.fail {
            return Err("surface lost".into());
        }
        Ok(())
    }

    fn draw(&mut self, _command: &DrawCommand) -> Result<(), String> {
        Ok(())
    }

    fn text(&mut self, _line: u16, _text: &str) -> Result<(), String> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), String> {
        self.frames += 1;
        Ok(())
    }
}

fn doomed_state() -> SessionState {
    let mut s = idle_state(Canvas::default());
    s.status = GameStatus::Running;
    s.player.health = 10;
    s.enemies = vec![Enemy {
        x: 150.0,
        y: 500.0,
        width: 100.0,
        height: 100.0,
        speed: 1.2,
        health: 25,
        sprite: SpriteId::Enemy,
    }];
    s
}

#[test]
fn unstarted_driver_halts_without_drawing() {
    let mut driver = FrameDriver::new(Canvas::default(), Assets::pending());
    let mut surface = CountingSurface::default();
    let mut audio: Vec<SoundCue> = Vec::new();

    let control = driver
        .step(
            &InputSnapshot::default(),
            Instant::now(),
            &mut seeded_rng(),
            &mut surface,
            &mut audio,
        )
        .unwrap();
    assert_eq!(control, LoopControl::Halt);
    assert_eq!(surface.frames, 0);
    assert!(audio.is_empty());
}

#[test]
fn start_runs_a_fresh_session_and_music() {
    let mut driver = FrameDriver::new(Canvas::default(), Assets::pending());
    let mut audio: Vec<SoundCue> = Vec::new();
    driver.start(&mut seeded_rng(), &mut audio);

    assert!(driver.state().is_running());
    assert_eq!(driver.state().enemies.len(), 5);
    assert_eq!(audio, vec![SoundCue::MusicStart]);
}

#[test]
fn running_session_ticks_renders_and_continues() {
    let mut rng = seeded_rng();
    let mut driver = FrameDriver::new(Canvas::default(), Assets::pending());
    let mut surface = CountingSurface::default();
    let mut audio: Vec<SoundCue> = Vec::new();
    driver.start(&mut rng, &mut audio);

    let fire = InputSnapshot {
        fire: true,
        ..Default::default()
    };
    let control = driver
        .step(&fire, Instant::now(), &mut rng, &mut surface, &mut audio)
        .unwrap();
    assert_eq!(control, LoopControl::Continue);
    assert_eq!(surface.frames, 1);
    assert_eq!(driver.state().frame, 1);
    assert_eq!(driver.state().projectiles.len(), 1);
    assert_eq!(audio, vec![SoundCue::MusicStart, SoundCue::Shot]);
}

#[test]
fn game_over_renders_last_frame_then_halts_for_good() {
    let mut rng = seeded_rng();
    let mut driver = FrameDriver::with_state(doomed_state(), Assets::pending());
    let mut surface = CountingSurface::default();
    let mut audio: Vec<SoundCue> = Vec::new();

    let control = driver
        .step(&InputSnapshot::default(), Instant::now(), &mut rng, &mut surface, &mut audio)
        .unwrap();
    assert_eq!(control, LoopControl::Halt);
    assert_eq!(driver.state().status, GameStatus::GameOver(Outcome::Defeated));
    assert_eq!(surface.frames, 1);
    assert_eq!(audio, vec![SoundCue::MusicStop]);

    // No further ticks execute
    let frame = driver.state().frame;
    for _ in 0..3 {
        let control = driver
            .step(&InputSnapshot::default(), Instant::now(), &mut rng, &mut surface, &mut audio)
            .unwrap();
        assert_eq!(control, LoopControl::Halt);
    }
    assert_eq!(driver.state().frame, frame);
    assert_eq!(surface.frames, 1);
}

#[test]
fn restart_after_game_over_resets_the_session() {
    let mut rng = seeded_rng();
    let mut state = doomed_state();
    state.score = 90;
    state.level = 7;
    let mut driver = FrameDriver::with_state(state, Assets::pending());
    let mut surface = CountingSurface::default();
    let mut audio: Vec<SoundCue> = Vec::new();

    driver
        .step(&InputSnapshot::default(), Instant::now(), &mut rng, &mut surface, &mut audio)
        .unwrap();
    assert!(driver.state().is_over());

    driver.start(&mut rng, &mut audio);
    let s = driver.state();
    assert!(s.is_running());
    assert_eq!(s.score, 0);
    assert_eq!(s.level, 1);
    assert_eq!(s.player.health, 100);
    assert_eq!(audio.last(), Some(&SoundCue::MusicStart));
}

#[test]
fn surface_errors_propagate() {
    let mut rng = seeded_rng();
    let mut driver = FrameDriver::new(Canvas::default(), Assets::pending());
    let mut audio: Vec<SoundCue> = Vec::new();
    driver.start(&mut rng, &mut audio);

    let mut surface = CountingSurface {
        frames: 0,
        fail: true,
    };
    let result = driver.step(
        &InputSnapshot::default(),
        Instant::now(),
        &mut rng,
        &mut surface,
        &mut audio,
    );
    assert_eq!(result, Err("surface lost".to_string()));
}

#[test]
fn set_canvas_swaps_the_session_canvas() {
    let mut driver = FrameDriver::new(Canvas::default(), Assets::pending());
    driver.set_canvas(Canvas::new(1200.0, 700.0));
    assert_eq!(driver.state().canvas, Canvas::new(1200.0, 700.0));
}

#[test]
fn assets_are_owned_by_the_driver() {
    let mut driver = FrameDriver::new(Canvas::default(), Assets::pending());
    assert_eq!(driver.assets(), &Assets::pending());
    *driver.assets_mut() = Assets::all_loaded();
    assert!(driver.assets().is_loaded(SpriteId::Player));
}
