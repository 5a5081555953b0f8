//! Cannon Block Breaker entry point
//!
//! Headless native host: a simulation thread steps the game at the configured
//! frame rate, an autopilot thread plays it through the input latches, and the
//! main thread presents events (sounds, HUD, game-over dialog).
//!
//! Usage: `cannon-block-breaker [settings.json] [tuning.json]`

use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cannon_block_breaker::audio::{AudioManager, LogSink};
use cannon_block_breaker::platform::{FrameClock, SnapshotCell};
use cannon_block_breaker::sim::{Autopilot, GameEvent};
use cannon_block_breaker::ui::{GameOverDialog, hud_line};
use cannon_block_breaker::{CannonGame, GameError, Settings, Tuning};

const SCREEN_WIDTH: f32 = 800.0;
const SCREEN_HEIGHT: f32 = 480.0;
/// Pause between autopilot decisions
const AUTOPILOT_INTERVAL: Duration = Duration::from_millis(250);

fn main() {
    env_logger::init();
    log::info!("Cannon Block Breaker (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match std::fs::read_to_string(path)
        .map_err(GameError::from)
        .and_then(|json| Tuning::from_json(&json))
    {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Using default tuning ({})", e);
            Tuning::default()
        }
    }
}

fn run() -> Result<(), GameError> {
    let args: Vec<String> = std::env::args().collect();
    let settings = match args.get(1) {
        Some(path) => Settings::load_or_default(Path::new(path)),
        None => Settings::default(),
    };
    let tuning = load_tuning(args.get(2).map(String::as_str));

    let mut game = CannonGame::new(tuning);
    game.new_game(SCREEN_WIDTH, SCREEN_HEIGHT)?;

    let controls = game.controls();
    let snapshots = Arc::new(SnapshotCell::new());
    snapshots.publish(game.snapshot()?);

    let (frame_tx, frame_rx) = mpsc::channel::<Vec<GameEvent>>();

    // Simulation thread: the only place game state is mutated
    let sim_snapshots = Arc::clone(&snapshots);
    let sim_controls = Arc::clone(&controls);
    let frame_interval = Duration::from_secs_f32(settings.frame_interval());
    let max_frame_dt = settings.max_frame_dt;
    let sim = thread::spawn(move || -> Result<(), GameError> {
        let mut clock = FrameClock::new(max_frame_dt);
        while !sim_controls.quit_requested() {
            clock.sync_paused(sim_controls.is_paused());
            if let Some(dt) = clock.frame() {
                let events = game.step(dt)?;
                sim_snapshots.publish(game.snapshot()?);
                let over = events.iter().any(|e| matches!(e, GameEvent::GameOver(_)));
                if frame_tx.send(events).is_err() || over {
                    break;
                }
            }
            thread::sleep(frame_interval);
        }
        Ok(())
    });

    // Input thread: the autopilot only sees published snapshots
    let pilot_snapshots = Arc::clone(&snapshots);
    let pilot_controls = Arc::clone(&controls);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let pilot = thread::spawn(move || {
        let mut autopilot = Autopilot::new(seed);
        while !pilot_controls.quit_requested() {
            if let Some(snapshot) = pilot_snapshots.latest() {
                if let Some(aim) = autopilot.next_shot(&snapshot) {
                    pilot_controls.aim.set(aim.x, aim.y);
                    pilot_controls.fire.request();
                }
            }
            thread::sleep(AUTOPILOT_INTERVAL);
        }
    });

    // Presenter
    let mut audio = AudioManager::with_settings(LogSink, &settings);
    let mut frames: u64 = 0;
    for events in frame_rx {
        frames += 1;
        audio.dispatch(&events);
        for event in &events {
            match event {
                GameEvent::TargetHit { piece } => log::info!("Target piece {} hit", piece),
                GameEvent::BlockerHit => log::info!("Blocked!"),
                GameEvent::Missed => log::debug!("Missed"),
                GameEvent::GameOver(report) => {
                    let dialog = GameOverDialog::from_report(report);
                    println!("{}\n{}\n[{}]", dialog.title, dialog.message, dialog.button);
                }
                GameEvent::CannonFired => {}
            }
        }
        if settings.hud_every > 0 && frames % settings.hud_every as u64 == 0 {
            if let Some(snapshot) = snapshots.latest() {
                log::info!("{}", hud_line(&snapshot));
            }
        }
    }

    controls.request_quit();
    let _ = pilot.join();
    match sim.join() {
        Ok(result) => result,
        Err(_) => {
            log::error!("Simulation thread panicked");
            Ok(())
        }
    }
}
