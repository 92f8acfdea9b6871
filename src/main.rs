mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use survival_game::compute::{fire_projectile, init_state, spawn_wave, tick, SpawnTimer};
use survival_game::consts::{MAX_SUBSTEPS, SIM_DT};
use survival_game::entities::GameStatus;
use survival_game::input::{key_name, InputState};
use survival_game::viewport::Viewport;
use survival_game::GameConfig;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// A key counts as released once this many frames pass without a press or
/// repeat event.  Covers terminals that don't emit key-release events: the
/// OS key-repeat rate is ≥ 15 Hz, so 4 frames (≈133 ms) is always refreshed
/// while the key is held.
const HOLD_WINDOW: u64 = 4;

// ── Logging & configuration ───────────────────────────────────────────────────

/// The terminal is the game surface, so log lines go to a file instead.
fn init_logging() {
    let path = std::env::temp_dir().join("survival_game.log");
    let Ok(file) = File::create(&path) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("logging to {}", path.display());
}

fn load_config() -> GameConfig {
    let Some(path) = std::env::var_os(GameConfig::ENV_PATH) else {
        log::info!("using default tuning");
        return GameConfig::default();
    };
    match GameConfig::load(Path::new(&path)) {
        Ok(config) => {
            log::info!("loaded tuning from {}", Path::new(&path).display());
            config
        }
        Err(e) => {
            log::warn!("ignoring tuning file {}: {}", Path::new(&path).display(), e);
            GameConfig::default()
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input events only update the key map (or fire, for clicks).  Simulation
/// advances in fixed `SIM_DT` steps drawn from an accumulator of real time,
/// so speeds do not depend on the frame rate.  The spawn timer runs on the
/// same simulated clock and stops with the game.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut state = init_state(config);
    let mut input = InputState::new();
    let mut spawner = SpawnTimer::new(config.spawn.interval_secs);
    let mut accumulator: f32 = 0.0;
    let mut last = Instant::now();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let (cols, rows) = terminal::size()?;
        let view = Viewport::new(cols, rows, state.width, state.height);

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                    if kind == KeyEventKind::Press {
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Char('r') | KeyCode::Char('R')
                                if state.status == GameStatus::GameOver =>
                            {
                                log::info!("restarting after final score {}", state.score);
                                state = init_state(config);
                                spawner = SpawnTimer::new(config.spawn.interval_secs);
                                input.clear();
                                continue;
                            }
                            _ => {}
                        }
                    }
                    let Some(name) = key_name(&code) else {
                        continue;
                    };
                    match kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => input.press(&name, frame),
                        KeyEventKind::Release => input.release(&name),
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if let Some(target) = view.to_world(column, row) {
                        state = fire_projectile(&state, config, target);
                    }
                }
                _ => {}
            }
        }
        input.expire(frame, HOLD_WINDOW);

        // ── Fixed-timestep simulation ─────────────────────────────────────────
        let now = Instant::now();
        accumulator += (now - last).as_secs_f32().min(0.1);
        last = now;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            accumulator -= SIM_DT;
            substeps += 1;
            if state.status == GameStatus::GameOver {
                accumulator = 0.0;
                break;
            }
            state = tick(&state, &input.tick_input(), config, SIM_DT);
            for _ in 0..spawner.advance(SIM_DT) {
                state = spawn_wave(&state, config, &mut rng);
            }
        }

        display::render(out, &state, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();
    let config = load_config();
    match config.to_json() {
        Ok(json) => log::debug!("effective tuning:\n{}", json),
        Err(e) => log::warn!("could not serialise tuning: {}", e),
    }
    log::info!("survival starting, {} vs the horde", config.player.name);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back on HOLD_WINDOW.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &config, &rx);
    if let Err(e) = &result {
        log::error!("game loop failed: {}", e);
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("survival exiting");
    result
}
