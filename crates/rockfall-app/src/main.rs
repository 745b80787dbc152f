use tracing::{error, info, warn};

use rockfall_app::autopilot::Autopilot;
use rockfall_app::config;
use rockfall_app::state::AppState;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let sim_config = config::sim_config();
    let run_ticks = config::run_ticks();
    let state = AppState::new();
    if let Err(error) = state.start(sim_config) {
        error!(%error, "failed to start simulation");
        std::process::exit(1);
    }
    info!(seed = sim_config.seed, run_ticks, "rockfall running");

    let mut autopilot = Autopilot::new(config::fire_every());
    let mut last_report = 0;
    let mut last_snapshot = None;

    'drive: loop {
        std::thread::sleep(config::POLL_INTERVAL);
        let Some(snapshot) = state.latest() else {
            continue;
        };

        for command in autopilot.commands(&snapshot) {
            if let Err(error) = state.send_command(command) {
                warn!(%error, "game loop no longer accepting commands");
                break 'drive;
            }
        }

        let tick = snapshot.time.tick;
        if tick >= last_report + config::REPORT_INTERVAL_TICKS {
            last_report = tick;
            info!(
                tick,
                wave = snapshot.wave.wave,
                remaining = snapshot.wave.remaining,
                entities = snapshot.entities.len(),
                points = snapshot.score.points,
                ships_lost = snapshot.score.ships_lost,
                "progress"
            );
        }

        let done = run_ticks > 0 && tick >= run_ticks;
        last_snapshot = Some(snapshot);
        if done {
            break;
        }
    }

    state.shutdown();
    if let Some(snapshot) = last_snapshot {
        info!(
            tick = snapshot.time.tick,
            wave = snapshot.wave.wave,
            points = snapshot.score.points,
            asteroids_destroyed = snapshot.score.asteroids_destroyed,
            shots_fired = snapshot.score.shots_fired,
            ships_lost = snapshot.score.ships_lost,
            "final score"
        );
    }
}
