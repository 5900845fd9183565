use anyhow::Result;
use clap::Parser;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

use skytrace::input::{self, source_for};
use skytrace::playback::{PlaybackConfig, PlaybackEngine};
use skytrace::scene::{project_path, LogRenderer, SceneRenderer};
use skytrace::settings::AppSettings;

/// Replay a SkyCell balloon flight log in the terminal
#[derive(Parser, Debug)]
#[command(name = "skytrace", version, about)]
struct Cli {
    /// Flight log URL or file path (defaults to the saved source)
    source: Option<String>,

    /// Time-compression multiplier (100 = an hour of flight in 36s)
    #[arg(long)]
    speed: Option<f64>,

    /// Scene scale applied by the projection
    #[arg(long)]
    scale: Option<f64>,

    /// Keep polling the source and swap reloaded data into the replay
    #[arg(long)]
    follow: bool,

    /// Reload interval in seconds for --follow
    #[arg(long)]
    poll: Option<u64>,

    /// Print the parsed log summary and exit without replaying
    #[arg(long)]
    summary: bool,

    /// Persist the effective source/speed/scale as defaults
    #[arg(long)]
    save_settings: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = AppSettings::load();
    if let Some(ref source) = cli.source {
        settings.source = Some(source.clone());
    }
    if let Some(speed) = cli.speed {
        settings.speed_multiplier = speed;
    }
    if let Some(scale) = cli.scale {
        settings.scale = scale;
    }
    if let Some(poll) = cli.poll {
        settings.poll_secs = poll;
    }

    let locator = settings
        .source
        .clone()
        .ok_or_else(|| anyhow::anyhow!("no flight log source given (pass one or --save-settings a default)"))?;

    if cli.save_settings {
        settings.save();
    }

    let source = source_for(&locator);
    let data = input::load_trajectory(source.as_ref()).await;

    if data.is_empty() {
        info!("no trajectory data available from {}", source.describe());
        if !cli.follow {
            return Ok(());
        }
    } else {
        info!(
            "loaded {} fixes: lat {:.5}..{:.5}, lon {:.5}..{:.5}, alt {:.0}..{:.0} m, center ({:.5}, {:.5})",
            data.len(),
            data.bounds.lat.min,
            data.bounds.lat.max,
            data.bounds.lon.min,
            data.bounds.lon.max,
            data.bounds.alt.min,
            data.bounds.alt.max,
            data.center.lat,
            data.center.lon,
        );
    }

    if cli.summary {
        return Ok(());
    }

    let config = PlaybackConfig {
        speed_multiplier: settings.speed_multiplier,
        scale: settings.scale,
        ..Default::default()
    };

    let mut renderer = LogRenderer::new();
    renderer.set_path(&project_path(&data, config.scale));

    let mut engine = PlaybackEngine::new(data, config);

    // telemetry readout on each index advance (interpolation frames are
    // position-only and stay quiet)
    let mut last_index = usize::MAX;
    engine.subscribe(move |update| {
        if let Some(ref point) = update.point {
            if update.index != last_index {
                last_index = update.index;
                info!(
                    "[{:>5.1}%] fix {}/{} {} alt {:.0} m ascent {:+.1} m/s speed {:.0} batt {:.2} V",
                    if update.total <= 1 {
                        0.0
                    } else {
                        update.index as f64 / (update.total - 1) as f64 * 100.0
                    },
                    update.index + 1,
                    update.total,
                    point.datetime,
                    point.altitude,
                    point.ascent_rate,
                    point.speed,
                    point.battery,
                );
            }
        }
    });

    engine.play();
    if !engine.is_playing() && !cli.follow {
        info!("nothing to replay");
        return Ok(());
    }

    let mut frame = tokio::time::interval(Duration::from_millis(16));
    let mut poll = tokio::time::interval(Duration::from_secs(settings.poll_secs.max(1)));
    poll.reset(); // the first poll fires a full interval from now

    loop {
        tokio::select! {
            _ = frame.tick() => {
                engine.tick(Instant::now());
                renderer.set_current_position(engine.position());

                if !engine.is_playing() && !cli.follow {
                    info!(
                        "replay finished at fix {}/{}",
                        engine.current_index() + 1,
                        engine.total_points()
                    );
                    break;
                }
            }
            _ = poll.tick(), if cli.follow => {
                let fresh = input::load_trajectory(source.as_ref()).await;
                renderer.set_path(&project_path(&fresh, settings.scale));
                engine.set_data(fresh);
                // resume in case the reload appended fixes past the cursor
                engine.play();
            }
        }
    }

    Ok(())
}
