//! Selim terminal player entry point.

use std::error::Error;

use selim_content::application::loader::load_dialogs_or_none;
use selim_content::domain::dataset::IngestedDialogs;
use selim_core::clock::SystemClock;
use selim_core::scheduler::TimerQueue;
use selim_player::command::PlayerCommand;
use selim_player::config::{LogFormat, PlayerConfig};
use selim_player::terminal::{TextRenderer, describe};
use selim_presenter::domain::aggregates::PresenterConfig;
use selim_scenes::application::adventure::Adventure;
use selim_scenes::application::query_handlers::get_adventure_view;
use selim_scenes::domain::commands::Input;
use selim_scenes::domain::events::SceneOutcome;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = PlayerConfig::from_env()?;

    // Logs go to stderr so they never interleave with the story on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }

    tracing::info!(
        dialogs = %config.dialogs_path.display(),
        validation = ?config.validation,
        "Starting Selim player"
    );

    let dialogs = load_dialogs_or_none(&config.dialogs_path, config.validation)?
        .map(IngestedDialogs::into_set);
    if dialogs.is_none() {
        tracing::warn!("no dialog dataset found, scenes will stay silent");
    }

    let clock = SystemClock;
    let mut timers = TimerQueue::new();
    let mut adventure = Adventure::new(dialogs, PresenterConfig::default(), config.viewport);
    let outcomes = adventure.begin(&mut timers, &clock);
    report(&outcomes);
    let mut was_typing = adventure.presenter().is_typing();
    if !was_typing {
        redraw(&adventure);
    }

    let mut frames = tokio::time::interval(config.frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while !adventure.is_finished() {
        tokio::select! {
            now = frames.tick() => {
                let elapsed = now.saturating_duration_since(last_tick);
                last_tick = now;
                for handle in timers.advance(elapsed) {
                    let outcomes = adventure.handle_input(Input::TimerFired(handle), &mut timers, &clock);
                    report(&outcomes);
                }
                let typing = adventure.presenter().is_typing();
                if was_typing && !typing {
                    redraw(&adventure);
                }
                was_typing = typing;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed");
                    break;
                };
                let command = match line.parse::<PlayerCommand>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("?? {e}");
                        continue;
                    }
                };
                match command {
                    PlayerCommand::Quit => break,
                    PlayerCommand::Look => {
                        println!("{}", serde_json::to_string_pretty(&get_adventure_view(&adventure))?);
                    }
                    other => {
                        if let Some(input) = other.into_input() {
                            let outcomes = adventure.handle_input(input, &mut timers, &clock);
                            report(&outcomes);
                        }
                        was_typing = adventure.presenter().is_typing();
                        if !was_typing {
                            redraw(&adventure);
                        }
                    }
                }
            }
        }
    }

    if adventure.is_finished() {
        println!("Thanks for playing.");
    }
    tracing::info!(scene = %adventure.scene(), "Selim player stopped");
    Ok(())
}

fn report(outcomes: &[SceneOutcome]) {
    for line in outcomes.iter().map(describe) {
        println!("{line}");
    }
}

fn redraw(adventure: &Adventure) {
    let mut renderer = TextRenderer::new();
    adventure.render(&mut renderer);
    println!("{}\n", renderer.frame());
}
