//! Taco Stand headless runner
//!
//! Plays the intro cutscene against recording renderer and audio backends,
//! then has Satan fire a volley at the taco stand, and prints a JSON summary.
//!
//! Usage: `taco-stand [max-ticks] [settings.json] [low|medium|high]`

use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use taco_stand::Settings;
use taco_stand::audio::{AudioLog, AudioManager};
use taco_stand::cinematics::{IntroContext, intro_sequence};
use taco_stand::consts::TICKS_PER_SECOND;
use taco_stand::renderer::{DrawCommand, DrawList};
use taco_stand::sim::{BulletPool, CollisionType};

/// Safety net for the intro
const DEFAULT_MAX_TICKS: u64 = 5_000;
/// Length of the volley after the intro
const VOLLEY_TICKS: u64 = 2 * TICKS_PER_SECOND;
/// Ticks between shots
const VOLLEY_INTERVAL: u64 = 2;
const VOLLEY_SPRITE: u16 = 60;
const VOLLEY_SPEED: i32 = 4;

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    quality: &'static str,
    intro_frames: u64,
    intro_seconds: f64,
    intro_finished: bool,
    draw_commands: usize,
    sounds_played: usize,
    shots_fired: u32,
    shots_dropped: u32,
    volley_hits: u32,
    last_frame: Vec<DrawCommand>,
}

fn pick_seed(settings: &Settings) -> u64 {
    settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let max_ticks = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid tick limit {:?}", arg);
            DEFAULT_MAX_TICKS
        }),
        None => DEFAULT_MAX_TICKS,
    };
    let mut settings = match args.next() {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::default(),
    };
    if let Some(name) = args.next() {
        settings.apply_preset_named(&name);
    }

    let seed = pick_seed(&settings);
    log::info!("Starting intro with seed {} ({} quality)", seed, settings.quality.as_str());

    let audio_log = Rc::new(RefCell::new(AudioLog::new()));
    let audio = AudioManager::with_settings(Box::new(audio_log.clone()), &settings);
    let mut ctx = IntroContext::new(&settings, seed, audio);
    let mut sequencer = intro_sequence();
    let mut frame = DrawList::new();
    let mut draw_commands = 0;

    //--- Intro ------------------------------------------------------------
    let mut intro_frames = 0;
    let mut intro_finished = false;
    while intro_frames < max_ticks {
        ctx.clock.advance();
        intro_finished = sequencer.update(&mut ctx);
        frame.begin_frame();
        sequencer.draw(&ctx, &mut frame);
        draw_commands += frame.len();
        intro_frames += 1;

        if intro_finished {
            break;
        }
    }
    if !intro_finished {
        log::warn!(
            "Intro still running after {} ticks (in {:?})",
            intro_frames,
            sequencer.active_name()
        );
    }

    //--- Volley -----------------------------------------------------------
    let mut bullets = BulletPool::new();
    let mask = CollisionType::Prop.bits();
    let (mut fired, mut dropped, mut hits) = (0, 0, 0);

    for _ in 0..VOLLEY_TICKS {
        ctx.clock.advance();
        let ticks = ctx.ticks();

        if ticks % VOLLEY_INTERVAL == 0 {
            if bullets.is_exhausted() {
                dropped += 1;
            } else {
                fired += 1;
            }
            bullets.create(128, 100, VOLLEY_SPEED, VOLLEY_SPRITE, mask);
        }

        bullets.update();
        if bullets.check_collision(&ctx.taco_stand) {
            hits += 1;
        }

        frame.begin_frame();
        ctx.starfield.draw(&mut frame);
        ctx.taco_stand.draw(&mut frame);
        bullets.draw(&mut frame);
        draw_commands += frame.len();
    }
    log::info!("Volley: {} fired, {} dropped, {} hits", fired, dropped, hits);

    let sounds_played = audio_log
        .borrow()
        .commands
        .iter()
        .filter(|cmd| matches!(cmd, taco_stand::audio::AudioCommand::Play { .. }))
        .count();

    let summary = RunSummary {
        seed: ctx.rng.seed(),
        quality: settings.quality.as_str(),
        intro_frames,
        intro_seconds: intro_frames as f64 / TICKS_PER_SECOND as f64,
        intro_finished,
        draw_commands,
        sounds_played,
        shots_fired: fired,
        shots_dropped: dropped,
        volley_hits: hits,
        last_frame: frame.commands.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
