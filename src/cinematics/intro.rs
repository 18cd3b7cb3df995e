//! Opening cutscene: the taco stand falls and Satan arrives
//!
//! Load sounds, blow up the taco stand, let the rubble smoke, bring Satan
//! down from the top of the screen, laugh, wipe to black, free sounds.

use crate::audio::{AudioManager, SoundSlot};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::objects::{Explosions, Starfield, TacoStand};
use crate::renderer::{Renderer, SpriteId};
use crate::settings::Settings;
use crate::sim::{Action, ActionSequencer, GameClock, SimRng};

const EXPLOSION_SOUND: SoundSlot = 0;
const EVIL_LAUGH_SOUND: SoundSlot = 1;
const EXPLOSION_SOUND_PATH: &str = "sounds/explode.wav";
const EVIL_LAUGH_SOUND_PATH: &str = "sounds/laugh.wav";

/// Sound channel and volume for one-shot cues
const CUE_CHANNEL: u8 = 0;
const CUE_VOLUME: u8 = 128;

const SATAN_FRAMES: [SpriteId; 2] = [49, 50];
const SATAN_X: i32 = 128;
const SATAN_START_Y: i32 = -10;
const SATAN_REST_Y: i32 = 100;

const BANNER_FONT: u8 = 0;
const BANNER: &str = "Hail Satan!!!";

const EXPLOSION_TICKS: u64 = 200;
const EXPLOSION_INTERVAL: u64 = 15;
const RUBBLE_TICKS: u64 = 100;
const LAUGH_TICKS: u64 = 200;
const WIPE_SPEED: i32 = 2;

/// Everything the intro actions share
pub struct IntroContext {
    pub clock: GameClock,
    pub rng: SimRng,
    pub audio: AudioManager,
    pub starfield: Starfield,
    pub taco_stand: TacoStand,
    /// Whether explosion effects are drawn
    pub effects: bool,
}

impl IntroContext {
    pub fn new(settings: &Settings, seed: u64, audio: AudioManager) -> Self {
        let mut rng = SimRng::new(seed);
        let starfield = Starfield::new(settings.star_count(), &mut rng);
        Self {
            clock: GameClock::new(),
            rng,
            audio,
            starfield,
            taco_stand: TacoStand::default(),
            effects: settings.explosions,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    /// Background objects keep moving in every scene
    fn advance_scenery(&mut self) {
        let ticks = self.ticks();
        self.starfield.update();
        self.taco_stand.update(ticks);
    }

    fn draw_scenery(&self, renderer: &mut dyn Renderer) {
        renderer.clear();
        self.starfield.draw(renderer);
        self.taco_stand.draw(renderer);
    }
}

/// Satan's two-frame idle flicker
fn satan_frame(ticks: u64) -> SpriteId {
    if ticks % 12 > 6 { SATAN_FRAMES[0] } else { SATAN_FRAMES[1] }
}

/// The full intro, in play order
pub fn intro_actions() -> Vec<Box<dyn Action<IntroContext>>> {
    vec![
        Box::new(LoadSounds),
        Box::new(TacoStandExplosions::default()),
        Box::new(TacoStandDestroyed::default()),
        Box::new(SatanEnters::default()),
        Box::new(HailSatan::default()),
        Box::new(ScreenWipe::default()),
        Box::new(FreeSounds),
    ]
}

pub fn intro_sequence() -> ActionSequencer<IntroContext> {
    ActionSequencer::new(intro_actions())
}

//--- LoadSounds ----------------------------------------------------------

struct LoadSounds;

impl Action<IntroContext> for LoadSounds {
    fn enter(&mut self, ctx: &mut IntroContext) {
        ctx.audio.load(EXPLOSION_SOUND, EXPLOSION_SOUND_PATH);
        ctx.audio.load(EVIL_LAUGH_SOUND, EVIL_LAUGH_SOUND_PATH);
    }

    fn update(&mut self, _ctx: &mut IntroContext) -> bool {
        true
    }

    fn draw(&self, _ctx: &IntroContext, renderer: &mut dyn Renderer) {
        renderer.clear();
    }
}

//--- TacoStandExplosions -------------------------------------------------

#[derive(Default)]
struct TacoStandExplosions {
    explosions: Explosions,
    deadline: u64,
}

impl Action<IntroContext> for TacoStandExplosions {
    fn enter(&mut self, ctx: &mut IntroContext) {
        self.deadline = ctx.clock.after(EXPLOSION_TICKS);
        ctx.taco_stand.panic();
    }

    fn update(&mut self, ctx: &mut IntroContext) -> bool {
        ctx.advance_scenery();
        let ticks = ctx.ticks();
        self.explosions.update(ticks);

        if ticks % EXPLOSION_INTERVAL == 0 {
            let (x, y) = (ctx.rng.range(10, 200), ctx.rng.range(170, 200));
            self.explosions.create(x, y, ticks);
            let (x, y) = (ctx.rng.range(10, 50), ctx.rng.range(170, 200));
            self.explosions.create(x, y, ticks);
            ctx.audio.play(EXPLOSION_SOUND, CUE_CHANNEL, CUE_VOLUME);
        }

        ticks > self.deadline
    }

    fn draw(&self, ctx: &IntroContext, renderer: &mut dyn Renderer) {
        ctx.draw_scenery(renderer);
        if ctx.effects {
            self.explosions.draw(renderer);
        }
    }
}

//--- TacoStandDestroyed --------------------------------------------------

#[derive(Default)]
struct TacoStandDestroyed {
    deadline: u64,
}

impl Action<IntroContext> for TacoStandDestroyed {
    fn enter(&mut self, ctx: &mut IntroContext) {
        self.deadline = ctx.clock.after(RUBBLE_TICKS);
        ctx.taco_stand.destroy();
    }

    fn update(&mut self, ctx: &mut IntroContext) -> bool {
        ctx.advance_scenery();
        ctx.ticks() > self.deadline
    }

    fn draw(&self, ctx: &IntroContext, renderer: &mut dyn Renderer) {
        ctx.draw_scenery(renderer);
    }
}

//--- SatanEnters ---------------------------------------------------------

struct SatanEnters {
    y: i32,
}

impl Default for SatanEnters {
    fn default() -> Self {
        Self { y: SATAN_START_Y }
    }
}

impl Action<IntroContext> for SatanEnters {
    fn update(&mut self, ctx: &mut IntroContext) -> bool {
        ctx.advance_scenery();
        self.y += 1;
        self.y >= SATAN_REST_Y
    }

    fn draw(&self, ctx: &IntroContext, renderer: &mut dyn Renderer) {
        ctx.draw_scenery(renderer);
        renderer.sprite(SATAN_FRAMES[0], SATAN_X, self.y);
    }
}

//--- HailSatan -----------------------------------------------------------

struct HailSatan {
    deadline: u64,
    frame: SpriteId,
}

impl Default for HailSatan {
    fn default() -> Self {
        Self {
            deadline: 0,
            frame: SATAN_FRAMES[0],
        }
    }
}

impl Action<IntroContext> for HailSatan {
    fn enter(&mut self, ctx: &mut IntroContext) {
        self.deadline = ctx.clock.after(LAUGH_TICKS);
        ctx.audio.play(EVIL_LAUGH_SOUND, CUE_CHANNEL, CUE_VOLUME);
    }

    fn update(&mut self, ctx: &mut IntroContext) -> bool {
        ctx.advance_scenery();
        self.frame = satan_frame(ctx.ticks());
        ctx.ticks() > self.deadline
    }

    fn draw(&self, ctx: &IntroContext, renderer: &mut dyn Renderer) {
        ctx.draw_scenery(renderer);
        renderer.sprite(self.frame, SATAN_X, SATAN_REST_Y);
        renderer.text(BANNER_FONT, 20, 50, BANNER);
    }
}

//--- ScreenWipe ----------------------------------------------------------

struct ScreenWipe {
    /// Left edge of the black curtain
    curtain: i32,
    frame: SpriteId,
}

impl Default for ScreenWipe {
    fn default() -> Self {
        Self {
            curtain: SCREEN_WIDTH,
            frame: SATAN_FRAMES[0],
        }
    }
}

impl Action<IntroContext> for ScreenWipe {
    fn update(&mut self, ctx: &mut IntroContext) -> bool {
        ctx.advance_scenery();
        self.frame = satan_frame(ctx.ticks());
        self.curtain = (self.curtain - WIPE_SPEED).max(0);
        self.curtain == 0
    }

    fn draw(&self, ctx: &IntroContext, renderer: &mut dyn Renderer) {
        ctx.draw_scenery(renderer);
        renderer.sprite(self.frame, SATAN_X, SATAN_REST_Y);
        renderer.rect_fill(self.curtain, 0, SCREEN_WIDTH, SCREEN_HEIGHT, 0);
    }
}

//--- FreeSounds ----------------------------------------------------------

struct FreeSounds;

impl Action<IntroContext> for FreeSounds {
    fn enter(&mut self, ctx: &mut IntroContext) {
        ctx.audio.free(EXPLOSION_SOUND);
        ctx.audio.free(EVIL_LAUGH_SOUND);
    }

    fn update(&mut self, _ctx: &mut IntroContext) -> bool {
        true
    }

    fn draw(&self, _ctx: &IntroContext, renderer: &mut dyn Renderer) {
        renderer.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::audio::{AudioCommand, AudioLog};
    use crate::objects::StandMode;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::SequencerState;

    /// Frames the whole intro takes: 1 + 201 + 101 + 110 + 201 + 128 + 1
    const INTRO_FRAMES: u64 = 743;

    fn context(settings: &Settings) -> (IntroContext, Rc<RefCell<AudioLog>>) {
        let log = Rc::new(RefCell::new(AudioLog::new()));
        let audio = AudioManager::new(Box::new(log.clone()));
        (IntroContext::new(settings, 1234, audio), log)
    }

    /// Host loop: advance the clock, update, draw
    fn frame(
        sequencer: &mut ActionSequencer<IntroContext>,
        ctx: &mut IntroContext,
        list: &mut DrawList,
    ) -> bool {
        ctx.clock.advance();
        let done = sequencer.update(ctx);
        list.begin_frame();
        sequencer.draw(ctx, list);
        done
    }

    #[test]
    fn test_intro_runs_to_completion() {
        let (mut ctx, log) = context(&Settings::default());
        let mut sequencer = intro_sequence();
        let mut list = DrawList::new();
        assert_eq!(sequencer.len(), 7);

        let mut frames = 0;
        while !frame(&mut sequencer, &mut ctx, &mut list) {
            frames += 1;
            assert!(frames < 10_000, "intro stalled in {:?}", sequencer.active_name());
        }
        frames += 1;

        assert_eq!(frames, INTRO_FRAMES);
        assert_eq!(ctx.ticks(), INTRO_FRAMES);
        assert_eq!(ctx.rng.seed(), 1234);
        assert_eq!(sequencer.state(), SequencerState::Finished);
        assert!(list.is_empty());
        assert_eq!(ctx.taco_stand.mode(), StandMode::Destroyed);

        let log = log.borrow();
        assert!(!log.is_loaded(EXPLOSION_SOUND));
        assert!(!log.is_loaded(EVIL_LAUGH_SOUND));
        // Multiples of 15 between ticks 2 and 202
        assert_eq!(log.plays_of(EXPLOSION_SOUND), 13);
        assert_eq!(log.plays_of(EVIL_LAUGH_SOUND), 1);
        assert!(matches!(log.commands.first(), Some(AudioCommand::Load { slot: 0, .. })));
        assert_eq!(log.commands.last(), Some(&AudioCommand::Free { slot: EVIL_LAUGH_SOUND }));
    }

    #[test]
    fn test_scene_progression() {
        let (mut ctx, _log) = context(&Settings::default());
        let mut sequencer = intro_sequence();
        let mut list = DrawList::new();

        frame(&mut sequencer, &mut ctx, &mut list);
        assert_eq!(sequencer.active_name(), Some("TacoStandExplosions"));
        assert_eq!(ctx.taco_stand.mode(), StandMode::Panic);

        for _ in 0..201 {
            frame(&mut sequencer, &mut ctx, &mut list);
        }
        assert_eq!(sequencer.active_name(), Some("TacoStandDestroyed"));
        assert_eq!(ctx.taco_stand.mode(), StandMode::Destroyed);

        for _ in 0..101 + 110 {
            frame(&mut sequencer, &mut ctx, &mut list);
        }
        assert_eq!(sequencer.active_name(), Some("HailSatan"));
        assert!(list.commands.iter().any(|cmd| matches!(
            cmd,
            DrawCommand::Sprite { x: SATAN_X, y: SATAN_REST_Y, .. }
        )));
    }

    #[test]
    fn test_explosions_follow_effects_setting() {
        let count_explosion_sprites = |settings: &Settings| {
            let (mut ctx, _log) = context(settings);
            let mut sequencer = intro_sequence();
            let mut list = DrawList::new();
            // Through tick 31, after the second explosion volley
            for _ in 0..31 {
                frame(&mut sequencer, &mut ctx, &mut list);
            }
            list.sprites().filter(|(id, _, _)| (16..21).contains(id)).count()
        };

        assert_eq!(count_explosion_sprites(&Settings::default()), 4);
        let mut quiet = Settings::default();
        quiet.explosions = false;
        assert_eq!(count_explosion_sprites(&quiet), 0);
    }

    #[test]
    fn test_wipe_reaches_left_edge() {
        let mut ctx = context(&Settings::default()).0;
        let mut wipe = ScreenWipe::default();
        let mut updates = 0;
        while !wipe.update(&mut ctx) {
            updates += 1;
        }
        assert_eq!(updates + 1, 128);

        let mut list = DrawList::new();
        wipe.draw(&ctx, &mut list);
        assert_eq!(
            list.commands.last(),
            Some(&DrawCommand::RectFill {
                x0: 0,
                y0: 0,
                x1: SCREEN_WIDTH,
                y1: SCREEN_HEIGHT,
                color: 0
            })
        );
    }
}
