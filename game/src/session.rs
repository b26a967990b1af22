use engine::{AssetLoader, Canvas, EngineError, FrameContext, Game, Sprite};
use glam::Vec2;

use crate::actor::Skin;
use crate::collision::CollisionEngine;
use crate::config::{SessionConfig, SpawnRules};
use crate::error::StationError;
use crate::footprint::Footprint;
use crate::random::RandomSource;
use crate::roster::{Roster, SlotIndex};

/// Everything one run of the station needs, built once at startup.
pub struct Session<S> {
    roster: Roster,
    collisions: CollisionEngine,
    source: S,
    spawn: SpawnRules,
    background: Sprite,
    background_position: Vec2,
    skins: [Sprite; 3],
}

impl<S: RandomSource> Session<S> {
    /// Loads the images, sizes the footprint from the first skin and rolls
    /// the roster. A missing image or an impostor drawn for slot 0 is fatal.
    pub fn start(config: &SessionConfig, mut source: S, assets: &mut dyn AssetLoader) -> Result<Self, StationError> {
        let background = assets.load_image(&config.background)?;
        let skins = [
            assets.load_image(&config.skins[0])?,
            assets.load_image(&config.skins[1])?,
            assets.load_image(&config.skins[2])?,
        ];
        let footprint = Footprint::of(&skins[0]);
        log::debug!("footprint {}x{}", footprint.width(), footprint.height());

        let roster = Roster::initialize(&mut source, config.default_position())?;
        Ok(Self {
            roster,
            collisions: CollisionEngine::new(footprint),
            source,
            spawn: config.spawn,
            background,
            background_position: config.background_position(),
            skins,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn collisions(&self) -> &CollisionEngine {
        &self.collisions
    }

    pub fn footprint(&self) -> &Footprint {
        self.collisions.footprint()
    }

    pub fn sprite_for(&self, skin: Skin) -> Sprite {
        self.skins[skin.index()]
    }

    /// Drag, collide, draw. Returns how many actors died this frame.
    pub fn on_frame(&mut self, pointer: Vec2, canvas: &mut dyn Canvas) -> usize {
        // dragged actors move before collisions, so a drop onto the impostor
        // kills on this frame rather than the next
        self.roster.follow_pointer(pointer);
        let eliminated = self.collisions.frame_tick(&mut self.roster);

        canvas.draw_sprite(self.background.id, self.background_position);
        for (_, actor) in self.roster.iter().filter(|(_, actor)| actor.is_alive()) {
            canvas.draw_sprite(self.skins[actor.skin().index()].id, actor.position());
        }
        eliminated
    }

    pub fn on_key_down(&mut self, key: char) -> Option<SlotIndex> {
        self.roster.spawn_on_trigger(key, &self.spawn, &mut self.source)
    }

    pub fn on_mouse_down(&mut self, point: Vec2) -> usize {
        self.roster.begin_drag(point, self.collisions.footprint())
    }

    pub fn on_mouse_up(&mut self) {
        self.roster.end_drag_all();
    }
}

/// [`Game`] adapter: holds the config until init, then the live session.
pub struct Station<S> {
    config: SessionConfig,
    source: Option<S>,
    session: Option<Session<S>>,
}

impl<S: RandomSource> Station<S> {
    pub fn new(config: SessionConfig, source: S) -> Self {
        Self {
            config,
            source: Some(source),
            session: None,
        }
    }

    pub fn session(&self) -> Option<&Session<S>> {
        self.session.as_ref()
    }
}

impl<S: RandomSource> Game for Station<S> {
    fn init(&mut self, assets: &mut dyn AssetLoader) -> Result<(), EngineError> {
        let Some(source) = self.source.take() else {
            log::warn!("station already initialised");
            return Ok(());
        };
        self.session = Some(Session::start(&self.config, source, assets)?);
        Ok(())
    }

    fn frame(&mut self, ctx: &FrameContext<'_>, canvas: &mut dyn Canvas) {
        if let Some(session) = &mut self.session {
            session.on_frame(ctx.input.pointer(), canvas);
        }
    }

    fn key_down(&mut self, key: char) {
        if let Some(session) = &mut self.session {
            session.on_key_down(key);
        }
    }

    fn mouse_down(&mut self, point: Vec2) {
        if let Some(session) = &mut self.session {
            session.on_mouse_down(point);
        }
    }

    fn mouse_up(&mut self) {
        if let Some(session) = &mut self.session {
            session.on_mouse_up();
        }
    }
}
