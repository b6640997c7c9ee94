//! Application state and the per-frame loop
//!
//! `AppState` owns everything: config, the star store, the jar world, the
//! fold session and UI state. The logic methods (`submit`, `update`,
//! `delete_star`, ...) need no window and are what the tests drive;
//! `frame` reads input and draws, then calls into them.

use macroquad::logging::{debug, info, warn};
use macroquad::prelude::*;

use crate::config::AppConfig;
use crate::fold::{FoldSession, FoldStage, Haptics};
use crate::geometry::{rebuild, StarTopology, PUFFED, VERTEX_COUNT};
use crate::jar::JarWorld;
use crate::locale::{self, Language, StringId};
use crate::pick::screen_to_ray;
use crate::render::{draw_fold, draw_jar, draw_jar_stars, fold_area, jar_camera};
use crate::rng::Rng;
use crate::star::{StarColor, StarId, StarStore, MAX_MESSAGE_LENGTH};
use crate::storage::KeyValueStore;
use crate::ui::theme::SKY_COLOR;
use crate::ui::{
    button, confirm_dialog, header, star_card, wish_list, wish_strip, ButtonStyle, CardAction,
    HeaderAction, ListAction, MouseState, Rect, StripAction, TextInputState, UiContext,
    HEADER_HEIGHT, STRIP_HEIGHT,
};

/// Pointer travel under which a release counts as a tap
const TAP_SLOP: f32 = 10.0;

/// Which modal, if any, sits over the jar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    List,
    Star(StarId),
    ConfirmClear,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: StarStore,
    pub jar: JarWorld,
    pub rng: Rng,
    /// The wish being folded
    pub session: Option<FoldSession>,
    haptics: Box<dyn Haptics>,

    pub input: TextInputState,
    pub color: StarColor,
    pub language: Language,
    pub overlay: Overlay,
    ui: UiContext,
    /// Where the current press in the fold area started
    press_origin: Option<Vec2>,
    list_scroll: f32,

    topology: StarTopology,
    /// Stars in the jar are always fully puffed
    jar_star: [Vec3; VERTEX_COUNT],
}

impl AppState {
    pub fn new(config: AppConfig, backend: Box<dyn KeyValueStore>, haptics: Box<dyn Haptics>) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => Rng::new(seed),
            None => Rng::from_clock(),
        };
        let store = StarStore::load(backend, &config.storage_key);
        let mut jar = JarWorld::new(config.jar.clone());
        jar.sync(store.records(), &mut rng);
        info!("App: {} stars in the jar", jar.body_count());

        Self {
            language: config.language,
            config,
            store,
            jar,
            rng,
            session: None,
            haptics,
            input: TextInputState::new(MAX_MESSAGE_LENGTH),
            color: StarColor::default(),
            overlay: Overlay::None,
            ui: UiContext::new(),
            press_origin: None,
            list_scroll: 0.0,
            topology: StarTopology::build(),
            jar_star: rebuild(PUFFED),
        }
    }

    /// Whether something covers the jar and the wish strip
    pub fn is_modal(&self) -> bool {
        self.session.is_some() || self.overlay != Overlay::None
    }

    /// Start folding the typed wish. Does nothing while a fold is running or
    /// when the text can't become a star.
    pub fn submit(&mut self) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(session) = FoldSession::new(&self.input.text, self.color) else {
            return false;
        };
        debug!("App: folding a {} star", self.color.id());
        self.session = Some(session);
        self.input.clear();
        self.input.focused = false;
        true
    }

    /// Drop the current fold without making a star
    pub fn abandon(&mut self) {
        if self.session.take().is_some() {
            debug!("App: fold abandoned");
        }
        self.press_origin = None;
    }

    /// Press inside the fold area
    pub fn pointer_down(&mut self, pos: Vec2, now_ms: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.press_origin = Some(pos);
        session.press_start(now_ms);
    }

    /// Release after a press in the fold area: a swipe while knotting, a
    /// tap while wrapping
    pub fn pointer_up(&mut self, pos: Vec2) {
        let (Some(session), Some(origin)) = (self.session.as_mut(), self.press_origin.take()) else {
            return;
        };
        let delta = pos - origin;
        match session.stage() {
            FoldStage::Knotting => {
                session.drag_end(delta.y);
            }
            FoldStage::Wrapping if delta.length() < TAP_SLOP => {
                session.tap();
            }
            _ => {
                session.press_end();
            }
        }
    }

    /// Advance the fold and the physics by one frame
    pub fn update(&mut self, now_ms: f64, dt: f32) {
        if let Some(session) = self.session.as_mut() {
            let outcome = session.update(now_ms, &mut self.rng);
            for feedback in session.drain_feedback() {
                self.haptics.play(feedback);
            }

            if let Some(outcome) = outcome {
                match self.store.append(&outcome.message, outcome.color, outcome.hint, now_ms as i64) {
                    Ok(id) => {
                        info!("App: star {} added to the jar", id);
                        self.jar.sync(self.store.records(), &mut self.rng);
                    }
                    Err(e) => warn!("App: could not keep the star: {}", e),
                }
                self.session = None;
            }
        }

        self.jar.step(dt);
    }

    pub fn open_star(&mut self, id: StarId) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.overlay = Overlay::Star(id);
        true
    }

    /// Delete one star from the store and the jar together
    pub fn delete_star(&mut self, id: StarId) -> bool {
        let removed = self.store.delete(id);
        self.jar.remove(id);
        if self.overlay == Overlay::Star(id) {
            self.overlay = Overlay::None;
        }
        removed
    }

    /// Ask before clearing. Nothing to ask about in an empty jar.
    pub fn request_clear(&mut self) -> bool {
        if self.store.is_empty() {
            return false;
        }
        self.overlay = Overlay::ConfirmClear;
        true
    }

    pub fn confirm_clear(&mut self) {
        if self.overlay != Overlay::ConfirmClear {
            return;
        }
        info!("App: clearing {} stars", self.store.len());
        self.store.clear();
        self.jar.clear();
        self.overlay = Overlay::None;
    }

    pub fn cancel_clear(&mut self) {
        if self.overlay == Overlay::ConfirmClear {
            self.overlay = Overlay::None;
        }
    }

    /// Stars folded today, for the header
    pub fn today_count(&self, now_ms: f64) -> usize {
        self.store.count_on_day(now_ms as i64, self.config.utc_offset_minutes)
    }

    fn handle_header(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::CycleLanguage => self.language = self.language.next(),
            HeaderAction::OpenList => {
                self.list_scroll = 0.0;
                self.overlay = Overlay::List;
            }
            HeaderAction::Clear => {
                self.request_clear();
            }
        }
    }

    /// Read input, run the logic and draw one frame
    pub fn frame(&mut self, now_ms: f64) {
        let screen = Rect::screen(screen_width(), screen_height());
        self.ui.begin_frame(MouseState::capture());

        clear_background(SKY_COLOR);
        let (camera, pick_camera) = jar_camera(screen.w, screen.h);
        set_camera(&camera);
        draw_jar();
        let poses = self.jar.star_poses();
        let store = &self.store;
        draw_jar_stars(&poses, &self.jar_star, &self.topology, |id| store.get(id).map(|r| r.rgb()));
        set_default_camera();

        let modal = self.is_modal();
        if modal {
            self.input.focused = false;
        }
        // Panels under a modal are drawn but see no clicks
        let mut inert = UiContext::new();
        let today = self.today_count(now_ms);

        let ctx = if modal { &mut inert } else { &mut self.ui };
        let header_rect = screen.slice_top(HEADER_HEIGHT);
        let header_action = header(ctx, header_rect, self.language, today, self.config.daily_limit, !self.store.is_empty());
        let strip_action = wish_strip(ctx, screen.slice_bottom(STRIP_HEIGHT), &mut self.input, self.color, self.language);

        if let Some(action) = header_action {
            self.handle_header(action);
        }
        match strip_action {
            Some(StripAction::Submit) => {
                self.submit();
            }
            Some(StripAction::PickColor(color)) => self.color = color,
            None => {}
        }

        if !modal && self.ui.mouse.left_pressed && !self.ui.is_consumed() {
            let ray = screen_to_ray(self.ui.mouse.position(), vec2(screen.w, screen.h), &pick_camera);
            if let Some(id) = self.jar.pick(&ray) {
                self.open_star(id);
            }
        }

        self.fold_frame(screen, now_ms);
        self.overlay_frame(screen);
    }

    fn fold_frame(&mut self, screen: Rect, now_ms: f64) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        draw_fold(screen, session, now_ms, self.language, &self.topology);

        let area = fold_area(screen);
        let close = Rect::new(area.right() - 44.0, area.y, 40.0, 40.0);
        if button(&mut self.ui, close, "x", ButtonStyle::Secondary, true) {
            self.abandon();
            return;
        }

        let mouse = self.ui.mouse;
        if mouse.left_pressed && !self.ui.is_consumed() && mouse.inside(&area) {
            self.pointer_down(mouse.position(), now_ms);
        }
        if mouse.left_released {
            self.pointer_up(mouse.position());
        }
        self.ui.consume_if_pressed();
    }

    fn overlay_frame(&mut self, screen: Rect) {
        let offset = self.config.utc_offset_minutes;
        match self.overlay {
            Overlay::None => {}
            Overlay::List => {
                let records = self.store.sorted_newest_first();
                let action = wish_list(&mut self.ui, screen, &records, self.language, offset, &mut self.list_scroll);
                match action {
                    Some(ListAction::Close) => self.overlay = Overlay::None,
                    Some(ListAction::Open(id)) => {
                        self.open_star(id);
                    }
                    None => {}
                }
            }
            Overlay::Star(id) => {
                let Some(record) = self.store.get(id) else {
                    self.overlay = Overlay::None;
                    return;
                };
                match star_card(&mut self.ui, screen, record, self.language, offset) {
                    Some(CardAction::Close) => self.overlay = Overlay::None,
                    Some(CardAction::Delete) => {
                        self.delete_star(id);
                    }
                    None => {}
                }
            }
            Overlay::ConfirmClear => {
                let message = locale::text(self.language, StringId::ClearConfirm);
                match confirm_dialog(&mut self.ui, screen, message, self.language) {
                    Some(true) => self.confirm_clear(),
                    Some(false) => self.cancel_clear(),
                    None => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::session::WRAPS_REQUIRED;
    use crate::storage::MemoryStorage;

    struct Silent;

    impl Haptics for Silent {
        fn vibrate(&mut self, _pattern: &[u32]) {}
    }

    fn app() -> AppState {
        let config = AppConfig {
            rng_seed: Some(7),
            ..AppConfig::default()
        };
        AppState::new(config, Box::new(MemoryStorage::new()), Box::new(Silent))
    }

    /// Fold the typed wish all the way into the jar
    fn fold_through(app: &mut AppState, mut now: f64) -> f64 {
        assert!(app.submit());
        app.pointer_down(vec2(100.0, 300.0), now);
        app.pointer_up(vec2(100.0, 200.0));
        for _ in 0..WRAPS_REQUIRED {
            app.pointer_down(vec2(100.0, 300.0), now);
            app.pointer_up(vec2(102.0, 301.0));
        }
        app.pointer_down(vec2(100.0, 300.0), now);
        app.pointer_up(vec2(100.0, 300.0));
        for _ in 0..1_000 {
            now += 16.0;
            app.update(now, 1.0 / 60.0);
            if app.session.is_none() {
                return now;
            }
        }
        panic!("fold never finished");
    }

    #[test]
    fn test_submit_needs_text() {
        let mut app = app();
        assert!(!app.submit());
        app.input.insert("   ");
        assert!(!app.submit());
        assert!(app.session.is_none());
    }

    #[test]
    fn test_submit_clears_input_and_blocks_second_fold() {
        let mut app = app();
        app.input.insert("a wish");
        assert!(app.submit());
        assert!(app.input.text.is_empty());
        app.input.insert("another");
        assert!(!app.submit());
        assert_eq!(app.session.as_ref().map(|s| s.message()), Some("a wish"));
    }

    #[test]
    fn test_fold_adds_star_to_store_and_jar() {
        let mut app = app();
        app.input.insert("peace");
        app.color = StarColor::Blue;
        fold_through(&mut app, 1_700_000_000_000.0);

        assert_eq!(app.store.len(), 1);
        let record = &app.store.records()[0];
        assert_eq!(record.message, "peace");
        assert_eq!(record.color, "#2196F3");
        assert_eq!(app.jar.body_count(), 1);
        assert!(app.jar.contains(record.id));
    }

    #[test]
    fn test_swipe_down_does_not_knot() {
        let mut app = app();
        app.input.insert("wish");
        app.submit();
        app.pointer_down(vec2(0.0, 100.0), 0.0);
        app.pointer_up(vec2(0.0, 200.0));
        assert_eq!(app.session.as_ref().map(|s| s.stage()), Some(FoldStage::Knotting));
    }

    #[test]
    fn test_drag_is_not_a_wrap() {
        let mut app = app();
        app.input.insert("wish");
        app.submit();
        app.pointer_down(vec2(0.0, 300.0), 0.0);
        app.pointer_up(vec2(0.0, 200.0));
        app.pointer_down(vec2(0.0, 300.0), 0.0);
        app.pointer_up(vec2(0.0, 200.0));
        assert_eq!(app.session.as_ref().map(|s| s.wrap_count()), Some(0));
    }

    #[test]
    fn test_abandon_makes_no_star() {
        let mut app = app();
        app.input.insert("wish");
        app.submit();
        app.abandon();
        app.update(10_000.0, 1.0 / 60.0);
        assert!(app.session.is_none());
        assert!(app.store.is_empty());
        assert_eq!(app.jar.body_count(), 0);
    }

    #[test]
    fn test_abandon_cancels_pending_drop() {
        let mut app = app();
        let now = 1_700_000_000_000.0;
        app.input.insert("wish");
        assert!(app.submit());
        app.pointer_down(vec2(100.0, 300.0), now);
        app.pointer_up(vec2(100.0, 200.0));
        for _ in 0..WRAPS_REQUIRED {
            app.pointer_down(vec2(100.0, 300.0), now);
            app.pointer_up(vec2(102.0, 301.0));
        }
        app.pointer_down(vec2(100.0, 300.0), now);
        app.pointer_up(vec2(100.0, 300.0));
        assert_eq!(app.session.as_ref().map(|s| s.stage()), Some(FoldStage::Inflating));

        app.abandon();
        for i in 1..=300 {
            app.update(now + i as f64 * 16.0, 1.0 / 60.0);
        }
        assert!(app.session.is_none());
        assert!(app.store.is_empty());
        assert_eq!(app.jar.body_count(), 0);
    }

    #[test]
    fn test_delete_star_keeps_jar_in_step() {
        let mut app = app();
        let mut now = 1_700_000_000_000.0;
        for wish in ["one", "two"] {
            app.input.insert(wish);
            now = fold_through(&mut app, now);
        }
        let id = app.store.records()[0].id;
        assert!(app.open_star(id));
        assert!(app.delete_star(id));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.jar.body_count(), 1);
        assert!(!app.jar.contains(id));
        assert!(!app.open_star(id));
    }

    #[test]
    fn test_clear_needs_confirmation() {
        let mut app = app();
        assert!(!app.request_clear());
        app.input.insert("wish");
        fold_through(&mut app, 1_700_000_000_000.0);

        app.confirm_clear();
        assert_eq!(app.store.len(), 1);

        assert!(app.request_clear());
        app.cancel_clear();
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.store.len(), 1);

        assert!(app.request_clear());
        app.confirm_clear();
        assert!(app.store.is_empty());
        assert_eq!(app.jar.body_count(), 0);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn test_today_count_follows_folds() {
        let mut app = app();
        let start = 1_700_000_000_000.0;
        app.input.insert("wish");
        let now = fold_through(&mut app, start);
        assert_eq!(app.today_count(now), 1);
        assert_eq!(app.today_count(now + 2.0 * 86_400_000.0), 0);
    }

    #[test]
    fn test_loads_existing_stars_into_jar() {
        let json = r##"[{"id":1,"message":"hi","color":"#FF5252","timestamp":1,"rotation":0,"x":50,"y":5}]"##;
        let config = AppConfig {
            rng_seed: Some(1),
            ..AppConfig::default()
        };
        let backend = MemoryStorage::with_slot(&config.storage_key, json);
        let app = AppState::new(config, Box::new(backend), Box::new(Silent));
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.jar.body_count(), 1);
        assert!(app.jar.contains(1));
    }
}
