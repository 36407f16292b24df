//! Brick Clicker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, PointerEvent};

    use brick_clicker::platform::LocalStorageStore;
    use brick_clicker::presenter::{BrickFrame, HudField, HudSink, HudValue};
    use brick_clicker::{Game, Rgb, Tuning};

    /// Fallback frame time before the first timestamp arrives
    const FIRST_FRAME_DT: f32 = 1.0 / 60.0;

    /// HUD bound to DOM elements, one element id per field
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn element(&self, field: HudField) -> Option<Element> {
            self.document.get_element_by_id(field.as_str())
        }
    }

    impl HudSink for DomHud {
        fn write(&mut self, field: HudField, value: HudValue<'_>) -> bool {
            let Some(el) = self.element(field) else {
                return false;
            };
            match value {
                HudValue::Text(text) => el.set_text_content(Some(text)),
                HudValue::Fraction(f) => {
                    if let Ok(el) = el.dyn_into::<HtmlElement>() {
                        let _ = el
                            .style()
                            .set_property("width", &format!("{:.1}%", f * 100.0));
                    }
                }
                HudValue::Color(c) => {
                    if let Ok(el) = el.dyn_into::<HtmlElement>() {
                        let _ = el.style().set_property("background-color", &css_rgb(c));
                    }
                }
                HudValue::Visible(visible) => {
                    let _ = el.class_list().toggle_with_force("hidden", !visible);
                }
            }
            true
        }
    }

    fn css_rgb(c: Rgb) -> String {
        let c = (c.clamp(Rgb::ZERO, Rgb::ONE) * 255.0).round();
        format!("rgb({}, {}, {})", c.x as u8, c.y as u8, c.z as u8)
    }

    /// Game instance plus host bindings
    struct Host {
        game: Game,
        store: LocalStorageStore,
        hud: DomHud,
        brick: Option<HtmlElement>,
        last_time: f64,
    }

    impl Host {
        /// Draw the brick into its DOM element
        fn render_brick(&self, frame: BrickFrame) {
            let Some(brick) = &self.brick else {
                return;
            };
            let style = brick.style();
            let _ = style.set_property("transform", &format!("scale({:.3})", frame.scale));
            let _ = style.set_property("background-color", &css_rgb(frame.tint));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Brick Clicker starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document - cannot start");
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let brick = document
            .get_element_by_id("brick")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if brick.is_none() {
            log::warn!("Brick element not found - clicks and brick visuals disabled");
        }

        let tuning = Tuning::load();
        let mut game = Game::new(&tuning);
        let store = LocalStorageStore::default();
        if game.load(&store) {
            log::info!("Resumed at level {}", game.snapshot().level);
        }

        let host = Rc::new(RefCell::new(Host {
            game,
            store,
            hud: DomHud {
                document: document.clone(),
            },
            brick,
            last_time: 0.0,
        }));

        setup_brick_input(host.clone());
        setup_buttons(&document, host.clone());
        setup_auto_save(host.clone());

        request_animation_frame(host);

        log::info!("Brick Clicker running!");
    }

    fn setup_brick_input(host: Rc<RefCell<Host>>) {
        let Some(brick) = host.borrow().brick.clone() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            event.prevent_default();
            host.borrow_mut().game.click();
        });
        let _ = brick.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, host: Rc<RefCell<Host>>) {
        let buttons: [(&str, fn(&mut Host)); 3] = [
            ("save-btn", |h| h.game.save(&mut h.store)),
            ("load-btn", |h| {
                h.game.load(&h.store);
            }),
            ("reset-btn", |h| h.game.reset(&mut h.store)),
        ];

        for (id, action) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button '{}' not found", id);
                continue;
            };
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut h = host.borrow_mut();
                action(&mut h);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Save when the tab is hidden so progress survives closing it
    fn setup_auto_save(host: Rc<RefCell<Host>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut h = host.borrow_mut();
                let state = h.game.snapshot();
                brick_clicker::persistence::save_state(&mut h.store, &state);
                log::info!("Auto-saved (tab hidden)");
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        {
            let mut h = host.borrow_mut();

            // Calculate delta time (clamped so a backgrounded tab doesn't jump)
            let dt = if h.last_time > 0.0 {
                (((time - h.last_time) / 1000.0) as f32).min(0.1)
            } else {
                FIRST_FRAME_DT
            };
            h.last_time = time;

            h.game.tick(dt);
            let brick = h.game.frame().brick;
            h.render_brick(brick);

            let Host { game, hud, .. } = &mut *h;
            game.apply_hud(hud);
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Clicker (native) starting...");
    log::info!("Native mode runs a headless auto-clicker - run with `trunk serve` for the web version");

    let clicks: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2_000);

    native::run_session(clicks);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use brick_clicker::platform::PlatformStore;
    use brick_clicker::presenter::{HudField, MemoryHud};
    use brick_clicker::{Game, Tuning};

    /// Simulated frame time (60 Hz)
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Frames between auto-clicks (~10 clicks per second)
    const FRAMES_PER_CLICK: u32 = 6;

    /// Click `clicks` times at a steady pace, then save, reset and reload
    pub fn run_session(clicks: u32) {
        let tuning = Tuning::load();
        let mut game = Game::new(&tuning);
        let mut store = PlatformStore::default();
        let mut hud = MemoryHud::default();

        for _ in 0..clicks {
            let result = game.click();
            if let Some(level) = result.new_level {
                let frame = game.frame();
                log::info!(
                    "Reached level {} ({}) - brick scale {:.2}",
                    level,
                    frame.hud.level_name_text,
                    frame.brick.scale
                );
            }
            for _ in 0..FRAMES_PER_CLICK {
                game.tick(FRAME_DT);
            }
            game.apply_hud(&mut hud);
        }

        game.save(&mut store);
        let saved = game.snapshot();
        game.reset(&mut store);
        // Reset removed the save, so write it back before reloading
        brick_clicker::persistence::save_state(&mut store, &saved);
        game.load(&store);

        println!(
            "{} | {} ({}) | {} | {} | {}",
            hud.get(HudField::Score).unwrap_or("-"),
            hud.get(HudField::Level).unwrap_or("-"),
            hud.get(HudField::LevelName).unwrap_or("-"),
            hud.get(HudField::ProgressLabel).unwrap_or("-"),
            hud.get(HudField::TotalClicks).unwrap_or("-"),
            hud.get(HudField::PointsPerClick).unwrap_or("-"),
        );
    }
}
