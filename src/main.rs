//! Goalkeeper Challenge entry point
//!
//! Handles platform-specific initialization and wires the game session to
//! the page (canvas, buttons, HUD).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent};

    use goalkeeper_challenge::GameConfig;
    use goalkeeper_challenge::platform::WebScheduler;
    use goalkeeper_challenge::renderer::{RenderError, RenderState};
    use goalkeeper_challenge::session::GameSession;
    use goalkeeper_challenge::ui::{self, HudView};

    type Game = Rc<RefCell<GameSession<WebScheduler>>>;

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Goalkeeper Challenge starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        set_static_text(&document);

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let scheduler = WebScheduler::new(window.clone());
        let frame_slot = scheduler.frame_slot();
        let interval_slot = scheduler.interval_slot();
        let game: Game = Rc::new(RefCell::new(GameSession::new(config, seed, scheduler)));

        log::info!("Game initialized with seed: {}", seed);

        // Frame and spawn callbacks
        {
            let game = game.clone();
            *frame_slot.borrow_mut() = Some(Closure::new(move |_time: f64| {
                let mut g = game.borrow_mut();
                g.on_frame();
                update_hud(&g.hud());
            }));
        }
        {
            let game = game.clone();
            *interval_slot.borrow_mut() = Some(Closure::new(move || {
                game.borrow_mut().on_spawn_timer();
            }));
        }

        let canvas: Option<HtmlCanvasElement> = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok());

        match canvas {
            Some(canvas) => {
                let (field_w, field_h) = {
                    let g = game.borrow();
                    (g.config().field_width, g.config().field_height)
                };
                let dpr = window.device_pixel_ratio();
                let width = (field_w as f64 * dpr) as u32;
                let height = (field_h as f64 * dpr) as u32;
                canvas.set_width(width);
                canvas.set_height(height);

                match init_surface(&canvas, width, height, (field_w, field_h)).await {
                    Ok(render_state) => game.borrow_mut().attach_surface(Box::new(render_state)),
                    Err(e) => log::warn!("Drawable surface unavailable: {}", e),
                }

                setup_input_handlers(&canvas, game.clone());
            }
            None => log::warn!("No canvas element; drawing disabled"),
        }

        setup_buttons(&document, game.clone());
        setup_teardown(game.clone());

        update_hud(&game.borrow().hud());

        log::info!("Goalkeeper Challenge ready!");
    }

    async fn init_surface(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
        field_size: (f32, f32),
    ) -> Result<RenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RenderError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height, field_size).await
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Game) {
        // Pointer x relative to the canvas, scaled into field units
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            if rect.width() <= 0.0 {
                return;
            }
            let mut g = game.borrow_mut();
            let scale = g.config().field_width as f64 / rect.width();
            let x = (event.client_x() as f64 - rect.left()) * scale;
            g.on_pointer_move(x as f32);
        });
        let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, game: Game) {
        let bind = |id: &str, action: fn(&mut GameSession<WebScheduler>)| {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                return;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                action(&mut *g);
                update_hud(&g.hud());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        };

        bind("start-btn", |g| {
            g.reseed(js_sys::Date::now() as u64);
            g.start();
        });
        bind("restart-btn", |g| g.reset());
        bind("play-again-btn", |g| {
            g.reseed(js_sys::Date::now() as u64);
            g.start();
        });
    }

    /// Cancel pending callbacks when the page goes away
    fn setup_teardown(game: Game) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Ok(mut g) = game.try_borrow_mut() {
                g.shutdown();
                log::info!("Session shut down");
            }
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn set_static_text(document: &Document) {
        let texts = [
            ("title", ui::TITLE),
            ("instructions", ui::INSTRUCTIONS),
            ("tagline", ui::TAGLINE),
            ("game-over-title", ui::GAME_OVER),
        ];
        for (id, text) in texts {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(hud: &HudView) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let panels = [
            ("intro", hud.show_intro),
            ("scoreboard", hud.show_scoreboard),
            ("game-over", hud.show_game_over),
        ];
        for (id, visible) in panels {
            if let Some(el) = document.get_element_by_id(id) {
                let _ = el.class_list().toggle_with_force("hidden", !visible);
            }
        }

        if let Some(el) = document.get_element_by_id("score") {
            if el.text_content().as_deref() != Some(hud.score_text.as_str()) {
                el.set_text_content(Some(&hud.score_text));
            }
        }
        if let Some(el) = document.get_element_by_id("final-score") {
            el.set_text_content(Some(&hud.final_score_text));
        }

        if let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let cursor = if hud.hide_cursor { "none" } else { "default" };
            let _ = canvas.style().set_property("cursor", cursor);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use goalkeeper_challenge::GameSession;
    use goalkeeper_challenge::platform::ManualScheduler;
    use goalkeeper_challenge::renderer::HeadlessSurface;

    env_logger::init();
    log::info!("Goalkeeper Challenge (native) starting...");
    log::info!("Native mode runs a headless autoplay match - run with `trunk serve` for web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    let config = goalkeeper_challenge::GameConfig::load();
    let mut session = GameSession::new(config, seed, ManualScheduler::new());
    session.attach_surface(Box::new(HeadlessSurface));
    session.start();

    // Five minutes of play at 60 fps
    let score = session.autoplay(1000.0 / 60.0, 60 * 60 * 5);
    let elapsed_s = session.scheduler().now_ms() / 1000.0;
    session.shutdown();

    log::info!(
        "Autoplay finished: score {} after {:.1}s ({:?})",
        score,
        elapsed_s,
        session.state().phase
    );
    println!("Seed {}: saved {} balls in {:.1}s", seed, score, elapsed_s);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
