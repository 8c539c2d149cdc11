pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use engine::QuizEngine;
pub use error::QuizError;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("star_quiz_canvas"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("no se encontró el canvas #star_quiz_canvas");
            return;
        };

        let config = config::AppConfig::from_env();
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(QuizApp::new(config)?))),
            )
            .await;
        if let Err(e) = result {
            log::error!("no se pudo arrancar la app web: {e:?}");
        }
    });
}
