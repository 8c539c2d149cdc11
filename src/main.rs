#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use star_quiz::QuizApp;
    use star_quiz::config::AppConfig;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 560.0]),
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(config)?))),
    )
}

// En web el punto de entrada es `star_quiz::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
