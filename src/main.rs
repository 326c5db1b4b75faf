use naija_quiz::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Independence Day Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Route `log` output to the browser console
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let canvas = document
            .get_element_by_id("quiz_canvas")
            .expect("failed to find quiz_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("quiz_canvas was not a canvas element");

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
            )
            .await;

        if let Err(err) = result {
            log::error!("failed to start the web runner: {err:?}");
        }
    });
}
