//! Frontend egui application.
//!
//! This crate can be compiled in two modes:
//! - default: a native library with the pages and app shell, used by tests
//! - `hydrate` feature: compiled to WASM and run in the browser

pub mod app;
pub mod dispatch;
pub mod pages;

pub use app::TodoApp;
pub use dispatch::{Dispatcher, Reply, Request, Transport};

// ============================================================================
// WASM Entry Point (hydrate feature only)
// ============================================================================

#[cfg(feature = "hydrate")]
mod web {
    use eframe::wasm_bindgen::{self, prelude::*};
    use todo_shared::client::TodoClient;
    use todo_shared::page::STATE_ELEMENT_ID;
    use todo_shared::{Route, SystemClock, TodoListState};

    use crate::TodoApp;
    use crate::dispatch::{Dispatcher, HttpTransport};

    impl eframe::App for TodoApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            self.ui(ctx);
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        eframe::WebLogger::init(log::LevelFilter::Debug).ok();

        wasm_bindgen_futures::spawn_local(async {
            let window = web_sys::window().expect("No window");
            let document = window.document().expect("No document");

            // Todos rendered into the page by the server
            let initial_state = read_initial_state(&document).unwrap_or_default();
            let start = window
                .location()
                .pathname()
                .map(|path| Route::parse(&path))
                .unwrap_or(Route::TodoList);

            let canvas = document
                .get_element_by_id("the_canvas_id")
                .expect("Failed to find canvas")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("Not a canvas element");

            let web_options = eframe::WebOptions::default();

            let start_result = eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(move |cc| {
                        let transport =
                            HttpTransport::new(TodoClient::default(), cc.egui_ctx.clone());
                        Ok(Box::new(TodoApp::new(
                            initial_state,
                            start,
                            Dispatcher::new(transport),
                            SystemClock,
                        )))
                    }),
                )
                .await;

            if let Some(loading_text) = document.get_element_by_id("loading_text") {
                match start_result {
                    Ok(_) => loading_text.remove(),
                    Err(e) => {
                        loading_text.set_inner_html(
                            "<p>The app has crashed. See the developer console for details.</p>",
                        );
                        panic!("Failed to start eframe: {e:?}");
                    }
                }
            }
        });
    }

    /// Read initial state from the script tag the server injects.
    fn read_initial_state(document: &web_sys::Document) -> Option<TodoListState> {
        let script = document.get_element_by_id(STATE_ELEMENT_ID)?;
        let json = script.text_content()?;
        serde_json::from_str(&json).ok()
    }
}
