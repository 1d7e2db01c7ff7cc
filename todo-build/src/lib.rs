//! Build-time helper for embedding the todo frontend.
//!
//! Call it from the server's `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     todo_build::frontend("todo-frontend");
//! }
//! ```
//!
//! and embed the result:
//!
//! ```ignore
//! #[derive(RustEmbed)]
//! #[folder = "$TODO_FRONTEND_DIST"]
//! struct FrontendAssets;
//! ```
//!
//! The wasm module is looked up in this order:
//! 1. `{CRATE_NAME}_WASM`, a path to a prebuilt `.wasm`
//!    (`cargo build -p todo-frontend --lib --release --target wasm32-unknown-unknown --features hydrate`)
//! 2. `CARGO_CDYLIB_FILE_{CRATE_NAME}_{crate_name}` / `CARGO_CDYLIB_FILE_{CRATE_NAME}`,
//!    set by cargo for artifact dependencies
//!
//! Without either, a placeholder page is written so the server still builds
//! and serves the REST API.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, fs};

pub use todo_shared::page::INITIAL_STATE_MARKER;

/// Prepare `{OUT_DIR}/{crate_name}-dist` and export `{CRATE_NAME}_DIST`.
///
/// # Panics
///
/// Panics if a wasm module was found but `wasm-bindgen` is missing or fails,
/// or if the output directory cannot be written.
pub fn frontend(crate_name: &str) {
    let crate_name_underscored = crate_name.replace('-', "_");
    let crate_name_upper = crate_name_underscored.to_uppercase();

    println!("cargo:rerun-if-changed=../{}/src/", crate_name);
    println!("cargo:rerun-if-changed=../{}/Cargo.toml", crate_name);
    println!("cargo:rerun-if-changed=../{}/index.html", crate_name);
    println!("cargo:rerun-if-env-changed={}_WASM", crate_name_upper);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dist_dir = Path::new(&out_dir).join(format!("{}-dist", crate_name));
    fs::create_dir_all(&dist_dir).expect("Failed to create dist directory");

    let html_dst = dist_dir.join("index.html");
    match locate_wasm(&crate_name_underscored, &crate_name_upper) {
        Some(wasm_path) => {
            bindgen(&wasm_path, &dist_dir, crate_name);

            let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
            let html_src = Path::new(&manifest_dir).join(format!("../{}/index.html", crate_name));
            if html_src.exists() {
                fs::copy(&html_src, &html_dst).expect("Failed to copy index.html");
                let html = fs::read_to_string(&html_dst).expect("Failed to read index.html");
                if !has_state_marker(&html) {
                    println!(
                        "cargo:warning={} has no {INITIAL_STATE_MARKER}; the page will start without todos",
                        html_src.display()
                    );
                }
            } else {
                let js_name = format!("{}.js", crate_name_underscored);
                fs::write(&html_dst, index_html(Some(&js_name)))
                    .expect("Failed to write index.html");
            }
        }
        None => {
            println!(
                "cargo:warning=No wasm module for {crate_name}; serving a placeholder page. \
                 Set {crate_name_upper}_WASM to a prebuilt module to embed the app."
            );
            fs::write(&html_dst, index_html(None)).expect("Failed to write index.html");
        }
    }

    println!(
        "cargo:rustc-env={}={}",
        dist_env_var(crate_name),
        dist_dir.display()
    );
}

/// Environment variable that points `rust-embed` at the dist directory.
pub fn dist_env_var(crate_name: &str) -> String {
    format!("{}_DIST", crate_name.replace('-', "_").to_uppercase())
}

fn locate_wasm(underscored: &str, upper: &str) -> Option<PathBuf> {
    [
        format!("{}_WASM", upper),
        format!("CARGO_CDYLIB_FILE_{}_{}", upper, underscored),
        format!("CARGO_CDYLIB_FILE_{}", upper),
    ]
    .iter()
    .find_map(|name| env::var_os(name))
    .map(PathBuf::from)
    .filter(|path| path.exists())
}

fn bindgen(wasm_path: &Path, dist_dir: &Path, crate_name: &str) {
    let status = Command::new("wasm-bindgen")
        .arg(wasm_path)
        .arg("--out-dir")
        .arg(dist_dir)
        .args(["--target", "web", "--no-typescript"])
        .status()
        .expect(
            "Failed to run wasm-bindgen. Is it installed?\n\
             Run: cargo install wasm-bindgen-cli --version 0.2.104",
        );

    if !status.success() {
        panic!("wasm-bindgen failed for {}", crate_name);
    }
}

/// Default page. With `js_name` it boots the app into the canvas; without it
/// it only tells the visitor that the frontend was not built.
pub fn index_html(js_name: Option<&str>) -> String {
    let body = match js_name {
        Some(js_name) => format!(
            r#"<p id="loading_text">Loading...</p>
    <canvas id="the_canvas_id"></canvas>
    <script type="module">
        import init from './{js_name}';
        init();
    </script>"#
        ),
        None => r#"<p id="loading_text">The todo frontend was not built into this server. The REST API is available under /api/todo.</p>"#
            .to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Todos</title>
    <style>
        html, body {{ margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; }}
        canvas {{ width: 100%; height: 100%; }}
        #loading_text {{ position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); font-family: sans-serif; font-size: 1.5em; color: #888; }}
    </style>
    {INITIAL_STATE_MARKER}
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Whether the server can inject the initial state into `html`.
pub fn has_state_marker(html: &str) -> bool {
    html.contains(INITIAL_STATE_MARKER)
}
