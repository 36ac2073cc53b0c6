//! Entry point: attaches the page scripts and keeps them alive.

use web_sys::console;

fn main() {
    match portfolio_frontend::mount() {
        Ok(page) => page.keep_alive(),
        Err(e) => console::error_1(&format!("Failed to start page scripts: {}", e).into()),
    }
}
