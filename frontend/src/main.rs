#[cfg(target_arch = "wasm32")]
fn main() {
    hrms_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("hrms-frontend runs in the browser; build it for wasm32-unknown-unknown");
}
