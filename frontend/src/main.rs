#[cfg(target_arch = "wasm32")]
fn main() {
    use reportal_frontend::{config, router};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting reporting portal frontend: initializing runtime config");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
        router::mount_app();
    });
}

// The bin target only does anything on wasm32; trunk builds it for the
// browser, while host builds (tests, clippy) compile an empty stub.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
