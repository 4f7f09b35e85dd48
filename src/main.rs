use pms_tracker::mount::{mount_app, ROOT_ID};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_app(ROOT_ID)
}
