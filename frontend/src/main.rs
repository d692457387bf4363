use webcraft::config::CONFIG;
use webcraft::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));
    log::info!("starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Renderer::<App>::new().render();
}
