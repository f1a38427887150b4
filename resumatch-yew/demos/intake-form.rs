use resumatch_yew::App;

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting ResuMatch intake form");

    yew::Renderer::<App>::new().render();
}
