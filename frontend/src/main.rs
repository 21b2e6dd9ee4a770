//! Entry point for the WASM application

pub fn main() {
    roadseg_frontend::mount();
}
