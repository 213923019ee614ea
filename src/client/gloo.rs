//! WASM transport placeholder.
//!
//! Browser builds are expected to drive the wallet extension and contract
//! gateway through gloo_net; only the interface seam exists so far.

pub struct WasmClient;

impl WasmClient {
    pub fn new() -> Self {
        unimplemented!("WASM transport not yet implemented, the browser shell provides its own")
    }
}
