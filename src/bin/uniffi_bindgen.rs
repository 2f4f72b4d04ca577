//! UniFFI bindgen CLI for generating the Swift and Kotlin bindings of
//! foodscribe-core.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libfoodscribe_core.so --language swift --out-dir ./bindings
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libfoodscribe_core.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
