use rustc_version::{version_meta, Channel};

// NOTE: Activates the 'nightly' feature from Cargo.toml so the `Combinator` trait can carry
//       `rustc_on_unimplemented` diagnostics when built with a nightly compiler.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    if let Ok(meta) = version_meta() {
        if meta.channel == Channel::Nightly {
            println!("cargo:rustc-cfg=feature=\"nightly\"");
        }
    }
}
