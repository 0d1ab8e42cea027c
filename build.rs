//! Build script for linal
//!
//! Emits link directives for the prebuilt native kernel library when the
//! `accel` feature is enabled.
//!
//! # Requirements
//!
//! - A prebuilt `linal_kernels` shared library (the accelerated elementwise
//!   routines reached over the C ABI)
//!
//! # Environment Variables
//!
//! - `LINAL_KERNELS_DIR`: directory containing the kernel library (optional;
//!   falls back to the system linker search path)

fn main() {
    // The software stand-in needs no link step; only the real library does.
    #[cfg(feature = "accel")]
    link_kernel_library();
}

#[cfg(feature = "accel")]
fn link_kernel_library() {
    println!("cargo:rerun-if-env-changed=LINAL_KERNELS_DIR");

    if let Ok(dir) = std::env::var("LINAL_KERNELS_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
    }

    println!("cargo:rustc-link-lib=dylib=linal_kernels");
}
