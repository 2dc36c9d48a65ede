use std::fs;
use std::path::Path;

fn pdfium_library_name(target_os: &str) -> &'static str {
    match target_os {
        "windows" => "pdfium.dll",
        "macos" | "ios" => "libpdfium.dylib",
        _ => "libpdfium.so",
    }
}

fn main() {
    let workspace_root = env!("CARGO_MANIFEST_DIR")
        .split("crates")
        .next()
        .expect("Failed to determine workspace root");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let library_name = pdfium_library_name(&target_os);

    let vendor_library = Path::new(workspace_root)
        .join("vendor")
        .join("pdfium")
        .join(library_name);

    println!("cargo:rerun-if-changed={}", vendor_library.display());

    if !vendor_library.exists() {
        // Falls back to the system library at runtime.
        return;
    }

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let target_dir = Path::new(&out_dir)
        .parent()
        .and_then(|p| p.parent())
        .and_then(|p| p.parent())
        .expect("Failed to determine target directory");

    let dest_library = target_dir.join(library_name);
    fs::copy(&vendor_library, &dest_library).expect("Failed to copy PDFium library");
    println!(
        "cargo:warning=Copied {} from vendor to {}",
        library_name,
        dest_library.display()
    );
}
