use chrono::Datelike;

fn main() {
    // Footer copyright year, fixed at build time so server and client renders agree
    let year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
