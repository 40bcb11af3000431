fn main() {
    // Host builds (no `espidf` feature) have no ESP-IDF toolchain to export.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
