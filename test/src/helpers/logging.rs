/// Routes `log` output through env_logger. Safe to call from every test;
/// only the first call installs the logger. Use `RUST_LOG=debug` to see
/// protocol traffic.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
