/// Route `log` output through the test harness so normalizer and reader
/// warnings show up next to a failing test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
