use battleship_engine::init_logging;

#[test]
fn test_logger_installs_once() {
    assert!(init_logging());
    assert!(!init_logging());
    log::info!("logger installed");
}
