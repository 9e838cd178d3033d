use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--"])
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["1", "2"]);
    assert!(v["winner"].is_string());
    assert_eq!(v["roster"], "classic");
    assert_eq!(v["firing_order"], "alternately");
}

#[test]
fn sim_binary_salvo_until_miss() {
    let v = run_sim(&["3", "4", "--salvo", "--firing-order", "until-miss"]);
    assert!(v["winner"].is_string());
    assert_eq!(v["firing_order"], "until_miss");
    assert_eq!(v["salvo_mode"], true);
}
