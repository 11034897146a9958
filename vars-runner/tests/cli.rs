use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../common/tests/fixtures")
        .join(name)
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vars-runner"))
        .current_dir(dir)
        .env_remove("LOG")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

/// Rendered assignments without the provenance header.
fn body(out: &Output) -> String {
    stdout(out)
        .lines()
        .filter(|l| !l.starts_with('#'))
        .map(|l| format!("{l}\n"))
        .collect()
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).unwrap()
}

#[test]
fn check_accepts_every_fixture() {
    let dir = tempfile::tempdir().unwrap();
    for name in [
        "vagrant_ubuntu16-canal-kubeadm.rb",
        "vagrant_ubuntu16-kube-router-svc-proxy.rb",
        "vagrant_ubuntu18-weave-large.rb",
        "vagrant_ubuntu20-kube-router-sep.rb",
        "vagrant_ubuntu24-calico-ipv6only-stack.rb",
    ] {
        let out = run(dir.path(), &["check", fixture(name).to_str().unwrap()]);
        assert!(out.status.success(), "{name}: {}", stderr(&out));
    }
}

#[test]
fn check_reports_sep_fixture_key_count() {
    let dir = tempfile::tempdir().unwrap();
    let sep = fixture("vagrant_ubuntu20-kube-router-sep.rb");
    let out = run(dir.path(), &["check", sep.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("8 option(s) resolved"));
}

#[test]
fn check_fails_on_unknown_option() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.rb");
    std::fs::write(&bad, "$vm_cpus = 2\n$bogus_option = 1\n").unwrap();

    let out = run(dir.path(), &["check", bad.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("unknown option `$bogus_option`"));
}

#[test]
fn config_file_can_switch_to_warn_policy() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.rb"), "$bogus_option = 1\n$vm_cpus = 2\n").unwrap();
    std::fs::write(
        dir.path().join("vars.toml"),
        "[loader]\nunknown_options = \"warn\"\n",
    )
    .unwrap();

    let out = run(dir.path(), &["render", "bad.rb"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(body(&out), "$vm_cpus = 2\n");
}

#[test]
fn type_mismatch_fails_render() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.rb"), "$vm_cpus = \"two\"\n").unwrap();

    let out = run(dir.path(), &["render", "bad.rb"]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("expects a positive integer"));
}

#[test]
fn render_output_reloads_to_same_record() {
    let dir = tempfile::tempdir().unwrap();
    let large = fixture("vagrant_ubuntu18-weave-large.rb");
    let first = run(dir.path(), &["render", large.to_str().unwrap()]);
    assert!(first.status.success());

    std::fs::write(dir.path().join("rendered.rb"), stdout(&first)).unwrap();
    let second = run(dir.path(), &["render", "rendered.rb"]);
    assert!(second.status.success(), "{}", stderr(&second));
    assert_eq!(body(&second), body(&first));
}

#[test]
fn base_layer_from_config_is_overridden_by_cli_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("base.rb"), "$vm_memory = 512\n$vm_cpus = 1\n").unwrap();
    std::fs::write(dir.path().join("ci.rb"), "$vm_memory = 4096\n$vm_cpus ||= 8\n").unwrap();
    std::fs::write(dir.path().join("vars.toml"), "[loader]\nbase = [\"base.rb\"]\n").unwrap();

    let out = run(dir.path(), &["render", "ci.rb"]);
    assert_eq!(body(&out), "$vm_cpus = 1\n$vm_memory = 4096\n");
}

#[test]
fn render_header_names_every_layer() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("base.rb"), "$vm_cpus = 1\n").unwrap();
    std::fs::write(dir.path().join("ci.rb"), "$os = \"ubuntu2204\"\n").unwrap();
    std::fs::write(dir.path().join("vars.toml"), "[loader]\nbase = [\"base.rb\"]\n").unwrap();

    let out = run(dir.path(), &["render", "--defaults", "ci.rb"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.starts_with("# Rendered by vars-runner from:\n#   base.rb\n#   ci.rb\n#   vagrant defaults\n"));
    assert!(text.contains("$os = \"ubuntu2204\"\n"));
    assert!(text.contains("$num_forks = 3\n"));
}

#[test]
fn export_prints_json_settings() {
    let dir = tempfile::tempdir().unwrap();
    let sep = fixture("vagrant_ubuntu20-kube-router-sep.rb");
    let out = run(
        dir.path(),
        &["export", "--format", "json", sep.to_str().unwrap()],
    );
    assert!(out.status.success(), "{}", stderr(&out));

    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["nodes"]["count"], 2);
    assert_eq!(json["software"]["box"], "generic/ubuntu2004");
    assert_eq!(json["software"]["network_plugin"], "kube-router");
    assert_eq!(json["provisioning"]["playbook"], "cluster.yml");
}

#[test]
fn export_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let sep = fixture("vagrant_ubuntu24-calico-ipv6only-stack.rb");
    let out = run(
        dir.path(),
        &["export", "-o", "settings.yaml", sep.to_str().unwrap()],
    );
    assert!(out.status.success(), "{}", stderr(&out));

    let yaml = std::fs::read_to_string(dir.path().join("settings.yaml")).unwrap();
    assert!(yaml.contains("box: bento/ubuntu-24.04"));
}

#[test]
fn options_lists_schema_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["options"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("libvirt_volume_cache"));
    assert!(text.contains("kube-router"));
    assert!(text.contains("$num_instances ||= 3"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["--file", "nope.toml", "options"]);
    assert!(!out.status.success());
}
