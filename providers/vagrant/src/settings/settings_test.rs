use common::Loader;

use super::*;

fn sep_vars() -> VagrantVars {
    Loader::default()
        .load_str(
            "vagrant_ubuntu20-kube-router-sep.rb",
            "$num_instances = 2\n$vm_memory ||= 2048\n$os = \"ubuntu2004\"\n\
             $kube_master_instances = 1\n$etcd_instances = 1\n\
             $libvirt_volume_cache = \"unsafe\"\n$box_check_update = false\n\
             $network_plugin = \"kube-router\"\n",
        )
        .unwrap()
}

#[test]
fn build_merges_file_and_defaults() {
    let settings = Settings::build(&sep_vars(), &Defaults::default()).unwrap();
    assert_eq!(
        settings,
        Settings {
            nodes: Nodes {
                count: 2,
                control: 1,
                etcd: 1,
                cpu: 2,
                memory: 2048,
                volume_cache: "unsafe".into(),
            },
            software: Software {
                os: "ubuntu2004".into(),
                box_field: "generic/ubuntu2004".into(),
                user: "vagrant".into(),
                network_plugin: "kube-router".into(),
                check_update: false,
            },
            provisioning: Provisioning {
                playbook: "cluster.yml".into(),
                forks: 2,
            },
        }
    );
}

#[test]
fn building_from_defaulted_vars_changes_nothing() {
    let defaults = Defaults::default();
    let vars = sep_vars();
    let filled = defaults.apply(&vars).unwrap();
    assert_eq!(
        Settings::build(&vars, &defaults).unwrap(),
        Settings::build(&filled, &defaults).unwrap()
    );
}

#[test]
fn unknown_os_is_rejected() {
    let vars = VagrantVars {
        os: Some("plan9".into()),
        ..Default::default()
    };
    let err = Settings::build(&vars, &Defaults::default()).unwrap_err();
    match err {
        Error::UnsupportedOs { os, supported } => {
            assert_eq!(os, "plan9");
            assert!(supported.contains("ubuntu2004"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn oversized_roles_still_build() {
    let vars = VagrantVars {
        num_instances: Some(1),
        kube_master_instances: Some(3),
        ..Default::default()
    };
    let settings = Settings::build(&vars, &Defaults::default()).unwrap();
    assert_eq!(settings.nodes.control, 3);
    assert_eq!(settings.nodes.etcd, 1);
}

#[test]
fn yaml_uses_box_key() {
    let settings = Settings::build(&sep_vars(), &Defaults::default()).unwrap();
    let yaml = settings.to_string(Format::Yaml).unwrap();
    assert!(yaml.contains("box: generic/ubuntu2004"));
    let back: Settings = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn write_creates_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let settings = Settings::build(&VagrantVars::default(), &Defaults::default()).unwrap();
    settings.write(&path, Format::Toml).unwrap();

    let back: Settings = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn write_into_missing_directory_fails() {
    let settings = Settings::default();
    let err = settings
        .write(Path::new("/nonexistent/dir/settings.yaml"), Format::Yaml)
        .unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
}
