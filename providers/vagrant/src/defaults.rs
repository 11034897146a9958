use std::fmt::Write;

use common::{value::Value, vars::Resolved, Loader, VagrantVars};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// Upper bound for the derived `etcd_instances` default.
pub const MAX_DEFAULT_ETCD: u64 = 3;
/// Upper bound for the derived `kube_master_instances` default.
pub const MAX_DEFAULT_MASTERS: u64 = 2;

/// Values the Vagrantfile falls back to for options a CI file leaves unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub num_instances: u64,
    pub vm_cpus: u64,
    pub vm_memory: u64,
    pub os: String,
    pub network_plugin: String,
    pub box_check_update: bool,
    pub libvirt_volume_cache: String,
    pub playbook: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            num_instances: 3,
            vm_cpus: 2,
            vm_memory: 2048,
            os: "ubuntu2004".to_owned(),
            network_plugin: "flannel".to_owned(),
            box_check_update: true,
            libvirt_volume_cache: "default".to_owned(),
            playbook: "cluster.yml".to_owned(),
        }
    }
}

impl Defaults {
    /// The fixed defaults as `$name ||= value` lines.
    pub fn render(&self) -> String {
        let lines = [
            ("num_instances", Value::from(self.num_instances)),
            ("vm_cpus", Value::from(self.vm_cpus)),
            ("vm_memory", Value::from(self.vm_memory)),
            ("os", Value::from(self.os.as_str())),
            ("network_plugin", Value::from(self.network_plugin.as_str())),
            ("box_check_update", Value::from(self.box_check_update)),
            (
                "libvirt_volume_cache",
                Value::from(self.libvirt_volume_cache.as_str()),
            ),
            ("playbook", Value::from(self.playbook.as_str())),
        ];
        let mut out = String::new();
        for (name, value) in lines {
            let _ = writeln!(out, "${name} ||= {value}");
        }
        out
    }

    /// Fills every option `vars` leaves unset.
    ///
    /// The fixed defaults go through the regular loader as `||=` lines, so a
    /// bad value here fails the same way it would in a CI file. The counts
    /// derived from `num_instances` are filled afterwards.
    pub fn apply(&self, vars: &VagrantVars) -> Result<VagrantVars> {
        let mut state =
            Loader::default().fold_str(vars.to_resolved(), "vagrant defaults", &self.render())?;

        let instances = state
            .get("num_instances")
            .and_then(Value::as_u64)
            .unwrap_or(self.num_instances);
        fill(&mut state, "etcd_instances", instances.min(MAX_DEFAULT_ETCD));
        fill(
            &mut state,
            "kube_master_instances",
            instances.min(MAX_DEFAULT_MASTERS),
        );
        fill(&mut state, "num_forks", instances);

        Ok(VagrantVars::from(&state))
    }
}

fn fill(state: &mut Resolved, name: &'static str, value: u64) {
    if state.assign_if_unset(name, Some(Value::Int(value))) {
        debug!("${name} defaulted to {value}");
    }
}
