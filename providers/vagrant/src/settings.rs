use std::path::Path;

use common::{export, export::Format, VagrantVars};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{boxes::find_box, boxes::SUPPORTED_OS, Defaults, Error, Result};

/// What the provisioner is handed for one CI environment, with every
/// default filled in.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    pub nodes: Nodes,
    pub software: Software,
    pub provisioning: Provisioning,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Nodes {
    pub count: u64,
    pub control: u64,
    pub etcd: u64,
    pub cpu: u64,
    pub memory: u64,
    pub volume_cache: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Software {
    pub os: String,
    #[serde(rename = "box")]
    pub box_field: String,
    pub user: String,
    pub network_plugin: String,
    pub check_update: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Provisioning {
    pub playbook: String,
    pub forks: u64,
}

impl Settings {
    pub fn build(vars: &VagrantVars, defaults: &Defaults) -> Result<Self> {
        let vars = defaults.apply(vars)?;

        let os = required("os", vars.os)?;
        let image = find_box(&os).ok_or_else(|| Error::UnsupportedOs {
            os: os.clone(),
            supported: SUPPORTED_OS
                .iter()
                .map(|b| b.os)
                .collect::<Vec<_>>()
                .join(", "),
        })?;

        let settings = Settings {
            nodes: Nodes {
                count: required("num_instances", vars.num_instances)?,
                control: required("kube_master_instances", vars.kube_master_instances)?,
                etcd: required("etcd_instances", vars.etcd_instances)?,
                cpu: required("vm_cpus", vars.vm_cpus)?,
                memory: required("vm_memory", vars.vm_memory)?,
                volume_cache: required("libvirt_volume_cache", vars.libvirt_volume_cache)?,
            },
            software: Software {
                box_field: image.box_name.to_owned(),
                user: image.user.to_owned(),
                os,
                network_plugin: required("network_plugin", vars.network_plugin)?,
                check_update: required("box_check_update", vars.box_check_update)?,
            },
            provisioning: Provisioning {
                playbook: required("playbook", vars.playbook)?,
                forks: required("num_forks", vars.num_forks)?,
            },
        };
        settings.warn_topology();
        Ok(settings)
    }

    // Nodes are assigned roles by index, so larger role counts just
    // overlap; worth a warning, not a failure.
    fn warn_topology(&self) {
        let n = &self.nodes;
        if n.control > n.count {
            warn!(
                "kube_master_instances ({}) exceeds num_instances ({})",
                n.control, n.count
            );
        }
        if n.etcd > n.count {
            warn!(
                "etcd_instances ({}) exceeds num_instances ({})",
                n.etcd, n.count
            );
        }
    }

    pub fn to_string(&self, format: Format) -> Result<String> {
        Ok(export::to_string(self, format)?)
    }

    pub fn write(&self, path: &Path, format: Format) -> Result<()> {
        let contents = self.to_string(format)?;
        std::fs::write(path, contents).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("settings written to {}", path.display());
        Ok(())
    }
}

fn required<T>(name: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(Error::Unset(name))
}

#[cfg(test)]
mod settings_test;
