/// Vagrant box backing an `os` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSpec {
    pub os: &'static str,
    pub box_name: &'static str,
    /// SSH user baked into the box
    pub user: &'static str,
}

const fn entry(os: &'static str, box_name: &'static str, user: &'static str) -> BoxSpec {
    BoxSpec { os, box_name, user }
}

pub const SUPPORTED_OS: &[BoxSpec] = &[
    entry("flatcar-stable", "flatcar-stable", "core"),
    entry("ubuntu1604", "generic/ubuntu1604", "vagrant"),
    entry("ubuntu1804", "generic/ubuntu1804", "vagrant"),
    entry("ubuntu2004", "generic/ubuntu2004", "vagrant"),
    entry("ubuntu2204", "generic/ubuntu2204", "vagrant"),
    entry("ubuntu2404", "bento/ubuntu-24.04", "vagrant"),
    entry("centos8", "centos/8", "vagrant"),
    entry("almalinux8", "almalinux/8", "vagrant"),
    entry("rockylinux8", "rockylinux/8", "vagrant"),
    entry("rockylinux9", "rockylinux/9", "vagrant"),
    entry("fedora39", "fedora/39-cloud-base", "vagrant"),
    entry("opensuse", "opensuse/Leap-15.4.x86_64", "vagrant"),
    entry("oraclelinux8", "generic/oracle8", "vagrant"),
    entry("debian11", "debian/bullseye64", "vagrant"),
    entry("debian12", "debian/bookworm64", "vagrant"),
];

pub fn find_box(os: &str) -> Option<&'static BoxSpec> {
    SUPPORTED_OS.iter().find(|b| b.os == os)
}
