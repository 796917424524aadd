//! Snapshot tests for rendered provisioning artifacts using insta.
//!
//! The cleanup sequence and the script renderer are byte-level contracts;
//! snapshots make any drift visible in review.
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta test --accept
//! ```

use imageprep::config;
use imageprep::context::SystemContext;
use imageprep::phases::orchestrator::{apply_phases, render_script};

#[test]
fn test_cleanup_sequence_snapshot() {
    let cfg = config::parse("cleanup: true").unwrap();
    let (cmds, _) = apply_phases(&cfg, &SystemContext::new()).unwrap();

    insta::assert_snapshot!(cmds.to_script(), @r#"
    DEBIAN_FRONTEND=noninteractive apt-get -y autoremove --purge || true
    DEBIAN_FRONTEND=noninteractive apt-get -y clean
    rm -rf /var/lib/apt/lists/* || true
    dnf -y clean all
    rm -rf /var/cache/dnf || true
    rm -rf /var/cache/apk/* || true
    rm -rf /tmp/* || true
    rm -rf /usr/share/man/* || true
    rm -rf /usr/share/doc/* || true
    rm /etc/netplan/50-cloud-init.yaml || true
    rm /etc/udev/rules.d/70-persistent-net.rules || true
    rm -f /etc/ssh/{ssh_host_dsa_key,ssh_host_dsa_key.pub,ssh_host_ecdsa_key,ssh_host_ecdsa_key.pub,ssh_host_ed25519_key,ssh_host_ed25519_key.pub,ssh_host_rsa_key,ssh_host_rsa_key.pub} || true
    sed -i '/^\(HWADDR\|UUID\)=/d' /etc/sysconfig/network-scripts/ifcfg-* || true
    find /var/cache -type f -exec rm -rf {} \;
    find /var/log -type f | while read -r f; do echo -ne '' > "$f"; done;
    cloud-init clean
    journalctl --rotate
    sleep 5
    journalctl --vacuum-time=1s
    echo > /etc/machine-id
    echo > /root/.bash_history
    echo Finished cleanup on $(date) > /var/log/cleanup.log
    dd if=/dev/zero of=/EMPTY bs=1M 2>/dev/null || true; rm -f /EMPTY
    "#);
}

#[test]
fn test_rendered_script_snapshot() {
    let cfg = config::parse(
        r#"
files:
  /etc/motd: "welcome\n"
users:
  - name: deploy
    sudo: true
commands:
  - echo done
"#,
    )
    .unwrap();
    let (cmds, fs) = apply_phases(&cfg, &SystemContext::new()).unwrap();

    insta::assert_snapshot!(render_script(&cmds, &fs), @r#"
    #!/bin/sh
    set -e

    mkdir -p '/etc'
    cat > '/etc/motd' <<'EOF_IMAGEPREP'
    welcome
    EOF_IMAGEPREP
    chmod 0644 '/etc/motd'

    mkdir -p '/etc/sudoers.d'
    cat > '/etc/sudoers.d/deploy' <<'EOF_IMAGEPREP'
    deploy ALL=(ALL) NOPASSWD:ALL
    EOF_IMAGEPREP
    chmod 0440 '/etc/sudoers.d/deploy'
    chown root:root '/etc/sudoers.d/deploy'

    id -u deploy >/dev/null 2>&1 || useradd -m deploy
    echo done
    "#);
}
