mod audio;
mod binds;
mod config;
mod defaultapps;
mod devices;
mod disks;
mod packages;
mod run;
mod status;
mod users;

pub use audio::{cmd_audio_get, cmd_audio_mute, cmd_audio_open, cmd_audio_set};
pub use binds::{cmd_binds_add, cmd_binds_comment, cmd_binds_list, cmd_binds_remove, cmd_binds_set};
pub use config::{cmd_config_open, cmd_config_path};
pub use defaultapps::{cmd_default_apps_set, cmd_default_apps_show};
pub use devices::cmd_devices;
pub use disks::cmd_disks;
pub use packages::{cmd_packages_install, cmd_packages_update, cmd_packages_updates};
pub use run::cmd_run;
pub use status::cmd_status;
pub use users::{cmd_users_add, cmd_users_list, cmd_users_passwd, cmd_users_remove};

use anyhow::{Result, bail};
use hyprcc_core::privileged::{self, JobEvent, JobOutcome};
use hyprcc_core::runner::Runner;
use tokio::sync::mpsc;

use crate::output::{print_dry_run, print_info, print_success};

/// Run a script through the privileged runner and wait for its outcome.
///
/// In dry-run the script body is reported instead; no helper is
/// resolved and nothing is spawned.
pub(crate) async fn run_privileged(runner: &Runner, script: &str, what: &str) -> Result<()> {
  if runner.dry_run {
    print_dry_run(&format!(
      "{} /bin/bash -s <<'EOF'\n{}\nEOF",
      privileged::HELPER,
      script.trim_end()
    ));
    return Ok(());
  }

  let (tx, mut rx) = mpsc::unbounded_channel();
  let _job = privileged::spawn_script(script, tx)?;
  print_info("Launched privileged command via pkexec; authentication may be requested");

  while let Some(event) = rx.recv().await {
    match event {
      JobEvent::Launched { .. } => {}
      JobEvent::Finished(JobOutcome::Completed) => {
        print_success(&format!("{what}: completed successfully"));
        return Ok(());
      }
      JobEvent::Finished(JobOutcome::Failed { code }) => {
        bail!("{what}: command failed (exit {code})")
      }
      JobEvent::Finished(JobOutcome::Signaled { signal }) => {
        bail!("{what}: command killed by signal {signal}")
      }
    }
  }
  bail!("{what}: lost track of the privileged job")
}
