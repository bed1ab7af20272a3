//! hyprcc: a Hyprland control center for the command line.
//!
//! Every subcommand wraps the shell utility the matching desktop task
//! uses (`yay`/`pacman`, `flatpak`, `xdg-mime`, `pactl`, `hyprctl`,
//! `useradd`/`userdel`/`chpasswd` via `pkexec`). `--dry-run` reports
//! the command lines instead of executing them.

mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hyprcc_core::packages::Backend;
use hyprcc_core::runner::Runner;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hyprcc")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Report command lines instead of executing them
  #[arg(short = 'n', long, global = true)]
  dry_run: bool,

  /// Enable verbose (debug) logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Edit the Hyprland keybinds file
  Binds {
    /// Binds file to edit (default: ~/.config/hypr/binds.conf)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Skip the `hyprctl reload` after saving
    #[arg(long, global = true)]
    no_reload: bool,

    #[command(subcommand)]
    action: BindsAction,
  },

  /// Query and install packages, run system updates
  Packages {
    #[command(subcommand)]
    action: PackagesAction,
  },

  /// Manage user accounts (privileged, via pkexec)
  Users {
    #[command(subcommand)]
    action: UsersAction,
  },

  /// Volume control via pactl, or launch pavucontrol
  Audio {
    #[command(subcommand)]
    action: AudioAction,
  },

  /// Show PCI and USB devices
  Devices,

  /// Show block devices and filesystem usage
  Disks,

  /// Show or set default applications (xdg-mime)
  DefaultApps {
    #[command(subcommand)]
    action: DefaultAppsAction,
  },

  /// Run an arbitrary command, optionally as root or in a terminal
  Run {
    /// The command line to run (passed to `bash -lc`)
    command: String,

    /// Run with elevated rights
    #[arg(long)]
    root: bool,

    /// Open a terminal emulator window for the command
    #[arg(long)]
    terminal: bool,
  },

  /// Open configuration directories, print managed paths
  Config {
    #[command(subcommand)]
    action: ConfigAction,
  },

  /// Show tool status: managed paths and available helpers
  Status {
    #[arg(long)]
    json: bool,
  },
}

#[derive(Subcommand)]
enum BindsAction {
  /// List the bind rows with their indices
  List,
  /// Append a bind row and save
  Add { line: String },
  /// Replace the bind row at INDEX and save
  Set { index: usize, line: String },
  /// Remove the bind row at INDEX and save
  Remove { index: usize },
  /// Append a comment line at end of file and save
  Comment { text: String },
}

#[derive(Subcommand)]
enum PackagesAction {
  /// List pending updates (yay -Qu)
  Updates,
  /// Run a full system update
  Update {
    /// Run the combined yay + flatpak update in a terminal window
    #[arg(long)]
    terminal: bool,
  },
  /// Install a package
  Install {
    package: String,

    #[arg(long, value_enum, default_value_t = BackendArg::Pacman)]
    backend: BackendArg,

    /// Run the install in a terminal window
    #[arg(long)]
    terminal: bool,
  },
}

#[derive(Subcommand)]
enum UsersAction {
  /// List login accounts (UID >= 1000)
  List,
  /// Create a user with a home directory
  Add {
    username: String,

    /// Password (prompted when omitted)
    #[arg(long)]
    password: Option<String>,

    /// Add the user to the sudo/wheel group
    #[arg(long)]
    sudo: bool,

    /// Enable passwordless sudo (implies --sudo)
    #[arg(long)]
    passwordless_sudo: bool,
  },
  /// Delete a user
  Remove {
    username: String,

    /// Also remove the home directory
    #[arg(long)]
    remove_home: bool,
  },
  /// Change a user's password
  Passwd {
    username: String,

    /// Password (prompted when omitted)
    #[arg(long)]
    password: Option<String>,
  },
}

#[derive(Subcommand)]
enum AudioAction {
  /// Launch the volume control GUI (pavucontrol)
  Open,
  /// Print the default sink volume
  Get,
  /// Set the default sink volume (percent)
  Set { percent: u8 },
  /// Toggle mute on the default sink
  Mute,
}

#[derive(Subcommand)]
enum DefaultAppsAction {
  /// Show the current default application for each role
  Show {
    #[arg(long)]
    json: bool,
  },
  /// Assign default applications by .desktop file name
  Set {
    #[arg(long)]
    terminal: Option<String>,

    #[arg(long)]
    file_manager: Option<String>,

    #[arg(long)]
    browser: Option<String>,

    #[arg(long)]
    editor: Option<String>,
  },
}

#[derive(Subcommand)]
enum ConfigAction {
  /// Open a config directory in the file manager (hypr, waybar, rofi, ...)
  Open {
    #[arg(default_value = "hypr")]
    name: String,
  },
  /// Print the managed configuration paths
  Path,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
  Pacman,
  Aur,
  Flatpak,
}

impl From<BackendArg> for Backend {
  fn from(arg: BackendArg) -> Self {
    match arg {
      BackendArg::Pacman => Backend::Pacman,
      BackendArg::Aur => Backend::Aur,
      BackendArg::Flatpak => Backend::Flatpak,
    }
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  let runner = Runner::new(cli.dry_run);
  tracing::debug!(dry_run = cli.dry_run, "starting");

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  if let Err(err) = rt.block_on(dispatch(cli.command, runner)) {
    output::print_error(&format!("{err:#}"));
    std::process::exit(1);
  }
  Ok(())
}

async fn dispatch(command: Commands, runner: Runner) -> Result<()> {
  match command {
    Commands::Binds { file, no_reload, action } => match action {
      BindsAction::List => cmd::cmd_binds_list(file),
      BindsAction::Add { line } => cmd::cmd_binds_add(&runner, file, line, no_reload).await,
      BindsAction::Set { index, line } => {
        cmd::cmd_binds_set(&runner, file, index, line, no_reload).await
      }
      BindsAction::Remove { index } => {
        cmd::cmd_binds_remove(&runner, file, index, no_reload).await
      }
      BindsAction::Comment { text } => {
        cmd::cmd_binds_comment(&runner, file, text, no_reload).await
      }
    },
    Commands::Packages { action } => match action {
      PackagesAction::Updates => cmd::cmd_packages_updates(&runner).await,
      PackagesAction::Update { terminal } => cmd::cmd_packages_update(&runner, terminal).await,
      PackagesAction::Install { package, backend, terminal } => {
        cmd::cmd_packages_install(&runner, backend.into(), &package, terminal).await
      }
    },
    Commands::Users { action } => match action {
      UsersAction::List => cmd::cmd_users_list(),
      UsersAction::Add { username, password, sudo, passwordless_sudo } => {
        cmd::cmd_users_add(&runner, &username, password, sudo, passwordless_sudo).await
      }
      UsersAction::Remove { username, remove_home } => {
        cmd::cmd_users_remove(&runner, &username, remove_home).await
      }
      UsersAction::Passwd { username, password } => {
        cmd::cmd_users_passwd(&runner, &username, password).await
      }
    },
    Commands::Audio { action } => match action {
      AudioAction::Open => cmd::cmd_audio_open(&runner),
      AudioAction::Get => cmd::cmd_audio_get(&runner).await,
      AudioAction::Set { percent } => cmd::cmd_audio_set(&runner, percent).await,
      AudioAction::Mute => cmd::cmd_audio_mute(&runner).await,
    },
    Commands::Devices => cmd::cmd_devices(&runner).await,
    Commands::Disks => cmd::cmd_disks(&runner).await,
    Commands::DefaultApps { action } => match action {
      DefaultAppsAction::Show { json } => cmd::cmd_default_apps_show(&runner, json).await,
      DefaultAppsAction::Set { terminal, file_manager, browser, editor } => {
        cmd::cmd_default_apps_set(&runner, terminal, file_manager, browser, editor).await
      }
    },
    Commands::Run { command, root, terminal } => {
      cmd::cmd_run(&runner, &command, root, terminal).await
    }
    Commands::Config { action } => match action {
      ConfigAction::Open { name } => cmd::cmd_config_open(&runner, &name),
      ConfigAction::Path => cmd::cmd_config_path(),
    },
    Commands::Status { json } => cmd::cmd_status(json),
  }
}
