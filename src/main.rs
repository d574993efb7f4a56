//! CLI entry point for lumenrig.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use lumenrig::cli::Cli;
use lumenrig::config::RigConfig;
use lumenrig::input::ControlInput;
use lumenrig::logging::init_logging;
use lumenrig::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref(), &cli.log_level);

    let config = RigConfig::layered(cli.config.as_deref(), cli.to_config_overrides())
        .wrap_err("Failed to load rig configuration")?;

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to write config to {}", path.display()))?;
        eprintln!("Wrote rig config to {}", path.display());
    }

    // Launch TUI if --interactive flag is set
    if cli.interactive {
        return tui::run(&cli, &config);
    }

    let (mut scene, controls) = config.build().wrap_err("Invalid rig configuration")?;

    // Apply --set updates in order
    let policy = cli.policy.into();
    for set in &cli.set {
        let Some(control) = controls.iter().find(|c| c.name == set.control) else {
            bail!("Unknown control '{}'", set.control);
        };
        let input = ControlInput::parse(&set.value, policy)
            .map_err(|e| eyre!("Invalid value for '{}': {}", set.control, e))?;
        control.binding.apply(input, &mut scene);
    }

    if cli.tree {
        println!("{}", scene.tree());
        return Ok(());
    }

    // Serialize rig state to YAML using serde
    let yaml =
        serde_yaml::to_string(&scene.snapshot()).wrap_err("Failed to serialize rig state")?;

    if let Some(ref path) = cli.output {
        std::fs::write(path, &yaml)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("Wrote rig state to {}", path.display());
    } else {
        print!("{yaml}");
    }

    Ok(())
}
