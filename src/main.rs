use clap::Parser;
use layout_inspector::cli::commands::{cmd_hit, cmd_list, cmd_props, cmd_show};
use layout_inspector::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Snapshots root: CLI > config file > default
    let snapshots_root = cli
        .snapshots
        .as_deref()
        .unwrap_or(&config.snapshots.root)
        .to_string();

    match cli.command {
        Commands::List => {
            cmd_list(&snapshots_root, cli.verbose)?;
        }
        Commands::Show { snapshot } => {
            cmd_show(&snapshot, &config, cli.verbose)?;
        }
        Commands::Hit {
            snapshot,
            x,
            y,
            display_width,
            display_height,
        } => {
            let resolved = cmd_hit(
                &snapshot,
                x,
                y,
                display_width,
                display_height,
                &config,
                cli.verbose,
            )?;
            if !resolved {
                std::process::exit(1);
            }
        }
        Commands::Props {
            snapshot,
            path,
            include_children,
        } => {
            cmd_props(&snapshot, &path, include_children, &config)?;
        }
    }

    Ok(())
}
