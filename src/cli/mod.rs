pub mod completions;
pub mod export;
pub mod init;
pub mod list;
pub mod watch;

use clap::{Parser, Subcommand};

/// drawio-pages - Export every page of a draw.io project to PNG
#[derive(Parser, Debug)]
#[command(name = "drawio-pages")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every page of project files to PNG
    Export(export::ExportArgs),

    /// List pages and the files they export to
    List(list::ListArgs),

    /// Export, then re-export whenever a project file changes
    Watch(export::ExportArgs),

    /// Initialize an export config (generates drawio-pages.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_flags() {
        let cli = Cli::try_parse_from([
            "drawio-pages",
            "export",
            "ui.drawio",
            "--tool",
            "/opt/drawio",
            "--width",
            "800",
            "--opaque",
            "-o",
            "out",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.input.inputs, vec![PathBuf::from("ui.drawio")]);
                assert_eq!(args.tool, Some(PathBuf::from("/opt/drawio")));
                assert_eq!(args.width, Some(800));
                assert!(args.opaque);
                assert_eq!(args.output_dir, Some(PathBuf::from("out")));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_export_without_inputs() {
        let cli = Cli::try_parse_from(["drawio-pages", "export"]).unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert!(args.input.inputs.is_empty());
                assert!(!args.opaque);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
