use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use inkboard::config::Config;
use inkboard::export::write_png;
use inkboard::input::SketchState;
use inkboard::script::Script;

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Freehand sketch surface with undo and PNG export")]
struct Cli {
    /// Gesture script (TOML) to replay and export
    script: Option<PathBuf>,

    /// Write the exported PNG to this exact path instead of the configured
    /// export directory
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Override the configured export directory
    #[arg(long, value_name = "DIR")]
    save_dir: Option<String>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    if let Some(script_path) = &cli.script {
        let config = Config::load()?;
        let script = Script::load(script_path)?;

        let mut state = SketchState::from_config(&config);
        script.replay(&mut state);

        let saved = if let Some(output) = &cli.output {
            let surface = state
                .render_to_image()?
                .context("script mounted a zero-sized surface")?;
            write_png(&surface, output)?;
            output.clone()
        } else {
            let mut export = config.export;
            if let Some(dir) = &cli.save_dir {
                export.directory = Some(dir.clone());
            }
            state
                .export_png(&export)?
                .context("script mounted a zero-sized surface")?
        };

        println!(
            "Saved {} strokes to {}",
            state.board.len(),
            saved.display()
        );
        return Ok(());
    }

    // No script: show usage
    println!("inkboard: freehand sketch surface with undo and PNG export");
    println!();
    println!("Usage:");
    println!("  inkboard <SCRIPT>              Replay a gesture script and export a PNG");
    println!("  inkboard <SCRIPT> -o out.png   Export to an explicit path");
    println!("  inkboard --init-config         Write a documented default config file");
    println!("  inkboard --help                Show help");
    println!();
    println!("Scripts are TOML files:");
    println!("  width = 800");
    println!("  height = 600");
    println!();
    println!("  [[gestures]]");
    println!("  tool = \"pen\"");
    println!("  color = \"#6366f1\"");
    println!("  points = [[10, 10], [20, 10], [20, 20]]");

    Ok(())
}
