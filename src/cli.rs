use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "deckster")]
#[command(about = "Convert an Anki .apkg export into the Deckster Lab deck format", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the .apkg file
    pub apkg: PathBuf,

    /// Output deck JSON path
    #[arg(long, default_value = "frontend/src/data/deck.json")]
    pub output: PathBuf,

    /// Directory to write extracted audio files
    #[arg(long, default_value = "frontend/public/media")]
    pub media_dir: PathBuf,

    /// Skip extracting audio files
    #[arg(long)]
    pub no_audio: bool,
}
