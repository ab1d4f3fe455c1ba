use clap::Parser;
use deckster::{
    cli::Cli,
    core::pipeline::{
        convert,
        ConvertOptions,
    },
};

fn main() {
    let cli = Cli::parse();

    let options = ConvertOptions {
        apkg: cli.apkg,
        output: cli.output,
        media_dir: cli.media_dir,
        audio: !cli.no_audio,
    };

    match convert(&options) {
        Ok(report) => {
            println!("Wrote {} cards to {}", report.cards, report.output.display());
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}
