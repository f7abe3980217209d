use std::path::PathBuf;

use clap::Parser;

/// OPTIONS
#[derive(Parser)]
pub struct Options {
    /// A calendar script (RON). May be omitted when `--year` names a
    /// year with a builtin first-weekday offset.
    pub script: Option<PathBuf>,
    /// Where to store the generated pages
    #[clap(long, short = 'o', default_value = ".")]
    pub out: PathBuf,
    /// Generate a builtin year without a script
    #[clap(long, short = 'y')]
    pub year: Option<i32>,
    /// A font file (ttf, otf, woff, woff2) to embed into the pages
    #[clap(long, short = 'f')]
    pub font: Option<PathBuf>,
}
