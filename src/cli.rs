use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "zipup")]
#[command(version)]
#[command(about = "A Rust zip utility for store-only archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipup backup.zip notes.txt todo.txt   pack two files into backup.zip\n  \
  zipup -r site.zip public/             pack a directory tree recursively\n  \
  zipup -p v1.0/ dist.zip app.bin       store entries under a v1.0/ prefix")]
pub struct Cli {
    /// Output ZIP file path
    #[arg(value_name = "ARCHIVE")]
    pub archive: String,

    /// Files or directories to add
    #[arg(value_name = "PATHS")]
    pub paths: Vec<String>,

    /// Recurse into directories
    #[arg(short = 'r')]
    pub recursive: bool,

    /// Prefix entry names with this archive path
    #[arg(short = 'p', value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Overwrite the archive WITHOUT prompting
    #[arg(short = 'o')]
    pub overwrite: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }

    /// The entry-name prefix, normalized to end in `/` when non-empty.
    pub fn entry_prefix(&self) -> String {
        match self.prefix.as_deref() {
            None | Some("") => String::new(),
            Some(p) if p.ends_with('/') => p.to_string(),
            Some(p) => format!("{p}/"),
        }
    }
}
