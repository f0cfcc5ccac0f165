use clap::Parser;
use std::path::{Path, PathBuf};

/// Defaults match the original deployment's fixed host, port, and artifact
/// filenames; the flags exist for non-default layouts.
#[derive(Parser, Debug)]
#[command(name = "bullyguard-web")]
#[command(
    author,
    version,
    about = "Web front-end for the BullyGuard cyberbullying classifier"
)]
pub struct Cli {
    /// Listen port
    #[arg(short, long, default_value = "5000")]
    pub port: u16,

    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Directory searched for the vectorizer candidate files
    #[arg(long, default_value = ".")]
    pub artifact_dir: PathBuf,

    /// Model artifact path; relative paths resolve against the artifact dir
    #[arg(long, default_value = bullyguard_classifiers::MODEL_FILENAME)]
    pub model: PathBuf,

    /// Stopword file path; relative paths resolve against the artifact dir
    #[arg(long, default_value = bullyguard_classifiers::STOPWORDS_FILENAME)]
    pub stopwords: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve a possibly-relative artifact path against the artifact dir
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.artifact_dir.join(path)
        }
    }
}
