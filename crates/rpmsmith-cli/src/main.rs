//! Rpmsmith CLI - release operations for an RPM package repository.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod targets;

use commands::{check, listing, publish, sign};

#[derive(Parser)]
#[command(name = "rpmsmith")]
#[command(about = "RPM repository release operations: verify, sign, and publish listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify package signatures, or strip them to check pre-signing content
    Check {
        /// Strip the signature header and print a content hash instead of verifying
        #[arg(long)]
        check_unsigned: bool,
        /// Verify signatures against the archive key (default mode)
        #[arg(long)]
        verify: bool,
        /// Operate on every package found under the repository root
        #[arg(long)]
        all: bool,
        /// Repository root scanned by --all
        #[arg(long, default_value = ".")]
        repo_root: PathBuf,
        /// Public key file imported into the scoped verification database
        #[arg(long, default_value = check::DEFAULT_ARCHIVE_KEYRING)]
        key_file: PathBuf,
        /// Packages to operate on
        packages: Vec<PathBuf>,
    },
    /// Verify or sign packages with a key from the GPG keyring
    Publish {
        /// Verify signatures against the key named by --key-id
        #[arg(long)]
        verify: bool,
        /// Sign packages with the key named by --key-id
        #[arg(long)]
        sign: bool,
        /// Operate on every package found under the repository root
        #[arg(long)]
        all: bool,
        /// The key ID that will be used
        #[arg(long, default_value = publish::DEFAULT_TESTING_KEY)]
        key_id: String,
        /// Repository root scanned by --all
        #[arg(long, default_value = ".")]
        repo_root: PathBuf,
        /// Packages to sign/verify
        packages: Vec<PathBuf>,
    },
    /// Sign packages with the release key
    Sign {
        /// Sign every package under the repository root, except already-public ones
        #[arg(long)]
        all: bool,
        /// The key ID that will be used
        #[arg(long, default_value = sign::DEFAULT_RELEASE_KEY)]
        key_id: String,
        /// Repository root scanned by --all
        #[arg(long, default_value = ".")]
        repo_root: PathBuf,
        /// Packages to sign
        packages: Vec<PathBuf>,
    },
    /// Generate the static HTML package listing
    Listing {
        /// Repository root holding one subdirectory per release
        #[arg(long, default_value = "public")]
        repo: PathBuf,
        /// Output directory for index.html and styles.css (defaults to --repo)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Page title
        #[arg(long, default_value = "RPM Package Repository")]
        title: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            check_unsigned,
            verify,
            all,
            repo_root,
            key_file,
            packages,
        } => check::run(check_unsigned, verify, all, repo_root, key_file, packages),
        Commands::Publish {
            verify,
            sign,
            all,
            key_id,
            repo_root,
            packages,
        } => publish::run(verify, sign, all, key_id, repo_root, packages),
        Commands::Sign {
            all,
            key_id,
            repo_root,
            packages,
        } => sign::run(all, key_id, repo_root, packages),
        Commands::Listing {
            repo,
            output,
            title,
        } => listing::run(repo, output, title),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
