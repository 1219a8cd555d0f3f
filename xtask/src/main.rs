//! Build helpers: man pages and shell completions for `lexis`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Project automation")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man_pages(&out),
        Task::Completions { out } => completions(&out),
    }
}

fn man_pages(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = lexis::command();
    render_man(&cmd, "lexis", out)?;
    for sub in cmd.get_subcommands() {
        let name = format!("lexis-{}", sub.get_name());
        let sub = sub.clone().name(name.clone());
        render_man(&sub, &name, out)?;
    }
    println!("man pages written to {}", out.display());
    Ok(())
}

fn render_man(cmd: &clap::Command, name: &str, out: &Path) -> io::Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buf)?;
    fs::write(out.join(format!("{name}.1")), buf)
}

fn completions(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let mut cmd = lexis::command();
    for shell in Shell::value_variants() {
        let path = clap_complete::generate_to(*shell, &mut cmd, "lexis", out)?;
        println!("{}", path.display());
    }
    Ok(())
}
