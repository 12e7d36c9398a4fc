//! Lodestone data exporter CLI
//!
//! Command-line tool for exporting localized game-data tables from an
//! unpacked sheet store to binary table files.

use clap::{Parser, Subcommand};
use lodestone_core::{
    export_tables, verify_table, CsvStore, ExportManifest, TableKind, MANIFEST_FILE,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lodestone-export")]
#[command(about = "Localized game-table exporter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export table kinds from the sheet store to binary files
    Export {
        /// Root directory of the unpacked sheet store
        #[arg(short, long, env = "LODESTONE_STORE_ROOT")]
        root: PathBuf,

        /// Output directory for table files
        #[arg(short, long, env = "LODESTONE_OUT_DIR", default_value = "pack")]
        out_dir: PathBuf,

        /// Table kinds to export (default: all)
        #[arg(short, long)]
        table: Vec<TableKind>,

        /// Decode each written file back as a self-check
        #[arg(long)]
        verify: bool,
    },

    /// List sheets and languages discovered under the store root
    List {
        /// Root directory of the unpacked sheet store
        #[arg(short, long, env = "LODESTONE_STORE_ROOT")]
        root: PathBuf,
    },

    /// Decode a written table file and report its record count
    Verify {
        /// Path to a `<kind>_table.bin` file
        #[arg(short, long)]
        file: PathBuf,

        /// Table kind the file holds
        #[arg(short, long)]
        table: TableKind,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> lodestone_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            root,
            out_dir,
            table,
            verify,
        } => cmd_export(&root, &out_dir, &table, verify),
        Commands::List { root } => cmd_list(&root),
        Commands::Verify { file, table } => cmd_verify(&file, table),
    }
}

fn cmd_export(
    root: &Path,
    out_dir: &Path,
    tables: &[TableKind],
    verify: bool,
) -> lodestone_core::Result<()> {
    let store = CsvStore::open(root)?;
    let kinds: Vec<TableKind> = if tables.is_empty() {
        TableKind::ALL.to_vec()
    } else {
        tables.to_vec()
    };

    let outcomes = export_tables(&store, &kinds, out_dir, verify)?;

    for outcome in &outcomes {
        println!(
            "{}: {} records -> {}",
            outcome.kind,
            outcome.records,
            outcome.path.display()
        );
    }

    let manifest = ExportManifest::new(root, &outcomes);
    let manifest_path = out_dir.join(MANIFEST_FILE);
    manifest.save(&manifest_path)?;

    println!();
    println!(
        "Exported {} table(s), manifest at {}",
        outcomes.len(),
        manifest_path.display()
    );

    Ok(())
}

fn cmd_list(root: &Path) -> lodestone_core::Result<()> {
    let store = CsvStore::open(root)?;

    println!("Sheets under {}:", root.display());
    for (sheet, languages) in store.sheets() {
        let codes: Vec<&str> = languages.iter().map(|lang| lang.code()).collect();
        println!("  {} [{}]", sheet, codes.join(", "));
    }

    Ok(())
}

fn cmd_verify(file: &Path, table: TableKind) -> lodestone_core::Result<()> {
    let records = verify_table(file, table)?;
    println!("{}: {} records in {}", table, records, file.display());
    Ok(())
}
