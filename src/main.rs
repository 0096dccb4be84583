use clap::Parser;
use roster_import::adapters::{open_source, AutoConfirm, HttpStore, MemoryStore, StdinConfirm};
use roster_import::config::{Cli, Command, ImportSettings, TomlConfig};
use roster_import::core::importer::BatchImporter;
use roster_import::domain::model::ImportReport;
use roster_import::domain::ports::{RecordStore, RowSource};
use roster_import::utils::{logger, validation::Validate};
use roster_import::ImportError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting roster-import CLI");

    let result = match cli.command {
        Command::Preview { file, skip_rows } => preview(&file, skip_rows.unwrap_or(0)),
        Command::Import {
            file,
            skip_rows,
            store_endpoint,
            config,
            dry_run,
            yes,
        } => import(file, skip_rows, store_endpoint, config, dry_run, yes).await,
    };

    if let Err(e) = result {
        tracing::error!("run failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Shows what the importer would see: detected columns, row count, first
/// rows. Nothing is synthesized or committed.
fn preview(file: &str, skip_rows: usize) -> roster_import::Result<()> {
    let rows = open_source(file, skip_rows).read_rows()?;

    let mut columns: Vec<&String> = rows
        .first()
        .map(|row| row.data.keys().collect())
        .unwrap_or_default();
    columns.sort();

    println!("\n📄 File: {}", file);
    println!("📋 Columns found:");
    for column in &columns {
        println!("  - {}", column);
    }
    println!("\n📊 Total rows: {}", rows.len());

    println!("\n📝 First rows:");
    for row in rows.iter().take(3) {
        println!("\n  Row {}:", row.index + 1);
        for key in columns.iter().take(5) {
            if let Some(value) = row.data.get(*key) {
                println!("    {}: {}", key, value.as_str().unwrap_or_default());
            }
        }
    }
    if rows.len() > 3 {
        println!("\n  ... and {} more rows", rows.len() - 3);
    }

    Ok(())
}

async fn import(
    file: String,
    skip_rows: Option<usize>,
    store_endpoint: Option<String>,
    config: Option<String>,
    dry_run: bool,
    yes: bool,
) -> roster_import::Result<()> {
    let file_config = match config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };

    let settings = ImportSettings::resolve(
        file,
        skip_rows,
        store_endpoint,
        file_config.as_ref(),
        dry_run,
        yes,
    );
    settings.validate()?;

    let source = open_source(settings.file.clone(), settings.skip_rows);

    let report = if settings.dry_run {
        tracing::info!("dry run: importing into an in-memory store");
        run_import(source.as_ref(), MemoryStore::new(), settings.yes).await?
    } else if let Some(endpoint) = settings.store_endpoint.clone() {
        run_import(source.as_ref(), HttpStore::new(endpoint), settings.yes).await?
    } else {
        return Err(ImportError::MissingConfigError {
            field: "store_endpoint".to_string(),
        });
    };

    println!("\n{}", report);
    if report.committed {
        println!("✅ Import completed");
    } else {
        println!("ℹ️  Nothing committed");
    }

    Ok(())
}

async fn run_import<S: RecordStore>(
    source: &dyn RowSource,
    store: S,
    yes: bool,
) -> roster_import::Result<ImportReport> {
    if yes {
        BatchImporter::new(store, AutoConfirm).run(source).await
    } else {
        BatchImporter::new(store, StdinConfirm).run(source).await
    }
}
