use clap::Parser;
use places::application::{init::init, tour, ConfigService, EditForm, PinStore};
use places::cli::{format_pin_list, format_region, format_tour, Cli, Commands};
use places::domain::{Direction, MapType, Pin};
use places::error::{PlacesError, Result};
use places::infrastructure::{FileSystemRepository, FileSystemStorage, PlacesRepository};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PLACES_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Convert a 1-based row from the command line
fn row_index(row: usize) -> Result<usize> {
    row.checked_sub(1)
        .ok_or_else(|| PlacesError::NotFound("rows start at 1".to_string()))
}

fn open_store(repo: &FileSystemRepository) -> Result<PinStore<FileSystemStorage>> {
    PinStore::open(repo.storage())
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("places - Map pin store");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path, map_type } => {
            let map_type = MapType::from_str(&map_type).map_err(PlacesError::Config)?;
            init(&path, map_type)
        }
        Commands::Add {
            title,
            subtitle,
            lat,
            lon,
        } => {
            let repo = FileSystemRepository::discover()?;
            let mut store = open_store(&repo)?;
            let title = store.save(Pin::new(title, subtitle, lat, lon))?.pin.title.clone();
            println!("Saved pin {}: {}", store.len(), title);
            Ok(())
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            let store = open_store(&repo)?;
            let pins: Vec<Pin> = store.pins().cloned().collect();
            print!("{}", format_pin_list(&pins));
            if pins.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Show { row } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = open_store(&repo)?;
            let row = row_index(row)?;
            let pin = store.get(row)?;
            let region = store.region_for(row, config.span)?;
            println!("{} ({})", pin.title, pin.subtitle);
            println!("{}  map {}", format_region(&region), config.map_type);
            Ok(())
        }
        Commands::Delete { row } => {
            let repo = FileSystemRepository::discover()?;
            let mut store = open_store(&repo)?;
            let removed = store.delete_at(row_index(row)?)?;
            println!("Deleted pin: {}", removed.pin.title);
            Ok(())
        }
        Commands::Edit {
            row,
            title,
            subtitle,
        } => {
            let repo = FileSystemRepository::discover()?;
            let mut store = open_store(&repo)?;

            let mut form = EditForm::for_pin(store.get(row_index(row)?)?);
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(subtitle) = subtitle {
                form.subtitle = subtitle;
            }

            let edit = form.submit().ok_or_else(|| {
                PlacesError::ValidationFailed("Title and subtitle must not be empty".to_string())
            })?;
            let record = edit.apply(&mut store)?;
            println!("Updated pin: {} ({})", record.pin.title, record.pin.subtitle);
            Ok(())
        }
        Commands::Tour { direction, steps } => {
            let direction = Direction::from_str(&direction).map_err(PlacesError::Config)?;
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = open_store(&repo)?;

            let steps = steps.unwrap_or(store.len());
            let stops = tour(&store, direction, steps, config.span);
            print!("{}", format_tour(&stops));
            if stops.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("map_type = {}", config.map_type);
                println!("span = {}", config.span);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: places config [--list | <key> [<value>]]");
                println!("Valid keys: map_type, span, created");
                Ok(())
            }
        }
    }
}
