use std::path::PathBuf;

use relfinder::db::{schema, SqliteStore};
use relfinder::model::RelationshipOptions;
use relfinder::PersonRelationshipService;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("relfinder=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;
    let mut persons_path: Option<PathBuf> = None;
    let mut contacts_path: Option<PathBuf> = None;
    let mut person_id: Option<i64> = None;
    let mut options = RelationshipOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                db_path = args.next().map(PathBuf::from);
                if db_path.is_none() {
                    fail("--file requires a path argument");
                }
            }
            "--persons" => {
                persons_path = args.next().map(PathBuf::from);
                if persons_path.is_none() {
                    fail("--persons requires a JSON file path");
                }
            }
            "--contacts" => {
                contacts_path = args.next().map(PathBuf::from);
                if contacts_path.is_none() {
                    fail("--contacts requires a JSON file path");
                }
            }
            "--person" | "-p" => match args.next().map(|s| s.parse::<i64>()) {
                Some(Ok(id)) => person_id = Some(id),
                _ => fail("--person requires an integer id"),
            },
            "--min-days" => match args.next().map(|s| s.parse::<i64>()) {
                Some(Ok(days)) => options.min_permanence_days = days,
                _ => fail("--min-days requires an integer"),
            },
            "--all-contacts" => options.require_contact_match = false,
            "--help" | "-h" => {
                println!("relfinder - find people related by work history and shared phones");
                println!();
                println!("Usage: relfinder [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>      Database file path (default: .data/relfinder.db)");
                println!("  --persons <JSON_PATH>  Import persons.json (requires --contacts)");
                println!("  --contacts <JSON_PATH> Import contacts.json (requires --persons)");
                println!("  -p, --person <ID>      Print the relationship report for a person");
                println!("  --min-days <N>         Minimum overlap in days (default: 90)");
                println!("  --all-contacts         Include contacts whose phone matched nobody");
                println!("  -h, --help             Show this help");
                println!();
                println!("Logging is controlled by RUST_LOG (default: relfinder=info).");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let db_path = db_path.unwrap_or_else(|| {
        let dir = PathBuf::from(".data");
        if let Err(e) = std::fs::create_dir_all(&dir) {
            fail(&format!("Failed to create .data directory: {}", e));
        }
        dir.join("relfinder.db")
    });

    match (persons_path, contacts_path) {
        (Some(persons), Some(contacts)) => {
            if db_path.exists() {
                eprintln!("Error: Database file {} already exists.", db_path.display());
                eprintln!("Remove it first or use --file to specify a different path.");
                std::process::exit(1);
            }
            match relfinder::migrate::import_files(&persons, &contacts, &db_path) {
                Ok(stats) => {
                    eprintln!("Import complete!");
                    eprintln!("  Persons: {}", stats.persons);
                    eprintln!("  Experiences: {}", stats.experiences);
                    eprintln!("  Contacts: {}", stats.contacts);
                    eprintln!("  Phones: {}", stats.phones);
                }
                Err(e) => fail(&format!("Import failed: {}", e)),
            }
        }
        (None, None) => {}
        _ => fail("--persons and --contacts must be given together"),
    }

    let Some(person_id) = person_id else {
        return;
    };

    let conn = match rusqlite::Connection::open(&db_path) {
        Ok(c) => c,
        Err(e) => fail(&format!("Error opening database: {}", e)),
    };
    if let Err(e) = schema::initialize(&conn) {
        fail(&format!("Error initializing database: {}", e));
    }

    let service = PersonRelationshipService::new(SqliteStore::new(&conn));
    let report = match service.get_relationships(person_id, &options) {
        Ok(r) => r,
        Err(e) => fail(&format!("{}", e)),
    };

    match report.to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("Failed to serialize report: {}", e)),
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}
