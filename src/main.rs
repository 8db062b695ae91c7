use rusty_library_catalog::{
    application::{CatalogDependencies, CatalogService, Notifier, SearchEngine},
    config::CatalogConfig,
    domain::Validator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_library_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CatalogConfig::from_env().expect("Invalid configuration");
    tracing::debug!(?config, "Loaded configuration");

    let repository = config
        .open_repository()
        .expect("Failed to open catalog repository");

    let mut catalog = CatalogService::new(CatalogDependencies {
        search_engine: SearchEngine::new(),
        validator: Validator::new(),
        repository,
        notifier: Notifier::with_default_channels(&config.notification_log),
    });

    println!("\n=== ADDING BOOKS ===");
    for (title, author, isbn) in [
        ("Cien Años de Soledad", "Gabriel Garcia Marquez", "9780060883287"),
        ("El Principito", "Antoine de Saint-Exupery", "9780156012195"),
        ("1984", "George Orwell", "9780451524935"),
    ] {
        report(catalog.add_book(title, author, isbn));
    }

    println!("\n=== SEARCH BY AUTHOR ===");
    for book in catalog.search("author", "Garcia") {
        println!("- {} by {}", book.title, book.author);
    }

    println!("\n=== LOAN ===");
    let loaned = catalog.loan_book(1, "Juan Perez");
    let loan_id = loaned.as_ref().ok().map(|event| event.loan_id.value());
    report(loaned);

    println!("\n=== AVAILABLE BOOKS ===");
    for book in catalog.list_available_books() {
        println!("- {}", book.title);
    }

    println!("\n=== RETURN ===");
    match loan_id {
        Some(id) => match i64::try_from(id) {
            Ok(id) => report(catalog.return_book(id)),
            Err(e) => println!("Error: {e}"),
        },
        None => println!("Nothing to return"),
    }
}

fn report<T: std::fmt::Display, E: std::fmt::Display>(outcome: Result<T, E>) {
    match outcome {
        Ok(event) => println!("{event}"),
        Err(e) => println!("Error: {e}"),
    }
}
