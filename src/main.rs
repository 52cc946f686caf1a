use clap::Parser;
use tracing_subscriber::EnvFilter;

use atelier::cli::{
    handle_add, handle_delete, handle_get, handle_init, handle_list, handle_order, handle_stats,
    handle_update, handle_works_list, handle_works_order, handle_works_show, Cli, Commands,
    WorksAction,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Add {
            title,
            category,
            description,
            image,
            images,
            json,
        } => handle_add(title, category, description, image, images, json),
        Commands::List { json } => handle_list(json),
        Commands::Get { id, json } => handle_get(id, json),
        Commands::Update {
            id,
            title,
            category,
            description,
            image,
            images,
            json,
        } => handle_update(id, title, category, description, image, images, json),
        Commands::Delete { id, force } => handle_delete(id, force),
        Commands::Stats { json } => handle_stats(json),
        Commands::Works(works_cmd) => match works_cmd.action {
            WorksAction::List { category, json } => handle_works_list(category, json),
            WorksAction::Show { id, json } => handle_works_show(id, json),
            WorksAction::Order { id } => handle_works_order(id),
        },
        Commands::Order { items } => handle_order(items),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
