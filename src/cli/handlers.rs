use std::env;
use std::io;
use std::path::PathBuf;

use crate::cart::Cart;
use crate::catalog::{
    builtin_works, filter_bar_categories, priced_works, seed_items, CatalogStore, StaticWork,
    WorkDraft, WorkItem, CATEGORIES,
};
use crate::error::{AtelierError, Result};
use crate::gallery::GalleryCursor;
use crate::order;
use crate::stats;
use crate::storage::FileStorage;

/// Find the workspace root by looking for .atelier/ or .git/
fn find_workspace_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".atelier").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_store() -> Result<CatalogStore<FileStorage>> {
    let root = find_workspace_root();
    let storage = FileStorage::open(&root)?;
    Ok(CatalogStore::new(storage))
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let storage = FileStorage::init(&root)?;
    let store = CatalogStore::new(storage);
    let items = store.load_or_seed(&seed_items())?;

    println!(
        "Initialized atelier workspace in {} ({} works seeded)",
        root.display(),
        items.len()
    );

    Ok(())
}

pub fn handle_add(
    title: String,
    category: String,
    description: String,
    image: String,
    images: Vec<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;

    let draft = WorkDraft {
        title,
        category,
        description,
        image,
        images,
    };

    match store.create(draft)? {
        Some(item) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                println!("Created work {} [{}] {}", item.id, item.category, item.title);
            }
        }
        None => {
            eprintln!("Skipped: title, category and description are required.");
        }
    }

    Ok(())
}

pub fn handle_list(json: bool) -> Result<()> {
    let store = open_store()?;
    let items = store.load_or_seed(&seed_items())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No works found.");
    } else {
        println!("Works:\n");
        for item in &items {
            println!("  {} [{}] {}", item.id, item.category, item.title);
        }
    }

    Ok(())
}

fn find_item(items: &[WorkItem], id: i64) -> Option<&WorkItem> {
    items.iter().find(|item| item.id == id)
}

pub fn handle_get(id: i64, json: bool) -> Result<()> {
    let store = open_store()?;
    let items = store.load()?.unwrap_or_default();

    let item = find_item(&items, id).ok_or_else(|| AtelierError::WorkNotFound(id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("Work {}", item.id);
        println!("Title: {}", item.title);
        println!("Category: {}", item.category);
        println!("Created: {}", item.created_at);
        println!("Image: {}", item.image);
        println!("Gallery: {}", item.images.join(", "));
        println!("\n{}", item.description);
    }

    Ok(())
}

pub fn handle_update(
    id: i64,
    title: String,
    category: String,
    description: String,
    image: String,
    images: Vec<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;

    let draft = WorkDraft {
        title,
        category,
        description,
        image,
        images,
    };

    match store.update(id, draft)? {
        Some(item) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                println!("Updated work {} [{}] {}", item.id, item.category, item.title);
            }
        }
        None => {
            eprintln!("Nothing updated: unknown id or missing required fields.");
        }
    }

    Ok(())
}

pub fn handle_delete(id: i64, force: bool) -> Result<()> {
    let store = open_store()?;
    let items = store.load()?.unwrap_or_default();

    let Some(item) = find_item(&items, id) else {
        println!("No work with id {}.", id);
        return Ok(());
    };

    // Confirm deletion unless --force is used
    if !force {
        eprintln!("Delete work {} - {}? [y/N] ", item.id, item.title);

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(AtelierError::Storage(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }
    }

    let title = item.title.clone();
    store.delete(id)?;
    println!("Deleted work {} - {}", id, title);

    Ok(())
}

pub fn handle_stats(json: bool) -> Result<()> {
    let store = open_store()?;
    let items = store.load_or_seed(&seed_items())?;

    let stats = stats::compute(&items, &CATEGORIES);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total works: {}", stats.total);
        for category in &stats.categories {
            println!("  {}: {}", category.category, category.count);
        }
    }

    Ok(())
}

pub fn handle_works_list(category: Option<String>, json: bool) -> Result<()> {
    let works = builtin_works();
    let filtered = priced_works(&works, category.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
    } else if filtered.is_empty() {
        println!("No works found.");
    } else {
        println!("Categories: {}\n", filter_bar_categories(&works).join(", "));
        for work in filtered {
            let price = work.price.unwrap_or(0);
            println!(
                "  {} {} ({}) - {} ₽",
                work.id,
                work.title,
                work.category,
                order::format_amount(price)
            );
            if !work.tags.is_empty() {
                println!("      tags: {}", work.tags.join(", "));
            }
        }
    }

    Ok(())
}

fn find_work(works: &[StaticWork], id: i64) -> Result<&StaticWork> {
    works
        .iter()
        .find(|work| work.id == id)
        .ok_or_else(|| AtelierError::WorkNotFound(id.to_string()))
}

pub fn handle_works_show(id: i64, json: bool) -> Result<()> {
    let works = builtin_works();
    let work = find_work(&works, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&work)?);
        return Ok(());
    }

    println!("{} ({})", work.title, work.category);
    if let Some(price) = work.price {
        println!("от {} ₽", order::format_amount(price));
    }
    println!("\n{}\n\n{}\n", work.description, work.details);
    if !work.tags.is_empty() {
        println!("Tags: {}\n", work.tags.join(", "));
    }

    let mut cursor = GalleryCursor::new(work.images.len());
    for image in &work.images {
        println!("  [{}] {}", cursor.position(), image);
        cursor.next();
    }

    Ok(())
}

pub fn handle_works_order(id: i64) -> Result<()> {
    let works = builtin_works();
    let work = find_work(&works, id)?;

    let message = order::work_summary(work);
    println!("{}\n", message);
    println!("Share link: {}", order::share_link(&message));

    Ok(())
}

pub fn handle_order(items: Vec<String>) -> Result<()> {
    let works = builtin_works();
    let mut cart = Cart::new();

    for raw in &items {
        match parse_order_item(raw) {
            Ok((id, quantity)) => match works.iter().find(|work| work.id == id) {
                Some(work) => {
                    cart.add(work);
                    if let Some(quantity) = quantity {
                        cart.set_quantity(id, quantity);
                    }
                }
                None => eprintln!("Warning: no work with id {}, skipping", id),
            },
            Err(e) => eprintln!("Warning: invalid order item '{}': {}", raw, e),
        }
    }

    match order::cart_summary(&cart) {
        Some(summary) => {
            println!("{}\n", summary);
            println!("Share link: {}", order::share_link(&summary));
        }
        None => println!("Cart is empty."),
    }

    Ok(())
}

/// Parse an order item in format "ID" or "ID:QTY"
fn parse_order_item(s: &str) -> Result<(i64, Option<i64>)> {
    let mut parts = s.splitn(2, ':');

    let id = parts
        .next()
        .unwrap_or_default()
        .parse::<i64>()
        .map_err(|_| AtelierError::InvalidArgument(format!("invalid work id in '{}'", s)))?;

    let quantity = match parts.next() {
        Some(qty) => Some(qty.parse::<i64>().map_err(|_| {
            AtelierError::InvalidArgument(format!("invalid quantity in '{}'", s))
        })?),
        None => None,
    };

    Ok((id, quantity))
}
