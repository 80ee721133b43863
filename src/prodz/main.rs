use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use prodz::api::{
    CmdMessage, ConfigAction, MessageLevel, ProductUpdate, ProdzApi, ProdzPaths,
};
use prodz::config::ProdzConfig;
use prodz::error::Result;
use prodz::model::{NewProduct, Product};
use prodz::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ProdzApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
        }) => handle_add(
            &mut ctx,
            NewProduct {
                title,
                description,
                price,
                thumbnail,
                code,
                stock,
            },
        ),
        Some(Commands::List { limit }) => handle_list(&ctx, limit),
        Some(Commands::Get { id }) => handle_get(&ctx, id),
        Some(Commands::Update {
            id,
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
        }) => handle_update(
            &mut ctx,
            id,
            ProductUpdate {
                id: None,
                title,
                description,
                price,
                thumbnail,
                code,
                stock,
            },
        ),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Export) => handle_export(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".prodz");

    let store_dir = if cli.global {
        let proj_dirs =
            ProjectDirs::from("com", "prodz", "prodz").expect("Could not determine data dir");
        proj_dirs.data_dir().to_path_buf()
    } else {
        project_dir
    };

    let config = ProdzConfig::load(&store_dir).unwrap_or_default();
    let store = FileStore::open(store_dir.join(config.get_data_file()))?;
    let paths = ProdzPaths { store_dir };
    let api = ProdzApi::new(store, paths);

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, fields: NewProduct) -> Result<()> {
    let result = ctx.api.add_product(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, limit: Option<i64>) -> Result<()> {
    let result = match limit {
        Some(n) => ctx.api.limited_products(n)?,
        None => ctx.api.list_products()?,
    };
    if result.outcome.is_success() {
        print_products(&result.listed);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.product_by_id(id)?;
    print_full_products(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: u64, update: ProductUpdate) -> Result<()> {
    if update.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }
    let result = ctx.api.update_product(id, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.delete_product(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.export_products()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.get_data_file());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_products(products: &[Product]) {
    for (i, product) in products.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("{}.", product.id).yellow(),
            product.title.bold()
        );
        println!("--------------------------------");
        println!("{}", product.description);
        println!();
        println!("code:      {}", product.code);
        println!("price:     {:.2}", product.price);
        println!("stock:     {}", product.stock);
        println!("thumbnail: {}", product.thumbnail);
    }
}

const LINE_WIDTH: usize = 100;
const PRICE_WIDTH: usize = 10;
const STOCK_WIDTH: usize = 6;

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    for product in products {
        let idx_str = format!("{}. ", product.id);
        let code_str = format!("[{}] ", product.code);

        let desc_preview: String = product
            .description
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if desc_preview.is_empty() {
            product.title.clone()
        } else {
            format!("{} {}", product.title, desc_preview)
        };

        let fixed_width =
            4 + idx_str.width() + code_str.width() + PRICE_WIDTH + STOCK_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let price_str = format!("{:>width$.2}", product.price, width = PRICE_WIDTH);
        let stock_str = format!("{:>width$}", product.stock, width = STOCK_WIDTH);

        println!(
            "    {}{}{}{}{}{}",
            idx_str,
            title_display,
            " ".repeat(padding),
            code_str.dimmed(),
            price_str.green(),
            stock_str
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
