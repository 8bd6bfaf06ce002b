use clap::Parser;
use directories::ProjectDirs;
use notemark::api::{ConfigAction, ListOptions, NoteMarkApi};
use notemark::catalog::Library;
use notemark::config::NoteMarkConfig;
use notemark::error::{NoteMarkError, Result};
use notemark::group;
use notemark::model::Domain;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::render;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: NoteMarkApi,
    domain: Domain,
    sorted_lists: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, sort }) => handle_list(&ctx, search, sort),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::View { slugs }) => handle_view(&ctx, slugs),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Domains) => handle_domains(&ctx),
        Some(Commands::Demo { name, events }) => handle_demo(&ctx, name, events),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = NoteMarkConfig::load(&config_dir).unwrap_or_default();

    let domain = match cli.domain {
        Some(arg) => arg.into(),
        None => config.domain()?,
    };

    let api = NoteMarkApi::new(Library::builtin()?, config_dir);

    Ok(AppContext {
        api,
        domain,
        sorted_lists: config.sorted_lists,
    })
}

fn config_dir() -> Result<PathBuf> {
    // Test runs and scripts point NOTEMARK_CONFIG at a scratch directory.
    if let Ok(dir) = std::env::var("NOTEMARK_CONFIG") {
        return Ok(PathBuf::from(dir));
    }

    let dirs = ProjectDirs::from("com", "notemark", "notemark")
        .ok_or_else(|| NoteMarkError::Api("Could not determine config dir".to_string()))?;
    Ok(dirs.config_dir().to_path_buf())
}

fn handle_list(ctx: &AppContext, search: Option<String>, sort: bool) -> Result<()> {
    let options = ListOptions {
        sort: sort || ctx.sorted_lists,
        search_term: search,
    };
    let result = ctx.api.list_topics(ctx.domain, options)?;
    print!("{}", render::render_topic_groups(&result.groups));
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_topics(ctx.domain, &term)?;
    // Search results render grouped, exactly like a filtered hub page.
    let groups = group::by_category(&result.listed_topics);
    print!("{}", render::render_topic_groups(&groups));
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, slugs: Vec<String>) -> Result<()> {
    let result = ctx.api.view_topics(ctx.domain, &slugs)?;
    print!("{}", render::render_full_topics(&result.listed_topics));
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories(ctx.domain)?;
    print!("{}", render::render_categories(&result.category_counts));
    Ok(())
}

fn handle_domains(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.domains()?;
    print!("{}", render::render_domains(&result.domain_counts));
    Ok(())
}

fn handle_demo(ctx: &AppContext, name: Option<String>, events: Vec<String>) -> Result<()> {
    match name {
        Some(name) => {
            let result = ctx.api.demo(&name, &events)?;
            print!("{}", render::render_transcript(&name, &result.transcript));
            Ok(())
        }
        None => {
            let result = ctx.api.demos()?;
            render::print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("default-domain"), None) => ConfigAction::ShowKey("default-domain".to_string()),
        (Some("default-domain"), Some(v)) => ConfigAction::SetDefaultDomain(v),
        (Some("sorted-lists"), None) => ConfigAction::ShowKey("sorted-lists".to_string()),
        (Some("sorted-lists"), Some(v)) => ConfigAction::SetSortedLists(v == "true"),
        (Some(other), _) => {
            return Err(NoteMarkError::Api(format!("Unknown config key: {}", other)));
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("default-domain = {}", config.default_domain);
        println!("sorted-lists = {}", config.sorted_lists);
    }
    render::print_messages(&result.messages);
    Ok(())
}
