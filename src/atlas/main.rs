use atlas::catalog::DatasetFile;
use atlas::commands::config::ConfigAction;
use atlas::commands::filters::FilterAction;
use atlas::commands::{self, CmdMessage, CmdResult, MessageLevel};
use atlas::config::AtlasConfig;
use atlas::error::{AtlasError, Result};
use atlas::export;
use atlas::model::{Country, Region};
use atlas::session::Session;
use atlas::store::fs::FileStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::io::{self, BufRead, Write};
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
    session: Session<FileStore>,
    data_dir: PathBuf,
    dataset: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    if let Some(warning) = ctx.session.take_load_warning() {
        eprintln!("{}", warning.yellow());
    }

    match cli.command {
        Some(Commands::List {
            search,
            region,
            language,
            favorites,
        }) => handle_list(&mut ctx, search, region, language, favorites),
        Some(Commands::Show { name }) => handle_show(&mut ctx, &name),
        Some(Commands::Favorite { name }) => handle_favorite(&mut ctx, &name),
        Some(Commands::Favorites) => handle_favorites(&ctx),
        Some(Commands::Document { name }) => handle_document(&mut ctx, &name),
        Some(Commands::Documents { remove }) => handle_documents(&mut ctx, remove),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Login) => handle_simple(commands::auth::run(&mut ctx.session)?),
        Some(Commands::Theme) => handle_simple(commands::theme::run(&mut ctx.session)?),
        Some(Commands::Languages) => handle_names(commands::filters::languages(&ctx.session)?),
        Some(Commands::Regions) => handle_names(commands::filters::regions()),
        Some(Commands::Status) => {
            handle_simple(commands::status::run(&ctx.session, &ctx.dataset)?)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Browse) | None => browse(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match std::env::var_os("ATLAS_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "atlas", "atlas")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| AtlasError::Store("Could not determine the data directory".into()))?,
    };

    let config = AtlasConfig::load(&data_dir).unwrap_or_default();
    let dataset = cli
        .dataset
        .clone()
        .unwrap_or_else(|| config.dataset_path(&data_dir));

    let store = FileStore::new(&data_dir);
    let source = DatasetFile::new(&dataset);
    let session = Session::open(store, &source);

    Ok(AppContext {
        session,
        data_dir,
        dataset,
    })
}

fn apply_list_flags(
    ctx: &mut AppContext,
    search: Option<String>,
    region: Option<String>,
    language: Option<String>,
    favorites: bool,
) -> Result<()> {
    if let Some(text) = search {
        ctx.session.set_search(text)?;
    }
    if let Some(raw) = region {
        let region = if raw.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(raw.parse::<Region>()?)
        };
        ctx.session.set_region(region)?;
    }
    if let Some(raw) = language {
        let language = if raw.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(raw)
        };
        ctx.session.set_language(language)?;
    }
    if favorites {
        ctx.session.set_favorites_only(true)?;
    }
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    region: Option<String>,
    language: Option<String>,
    favorites: bool,
) -> Result<()> {
    apply_list_flags(ctx, search, region, language, favorites)?;
    let result = commands::list::run(&ctx.session)?;
    print_countries(&result.listed, &ctx.session, false);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = commands::show::run(&mut ctx.session, name)?;
    if let Some(country) = &result.detail {
        print_detail(country, ctx.session.dark_mode());
    }
    print_messages(&result.messages);
    ctx.session.close_detail()
}

fn handle_favorite(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = commands::favorites::toggle(&mut ctx.session, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(ctx: &AppContext) -> Result<()> {
    let result = commands::favorites::list(&ctx.session)?;
    print_countries(&result.listed, &ctx.session, false);
    print_messages(&result.messages);
    Ok(())
}

fn handle_document(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = commands::documents::toggle(&mut ctx.session, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_documents(ctx: &mut AppContext, remove: Option<usize>) -> Result<()> {
    let result = match remove {
        Some(position) => commands::documents::remove(&mut ctx.session, position)?,
        None => {
            let result = commands::documents::list(&ctx.session)?;
            print_countries(&result.listed, &ctx.session, true);
            result
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = commands::export::run(&ctx.session, output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_simple(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_names(result: CmdResult) -> Result<()> {
    for name in &result.listed_names {
        println!("{}", name);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        println!(
            "dataset = {}",
            config.get("dataset").unwrap_or_default()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

// --- Output formatting ---

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

const NAME_WIDTH: usize = 36;
const REGION_WIDTH: usize = 12;
const FAVORITE_MARKER: &str = "♥";
const DOCUMENT_MARKER: &str = "▣";

fn print_countries(countries: &[Country], session: &Session<FileStore>, numbered: bool) {
    if countries.is_empty() {
        println!("No countries found.");
        return;
    }

    let dark = session.dark_mode();
    for (i, country) in countries.iter().enumerate() {
        let markers = format!(
            "{}{}",
            if session.favorites().contains(&country.name) {
                FAVORITE_MARKER.red().to_string()
            } else {
                " ".to_string()
            },
            if session.documents().contains(&country.name) {
                DOCUMENT_MARKER.green().to_string()
            } else {
                " ".to_string()
            }
        );

        let prefix = if numbered {
            format!("{:>3}. ", i + 1)
        } else {
            "  ".to_string()
        };

        let name = pad_to_width(&country.name, NAME_WIDTH);
        let region = pad_to_width(&country.region, REGION_WIDTH);
        let population = format!("{:>15}", country.population_display());

        let name_colored = if dark { name.bright_white() } else { name.normal() };
        println!(
            "{}{} {} {}{}",
            prefix,
            markers,
            name_colored,
            region.dimmed(),
            population.dimmed()
        );
    }
}

fn print_detail(country: &Country, dark: bool) {
    let title = if dark {
        country.name.bright_white().bold()
    } else {
        country.name.bold()
    };
    println!("{}", title);
    println!("--------------------------------");
    for line in export::detail_lines(country) {
        match line.split_once(": ") {
            Some((label, value)) => println!("{}: {}", label.cyan(), value),
            None => println!("{}", line),
        }
    }
    if !country.flag.is_empty() {
        println!("{}: {}", "Flag".cyan(), country.flag);
    }
}

/// Pad or truncate to a fixed display width, unicode-aware.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if current + w > width.saturating_sub(1) {
            out.push('…');
            current += 1;
            break;
        }
        out.push(c);
        current += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(current)));
    out
}

// --- Interactive browse loop ---

static BROWSE_HELP: Lazy<String> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        ("search <text>", "set the name filter (no text clears it)"),
        ("region <name>", "set the region filter ('all' clears it)"),
        ("language <name>", "set the language filter ('all' clears it)"),
        ("only", "toggle the favorites-only filter"),
        ("filters", "show the active filters"),
        ("clear", "clear all filters"),
        ("fav <country>", "toggle a favorite (requires login)"),
        ("doc <country>", "toggle a document list entry"),
        ("show <country>", "show the full detail block"),
        ("favorites", "list the favorites set"),
        ("docs", "list the document list, numbered"),
        ("rm <position>", "remove a document list entry by position"),
        ("export [path]", "export the document list as PDF"),
        ("login", "toggle the login state"),
        ("theme", "toggle dark mode"),
        ("status", "show catalog and filter status"),
        ("languages", "list catalog languages"),
        ("regions", "list filterable regions"),
        ("quit", "leave"),
    ];
    let width = entries.iter().map(|(cmd, _)| cmd.width()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(cmd, desc)| format!("  {:<width$}  {}", cmd, desc, width = width))
        .collect::<Vec<_>>()
        .join("\n")
});

fn browse(ctx: &mut AppContext) -> Result<()> {
    println!("{}", "Explore the World".bold());
    println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());
    redraw(ctx)?;

    let stdin = io::stdin();
    loop {
        print!("atlas> ");
        io::stdout().flush().map_err(AtlasError::Io)?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(AtlasError::Io)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let outcome = dispatch(ctx, command, rest);
        match outcome {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => println!("{}", e.to_string().red()),
        }

        if let Some(notice) = ctx.session.notice() {
            println!("{}", notice.italic());
        }
    }
    Ok(())
}

/// Run one browse-loop command. Returns `true` when the loop should end.
fn dispatch(ctx: &mut AppContext, command: &str, rest: &str) -> Result<bool> {
    match command {
        "q" | "quit" | "exit" => return Ok(true),
        "" => redraw(ctx)?,
        "help" | "?" => println!("{}", *BROWSE_HELP),
        "search" => {
            let result =
                commands::filters::apply(&mut ctx.session, FilterAction::Search(rest.to_string()))?;
            print_messages(&result.messages);
            redraw(ctx)?;
        }
        "region" => {
            let region = if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
                None
            } else {
                Some(rest.parse::<Region>()?)
            };
            let result = commands::filters::apply(&mut ctx.session, FilterAction::Region(region))?;
            print_messages(&result.messages);
            redraw(ctx)?;
        }
        "language" => {
            let language = if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
                None
            } else {
                Some(rest.to_string())
            };
            let result =
                commands::filters::apply(&mut ctx.session, FilterAction::Language(language))?;
            print_messages(&result.messages);
            redraw(ctx)?;
        }
        "only" => {
            let on = !ctx.session.criteria().favorites_only;
            let result =
                commands::filters::apply(&mut ctx.session, FilterAction::FavoritesOnly(on))?;
            print_messages(&result.messages);
            redraw(ctx)?;
        }
        "clear" => {
            let result = commands::filters::clear(&mut ctx.session)?;
            print_messages(&result.messages);
            redraw(ctx)?;
        }
        "fav" => handle_favorite(ctx, rest)?,
        "doc" => handle_document(ctx, rest)?,
        "show" => handle_show(ctx, rest)?,
        "favorites" => handle_favorites(ctx)?,
        "docs" => handle_documents(ctx, None)?,
        "rm" => {
            let position: usize = rest
                .parse()
                .map_err(|_| AtlasError::Api(format!("Invalid position: {}", rest)))?;
            handle_documents(ctx, Some(position))?;
        }
        "export" => {
            let output = if rest.is_empty() {
                None
            } else {
                Some(PathBuf::from(rest))
            };
            handle_export(ctx, output)?;
        }
        "login" => handle_simple(commands::auth::run(&mut ctx.session)?)?,
        "theme" => handle_simple(commands::theme::run(&mut ctx.session)?)?,
        "status" => handle_simple(commands::status::run(&ctx.session, &ctx.dataset)?)?,
        "languages" => handle_names(commands::filters::languages(&ctx.session)?)?,
        "regions" => handle_names(commands::filters::regions())?,
        "filters" => handle_simple(commands::filters::show(&ctx.session)?)?,
        _ => println!(
            "{}",
            format!("Unknown command: {} (try 'help')", command).red()
        ),
    }
    Ok(false)
}

fn redraw(ctx: &mut AppContext) -> Result<()> {
    let result = commands::list::run(&ctx.session)?;
    print_countries(&result.listed, &ctx.session, false);
    Ok(())
}
