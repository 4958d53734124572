use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use content::{ContentStore, Proficiency};
use query::{query, FilterState, SortKey};
use urlsync::{decode, publish, AddressBar};

mod clipboard;

/// Base URL the deployed site lives under; share links point here.
const SITE_BASE: &str = "https://folio.example";

/// folio - portfolio content browser
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Filter, sort and share the portfolio's skills, photos and posts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List skills, optionally filtered
    Skills {
        /// Keep only these proficiency levels (intermediate, advanced, expert)
        #[arg(long)]
        level: Vec<String>,

        /// Keep only items carrying at least one of these tags
        #[arg(long)]
        tag: Vec<String>,

        /// Case-insensitive substring match against the name
        #[arg(long)]
        search: Option<String>,

        /// Result ordering
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Print a shareable deep link for this view
        #[arg(long)]
        link: bool,

        /// Copy the deep link to the clipboard (best effort)
        #[arg(long)]
        copy: bool,
    },

    /// List gallery photos, optionally filtered
    Photos {
        #[arg(long)]
        tag: Vec<String>,

        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        #[arg(long)]
        link: bool,

        #[arg(long)]
        copy: bool,
    },

    /// List blog posts, optionally filtered
    Posts {
        #[arg(long)]
        tag: Vec<String>,

        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        #[arg(long)]
        link: bool,

        #[arg(long)]
        copy: bool,
    },

    /// Re-open a shared deep link's query string
    Open {
        /// Which section the link points at
        #[arg(value_enum)]
        section: Section,

        /// The query string (with or without a leading '?')
        query: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    /// Proficiency descending (default)
    Rank,
    /// Years / views / publish date, descending
    Weight,
    /// Name, ascending
    Name,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Rank => SortKey::ByRank,
            SortArg::Weight => SortKey::ByWeight,
            SortArg::Name => SortKey::ByName,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Section {
    Skills,
    Photos,
    Posts,
}

impl Section {
    fn path(self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Photos => "photos",
            Section::Posts => "blog",
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let store = ContentStore::load_bundled().context("Failed to load bundled portfolio content")?;

    match cli.command {
        Commands::Skills {
            level,
            tag,
            search,
            sort,
            link,
            copy,
        } => {
            let state = build_state(&level, &tag, search.as_deref(), sort)?;
            show_section(&store, Section::Skills, &state, link, copy);
        }
        Commands::Photos {
            tag,
            search,
            sort,
            link,
            copy,
        } => {
            let state = build_state(&[], &tag, search.as_deref(), sort)?;
            show_section(&store, Section::Photos, &state, link, copy);
        }
        Commands::Posts {
            tag,
            search,
            sort,
            link,
            copy,
        } => {
            let state = build_state(&[], &tag, search.as_deref(), sort)?;
            show_section(&store, Section::Posts, &state, link, copy);
        }
        Commands::Open { section, query } => {
            let state = decode(&query);
            println!(
                "{} {} active filter(s) after decoding",
                "→".blue(),
                state.active_filter_count()
            );
            show_section(&store, section, &state, false, false);
        }
    }

    Ok(())
}

/// Build a FilterState from command-line flags, the same way the UI
/// would: one toggle/replace transition per interaction.
fn build_state(
    levels: &[String],
    tags: &[String],
    search: Option<&str>,
    sort: Option<SortArg>,
) -> Result<FilterState> {
    let mut state = FilterState::reset();

    for raw in levels {
        let level: Proficiency = raw.parse().with_context(|| {
            format!("invalid --level {raw:?}; valid levels: intermediate, advanced, expert")
        })?;
        state = state.with_level_toggled(level);
    }
    for tag in tags {
        state = state.with_tag_toggled(tag);
    }
    if let Some(text) = search {
        state = state.with_search_text(text);
    }
    if let Some(sort) = sort {
        state = state.with_sort_key(sort.into());
    }

    Ok(state)
}

fn show_section(
    store: &ContentStore,
    section: Section,
    state: &FilterState,
    link: bool,
    copy: bool,
) {
    // Mirror the state into the (in-memory) address bar first, exactly
    // as the site does on every interaction.
    let mut bar = AddressBar::new();
    publish(state, &mut bar);

    match section {
        Section::Skills => print_skills(store, state),
        Section::Photos => print_photos(store, state),
        Section::Posts => print_posts(store, state),
    }

    if link || copy {
        let url = if bar.query().is_empty() {
            format!("{SITE_BASE}/{}", section.path())
        } else {
            format!("{SITE_BASE}/{}?{}", section.path(), bar.query())
        };
        println!("\n{} {}", "Share:".bold(), url.underline());

        if copy {
            match clipboard::copy_text(&url) {
                Ok(()) => println!("{} link copied to clipboard", "✓".green()),
                Err(err) => tracing::warn!(error = %err, "clipboard copy failed"),
            }
        }
    }
}

fn print_header(title: &str, shown: usize, total: usize, state: &FilterState) {
    let badge = match state.active_filter_count() {
        0 => String::new(),
        n => format!(" ({n} filter(s) active)"),
    };
    println!(
        "{} {}{}",
        title.bold().blue(),
        format!("{shown}/{total}").cyan(),
        badge.dimmed()
    );
}

fn print_empty_hint(reset_command: &str) {
    println!(
        "  {} nothing matched; run {} to reset the filters",
        "∅".yellow(),
        reset_command.bold()
    );
}

fn print_skills(store: &ContentStore, state: &FilterState) {
    let results = query(store.skills(), state);
    print_header("Skills", results.len(), store.skills().len(), state);
    if results.is_empty() {
        print_empty_hint("folio skills");
        return;
    }

    for skill in results {
        let level = match skill.proficiency {
            Proficiency::Expert => skill.proficiency.token().green(),
            Proficiency::Advanced => skill.proficiency.token().yellow(),
            Proficiency::Intermediate => skill.proficiency.token().normal(),
        };
        println!(
            "  {} [{}] {:.1}y {}",
            skill.name.bold(),
            level,
            skill.years,
            format!("#{}", skill.tags.join(" #")).dimmed()
        );
        if let Some(detail) = store.category_detail(&skill.id) {
            println!("    {}", detail.headline.italic());
            for line in &detail.evidence {
                println!("      - {line}");
            }
        }
    }
}

fn print_photos(store: &ContentStore, state: &FilterState) {
    let results = query(store.photos(), state);
    print_header("Photos", results.len(), store.photos().len(), state);
    if results.is_empty() {
        print_empty_hint("folio photos");
        return;
    }

    for photo in results {
        println!(
            "  {} · {} ({} views) {}",
            photo.title.bold(),
            photo.location,
            photo.view_count,
            format!("#{}", photo.tags.join(" #")).dimmed()
        );
        if let Some(detail) = store.category_detail(&photo.id) {
            println!("    {}", detail.headline.italic());
        }
    }
}

fn print_posts(store: &ContentStore, state: &FilterState) {
    let results = query(store.posts(), state);
    print_header("Posts", results.len(), store.posts().len(), state);
    if results.is_empty() {
        print_empty_hint("folio posts");
        return;
    }

    for post in results {
        let date = chrono::DateTime::from_timestamp(post.published, 0)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "????-??-??".to_string());
        println!(
            "  {} {} {}",
            date.cyan(),
            post.title.bold(),
            format!("#{}", post.tags.join(" #")).dimmed()
        );
    }
}
