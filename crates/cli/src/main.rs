use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use coredoc_engine::{
    AnnotatedContent, Navigator, Outline, RootResolution, SchemaGeneration, Segment,
};
use coredoc_model::CoredocDocument;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

mod sample;

#[derive(Parser)]
#[command(name = "coredoc")]
#[command(about = "Navigate graph-structured coredoc documents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document metadata and how its root resolved
    Info(InfoArgs),

    /// Print the hierarchy outline
    Outline(OutlineArgs),

    /// Print one chunk with its keyword links resolved
    Show(ShowArgs),

    /// Print corpus statistics
    Stats(StatsArgs),

    /// Navigate a document interactively (reads commands from stdin)
    Nav(NavArgs),

    /// Navigate the built-in sample document
    Demo,
}

#[derive(Args)]
struct InfoArgs {
    /// Path to a coredoc JSON artifact
    file: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct OutlineArgs {
    /// Path to a coredoc JSON artifact
    file: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Path to a coredoc JSON artifact
    file: PathBuf,

    /// Chunk id to display
    chunk_id: String,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Path to a coredoc JSON artifact
    file: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NavArgs {
    /// Path to a coredoc JSON artifact
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Info(args) => run_info(args),
        Commands::Outline(args) => run_outline(args),
        Commands::Show(args) => run_show(args),
        Commands::Stats(args) => run_stats(args),
        Commands::Nav(args) => {
            let mut nav = load_navigator(&args.file)?;
            run_interactive(&mut nav)
        }
        Commands::Demo => {
            let raw = sample::sample_document()?;
            let mut nav = Navigator::load(&raw).context("Failed to load sample document")?;
            run_interactive(&mut nav)
        }
    }
}

fn load_document(path: &Path) -> Result<CoredocDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid coredoc JSON in {}", path.display()))
}

fn load_navigator(path: &Path) -> Result<Navigator> {
    let raw = load_document(path)?;
    Navigator::load(&raw).with_context(|| format!("Failed to load {}", path.display()))
}

fn run_info(args: InfoArgs) -> Result<()> {
    let nav = load_navigator(&args.file)?;
    let doc = nav.document();
    let report = nav.load_report();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "document": doc,
                "report": report,
            }))?
        );
        return Ok(());
    }

    println!("{} ({})", doc.title, doc.id);
    println!("Chunks: {}", nav.corpus().len());
    if !doc.created_at.is_empty() {
        println!("Created: {}", doc.created_at);
    }
    if let Some(pct) = doc.coverage_percentage {
        println!("Coverage: {pct:.1}%");
    }
    println!("Schema: {}", schema_label(report.schema));
    println!(
        "Root: {} ({})",
        nav.corpus().root_id(),
        root_label(report.root_resolution)
    );
    if !report.dropped_duplicates.is_empty() {
        println!(
            "Dropped duplicate ids: {}",
            report.dropped_duplicates.join(", ")
        );
    }
    Ok(())
}

fn run_outline(args: OutlineArgs) -> Result<()> {
    let nav = load_navigator(&args.file)?;
    let outline = nav.outline();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    print_outline(&nav, &outline);
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let nav = load_navigator(&args.file)?;
    let annotated = nav.annotate(&args.chunk_id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&annotated)?);
        return Ok(());
    }

    let chunk = nav
        .corpus()
        .get(&args.chunk_id)
        .ok_or_else(|| anyhow::anyhow!("Unknown chunk id: {}", args.chunk_id))?;
    println!("# {} (level {}, {} chars)", chunk.title, chunk.level, chunk.character_count);
    if !chunk.summary.is_empty() && chunk.summary != chunk.title {
        println!("{}", chunk.summary);
    }
    println!();
    println!("{}", render_annotated(&annotated));
    print_link_footer(&annotated);
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let nav = load_navigator(&args.file)?;
    let stats = nav.stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Chunks: {}", stats.total_chunks);
    println!(
        "Characters: {} ({} avg per chunk)",
        stats.total_characters, stats.avg_chunk_size
    );
    println!("Hierarchy depth: {}", stats.hierarchy_depth);
    if stats.reading_time_seconds > 0 {
        println!("Reading time: {}s", stats.reading_time_seconds);
    }
    if let Some(pct) = stats.coverage_percentage {
        println!("Coverage: {pct:.1}%");
    }
    if !stats.keyword_distribution.is_empty() {
        let mut terms: Vec<_> = stats.keyword_distribution.iter().collect();
        terms.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        println!("Top keywords:");
        for (term, count) in terms.iter().take(10) {
            println!("  {term} ({count})");
        }
    }
    Ok(())
}

/// Interactive loop: one navigation event per stdin line.
fn run_interactive(nav: &mut Navigator) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();

    print_location(nav);
    loop {
        write!(out, "coredoc> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "q" | "quit" | "exit" => break,
            "goto" => {
                if arg.is_empty() {
                    println!("Usage: goto <chunk-id>");
                } else {
                    match nav.navigate_to(arg) {
                        Ok(()) => print_location(nav),
                        Err(err) => println!("{err}"),
                    }
                }
            }
            "back" => {
                if nav.navigate_back() {
                    print_location(nav);
                } else {
                    println!("History is empty");
                }
            }
            "home" => {
                nav.navigate_home();
                print_location(nav);
            }
            "next" => {
                if nav.sibling_next() {
                    print_location(nav);
                } else {
                    println!("No next chunk");
                }
            }
            "prev" => {
                if nav.sibling_prev() {
                    print_location(nav);
                } else {
                    println!("No previous chunk");
                }
            }
            "crumbs" => println!("{}", format_breadcrumbs(nav)),
            "outline" => print_outline(nav, &nav.outline()),
            "help" | "?" => print_help(),
            other => println!("Unknown command: {other} (try help)"),
        }
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  goto <id>   jump to a chunk");
    println!("  back        one step back");
    println!("  home        return to the root chunk");
    println!("  next, prev  move between siblings");
    println!("  crumbs      print the breadcrumb trail");
    println!("  outline     print the hierarchy outline");
    println!("  quit        leave");
}

/// Current chunk header, breadcrumbs, annotated content, link footer —
/// printed after every navigation event.
fn print_location(nav: &Navigator) {
    let chunk = nav.current_chunk();
    println!();
    println!("{}", format_breadcrumbs(nav));
    println!("# {} [{}]", chunk.title, chunk.id);
    println!();
    let annotated = nav.annotate_current();
    println!("{}", render_annotated(&annotated));
    print_link_footer(&annotated);

    let siblings = nav.siblings();
    let prev = siblings.prev.map_or("-", |c| c.id.as_str());
    let next = siblings.next.map_or("-", |c| c.id.as_str());
    println!("(prev: {prev}  next: {next})");
}

fn format_breadcrumbs(nav: &Navigator) -> String {
    let titles: Vec<&str> = nav.breadcrumbs().iter().map(|b| b.title.as_str()).collect();
    titles.join(" > ")
}

fn print_outline(nav: &Navigator, outline: &Outline) {
    for row in &outline.rows {
        let title = nav.corpus().get(&row.id).map_or("?", |c| c.title.as_str());
        println!("{}{} [{}]", "  ".repeat(row.depth), title, row.id);
    }
    for warning in &outline.warnings {
        println!("  ! {warning:?}");
    }
}

/// Render annotated content with link spans as `[text -> target]`.
fn render_annotated(annotated: &AnnotatedContent) -> String {
    annotated
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Text { text } => text.clone(),
            Segment::Link { text, target, .. } => format!("[{text} -> {target}]"),
        })
        .collect()
}

fn print_link_footer(annotated: &AnnotatedContent) {
    let links: Vec<&Segment> = annotated.links().collect();
    if links.is_empty() {
        return;
    }
    println!();
    println!("Links:");
    for segment in links {
        if let Segment::Link {
            keyword,
            target,
            hint,
            ..
        } = segment
        {
            println!("  {keyword} -> {target}  ({hint})");
        }
    }
    println!();
}

fn schema_label(schema: SchemaGeneration) -> &'static str {
    match schema {
        SchemaGeneration::Chunks => "chunks (current)",
        SchemaGeneration::Pages => "pages (legacy)",
    }
}

fn root_label(resolution: RootResolution) -> &'static str {
    match resolution {
        RootResolution::Declared => "declared",
        RootResolution::Parentless => "fallback: first parentless chunk",
        RootResolution::FirstChunk => "fallback: first chunk in document order",
    }
}
