use clap::{Parser, Subcommand};
use keiro::prelude::*;

/// A journey archive inspection tool: list journeys, list their functions,
/// and print canonical function definitions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the journeys in an archive
    List {
        /// Path to the journey archive file
        archive: String,
    },
    /// List the functions of one journey
    Functions {
        /// Path to the journey archive file
        archive: String,
        /// Journey name or id
        journey: String,
    },
    /// Print the canonical JSON definition of one function
    Show {
        /// Path to the journey archive file
        archive: String,
        /// Journey name or id
        journey: String,
        /// Function name or id
        function: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::List { archive } => list_journeys(&archive),
        Command::Functions { archive, journey } => list_functions(&archive, &journey),
        Command::Show {
            archive,
            journey,
            function,
        } => show_function(&archive, &journey, &function),
    }
}

fn list_journeys(path: &str) {
    let archive = load_archive(path);
    if archive.journeys.is_empty() {
        println!("No journeys in archive.");
        return;
    }
    for journey in &archive.journeys {
        let summary = journey.summary();
        println!(
            "{} [{}]",
            summary.name,
            if summary.is_active { "active" } else { "inactive" }
        );
        println!(
            "  nodes: {}, edges: {}, properties: {}, functions: {}",
            summary.node_count, summary.edge_count, summary.property_count, summary.function_count
        );
        println!(
            "  created: {}, updated: {}",
            summary.created_at.format("%Y-%m-%d"),
            summary.updated_at.format("%Y-%m-%d")
        );
    }
}

fn list_functions(path: &str, journey_ref: &str) {
    let archive = load_archive(path);
    let journey = find_journey(&archive, journey_ref);
    if journey.functions.is_empty() {
        println!("Journey '{}' has no functions.", journey.name);
        return;
    }
    for summary in journey.functions.summaries() {
        println!("{}", summary);
    }
}

fn show_function(path: &str, journey_ref: &str, function_ref: &str) {
    let archive = load_archive(path);
    let journey = find_journey(&archive, journey_ref);
    let function = journey
        .functions
        .iter()
        .find(|f| f.name == function_ref || f.id.as_str() == function_ref)
        .unwrap_or_else(|| {
            exit_with_error(&format!(
                "No function named '{}' in journey '{}'",
                function_ref, journey.name
            ))
        });

    let registry = journey.registry();
    let canonical = DraftSession::start_edit(function).preview(&registry);
    let json = canonical
        .to_pretty_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to render canonical JSON: {}", e)));
    println!("{}", json);
}

fn load_archive(path: &str) -> JourneyArchive {
    JourneyArchive::from_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load archive '{}': {}", path, e)))
}

fn find_journey<'a>(archive: &'a JourneyArchive, journey_ref: &str) -> &'a Journey {
    archive
        .journeys
        .iter()
        .find(|j| j.name == journey_ref || j.id.as_str() == journey_ref)
        .unwrap_or_else(|| exit_with_error(&format!("No journey named '{}'", journey_ref)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
