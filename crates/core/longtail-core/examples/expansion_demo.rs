//! Basic expansion example demonstrating Longtail core usage

use longtail_core::testing::StaticSuggestionProvider;
use longtail_core::*;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    println!("🔎 Longtail - Keyword Expansion Example\n");

    // 1. A canned provider keeps the example offline
    let provider = StaticSuggestionProvider::new()
        .with_response(
            "running shoes",
            &["running shoes for men", "running shoes sale"],
        )
        .with_response(
            "best running shoes",
            &["best running shoes 2024", "running shoes sale"],
        )
        .with_response("running shoes vs", &["running shoes vs walking shoes"]);
    println!("✓ Provider ready");

    // 2. A three-entry catalog keeps the output readable;
    //    ExpansionEngine::new() would run the full built-in one
    let engine = ExpansionEngine::with_modifiers(vec![
        Modifier::default(),
        Modifier::with_prefix("best"),
        Modifier::with_suffix("vs"),
    ]);
    let seed = Seed::new("running shoes", "us", "en");
    println!("✓ Engine over {} modifiers\n", engine.modifier_count());

    // 3. Stream events while the run progresses
    let (sender, mut stream) = create_event_stream(16);
    let sink = EventSink::new(sender);

    let run = async {
        let summary = engine.expand(&provider, &seed, &sink).await;
        drop(sink);
        summary
    };
    let watch = async {
        while let Some(event) = stream.recv().await {
            match event {
                ExpansionEvent::Suggestion(record) => {
                    println!(
                        "  #{} {} ({} words)",
                        record.id, record.keyword, record.word_count
                    );
                }
                ExpansionEvent::Progress(state) => {
                    println!("  ... {:.0}% complete", state.progress_percent());
                }
                ExpansionEvent::Warning(warning) => {
                    println!("  ! {} failed: {}", warning.variant, warning.message);
                }
            }
        }
    };
    let (summary, _) = tokio::join!(run, watch);

    // 4. The summary mirrors the final progress snapshot
    println!(
        "\nRun {} finished in {} ms",
        summary.run_id, summary.elapsed_ms
    );
    println!("  Suggestions: {}", summary.suggestions_found);
    println!("  Warnings: {}", summary.warnings);

    println!("\n✨ Example completed successfully!\n");
    println!("Next steps:");
    println!("  1. Swap in longtail-provider-google for live suggestions");
    println!("  2. Run the full built-in catalog with ExpansionEngine::new()");
    println!("  3. Cache DataForSEO metrics through longtail-storage-kv");
}
