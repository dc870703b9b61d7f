// Replays the reference passages and prints what each fragment completes to.
// Run with: cargo run --bin demo
use autocomplete_core::AutocompleteProvider;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("RUST_LOG")
        .init();

    println!("\nExample 1\n");
    let passage =
        "The third thing that I need to tell you is that this thing does not think thoroughly.";
    println!("Passage: {}\n", passage);

    let mut provider = AutocompleteProvider::new();
    provider.train(passage);
    show(&provider, &["thi", "nee", "th"]);

    println!("\n\nExample 2\n");
    let passages = [
        "This is passage used as in an example of the AutocompleteProvider class.",
        "The AutocompleteProvider is used to autocomplete word fragments.",
        "This example demonstrates the ability to train online and learn from more passages over time.",
    ];

    let mut provider = AutocompleteProvider::new();
    for (i, passage) in passages.iter().enumerate() {
        println!("Passage{}: {}", i + 1, passage);
        provider.train(passage);
    }
    println!();
    show(&provider, &["autocomplete", "aUtOcOmPlEtEp", "o"]);

    println!("\nEnd of examples.");
}

fn show(provider: &AutocompleteProvider, fragments: &[&str]) {
    for fragment in fragments {
        let listing: Vec<String> = provider
            .get_words(fragment)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("'{}' => [{}]", fragment, listing.join(", "));
    }
}
