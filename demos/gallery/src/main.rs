//! Console walkthrough of the engine: a mixed list of catalog entities
//! loading out of order, a per-call-site part override, and a rebind that
//! leaves its stale result on the floor.
//!
//! Run with `RUST_LOG=debug` to see discarded completions in the log.

use std::rc::Rc;

use anyhow::Result;

use vitrine_catalog::{
    CatalogEntity, FixtureLoader, ListAggregator, MediaDetails, VariantRegistry, VariantTag,
};
use vitrine_core::{EntityLoader, LoadBinding, Slot, flush};
use vitrine_ui::strategy::{CompositionStrategy, PartOverrides};
use vitrine_ui::{Text, View, text_content};

fn print_list(view: &View) {
    for child in &view.children {
        println!("  - {}", text_content(child));
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let loader = Rc::new(
        FixtureLoader::new()
            .with_document(
                "clip-1",
                r#"{"kind":"standard","preview_ref":"https://i.ytimg.com/vi/BlNwQdqdRig/hqdefault.jpg","title":"functional TypeScript: the curry function","author":"@AleksandrSugak"}"#,
            )
            .with_document(
                "live-1",
                r#"{"kind":"live","preview_ref":"https://live.example/thumb.jpg","title":"rust office hours","author":"@vitrine","watcher_count":412}"#,
            )
            .with_document(
                "clip-2",
                r#"{"kind":"standard","preview_ref":"https://i.ytimg.com/vi/abc/hqdefault.jpg","title":"ownership in ten minutes","author":"@ferris"}"#,
            ),
    );
    let registry = VariantRegistry::default();

    // A fixed, ordered list; the middle entry is live. clip-2 is held back
    // so the list spends a while half-loaded.
    loader.hold("clip-2");
    let aggregator = ListAggregator::new(loader.clone());
    let list = aggregator.load_all(vec![
        ("clip-1", VariantTag::Standard),
        ("live-1", VariantTag::Live),
        ("clip-2", VariantTag::Standard),
    ]);

    println!("just bound:");
    print_list(&list.present(&registry));

    flush();
    println!("\nfirst results in (clip-2 still loading):");
    print_list(&list.present(&registry));

    loader.deliver("clip-2");
    flush();
    println!("\neverything loaded:");
    print_list(&list.present(&registry));
    list.release();

    // Replacing exactly one part at the call site; the other parts keep
    // their defaults.
    let strategy = CompositionStrategy::<MediaDetails>::standard();
    let overrides = PartOverrides::none().placeholder(|| Text("fetching the good stuff"));
    let pending: Slot<MediaDetails> = Slot::new();
    println!(
        "\ncustom placeholder: {}",
        text_content(&strategy.present_with(&pending, &overrides))
    );

    // Rebinding mid-flight: the first id's result arrives late and is
    // discarded instead of clobbering the newer slot.
    let dyn_loader: Rc<dyn EntityLoader<CatalogEntity>> = loader.clone();
    loader.hold("clip-1");
    let binding = LoadBinding::bind(dyn_loader, "clip-1");
    binding.rebind("live-1");
    loader.deliver("clip-1");
    flush();
    println!(
        "\nafter rebind to live-1: {}",
        text_content(&registry.present_slot(VariantTag::Live, &binding.slot()))
    );
    binding.release();

    Ok(())
}
