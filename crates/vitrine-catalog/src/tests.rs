#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vitrine_core::{LoadBinding, SlotState, flush};
    use vitrine_ui::{View, ViewKind, text_content};

    use crate::{
        CatalogEntity, FixtureLoader, ListAggregator, LiveDetails, MediaDetails, VariantRegistry,
        VariantTag,
    };

    fn image_sources(view: &View) -> Vec<String> {
        let mut out = Vec::new();
        fn walk(v: &View, out: &mut Vec<String>) {
            if let ViewKind::Image { source, .. } = &v.kind {
                out.push(source.clone());
            }
            for c in &v.children {
                walk(c, out);
            }
        }
        walk(view, &mut out);
        out
    }

    fn fixture_loader() -> FixtureLoader {
        FixtureLoader::new()
            .with_document(
                "v1",
                r#"{"kind":"standard","preview_ref":"u","title":"T","author":"A"}"#,
            )
            .with_document(
                "v2",
                r#"{"kind":"live","preview_ref":"x","title":"t","author":"a","watcher_count":5}"#,
            )
            .with_document(
                "v3",
                r#"{"kind":"standard","preview_ref":"z","title":"third","author":"@c"}"#,
            )
    }

    #[test]
    fn test_dispatch_live_renders_all_four_data_points() {
        let registry = VariantRegistry::default();
        let entity = CatalogEntity::Live(LiveDetails {
            media: MediaDetails {
                preview_ref: "x".into(),
                title: "t".into(),
                author: "a".into(),
            },
            watcher_count: 5,
        });

        let view = registry.dispatch(&entity);

        // All four data points: preview ref, title, author, audience.
        assert_eq!(image_sources(&view), vec!["x".to_string()]);
        assert_eq!(text_content(&view), "preview t a 5 watching now");
    }

    #[test]
    fn test_live_description_extends_the_standard_one() {
        let registry = VariantRegistry::default();
        let media = MediaDetails {
            preview_ref: "x".into(),
            title: "t".into(),
            author: "a".into(),
        };

        let standard_text = text_content(&registry.dispatch(&CatalogEntity::Standard(media.clone())));
        let live_text = text_content(&registry.dispatch(&CatalogEntity::Live(LiveDetails {
            media,
            watcher_count: 9,
        })));

        // Everything the standard view shows, plus the audience line.
        assert!(live_text.starts_with(&standard_text));
        assert!(live_text.contains("9 watching now"));
    }

    #[test]
    fn test_registration_covers_the_closed_set() {
        // Constructing the registry requires one strategy per variant, and
        // dispatch is a wildcard-free match. This test existing at all is
        // the static half of the check; here we just drive every tag.
        let registry = VariantRegistry::default();
        for tag in [VariantTag::Standard, VariantTag::Live] {
            let placeholder = registry.placeholder_for(tag);
            assert!(matches!(placeholder.kind, ViewKind::Spinner { .. }));
        }
    }

    #[test]
    fn test_aggregator_preserves_request_order() {
        let loader = Rc::new(fixture_loader());
        loader.hold("v1");
        loader.hold("v2");
        loader.hold("v3");

        let aggregator = ListAggregator::new(loader.clone());
        let list = aggregator.load_all(vec![
            ("v1", VariantTag::Standard),
            ("v2", VariantTag::Live),
            ("v3", VariantTag::Standard),
        ]);

        assert_eq!(list.len(), 3);
        assert_eq!(list.ids(), vec!["v1", "v2", "v3"]);

        // The middle request finishes first.
        assert!(loader.deliver("v2"));
        flush();

        let slots = list.slots();
        assert!(slots[0].is_pending());
        assert!(slots[1].is_ready());
        assert!(slots[2].is_pending());

        loader.deliver("v3");
        loader.deliver("v1");
        flush();

        // Positional order still follows the requests, not completion order.
        let slots = list.slots();
        assert_eq!(slots[0].value().map(|e| e.media().title.clone()), Some("T".into()));
        assert_eq!(slots[1].value().map(|e| e.media().title.clone()), Some("t".into()));
        assert_eq!(
            slots[2].value().map(|e| e.media().title.clone()),
            Some("third".into())
        );
    }

    #[test]
    fn test_partial_readiness_renders_mixed_states() {
        let loader = Rc::new(fixture_loader());
        loader.hold("v1");
        loader.hold("v3");

        let aggregator = ListAggregator::new(loader.clone());
        let list = aggregator.load_all(vec![
            ("v1", VariantTag::Standard),
            ("v2", VariantTag::Live),
            ("v3", VariantTag::Standard),
        ]);
        flush();

        let registry = VariantRegistry::default();
        let view = list.present(&registry);

        assert_eq!(view.children.len(), 3);
        assert!(matches!(view.children[0].kind, ViewKind::Spinner { .. }));
        assert!(matches!(view.children[1].kind, ViewKind::Row));
        assert!(matches!(view.children[2].kind, ViewKind::Spinner { .. }));
    }

    #[test]
    fn test_wrong_tag_payload_renders_visible_failure() {
        let loader = Rc::new(fixture_loader());
        let binding = LoadBinding::bind(loader, "v1"); // a standard entity
        flush();

        let registry = VariantRegistry::default();
        let view = registry.present_slot(VariantTag::Live, &binding.slot());

        let text = text_content(&view);
        assert!(!text.is_empty(), "a defect must never render blank");
        assert!(text.contains("expected Live"));
    }

    #[test]
    fn test_released_list_discards_late_completions() {
        let loader = Rc::new(fixture_loader());
        loader.hold("v1");

        let aggregator = ListAggregator::new(loader.clone());
        let list = aggregator.load_all(vec![("v1", VariantTag::Standard)]);

        list.release();
        list.release(); // idempotent

        loader.deliver("v1");
        flush();
        assert!(list.slot(0).unwrap().is_pending());
    }

    #[test]
    fn test_unknown_id_and_malformed_document_fail() {
        let loader = Rc::new(fixture_loader().with_document("bad", "not json at all"));

        let missing = LoadBinding::<CatalogEntity>::bind(loader.clone(), "nope");
        let malformed = LoadBinding::<CatalogEntity>::bind(loader, "bad");
        flush();

        let err = missing.slot().error().expect("missing id should fail");
        assert!(err.cause.contains("no entity with id 'nope'"));

        let err = malformed.slot().error().expect("bad json should fail");
        assert!(err.cause.contains("malformed payload"));
    }

    #[test]
    fn test_end_to_end_fixture_load() {
        let loader = Rc::new(fixture_loader());
        let binding = LoadBinding::bind(loader, "v1");

        // Pending the instant the load is requested.
        let slot = binding.slot();
        assert!(slot.is_pending());

        // Record every observable transition: there must be exactly one.
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        slot.subscribe(move |state| seen_clone.borrow_mut().push(state.clone()));

        flush();

        let expected = CatalogEntity::Standard(MediaDetails {
            preview_ref: "u".into(),
            title: "T".into(),
            author: "A".into(),
        });
        assert_eq!(slot.current(), SlotState::Ready(expected.clone()));
        assert_eq!(&*seen.borrow(), &[SlotState::Ready(expected)]);
    }
}
