#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use vitrine_core::{LoadError, Slot};

    use crate::strategy::{CompositionStrategy, PartOverrides, Previewable, decorate};
    use crate::{Color, Modifier, Text, TextStyle, Theme, View, ViewExt, ViewKind, with_theme};
    use crate::{text_content, theme};

    #[derive(Clone, Debug, PartialEq)]
    struct Clip {
        preview: String,
        title: String,
        author: String,
    }

    impl Clip {
        fn sample() -> Self {
            Self {
                preview: "https://example.test/hqdefault.jpg".into(),
                title: "curry in ten minutes".into(),
                author: "@sugak".into(),
            }
        }
    }

    impl Previewable for Clip {
        fn preview_ref(&self) -> &str {
            &self.preview
        }
        fn title(&self) -> &str {
            &self.title
        }
        fn author(&self) -> &str {
            &self.author
        }
    }

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

    #[test]
    fn test_present_pending_renders_placeholder() {
        let strategy = CompositionStrategy::<Clip>::standard();
        let slot: Slot<Clip> = Slot::new();

        let view = strategy.present(&slot);
        assert_eq!(view, strategy.placeholder_view());
        assert!(matches!(view.kind, ViewKind::Spinner { .. }));
    }

    #[test]
    fn test_present_ready_composes_media_beside_description() {
        let strategy = CompositionStrategy::<Clip>::standard();
        let slot: Slot<Clip> = Slot::new();
        slot.resolve(Ok(Clip::sample()));

        let view = strategy.present(&slot);
        assert!(matches!(view.kind, ViewKind::Row));
        assert_eq!(view.children.len(), 2);
        assert_eq!(
            image_sources(&view),
            vec!["https://example.test/hqdefault.jpg".to_string()]
        );

        let text = text_content(&view);
        assert!(text.contains("curry in ten minutes"));
        assert!(text.contains("@sugak"));
    }

    #[test]
    fn test_present_failed_is_distinguishable_and_carries_cause() {
        let strategy = CompositionStrategy::<Clip>::standard();

        let failed: Slot<Clip> = Slot::new();
        failed.resolve(Err(LoadError::new("fetch refused")));
        let failure = strategy.present(&failed);

        let pending: Slot<Clip> = Slot::new();
        let placeholder = strategy.present(&pending);

        let ready: Slot<Clip> = Slot::new();
        ready.resolve(Ok(Clip::sample()));
        let success = strategy.present(&ready);

        assert!(text_content(&failure).contains("fetch refused"));
        assert_ne!(failure, placeholder);
        assert_ne!(failure, success);
    }

    #[test]
    fn test_override_replaces_exactly_the_named_part() {
        let strategy = CompositionStrategy::<Clip>::standard();
        let slot: Slot<Clip> = Slot::new();
        slot.resolve(Ok(Clip::sample()));

        let overrides =
            PartOverrides::none().media(|clip: &Clip| Text(format!("[media {}]", clip.title)));
        let view = strategy.present_with(&slot, &overrides);

        // Named part replaced: no image left in the tree.
        assert!(image_sources(&view).is_empty());
        assert!(text_content(&view).contains("[media curry in ten minutes]"));
        // Unnamed part kept the default description.
        assert!(text_content(&view).contains("@sugak"));
    }

    #[test]
    fn test_placeholder_override_only_affects_pending() {
        let strategy = CompositionStrategy::<Clip>::standard();
        let overrides = PartOverrides::none().placeholder(|| Text("hold on"));

        let pending: Slot<Clip> = Slot::new();
        let view = strategy.present_with(&pending, &overrides);
        assert_eq!(text_content(&view), "hold on");

        let ready: Slot<Clip> = Slot::new();
        ready.resolve(Ok(Clip::sample()));
        let view = strategy.present_with(&ready, &overrides);
        assert_eq!(view, strategy.present(&ready));
    }

    #[test]
    fn test_decorate_delegates_and_appends() {
        let strategy = CompositionStrategy::<Clip>::standard();
        let base = strategy.parts().description.clone();

        let decorated = decorate(
            base.clone(),
            |clip: &Clip| clip,
            |clip: &Clip| Text(format!("runtime of {}: 9m", clip.title)),
        );

        let clip = Clip::sample();
        let view = decorated(&clip);

        // Base part's output is embedded unchanged, extra block follows it.
        assert_eq!(view.children[0], base(&clip));
        let text = text_content(&view);
        assert!(text.contains("@sugak"));
        assert!(text.contains("runtime of curry in ten minutes: 9m"));
    }

    #[test]
    fn test_text_style_and_theme_locals() {
        let custom = Theme {
            muted: Color::from_hex("#606060"),
            ..Theme::default()
        };

        with_theme(custom, || {
            assert_eq!(theme().muted, Color::from_hex("#606060"));

            let label = Text("by someone").color(theme().muted).size(13.0).bold();
            match label.kind {
                ViewKind::Text {
                    color,
                    font_size,
                    bold,
                    ..
                } => {
                    assert_eq!(color, Color::from_hex("#606060"));
                    assert_eq!(font_size, 13.0);
                    assert!(bold);
                }
                _ => panic!("expected a text node"),
            }
        });

        // Frame popped: back to the default.
        assert_eq!(theme().muted, Theme::default().muted);
    }

    #[test]
    fn test_text_content_flattens_in_composition_order() {
        let view = crate::Column(Modifier::new()).child((
            crate::Image("s", "alt text"),
            Text("first"),
            crate::Row(Modifier::new()).child(Text("second")),
        ));
        assert_eq!(text_content(&view), "alt text first second");
    }

    #[test]
    fn test_simple_list_preserves_item_order() {
        let view = crate::SimpleList(vec!["a", "b", "c"], Modifier::new(), |item, i| {
            Text(format!("{i}:{item}"))
        });
        assert_eq!(text_content(&view), "0:a 1:b 2:c");
    }
}
