#[cfg(test)]
mod formatting_tests {
    use crate::{
        build_trie, render_mindmap, render_outline, render_outline_with, Indent, Leaf, LeafOrder,
        Mindmap, OutlineError, OutlineRenderer, Render, RenderContext, RenderOptions, TrieBuilder,
    };

    #[test]
    fn test_sample_outline() {
        let output = render_outline("Sample", ["i/like/turtles", "i/eat/tomato"]).unwrap();

        let expected = "Sample/\n\ti/\n\t\tlike/\n\t\t\tturtles\n\t\teat/\n\t\t\ttomato\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_mindmap_renders_title_only() {
        let output = render_outline("Empty", std::iter::empty()).unwrap();
        assert_eq!(output, "Empty\n");
    }

    #[test]
    fn test_duplicate_path_renders_once() {
        let output = render_outline("Dup", ["a/b", "a/b"]).unwrap();
        assert_eq!(output, "Dup/\n\ta/\n\t\tb\n");
    }

    #[test]
    fn test_single_path_indents_one_level_per_segment() {
        let output = render_outline("Deep", ["one/two/three/four/five"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Deep/");
        for (depth, line) in lines.iter().enumerate().skip(1) {
            let tabs = line.chars().take_while(|c| *c == '\t').count();
            assert_eq!(tabs, depth, "line {:?} has wrong indentation", line);
        }
        assert_eq!(lines[5], "\t\t\t\t\tfive");
    }

    #[test]
    fn test_children_follow_insertion_order() {
        let output = render_outline("Order", ["b/x", "a/y", "b/z"]).unwrap();
        assert_eq!(output, "Order/\n\tb/\n\t\tx\n\t\tz\n\ta/\n\t\ty\n");
    }

    #[test]
    fn test_prefix_path_rendered_as_branch_by_default() {
        let output = render_outline("Root", ["a/b", "a/b/c"]).unwrap();
        assert_eq!(output, "Root/\n\ta/\n\t\tb/\n\t\t\tc\n");
    }

    #[test]
    fn test_terminal_marker_on_prefix_paths() {
        let options = RenderOptions::new().with_terminal_marker(" *");
        let output = render_outline_with("Root", ["a/b", "a/b/c", "a/d"], &options).unwrap();

        // Only b ends a path while also having children
        assert_eq!(output, "Root/\n\ta/\n\t\tb/ *\n\t\t\tc\n\t\td\n");
    }

    #[test]
    fn test_space_indentation() {
        let options = RenderOptions::new().with_indent(Indent::Spaces(2));
        let output = render_outline_with("Sample", ["i/like"], &options).unwrap();
        assert_eq!(output, "Sample/\n  i/\n    like\n");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let output = render_outline("Root", ["a/b  "]).unwrap();
        assert_eq!(output, "Root/\n\ta/\n\t\tb\n");
    }

    #[test]
    fn test_blank_leaf_is_rejected_not_dropped() {
        assert!(matches!(
            render_outline("Root", ["a/ "]),
            Err(OutlineError::InvalidPath { .. })
        ));
        assert!(matches!(
            render_outline("Root", ["a/b\nc"]),
            Err(OutlineError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_every_node_gets_one_line() {
        let paths = ["a/b  ", "a/ c", "x y/z"];
        let root = build_trie("Root", paths).unwrap();
        let output = render_outline("Root", paths).unwrap();

        assert_eq!(output.lines().count(), 1 + root.descendant_count());
        assert_eq!(output, "Root/\n\ta/\n\t\tb  \n\t\t c\n\tx y/\n\t\tz\n");
    }

    #[test]
    fn test_subtree_render_uses_context_depth() {
        let root = build_trie("Root", ["a/b/c"]).unwrap();
        let a = root.child("a").unwrap();

        let options = RenderOptions::default();
        let context = RenderContext::new(&options).with_depth(1);
        assert_eq!(a.render(&context), "\ta/\n\t\tb/\n\t\t\tc\n");
    }

    #[test]
    fn test_repeated_renders_are_identical() {
        let mut builder = TrieBuilder::new("Sample").unwrap();
        builder.extend(["i/like/turtles", "i/eat/tomato"]).unwrap();
        let root = builder.finish();

        let options = RenderOptions::default();
        let renderer = OutlineRenderer::new(&options);
        assert_eq!(renderer.render(&root), renderer.render(&root));
    }

    #[test]
    fn test_errors_surface_without_output() {
        assert!(matches!(
            render_outline("", ["a"]),
            Err(OutlineError::EmptyTitle)
        ));
        assert!(matches!(
            render_outline("Root", ["a", "/b"]),
            Err(OutlineError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_render_mindmap_by_id() {
        let mindmap = Mindmap::new("Ids")
            .with_leaf(Leaf::new("second/leaf").with_id(2))
            .with_leaf(Leaf::new("first/leaf").with_id(1));

        let by_input = render_mindmap(&mindmap, LeafOrder::Input, &RenderOptions::default()).unwrap();
        let by_id = render_mindmap(&mindmap, LeafOrder::IdAscending, &RenderOptions::default()).unwrap();

        assert_eq!(by_input, "Ids/\n\tsecond/\n\t\tleaf\n\tfirst/\n\t\tleaf\n");
        assert_eq!(by_id, "Ids/\n\tfirst/\n\t\tleaf\n\tsecond/\n\t\tleaf\n");
    }
}
