use crate::tree::{ListingTree, TreeNode};
use crate::view::icons;
use crate::view::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct TreeViewRenderer;

impl TreeViewRenderer {
    /// Render one level of the tree into the given frame area.
    ///
    /// Every direct child of the root gets one row, in response order.
    /// Only the visible slice is handed to the list widget so scrolling
    /// stays under manual control.
    pub fn render(
        tree: &ListingTree,
        frame: &mut Frame,
        area: Rect,
        scroll_offset: usize,
        theme: &Theme,
    ) {
        // Account for borders (top + bottom = 2)
        let viewport_height = area.height.saturating_sub(2) as usize;
        let row_count = tree.root_children().len();

        // Clamp so a stale offset cannot slice past the end
        let scroll_offset = scroll_offset.min(row_count);
        let visible_end = (scroll_offset + viewport_height).min(row_count);

        // Available width for row content (subtract borders)
        let content_width = area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = tree
            .root_entries()
            .skip(scroll_offset)
            .take(visible_end - scroll_offset)
            .map(|node| {
                ListItem::new(Self::row_line(node, theme, content_width))
                    .style(Style::default().bg(theme.bg))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Directory Listing ")
                .title_style(Style::default().fg(theme.title_fg))
                .border_style(Style::default().fg(theme.border_fg))
                .style(Style::default().bg(theme.bg)),
        );

        frame.render_widget(list, area);
    }

    /// Build the spans for a single row: disclosure affordance, icon
    /// marker, name, and the right-aligned modified value.
    pub fn row_line(node: &TreeNode, theme: &Theme, content_width: usize) -> Line<'static> {
        let mut spans = Vec::new();

        // Disclosure: closed marker for directories, inert blank for leaves
        if node.is_dir() {
            spans.push(Span::styled(
                "> ",
                Style::default().fg(theme.disclosure_fg),
            ));
        } else {
            spans.push(Span::raw("  "));
        }

        let marker = icons::marker_for(node.entry.kind, &node.entry.icon_key());
        spans.push(Span::styled(marker.glyph, Style::default().fg(marker.color)));
        spans.push(Span::raw(" "));

        let name_style = if node.is_dir() {
            Style::default().fg(theme.directory_fg)
        } else {
            Style::default().fg(theme.fg)
        };
        spans.push(Span::styled(node.entry.name.clone(), name_style));

        // Right-align the modified value against the row edge
        let time_text = node.entry.modified.to_string();
        let left_width = 4 + node.entry.name.width();
        let time_width = time_text.width();

        let min_gap = 1;
        let padding = if left_width + min_gap + time_width < content_width {
            content_width - left_width - time_width
        } else {
            min_gap
        };
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(time_text, Style::default().fg(theme.time_fg)));

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{EntryKind, ListingEntry, ModifiedTime};
    use crate::tree::{NodeId, TreeNode};
    use ratatui::{backend::TestBackend, Terminal};

    fn node(name: &str, kind: EntryKind, modified: &str) -> TreeNode {
        TreeNode::new(
            NodeId(0),
            ListingEntry::new(name, kind, ModifiedTime::Text(modified.to_string())),
            None,
        )
    }

    fn tree_of(entries: Vec<ListingEntry>) -> ListingTree {
        let mut tree = ListingTree::new();
        tree.populate(entries);
        tree
    }

    fn render_to_text(tree: &ListingTree, width: u16, height: u16, scroll_offset: usize) -> String {
        let theme = Theme::default();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                TreeViewRenderer::render(tree, frame, area, scroll_offset, &theme)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_directory_rows_show_closed_disclosure() {
        let theme = Theme::default();
        let line = TreeViewRenderer::row_line(&node("src", EntryKind::Directory, "1"), &theme, 40);
        assert_eq!(line.spans[0].content, "> ");
    }

    #[test]
    fn test_leaf_rows_have_inert_disclosure_slot() {
        let theme = Theme::default();
        let file = TreeViewRenderer::row_line(&node("a.txt", EntryKind::File, "1"), &theme, 40);
        assert_eq!(file.spans[0].content, "  ");

        let other = TreeViewRenderer::row_line(&node("sock", EntryKind::Other, "1"), &theme, 40);
        assert_eq!(other.spans[0].content, "  ");
    }

    #[test]
    fn test_row_ends_with_modified_value() {
        let theme = Theme::default();
        let line = TreeViewRenderer::row_line(
            &node("notes.txt", EntryKind::File, "2021-07-14"),
            &theme,
            40,
        );
        assert_eq!(line.spans.last().unwrap().content, "2021-07-14");
    }

    #[test]
    fn test_numeric_modified_value_renders_in_decimal() {
        let theme = Theme::default();
        let entry = ListingEntry::new(
            "big.bin",
            EntryKind::File,
            ModifiedTime::Numeric(1626220800000i64.into()),
        );
        let line =
            TreeViewRenderer::row_line(&TreeNode::new(NodeId(0), entry, None), &theme, 60);
        assert_eq!(line.spans.last().unwrap().content, "1626220800000");
    }

    #[test]
    fn test_render_shows_all_rows_in_response_order() {
        let tree = tree_of(vec![
            ListingEntry::new("zebra.txt", EntryKind::File, ModifiedTime::Text("1".into())),
            ListingEntry::new("apps", EntryKind::Directory, ModifiedTime::Text("2".into())),
            ListingEntry::new("README", EntryKind::File, ModifiedTime::Text("3".into())),
        ]);

        let text = render_to_text(&tree, 50, 8, 0);
        let zebra = text.find("zebra.txt").expect("zebra.txt not rendered");
        let apps = text.find("apps").expect("apps not rendered");
        let readme = text.find("README").expect("README not rendered");
        assert!(zebra < apps && apps < readme, "rows out of order:\n{}", text);
    }

    #[test]
    fn test_render_empty_tree_draws_border_only() {
        let tree = ListingTree::new();
        let text = render_to_text(&tree, 30, 6, 0);
        assert!(text.contains("Directory Listing"));
        assert!(!text.contains('>'));
    }

    #[test]
    fn test_scroll_offset_skips_leading_rows() {
        let tree = tree_of(vec![
            ListingEntry::new("first", EntryKind::File, ModifiedTime::Text("1".into())),
            ListingEntry::new("second", EntryKind::File, ModifiedTime::Text("2".into())),
        ]);

        let text = render_to_text(&tree, 30, 3, 1);
        assert!(!text.contains("first"));
        assert!(text.contains("second"));
    }

    #[test]
    fn test_oversized_scroll_offset_is_clamped() {
        let tree = tree_of(vec![ListingEntry::new(
            "only",
            EntryKind::File,
            ModifiedTime::Text("1".into()),
        )]);

        // Must not panic, just renders no rows
        let text = render_to_text(&tree, 30, 6, 99);
        assert!(!text.contains("only"));
    }
}
