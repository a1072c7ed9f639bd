//! Integration tests for chatkit
//!
//! These tests exercise full workflows across multiple modules: building a
//! conversation out of messages and groups, attaching boxes to a shared
//! page, and serializing the result.

#[cfg(test)]
mod integration_tests {
    use chrono::{DateTime, Local, TimeZone};

    use crate::dom::ElementRef;
    use crate::page::Page;
    use crate::theme;
    use crate::widget::{ChatBox, Message, MsgGroup, Side, Status};

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 4, h, m, 0).unwrap()
    }

    /// Build a conversation with both sides, a group, and statuses, then
    /// walk the resulting tree.
    #[test]
    fn test_full_conversation_tree() {
        let incoming = MsgGroup::new(vec![
            Message::new("Hey!", at(11, 51)).unwrap().with_side(Side::Left),
            Message::new("Lunch at noon?", at(11, 52))
                .unwrap()
                .with_side(Side::Left),
        ]);

        let mut chatbox = ChatBox::new("c1", "Alice").unwrap();
        chatbox.append_group(incoming);
        chatbox.append_msg(
            Message::new("Sure, see you there.", at(11, 53))
                .unwrap()
                .with_status(Status::Read),
        );

        let regions = chatbox.root().child_elements();
        assert_eq!(regions.len(), 3); // title bar, body, footer

        let body = regions[1].clone();
        assert_eq!(body.child_count(), 2); // group, then reply

        let group_list = body.child_elements()[0].child_elements()[1].clone();
        assert_eq!(group_list.child_count(), 2);
        assert!(group_list.child_elements()[0].has_class("left"));

        let reply = body.child_elements()[1].clone();
        assert!(reply.has_class("right"));
        let meta = reply.child_elements()[1].clone();
        assert_eq!(meta.child_elements()[0].text_content(), "11:53 AM");
        assert!(meta.child_elements()[1].has_class("message-read"));
    }

    /// Two boxes shown on one page become siblings under a single wrapper,
    /// created exactly once, in call order.
    #[test]
    fn test_two_boxes_share_one_wrapper() {
        let mut page = Page::new();

        let a = ChatBox::with_messages("c1", "Alice", vec![], false).unwrap();
        let b = ChatBox::with_messages("c2", "Bob", vec![], true).unwrap();

        a.show(&mut page);
        b.show(&mut page);
        a.show(&mut page); // re-show moves the box to the end, no duplicate

        assert_eq!(page.document().child_count(), 1);
        let wrapper = page.document().child_elements()[0].clone();
        assert_eq!(wrapper.id().as_deref(), Some(theme::WRAPPER_ID));
        assert!(ElementRef::same_node(&wrapper, &page.wrapper()));

        let shown = wrapper.child_elements();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].id().as_deref(), Some("c2"));
        assert_eq!(shown[1].id().as_deref(), Some("c1"));
    }

    /// Re-showing the same box any number of times leaves exactly one copy
    /// of it in the serialized page.
    #[test]
    fn test_repeated_show_never_duplicates() {
        let mut page = Page::new();
        let boxed = ChatBox::with_messages("c1", "Alice", vec![], false).unwrap();
        for _ in 0..5 {
            boxed.show(&mut page);
        }
        assert_eq!(page.wrapper().child_count(), 1);
        assert_eq!(page.to_html().matches("id=\"c1\"").count(), 1);
    }

    /// A message rendered into a group is the same node the page serializes;
    /// the memoized render never forks the tree.
    #[test]
    fn test_render_cache_survives_attachment() {
        let mut msg = Message::new("cached once", at(9, 0)).unwrap();
        let direct = msg.render();

        let mut chatbox = ChatBox::new("c1", "Alice").unwrap();
        chatbox.append_msg(msg);

        let body = chatbox.root().child_elements()[1].clone();
        assert!(ElementRef::same_node(&direct, &body.child_elements()[0]));
    }

    /// Serialized output carries the original markup vocabulary end to end.
    #[test]
    fn test_page_serialization() {
        let mut chatbox = ChatBox::with_messages("c1", "Alice", vec![], false).unwrap();
        chatbox.append_msg(
            Message::new("1 < 2 & 3", at(12, 0))
                .unwrap()
                .with_status(Status::Sent),
        );

        let mut page = Page::new();
        chatbox.show(&mut page);
        let html = page.to_html();

        assert!(html.starts_with("<body><div id=\"chat-box-wrapper\">"));
        assert!(html.contains("<div id=\"c1\" class=\"chat-box\">"));
        assert!(html.contains("<span class=\"chat-title\">Alice</span>"));
        assert!(html.contains("<div class=\"message\">1 &lt; 2 &amp; 3</div>"));
        assert!(html.contains("<i class=\"material-icons\">done</i>"));
        assert!(!html.contains("chat-footer-wrapper"));
    }

    /// Construction failures leave nothing behind: the page is untouched
    /// and no partial widget escapes.
    #[test]
    fn test_failed_construction_leaves_page_clean() {
        let page = Page::new();
        assert!(ChatBox::with_messages("", "Alice", vec![], true).is_err());
        assert!(Message::new("", at(10, 0)).is_err());
        assert_eq!(page.document().child_count(), 0);
    }
}
