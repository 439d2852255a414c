/// Block layout for the itinerary document

use crate::Viewport;
use scraper::{ElementRef, Html, Selector};

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxModel {
    pub margin: u32,
    pub border: u32,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    pub rect: Rect,
    pub box_model: BoxModel,
}

impl LayoutBox {
    pub fn content_width(&self) -> u32 {
        let total = self.box_model.margin + self.box_model.border + self.box_model.padding;
        self.rect.width.saturating_sub(total)
    }
}

/// A layout node couples a `LayoutBox` with rendered text and element type.
/// The template emits a flat body of `h1`, `h2` and `p` elements only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    Title,
    Heading,
    Paragraph,
}

#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub lb: LayoutBox,
    pub text: String,
    pub elem_type: ElementType,
    pub scale: usize,
}

/// The laid-out document: stacked blocks plus the total content height.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub nodes: Vec<LayoutNode>,
    /// Full content height in logical pixels. Deliberately NOT clipped to the
    /// viewport: the captured region must cover the whole document so the
    /// exporter can paginate it.
    pub height: u32,
}

const CHAR_W: u32 = 8;
const CHAR_H: u32 = 8;

fn wrap(text: &str, chars_per_line: usize) -> String {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        if cur.len() + word.len() + 1 > chars_per_line && !cur.is_empty() {
            lines.push(cur);
            cur = word.to_string();
        } else {
            if !cur.is_empty() {
                cur.push(' ');
            }
            cur.push_str(word);
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines.join("\n")
}

/// Compute a basic block layout for the provided HTML document and viewport.
/// - Walks the body children in document order
/// - Stacks blocks vertically with simple margins/padding
/// - `h1` and `h2` rendered at scale=2, paragraphs at scale=1
pub fn layout_document(document: &Html, viewport: Viewport) -> LayoutResult {
    let mut y = 8u32; // top padding
    let page_width = viewport.width;
    let mut nodes = Vec::new();

    let body_sel = Selector::parse("body").unwrap();
    let children: Vec<ElementRef> = document
        .select(&body_sel)
        .next()
        .map(|body| body.children().filter_map(ElementRef::wrap).collect())
        .unwrap_or_default();

    for node in children {
        let (elem_type, scale, padding, margin) = match node.value().name() {
            "h1" => (ElementType::Title, 2usize, 8u32, 8u32),
            "h2" => (ElementType::Heading, 2, 8, 8),
            "p" => (ElementType::Paragraph, 1, 6, 6),
            _ => continue,
        };

        let txt = node.text().collect::<String>();
        if txt.trim().is_empty() {
            continue;
        }

        let content_w = page_width.saturating_sub(16).saturating_sub(padding * 2);
        let char_w = CHAR_W * scale as u32;
        let chars_per_line = if content_w >= char_w { (content_w / char_w) as usize } else { 1 };
        let text = wrap(txt.trim(), chars_per_line);
        let lines_count = (text.lines().count() as u32).max(1);
        let box_h = lines_count * CHAR_H * scale as u32 + padding * 2;

        let lb = LayoutBox {
            rect: Rect {
                x: 8,
                y: y as i32,
                width: page_width.saturating_sub(16),
                height: box_h,
            },
            box_model: BoxModel {
                margin,
                border: 0,
                padding,
            },
        };
        nodes.push(LayoutNode {
            lb,
            text,
            elem_type,
            scale,
        });
        y += box_h + margin;
    }

    LayoutResult {
        nodes,
        height: y + 8, // bottom padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn layout_document_places_title_and_paragraphs() {
        let html = "<html><head><title>Test Title</title></head><body><h1>Heading</h1><p>Hello world</p><p>More text</p></body></html>";
        let doc = Html::parse_document(html);
        let v = crate::Viewport { width: 200, height: 200 };
        let result = layout_document(&doc, v);
        assert_eq!(result.nodes.len(), 3);
        assert_eq!(result.nodes[0].elem_type, ElementType::Title);
        assert_eq!(result.nodes[1].elem_type, ElementType::Paragraph);
        assert!(result.nodes[1].lb.rect.width > 0);
    }

    #[test]
    fn layout_grows_past_the_viewport_height() {
        let body: String = (0..200)
            .map(|i| format!("<p>paragraph number {} with some filler words</p>", i))
            .collect();
        let html = format!("<html><body>{}</body></html>", body);
        let doc = Html::parse_document(&html);
        let v = crate::Viewport { width: 400, height: 300 };
        let result = layout_document(&doc, v);
        assert_eq!(result.nodes.len(), 200);
        assert!(result.height > v.height, "content must not be clipped to the viewport");
    }

    #[test]
    fn blocks_are_stacked_in_document_order() {
        let html = "<html><body><h2>A</h2><p>one</p><h2>B</h2><p>two</p></body></html>";
        let doc = Html::parse_document(html);
        let result = layout_document(&doc, crate::Viewport::default());
        let ys: Vec<i32> = result.nodes.iter().map(|n| n.lb.rect.y).collect();
        let mut sorted = ys.clone();
        sorted.sort();
        assert_eq!(ys, sorted);
        assert_eq!(result.nodes[2].text, "B");
    }

    #[test]
    fn wrap_breaks_long_lines() {
        let wrapped = wrap("one two three four five", 9);
        assert!(wrapped.lines().count() > 1);
        assert!(wrapped.lines().all(|l| l.len() <= 9));
    }
}
