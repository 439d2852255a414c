/// Paint command set and display-list construction

use crate::rendering::layout::{ElementType, LayoutNode};

pub type Rgba = (u8, u8, u8, u8);

// Vigovia brand palette
pub const BRAND_PURPLE: Rgba = (0x54, 0x1C, 0x9C, 0xFF);
pub const BRAND_HOVER: Rgba = (0x68, 0x00, 0x99, 0xFF);
pub const BRAND_GRADIENT: Rgba = (0x93, 0x6F, 0xE0, 0xFF);
pub const BRAND_BOX: Rgba = (0x32, 0x1E, 0x5D, 0xFF);
pub const BRAND_CHAT: Rgba = (0xFB, 0xF4, 0xFF, 0xFF);

pub const WHITE: Rgba = (0xFF, 0xFF, 0xFF, 0xFF);
pub const INK: Rgba = (0x1F, 0x29, 0x37, 0xFF);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    Text {
        x: i32,
        y: i32,
        /// May contain `\n`; the rasterizer advances one line per break
        text: String,
        scale: usize,
        rgba: Rgba,
    },
}

/// Build the display list for a laid-out document.
///
/// Title blocks get a solid brand-purple band with light text, headings a
/// lavender band with dark text, paragraphs plain ink on the white page.
pub fn build_display_list(nodes: &[LayoutNode]) -> Vec<PaintCommand> {
    let mut commands = Vec::with_capacity(nodes.len() * 2);

    for node in nodes {
        let r = &node.lb.rect;
        let padding = node.lb.box_model.padding as i32;
        let (band, text_color) = match node.elem_type {
            ElementType::Title => (Some(BRAND_PURPLE), WHITE),
            ElementType::Heading => (Some(BRAND_CHAT), BRAND_BOX),
            ElementType::Paragraph => (None, INK),
        };

        if let Some(rgba) = band {
            commands.push(PaintCommand::SolidRect {
                x: r.x,
                y: r.y,
                width: r.width,
                height: r.height,
                rgba,
            });
        }

        commands.push(PaintCommand::Text {
            x: r.x + padding,
            y: r.y + padding,
            text: node.text.clone(),
            scale: node.scale,
            rgba: text_color,
        });
    }

    commands
}
