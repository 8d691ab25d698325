use eframe::egui::{
    Align2, Color32, CornerRadius, FontId, Mesh, Painter, Pos2, Rect, Shape, pos2,
};

use super::textures::Textures;
use super::{Canvas, Image};

const PLACEHOLDER_FILL: Color32 = Color32::from_rgb(0x24, 0x2A, 0x38);
const PLACEHOLDER_GLYPH: Color32 = Color32::from_gray(0xC8);

/// [`Canvas`] backed by an egui painter.
///
/// Images without a loaded texture are drawn as a dark tile with a glyph.
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    textures: &'a Textures,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, textures: &'a Textures) -> Self {
        Self { painter, textures }
    }

    fn placeholder(&self, rect: Rect, glyph: &str) {
        self.painter
            .rect_filled(rect, CornerRadius::same(4), PLACEHOLDER_FILL);
        self.painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(rect.height() * 0.4),
            PLACEHOLDER_GLYPH,
        );
    }
}

impl Canvas for EguiCanvas<'_> {
    fn gradient(&mut self, rect: Rect, top: Color32, bottom: Color32) {
        let mut mesh = Mesh::default();
        mesh.colored_vertex(rect.left_top(), top);
        mesh.colored_vertex(rect.right_top(), top);
        mesh.colored_vertex(rect.left_bottom(), bottom);
        mesh.colored_vertex(rect.right_bottom(), bottom);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(2, 1, 3);
        self.painter.add(Shape::mesh(mesh));
    }

    fn image(&mut self, image: Image, rect: Rect) {
        let texture = match image {
            Image::Artwork(index) => self.textures.artwork(index),
            Image::Button(icon) => self.textures.button(icon),
        };
        match texture {
            Some(texture) => {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                self.painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
            None => match image {
                Image::Artwork(_) => self.placeholder(rect, "♪"),
                Image::Button(icon) => self.placeholder(rect, icon.glyph()),
            },
        }
    }

    fn text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32) {
        self.painter
            .text(pos, Align2::LEFT_TOP, text, FontId::proportional(size), color);
    }
}
