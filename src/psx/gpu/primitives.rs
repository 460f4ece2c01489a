//! Primitives decoded from GP0 draw commands, handed over to whatever renders them

/// Vertex position in VRAM coordinates (before the drawing offset is applied)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    /// Parse position from a GP0 parameter
    pub fn from_gp0(val: u32) -> Position {
        let x = val as i16;
        let y = (val >> 16) as i16;

        Position { x, y }
    }
}

/// RGB color, 8 bits per component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse color from a GP0 parameter
    pub fn from_gp0(val: u32) -> Color {
        let r = val as u8;
        let g = (val >> 8) as u8;
        let b = (val >> 16) as u8;

        Color { r, g, b }
    }
}

/// Texture coordinates within the texture page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TexCoord {
    pub u: u8,
    pub v: u8,
}

impl TexCoord {
    pub fn from_gp0(val: u32) -> TexCoord {
        TexCoord {
            u: val as u8,
            v: (val >> 8) as u8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub position: Position,
    pub color: Color,
}

impl Vertex {
    pub fn new(position: Position, color: Color) -> Vertex {
        Vertex { position, color }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    Triangle([Vertex; 3]),
    Quad([Vertex; 4]),
    /// Textured quad blended with `color`. `clut` and `page` are the raw attribute halfwords
    /// of the first and second texture coordinate words.
    TexturedQuad {
        positions: [Position; 4],
        tex_coords: [TexCoord; 4],
        color: Color,
        clut: u16,
        page: u16,
    },
}
