//! GPU command processor
//!
//! Handles the GP0 (drawing and VRAM transfer) and GP1 (display control) register protocols and
//! keeps track of every piece of state reported by the status register. Draw commands are
//! decoded into [`Primitive`]s and queued for a renderer, nothing is rasterized here.

mod command_buffer;
pub mod primitives;

use self::command_buffer::CommandBuffer;
pub use self::primitives::{Color, Position, Primitive, TexCoord, Vertex};
use crate::error::Unsupported;
use log::{debug, warn};
use std::mem;

/// Method implementing a GP0 command, called once all of its parameters have been received
type Gp0Handler = fn(&mut Gpu) -> Result<(), Unsupported>;

pub struct Gpu {
    /// Texture page base X coordinate (4 bits, 64 byte increment)
    page_base_x: u8,
    /// Texture page base Y coordinate (1bit, 256 line increment)
    page_base_y: u8,
    /// Semi-transparency. Not entirely sure how to handle that value yet, it seems to describe
    /// how to blend the source and destination colors.
    semi_transparency: u8,
    /// Texture page color depth
    texture_depth: TextureDepth,
    /// Enable dithering from 24 to 15bits RGB
    dithering: bool,
    /// Allow drawing to the display area
    draw_to_display: bool,
    /// Force "mask" bit of the pixel to 1 when writing to VRAM (otherwise don't modify it)
    force_set_mask_bit: bool,
    /// Don't draw to pixels which have the "mask" bit set
    preserve_masked_pixels: bool,
    /// Currently displayed field. For progressive output this is always Top.
    field: Field,
    /// When true all textures are disabled
    texture_disable: bool,
    /// Video output horizontal resolution
    hres: HorizontalRes,
    /// Video output vertical resolution
    vres: VerticalRes,
    /// Video mode
    vmode: VMode,
    /// Display depth. The GPU itself always draws 15bit RGB, 24bit output must use external
    /// assets (pre-rendered textures, MDEC, etc...)
    display_depth: DisplayDepth,
    /// Output interlaced video signal instead of progressive
    interlaced: bool,
    /// Disable the display
    display_disabled: bool,
    /// True when the interrupt is active
    interrupt: bool,
    /// DMA request direction
    dma_direction: DmaDirection,
    /// Mirror textured rectangles along the x axis
    rectangle_texture_x_flip: bool,
    /// Mirror textured rectangles along the y axis
    rectangle_texture_y_flip: bool,
    /// Texture window x mask (8 pixel steps)
    texture_window_x_mask: u8,
    /// Texture window y mask (8 pixel steps)
    texture_window_y_mask: u8,
    /// Texture window x offset (8 pixel steps)
    texture_window_x_offset: u8,
    /// Texture window y offset (8 pixel steps)
    texture_window_y_offset: u8,
    /// Left-most column of drawing area
    drawing_area_left: u16,
    /// Top-most line of drawing area
    drawing_area_top: u16,
    /// Right-most column of drawing area
    drawing_area_right: u16,
    /// Bottom-most line of drawing area
    drawing_area_bottom: u16,
    /// Horizontal drawing offset applied to all vertices
    drawing_x_offset: i16,
    /// Vertical drawing offset applied to all vertices
    drawing_y_offset: i16,
    /// First column of the display area in VRAM
    display_vram_x_start: u16,
    /// First line of the display area in VRAM
    display_vram_y_start: u16,
    /// Display output horizontal start relative to HSYNC
    display_horiz_start: u16,
    /// Display output horizontal end relative to HSYNC
    display_horiz_end: u16,
    /// Display output first line relative to VSYNC
    display_line_start: u16,
    /// Display output last line relative to VSYNC
    display_line_end: u16,
    /// Buffer containing the current GP0 command
    gp0_command: CommandBuffer,
    /// Remaining words for the current GP0 command
    gp0_words_remaining: u32,
    /// Method implementing the current GP0 command
    gp0_command_method: Gp0Handler,
    /// Current mode of the GP0 register
    gp0_mode: Gp0Mode,
    /// Primitives decoded since the last call to `take_primitives`
    primitives: Vec<Primitive>,
}

impl Gpu {
    pub fn new() -> Gpu {
        Gpu {
            page_base_x: 0,
            page_base_y: 0,
            semi_transparency: 0,
            texture_depth: TextureDepth::T4Bit,
            dithering: false,
            draw_to_display: false,
            force_set_mask_bit: false,
            preserve_masked_pixels: false,
            field: Field::Top,
            texture_disable: false,
            hres: HorizontalRes::from_fields(0, 0),
            vres: VerticalRes::Y240Lines,
            vmode: VMode::Ntsc,
            display_depth: DisplayDepth::D15Bits,
            interlaced: false,
            display_disabled: true,
            interrupt: false,
            dma_direction: DmaDirection::Off,
            rectangle_texture_x_flip: false,
            rectangle_texture_y_flip: false,
            texture_window_x_mask: 0,
            texture_window_y_mask: 0,
            texture_window_x_offset: 0,
            texture_window_y_offset: 0,
            drawing_area_left: 0,
            drawing_area_top: 0,
            drawing_area_right: 0,
            drawing_area_bottom: 0,
            drawing_x_offset: 0,
            drawing_y_offset: 0,
            display_vram_x_start: 0,
            display_vram_y_start: 0,
            display_horiz_start: 0x200,
            display_horiz_end: 0xc00,
            display_line_start: 0x10,
            display_line_end: 0x100,
            gp0_command: CommandBuffer::new(),
            gp0_words_remaining: 0,
            gp0_command_method: Gpu::gp0_nop,
            gp0_mode: Gp0Mode::Command,
            primitives: Vec::new(),
        }
    }

    /// Retrieve value of the status register
    pub fn status(&self) -> u32 {
        let mut r = 0u32;

        r |= (self.page_base_x as u32) << 0;
        r |= (self.page_base_y as u32) << 4;
        r |= (self.semi_transparency as u32) << 5;
        r |= (self.texture_depth as u32) << 7;
        r |= (self.dithering as u32) << 9;
        r |= (self.draw_to_display as u32) << 10;
        r |= (self.force_set_mask_bit as u32) << 11;
        r |= (self.preserve_masked_pixels as u32) << 12;
        r |= (self.field as u32) << 13;
        // Bit 14: not supported
        r |= (self.texture_disable as u32) << 15;
        r |= self.hres.into_status();
        r |= (self.vres as u32) << 19;
        r |= (self.vmode as u32) << 20;
        r |= (self.display_depth as u32) << 21;
        r |= (self.interlaced as u32) << 22;
        r |= (self.display_disabled as u32) << 23;
        r |= (self.interrupt as u32) << 24;

        // For now we pretend that the GPU is always ready:
        // Ready to receive command
        r |= 1 << 26;
        // Ready to send VRAM to CPU
        r |= 1 << 27;
        // Ready to receive DMA block
        r |= 1 << 28;

        r |= (self.dma_direction as u32) << 29;

        // Bit 31 should change depending on the currently drawn line (whether it's even, odd or
        // in the vblank apparently). Let's not bother with it for now.
        r |= 0 << 31;

        // Not sure about that, I'm guessing that it's the signal checked by the DMA when sending
        // data in Request synchronization mode. For now I blindly follow the Nocash spec.
        let dma_request = match self.dma_direction {
            // Always 0
            DmaDirection::Off => 0,
            // Should be 0 if FIFO is full, 1 otherwise
            DmaDirection::Fifo => 1,
            // Should be the same as status bit 28
            DmaDirection::CpuToGp0 => (r >> 28) & 1,
            // Should be the same as status bit 27
            DmaDirection::VRamToCpu => (r >> 27) & 1,
        };

        r |= dma_request << 25;

        r
    }

    /// Retrieve value of the "read" register (GPUREAD). VRAM readback isn't emulated.
    pub fn read(&self) -> u32 {
        debug!("GPUREAD");

        0
    }

    /// Register read, `offset` 0 is GPUREAD and 4 is GPUSTAT
    pub fn load(&self, offset: u32) -> u32 {
        match offset {
            0 => self.read(),
            _ => self.status(),
        }
    }

    /// Register write, `offset` 0 is GP0 and 4 is GP1
    pub fn store(&mut self, offset: u32, val: u32) -> Result<(), Unsupported> {
        match offset {
            0 => self.gp0(val),
            _ => self.gp1(val),
        }
    }

    /// Drain the primitives decoded so far
    pub fn take_primitives(&mut self) -> Vec<Primitive> {
        mem::take(&mut self.primitives)
    }

    /// Horizontal and vertical drawing offsets
    pub fn drawing_offset(&self) -> (i16, i16) {
        (self.drawing_x_offset, self.drawing_y_offset)
    }

    /// Drawing area as `(left, top, right, bottom)`
    pub fn drawing_area(&self) -> (u16, u16, u16, u16) {
        (
            self.drawing_area_left,
            self.drawing_area_top,
            self.drawing_area_right,
            self.drawing_area_bottom,
        )
    }

    /// Texture window as `(x_mask, y_mask, x_offset, y_offset)`
    pub fn texture_window(&self) -> (u8, u8, u8, u8) {
        (
            self.texture_window_x_mask,
            self.texture_window_y_mask,
            self.texture_window_x_offset,
            self.texture_window_y_offset,
        )
    }

    /// Top-left corner of the displayed area in VRAM
    pub fn display_vram_start(&self) -> (u16, u16) {
        (self.display_vram_x_start, self.display_vram_y_start)
    }

    /// Display horizontal range as `(start, end)`
    pub fn display_horizontal_range(&self) -> (u16, u16) {
        (self.display_horiz_start, self.display_horiz_end)
    }

    /// Display vertical range as `(start, end)`
    pub fn display_vertical_range(&self) -> (u16, u16) {
        (self.display_line_start, self.display_line_end)
    }

    /// True while GP0 is receiving image pixels
    pub fn loading_image(&self) -> bool {
        self.gp0_mode == Gp0Mode::ImageLoad
    }

    pub fn rectangle_texture_flip(&self) -> (bool, bool) {
        (self.rectangle_texture_x_flip, self.rectangle_texture_y_flip)
    }

    /// Handle writes to the GP0 command register
    pub fn gp0(&mut self, val: u32) -> Result<(), Unsupported> {
        if self.gp0_words_remaining == 0 {
            // We start a new GP0 command
            let opcode = (val >> 24) & 0xff;

            let (len, method): (u32, Gp0Handler) = match opcode {
                0x00 => (1, Gpu::gp0_nop),
                0x01 => (1, Gpu::gp0_clear_cache),
                0x28 => (5, Gpu::gp0_quad_mono_opaque),
                0x2c => (9, Gpu::gp0_quad_texture_blend_opaque),
                0x30 => (6, Gpu::gp0_triangle_shaded_opaque),
                0x38 => (8, Gpu::gp0_quad_shaded_opaque),
                0xa0 => (3, Gpu::gp0_image_load),
                0xc0 => (3, Gpu::gp0_image_store),
                0xe1 => (1, Gpu::gp0_draw_mode),
                0xe2 => (1, Gpu::gp0_texture_window),
                0xe3 => (1, Gpu::gp0_drawing_area_top_left),
                0xe4 => (1, Gpu::gp0_drawing_area_bottom_right),
                0xe5 => (1, Gpu::gp0_drawing_offset),
                0xe6 => (1, Gpu::gp0_mask_bit_setting),
                _ => return Err(Unsupported::Gp0Command(val)),
            };

            self.gp0_words_remaining = len;
            self.gp0_command_method = method;

            self.gp0_command.clear();
        }

        self.gp0_words_remaining -= 1;

        match self.gp0_mode {
            Gp0Mode::Command => {
                self.gp0_command.push_word(val)?;

                if self.gp0_words_remaining == 0 {
                    // We have all the parameters, we can run the command
                    (self.gp0_command_method)(self)?;
                }
            }
            Gp0Mode::ImageLoad => {
                // Pixel data isn't stored anywhere, there's no VRAM
                if self.gp0_words_remaining == 0 {
                    // Load done, switch back to command mode
                    self.gp0_mode = Gp0Mode::Command;
                }
            }
        }

        Ok(())
    }

    /// GP0(0x00): No Operation
    fn gp0_nop(&mut self) -> Result<(), Unsupported> {
        Ok(())
    }

    /// GP0(0x01): Clear Cache
    fn gp0_clear_cache(&mut self) -> Result<(), Unsupported> {
        // Texture cache isn't emulated
        Ok(())
    }

    /// GP0(0x28): Monochrome Opaque Quadrilateral
    fn gp0_quad_mono_opaque(&mut self) -> Result<(), Unsupported> {
        let color = Color::from_gp0(self.gp0_command.get(0)?);

        let mut vertices = [Vertex::new(Position { x: 0, y: 0 }, color); 4];

        for (i, v) in vertices.iter_mut().enumerate() {
            v.position = Position::from_gp0(self.gp0_command.get(1 + i)?);
        }

        self.primitives.push(Primitive::Quad(vertices));

        Ok(())
    }

    /// GP0(0x2C): Textured Opaque Quadrilateral
    fn gp0_quad_texture_blend_opaque(&mut self) -> Result<(), Unsupported> {
        let buf = &self.gp0_command;

        let color = Color::from_gp0(buf.get(0)?);

        let mut positions = [Position { x: 0, y: 0 }; 4];
        let mut tex_coords = [TexCoord { u: 0, v: 0 }; 4];

        for i in 0..4 {
            positions[i] = Position::from_gp0(buf.get(1 + i * 2)?);
            tex_coords[i] = TexCoord::from_gp0(buf.get(2 + i * 2)?);
        }

        let clut = (buf.get(2)? >> 16) as u16;
        let page = (buf.get(4)? >> 16) as u16;

        self.primitives.push(Primitive::TexturedQuad {
            positions,
            tex_coords,
            color,
            clut,
            page,
        });

        Ok(())
    }

    /// GP0(0x30): Shaded Opaque Triangle
    fn gp0_triangle_shaded_opaque(&mut self) -> Result<(), Unsupported> {
        let mut vertices = [Vertex::new(Position { x: 0, y: 0 }, Color { r: 0, g: 0, b: 0 }); 3];

        for (i, v) in vertices.iter_mut().enumerate() {
            v.color = Color::from_gp0(self.gp0_command.get(i * 2)?);
            v.position = Position::from_gp0(self.gp0_command.get(i * 2 + 1)?);
        }

        self.primitives.push(Primitive::Triangle(vertices));

        Ok(())
    }

    /// GP0(0x38): Shaded Opaque Quadrilateral
    fn gp0_quad_shaded_opaque(&mut self) -> Result<(), Unsupported> {
        let mut vertices = [Vertex::new(Position { x: 0, y: 0 }, Color { r: 0, g: 0, b: 0 }); 4];

        for (i, v) in vertices.iter_mut().enumerate() {
            v.color = Color::from_gp0(self.gp0_command.get(i * 2)?);
            v.position = Position::from_gp0(self.gp0_command.get(i * 2 + 1)?);
        }

        self.primitives.push(Primitive::Quad(vertices));

        Ok(())
    }

    /// GP0(0xA0): Image Load
    fn gp0_image_load(&mut self) -> Result<(), Unsupported> {
        // Parameter 2 contains the image resolution
        let res = self.gp0_command.get(2)?;

        let width = res & 0xffff;
        let height = res >> 16;

        // Size of the image in 16bit pixels
        let imgsize = width * height;

        // If we have an odd number of pixels we must round up since we transfer 32bits at a
        // time. There'll be 16bits of padding in the last word.
        let imgsize = (imgsize + 1) & !1;

        // Store number of words expected for this image
        let words = imgsize / 2;

        if words > 0 {
            self.gp0_words_remaining = words;

            // Put the GP0 state machine in ImageLoad mode
            self.gp0_mode = Gp0Mode::ImageLoad;
        }

        Ok(())
    }

    /// GP0(0xC0): Image Store
    fn gp0_image_store(&mut self) -> Result<(), Unsupported> {
        // Parameter 2 contains the image resolution
        let res = self.gp0_command.get(2)?;

        let width = res & 0xffff;
        let height = res >> 16;

        warn!("Unhandled image store: {}x{}", width, height);

        Ok(())
    }

    /// GP0(0xE1): Draw Mode
    fn gp0_draw_mode(&mut self) -> Result<(), Unsupported> {
        let val = self.gp0_command.get(0)?;

        self.texture_depth = match (val >> 7) & 3 {
            0 => TextureDepth::T4Bit,
            1 => TextureDepth::T8Bit,
            2 => TextureDepth::T15Bit,
            n => return Err(Unsupported::TextureDepth(n)),
        };

        self.page_base_x = (val & 0xf) as u8;
        self.page_base_y = ((val >> 4) & 1) as u8;
        self.semi_transparency = ((val >> 5) & 3) as u8;

        self.dithering = ((val >> 9) & 1) != 0;
        self.draw_to_display = ((val >> 10) & 1) != 0;
        self.texture_disable = ((val >> 11) & 1) != 0;
        self.rectangle_texture_x_flip = ((val >> 12) & 1) != 0;
        self.rectangle_texture_y_flip = ((val >> 13) & 1) != 0;

        Ok(())
    }

    /// GP0(0xE2): Set Texture Window
    fn gp0_texture_window(&mut self) -> Result<(), Unsupported> {
        let val = self.gp0_command.get(0)?;

        self.texture_window_x_mask = (val & 0x1f) as u8;
        self.texture_window_y_mask = ((val >> 5) & 0x1f) as u8;
        self.texture_window_x_offset = ((val >> 10) & 0x1f) as u8;
        self.texture_window_y_offset = ((val >> 15) & 0x1f) as u8;

        Ok(())
    }

    /// GP0(0xE3): Set Drawing Area top left
    fn gp0_drawing_area_top_left(&mut self) -> Result<(), Unsupported> {
        let val = self.gp0_command.get(0)?;

        self.drawing_area_top = ((val >> 10) & 0x3ff) as u16;
        self.drawing_area_left = (val & 0x3ff) as u16;

        Ok(())
    }

    /// GP0(0xE4): Set Drawing Area bottom right
    fn gp0_drawing_area_bottom_right(&mut self) -> Result<(), Unsupported> {
        let val = self.gp0_command.get(0)?;

        self.drawing_area_bottom = ((val >> 10) & 0x3ff) as u16;
        self.drawing_area_right = (val & 0x3ff) as u16;

        Ok(())
    }

    /// GP0(0xE5): Set Drawing Offset
    fn gp0_drawing_offset(&mut self) -> Result<(), Unsupported> {
        let val = self.gp0_command.get(0)?;

        let x = (val & 0x7ff) as u16;
        let y = ((val >> 11) & 0x7ff) as u16;

        // Values are 11bit two's complement signed values, we need to shift the value to 16bits
        // to force sign extension
        self.drawing_x_offset = ((x << 5) as i16) >> 5;
        self.drawing_y_offset = ((y << 5) as i16) >> 5;

        Ok(())
    }

    /// GP0(0xE6): Set Mask Bit Setting
    fn gp0_mask_bit_setting(&mut self) -> Result<(), Unsupported> {
        let val = self.gp0_command.get(0)?;

        self.force_set_mask_bit = (val & 1) != 0;
        self.preserve_masked_pixels = (val & 2) != 0;

        Ok(())
    }

    /// Handle writes to the GP1 command register
    pub fn gp1(&mut self, val: u32) -> Result<(), Unsupported> {
        let opcode = (val >> 24) & 0xff;

        debug!("GP1 0x{:08x}", val);

        match opcode {
            0x00 => self.gp1_reset(),
            0x01 => self.gp1_reset_command_buffer(),
            0x02 => self.gp1_acknowledge_irq(),
            0x03 => self.gp1_display_enable(val),
            0x04 => self.gp1_dma_direction(val),
            0x05 => self.gp1_display_vram_start(val),
            0x06 => self.gp1_display_horizontal_range(val),
            0x07 => self.gp1_display_vertical_range(val),
            0x08 => self.gp1_display_mode(val)?,
            _ => return Err(Unsupported::Gp1Command(val)),
        }

        Ok(())
    }

    /// GP1(0x00): soft reset
    fn gp1_reset(&mut self) {
        // Primitives already queued still belong to the renderer
        let primitives = mem::take(&mut self.primitives);

        *self = Gpu {
            primitives,
            ..Gpu::new()
        };
    }

    /// GP1(0x01): reset command buffer
    fn gp1_reset_command_buffer(&mut self) {
        self.gp0_command.clear();
        self.gp0_words_remaining = 0;
        self.gp0_mode = Gp0Mode::Command;
    }

    /// GP1(0x02): acknowledge interrupt
    fn gp1_acknowledge_irq(&mut self) {
        self.interrupt = false;
    }

    /// GP1(0x03): display enable
    fn gp1_display_enable(&mut self, val: u32) {
        self.display_disabled = val & 1 != 0;
    }

    /// GP1(0x04): DMA direction
    fn gp1_dma_direction(&mut self, val: u32) {
        self.dma_direction = match val & 3 {
            0 => DmaDirection::Off,
            1 => DmaDirection::Fifo,
            2 => DmaDirection::CpuToGp0,
            _ => DmaDirection::VRamToCpu,
        };
    }

    /// GP1(0x05): display VRAM start
    fn gp1_display_vram_start(&mut self, val: u32) {
        self.display_vram_x_start = (val & 0x3fe) as u16;
        self.display_vram_y_start = ((val >> 10) & 0x1ff) as u16;
    }

    /// GP1(0x06): display horizontal range
    fn gp1_display_horizontal_range(&mut self, val: u32) {
        self.display_horiz_start = (val & 0xfff) as u16;
        self.display_horiz_end = ((val >> 12) & 0xfff) as u16;
    }

    /// GP1(0x07): display vertical range
    fn gp1_display_vertical_range(&mut self, val: u32) {
        self.display_line_start = (val & 0x3ff) as u16;
        self.display_line_end = ((val >> 10) & 0x3ff) as u16;
    }

    /// GP1(0x08): display mode
    fn gp1_display_mode(&mut self, val: u32) -> Result<(), Unsupported> {
        if val & 0x80 != 0 {
            return Err(Unsupported::DisplayMode(val));
        }

        let hr1 = (val & 3) as u8;
        let hr2 = ((val >> 6) & 1) as u8;

        self.hres = HorizontalRes::from_fields(hr1, hr2);

        self.vres = match val & 0x4 != 0 {
            false => VerticalRes::Y240Lines,
            true => VerticalRes::Y480Lines,
        };

        self.vmode = match val & 0x8 != 0 {
            false => VMode::Ntsc,
            true => VMode::Pal,
        };

        self.display_depth = match val & 0x10 != 0 {
            false => DisplayDepth::D15Bits,
            true => DisplayDepth::D24Bits,
        };

        self.interlaced = val & 0x20 != 0;

        Ok(())
    }
}

impl Default for Gpu {
    fn default() -> Self {
        Gpu::new()
    }
}

/// Possible states for the GP0 command register
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Gp0Mode {
    /// Default mode: handling commands
    Command,
    /// Loading an image into VRAM
    ImageLoad,
}

/// Depth of the pixel values in a texture page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextureDepth {
    /// 4 bits per pixel
    T4Bit = 0,
    /// 8 bits per pixel
    T8Bit = 1,
    /// 15 bits per pixel
    T15Bit = 2,
}

/// Interlaced output splits each frame in two fields
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    /// Top field (odd lines).
    Top = 1,
    /// Bottom field (even lines)
    Bottom = 0,
}

/// Video output horizontal resolution
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HorizontalRes(u8);

impl HorizontalRes {
    /// Create a new HorizontalRes instance from the 2 bit field `hr1` and the one bit field `hr2`
    fn from_fields(hr1: u8, hr2: u8) -> HorizontalRes {
        let hr = (hr2 & 1) | ((hr1 & 3) << 1);

        HorizontalRes(hr)
    }

    /// Retrieve value of bits [18:16] of the status register
    fn into_status(self) -> u32 {
        let HorizontalRes(hr) = self;

        (hr as u32) << 16
    }
}

/// Video output vertical resolution
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VerticalRes {
    /// 240 lines
    Y240Lines = 0,
    /// 480 lines (only available for interlaced output)
    Y480Lines = 1,
}

/// Video Modes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VMode {
    /// NTSC: 480i60H
    Ntsc = 0,
    /// PAL: 576i50Hz
    Pal = 1,
}

/// Display area color depth
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayDepth {
    /// 15 bits per pixel
    D15Bits = 0,
    /// 24 bits per pixel
    D24Bits = 1,
}

/// Requested DMA direction
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DmaDirection {
    Off = 0,
    Fifo = 1,
    CpuToGp0 = 2,
    VRamToCpu = 3,
}
