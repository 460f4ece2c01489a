// GPU register interface as seen from the CPU

use super::asm::*;
use crate::error::Unsupported;
use crate::psx::gpu::primitives::{Color, Position, Primitive, Vertex};

const GP0: u32 = 0x1f80_1810;
const GP1: u32 = 0x1f80_1814;

#[test]
fn test_status_after_reset() {
    let mut psx = psx_with_program(&[]);

    assert_eq!(psx.bus_mut().load::<u32>(GP1).unwrap(), 0x1c80_2000);
    assert_eq!(psx.bus_mut().load::<u32>(GP0).unwrap(), 0);
}

#[test]
fn test_dma_request_follows_direction() {
    let mut psx = psx_with_program(&[]);
    let bus = psx.bus_mut();

    bus.store::<u32>(GP1, 0x0400_0002).unwrap();
    let status = bus.load::<u32>(GP1).unwrap();
    assert_eq!((status >> 29) & 3, 2);
    assert_eq!((status >> 25) & 1, (status >> 28) & 1);
    assert_eq!((status >> 25) & 1, 1);

    bus.store::<u32>(GP1, 0x0400_0001).unwrap();
    assert_eq!((bus.load::<u32>(GP1).unwrap() >> 25) & 1, 1);

    bus.store::<u32>(GP1, 0x0400_0000).unwrap();
    assert_eq!((bus.load::<u32>(GP1).unwrap() >> 25) & 1, 0);
}

#[test]
fn test_cpu_writes_gp1() {
    let mut psx = psx_with_program(&[
        lui(T0, 0x1f80),
        ori(T0, T0, 0x1814),
        lui(T1, 0x0300),
        sw(T1, 0, T0),
        lw(T2, 0, T0),
        NOP,
    ]);

    step_n(&mut psx, 6);

    // Display enabled
    assert_eq!((psx.cpu().gpr(T2) >> 23) & 1, 0);
}

#[test]
fn test_draw_command_through_bus() {
    let mut psx = psx_with_program(&[]);
    let bus = psx.bus_mut();

    for word in [
        0x2800_00ff,
        0x0000_0000,
        0x0000_0010,
        0x0010_0000,
        0x0010_0010,
    ] {
        bus.store::<u32>(GP0, word).unwrap();
    }

    let red = Color { r: 0xff, g: 0, b: 0 };
    let v = |x, y| Vertex::new(Position { x, y }, red);

    assert_eq!(
        bus.gpu_mut().take_primitives(),
        vec![Primitive::Quad([v(0, 0), v(16, 0), v(0, 16), v(16, 16)])]
    );
    assert!(bus.gpu_mut().take_primitives().is_empty());
}

#[test]
fn test_unknown_commands() {
    let mut psx = psx_with_program(&[]);
    let bus = psx.bus_mut();

    assert_eq!(
        bus.store::<u32>(GP0, 0xff00_0000),
        Err(Unsupported::Gp0Command(0xff00_0000))
    );
    assert_eq!(
        bus.store::<u32>(GP1, 0x4000_0000),
        Err(Unsupported::Gp1Command(0x4000_0000))
    );
}

#[test]
fn test_image_load_consumes_pixels() {
    let mut psx = psx_with_program(&[]);
    let bus = psx.bus_mut();

    // 2x2 pixels: two words of data
    bus.store::<u32>(GP0, 0xa000_0000).unwrap();
    bus.store::<u32>(GP0, 0x0000_0000).unwrap();
    bus.store::<u32>(GP0, 0x0002_0002).unwrap();
    assert!(bus.gpu().loading_image());

    // Would be an unknown command if it wasn't consumed as pixel data
    bus.store::<u32>(GP0, 0xffff_ffff).unwrap();
    bus.store::<u32>(GP0, 0xffff_ffff).unwrap();
    assert!(!bus.gpu().loading_image());

    bus.store::<u32>(GP0, 0xe500_0001).unwrap();
    assert_eq!(bus.gpu().drawing_offset(), (1, 0));
}
