// DMA transfers started through register writes on the bus

use super::asm::bios_with_program;
use crate::error::Unsupported;
use crate::psx::bios::Bios;
use crate::psx::bus::Bus;

const DICR: u32 = 0x1f80_10f4;
const IRQ_STATUS: u32 = 0x1f80_1070;
const IRQ_MASK: u32 = 0x1f80_1074;

fn bus() -> Bus {
    let bios = Bios::from_bytes(bios_with_program(&[])).unwrap();

    Bus::new(bios, 0)
}

/// Clear a 4 entry ordering table ending at 0x100
fn clear_ordering_table(bus: &mut Bus) {
    bus.store::<u32>(0x1f80_10e0, 0x100).unwrap();
    bus.store::<u32>(0x1f80_10e4, 4).unwrap();
    // To RAM, decrementing, manual sync, enable and trigger
    bus.store::<u32>(0x1f80_10e8, 0x1100_0002).unwrap();
}

#[test]
fn test_ordering_table_clear() {
    let mut bus = bus();

    clear_ordering_table(&mut bus);

    let ram = bus.ram();
    assert_eq!(ram.load::<u32>(0x100), 0xfc);
    assert_eq!(ram.load::<u32>(0xfc), 0xf8);
    assert_eq!(ram.load::<u32>(0xf8), 0xf4);
    assert_eq!(ram.load::<u32>(0xf4), 0x00ff_ffff);
    // Nothing written past the table
    assert_eq!(ram.load::<u32>(0xf0), 0);

    // Enable and trigger are cleared once the transfer completes
    assert_eq!(bus.load::<u32>(0x1f80_10e8).unwrap(), 0x0000_0002);
}

#[test]
fn test_gpu_block_transfer() {
    let mut bus = bus();

    // Drawing offset (3, 1) then mask bit setting
    bus.ram_mut().store::<u32>(0x200, 0xe500_0803);
    bus.ram_mut().store::<u32>(0x204, 0xe600_0001);

    bus.store::<u32>(0x1f80_10a0, 0x200).unwrap();
    // One block of two words
    bus.store::<u32>(0x1f80_10a4, 0x0001_0002).unwrap();
    // From RAM, incrementing, request sync, enable
    bus.store::<u32>(0x1f80_10a8, 0x0100_0201).unwrap();

    assert_eq!(bus.gpu().drawing_offset(), (3, 1));
    assert_eq!((bus.gpu().status() >> 11) & 1, 1);
}

#[test]
fn test_gpu_linked_list_transfer() {
    let mut bus = bus();

    // First packet: one command, points to 0x300
    bus.ram_mut().store::<u32>(0x200, 0x0100_0300);
    bus.ram_mut().store::<u32>(0x204, 0xe500_0005);
    // Last packet: empty
    bus.ram_mut().store::<u32>(0x300, 0x00ff_ffff);

    bus.store::<u32>(0x1f80_10a0, 0x200).unwrap();
    // From RAM, linked list, enable
    bus.store::<u32>(0x1f80_10a8, 0x0100_0401).unwrap();

    assert_eq!(bus.gpu().drawing_offset(), (5, 0));
    assert_eq!(bus.load::<u32>(0x1f80_10a8).unwrap() & (1 << 24), 0);
}

#[test]
fn test_channel_not_started_until_enabled() {
    let mut bus = bus();

    bus.store::<u32>(0x1f80_10e0, 0x100).unwrap();
    bus.store::<u32>(0x1f80_10e4, 4).unwrap();
    // Manual sync without the trigger bit
    bus.store::<u32>(0x1f80_10e8, 0x0100_0002).unwrap();

    assert_eq!(bus.ram().load::<u32>(0x100), 0);
    assert_eq!(bus.load::<u32>(0x1f80_10e8).unwrap(), 0x0100_0002);
}

#[test]
fn test_completion_raises_interrupt() {
    let mut bus = bus();

    // Master enable and OTC channel enable
    bus.store::<u32>(DICR, (1 << 23) | (1 << 22)).unwrap();
    bus.store::<u32>(IRQ_MASK, 1 << 3).unwrap();

    clear_ordering_table(&mut bus);

    let dicr = bus.load::<u32>(DICR).unwrap();
    assert_eq!(dicr >> 24, 0xc0);
    assert_eq!(bus.load::<u32>(IRQ_STATUS).unwrap(), 1 << 3);
    assert!(bus.irq_pending());

    // Acknowledge the channel flag, then the controller
    bus.store::<u32>(DICR, (1 << 23) | (1 << 22) | (1 << 30)).unwrap();
    assert_eq!(bus.load::<u32>(DICR).unwrap() >> 24, 0);

    bus.store::<u32>(IRQ_STATUS, !(1 << 3)).unwrap();
    assert!(!bus.irq_pending());
}

#[test]
fn test_completion_without_irq_enable() {
    let mut bus = bus();

    bus.store::<u32>(DICR, 1 << 23).unwrap();

    clear_ordering_table(&mut bus);

    assert_eq!(bus.load::<u32>(DICR).unwrap() >> 24, 0);
    assert_eq!(bus.irq().status(), 0);
}

#[test]
fn test_unsupported_transfers() {
    let mut bus = bus();

    assert_eq!(
        bus.store::<u32>(0x1f80_10e8, 0x0000_0600),
        Err(Unsupported::DmaSyncMode(3))
    );

    bus.store::<u32>(0x1f80_10c4, 1).unwrap();
    assert_eq!(
        bus.store::<u32>(0x1f80_10c8, 0x1100_0001),
        Err(Unsupported::DmaTransfer {
            port: "SPU",
            direction: "from RAM"
        })
    );

    assert_eq!(
        bus.store::<u32>(0x1f80_10e8, 0x0100_0400),
        Err(Unsupported::LinkedListTransfer {
            port: "OTC",
            direction: "to RAM"
        })
    );
}
