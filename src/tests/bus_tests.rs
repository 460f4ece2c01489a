// Interconnect routing tests

use super::asm::bios_with_program;
use crate::error::Unsupported;
use crate::psx::bios::Bios;
use crate::psx::bus::Bus;

fn bus() -> Bus {
    let bios = Bios::from_bytes(bios_with_program(&[0x1234_5678, 0x9abc_def0])).unwrap();

    Bus::new(bios, 0)
}

#[test]
fn test_ram_mirrored_in_every_region() {
    let mut bus = bus();

    bus.store::<u32>(0x0000_0010, 0xcafe_babe).unwrap();

    assert_eq!(bus.load::<u32>(0x8000_0010).unwrap(), 0xcafe_babe);
    assert_eq!(bus.load::<u32>(0xa000_0010).unwrap(), 0xcafe_babe);

    bus.store::<u16>(0xa000_0012, 0x1234).unwrap();
    bus.store::<u8>(0x8000_0010, 0x42).unwrap();

    assert_eq!(bus.load::<u32>(0x10).unwrap(), 0x1234_ba42);
}

#[test]
fn test_bios_reads() {
    let mut bus = bus();

    for addr in [0xbfc0_0000, 0x9fc0_0000, 0x1fc0_0000] {
        assert_eq!(bus.load::<u32>(addr).unwrap(), 0x1234_5678);
    }

    assert_eq!(bus.load::<u8>(0xbfc0_0007).unwrap(), 0x9a);
}

#[test]
fn test_bios_is_read_only() {
    let mut bus = bus();

    bus.store::<u32>(0xbfc0_0000, 0).unwrap();

    assert_eq!(bus.load::<u32>(0xbfc0_0000).unwrap(), 0x1234_5678);
}

#[test]
fn test_unmapped_reads_return_garbage() {
    let mut bus = bus();

    assert_eq!(bus.load::<u32>(0x1f90_0000).unwrap(), 0xdead_beef);
    // The BIOS doesn't answer halfword reads
    assert_eq!(bus.load::<u16>(0xbfc0_0000).unwrap(), 0xbeef);

    // Dropped without error
    bus.store::<u32>(0x1f90_0000, 1).unwrap();
}

#[test]
fn test_stubbed_peripherals() {
    let mut bus = bus();

    assert_eq!(bus.load::<u16>(0x1f80_1c00).unwrap(), 0);
    assert_eq!(bus.load::<u32>(0x1f80_1100).unwrap(), 0);
    assert_eq!(bus.load::<u16>(0x1f80_1124).unwrap(), 0);
    assert_eq!(bus.load::<u8>(0x1f00_0084).unwrap(), 0xff);

    bus.store::<u16>(0x1f80_1d80, 0x3fff).unwrap();
    bus.store::<u32>(0x1f80_1118, 0).unwrap();
    bus.store::<u8>(0x1f80_2041, 0).unwrap();
}

#[test]
fn test_unaligned_access_is_rejected() {
    let mut bus = bus();

    assert_eq!(
        bus.load::<u32>(0x8000_0002),
        Err(Unsupported::UnalignedAccess {
            addr: 0x8000_0002,
            width: 4
        })
    );
    assert_eq!(
        bus.store::<u16>(0x1, 0),
        Err(Unsupported::UnalignedAccess { addr: 0x1, width: 2 })
    );
}

#[test]
fn test_memory_control() {
    let mut bus = bus();

    bus.store::<u32>(0x1f80_1000, 0x1f00_0000).unwrap();
    bus.store::<u32>(0x1f80_1004, 0x1f80_2000).unwrap();
    bus.store::<u32>(0x1f80_1008, 0x0013_243f).unwrap();

    assert_eq!(bus.load::<u32>(0x1f80_1008).unwrap(), 0x0013_243f);

    assert_eq!(
        bus.store::<u32>(0x1f80_1000, 0),
        Err(Unsupported::ExpansionBase { region: 1, value: 0 })
    );
    assert_eq!(
        bus.store::<u32>(0x1f80_1004, 0x1f80_3000),
        Err(Unsupported::ExpansionBase {
            region: 2,
            value: 0x1f80_3000
        })
    );
}

#[test]
fn test_ram_size_and_cache_control() {
    let mut bus = bus();

    bus.store::<u32>(0x1f80_1060, 0x0000_0b88).unwrap();
    bus.store::<u32>(0xfffe_0130, 0x0001_e988).unwrap();

    assert_eq!(bus.load::<u32>(0x1f80_1060).unwrap(), 0x0000_0b88);
    assert_eq!(bus.load::<u32>(0xfffe_0130).unwrap(), 0x0001_e988);
    assert_eq!(bus.cache_control(), 0x0001_e988);
}

#[test]
fn test_irq_registers() {
    let mut bus = bus();

    bus.store::<u32>(0x1f80_1074, 0x0000_000d).unwrap();
    assert_eq!(bus.load::<u32>(0x1f80_1074).unwrap(), 0xd);

    bus.store::<u16>(0x1f80_1074, 0x0008).unwrap();
    assert_eq!(bus.load::<u16>(0x1f80_1074).unwrap(), 0x8);

    assert_eq!(bus.load::<u32>(0x1f80_1070).unwrap(), 0);
    assert!(!bus.irq_pending());
}
