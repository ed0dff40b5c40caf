//! Magic multipliers for the slider attack tables.
//!
//! Found by an offline random search and verified against every occupancy
//! subset of each square's relevant mask. Colliding indices were checked to
//! agree on the stored attack set, so lookups never need a collision test.

#[rustfmt::skip]
pub(super) const BISHOP_MAGICS: [u64; 25] = [
    0x2044080000048003, 0x1024000008180020, 0x004000004a001a20,
    0x0102000020000011, 0x0b21800002001030, 0x0011a20100000002,
    0x001c8d1000008230, 0x000f240018ac0300, 0x2006440640044012,
    0x0000980000387080, 0x00a140008a230004, 0x1410280021404041,
    0x480410002c890805, 0x0010201000400080, 0x22201010d0014081,
    0x00858000400a0880, 0x4008084308000001, 0x0102000013800024,
    0x0424040001080400, 0x002400001010c020, 0x0024140410801061,
    0x0002400808930000, 0x0080200000300040, 0x1804400906004030,
    0x020a109001008040,
];

#[rustfmt::skip]
pub(super) const ROOK_MAGICS: [u64; 25] = [
    0x0300400020000002, 0x00c0800000007010, 0x5008200400020000,
    0x8406080008800900, 0x1906010008000008, 0x0041100080000008,
    0x00048000000004a0, 0x00c0100002080064, 0x01800a0080008100,
    0x0080102200001000, 0x0010a00000000800, 0x0200100004010000,
    0x0004808094000000, 0x0d09200001820201, 0x0006002200528050,
    0x8220d00088001026, 0x40121008c0440010, 0x0008a00400000400,
    0x0002100040000284, 0x0030080002000054, 0x0c10d08000390080,
    0x8009010030000000, 0x0002028100008000, 0xc009208030880000,
    0x6000812100880000,
];
