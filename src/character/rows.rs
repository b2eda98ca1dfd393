//! Dense-row unicorn art, 32x32 per frame.
//!
//! Each string is one row, left to right. Rows run a few symbols past 32
//! columns in places; the overflow is clipped at composition.

const IDLE_0: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo...ottto.",
    "...oBBBbbbbbbbbbbbbbbbo...oTttto.",
    "...oBBbbbbbbbbbbbbbbbo...otTtto..",
    "....oBbbbbbbbbbbbbbbo...ottto....",
    "....obbbbbbbbbbbbbo....otto......",
    ".....obbbbooobbbo.....oo.........",
    ".....obbo.ol.obbo..................",
    ".....obo..ol..obo.................",
    ".....ol...ol...ol.................",
    ".....ol...ol...ol.................",
    "....oll..oll..oll.................",
    "....oo...oo...oo..................",
    "................................",
    "................................",
];

const IDLE_1: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo....ottto",
    "...oBBBbbbbbbbbbbbbbbbo....oTttto",
    "...oBBbbbbbbbbbbbbbbbo....otTtto.",
    "....oBbbbbbbbbbbbbbbo....ottto...",
    "....obbbbbbbbbbbbbo.....otto.....",
    ".....obbbbooobbbo......oo........",
    ".....obbo.ol.obbo..................",
    ".....obo..ol..obo.................",
    ".....ol...ol...ol.................",
    ".....ol...ol...ol.................",
    "....oll..oll..oll.................",
    "....oo...oo...oo..................",
    "................................",
    "................................",
];

pub(super) const IDLE: &[&[&str]] = &[IDLE_0, IDLE_1, IDLE_0, IDLE_1];

const RUN_0: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo....ottto",
    "...oBBBbbbbbbbbbbbbbbbo....oTttto",
    "...oBBbbbbbbbbbbbbbbo.....otTtto.",
    "....oBbbbbbbbbbbbo.......ottto...",
    "....obbbbbbbbbbo.........oo......",
    ".....obbbooobo...................",
    "......ol...obo...................",
    ".....ol.....ol...................",
    "....ol......ol...................",
    "...ol.......ol...................",
    "...oll......oll..................",
    "...oo.......oo...................",
    "................................",
    "................................",
    "................................",
];

const RUN_1: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo......otto",
    "...oBBBbbbbbbbbbbbbbbbo.....oTtto",
    "...oBBbbbbbbbbbbbbbbo......otTto.",
    "....oBbbbbbbbbbbbbo.......otto...",
    "....obbbbbbbbbo...........oo.....",
    ".....obbooobo....................",
    ".....obo..ol.....................",
    ".....ol....ol....................",
    "......ol....ol...................",
    ".......ol....ol..................",
    ".......oll...oll.................",
    "........oo...oo..................",
    "................................",
    "................................",
    "................................",
];

const RUN_2: &[&str] = &[
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo.....otto",
    "...oBBBbbbbbbbbbbbbbbbo.....oTtto",
    "...oBBbbbbbbbbbbbbbbbo.....otTto.",
    "....oBbbbbbbbbbbbbbo......otto...",
    "....obbbbbbbbbbbbo........oo.....",
    ".....obbbooobbbo.................",
    ".....ol....ol....................",
    "......ol..ol.....................",
    ".......ol.ol.....................",
    ".......olol......................",
    "........oll......................",
    "........oo.......................",
    "................................",
    "................................",
    "................................",
    "................................",
];

const RUN_3: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo.....otto",
    "...oBBBbbbbbbbbbbbbbbbo....oTttto",
    "...oBBbbbbbbbbbbbbbbbo....otTtto.",
    "....oBbbbbbbbbbbbbbbo....ottto...",
    "....obbbbbbbbbbbbbo......oo......",
    ".....obbbbooobbbo................",
    ".....obbo.ol.obbo................",
    ".....obo..ol..obo................",
    ".....ol...ol...ol................",
    ".....ol...ol...ol................",
    "....oll..oll..oll................",
    "....oo...oo...oo.................",
    "................................",
    "................................",
    "................................",
];

pub(super) const RUN: &[&[&str]] = &[RUN_0, RUN_1, RUN_2, RUN_3, RUN_2, RUN_1];

const JUMP_0: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho....ommmmo.........",
    "........ohhhho..omMmmmmmo........",
    ".......ohhho...ommMmmmmmmo.......",
    "......ohho....ommmmmmmmmo........",
    ".....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo....ottto",
    "...oBBBbbbbbbbbbbbbbbbo....oTttto",
    "...oBBbbbbbbbbbbbbbbbo....otTtto.",
    "....oBbbbbbbbbbbbo.......ottto...",
    "....obbbbbbbbbo..........oo......",
    ".....obbolobbbo..................",
    ".....obo.ol.obo..................",
    "....oll..ol..oll.................",
    "....oo...oo...oo.................",
    "................................",
    "................................",
    "................................",
    "................................",
];

const JUMP_1: &[&str] = &[
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo.........",
    "...oBBBbbbbbbbbbbbbbbbo..........",
    "...oBBbbbbbbbbbbbbbbbo...........",
    "....oBbbbbbbbbbbbbbbo...ottto....",
    "....obbbbbbbbbbbbo.....oTttto....",
    ".....obbbbooobbbo.....otTtto.....",
    ".....obbo....obbo.....ottto......",
    "......ol......ol......oo.........",
    "......ol......ol.................",
    ".......ol......ol................",
    ".......oll.....oll...............",
    "........oo......oo...............",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
];

const JUMP_2: &[&str] = &[
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo.........",
    "...oBBBbbbbbbbbbbbbbbbo....ottto.",
    "...oBBbbbbbbbbbbbbbbbo....oTttto.",
    "....oBbbbbbbbbbbbbbbo....otTtto..",
    "....obbbbbbbbbbbbo.......ottto...",
    ".....obbbbooobbbo........oo......",
    ".....obbo....obbo................",
    "......ol......ol.................",
    "......ol......ol.................",
    ".......ol......ol................",
    ".......oll.....oll...............",
    "........oo......oo...............",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
];

const JUMP_3: &[&str] = &[
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo.........",
    "...oBBBbbbbbbbbbbbbbbbo....ottto.",
    "...oBBbbbbbbbbbbbbbbbo...oTttto..",
    "....oBbbbbbbbbbbbbbbo...otTtto...",
    "....obbbbbbbbbbbbo......ottto....",
    ".....obbbbooobbbo.......oo.......",
    ".....obbo....obbo................",
    "......ol......ol.................",
    ".....ol........ol................",
    "....ol..........ol...............",
    "...oll..........oll..............",
    "...oo............oo..............",
    "................................",
    "................................",
    "................................",
    "................................",
];

pub(super) const JUMP: &[&[&str]] = &[JUMP_0, JUMP_1, JUMP_2, JUMP_3];

const ATTACK_0: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo...ottto.",
    "...oBBBbbbbbbbbbbbbbbbo...oTttto.",
    "...oBBbbbbbbbbbbbbbbbo...otTtto..",
    "....oBbbbbbbbbbbbbbbo...ottto....",
    "....obbbbbbbbbbbbbo....otto......",
    ".....obbbbooobbbo.....oo.........",
    ".....obbo.ol.obbo..................",
    ".....obo..ol..obo.................",
    ".....ol...ol...ol.................",
    ".....ol...ol...ol.................",
    "....oll..oll..oll.................",
    "....oo...oo...oo..................",
    "................................",
    "................................",
];

const ATTACK_1: &[&str] = &[
    "................................",
    "................................",
    "................................",
    ".......ohhhhhhhhho...............",
    "......ohhhhhhhhhho...............",
    ".....ohhhhhhhhho.................",
    "....ohhhhhho....ommmmo...........",
    "...ohhhho.....omMmmmmmo..........",
    "..ohhho......ommMmmmmmmo.........",
    ".ohho.......ommmmmmmmmo..........",
    "oho...oooobbbbbbbbbbo............",
    "......obbbbbbbbbbbbbbbo..........",
    ".....obbbbbeBbbbbbbbbbbo.........",
    "....obbbbbbbbbbbbbbbbbbbo........",
    "...obbbbbbnbbBbbbbbbbbbbo........",
    "...obbbbbbbbbbbbbbbbbbbo.........",
    "..obbbbbbbbbbbBbbbbbbbo..........",
    "..oBBbbbbbbbbbbbbbbbbo...ottto...",
    ".oBBBbbbbbbbbbbbbbbbo...oTttto...",
    ".oBBbbbbbbbbbbbbbbbo...otTtto....",
    "..oBbbbbbbbbbbbbbbo...ottto......",
    "..obbbbbbbbbbbbbo....otto........",
    "...obbbbooobbbo.....oo...........",
    "...obbo.ol.obbo..................",
    "...obo..ol..obo..................",
    "...ol...ol...ol..................",
    "...ol...ol...ol..................",
    "..oll..oll..oll..................",
    "..oo...oo...oo...................",
    "................................",
    "................................",
    "................................",
];

const ATTACK_2: &[&str] = &[
    "................................",
    "................................",
    ".ohhhhhhhhhhhhhhosss.............",
    "ohhhhhhhhhhhhhhosSss.............",
    ".ohhhhhhhhhhhoosSSs..............",
    "..ohhhhhho....osSs...............",
    "...ohhho....ommmmos..............",
    "....oho...omMmmmmmmo.............",
    "....o....ommMmmmmmmo.............",
    ".........ommmmmmmmmo.............",
    "....oooobbbbbbbbbbo..............",
    "....obbbbbbbbbbbbbbbo............",
    "...obbbbbeBbbbbbbbbbbo...........",
    "..obbbbbbbbbbbbbbbbbbbo..........",
    ".obbbbbbnbbBbbbbbbbbbbo..........",
    ".obbbbbbbbbbbbbbbbbbbo...........",
    "obbbbbbbbbbbBbbbbbbbo............",
    "oBBbbbbbbbbbbbbbbbbo...ottto.....",
    "oBBBbbbbbbbbbbbbbbbo..oTttto.....",
    "oBBbbbbbbbbbbbbbbbo..otTtto......",
    ".oBbbbbbbbbbbbbbbo..ottto........",
    ".obbbbbbbbbbbbbo...otto..........",
    "..obbbbooobbbo....oo.............",
    "..obbo.ol.obbo...................",
    "..obo..ol..obo...................",
    "..ol...ol...ol...................",
    "..ol...ol...ol...................",
    ".oll..oll..oll...................",
    ".oo...oo...oo....................",
    "................................",
    "................................",
    "................................",
];

pub(super) const ATTACK: &[&[&str]] = &[ATTACK_0, ATTACK_1, ATTACK_2, ATTACK_1];

const SHOOT_0: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo...ottto.",
    "...oBBBbbbbbbbbbbbbbbbo...oTttto.",
    "...oBBbbbbbbbbbbbbbbbo...otTtto..",
    "....oBbbbbbbbbbbbbbbo...ottto....",
    "....obbbbbbbbbbbbbo....otto......",
    ".....obbbbooobbbo.....oo.........",
    ".....obbo.ol.obbo..................",
    ".....obo..ol..obo.................",
    ".....ol...ol...ol.................",
    ".....ol...ol...ol.................",
    "....oll..oll..oll.................",
    "....oo...oo...oo..................",
    "................................",
    "................................",
];

const SHOOT_1: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "...........ohos..................",
    "..........ohhoss.................",
    ".........ohhhosss................",
    "........ohhhhossss...ommmmo......",
    ".......ohhhhosssss.omMmmmmmo.....",
    "......ohhhosssss.ommMmmmmmmo.....",
    ".....ohhossss...ommmmmmmmmo......",
    "....ohosss.oooobbbbbbbbbbo.......",
    "....oss.obbbbbbbbbbbbbbbo........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo...ottto.",
    "...oBBBbbbbbbbbbbbbbbbo...oTttto.",
    "...oBBbbbbbbbbbbbbbbbo...otTtto..",
    "....oBbbbbbbbbbbbbbbo...ottto....",
    "....obbbbbbbbbbbbbo....otto......",
    ".....obbbbooobbbo.....oo.........",
    ".....obbo.ol.obbo..................",
    ".....obo..ol..obo.................",
    ".....ol...ol...ol.................",
    ".....ol...ol...ol.................",
    "....oll..oll..oll.................",
    "....oo...oo...oo..................",
    "................................",
    "................................",
];

const SHOOT_2: &[&str] = &[
    "................................",
    "................................",
    "...........ohoSs.ssssss..........",
    "..........ohhosssSSSSSss.........",
    ".........ohhhossSSSSSSSss........",
    "........ohhhhosSSSSSSSSss........",
    ".......ohhhhosSSSSSSSSs..ommmmo..",
    "......ohhhhossSSSSSss..omMmmmmmo.",
    ".....ohhhossssssss...ommMmmmmmmo.",
    "....ohhosss.........ommmmmmmmmo..",
    "...ohoss...oooobbbbbbbbbbo.......",
    "...oss..obbbbbbbbbbbbbbbo........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo........",
    "....oBBbbbbbbbbbbbbbbbbo...ottto.",
    "...oBBBbbbbbbbbbbbbbbbo...oTttto.",
    "...oBBbbbbbbbbbbbbbbbo...otTtto..",
    "....oBbbbbbbbbbbbbbbo...ottto....",
    "....obbbbbbbbbbbbbo....otto......",
    ".....obbbbooobbbo.....oo.........",
    ".....obbo.ol.obbo..................",
    ".....obo..ol..obo.................",
    ".....ol...ol...ol.................",
    ".....ol...ol...ol.................",
    "....oll..oll..oll.................",
    "....oo...oo...oo..................",
    "................................",
    "................................",
];

pub(super) const SHOOT: &[&[&str]] = &[SHOOT_0, SHOOT_1, SHOOT_2, SHOOT_1];

const HURT_0: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.ooooxxxxxxxxxxxo..........",
    "........oxxxxxxxxxxxxxxxxo........",
    ".......oxxxxxxeBxxxxxxxxxo.......",
    "......oxxxxxxxxxxxxxxxxxxxxo......",
    ".....oxxxxxxnxxBxxxxxxxxxxxo......",
    ".....oxxxxxxxxxxxxxxxxxxxxo.......",
    "....oxxxxxxxxxxxxxxxxxxxxxxo........",
    "....oxxxxxxxxxxxxxxxxxxxx...ottto.",
    "...oxxxxxxxxxxxxxxxxxxxxxxo..oTttto.",
    "...oxxxxxxxxxxxxxxxxxxxxxxo..otTtto..",
    "....oxxxxxxxxxxxxxxxxxxxxo..ottto....",
    "....oxxxxxxxxxxxxxxxxo....otto......",
    ".....oxxxxoooxxxo.....oo.........",
    ".....oxxo.ol.oxxo..................",
    ".....oxo..ol..oxo.................",
    ".....ol...ol...ol.................",
    ".....ol...ol...ol.................",
    "....oll..oll..oll.................",
    "....oo...oo...oo..................",
    "................................",
    "................................",
];

pub(super) const HURT: &[&[&str]] = &[HURT_0];

const DEATH_0: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "...........oh.....................",
    "..........ohho...................",
    ".........ohhho...................",
    "........ohhhho....ommmmo.........",
    ".......ohhhho...omMmmmmmo........",
    "......ohhho...ommMmmmmmmo........",
    ".....ohho....ommmmmmmmmo.........",
    "....oho.oooobbbbbbbbbbo..........",
    "........obbbbbbbbbbbbbbbo........",
    ".......obbbbbeBbbbbbbbbbbo.......",
    "......obbbbbbbbbbbbbbbbbbbo......",
    ".....obbbbbbnbbBbbbbbbbbbbo......",
    ".....obbbbbbbbbbbbbbbbbbbo.......",
    "....obbbbbbbbbbbBbbbbbbbo...ottto",
    "....oBBbbbbbbbbbbbbbbbbo...oTttto",
    "...oBBBbbbbbbbbbbbbbbbo...otTtto.",
    "...oBBbbbbbbbbbbbbbo.....ottto...",
    "....oBbbbbbbbbbbo........oo......",
    "....obbbbooobbbo.................",
    ".....obbooloobbbo................",
    "......olol.oloolo................",
    ".......oo...oo...................",
    "................................",
    "................................",
    "................................",
    "................................",
];

const DEATH_1: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "..ottttttttttto..................",
    ".oTTTTTTTTTTTTTo.................",
    "ohhhoommmmmmmmmmmo...............",
    "ohhobbbbbbbbbbbbbbbbbbbbbbo......",
    "ohobbbbbeBbbbbbbbbbbbbbbbbbo.....",
    "oobbbbbbbbbbbbnbBbbbbbbbbbbo.....",
    "oBBBBBBBBBBBBBBBBBBBBBBBBBBo.....",
    "ooooolooolooolooolooooloooo......",
    "................................",
    "................................",
    "................................",
    "................................",
];

const DEATH_2: &[&str] = &[
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "..s..s...s..s..s.................",
    "...s..s.s..s..s..................",
    "..s.s..s..s.s.s..................",
    "...s.s.s.s.s..s..................",
    "....sssssss......................",
    "................................",
    "................................",
    "................................",
];

pub(super) const DEATH: &[&[&str]] = &[DEATH_0, DEATH_1, DEATH_2];
