//! Sparse coordinate master.
//!
//! The body is authored once as coordinate lists and drawn at a per-frame
//! offset. Legs, sparkles and horn effects are override layers in absolute
//! frame coordinates. Symbols resolve through [`palettes::master`].
//!
//! [`palettes::master`]: super::palettes::master

use super::palettes::MANE;
use crate::animation::{AnimationDef, FrameDef};
use crate::grid::PixelGrid;
use crate::recolor::{LinearShift, Recolor};

/// Character frame edge, in pixels.
pub const FRAME_SIZE: u32 = 32;

/// Projectile frame edge, in pixels.
pub const PROJECTILE_SIZE: u32 = 16;

type Coords = &'static [(i32, i32)];

const BODY: Coords = &[
    (12, 18), (13, 18), (14, 18), (15, 18), (16, 18), (17, 18), (18, 18),
    (11, 19), (12, 19), (13, 19), (14, 19), (15, 19), (16, 19), (17, 19), (18, 19), (19, 19),
    (11, 20), (12, 20), (13, 20), (14, 20), (15, 20), (16, 20), (17, 20), (18, 20), (19, 20),
    (11, 21), (12, 21), (13, 21), (14, 21), (15, 21), (16, 21), (17, 21), (18, 21), (19, 21),
    (12, 22), (13, 22), (14, 22), (15, 22), (16, 22), (17, 22), (18, 22),
];

const SHADOW: Coords = &[(12, 21), (13, 21), (14, 21), (12, 22), (13, 22), (14, 22)];

const HEAD: Coords = &[
    (18, 13), (19, 13), (20, 13),
    (17, 14), (18, 14), (19, 14), (20, 14), (21, 14),
    (17, 15), (18, 15), (19, 15), (20, 15), (21, 15),
    (17, 16), (18, 16), (19, 16), (20, 16), (21, 16),
    (18, 17), (19, 17), (20, 17), (21, 17),
];

const HORN: Coords = &[(22, 10), (22, 11), (23, 11), (21, 12), (22, 12), (21, 13), (22, 13)];

const OUTLINE: Coords = &[
    (21, 10), (22, 9), (23, 10), (24, 11),
    (22, 14), (22, 15), (22, 16), (22, 17),
    (21, 17), (20, 18), (19, 18),
    (10, 19), (10, 20), (10, 21),
    (11, 22), (11, 23),
    (19, 22), (20, 21), (20, 20),
];

/// Standing legs, top to hoof.
const LEGS: [Coords; 2] = [
    &[(13, 23), (13, 24), (13, 25), (13, 26)],
    &[(16, 23), (16, 24), (16, 25), (16, 26)],
];

const MANE_SECTIONS: [Coords; 6] = [
    &[(17, 12), (16, 13), (15, 14)],
    &[(16, 14), (15, 15), (14, 16)],
    &[(15, 16), (14, 17), (13, 18)],
    &[(14, 18), (13, 19), (12, 20)],
    &[(16, 12), (15, 13)],
    &[(17, 13), (16, 15)],
];

const TAIL_SECTIONS: [Coords; 6] = [
    &[(9, 19), (8, 20)],
    &[(9, 20), (8, 21)],
    &[(9, 21), (8, 22)],
    &[(10, 21), (9, 22)],
    &[(10, 22), (9, 23)],
    &[(11, 22), (10, 23)],
];

/// Run cycle leg poses, top to hoof, before the body bob.
const RUN_LEGS: [[Coords; 2]; 6] = [
    [&[(13, 23), (13, 24), (13, 25)], &[(16, 23), (16, 24), (16, 25)]],
    [&[(14, 23), (15, 24), (16, 25)], &[(15, 23), (15, 24), (15, 25)]],
    [&[(15, 23), (16, 24), (17, 24)], &[(12, 23), (11, 24), (10, 24)]],
    [&[(13, 23), (13, 24), (13, 25)], &[(14, 23), (13, 24), (12, 25)]],
    [&[(14, 24), (14, 25), (14, 26)], &[(15, 24), (15, 25), (15, 26)]],
    [&[(12, 23), (11, 24), (10, 24)], &[(17, 23), (18, 24), (19, 24)]],
];

const LYING_BODY: Coords = &[
    (6, 24), (7, 24), (8, 24), (9, 24), (10, 24), (11, 24), (12, 24), (13, 24),
    (5, 25), (6, 25), (7, 25), (8, 25), (9, 25), (10, 25), (11, 25), (12, 25), (13, 25), (14, 25),
    (6, 26), (7, 26), (8, 26), (9, 26), (10, 26), (11, 26), (12, 26), (13, 26),
];

const LYING_HEAD: Coords = &[(14, 23), (15, 23), (16, 23), (14, 24), (15, 24), (16, 24), (17, 24)];

fn canvas() -> PixelGrid {
    PixelGrid::new(FRAME_SIZE, FRAME_SIZE)
}

/// Sections drawn with the mane colors in rotation.
fn push_rainbow(grid: &mut PixelGrid, sections: &[Coords]) {
    for (i, section) in sections.iter().enumerate() {
        grid.push_fill(MANE[i % MANE.len()], section);
    }
}

/// Single pixels drawn with successive mane colors.
fn push_rainbow_points(grid: &mut PixelGrid, coords: Coords) {
    for (i, &(x, y)) in coords.iter().enumerate() {
        grid.push_point(x, y, MANE[i % MANE.len()]);
    }
}

/// Full standing unicorn: body, shadow, outline, legs, mane and tail.
pub fn base() -> PixelGrid {
    let mut grid = canvas();
    grid.push_fill('b', BODY);
    grid.push_fill('B', SHADOW);
    grid.push_fill('b', HEAD);
    grid.push_fill('h', HORN);
    grid.push_fill('H', &[(23, 10), (22, 11)]);
    grid.push_point(20, 15, 'e');
    grid.push_point(20, 14, 'E');
    grid.push_fill('o', OUTLINE);
    for leg in LEGS {
        grid.push_fill('b', leg);
        if let Some(&(x, y)) = leg.last() {
            grid.push_point(x, y, 'l');
        }
    }
    push_rainbow(&mut grid, &MANE_SECTIONS);
    push_rainbow(&mut grid, &TAIL_SECTIONS);
    grid
}

/// Body without legs, shadow or outline, for posed frames.
pub fn body_no_legs() -> PixelGrid {
    let mut grid = canvas();
    grid.push_fill('b', BODY);
    grid.push_fill('b', HEAD);
    grid.push_fill('h', HORN);
    grid.push_point(23, 10, 'H');
    grid.push_point(20, 15, 'e');
    grid.push_point(20, 14, 'E');
    push_rainbow(&mut grid, &MANE_SECTIONS);
    push_rainbow(&mut grid, &TAIL_SECTIONS);
    grid
}

/// An override layer: `body` coordinates in body white, `hooves` as hooves.
fn legs(body: Coords, hooves: Coords) -> PixelGrid {
    let mut grid = canvas();
    grid.push_fill('b', body);
    grid.push_fill('l', hooves);
    grid
}

fn layer(fills: &[(char, Coords)]) -> PixelGrid {
    let mut grid = canvas();
    for &(symbol, coords) in fills {
        grid.push_fill(symbol, coords);
    }
    grid
}

fn idle() -> AnimationDef {
    let frames = (0..4)
        .map(|i| {
            let bob = if i == 1 || i == 2 { -1 } else { 0 };
            let frame = FrameDef::new(base().translated(0, bob));
            match i {
                1 => frame.with_overlay(layer(&[('s', &[(24, 9)])])),
                3 => frame.with_overlay(layer(&[('s', &[(25, 10)])])),
                _ => frame,
            }
        })
        .collect();
    AnimationDef::new("idle", frames)
}

fn run() -> AnimationDef {
    let frames = RUN_LEGS
        .iter()
        .enumerate()
        .map(|(i, pose)| {
            let bob = match i {
                2 | 5 => -2,
                1 | 3 => -1,
                _ => 0,
            };
            let mut overlay = canvas();
            for leg in pose {
                for (j, &(x, y)) in leg.iter().enumerate() {
                    let symbol = if j + 1 == leg.len() { 'l' } else { 'b' };
                    overlay.push_point(x, y + bob, symbol);
                }
            }
            if bob == -2 {
                for mx in 0..3 {
                    overlay.push_point(8 - mx, 14 + mx + bob, MANE[mx as usize]);
                }
            }
            FrameDef::new(body_no_legs().translated(0, bob)).with_overlay(overlay)
        })
        .collect();
    AnimationDef::new("run", frames)
}

fn jump() -> AnimationDef {
    AnimationDef::new(
        "jump",
        vec![
            FrameDef::new(body_no_legs().translated(0, 2)).with_overlay(legs(
                &[(13, 25), (13, 26), (16, 25), (16, 26)],
                &[(13, 27), (16, 27)],
            )),
            FrameDef::new(body_no_legs().translated(0, -2)).with_overlay(legs(
                &[(11, 22), (10, 23), (14, 22), (13, 23)],
                &[(9, 24), (12, 24)],
            )),
            FrameDef::new(body_no_legs().translated(0, -4)).with_overlay(legs(
                &[(10, 20), (9, 21), (15, 20), (16, 21)],
                &[(8, 22), (17, 22)],
            )),
        ],
    )
}

fn fall() -> AnimationDef {
    let mut falling = legs(
        &[(12, 23), (11, 24), (11, 25), (16, 23), (17, 24), (17, 25)],
        &[(10, 26), (18, 26)],
    );
    push_rainbow_points(&mut falling, &[(15, 11), (14, 10), (13, 9)]);

    AnimationDef::new(
        "fall",
        vec![
            FrameDef::new(body_no_legs()).with_overlay(falling),
            FrameDef::new(body_no_legs().translated(0, 1)).with_overlay(legs(
                &[(12, 24), (11, 25), (11, 26), (16, 24), (17, 25), (17, 26)],
                &[(10, 27), (18, 27)],
            )),
        ],
    )
}

fn attack() -> AnimationDef {
    AnimationDef::new(
        "attack",
        vec![
            FrameDef::new(body_no_legs().translated(-2, 0)).with_overlay(legs(
                &[(11, 23), (11, 24), (11, 25), (14, 23), (14, 24), (14, 25)],
                &[(11, 26), (14, 26)],
            )),
            FrameDef::new(body_no_legs().translated(2, 0))
                .with_overlay(layer(&[
                    ('h', &[(25, 10), (26, 9), (27, 8)]),
                    ('H', &[(28, 7)]),
                    ('s', &[(28, 8)]),
                    ('S', &[(27, 9)]),
                ]))
                .with_overlay(legs(
                    &[(15, 23), (15, 24), (15, 25), (18, 23), (18, 24), (18, 25)],
                    &[(15, 26), (18, 26)],
                )),
            FrameDef::new(body_no_legs().translated(3, 0))
                .with_overlay(layer(&[
                    ('h', &[(26, 10), (27, 9), (28, 8)]),
                    ('s', &[(29, 7), (30, 8), (29, 9), (28, 6)]),
                    ('S', &[(30, 6), (31, 7), (30, 9), (28, 5)]),
                ]))
                .with_overlay(legs(
                    &[(16, 23), (16, 24), (16, 25), (19, 23), (19, 24), (19, 25)],
                    &[(16, 26), (19, 26)],
                )),
            FrameDef::new(base()),
        ],
    )
}

fn shoot() -> AnimationDef {
    AnimationDef::new(
        "shoot",
        vec![
            FrameDef::new(base()).with_overlay(layer(&[
                ('S', &[(24, 9), (25, 10), (24, 11)]),
                ('s', &[(24, 10)]),
            ])),
            FrameDef::new(base()).with_overlay(layer(&[
                ('S', &[(24, 8), (25, 9), (26, 10), (25, 11), (24, 10)]),
                ('s', &[(24, 9), (25, 10), (24, 10)]),
                ('H', &[(23, 10), (22, 11)]),
            ])),
            FrameDef::new(base().translated(-1, 0)).with_overlay(layer(&[
                ('s', &[(26, 9), (27, 9), (28, 9)]),
                ('S', &[(26, 8), (27, 8), (28, 8), (26, 10), (27, 10), (28, 10)]),
                ('s', &[(25, 9)]),
                ('6', &[(24, 8)]),
                ('5', &[(24, 10)]),
            ])),
            FrameDef::new(base()).with_overlay(layer(&[('S', &[(24, 10), (25, 9)])])),
        ],
    )
}

fn hit() -> AnimationDef {
    AnimationDef::new(
        "hit",
        vec![
            FrameDef::new(base()).with_effect(Recolor::Linear(LinearShift::HIT_FLASH)),
            FrameDef::new(base().translated(-3, -1)),
            FrameDef::new(base().translated(-1, 0)),
        ],
    )
}

fn lying() -> PixelGrid {
    let mut grid = canvas();
    grid.push_fill('b', LYING_BODY);
    grid.push_fill('b', LYING_HEAD);
    grid.push_fill('h', &[(17, 22), (18, 21), (18, 22)]);
    grid.push_point(16, 23, 'o');
    push_rainbow_points(&mut grid, &[(13, 23), (12, 22), (11, 22), (10, 23), (9, 23)]);
    push_rainbow_points(&mut grid, &[(4, 25), (3, 25), (3, 26), (4, 26)]);
    grid
}

fn death() -> AnimationDef {
    AnimationDef::new(
        "death",
        vec![
            FrameDef::new(base()).with_effect(Recolor::Linear(LinearShift::DEATH_FLASH)),
            FrameDef::new(body_no_legs().translated(-2, 1)).with_overlay(legs(
                &[(10, 24), (9, 25), (9, 26), (14, 24), (13, 25), (13, 26)],
                &[(8, 27), (12, 27)],
            )),
            FrameDef::new(body_no_legs().translated(-3, 4)).with_overlay(legs(
                &[(8, 27), (9, 27), (10, 27), (12, 27), (13, 27), (14, 27)],
                &[],
            )),
            FrameDef::new(lying()),
            FrameDef::new(lying()).with_effect(Recolor::FADE_HALF),
        ],
    )
}

/// Every master animation, in sheet row order.
pub fn animations() -> Vec<AnimationDef> {
    vec![idle(), run(), jump(), fall(), attack(), shoot(), hit(), death()]
}

/// The four-frame magic orb: a fixed core with a rotating rainbow ring.
pub fn projectile() -> AnimationDef {
    const RING: Coords = &[(7, 7), (8, 6), (9, 7), (10, 8), (10, 9), (9, 10), (8, 10), (7, 9), (7, 8)];

    let frames = (0..4usize)
        .map(|i| {
            let mut grid = PixelGrid::new(PROJECTILE_SIZE, PROJECTILE_SIZE);
            grid.push_fill('s', &[(8, 8), (9, 8), (8, 9), (9, 9)]);
            for (j, &(x, y)) in RING.iter().enumerate() {
                grid.push_point(x, y, MANE[(j + i) % MANE.len()]);
            }
            let trail = 5 - (i % 2) as i32;
            grid.push_point(trail, 8, 'S');
            grid.push_point(trail - 1, 7, '6');
            grid.push_point(trail - 1, 9, '5');
            FrameDef::new(grid)
        })
        .collect();
    AnimationDef::new("projectile", frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{render_frame, sequence};
    use crate::character::palettes;
    use crate::compositor::compose;
    use crate::variant::Variant;
    use image::Rgba;

    fn master() -> Variant {
        Variant::master("rainbow", palettes::master())
    }

    #[test]
    fn test_animation_table() {
        let counts: Vec<(String, usize)> =
            animations().iter().map(|a| (a.name.clone(), a.frame_count())).collect();
        let expected = [
            ("idle", 4),
            ("run", 6),
            ("jump", 3),
            ("fall", 2),
            ("attack", 4),
            ("shoot", 4),
            ("hit", 3),
            ("death", 5),
        ];
        assert_eq!(counts.len(), expected.len());
        for ((name, count), (want_name, want_count)) in counts.iter().zip(expected) {
            assert_eq!(name, want_name);
            assert_eq!(*count, want_count, "{}", name);
        }
    }

    #[test]
    fn test_every_frame_is_32_square() {
        for anim in animations() {
            for frame in &anim.frames {
                assert_eq!((frame.base.width(), frame.base.height()), (32, 32));
            }
        }
    }

    #[test]
    fn test_base_horn_and_outline() {
        let canvas = compose(&base(), &palettes::master());
        assert_eq!(*canvas.get_pixel(22, 10), Rgba([255, 215, 100, 255]));
        assert_eq!(*canvas.get_pixel(22, 11), Rgba([255, 240, 180, 255]));
        assert_eq!(*canvas.get_pixel(22, 9), Rgba([60, 50, 70, 255]));
        // mane drawn over the body
        assert_eq!(*canvas.get_pixel(13, 18), Rgba([255, 230, 100, 255]));
    }

    #[test]
    fn test_idle_bob_shifts_body() {
        let frames = sequence(&animations()[0], &master(), 1);
        assert_eq!(*frames[0].canvas.get_pixel(22, 10), Rgba([255, 215, 100, 255]));
        assert_eq!(*frames[1].canvas.get_pixel(22, 9), Rgba([255, 215, 100, 255]));
        // sparkle over the shifted outline
        assert_eq!(*frames[1].canvas.get_pixel(24, 9), Rgba([255, 255, 200, 255]));
    }

    #[test]
    fn test_hit_flash_brightens() {
        let hit = &animations()[6];
        let frame = render_frame(hit, 0, &master(), 1).unwrap();
        // eye (60, 50, 70) + (100, 50, 50)
        assert_eq!(*frame.canvas.get_pixel(20, 15), Rgba([160, 100, 120, 255]));
        assert_eq!(frame.canvas.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_death_fades_last_frame() {
        let death = &animations()[7];
        let frames = sequence(death, &master(), 1);
        assert_eq!(*frames[3].canvas.get_pixel(6, 24), Rgba([255, 250, 245, 255]));
        assert_eq!(*frames[4].canvas.get_pixel(6, 24), Rgba([255, 250, 245, 127]));
        assert_eq!(frames[4].canvas.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_projectile_ring_rotates() {
        let frames = sequence(&projectile(), &master(), 1);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].canvas.dimensions(), (16, 16));
        let palette = palettes::master();
        assert_eq!(Some(*frames[0].canvas.get_pixel(7, 7)), palette.get(MANE[0]));
        assert_eq!(Some(*frames[1].canvas.get_pixel(7, 7)), palette.get(MANE[1]));
        assert_eq!(*frames[0].canvas.get_pixel(8, 8), Rgba([255, 255, 200, 255]));
    }

    #[test]
    fn test_projectile_trail_alternates() {
        let frames = sequence(&projectile(), &master(), 1);
        assert_eq!(*frames[0].canvas.get_pixel(5, 8), Rgba([255, 200, 255, 255]));
        assert_eq!(*frames[1].canvas.get_pixel(4, 8), Rgba([255, 200, 255, 255]));
    }
}
