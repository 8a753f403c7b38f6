use lifepad_lib::{Catalog, Error as LifeError, World};
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;

const MOORE: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[test]
fn neighbor_counts() -> Result<(), Box<dyn Error>> {
    for &(width, height) in &[(1, 1), (1, 3), (2, 2), (3, 3), (5, 4), (7, 1)] {
        let world = World::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let expected = MOORE
                    .iter()
                    .filter(|&&(dx, dy)| world.contains((x + dx, y + dy)))
                    .count();
                let cell = world.get(x, y);
                assert_eq!(cell.neighbor_count(), expected, "at {:?}", (x, y));
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if border {
                    assert!(cell.neighbor_count() < 8);
                }
            }
        }
    }
    assert_eq!(World::new(1, 1)?.get(0, 0).neighbor_count(), 0);
    assert_eq!(World::new(3, 3)?.get(1, 1).neighbor_count(), 8);
    Ok(())
}

#[test]
fn non_positive() {
    assert_eq!(World::new(0, 5), Err(LifeError::NonPositiveError));
    assert_eq!(World::new(3, -1), Err(LifeError::NonPositiveError));
}

#[test]
fn full_3x3() -> Result<(), Box<dyn Error>> {
    let mut world = World::from_plaintext("ooo\nooo\nooo\n")?;
    world.advance();
    assert_eq!(world.plaintext(), "o.o\n...\no.o\n");
    assert_eq!(world.generation(), 1);
    Ok(())
}

#[test]
fn blinker() -> Result<(), Box<dyn Error>> {
    let mut world = World::from_plaintext(
        ".....\n\
         .....\n\
         .ooo.\n\
         .....\n\
         .....\n",
    )?;
    world.advance();
    assert_eq!(
        world.plaintext(),
        ".....\n\
         ..o..\n\
         ..o..\n\
         ..o..\n\
         .....\n"
    );
    world.advance();
    assert_eq!(
        world.plaintext(),
        ".....\n\
         .....\n\
         .ooo.\n\
         .....\n\
         .....\n"
    );
    assert_eq!(world.generation(), 2);
    Ok(())
}

#[test]
fn glider() -> Result<(), Box<dyn Error>> {
    let glider = Catalog::builtin().find("glider").unwrap();
    let velocities = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
    for (i, &(vx, vy)) in velocities.iter().enumerate() {
        let offsets = glider.variant(i as isize);

        let mut world = World::new(16, 16)?;
        world.commit_pattern((8, 8), offsets);
        world.advance_by(4);

        let mut expected = World::new(16, 16)?;
        expected.commit_pattern((8 + vx, 8 + vy), offsets);

        assert_eq!(world.population(), 5);
        assert_eq!(world.plaintext(), expected.plaintext(), "variant {}", i);
    }
    Ok(())
}

#[test]
fn block_at_corner() -> Result<(), Box<dyn Error>> {
    let mut world = World::from_plaintext("oo.\noo.\n...\n")?;
    world.advance_by(3);
    assert_eq!(world.plaintext(), "oo.\noo.\n...\n");
    Ok(())
}

#[test]
fn clear_all() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(12, 9)?;
    let mut rng = StdRng::seed_from_u64(42);
    world.randomize((0, 0), 0.5, &mut rng)?;
    world.stamp_preview((4, 4), Catalog::builtin().patterns()[0].variant(0));
    world.advance();
    for _ in 0..2 {
        world.clear_all();
        assert!(world.cells().iter().all(|c| !c.is_alive() && !c.is_preview()));
    }
    assert_eq!(world.generation(), 1);
    world.reset();
    assert_eq!(world.generation(), 0);
    Ok(())
}

#[test]
fn preview_does_not_touch_states() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(10, 10)?;
    let mut rng = StdRng::seed_from_u64(7);
    world.randomize((0, 0), 0.4, &mut rng)?;
    let before = world.plaintext();

    let lwss = Catalog::builtin().find("Lightweight spaceship").unwrap();
    world.stamp_preview((1, 5), lwss.variant(0));
    assert!(world.cells().iter().any(|c| c.is_preview()));
    assert!(world.get(0, 3).is_preview());
    assert_eq!(world.plaintext(), before);

    world.clear_previews();
    assert!(world.cells().iter().all(|c| !c.is_preview()));
    assert_eq!(world.plaintext(), before);
    Ok(())
}

#[test]
fn previews_do_not_evolve() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(6, 6)?;
    world.stamp_preview((2, 2), &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    world.advance();
    assert_eq!(world.population(), 0);
    assert!(world.get(3, 3).is_preview());
    Ok(())
}

#[test]
fn commit_out_of_bounds() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(5, 5)?;
    let glider = Catalog::builtin().variant("Glider", 0)?;
    world.commit_pattern((0, 0), glider);
    assert_eq!(world.population(), 3);
    assert!(world.get(1, 0).is_alive());
    assert!(world.get(1, 1).is_alive());
    assert!(world.get(0, 1).is_alive());

    world.stamp_preview((4, 4), glider);
    assert_eq!(world.cells().iter().filter(|c| c.is_preview()).count(), 1);
    assert!(world.get(3, 4).is_preview());
    Ok(())
}

#[test]
fn set_cell() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(5, 3)?;
    world.set_cell((4, 2), true)?;
    assert!(world.get(4, 2).is_alive());
    assert_eq!(world.set_cell((5, 0), true), Err(LifeError::SetCellError((5, 0))));
    assert_eq!(world.set_cell((0, -1), true), Err(LifeError::SetCellError((0, -1))));

    let cell = world.get_mut(0, 0);
    cell.toggle();
    assert!(cell.is_alive());
    cell.toggle();
    assert!(!cell.is_alive());
    assert_eq!(world.population(), 1);
    Ok(())
}

#[test]
#[should_panic]
fn get_out_of_bounds() {
    let world = World::new(4, 4).unwrap();
    world.get(4, 0);
}

#[test]
fn randomize() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(8, 6)?;
    let mut rng = StdRng::seed_from_u64(1);
    world.randomize((0, 0), 1.0, &mut rng)?;
    assert_eq!(world.population(), 48);
    world.randomize((0, 0), 0.0, &mut rng)?;
    assert_eq!(world.population(), 0);

    let mut world = World::new(4, 3)?;
    world.randomize((2, 1), 1.0, &mut rng)?;
    assert_eq!(world.plaintext(), "....\n..oo\n..oo\n");

    let mut a = World::new(20, 20)?;
    let mut b = World::new(20, 20)?;
    a.randomize((0, 0), 0.5, &mut StdRng::seed_from_u64(99))?;
    b.randomize((0, 0), 0.5, &mut StdRng::seed_from_u64(99))?;
    assert_eq!(a.plaintext(), b.plaintext());
    assert!(a.population() > 0 && a.population() < 400);
    Ok(())
}

#[test]
fn invalid_density() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(3, 3)?;
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        world.randomize((0, 0), 1.5, &mut rng),
        Err(LifeError::InvalidDensity(1.5))
    );
    assert!(matches!(
        world.randomize((0, 0), f64::NAN, &mut rng),
        Err(LifeError::InvalidDensity(_))
    ));
    Ok(())
}

#[test]
fn paste() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(4, 3)?;
    world.paste((2, 1), &[vec![true, false, true], vec![true, true, true]]);
    assert_eq!(world.plaintext(), "....\n..o.\n..oo\n");
    world.paste((-1, -1), &[[true, true], [true, true]]);
    assert_eq!(world.plaintext(), "o...\n..o.\n..oo\n");
    Ok(())
}

#[test]
fn rle() -> Result<(), Box<dyn Error>> {
    let world = World::from_plaintext("o.\n.o\n")?;
    assert_eq!(world.rle(), "x = 2, y = 2, rule = B3/S23\no.$\n.o!\n");
    assert_eq!(world.to_string(), "o.\n.o\n");
    Ok(())
}

#[test]
fn from_plaintext() -> Result<(), Box<dyn Error>> {
    let world: World = "!Name: Glider\n.O\n..O\nOOO\n".parse()?;
    assert_eq!((world.width(), world.height()), (3, 3));
    assert_eq!(world.plaintext(), ".o.\n..o\nooo\n");
    assert_eq!(World::from_plaintext("o.x"), Err(LifeError::InvalidChar('x')));
    assert_eq!(World::from_plaintext(""), Err(LifeError::NonPositiveError));
    Ok(())
}

#[test]
fn variants_cycle() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 7);
    for pattern in catalog.patterns() {
        let count = pattern.variant_count();
        assert!(count > 0);
        for start in 0..count {
            let mut index = start;
            for _ in 0..count {
                index = pattern.next_variant_index(index);
            }
            assert_eq!(index, start);
            assert_eq!(
                pattern.previous_variant_index(pattern.next_variant_index(start)),
                start
            );
        }
        assert_eq!(pattern.previous_variant_index(0), count - 1);
        assert_eq!(pattern.variant(-1), pattern.variants[count - 1]);
        assert_eq!(pattern.variant(count as isize), pattern.variants[0]);
    }
}

#[test]
fn catalog_lookup() -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.variant("GLIDER", 5)?, catalog.variant("Glider", 1)?);
    assert_eq!(catalog.position("r-pentomino"), Some(5));
    assert_eq!(
        catalog.variant("Spaceship", 0),
        Err(LifeError::UnknownPattern(String::from("Spaceship")))
    );
    Ok(())
}
