use phantom_gen::{lattice_coefficients, pitch_short, rod_count, sector_points, Error, Point};

#[test]
fn coefficients() {
    assert!(lattice_coefficients(0).is_empty());
    assert_eq!(lattice_coefficients(1), vec![(0, 0)]);
    for n in 1 .. 12 {
        let c = lattice_coefficients(n);
        assert_eq!(c.len(), n * (n + 1) / 2);
        assert_eq!(c.len(), rod_count(n));
        for &(short, long) in &c {
            assert!(long.abs() <= short);
            assert_eq!((short + long) % 2, 0);
        }
        // Row L holds L+1 entries
        for layer in 0 .. n as i64 {
            assert_eq!(c.iter().filter(|&&(s, _)| s == layer).count() as i64, layer + 1);
        }
    }
}

#[test]
fn short_pitch() {
    assert_eq!(pitch_short(1), 1);
    assert_eq!(pitch_short(2), 3);
    assert_eq!(pitch_short(3), 5);
    assert_eq!(pitch_short(8), 13);
}

#[test]
fn sector_zero_layout() {
    let base = Point::new(63, 50);
    let p = sector_points(base, 2, 3, 0).unwrap();
    assert_eq!(p, vec![
        Point::new(63, 50),
        Point::new(66, 48), Point::new(66, 52),
        Point::new(69, 46), Point::new(69, 50), Point::new(69, 54),
    ]);
}

#[test]
fn sector_sizes() {
    let base = Point::new(0, 0);
    for s in 0 .. 6 {
        assert!(sector_points(base, 3, 0, s).unwrap().is_empty());
        for n in 1 .. 8 {
            let p = sector_points(base, 3, n, s).unwrap();
            assert_eq!(p.len(), rod_count(n));
            assert_eq!(p[0], base);
        }
    }
}

#[test]
fn sectors_are_rotations() {
    let base = Point::new(100, 100);
    let pts: Vec<Vec<Point>> = (0 .. 6)
        .map(|s| sector_points(base, 4, 6, s).unwrap())
        .collect();
    // Half turn is an exact point reflection through the anchor
    for s in 0 .. 3 {
        for (a, b) in pts[s].iter().zip(pts[s + 3].iter()) {
            assert_eq!(*b - base, -(*a - base));
        }
    }
    // Outer corner of sector 1 lies straight above the anchor
    let ph = 4;
    let last = *pts[1].last().unwrap();
    assert_eq!(last, Point::new(base.x, base.y + 2 * 5 * ph));
    // Sector 0 opens along +x, sector 3 along -x
    assert!(pts[0][1..].iter().all(|p| p.x > base.x));
    assert!(pts[3][1..].iter().all(|p| p.x < base.x));
    // Sectors 1 and 2 open upward, 4 and 5 downward
    for s in &[1, 2] {
        assert!(pts[*s][1..].iter().all(|p| p.y > base.y));
    }
    for s in &[4, 5] {
        assert!(pts[*s][1..].iter().all(|p| p.y < base.y));
    }
}

#[test]
fn nearest_neighbours_keep_pitch() {
    // Every rod after the apex has a neighbour one pitch away, within
    // the error of the floored row spacing
    let ph = 5;
    let pitch = 2.0 * ph as f64;
    for s in 0 .. 6 {
        let p = sector_points(Point::new(0, 0), ph, 5, s).unwrap();
        for a in &p[1..] {
            let nearest = p.iter()
                .filter(|b| *b != a)
                .map(|b| (a.dist2(*b) as f64).sqrt())
                .fold(f64::MAX, f64::min);
            assert!((nearest - pitch).abs() < 1.0, "sector {} nearest {}", s, nearest);
        }
    }
}

#[test]
fn invalid_input() {
    let base = Point::new(0, 0);
    match sector_points(base, 2, 3, 6) {
        Err(Error::InvalidSector(6)) => {},
        other => panic!("expected invalid sector, got {:?}", other),
    }
    match sector_points(base, 0, 3, 0) {
        Err(Error::InvalidPitch(0)) => {},
        other => panic!("expected invalid pitch, got {:?}", other),
    }
}
