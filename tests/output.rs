use std::fs;

use phantom_gen::{build, check_outdir, data_file_name, grid_to_array, plot_file_name, read_file,
                  render_plot, save_all, save_npz, save_png, Error, PlotOptions, Point};

#[test]
fn file_names() {
    let p = build("disk", (120, 80), None, None).unwrap();
    assert_eq!(data_file_name(&p), "disk_phantom_data_120x80.npz");
    assert_eq!(plot_file_name(&p), "disk_phantom_plot_120x80.png");
}

#[test]
fn missing_outdir() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    match check_outdir(&missing) {
        Err(Error::MissingOutputDir(p)) => assert_eq!(p, missing),
        other => panic!("expected missing output dir, got {:?}", other),
    }
    let p = build("dot", (10, 10), None, None).unwrap();
    assert!(save_all(&p, &missing, &PlotOptions::default()).is_err());
    // Directory is never created
    assert!(!missing.exists());
}

#[test]
fn save_all_writes_both() {
    let dir = tempfile::tempdir().unwrap();
    let p = build("derenzo", (64, 64), None, None).unwrap();
    let paths = save_all(&p, dir.path(), &PlotOptions::default()).unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], dir.path().join("derenzo_phantom_data_64x64.npz"));
    assert_eq!(paths[1], dir.path().join("derenzo_phantom_plot_64x64.png"));
    for path in &paths {
        assert!(fs::metadata(path).unwrap().len() > 0);
    }
}

#[test]
fn npz_is_zip_archive() {
    let dir = tempfile::tempdir().unwrap();
    let p = build("disk", (32, 32), None, None).unwrap();
    let f = dir.path().join(data_file_name(&p));
    save_npz(&p, &f).unwrap();
    let bytes = fs::read(&f).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn array_layout() {
    let p = build("dot", (6, 4), Some(Point::new(5, 1)), None).unwrap();
    let a = grid_to_array(p.image());
    assert_eq!(a.dim(), (6, 4));
    assert_eq!(a[[5, 1]], 10.0);
    assert_eq!(a.sum(), 10.0);
    let m = grid_to_array(p.mask());
    assert_eq!(m[[5, 1]], 1);
}

#[test]
fn plot_orientation() {
    // Dot near the bottom left corner of a 5x4 grid
    let p = build("dot", (5, 4), Some(Point::new(1, 0)), None).unwrap();
    let opts = PlotOptions { scale: 1, gap: 3, colorbar: 0, ..PlotOptions::default() };
    let img = render_plot(&p, &opts);
    assert_eq!(img.dimensions(), (13, 4));
    // Image panel: y = 0 is the last row
    assert_eq!(img.get_pixel(1, 3)[0], 255);
    assert_eq!(img.get_pixel(1, 0)[0], 0);
    assert_eq!(img.get_pixel(0, 3)[0], 0);
    // Gap is white
    assert_eq!(img.get_pixel(5, 0)[0], 255);
    // Mask panel: label 1 on the 0 to 10 scale
    let grey = img.get_pixel(5 + 3 + 1, 3)[0];
    assert_eq!(grey, (255.0f64 / 10.0).round() as u8);
    assert_eq!(img.get_pixel(5 + 3, 3)[0], 0);
}

#[test]
fn plot_scaled_png() {
    let dir = tempfile::tempdir().unwrap();
    let p = build("disk", (20, 10), None, Some(3)).unwrap();
    let f = dir.path().join(plot_file_name(&p));
    let opts = PlotOptions { scale: 2, gap: 4, ..PlotOptions::default() };
    save_png(&p, &f, &opts).unwrap();
    let (data, w, h) = read_file(&f).unwrap();
    assert_eq!((w, h), (2 * 20 * 2 + 2 * 4 + 12, 10 * 2));
    assert_eq!(data.len(), w * h);
    // Center of the disk at (10, 5) covers plot rows 8..10 and columns 20..22
    assert_eq!(data[8 * w + 20], 255);
    assert_eq!(data[9 * w + 21], 255);
    // Colorbar in the last columns, white on top
    assert_eq!(data[w - 1], 255);
    assert_eq!(data[(h - 1) * w + w - 1], 0);
}

#[test]
fn plot_colorbar() {
    let p = build("dot", (4, 6), None, None).unwrap();
    let opts = PlotOptions { scale: 1, gap: 2, colorbar: 3, ..PlotOptions::default() };
    let img = render_plot(&p, &opts);
    // Two panels, two gaps, then the bar
    assert_eq!(img.dimensions(), (4 + 2 + 4 + 2 + 3, 6));
    for col in 12 .. 15 {
        assert_eq!(img.get_pixel(col, 0)[0], 255);
        assert_eq!(img.get_pixel(col, 5)[0], 0);
    }
    // Brightness falls monotonically from top to bottom
    let bar: Vec<u8> = (0 .. 6).map(|row| img.get_pixel(12, row)[0]).collect();
    assert!(bar.windows(2).all(|v| v[0] > v[1]), "{:?}", bar);
    // Gap before the bar stays white
    assert_eq!(img.get_pixel(10, 5)[0], 255);
    assert_eq!(img.get_pixel(11, 5)[0], 255);
}
